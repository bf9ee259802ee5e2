//! The cross-context message catalog
//!
//! Wire shape: `{ "messageType": <string>, "payload": <object> }`. Each
//! message type is a tagged variant carrying a strongly shaped payload, so
//! malformed payloads are rejected at the decode boundary instead of
//! surfacing as runtime shape errors inside a store transition.
//!
//! A payload the catalog does not know is a decode error; the receiving side
//! logs it and drops the message (non-fatal, see [`decode_message`]).

use serde::{Deserialize, Serialize};

use lens_flux::actions::{
    DevToolStatusPayload, FeatureFlagPayload, HoveredSelectorPayload, InspectElementPayload,
    InspectModePayload, PathPayload, SetLaunchPanelPayload, SnippetPayload, TabPayload,
    TabVisibilityPayload, UnifiedScanCompletedPayload, VisualizationScanCompletedPayload,
    VisualizationType,
};

use crate::telemetry::TelemetryData;

/// Issue details captured from a failed rule instance, forwarded verbatim to
/// the issue-filing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueDetailsData {
    pub page_title: String,
    pub page_url: String,
    pub rule_id: String,
    pub help: String,
    pub help_url: String,
    pub selector: String,
    pub snippet: String,
    pub failure_summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "messageType", content = "payload")]
pub enum Message {
    // Details view / settings
    #[serde(rename = "settings-panel/open")]
    SettingsPanelOpen { telemetry: TelemetryData },
    #[serde(rename = "settings-panel/close")]
    SettingsPanelClose,
    #[serde(rename = "preview-features/open")]
    OpenPreviewFeaturesPanel,
    #[serde(rename = "preview-features/close")]
    ClosePreviewFeaturesPanel,

    // Issue filing
    #[serde(rename = "issue-filing/file-issue")]
    FileIssue {
        service: String,
        issue_data: IssueDetailsData,
        telemetry: TelemetryData,
    },

    // Device connect
    #[serde(rename = "device-connect/validate-port")]
    ValidatePort { port: u16 },

    // Tab lifecycle (forwarded from the browser event layer)
    #[serde(rename = "tab/new")]
    NewTab(TabPayload),
    #[serde(rename = "tab/updated")]
    TabUpdated(TabPayload),
    #[serde(rename = "tab/removed")]
    TabRemoved,
    #[serde(rename = "tab/visibility")]
    TabVisibilityChanged(TabVisibilityPayload),

    // Visualization toggles
    #[serde(rename = "visualization/enable")]
    EnableVisualization {
        test: VisualizationType,
        telemetry: Option<TelemetryData>,
    },
    #[serde(rename = "visualization/disable")]
    DisableVisualization {
        test: VisualizationType,
        telemetry: Option<TelemetryData>,
    },

    #[serde(rename = "visualization/disable-all")]
    DisableAllVisualizations,
    #[serde(rename = "visualization/scan-started")]
    VisualizationScanStarted { test: VisualizationType },
    #[serde(rename = "visualization-scan/completed")]
    VisualizationScanCompleted(VisualizationScanCompletedPayload),
    #[serde(rename = "visualization-scan/clear")]
    ClearVisualizationScanResults,

    // Dev tools
    #[serde(rename = "dev-tools/status")]
    DevToolStatusChanged(DevToolStatusPayload),
    #[serde(rename = "dev-tools/inspect")]
    InspectElement(InspectElementPayload),

    // Inspect mode
    #[serde(rename = "inspect/change-mode")]
    ChangeInspectMode(InspectModePayload),
    #[serde(rename = "inspect/set-hovered-selector")]
    SetHoveredOverSelector(HoveredSelectorPayload),

    // Path snippet
    #[serde(rename = "path-snippet/add-path")]
    AddPathForValidation(PathPayload),
    #[serde(rename = "path-snippet/add-snippet")]
    AddCorrespondingSnippet(SnippetPayload),
    #[serde(rename = "path-snippet/clear")]
    ClearPathSnippetData,

    // Unified scan results
    #[serde(rename = "unified-scan/completed")]
    UnifiedScanCompleted(UnifiedScanCompletedPayload),

    // Feature flags
    #[serde(rename = "feature-flags/set")]
    SetFeatureFlag(FeatureFlagPayload),
    #[serde(rename = "feature-flags/reset")]
    ResetFeatureFlags,

    // Launch panel
    #[serde(rename = "launch-panel/set")]
    SetLaunchPanelType(SetLaunchPanelPayload),
}

/// Decode one wire message. An unknown `messageType` or a payload that does
/// not match its catalog shape is an `Err`; the caller logs and drops it.
pub fn decode_message(raw: &str) -> Result<Message, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::{TelemetryEventSource, TriggeredBy};

    #[test]
    fn messages_carry_the_wire_tag_and_payload_shape() {
        let msg = Message::SettingsPanelOpen {
            telemetry: TelemetryData::SettingsPanelOpen {
                triggered_by: TriggeredBy::MouseClick,
                source: TelemetryEventSource::DetailsView,
                source_item: "menu".to_string(),
            },
        };

        let wire = serde_json::to_value(&msg).unwrap();
        assert_eq!(wire["messageType"], "settings-panel/open");
        assert!(wire["payload"]["telemetry"].is_object());
    }

    #[test]
    fn unknown_message_type_fails_to_decode() {
        let raw = r#"{"messageType":"no-such-feature/do-it","payload":{}}"#;
        assert!(decode_message(raw).is_err());
    }

    #[test]
    fn malformed_payload_fails_to_decode() {
        let raw = r#"{"messageType":"device-connect/validate-port","payload":{"port":"not-a-number"}}"#;
        assert!(decode_message(raw).is_err());
    }

    #[test]
    fn validate_port_round_trips() {
        let raw = r#"{"messageType":"device-connect/validate-port","payload":{"port":62442}}"#;
        assert_eq!(
            decode_message(raw).unwrap(),
            Message::ValidatePort { port: 62442 }
        );
    }
}
