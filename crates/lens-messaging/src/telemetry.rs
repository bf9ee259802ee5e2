//! Telemetry events
//!
//! The core guarantees that telemetry is emitted at the right moments, not
//! what a backend does with it. Data is strongly shaped per event family and
//! published fire-and-forget: a failing client is logged and never surfaces
//! to the caller.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::sync::Arc;

use lens_flux::actions::VisualizationType;

// Event names, as they appear on the wire.
pub const VALIDATE_PORT: &str = "validatePort";
pub const FILE_ISSUE_CLICK: &str = "fileIssueClick";
pub const SETTINGS_PANEL_OPEN: &str = "settingsPanelOpen";
pub const TOGGLE_VISUALIZATION: &str = "toggleVisualization";

/// How the user triggered the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggeredBy {
    #[serde(rename = "keypress")]
    Keypress,
    #[serde(rename = "mouseclick")]
    MouseClick,
    #[serde(rename = "shortcut")]
    Shortcut,
    #[serde(rename = "N/A")]
    NotApplicable,
}

/// Which UI surface the event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TelemetryEventSource {
    TargetPage,
    DetailsView,
    AdHocTools,
    LaunchPad,
    ElectronDeviceConnect,
}

/// One shape per event family; no loose key/value bags cross this boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TelemetryData {
    SettingsPanelOpen {
        triggered_by: TriggeredBy,
        source: TelemetryEventSource,
        source_item: String,
    },
    FileIssueClick {
        triggered_by: TriggeredBy,
        source: TelemetryEventSource,
        service: String,
    },
    Port {
        port: u16,
        source: TelemetryEventSource,
    },
    ToggleVisualization {
        triggered_by: TriggeredBy,
        source: TelemetryEventSource,
        test: VisualizationType,
        enabled: bool,
    },
}

/// Pure construction of telemetry data from event context. Same inputs, same
/// output; no clock, no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelemetryDataFactory;

impl TelemetryDataFactory {
    pub fn for_settings_panel_open(
        &self,
        triggered_by: TriggeredBy,
        source: TelemetryEventSource,
        source_item: &str,
    ) -> TelemetryData {
        TelemetryData::SettingsPanelOpen {
            triggered_by,
            source,
            source_item: source_item.to_string(),
        }
    }

    pub fn for_file_issue_click(
        &self,
        triggered_by: TriggeredBy,
        source: TelemetryEventSource,
        service: &str,
    ) -> TelemetryData {
        TelemetryData::FileIssueClick {
            triggered_by,
            source,
            service: service.to_string(),
        }
    }

    pub fn for_toggle_visualization(
        &self,
        triggered_by: TriggeredBy,
        source: TelemetryEventSource,
        test: VisualizationType,
        enabled: bool,
    ) -> TelemetryData {
        TelemetryData::ToggleVisualization {
            triggered_by,
            source,
            test,
            enabled,
        }
    }
}

/// Backend capability the background context publishes into. Implementations
/// may fail; the handler absorbs and logs those failures.
pub trait TelemetryClient: Send + Sync {
    fn track(&self, event: &str, data: &TelemetryData) -> anyhow::Result<()>;
}

/// Publishes telemetry on behalf of action creators and the message router.
pub trait TelemetryEventHandler {
    fn publish_telemetry(&self, event: &str, data: &TelemetryData);
}

/// Background-context handler: forwards to the injected client,
/// fire-and-forget.
pub struct CoreTelemetryEventHandler {
    client: Arc<dyn TelemetryClient>,
}

impl CoreTelemetryEventHandler {
    pub fn new(client: Arc<dyn TelemetryClient>) -> Rc<Self> {
        Rc::new(Self { client })
    }
}

impl TelemetryEventHandler for CoreTelemetryEventHandler {
    fn publish_telemetry(&self, event: &str, data: &TelemetryData) {
        if let Err(e) = self.client.track(event, data) {
            log::error!("telemetry client failed for '{event}': {e:#}");
        }
    }
}

/// Client that records events to the log only. Used when no backend is
/// configured; keeps emission observable in diagnostics.
pub struct LoggingTelemetryClient;

impl TelemetryClient for LoggingTelemetryClient {
    fn track(&self, event: &str, data: &TelemetryData) -> anyhow::Result<()> {
        log::info!("telemetry: {event} {data:?}");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Records every published event for assertions.
    #[derive(Default)]
    pub struct RecordingTelemetryHandler {
        pub published: Mutex<Vec<(String, TelemetryData)>>,
    }

    impl TelemetryEventHandler for RecordingTelemetryHandler {
        fn publish_telemetry(&self, event: &str, data: &TelemetryData) {
            self.published
                .lock()
                .unwrap()
                .push((event.to_string(), data.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_is_deterministic() {
        let factory = TelemetryDataFactory;
        let a = factory.for_file_issue_click(
            TriggeredBy::MouseClick,
            TelemetryEventSource::TargetPage,
            "gitlab",
        );
        let b = factory.for_file_issue_click(
            TriggeredBy::MouseClick,
            TelemetryEventSource::TargetPage,
            "gitlab",
        );
        assert_eq!(a, b);
    }

    #[test]
    fn handler_swallows_client_failures() {
        struct FailingClient;
        impl TelemetryClient for FailingClient {
            fn track(&self, _: &str, _: &TelemetryData) -> anyhow::Result<()> {
                anyhow::bail!("backend down")
            }
        }

        let handler = CoreTelemetryEventHandler::new(Arc::new(FailingClient));
        // must not panic or propagate
        handler.publish_telemetry(
            VALIDATE_PORT,
            &TelemetryData::Port {
                port: 1,
                source: TelemetryEventSource::ElectronDeviceConnect,
            },
        );
    }
}
