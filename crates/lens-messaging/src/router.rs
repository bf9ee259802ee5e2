//! Background-side message routing
//!
//! Exactly one routing target per message type: the router translates each
//! decoded [`Message`] into the matching action-hub invocation, publishing
//! any telemetry the payload carries. Messages addressing a domain this
//! context does not host fall through to stores with no listeners, which is
//! a supported no-op.

use std::rc::Rc;

use lens_flux::actions::VisualizationTogglePayload;
use lens_flux::ActionHub;

use crate::message::Message;
use crate::telemetry::{
    TelemetryData, TelemetryEventHandler, TelemetryEventSource, FILE_ISSUE_CLICK, VALIDATE_PORT,
};

pub struct MessageRouter {
    tab: Rc<lens_flux::actions::TabActions>,
    visualization: Rc<lens_flux::actions::VisualizationActions>,
    visualization_scan_result: Rc<lens_flux::actions::VisualizationScanResultActions>,
    details_view: Rc<lens_flux::actions::DetailsViewActions>,
    dev_tool: Rc<lens_flux::actions::DevToolActions>,
    inspect: Rc<lens_flux::actions::InspectActions>,
    path_snippet: Rc<lens_flux::actions::PathSnippetActions>,
    unified_scan_result: Rc<lens_flux::actions::UnifiedScanResultActions>,
    feature_flag: Rc<lens_flux::actions::FeatureFlagActions>,
    launch_panel: Rc<lens_flux::actions::LaunchPanelActions>,
    telemetry: Rc<dyn TelemetryEventHandler>,
}

impl MessageRouter {
    pub fn new(actions: &ActionHub, telemetry: Rc<dyn TelemetryEventHandler>) -> Self {
        Self {
            tab: Rc::clone(&actions.tab),
            visualization: Rc::clone(&actions.visualization),
            visualization_scan_result: Rc::clone(&actions.visualization_scan_result),
            details_view: Rc::clone(&actions.details_view),
            dev_tool: Rc::clone(&actions.dev_tool),
            inspect: Rc::clone(&actions.inspect),
            path_snippet: Rc::clone(&actions.path_snippet),
            unified_scan_result: Rc::clone(&actions.unified_scan_result),
            feature_flag: Rc::clone(&actions.feature_flag),
            launch_panel: Rc::clone(&actions.launch_panel),
            telemetry,
        }
    }

    /// Apply one message to this context's action hub.
    pub fn route(&self, message: Message) {
        log::debug!("routing message: {message:?}");
        match message {
            Message::SettingsPanelOpen { telemetry } => {
                self.telemetry
                    .publish_telemetry(crate::telemetry::SETTINGS_PANEL_OPEN, &telemetry);
                self.details_view.open_settings_panel.invoke(&());
            }
            Message::SettingsPanelClose => {
                self.details_view.close_settings_panel.invoke(&());
            }
            Message::OpenPreviewFeaturesPanel => {
                self.details_view.open_preview_features_panel.invoke(&());
            }
            Message::ClosePreviewFeaturesPanel => {
                self.details_view.close_preview_features_panel.invoke(&());
            }

            Message::FileIssue {
                service, telemetry, ..
            } => {
                // The issue-filing service itself is a downstream consumer;
                // the core records the intent and emits the telemetry.
                log::info!("issue filing requested via service '{service}'");
                self.telemetry.publish_telemetry(FILE_ISSUE_CLICK, &telemetry);
            }

            Message::ValidatePort { port } => {
                let data = TelemetryData::Port {
                    port,
                    source: TelemetryEventSource::ElectronDeviceConnect,
                };
                self.telemetry.publish_telemetry(VALIDATE_PORT, &data);
            }

            Message::NewTab(payload) => self.tab.new_tab.invoke(&payload),
            Message::TabUpdated(payload) => self.tab.tab_updated.invoke(&payload),
            Message::TabRemoved => self.tab.tab_removed.invoke(&()),
            Message::TabVisibilityChanged(payload) => {
                self.tab.visibility_changed.invoke(&payload)
            }

            Message::EnableVisualization { test, telemetry } => {
                if let Some(data) = telemetry {
                    self.telemetry
                        .publish_telemetry(crate::telemetry::TOGGLE_VISUALIZATION, &data);
                }
                self.visualization
                    .enable_visualization
                    .invoke(&VisualizationTogglePayload { test });
            }
            Message::DisableVisualization { test, telemetry } => {
                if let Some(data) = telemetry {
                    self.telemetry
                        .publish_telemetry(crate::telemetry::TOGGLE_VISUALIZATION, &data);
                }
                self.visualization
                    .disable_visualization
                    .invoke(&VisualizationTogglePayload { test });
            }

            Message::DisableAllVisualizations => self.visualization.disable_all.invoke(&()),
            Message::VisualizationScanStarted { test } => {
                self.visualization
                    .scan_started
                    .invoke(&VisualizationTogglePayload { test });
            }
            Message::VisualizationScanCompleted(payload) => {
                // Results land first so the toggle state never reports a
                // finished scan with stale selectors.
                let test = payload.test;
                self.visualization_scan_result.scan_completed.invoke(&payload);
                self.visualization
                    .scan_completed
                    .invoke(&VisualizationTogglePayload { test });
            }
            Message::ClearVisualizationScanResults => {
                self.visualization_scan_result.clear_results.invoke(&())
            }

            Message::DevToolStatusChanged(payload) => {
                self.dev_tool.status_changed.invoke(&payload)
            }
            Message::InspectElement(payload) => self.dev_tool.inspect_element.invoke(&payload),

            Message::ChangeInspectMode(payload) => self.inspect.change_mode.invoke(&payload),
            Message::SetHoveredOverSelector(payload) => {
                self.inspect.set_hovered_over_selector.invoke(&payload)
            }

            Message::AddPathForValidation(payload) => {
                self.path_snippet.add_path.invoke(&payload)
            }
            Message::AddCorrespondingSnippet(payload) => {
                self.path_snippet.add_snippet.invoke(&payload)
            }
            Message::ClearPathSnippetData => self.path_snippet.clear_data.invoke(&()),

            Message::UnifiedScanCompleted(payload) => {
                self.unified_scan_result.scan_completed.invoke(&payload)
            }

            Message::SetFeatureFlag(payload) => {
                self.feature_flag.set_feature_flag.invoke(&payload)
            }
            Message::ResetFeatureFlags => self.feature_flag.reset_feature_flags.invoke(&()),

            Message::SetLaunchPanelType(payload) => {
                self.launch_panel.set_launch_panel_type.invoke(&payload)
            }
        }
    }
}
