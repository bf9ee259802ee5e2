//! Action bundles, one per state domain
//!
//! Each bundle is a struct of named [`Action`](crate::action::Action)
//! instances together with the strongly shaped payload types those actions
//! carry. Payloads are plain serde-derived data - there is no duck typing
//! across the action boundary.

pub mod details_view;
pub mod dev_tool;
pub mod feature_flag;
pub mod inspect;
pub mod launch_panel;
pub mod path_snippet;
pub mod tab;
pub mod unified_scan_result;
pub mod visualization;
pub mod visualization_scan_result;

pub use details_view::DetailsViewActions;
pub use dev_tool::{DevToolActions, DevToolStatusPayload, InspectElementPayload};
pub use feature_flag::{FeatureFlagActions, FeatureFlagPayload};
pub use inspect::{HoveredSelectorPayload, InspectActions, InspectMode, InspectModePayload};
pub use launch_panel::{LaunchPanelActions, LaunchPanelType, SetLaunchPanelPayload};
pub use path_snippet::{PathPayload, PathSnippetActions, SnippetPayload};
pub use tab::{TabActions, TabPayload, TabVisibilityPayload};
pub use unified_scan_result::{
    InstanceResultStatus, UnifiedResult, UnifiedRule, UnifiedScanCompletedPayload,
    UnifiedScanResultActions,
};
pub use visualization::{VisualizationActions, VisualizationTogglePayload, VisualizationType};
pub use visualization_scan_result::{
    VisualizationScanCompletedPayload, VisualizationScanResultActions,
};
