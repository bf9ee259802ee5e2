//! Domain stores
//!
//! One store per state domain. Every store follows the same shape: a state
//! type, a constructor taking exactly the action bundles the store declares,
//! an `initialize()` that sets the starting snapshot and subscribes the
//! transitions, and a typed `get_state()` snapshot read.

mod details_view_store;
mod dev_tool_store;
mod feature_flag_store;
mod inspect_store;
mod launch_panel_store;
mod path_snippet_store;
mod tab_store;
mod unified_scan_result_store;
mod visualization_scan_result_store;
mod visualization_store;

pub use details_view_store::{DetailsViewStore, DetailsViewStoreData};
pub use dev_tool_store::{DevToolStore, DevToolStoreData};
pub use feature_flag_store::{FeatureFlagDefaults, FeatureFlagStore, FeatureFlagStoreData};
pub use inspect_store::{InspectStore, InspectStoreData};
pub use launch_panel_store::{LaunchPanelStore, LaunchPanelStoreData};
pub use path_snippet_store::{PathSnippetStore, PathSnippetStoreData};
pub use tab_store::{TabStore, TabStoreData};
pub use unified_scan_result_store::{UnifiedScanResultStore, UnifiedScanResultStoreData};
pub use visualization_scan_result_store::{
    VisualizationScanResultStore, VisualizationScanResultStoreData,
};
pub use visualization_store::{VisualizationDefaults, VisualizationStore, VisualizationStoreData};
