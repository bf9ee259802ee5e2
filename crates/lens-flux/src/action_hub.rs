//! Action hub: the full action catalog for one execution context
//!
//! One hub is constructed at context entry (background process, or an
//! isolated popup/content-script instance) and threaded by reference into
//! every store hub built in that context. There is no ambient/static hub;
//! ownership is explicit and construction happens exactly once.
//!
//! Bundles are reference-counted so that each store can be handed only the
//! slices it declares - a store can never observe actions outside its
//! constructor parameter list.

use std::rc::Rc;

use crate::actions::{
    DetailsViewActions, DevToolActions, FeatureFlagActions, InspectActions, LaunchPanelActions,
    PathSnippetActions, TabActions, UnifiedScanResultActions, VisualizationActions,
    VisualizationScanResultActions,
};

pub struct ActionHub {
    pub tab: Rc<TabActions>,
    pub visualization: Rc<VisualizationActions>,
    pub visualization_scan_result: Rc<VisualizationScanResultActions>,
    pub dev_tool: Rc<DevToolActions>,
    pub details_view: Rc<DetailsViewActions>,
    pub inspect: Rc<InspectActions>,
    pub path_snippet: Rc<PathSnippetActions>,
    pub unified_scan_result: Rc<UnifiedScanResultActions>,
    pub feature_flag: Rc<FeatureFlagActions>,
    pub launch_panel: Rc<LaunchPanelActions>,
}

impl ActionHub {
    /// Build the complete action catalog. Immutable after construction:
    /// bundles are added here and nowhere else.
    pub fn new() -> Self {
        Self {
            tab: Rc::new(TabActions::new()),
            visualization: Rc::new(VisualizationActions::new()),
            visualization_scan_result: Rc::new(VisualizationScanResultActions::new()),
            dev_tool: Rc::new(DevToolActions::new()),
            details_view: Rc::new(DetailsViewActions::new()),
            inspect: Rc::new(InspectActions::new()),
            path_snippet: Rc::new(PathSnippetActions::new()),
            unified_scan_result: Rc::new(UnifiedScanResultActions::new()),
            feature_flag: Rc::new(FeatureFlagActions::new()),
            launch_panel: Rc::new(LaunchPanelActions::new()),
        }
    }
}

impl Default for ActionHub {
    fn default() -> Self {
        Self::new()
    }
}
