//! Per-visualization scan result actions

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::actions::visualization::VisualizationType;

/// A completed scan for one visualization: the selectors of every element the
/// scan flagged, fully qualified against the page frame hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizationScanCompletedPayload {
    pub test: VisualizationType,
    pub selectors: Vec<String>,
}

pub struct VisualizationScanResultActions {
    pub scan_completed: Action<VisualizationScanCompletedPayload>,
    pub clear_results: Action<()>,
}

impl VisualizationScanResultActions {
    pub fn new() -> Self {
        Self {
            scan_completed: Action::new(),
            clear_results: Action::new(),
        }
    }
}

impl Default for VisualizationScanResultActions {
    fn default() -> Self {
        Self::new()
    }
}
