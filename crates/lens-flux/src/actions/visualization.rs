//! Visualization toggle actions

use serde::{Deserialize, Serialize};

use crate::action::Action;

/// The ad-hoc visualizations the target page can overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualizationType {
    Headings,
    Landmarks,
    Color,
    TabStops,
    Issues,
}

impl VisualizationType {
    /// All known visualization types, in presentation order.
    pub fn all() -> [VisualizationType; 5] {
        [
            VisualizationType::Headings,
            VisualizationType::Landmarks,
            VisualizationType::Color,
            VisualizationType::TabStops,
            VisualizationType::Issues,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizationTogglePayload {
    pub test: VisualizationType,
}

/// Actions for the visualization toggle domain.
pub struct VisualizationActions {
    pub enable_visualization: Action<VisualizationTogglePayload>,
    pub disable_visualization: Action<VisualizationTogglePayload>,
    /// Turn every visualization off (e.g. on panel close).
    pub disable_all: Action<()>,
    pub scan_started: Action<VisualizationTogglePayload>,
    pub scan_completed: Action<VisualizationTogglePayload>,
}

impl VisualizationActions {
    pub fn new() -> Self {
        Self {
            enable_visualization: Action::new(),
            disable_visualization: Action::new(),
            disable_all: Action::new(),
            scan_started: Action::new(),
            scan_completed: Action::new(),
        }
    }
}

impl Default for VisualizationActions {
    fn default() -> Self {
        Self::new()
    }
}
