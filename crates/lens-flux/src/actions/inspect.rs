//! Inspect mode actions

use serde::{Deserialize, Serialize};

use crate::action::Action;

/// What a click on the target page currently means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InspectMode {
    #[default]
    Off,
    ScopingAddInclude,
    ScopingAddExclude,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectModePayload {
    pub mode: InspectMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoveredSelectorPayload {
    pub selector: String,
}

pub struct InspectActions {
    pub change_mode: Action<InspectModePayload>,
    pub set_hovered_over_selector: Action<HoveredSelectorPayload>,
}

impl InspectActions {
    pub fn new() -> Self {
        Self {
            change_mode: Action::new(),
            set_hovered_over_selector: Action::new(),
        }
    }
}

impl Default for InspectActions {
    fn default() -> Self {
        Self::new()
    }
}
