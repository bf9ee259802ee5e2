//! Launch panel actions

use serde::{Deserialize, Serialize};

use crate::action::Action;

/// Which panel the browser-action popup opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LaunchPanelType {
    #[default]
    LaunchPad,
    AdhocToolsPanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetLaunchPanelPayload {
    pub panel_type: LaunchPanelType,
}

pub struct LaunchPanelActions {
    pub set_launch_panel_type: Action<SetLaunchPanelPayload>,
}

impl LaunchPanelActions {
    pub fn new() -> Self {
        Self {
            set_launch_panel_type: Action::new(),
        }
    }
}

impl Default for LaunchPanelActions {
    fn default() -> Self {
        Self::new()
    }
}
