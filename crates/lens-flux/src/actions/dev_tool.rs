//! Dev tools actions

use serde::{Deserialize, Serialize};

use crate::action::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevToolStatusPayload {
    pub is_open: bool,
}

/// Element the user asked the dev tools to inspect, as a selector path from
/// the top frame down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectElementPayload {
    pub target: Vec<String>,
    pub frame_url: Option<String>,
}

pub struct DevToolActions {
    pub status_changed: Action<DevToolStatusPayload>,
    pub inspect_element: Action<InspectElementPayload>,
}

impl DevToolActions {
    pub fn new() -> Self {
        Self {
            status_changed: Action::new(),
            inspect_element: Action::new(),
        }
    }
}

impl Default for DevToolActions {
    fn default() -> Self {
        Self::new()
    }
}
