//! Tab lifecycle actions
//!
//! Fired by the background context when the target page tab is created,
//! navigated, hidden or torn down. Several stores subscribe to these: the tab
//! store tracks the snapshot itself, while visualization and inspect stores
//! reset their per-page state when the target page changes.

use serde::{Deserialize, Serialize};

use crate::action::Action;

/// Identity and metadata of the target page tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabPayload {
    pub tab_id: i64,
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabVisibilityPayload {
    pub hidden: bool,
}

/// Actions for the tab lifecycle domain.
pub struct TabActions {
    /// A new target tab has been attached (fresh page, fresh state).
    pub new_tab: Action<TabPayload>,
    /// The existing target tab navigated or changed title.
    pub tab_updated: Action<TabPayload>,
    /// The target tab was closed.
    pub tab_removed: Action<()>,
    /// The target tab was hidden or shown.
    pub visibility_changed: Action<TabVisibilityPayload>,
}

impl TabActions {
    pub fn new() -> Self {
        Self {
            new_tab: Action::new(),
            tab_updated: Action::new(),
            tab_removed: Action::new(),
            visibility_changed: Action::new(),
        }
    }
}

impl Default for TabActions {
    fn default() -> Self {
        Self::new()
    }
}
