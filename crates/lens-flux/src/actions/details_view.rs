//! Details view panel actions

use crate::action::Action;

/// Actions for the details-view surface: which side panels are open.
pub struct DetailsViewActions {
    pub open_settings_panel: Action<()>,
    pub close_settings_panel: Action<()>,
    pub open_preview_features_panel: Action<()>,
    pub close_preview_features_panel: Action<()>,
}

impl DetailsViewActions {
    pub fn new() -> Self {
        Self {
            open_settings_panel: Action::new(),
            close_settings_panel: Action::new(),
            open_preview_features_panel: Action::new(),
            close_preview_features_panel: Action::new(),
        }
    }
}

impl Default for DetailsViewActions {
    fn default() -> Self {
        Self::new()
    }
}
