//! Details view store: side panel visibility

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::actions::DetailsViewActions;
use crate::store::{Store, StoreCore, StoreId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DetailsViewStoreData {
    pub is_settings_panel_open: bool,
    pub is_preview_features_panel_open: bool,
}

pub struct DetailsViewStore {
    core: StoreCore<DetailsViewStoreData>,
    details_view_actions: Rc<DetailsViewActions>,
}

impl DetailsViewStore {
    pub fn new(details_view_actions: Rc<DetailsViewActions>) -> Self {
        Self {
            core: StoreCore::new(),
            details_view_actions,
        }
    }

    pub fn initialize(&self) {
        self.core.set_initial(DetailsViewStoreData::default());

        let core = self.core.clone();
        self.details_view_actions
            .open_settings_panel
            .register_callback(move |_| {
                core.transition(|state| state.is_settings_panel_open = true);
            });

        let core = self.core.clone();
        self.details_view_actions
            .close_settings_panel
            .register_callback(move |_| {
                core.transition(|state| state.is_settings_panel_open = false);
            });

        let core = self.core.clone();
        self.details_view_actions
            .open_preview_features_panel
            .register_callback(move |_| {
                core.transition(|state| state.is_preview_features_panel_open = true);
            });

        let core = self.core.clone();
        self.details_view_actions
            .close_preview_features_panel
            .register_callback(move |_| {
                core.transition(|state| state.is_preview_features_panel_open = false);
            });
    }

    pub fn get_state(&self) -> DetailsViewStoreData {
        self.core.get_state()
    }
}

impl Store for DetailsViewStore {
    fn id(&self) -> StoreId {
        StoreId::DetailsView
    }

    fn add_changed_listener(&self, listener: Box<dyn Fn()>) {
        self.core.add_changed_listener(listener);
    }
}
