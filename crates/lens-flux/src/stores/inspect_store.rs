//! Inspect store: what a click on the target page currently does

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::actions::{
    HoveredSelectorPayload, InspectActions, InspectMode, InspectModePayload, TabActions,
};
use crate::store::{Store, StoreCore, StoreId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InspectStoreData {
    pub mode: InspectMode,
    pub hovered_over_selector: Option<String>,
}

pub struct InspectStore {
    core: StoreCore<InspectStoreData>,
    inspect_actions: Rc<InspectActions>,
    tab_actions: Rc<TabActions>,
}

impl InspectStore {
    pub fn new(inspect_actions: Rc<InspectActions>, tab_actions: Rc<TabActions>) -> Self {
        Self {
            core: StoreCore::new(),
            inspect_actions,
            tab_actions,
        }
    }

    pub fn initialize(&self) {
        self.core.set_initial(InspectStoreData::default());

        let core = self.core.clone();
        self.inspect_actions
            .change_mode
            .register_callback(move |payload: &InspectModePayload| {
                core.transition(|state| {
                    state.mode = payload.mode;
                    state.hovered_over_selector = None;
                });
            });

        let core = self.core.clone();
        self.inspect_actions
            .set_hovered_over_selector
            .register_callback(move |payload: &HoveredSelectorPayload| {
                core.transition(|state| {
                    state.hovered_over_selector = Some(payload.selector.clone());
                });
            });

        // Inspect mode is page-scoped; navigation switches it off.
        let core = self.core.clone();
        self.tab_actions.tab_updated.register_callback(move |_| {
            core.transition(|state| *state = InspectStoreData::default());
        });
    }

    pub fn get_state(&self) -> InspectStoreData {
        self.core.get_state()
    }
}

impl Store for InspectStore {
    fn id(&self) -> StoreId {
        StoreId::Inspect
    }

    fn add_changed_listener(&self, listener: Box<dyn Fn()>) {
        self.core.add_changed_listener(listener);
    }
}
