//! Launch panel store (global context, browser shell only)

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::actions::{LaunchPanelActions, LaunchPanelType, SetLaunchPanelPayload};
use crate::store::{Store, StoreCore, StoreId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LaunchPanelStoreData {
    pub panel_type: LaunchPanelType,
}

pub struct LaunchPanelStore {
    core: StoreCore<LaunchPanelStoreData>,
    launch_panel_actions: Rc<LaunchPanelActions>,
}

impl LaunchPanelStore {
    pub fn new(launch_panel_actions: Rc<LaunchPanelActions>) -> Self {
        Self {
            core: StoreCore::new(),
            launch_panel_actions,
        }
    }

    pub fn initialize(&self) {
        self.core.set_initial(LaunchPanelStoreData::default());

        let core = self.core.clone();
        self.launch_panel_actions
            .set_launch_panel_type
            .register_callback(move |payload: &SetLaunchPanelPayload| {
                core.transition(|state| state.panel_type = payload.panel_type);
            });
    }

    pub fn get_state(&self) -> LaunchPanelStoreData {
        self.core.get_state()
    }
}

impl Store for LaunchPanelStore {
    fn id(&self) -> StoreId {
        StoreId::LaunchPanel
    }

    fn add_changed_listener(&self, listener: Box<dyn Fn()>) {
        self.core.add_changed_listener(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_type_follows_the_last_payload() {
        let actions = Rc::new(LaunchPanelActions::new());
        let store = LaunchPanelStore::new(Rc::clone(&actions));
        store.initialize();

        assert_eq!(store.get_state().panel_type, LaunchPanelType::LaunchPad);

        actions.set_launch_panel_type.invoke(&SetLaunchPanelPayload {
            panel_type: LaunchPanelType::AdhocToolsPanel,
        });
        assert_eq!(
            store.get_state().panel_type,
            LaunchPanelType::AdhocToolsPanel
        );
    }
}
