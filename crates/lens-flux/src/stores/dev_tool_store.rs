//! Dev tools store

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::actions::{DevToolActions, DevToolStatusPayload, InspectElementPayload};
use crate::store::{Store, StoreCore, StoreId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DevToolStoreData {
    pub is_open: bool,
    /// Selector path of the element the user asked to inspect, if any.
    pub inspect_element: Option<Vec<String>>,
    pub frame_url: Option<String>,
}

pub struct DevToolStore {
    core: StoreCore<DevToolStoreData>,
    dev_tool_actions: Rc<DevToolActions>,
}

impl DevToolStore {
    pub fn new(dev_tool_actions: Rc<DevToolActions>) -> Self {
        Self {
            core: StoreCore::new(),
            dev_tool_actions,
        }
    }

    pub fn initialize(&self) {
        self.core.set_initial(DevToolStoreData::default());

        let core = self.core.clone();
        self.dev_tool_actions.status_changed.register_callback(
            move |payload: &DevToolStatusPayload| {
                core.transition(|state| {
                    state.is_open = payload.is_open;
                    if !payload.is_open {
                        state.inspect_element = None;
                        state.frame_url = None;
                    }
                });
            },
        );

        let core = self.core.clone();
        self.dev_tool_actions.inspect_element.register_callback(
            move |payload: &InspectElementPayload| {
                core.transition(|state| {
                    state.inspect_element = Some(payload.target.clone());
                    state.frame_url = payload.frame_url.clone();
                });
            },
        );
    }

    pub fn get_state(&self) -> DevToolStoreData {
        self.core.get_state()
    }
}

impl Store for DevToolStore {
    fn id(&self) -> StoreId {
        StoreId::DevTool
    }

    fn add_changed_listener(&self, listener: Box<dyn Fn()>) {
        self.core.add_changed_listener(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_dev_tools_clears_the_inspect_target() {
        let actions = Rc::new(DevToolActions::new());
        let store = DevToolStore::new(Rc::clone(&actions));
        store.initialize();

        actions
            .status_changed
            .invoke(&DevToolStatusPayload { is_open: true });
        actions.inspect_element.invoke(&InspectElementPayload {
            target: vec!["#app".to_string(), "button".to_string()],
            frame_url: None,
        });
        assert!(store.get_state().inspect_element.is_some());

        actions
            .status_changed
            .invoke(&DevToolStatusPayload { is_open: false });

        let state = store.get_state();
        assert!(!state.is_open);
        assert_eq!(state.inspect_element, None);
    }
}
