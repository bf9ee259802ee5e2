//! Tab store: identity and liveness of the target page tab

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::actions::{TabActions, TabPayload, TabVisibilityPayload};
use crate::store::{Store, StoreCore, StoreId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabStoreData {
    pub id: Option<i64>,
    pub url: Option<String>,
    pub title: Option<String>,
    /// The tab navigated away from the page the current results belong to.
    pub is_changed: bool,
    pub is_closed: bool,
    pub is_page_hidden: bool,
}

pub struct TabStore {
    core: StoreCore<TabStoreData>,
    tab_actions: Rc<TabActions>,
}

impl TabStore {
    pub fn new(tab_actions: Rc<TabActions>) -> Self {
        Self {
            core: StoreCore::new(),
            tab_actions,
        }
    }

    pub fn initialize(&self) {
        self.core.set_initial(TabStoreData::default());

        let core = self.core.clone();
        self.tab_actions
            .new_tab
            .register_callback(move |payload: &TabPayload| {
                core.transition(|state| {
                    *state = TabStoreData {
                        id: Some(payload.tab_id),
                        url: Some(payload.url.clone()),
                        title: Some(payload.title.clone()),
                        ..TabStoreData::default()
                    };
                });
            });

        let core = self.core.clone();
        self.tab_actions
            .tab_updated
            .register_callback(move |payload: &TabPayload| {
                core.transition(|state| {
                    state.url = Some(payload.url.clone());
                    state.title = Some(payload.title.clone());
                    state.is_changed = true;
                });
            });

        let core = self.core.clone();
        self.tab_actions.tab_removed.register_callback(move |_| {
            core.transition(|state| state.is_closed = true);
        });

        let core = self.core.clone();
        self.tab_actions
            .visibility_changed
            .register_callback(move |payload: &TabVisibilityPayload| {
                core.transition(|state| state.is_page_hidden = payload.hidden);
            });
    }

    pub fn get_state(&self) -> TabStoreData {
        self.core.get_state()
    }
}

impl Store for TabStore {
    fn id(&self) -> StoreId {
        StoreId::Tab
    }

    fn add_changed_listener(&self, listener: Box<dyn Fn()>) {
        self.core.add_changed_listener(listener);
    }
}
