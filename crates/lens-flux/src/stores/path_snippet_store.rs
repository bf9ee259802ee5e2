//! Path snippet store

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::actions::{PathPayload, PathSnippetActions, SnippetPayload};
use crate::store::{Store, StoreCore, StoreId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathSnippetStoreData {
    pub path: Option<String>,
    pub snippet: Option<String>,
}

pub struct PathSnippetStore {
    core: StoreCore<PathSnippetStoreData>,
    path_snippet_actions: Rc<PathSnippetActions>,
}

impl PathSnippetStore {
    pub fn new(path_snippet_actions: Rc<PathSnippetActions>) -> Self {
        Self {
            core: StoreCore::new(),
            path_snippet_actions,
        }
    }

    pub fn initialize(&self) {
        self.core.set_initial(PathSnippetStoreData::default());

        let core = self.core.clone();
        self.path_snippet_actions
            .add_path
            .register_callback(move |payload: &PathPayload| {
                core.transition(|state| {
                    state.path = Some(payload.path.clone());
                    // A new path invalidates the previously resolved snippet.
                    state.snippet = None;
                });
            });

        let core = self.core.clone();
        self.path_snippet_actions
            .add_snippet
            .register_callback(move |payload: &SnippetPayload| {
                core.transition(|state| state.snippet = Some(payload.snippet.clone()));
            });

        let core = self.core.clone();
        self.path_snippet_actions
            .clear_data
            .register_callback(move |_| {
                core.transition(|state| *state = PathSnippetStoreData::default());
            });
    }

    pub fn get_state(&self) -> PathSnippetStoreData {
        self.core.get_state()
    }
}

impl Store for PathSnippetStore {
    fn id(&self) -> StoreId {
        StoreId::PathSnippet
    }

    fn add_changed_listener(&self, listener: Box<dyn Fn()>) {
        self.core.add_changed_listener(listener);
    }
}
