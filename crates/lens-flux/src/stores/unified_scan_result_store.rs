//! Unified scan result store

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::actions::{
    UnifiedResult, UnifiedRule, UnifiedScanCompletedPayload, UnifiedScanResultActions,
};
use crate::store::{Store, StoreCore, StoreId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnifiedScanResultStoreData {
    pub results: Option<Vec<UnifiedResult>>,
    pub rules: Option<Vec<UnifiedRule>>,
    pub target_page_url: Option<String>,
}

pub struct UnifiedScanResultStore {
    core: StoreCore<UnifiedScanResultStoreData>,
    scan_result_actions: Rc<UnifiedScanResultActions>,
}

impl UnifiedScanResultStore {
    pub fn new(scan_result_actions: Rc<UnifiedScanResultActions>) -> Self {
        Self {
            core: StoreCore::new(),
            scan_result_actions,
        }
    }

    pub fn initialize(&self) {
        self.core.set_initial(UnifiedScanResultStoreData::default());

        let core = self.core.clone();
        self.scan_result_actions.scan_completed.register_callback(
            move |payload: &UnifiedScanCompletedPayload| {
                core.transition(|state| {
                    state.results = Some(payload.results.clone());
                    state.rules = Some(payload.rules.clone());
                    state.target_page_url = Some(payload.target_page_url.clone());
                });
            },
        );
    }

    pub fn get_state(&self) -> UnifiedScanResultStoreData {
        self.core.get_state()
    }
}

impl Store for UnifiedScanResultStore {
    fn id(&self) -> StoreId {
        StoreId::UnifiedScanResult
    }

    fn add_changed_listener(&self, listener: Box<dyn Fn()>) {
        self.core.add_changed_listener(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::InstanceResultStatus;

    #[test]
    fn initial_state_has_no_scan() {
        let actions = Rc::new(UnifiedScanResultActions::new());
        let store = UnifiedScanResultStore::new(Rc::clone(&actions));
        store.initialize();

        assert_eq!(store.get_state(), UnifiedScanResultStoreData::default());
    }

    #[test]
    fn scan_completed_replaces_results_and_rules() {
        let actions = Rc::new(UnifiedScanResultActions::new());
        let store = UnifiedScanResultStore::new(Rc::clone(&actions));
        store.initialize();

        let payload = UnifiedScanCompletedPayload {
            results: vec![UnifiedResult {
                uid: "uid-1".to_string(),
                rule_id: "image-alt".to_string(),
                status: InstanceResultStatus::Fail,
                selector: "img.hero".to_string(),
                snippet: Some("<img class=\"hero\">".to_string()),
            }],
            rules: vec![UnifiedRule {
                id: "image-alt".to_string(),
                description: "Images must have alternate text".to_string(),
                help_url: "https://rules.example/image-alt".to_string(),
            }],
            target_page_url: "https://target.example/".to_string(),
        };
        actions.scan_completed.invoke(&payload);

        let state = store.get_state();
        assert_eq!(state.results.as_ref().map(Vec::len), Some(1));
        assert_eq!(state.rules.as_ref().map(Vec::len), Some(1));
        assert_eq!(
            state.target_page_url.as_deref(),
            Some("https://target.example/")
        );
    }
}
