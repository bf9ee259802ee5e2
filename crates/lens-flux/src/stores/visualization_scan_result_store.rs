//! Visualization scan result store: flagged selectors per visualization

use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::actions::{
    TabActions, VisualizationScanCompletedPayload, VisualizationScanResultActions,
    VisualizationType,
};
use crate::store::{Store, StoreCore, StoreId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisualizationScanResultStoreData {
    /// Selectors flagged by the most recent scan, per visualization. Absent
    /// entry means that visualization has not been scanned on this page.
    pub selectors_by_test: HashMap<VisualizationType, Vec<String>>,
}

pub struct VisualizationScanResultStore {
    core: StoreCore<VisualizationScanResultStoreData>,
    scan_result_actions: Rc<VisualizationScanResultActions>,
    tab_actions: Rc<TabActions>,
}

impl VisualizationScanResultStore {
    pub fn new(
        scan_result_actions: Rc<VisualizationScanResultActions>,
        tab_actions: Rc<TabActions>,
    ) -> Self {
        Self {
            core: StoreCore::new(),
            scan_result_actions,
            tab_actions,
        }
    }

    pub fn initialize(&self) {
        self.core
            .set_initial(VisualizationScanResultStoreData::default());

        let core = self.core.clone();
        self.scan_result_actions.scan_completed.register_callback(
            move |payload: &VisualizationScanCompletedPayload| {
                core.transition(|state| {
                    state
                        .selectors_by_test
                        .insert(payload.test, payload.selectors.clone());
                });
            },
        );

        let core = self.core.clone();
        self.scan_result_actions
            .clear_results
            .register_callback(move |_| {
                core.transition(|state| state.selectors_by_test.clear());
            });

        // Results are per-page; drop them when the target tab changes.
        let core = self.core.clone();
        self.tab_actions.new_tab.register_callback(move |_| {
            core.transition(|state| state.selectors_by_test.clear());
        });

        let core = self.core.clone();
        self.tab_actions.tab_removed.register_callback(move |_| {
            core.transition(|state| state.selectors_by_test.clear());
        });
    }

    pub fn get_state(&self) -> VisualizationScanResultStoreData {
        self.core.get_state()
    }
}

impl Store for VisualizationScanResultStore {
    fn id(&self) -> StoreId {
        StoreId::VisualizationScanResult
    }

    fn add_changed_listener(&self, listener: Box<dyn Fn()>) {
        self.core.add_changed_listener(listener);
    }
}
