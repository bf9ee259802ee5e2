//! Visualization store: which overlays are enabled on the target page

use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::actions::{
    TabActions, VisualizationActions, VisualizationTogglePayload, VisualizationType,
};
use crate::store::{Store, StoreCore, StoreId};

/// Which visualizations start enabled for a fresh page. Passed explicitly at
/// store construction; stores never read each other's configuration.
#[derive(Debug, Clone, Default)]
pub struct VisualizationDefaults {
    pub initially_enabled: Vec<VisualizationType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisualizationStoreData {
    /// Enabled flag per visualization. Every known type has an entry.
    pub tests: HashMap<VisualizationType, bool>,
    /// The visualization currently being scanned, if any.
    pub scanning: Option<VisualizationType>,
}

impl VisualizationStoreData {
    fn fresh(defaults: &VisualizationDefaults) -> Self {
        let tests = VisualizationType::all()
            .into_iter()
            .map(|t| (t, defaults.initially_enabled.contains(&t)))
            .collect();
        Self {
            tests,
            scanning: None,
        }
    }

    pub fn is_enabled(&self, test: VisualizationType) -> bool {
        self.tests.get(&test).copied().unwrap_or(false)
    }
}

pub struct VisualizationStore {
    core: StoreCore<VisualizationStoreData>,
    visualization_actions: Rc<VisualizationActions>,
    tab_actions: Rc<TabActions>,
    defaults: VisualizationDefaults,
}

impl VisualizationStore {
    pub fn new(
        visualization_actions: Rc<VisualizationActions>,
        tab_actions: Rc<TabActions>,
        defaults: VisualizationDefaults,
    ) -> Self {
        Self {
            core: StoreCore::new(),
            visualization_actions,
            tab_actions,
            defaults,
        }
    }

    pub fn initialize(&self) {
        self.core
            .set_initial(VisualizationStoreData::fresh(&self.defaults));

        let core = self.core.clone();
        self.visualization_actions
            .enable_visualization
            .register_callback(move |payload: &VisualizationTogglePayload| {
                core.transition(|state| {
                    state.tests.insert(payload.test, true);
                });
            });

        let core = self.core.clone();
        self.visualization_actions
            .disable_visualization
            .register_callback(move |payload: &VisualizationTogglePayload| {
                core.transition(|state| {
                    state.tests.insert(payload.test, false);
                });
            });

        let core = self.core.clone();
        self.visualization_actions
            .disable_all
            .register_callback(move |_| {
                core.transition(|state| {
                    for enabled in state.tests.values_mut() {
                        *enabled = false;
                    }
                });
            });

        let core = self.core.clone();
        self.visualization_actions.scan_started.register_callback(
            move |payload: &VisualizationTogglePayload| {
                core.transition(|state| state.scanning = Some(payload.test));
            },
        );

        let core = self.core.clone();
        self.visualization_actions
            .scan_completed
            .register_callback(move |_| {
                core.transition(|state| state.scanning = None);
            });

        // Toggles are per-page: navigating the target tab resets them.
        let core = self.core.clone();
        let defaults = self.defaults.clone();
        self.tab_actions.tab_updated.register_callback(move |_| {
            core.transition(|state| *state = VisualizationStoreData::fresh(&defaults));
        });

        let core = self.core.clone();
        let defaults = self.defaults.clone();
        self.tab_actions.new_tab.register_callback(move |_| {
            core.transition(|state| *state = VisualizationStoreData::fresh(&defaults));
        });
    }

    pub fn get_state(&self) -> VisualizationStoreData {
        self.core.get_state()
    }
}

impl Store for VisualizationStore {
    fn id(&self) -> StoreId {
        StoreId::Visualization
    }

    fn add_changed_listener(&self, listener: Box<dyn Fn()>) {
        self.core.add_changed_listener(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::TabPayload;

    fn store(
        defaults: VisualizationDefaults,
    ) -> (Rc<VisualizationActions>, Rc<TabActions>, VisualizationStore) {
        let vis = Rc::new(VisualizationActions::new());
        let tab = Rc::new(TabActions::new());
        let store = VisualizationStore::new(Rc::clone(&vis), Rc::clone(&tab), defaults);
        store.initialize();
        (vis, tab, store)
    }

    #[test]
    fn initial_state_covers_every_visualization() {
        let (_, _, store) = store(VisualizationDefaults::default());
        let state = store.get_state();
        assert_eq!(state.tests.len(), VisualizationType::all().len());
        assert!(state.tests.values().all(|enabled| !enabled));
        assert_eq!(state.scanning, None);
    }

    #[test]
    fn defaults_seed_the_initial_toggles() {
        let defaults = VisualizationDefaults {
            initially_enabled: vec![VisualizationType::Headings],
        };
        let (_, _, store) = store(defaults);
        assert!(store.get_state().is_enabled(VisualizationType::Headings));
        assert!(!store.get_state().is_enabled(VisualizationType::Color));
    }

    #[test]
    fn enable_then_disable_round_trips() {
        let (vis, _, store) = store(VisualizationDefaults::default());
        let payload = VisualizationTogglePayload {
            test: VisualizationType::Landmarks,
        };

        vis.enable_visualization.invoke(&payload);
        assert!(store.get_state().is_enabled(VisualizationType::Landmarks));

        vis.disable_visualization.invoke(&payload);
        assert!(!store.get_state().is_enabled(VisualizationType::Landmarks));
    }

    #[test]
    fn navigation_resets_toggles_to_defaults() {
        let defaults = VisualizationDefaults {
            initially_enabled: vec![VisualizationType::TabStops],
        };
        let (vis, tab, store) = store(defaults);

        vis.enable_visualization.invoke(&VisualizationTogglePayload {
            test: VisualizationType::Issues,
        });
        vis.disable_visualization
            .invoke(&VisualizationTogglePayload {
                test: VisualizationType::TabStops,
            });

        tab.tab_updated.invoke(&TabPayload {
            tab_id: 1,
            url: "https://next.example/".to_string(),
            title: "next".to_string(),
        });

        let state = store.get_state();
        assert!(!state.is_enabled(VisualizationType::Issues));
        assert!(state.is_enabled(VisualizationType::TabStops));
    }

    #[test]
    fn scanning_tracks_start_and_completion() {
        let (vis, _, store) = store(VisualizationDefaults::default());
        let payload = VisualizationTogglePayload {
            test: VisualizationType::Color,
        };

        vis.scan_started.invoke(&payload);
        assert_eq!(store.get_state().scanning, Some(VisualizationType::Color));

        vis.scan_completed.invoke(&payload);
        assert_eq!(store.get_state().scanning, None);
    }
}
