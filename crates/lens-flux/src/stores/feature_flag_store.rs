//! Feature flag store (global context)

use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::actions::{FeatureFlagActions, FeatureFlagPayload};
use crate::store::{Store, StoreCore, StoreId};

/// The flag catalog with its shipped defaults, passed explicitly at store
/// construction.
#[derive(Debug, Clone)]
pub struct FeatureFlagDefaults {
    pub flags: HashMap<String, bool>,
}

impl Default for FeatureFlagDefaults {
    fn default() -> Self {
        let mut flags = HashMap::new();
        flags.insert("unified-results".to_string(), true);
        flags.insert("needs-review".to_string(), false);
        flags.insert("export-report".to_string(), true);
        Self { flags }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureFlagStoreData {
    pub flags: HashMap<String, bool>,
}

impl FeatureFlagStoreData {
    pub fn is_enabled(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}

pub struct FeatureFlagStore {
    core: StoreCore<FeatureFlagStoreData>,
    feature_flag_actions: Rc<FeatureFlagActions>,
    defaults: FeatureFlagDefaults,
}

impl FeatureFlagStore {
    pub fn new(feature_flag_actions: Rc<FeatureFlagActions>, defaults: FeatureFlagDefaults) -> Self {
        Self {
            core: StoreCore::new(),
            feature_flag_actions,
            defaults,
        }
    }

    pub fn initialize(&self) {
        self.core.set_initial(FeatureFlagStoreData {
            flags: self.defaults.flags.clone(),
        });

        let core = self.core.clone();
        self.feature_flag_actions.set_feature_flag.register_callback(
            move |payload: &FeatureFlagPayload| {
                core.transition(|state| {
                    state.flags.insert(payload.name.clone(), payload.enabled);
                });
            },
        );

        let core = self.core.clone();
        let defaults = self.defaults.clone();
        self.feature_flag_actions
            .reset_feature_flags
            .register_callback(move |_| {
                core.transition(|state| state.flags = defaults.flags.clone());
            });
    }

    pub fn get_state(&self) -> FeatureFlagStoreData {
        self.core.get_state()
    }
}

impl Store for FeatureFlagStore {
    fn id(&self) -> StoreId {
        StoreId::FeatureFlag
    }

    fn add_changed_listener(&self, listener: Box<dyn Fn()>) {
        self.core.add_changed_listener(listener);
    }
}
