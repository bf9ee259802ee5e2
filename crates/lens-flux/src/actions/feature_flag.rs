//! Feature flag actions

use serde::{Deserialize, Serialize};

use crate::action::Action;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlagPayload {
    pub name: String,
    pub enabled: bool,
}

pub struct FeatureFlagActions {
    pub set_feature_flag: Action<FeatureFlagPayload>,
    pub reset_feature_flags: Action<()>,
}

impl FeatureFlagActions {
    pub fn new() -> Self {
        Self {
            set_feature_flag: Action::new(),
            reset_feature_flags: Action::new(),
        }
    }
}

impl Default for FeatureFlagActions {
    fn default() -> Self {
        Self::new()
    }
}
