//! Report-local snapshot types
//!
//! Store snapshots arrive from `lens-flux`; the types here shape the extra
//! inputs the generators need. Everything is a read-only input to a pure
//! function.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use lens_flux::actions::{UnifiedResult, UnifiedRule};

/// One rule with the instances that resolved to the same status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule: UnifiedRule,
    pub instances: Vec<UnifiedResult>,
}

/// Scan outcome grouped the way the FastPass report presents it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleResultsByStatus {
    pub failed: Vec<RuleResult>,
    pub passed: Vec<RuleResult>,
    pub incomplete: Vec<RuleResult>,
}

/// Outcome of one manually assessed requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ManualTestStatus {
    #[default]
    Unknown,
    Pass,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssessmentData {
    /// Requirement key to recorded status; absent keys read as Unknown.
    pub step_statuses: HashMap<String, ManualTestStatus>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssessmentStoreData {
    /// Assessment key to per-requirement progress.
    pub assessments: HashMap<String, AssessmentData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementDefinition {
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentDefinition {
    pub key: String,
    pub title: String,
    /// When set, the assessment only appears in reports while this feature
    /// flag is enabled.
    pub feature_flag: Option<String>,
    pub requirements: Vec<RequirementDefinition>,
}

/// Catalog of assessments known to the product. External collaborator; the
/// report generator only reads it.
pub trait AssessmentsProvider {
    fn all(&self) -> Vec<AssessmentDefinition>;
}
