//! Unified scan result actions
//!
//! The unified result shape is engine-agnostic: one record per checked
//! instance plus the catalog of rules the scan evaluated. Downstream
//! consumers (details view, report generation) only ever see this shape.

use serde::{Deserialize, Serialize};

use crate::action::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstanceResultStatus {
    Pass,
    Fail,
    Unknown,
}

/// One checked instance on the target page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedResult {
    pub uid: String,
    pub rule_id: String,
    pub status: InstanceResultStatus,
    pub selector: String,
    pub snippet: Option<String>,
}

/// One rule the scan evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedRule {
    pub id: String,
    pub description: String,
    pub help_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedScanCompletedPayload {
    pub results: Vec<UnifiedResult>,
    pub rules: Vec<UnifiedRule>,
    /// Url of the page the scan ran against.
    pub target_page_url: String,
}

pub struct UnifiedScanResultActions {
    pub scan_completed: Action<UnifiedScanCompletedPayload>,
}

impl UnifiedScanResultActions {
    pub fn new() -> Self {
        Self {
            scan_completed: Action::new(),
        }
    }
}

impl Default for UnifiedScanResultActions {
    fn default() -> Self {
        Self::new()
    }
}
