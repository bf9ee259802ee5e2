//! Report generation
//!
//! Snapshot in, artifact out: the generators take immutable store snapshots
//! and produce a named HTML document, with no side effects and no retained
//! state. Naming and rendering are separate so callers can compute a name
//! without rendering.

mod assessment;
mod fast_pass;
mod html;
mod name_generator;
pub mod types;

use chrono::{DateTime, Utc};

use lens_flux::stores::{FeatureFlagStoreData, TabStoreData, UnifiedScanResultStoreData};

pub use assessment::generate_assessment_report;
pub use fast_pass::generate_fast_pass_automate_checks_report;
pub use name_generator::generate_name;
pub use types::{
    AssessmentData, AssessmentDefinition, AssessmentStoreData, AssessmentsProvider,
    ManualTestStatus, RequirementDefinition, RuleResult, RuleResultsByStatus,
};

/// Façade bundling the free functions for callers that hold one generator
/// instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn generate_name(&self, prefix: &str, date: DateTime<Utc>, title: &str) -> String {
        generate_name(prefix, date, title)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn generate_fast_pass_automate_checks_report(
        &self,
        scan_result: &UnifiedScanResultStoreData,
        scan_date: DateTime<Utc>,
        page_title: &str,
        page_url: &str,
        rule_results: &RuleResultsByStatus,
        description: &str,
    ) -> String {
        generate_fast_pass_automate_checks_report(
            scan_result,
            scan_date,
            page_title,
            page_url,
            rule_results,
            description,
        )
    }

    pub fn generate_assessment_report(
        &self,
        assessment_data: &AssessmentStoreData,
        provider: &dyn AssessmentsProvider,
        feature_flags: &FeatureFlagStoreData,
        tab: &TabStoreData,
        description: &str,
    ) -> String {
        generate_assessment_report(assessment_data, provider, feature_flags, tab, description)
    }
}
