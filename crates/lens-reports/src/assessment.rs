//! Assessment report

use lens_flux::stores::{FeatureFlagStoreData, TabStoreData};

use crate::html::escape;
use crate::types::{AssessmentStoreData, AssessmentsProvider, ManualTestStatus};

/// Render assessment progress as a standalone HTML document. Assessments
/// gated behind a disabled feature flag are left out entirely. Pure over its
/// snapshots; the provider is only read.
pub fn generate_assessment_report(
    assessment_data: &AssessmentStoreData,
    provider: &dyn AssessmentsProvider,
    feature_flags: &FeatureFlagStoreData,
    tab: &TabStoreData,
    description: &str,
) -> String {
    let page_title = tab.title.as_deref().unwrap_or("(unknown page)");
    let page_url = tab.url.as_deref().unwrap_or("");

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!(
        "<title>Assessment: {}</title>\n</head>\n<body>\n",
        escape(page_title)
    ));

    out.push_str("<header>\n<h1>Assessment</h1>\n");
    out.push_str(&format!(
        "<p>Target page: <a href=\"{url}\">{title}</a></p>\n",
        url = escape(page_url),
        title = escape(page_title)
    ));
    if !description.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", escape(description)));
    }
    out.push_str("</header>\n");

    let mut pass = 0usize;
    let mut fail = 0usize;
    let mut unknown = 0usize;
    let mut body = String::new();

    for assessment in provider.all() {
        if let Some(flag) = &assessment.feature_flag {
            if !feature_flags.is_enabled(flag) {
                continue;
            }
        }

        body.push_str(&format!("<section>\n<h2>{}</h2>\n<ul>\n", escape(&assessment.title)));
        let progress = assessment_data.assessments.get(&assessment.key);
        for requirement in &assessment.requirements {
            let status = progress
                .and_then(|p| p.step_statuses.get(&requirement.key))
                .copied()
                .unwrap_or_default();
            let label = match status {
                ManualTestStatus::Pass => {
                    pass += 1;
                    "Pass"
                }
                ManualTestStatus::Fail => {
                    fail += 1;
                    "Fail"
                }
                ManualTestStatus::Unknown => {
                    unknown += 1;
                    "Incomplete"
                }
            };
            body.push_str(&format!(
                "<li>{}: <strong>{label}</strong></li>\n",
                escape(&requirement.name)
            ));
        }
        body.push_str("</ul>\n</section>\n");
    }

    out.push_str(&format!(
        "<p>{pass} passed, {fail} failed, {unknown} incomplete.</p>\n"
    ));
    out.push_str(&body);
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AssessmentData, AssessmentDefinition, RequirementDefinition};
    use std::collections::HashMap;

    struct FixedProvider(Vec<AssessmentDefinition>);

    impl AssessmentsProvider for FixedProvider {
        fn all(&self) -> Vec<AssessmentDefinition> {
            self.0.clone()
        }
    }

    fn provider() -> FixedProvider {
        FixedProvider(vec![
            AssessmentDefinition {
                key: "keyboard".to_string(),
                title: "Keyboard interaction".to_string(),
                feature_flag: None,
                requirements: vec![
                    RequirementDefinition {
                        key: "tab-order".to_string(),
                        name: "Tab order".to_string(),
                    },
                    RequirementDefinition {
                        key: "no-trap".to_string(),
                        name: "No keyboard trap".to_string(),
                    },
                ],
            },
            AssessmentDefinition {
                key: "needs-review-extras".to_string(),
                title: "Needs review extras".to_string(),
                feature_flag: Some("needs-review".to_string()),
                requirements: vec![RequirementDefinition {
                    key: "review".to_string(),
                    name: "Review flagged instances".to_string(),
                }],
            },
        ])
    }

    fn store_data() -> AssessmentStoreData {
        let mut step_statuses = HashMap::new();
        step_statuses.insert("tab-order".to_string(), ManualTestStatus::Pass);
        let mut assessments = HashMap::new();
        assessments.insert("keyboard".to_string(), AssessmentData { step_statuses });
        AssessmentStoreData { assessments }
    }

    fn tab() -> TabStoreData {
        TabStoreData {
            id: Some(1),
            url: Some("https://target.example/".to_string()),
            title: Some("Example".to_string()),
            ..TabStoreData::default()
        }
    }

    #[test]
    fn unrecorded_requirements_count_as_incomplete() {
        let report = generate_assessment_report(
            &store_data(),
            &provider(),
            &FeatureFlagStoreData::default(),
            &tab(),
            "",
        );

        assert!(report.contains("1 passed, 0 failed, 1 incomplete."));
        assert!(report.contains("No keyboard trap: <strong>Incomplete</strong>"));
    }

    #[test]
    fn flag_gated_assessments_are_omitted_while_disabled() {
        let report = generate_assessment_report(
            &store_data(),
            &provider(),
            &FeatureFlagStoreData::default(),
            &tab(),
            "",
        );
        assert!(!report.contains("Needs review extras"));

        let mut flags = FeatureFlagStoreData::default();
        flags.flags.insert("needs-review".to_string(), true);
        let report = generate_assessment_report(&store_data(), &provider(), &flags, &tab(), "");
        assert!(report.contains("Needs review extras"));
    }
}
