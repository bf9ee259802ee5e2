//! FastPass automated-checks report

use chrono::{DateTime, Utc};

use lens_flux::stores::UnifiedScanResultStoreData;

use crate::html::escape;
use crate::types::{RuleResult, RuleResultsByStatus};

/// Render one scan snapshot as a standalone HTML document. Pure: the same
/// snapshot always renders the same artifact, inputs are never mutated.
pub fn generate_fast_pass_automate_checks_report(
    scan_result: &UnifiedScanResultStoreData,
    scan_date: DateTime<Utc>,
    page_title: &str,
    page_url: &str,
    rule_results: &RuleResultsByStatus,
    description: &str,
) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!(
        "<title>Automated checks: {}</title>\n</head>\n<body>\n",
        escape(page_title)
    ));

    out.push_str("<header>\n<h1>Automated checks</h1>\n");
    out.push_str(&format!(
        "<p>Target page: <a href=\"{url}\">{title}</a></p>\n",
        url = escape(page_url),
        title = escape(page_title)
    ));
    out.push_str(&format!(
        "<p>Scan date: {}</p>\n",
        scan_date.format("%Y-%m-%d %H:%M UTC")
    ));
    if !description.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", escape(description)));
    }
    out.push_str("</header>\n");

    let instance_count = scan_result.results.as_deref().map_or(0, <[_]>::len);
    out.push_str(&format!(
        "<p>{instance_count} instances across {} rules.</p>\n",
        scan_result.rules.as_deref().map_or(0, <[_]>::len)
    ));

    push_section(&mut out, "Failed checks", &rule_results.failed);
    push_section(&mut out, "Incomplete checks", &rule_results.incomplete);
    push_section(&mut out, "Passed checks", &rule_results.passed);

    out.push_str("</body>\n</html>\n");
    out
}

fn push_section(out: &mut String, heading: &str, results: &[RuleResult]) {
    out.push_str(&format!(
        "<section>\n<h2>{heading} ({})</h2>\n",
        results.len()
    ));
    for result in results {
        out.push_str(&format!(
            "<h3><a href=\"{}\">{}</a>: {}</h3>\n",
            escape(&result.rule.help_url),
            escape(&result.rule.id),
            escape(&result.rule.description)
        ));
        out.push_str("<ul>\n");
        for instance in &result.instances {
            out.push_str(&format!("<li><code>{}</code>", escape(&instance.selector)));
            if let Some(snippet) = &instance.snippet {
                out.push_str(&format!("<pre>{}</pre>", escape(snippet)));
            }
            out.push_str("</li>\n");
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</section>\n");
}
