//! Report file name generation
//!
//! Names are deterministic: the same prefix, date and title always produce
//! the same name, so re-exporting a report overwrites rather than piling up
//! near-duplicates.

use chrono::{DateTime, Utc};

const MAX_TITLE_LENGTH: usize = 40;

/// `{prefix}_{YYYYMMDD}_{sanitized title}.html`. The title keeps only its
/// alphanumeric characters, capped at 40.
pub fn generate_name(prefix: &str, date: DateTime<Utc>, title: &str) -> String {
    format!(
        "{prefix}_{}_{}.html",
        date.format("%Y%m%d"),
        sanitize_title(title)
    )
}

fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(MAX_TITLE_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 9, 14, 30, 0).unwrap()
    }

    #[test]
    fn same_inputs_yield_the_same_name() {
        let a = generate_name("FastPass", date(), "Example Page");
        let b = generate_name("FastPass", date(), "Example Page");
        assert_eq!(a, b);
    }

    #[test]
    fn name_combines_prefix_date_and_sanitized_title() {
        let name = generate_name("FastPass", date(), "Shop: checkout (step 2)");
        assert_eq!(name, "FastPass_20260309_Shopcheckoutstep2.html");
    }

    #[test]
    fn long_titles_are_truncated() {
        let title = "x".repeat(200);
        let name = generate_name("Assessment", date(), &title);
        assert_eq!(
            name,
            format!("Assessment_20260309_{}.html", "x".repeat(40))
        );
    }
}
