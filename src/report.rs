//! Report formatting for the non-interactive `report` command.
//!
//! Pure functions: (LoadedData, OutputFormat) → String.
//! No I/O, no side effects.

use crate::types::{AccountName, LoadedData, OutputFormat};

/// Format loaded relationship data for output.
pub fn format_report(data: &LoadedData, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(data),
        OutputFormat::Json => format_json(data),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(data: &LoadedData) -> String {
    let mut out = String::new();
    out.push_str(&format!("GitHub Account : {}\n\n", data.user));

    format_section(
        &mut out,
        "Following (they don't follow back)",
        &data.sets.only_following,
    );
    format_section(
        &mut out,
        "Followers (you don't follow back)",
        &data.sets.only_followers,
    );

    out.push_str("=== Summary ===\n");
    out.push_str(&format!(
        "Not following back: {}\n",
        data.sets.only_following.len()
    ));
    out.push_str(&format!(
        "Not followed back:  {}\n",
        data.sets.only_followers.len()
    ));
    out
}

fn format_section(out: &mut String, title: &str, accounts: &[AccountName]) {
    out.push_str(&format!("=== {} ===\n", title));
    if accounts.is_empty() {
        out.push_str("  (none)\n");
    }
    for account in accounts {
        out.push_str(&format!("  {}\n", account));
    }
    out.push('\n');
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(data: &LoadedData) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| {
        // Plain strings and vectors only; serialization cannot fail
        panic!("Failed to serialize report to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RelationshipSets;

    fn sample_data() -> LoadedData {
        LoadedData {
            user: "alice".into(),
            sets: RelationshipSets {
                only_following: vec!["bob".into(), "carol".into()],
                only_followers: vec!["dave".into()],
            },
        }
    }

    // --- Human format tests ---

    #[test]
    fn human_format_names_the_account() {
        let output = format_report(&sample_data(), OutputFormat::Human);
        assert!(output.starts_with("GitHub Account : alice\n"));
    }

    #[test]
    fn human_format_lists_both_sections() {
        let output = format_report(&sample_data(), OutputFormat::Human);

        assert!(output.contains("=== Following (they don't follow back) ===\n  bob\n  carol\n"));
        assert!(output.contains("=== Followers (you don't follow back) ===\n  dave\n"));
    }

    #[test]
    fn human_format_includes_summary() {
        let output = format_report(&sample_data(), OutputFormat::Human);

        assert!(output.contains("=== Summary ==="));
        assert!(output.contains("Not following back: 2"));
        assert!(output.contains("Not followed back:  1"));
    }

    #[test]
    fn human_format_marks_empty_sections() {
        let data = LoadedData {
            user: "alice".into(),
            sets: RelationshipSets::default(),
        };
        let output = format_report(&data, OutputFormat::Human);

        assert_eq!(output.matches("(none)").count(), 2);
        assert!(output.contains("Not following back: 0"));
    }

    // --- JSON format tests ---

    #[test]
    fn json_format_is_valid_and_flat() {
        let output = format_report(&sample_data(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["user"], "alice");
        assert_eq!(value["only_following"], serde_json::json!(["bob", "carol"]));
        assert_eq!(value["only_followers"], serde_json::json!(["dave"]));
    }

    #[test]
    fn json_format_keeps_empty_arrays() {
        let data = LoadedData {
            user: "alice".into(),
            sets: RelationshipSets::default(),
        };
        let value: serde_json::Value =
            serde_json::from_str(&format_report(&data, OutputFormat::Json)).unwrap();

        assert_eq!(value["only_following"], serde_json::json!([]));
        assert_eq!(value["only_followers"], serde_json::json!([]));
    }
}
