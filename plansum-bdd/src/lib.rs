//! BDD harness (cucumber-rs).
//!
//! This crate keeps scenario tests isolated from the production crates. The
//! helpers below build plan documents for the step definitions.

/// Build a minimal Terraform JSON plan from `(address, actions)` pairs.
pub fn plan_json(records: &[(String, Vec<String>)]) -> String {
    let changes: Vec<serde_json::Value> = records
        .iter()
        .map(|(address, actions)| {
            serde_json::json!({
                "address": address,
                "change": { "actions": actions }
            })
        })
        .collect();
    serde_json::json!({ "format_version": "1.2", "resource_changes": changes }).to_string()
}

/// Split a comma-separated action list such as `"delete, create"`.
/// An empty string yields no actions.
pub fn parse_actions(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(String::from)
        .collect()
}
