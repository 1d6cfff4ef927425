//! Rendering helpers for summaries.
//!
//! The text form is the primary output: one `(category) address` line per
//! change. JSON and markdown carry the same data for machines and PR comments.

use anyhow::Context;
use plansum_types::{Category, ClassifiedChange, Summary, Unrecognized};
use serde::Serialize;

/// Width of the right-justified category column in text output.
pub const CATEGORY_WIDTH: usize = 8;

/// One line per change, e.g. `(  create) module.foo.bar_baz`.
pub fn render_line(change: &ClassifiedChange) -> String {
    format!(
        "({:>width$}) {}",
        change.category.as_str(),
        change.address,
        width = CATEGORY_WIDTH
    )
}

/// All change lines, newline-terminated. Empty when nothing survived.
pub fn render_text(summary: &Summary) -> String {
    let mut out = String::new();
    for change in &summary.changes {
        out.push_str(&render_line(change));
        out.push('\n');
    }
    out
}

/// One diagnostic line per unrecognized record, in input order.
pub fn render_diagnostics(summary: &Summary) -> String {
    let mut out = String::new();
    for u in &summary.unrecognized {
        out.push_str(&u.message());
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct SummaryJson<'a> {
    schema: &'static str,
    changes: &'a [ClassifiedChange],
    unrecognized: &'a [Unrecognized],
}

pub fn render_json(summary: &Summary) -> anyhow::Result<String> {
    let doc = SummaryJson {
        schema: plansum_types::schema::PLANSUM_SUMMARY_V1,
        changes: &summary.changes,
        unrecognized: &summary.unrecognized,
    };
    let mut out = serde_json::to_string_pretty(&doc).context("serialize summary")?;
    out.push('\n');
    Ok(out)
}

pub fn render_markdown(summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str("# plan summary\n\n");

    let counts: Vec<String> = Category::ALL
        .iter()
        .filter(|c| !c.is_no_op())
        .map(|c| format!("{} {}", summary.count(*c), c.as_str()))
        .collect();
    out.push_str(&format!(
        "- Changes: {} ({})\n",
        summary.changes.len(),
        counts.join(", ")
    ));
    if !summary.unrecognized.is_empty() {
        out.push_str(&format!(
            "- Unrecognized: {}\n",
            summary.unrecognized.len()
        ));
    }
    out.push('\n');

    out.push_str("## Changes\n\n");
    if summary.changes.is_empty() {
        out.push_str("_No changes._\n");
    } else {
        for c in &summary.changes {
            out.push_str(&format!("- `{}` {}\n", c.category.as_str(), c.address));
        }
    }

    if !summary.unrecognized.is_empty() {
        out.push_str("\n## Unrecognized\n\n");
        for u in &summary.unrecognized {
            out.push_str(&format!(
                "- `[{}]` {}\n",
                u.actions.join(", "),
                u.address
            ));
        }
    }

    out
}
