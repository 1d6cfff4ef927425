//! The summary pipeline, extracted from the CLI.
//!
//! Input and output go through the port traits; everything in between is
//! pure.

use crate::ports::{PlanSource, WritePort};
use crate::settings::{OutputFormat, SummarySettings};
use plansum_domain::summarize;
use plansum_plan::PlanLoadError;
use plansum_render::{render_diagnostics, render_json, render_markdown, render_text};
use plansum_types::Summary;
use tracing::debug;

/// Error type for pipeline results. Any error is fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error(transparent)]
    Load(#[from] PlanLoadError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Outcome of `run_summary`.
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    pub summary: Summary,
    /// Fully rendered output for the requested format.
    pub rendered: String,
}

/// Load the plan, summarize it and render the result.
///
/// Nothing is written here: a load failure therefore never leaves partial
/// output behind.
pub fn run_summary(
    settings: &SummarySettings,
    source: &dyn PlanSource,
) -> Result<SummaryOutcome, ToolError> {
    let plan = source.load_plan()?;
    let summary = summarize(&plan, &settings.summary_config());
    debug!(
        changes = summary.changes.len(),
        unrecognized = summary.unrecognized.len(),
        format = ?settings.format,
        "summarized plan"
    );

    let rendered = render(&summary, settings.format)?;
    Ok(SummaryOutcome { summary, rendered })
}

fn render(summary: &Summary, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => {
            let mut out = render_diagnostics(summary);
            out.push_str(&render_text(summary));
            out
        }
        OutputFormat::Json => render_json(summary)?,
        OutputFormat::Markdown => render_markdown(summary),
    })
}

/// Write the rendered outcome. Writes nothing when the rendering is empty.
pub fn write_summary(outcome: &SummaryOutcome, writer: &mut dyn WritePort) -> anyhow::Result<()> {
    if outcome.rendered.is_empty() {
        return Ok(());
    }
    writer.write_out(&outcome.rendered)
}
