//! Clap-free settings for the summary pipeline.

use plansum_domain::SummaryConfig;

/// Output rendering for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `(category) address` lines, preceded by any diagnostics.
    #[default]
    Text,
    Json,
    Markdown,
}

/// Settings for one summary run. `Default` is a plain text run with reads
/// kept and prefix trimming on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummarySettings {
    pub exclude_reads: bool,
    pub no_trim: bool,
    pub format: OutputFormat,
}

impl SummarySettings {
    pub fn summary_config(&self) -> SummaryConfig {
        SummaryConfig {
            exclude_reads: self.exclude_reads,
            no_trim: self.no_trim,
        }
    }
}
