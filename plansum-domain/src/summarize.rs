use crate::classify::{Classification, classify};
use crate::filter::retain;
use crate::trim::trim_common_prefix;
use plansum_types::{PlanDocument, Summary};
use tracing::{debug, warn};

/// Switches threaded through the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryConfig {
    /// Drop changes classified as `read`.
    pub exclude_reads: bool,

    /// Keep addresses exactly as they appear in the plan.
    pub no_trim: bool,
}

/// Classify, filter and (unless disabled) trim every change in `plan`.
///
/// Unrecognized records are reported in [`Summary::unrecognized`] and take no
/// further part in the pipeline.
pub fn summarize(plan: &PlanDocument, config: &SummaryConfig) -> Summary {
    let mut summary = Summary::default();

    for change in &plan.resource_changes {
        match classify(change) {
            Classification::Known(c) => summary.changes.push(c),
            Classification::Unrecognized(u) => {
                warn!(address = %u.address, actions = ?u.actions, "unknown change sequence");
                summary.unrecognized.push(u);
            }
        }
    }

    retain(&mut summary.changes, config.exclude_reads);
    debug!(
        decoded = plan.resource_changes.len(),
        unrecognized = summary.unrecognized.len(),
        surviving = summary.changes.len(),
        exclude_reads = config.exclude_reads,
        "filtered changes"
    );

    if !config.no_trim {
        trim_common_prefix(&mut summary.changes);
    }

    summary
}
