//! Port traits abstracting all I/O away from the pipeline.

use plansum_plan::PlanLoadError;
use plansum_types::PlanDocument;

/// Source of the plan document. Implementations read their whole input once.
pub trait PlanSource {
    fn load_plan(&self) -> Result<PlanDocument, PlanLoadError>;
}

/// Destination for rendered output.
pub trait WritePort {
    fn write_out(&mut self, contents: &str) -> anyhow::Result<()>;
}
