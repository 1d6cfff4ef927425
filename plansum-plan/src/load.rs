use plansum_types::PlanDocument;
use std::io::Read;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PlanLoadError {
    #[error("error reading plan input")]
    Read(#[source] std::io::Error),

    #[error("error decoding plan json")]
    Decode(#[source] serde_json::Error),
}

impl PlanLoadError {
    pub fn is_decode(&self) -> bool {
        matches!(self, PlanLoadError::Decode(_))
    }
}

/// Read the whole stream, then decode it. There is no incremental decoding:
/// a read failure part way through never yields a partial plan.
pub fn load_plan<R: Read>(mut reader: R) -> Result<PlanDocument, PlanLoadError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(PlanLoadError::Read)?;
    debug!(bytes = buf.len(), "read plan input");
    decode(&buf)
}

/// Decode a plan that is already in memory.
pub fn parse_plan(s: &str) -> Result<PlanDocument, PlanLoadError> {
    decode(s.as_bytes())
}

fn decode(bytes: &[u8]) -> Result<PlanDocument, PlanLoadError> {
    let plan: PlanDocument = serde_json::from_slice(bytes).map_err(PlanLoadError::Decode)?;
    debug!(
        resource_changes = plan.resource_changes.len(),
        "decoded plan document"
    );
    Ok(plan)
}
