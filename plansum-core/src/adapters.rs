//! Default port implementations.

use crate::ports::{PlanSource, WritePort};
use anyhow::Context;
use plansum_plan::PlanLoadError;
use plansum_types::PlanDocument;
use std::io::Write;

/// Reads the plan from the process's standard input.
#[derive(Debug, Clone, Default)]
pub struct StdinPlanSource;

impl PlanSource for StdinPlanSource {
    fn load_plan(&self) -> Result<PlanDocument, PlanLoadError> {
        plansum_plan::load_plan(std::io::stdin().lock())
    }
}

/// In-memory plan source for embedding and testing.
#[derive(Debug, Clone)]
pub struct InMemoryPlanSource {
    contents: String,
}

impl InMemoryPlanSource {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }
}

impl PlanSource for InMemoryPlanSource {
    fn load_plan(&self) -> Result<PlanDocument, PlanLoadError> {
        plansum_plan::parse_plan(&self.contents)
    }
}

/// Writes to the process's standard output.
#[derive(Debug, Clone, Default)]
pub struct StdoutWriter;

impl WritePort for StdoutWriter {
    fn write_out(&mut self, contents: &str) -> anyhow::Result<()> {
        let mut out = std::io::stdout().lock();
        out.write_all(contents.as_bytes()).context("write stdout")?;
        out.flush().context("flush stdout")?;
        Ok(())
    }
}

/// Collects output in memory.
#[derive(Debug, Clone, Default)]
pub struct BufferWriter {
    pub buf: String,
}

impl WritePort for BufferWriter {
    fn write_out(&mut self, contents: &str) -> anyhow::Result<()> {
        self.buf.push_str(contents);
        Ok(())
    }
}
