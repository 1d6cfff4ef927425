//! Embeddable core library for plansum.
//!
//! Provides a clap-free, I/O-abstracted entry point so the summary pipeline
//! can be driven from the CLI, from tests, or from another host process.
//!
//! # Port traits
//!
//! All I/O is abstracted behind port traits in [`ports`]:
//! - [`PlanSource`](ports::PlanSource) — read and decode one plan document
//! - [`WritePort`](ports::WritePort) — emit rendered output
//!
//! The [`adapters`] module provides stdin/stdout and in-memory implementations.
//!
//! # Entry points
//!
//! - [`run_summary`](pipeline::run_summary) — load, classify, filter, trim, render
//! - [`write_summary`](pipeline::write_summary) — hand the rendered output to a writer

pub mod adapters;
pub mod pipeline;
pub mod ports;
pub mod settings;

// Re-export the types embedders need so they don't depend on the leaf crates directly.
pub use plansum_plan::PlanLoadError;
pub use plansum_types::{Category, ClassifiedChange, PlanDocument, Summary, Unrecognized};
