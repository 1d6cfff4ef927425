//! Shared DTOs for the plansum workspace.
//!
//! # Design constraints
//! - Input types mirror the subset of `terraform show -json` that plansum reads.
//!   Unknown fields are ignored; nothing here validates the wider schema.
//! - Output types are serialized by the structured renderers. Prefer adding
//!   optional fields over changing semantics.

pub mod category;
pub mod plan;
pub mod summary;

pub use category::Category;
pub use plan::{Change, PlanDocument, ResourceChange};
pub use summary::{ClassifiedChange, Summary, Unrecognized};

/// Schema identifiers.
pub mod schema {
    pub const PLANSUM_SUMMARY_V1: &str = "plansum.summary.v1";
}
