//! Plan document ingestion.
//!
//! plansum consumes the JSON emitted by `terraform show -json`. It intentionally
//! does not validate that document's schema; it only decodes the resource
//! addresses and change actions it needs, ignoring every other field.

mod load;

pub use load::{PlanLoadError, load_plan, parse_plan};
