//! Summary domain logic.
//!
//! Everything here is a pure transformation over in-memory data:
//! classify, filter, then optionally trim the shared address prefix.
//! Reading input and writing output live in other crates.

mod classify;
mod filter;
mod summarize;
mod trim;

pub use classify::{Classification, classify, classify_actions};
pub use filter::{retain, should_keep};
pub use summarize::{SummaryConfig, summarize};
pub use trim::{common_prefix, trim_common_prefix};
