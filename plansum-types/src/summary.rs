use crate::category::Category;
use serde::{Deserialize, Serialize};

/// A resource change after classification.
///
/// `address` starts as the plan address and may be shortened by prefix
/// trimming; nothing else changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedChange {
    pub address: String,
    pub category: Category,
}

impl ClassifiedChange {
    pub fn new(address: impl Into<String>, category: Category) -> Self {
        Self {
            address: address.into(),
            category,
        }
    }
}

/// A record whose action sequence matched no known pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unrecognized {
    pub address: String,
    pub actions: Vec<String>,
}

impl Unrecognized {
    /// Human-readable diagnostic line, e.g.
    /// `unknown change sequence of [create, create] for module.x`.
    pub fn message(&self) -> String {
        format!(
            "unknown change sequence of [{}] for {}",
            self.actions.join(", "),
            self.address
        )
    }
}

/// Result of running the pipeline over one plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Surviving changes in input order.
    pub changes: Vec<ClassifiedChange>,

    /// Records dropped by the classifier, in input order.
    #[serde(default)]
    pub unrecognized: Vec<Unrecognized>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn count(&self, category: Category) -> usize {
        self.changes
            .iter()
            .filter(|c| c.category == category)
            .count()
    }

    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.changes.iter().map(|c| c.address.as_str())
    }
}
