use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category of a resource change.
///
/// `Recreate` is derived: Terraform reports it as a delete/create pair in
/// either order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    NoOp,
    Create,
    Read,
    Update,
    Delete,
    Recreate,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::NoOp,
        Category::Create,
        Category::Read,
        Category::Update,
        Category::Delete,
        Category::Recreate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::NoOp => "no-op",
            Category::Create => "create",
            Category::Read => "read",
            Category::Update => "update",
            Category::Delete => "delete",
            Category::Recreate => "recreate",
        }
    }

    pub fn is_no_op(self) -> bool {
        matches!(self, Category::NoOp)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
