use plansum_types::{Category, ClassifiedChange, ResourceChange, Unrecognized};

/// Outcome of classifying one resource change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Known(ClassifiedChange),
    Unrecognized(Unrecognized),
}

/// Map an exact, ordered action sequence to its category.
///
/// Order is significant. The only multi-action sequences Terraform emits are
/// the two delete/create orderings, and both mean the resource is replaced.
pub fn classify_actions<S: AsRef<str>>(actions: &[S]) -> Option<Category> {
    let tokens: Vec<&str> = actions.iter().map(AsRef::as_ref).collect();
    match tokens.as_slice() {
        ["no-op"] => Some(Category::NoOp),
        ["create"] => Some(Category::Create),
        ["read"] => Some(Category::Read),
        ["update"] => Some(Category::Update),
        ["delete", "create"] | ["create", "delete"] => Some(Category::Recreate),
        ["delete"] => Some(Category::Delete),
        _ => None,
    }
}

pub fn classify(change: &ResourceChange) -> Classification {
    match classify_actions(change.actions()) {
        Some(category) => Classification::Known(ClassifiedChange::new(&change.address, category)),
        None => Classification::Unrecognized(Unrecognized {
            address: change.address.clone(),
            actions: change.actions().to_vec(),
        }),
    }
}
