use plansum_types::{Category, ClassifiedChange};

/// `no-op` never survives; `read` survives unless reads are excluded.
pub fn should_keep(category: Category, exclude_reads: bool) -> bool {
    match category {
        Category::NoOp => false,
        Category::Read => !exclude_reads,
        Category::Create | Category::Update | Category::Delete | Category::Recreate => true,
    }
}

/// Drop filtered categories in place, preserving relative order.
pub fn retain(changes: &mut Vec<ClassifiedChange>, exclude_reads: bool) {
    changes.retain(|c| should_keep(c.category, exclude_reads));
}
