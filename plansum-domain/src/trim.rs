use plansum_types::ClassifiedChange;
use tracing::debug;

/// Longest common leading run of characters of `a` and `b`.
///
/// Comparison is per `char`, so the result always ends on a UTF-8 boundary.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| a.len().min(b.len()));
    &a[..end]
}

/// Strip the prefix shared by the two lexicographically smallest addresses
/// from every address, without reordering.
///
/// Only the two smallest addresses decide the prefix. An address that does not
/// start with it keeps its full form. Returns the prefix that was stripped, or
/// `None` when fewer than two changes are present.
pub fn trim_common_prefix(changes: &mut [ClassifiedChange]) -> Option<String> {
    if changes.len() < 2 {
        return None;
    }

    let mut sorted: Vec<&str> = changes.iter().map(|c| c.address.as_str()).collect();
    sorted.sort_unstable();
    let prefix = common_prefix(sorted[0], sorted[1]).to_string();
    debug!(prefix = %prefix, "trimming common address prefix");

    if prefix.is_empty() {
        return Some(prefix);
    }

    for change in changes.iter_mut() {
        if let Some(rest) = change.address.strip_prefix(prefix.as_str()) {
            change.address = rest.to_string();
        }
    }

    Some(prefix)
}
