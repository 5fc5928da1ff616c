//! Component name sequence helpers exposed to the template.

/// Produce the ordered component name sequence `["C1", ..., "C<count>"]`
///
/// A count of zero yields an empty vector. Output depends only on `count`.
pub fn component_names(count: u32) -> Vec<String> {
    (1..=count).map(|n| format!("C{n}")).collect()
}

/// Prepend `prefix` to every element of `items`, preserving order and length
pub fn prefix_all(items: &[String], prefix: &str) -> Vec<String> {
    items.iter().map(|item| format!("{prefix}{item}")).collect()
}
