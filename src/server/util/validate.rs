//! Small validation primitives shared by the domain model constructors.

/// Returns true if the string is empty or consists only of whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns true if any two items in the slice compare equal.
///
/// Pairwise scan using the item's own `PartialEq`, so entity-specific equality
/// (case-insensitive canteen names, dish type and description) is honoured.
pub fn has_duplicates<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, item)| items[i + 1..].iter().any(|other| item == other))
}
