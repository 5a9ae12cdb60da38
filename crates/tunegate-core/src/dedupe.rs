//! Order-preserving duplicate removal.

use std::collections::HashSet;

use crate::domain::{CanonicalItem, Category};

/// Drops every item whose `(category, id)` identity was already seen.
///
/// The first occurrence stays at its position; later ones are discarded whole
/// without merging fields. Items with an absent id share the identity
/// `(category, None)`. Call once per boundary (feed section, search page,
/// chart list); nothing is shared between calls.
pub fn dedupe(items: Vec<CanonicalItem>) -> Vec<CanonicalItem> {
    let mut seen: HashSet<(Category, Option<String>)> = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert((item.category(), item.id.clone())))
        .collect()
}
