//! Generic keyed-collection reducer.
//!
//! Every list-backed view holds its collection as plain in-memory state
//! seeded by a fetch. Mutations the backend has round-tripped successfully
//! are applied as a minimal local patch (append, replace, remove, or
//! field-flip) instead of a full re-fetch. These helpers are that patch
//! vocabulary, shared by all views.

/// An item addressable by a stable entity key within its collection.
pub trait Keyed {
    /// The unique key identifying this item (a server-assigned id).
    fn key(&self) -> &str;
}

/// Replace the item carrying the same key, or append when absent.
pub fn upsert_by_key<T: Keyed>(items: &mut Vec<T>, item: T) {
    match items.iter_mut().find(|existing| existing.key() == item.key()) {
        Some(slot) => *slot = item,
        None => items.push(item),
    }
}

/// Remove exactly the item with `key`, preserving the order of the rest.
///
/// Returns `true` when an item was removed.
pub fn remove_by_key<T: Keyed>(items: &mut Vec<T>, key: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.key() != key);
    items.len() != before
}

/// Apply `patch` to the item with `key`.
///
/// Returns `true` when the item was found and patched.
pub fn patch_by_key<T: Keyed>(items: &mut Vec<T>, key: &str, patch: impl FnOnce(&mut T)) -> bool {
    match items.iter_mut().find(|item| item.key() == key) {
        Some(item) => {
            patch(item);
            true
        }
        None => false,
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
