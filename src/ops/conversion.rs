use crate::cursor::Cursor;
use crate::error::{SeqError, SeqResult};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::{BuildHasher, Hash};

/// Collect the remaining elements of `cursor`
///
/// `capacity` is the exact element count when the source knows it; otherwise
/// the vector grows as elements arrive.
pub fn to_vec<C: Cursor>(mut cursor: C, capacity: Option<usize>) -> Vec<C::Item> {
    let mut items = match capacity {
        Some(capacity) => {
            log::trace!("pre-sizing materialized sequence to {}", capacity);
            Vec::with_capacity(capacity)
        }
        None => Vec::new(),
    };
    while cursor.advance() {
        items.push(cursor.current());
    }
    items
}

/// Build a map from the remaining elements of `cursor`
///
/// Fails with [`SeqError::DuplicateKey`] on the first element whose key is
/// already present; the partially built map is discarded.
pub fn to_dictionary<C, K, V, H, KS, ES>(
    mut cursor: C,
    capacity: Option<usize>,
    key_selector: KS,
    element_selector: ES,
    hasher: H,
) -> SeqResult<HashMap<K, V, H>>
where
    C: Cursor,
    K: Eq + Hash,
    H: BuildHasher,
    KS: Fn(&C::Item) -> K,
    ES: Fn(C::Item) -> V,
{
    let mut map = HashMap::with_capacity_and_hasher(capacity.unwrap_or(0), hasher);
    let mut index = 0;
    while cursor.advance() {
        let item = cursor.current();
        match map.entry(key_selector(&item)) {
            Entry::Occupied(_) => {
                log::debug!("duplicate key at element {}", index);
                return Err(SeqError::DuplicateKey { index });
            }
            Entry::Vacant(slot) => {
                slot.insert(element_selector(item));
            }
        }
        index += 1;
    }
    Ok(map)
}
