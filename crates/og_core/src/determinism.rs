//! Determinism utilities: first-occurrence dedup, first-seen counting, and
//! stable ordering.
//!
//! This module is **I/O-free**. Every helper preserves input order where the
//! caller needs it; ties are never resolved by hash order.

use std::collections::{BTreeMap, BTreeSet};

/* -------------------------------------------------------------------------- */
/*                               First occurrence                             */
/* -------------------------------------------------------------------------- */

/// Keep the first item for each distinct key, in input order.
pub fn dedupe_by_key<'a, T, K, I, F>(items: I, key: F) -> Vec<&'a T>
where
    T: 'a,
    K: Ord,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> K,
{
    let mut seen: BTreeSet<K> = BTreeSet::new();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(key(item)) {
            out.push(item);
        }
    }
    out
}

/* -------------------------------------------------------------------------- */
/*                              First-seen counting                           */
/* -------------------------------------------------------------------------- */

/// Count occurrences of each key; the output lists keys in the order they
/// were first encountered.
pub fn count_first_seen<K, I>(keys: I) -> Vec<(K, u64)>
where
    K: Ord + Clone,
    I: IntoIterator<Item = K>,
{
    let mut slot: BTreeMap<K, usize> = BTreeMap::new();
    let mut out: Vec<(K, u64)> = Vec::new();
    for k in keys {
        match slot.get(&k) {
            Some(&i) => out[i].1 += 1,
            None => {
                slot.insert(k.clone(), out.len());
                out.push((k, 1));
            }
        }
    }
    out
}

/* -------------------------------------------------------------------------- */
/*                               Stable ordering                              */
/* -------------------------------------------------------------------------- */

/// Sort descending by `key`; equal keys keep their relative input order.
#[inline]
pub fn sort_desc_stable_by_key<T, K: Ord, F: Fn(&T) -> K>(xs: &mut [T], key: F) {
    xs.sort_by(|a, b| key(b).cmp(&key(a)));
}

/// Distinct values in ascending order.
#[inline]
pub fn sorted_distinct<K: Ord, I: IntoIterator<Item = K>>(it: I) -> Vec<K> {
    it.into_iter().collect::<BTreeSet<K>>().into_iter().collect()
}

/* ---------------------------------- Tests --------------------------------- */
