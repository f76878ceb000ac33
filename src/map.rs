//! Map helpers.

use indexmap::IndexMap;
use std::hash::Hash;

/// Swaps keys and values.
///
/// Accepts any map or iterator of pairs. When several keys share a value, the
/// last key seen wins; the result keeps the order in which values first
/// appeared.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use xutils::map::flip;
///
/// let codes = HashMap::from([(1, "a"), (2, "b"), (3, "c")]);
/// let flipped = flip(codes);
/// assert_eq!(flipped["a"], 1);
/// assert_eq!(flipped["c"], 3);
/// ```
pub fn flip<I, K, V>(entries: I) -> IndexMap<V, K>
where
    I: IntoIterator<Item = (K, V)>,
    V: Eq + Hash,
{
    let iter = entries.into_iter();
    let mut flipped = IndexMap::with_capacity(iter.size_hint().0);
    for (key, value) in iter {
        flipped.insert(value, key);
    }
    flipped
}
