//! Slice helpers: column extraction, dedup, difference, cartesian product.
//!
//! All helpers keep the input order and leave the input untouched.

use indexmap::IndexMap;
use std::collections::HashSet;
use std::hash::Hash;

/// Extracts one value per item.
///
/// With `dedup`, a value already seen is skipped, so each value appears once in
/// first-occurrence order.
///
/// # Examples
///
/// ```rust
/// use xutils::array::column;
///
/// struct User { id: u32, age: u32 }
///
/// let users = [User { id: 1, age: 20 }, User { id: 2, age: 20 }, User { id: 3, age: 22 }];
/// assert_eq!(column(&users, |u| u.id, true), vec![1, 2, 3]);
/// assert_eq!(column(&users, |u| u.age, false), vec![20, 20, 22]);
/// assert_eq!(column(&users, |u| u.age, true), vec![20, 22]);
/// ```
pub fn column<T, V, F>(items: &[T], f: F, dedup: bool) -> Vec<V>
where
    V: Eq + Hash + Clone,
    F: Fn(&T) -> V,
{
    let mut values = Vec::with_capacity(items.len());
    let mut seen = HashSet::new();
    for item in items {
        let value = f(item);
        if dedup && !seen.insert(value.clone()) {
            continue;
        }
        values.push(value);
    }
    values
}

/// Removes repeated values, keeping the first occurrence of each.
///
/// # Examples
///
/// ```rust
/// use xutils::array::unique;
///
/// assert_eq!(unique(&[1, 1, 1, 2, 3]), vec![1, 2, 3]);
/// assert_eq!(unique(&["a", "a", "b", "c"]), vec!["a", "b", "c"]);
/// ```
pub fn unique<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Returns the items that appear in none of `others`.
///
/// Repeated items are kept. With no `others` the items come back unchanged.
///
/// # Examples
///
/// ```rust
/// use xutils::array::diff;
///
/// let colors = ["green", "red", "blue", "red"];
/// let seen = ["green", "yellow", "red"];
/// assert_eq!(diff(&colors, &[&seen[..]]), vec!["blue"]);
/// assert_eq!(diff(&colors, &[]), colors.to_vec());
/// ```
pub fn diff<T>(items: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let excluded: HashSet<&T> = others.iter().flat_map(|other| other.iter()).collect();
    items
        .iter()
        .filter(|item| !excluded.contains(item))
        .cloned()
        .collect()
}

/// Cartesian product of `sets`, in lexicographic order of the inputs.
///
/// No sets, or any empty set, gives an empty product.
///
/// # Examples
///
/// ```rust
/// use xutils::array::cartesian;
///
/// let product = cartesian(&[vec![1, 2], vec![3], vec![4, 5]]);
/// assert_eq!(product, vec![vec![1, 3, 4], vec![1, 3, 5], vec![2, 3, 4], vec![2, 3, 5]]);
/// ```
pub fn cartesian<T: Clone>(sets: &[Vec<T>]) -> Vec<Vec<T>> {
    if sets.is_empty() {
        return Vec::new();
    }
    let mut product: Vec<Vec<T>> = vec![Vec::with_capacity(sets.len())];
    for set in sets {
        let mut next = Vec::with_capacity(product.len() * set.len());
        for prefix in &product {
            for value in set {
                let mut row = prefix.clone();
                row.push(value.clone());
                next.push(row);
            }
        }
        product = next;
    }
    product
}

/// Indexes items by a key. A later item with the same key replaces the earlier
/// one but keeps its position.
///
/// # Examples
///
/// ```rust
/// use xutils::array::key_by;
///
/// let users = [(1, "bob"), (2, "jack"), (1, "bobby")];
/// let by_id = key_by(&users, |u| u.0);
/// assert_eq!(by_id.len(), 2);
/// assert_eq!(by_id[&1], (1, "bobby"));
/// assert_eq!(by_id.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn key_by<T, K, F>(items: &[T], f: F) -> IndexMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut map = IndexMap::with_capacity(items.len());
    for item in items {
        map.insert(f(item), item.clone());
    }
    map
}
