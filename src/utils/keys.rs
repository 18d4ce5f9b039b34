//! Sort keys and small function combinators
//!
//! Attribute values are heterogeneous and often missing, so every ordering in
//! the crate goes through [`sort_key`]: a missing value becomes the empty
//! string and sorts before any present value.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Total-order key for a possibly absent value
pub fn sort_key<V: Display + ?Sized>(value: Option<&V>) -> String {
    value.map_or_else(String::new, ToString::to_string)
}

/// Combine `funcs` into one function returning the first present result
///
/// Later functions are not called once an earlier one yields a value.
pub fn compose<N, V, F>(funcs: Vec<F>) -> impl Fn(&N) -> Option<V>
where
    N: ?Sized,
    F: Fn(&N) -> Option<V>,
{
    move |node: &N| funcs.iter().find_map(|func| func(node))
}

/// Copy of `mapping` without the entries that map a key to itself
pub fn minimize<K, V>(mapping: &BTreeMap<K, V>) -> BTreeMap<K, V>
where
    K: Ord + Clone + PartialEq<V>,
    V: Clone,
{
    mapping
        .iter()
        .filter(|(key, value)| *key != *value)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
