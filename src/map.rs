//! Ordered map type for INI mappings.
//!
//! This module provides [`IniMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order. Order matters twice over for INI output: the
//! serializer's stable scalar-before-nested partition starts from insertion
//! order, and generated files should not reshuffle between runs.
//!
//! Equality is order-insensitive per level (two maps are equal when they hold
//! the same key-value pairs), which is exactly the comparison a lossy INI
//! round trip can promise.
//!
//! ## Examples
//!
//! ```rust
//! use inigen::{IniMap, IniValue};
//!
//! let mut map = IniMap::new();
//! map.insert("name".to_string(), IniValue::from("Alice"));
//! map.insert("age".to_string(), IniValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to INI values.
///
/// # Examples
///
/// ```rust
/// use inigen::{IniMap, IniValue};
///
/// let mut map = IniMap::new();
/// map.insert("first".to_string(), IniValue::from(1));
/// map.insert("second".to_string(), IniValue::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IniMap(IndexMap<String, crate::IniValue>);

impl IniMap {
    /// Creates an empty `IniMap`.
    #[must_use]
    pub fn new() -> Self {
        IniMap(IndexMap::new())
    }

    /// Creates an empty `IniMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        IniMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the entry keeps its original position.
    pub fn insert(&mut self, key: String, value: crate::IniValue) -> Option<crate::IniValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::IniValue> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::IniValue> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Gets the entry for a key, for in-place insertion.
    ///
    /// Used by the deserializer to build bracket-path targets without double
    /// lookups.
    pub fn entry(&mut self, key: String) -> indexmap::map::Entry<'_, String, crate::IniValue> {
        self.0.entry(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::IniValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::IniValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::IniValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::IniValue>> for IniMap {
    fn from(map: HashMap<String, crate::IniValue>) -> Self {
        IniMap(map.into_iter().collect())
    }
}

impl From<IniMap> for HashMap<String, crate::IniValue> {
    fn from(map: IniMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for IniMap {
    type Item = (String, crate::IniValue);
    type IntoIter = indexmap::map::IntoIter<String, crate::IniValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IniMap {
    type Item = (&'a String, &'a crate::IniValue);
    type IntoIter = indexmap::map::Iter<'a, String, crate::IniValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::IniValue)> for IniMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::IniValue)>>(iter: T) -> Self {
        IniMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IniValue;

    #[test]
    fn test_insertion_order() {
        let mut map = IniMap::new();
        map.insert("z".to_string(), IniValue::from(1));
        map.insert("a".to_string(), IniValue::from(2));
        map.insert("m".to_string(), IniValue::from(3));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let left: IniMap = [
            ("a".to_string(), IniValue::from(1)),
            ("b".to_string(), IniValue::from(2)),
        ]
        .into_iter()
        .collect();
        let right: IniMap = [
            ("b".to_string(), IniValue::from(2)),
            ("a".to_string(), IniValue::from(1)),
        ]
        .into_iter()
        .collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_insert_replaces() {
        let mut map = IniMap::new();
        assert!(map.insert("key".to_string(), IniValue::from(1)).is_none());
        assert!(map.insert("key".to_string(), IniValue::from(2)).is_some());
        assert_eq!(map.len(), 1);
    }
}
