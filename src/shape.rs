//! Array-shape classification and entry ordering.
//!
//! INI has one section level and no native lists, so the serializer has to
//! look at the *shape* of a collection's keys before deciding how to write
//! it: sequential collections become auto-indexed `label[]` lines, keyed
//! collections become explicit `label[key]` lines. [`classify`] makes that
//! call; [`ordered_entries`] makes sure plain assignments land above the
//! structures that open bracket paths and section headers.

use crate::{IniMap, IniValue};
use std::fmt;

/// Key structure of a collection, derived on demand and never stored.
///
/// The categories are mutually exclusive and exhaustive; [`classify`]
/// checks them in a fixed order so a mapping keyed `0, 1, 2` is
/// [`Sequential`](ArrayShape::Sequential), not merely numeric.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayShape {
    /// No entries at all.
    Empty,
    /// A list, or a mapping whose keys are exactly `0..n-1` in order.
    Sequential,
    /// All keys parse as integers, but not the contiguous range from zero.
    Numeric,
    /// At least one key is non-numeric.
    Associative,
}

impl ArrayShape {
    /// Returns the label used in diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ArrayShape::Empty => "empty",
            ArrayShape::Sequential => "sequential",
            ArrayShape::Numeric => "numerical",
            ArrayShape::Associative => "associative",
        }
    }
}

impl fmt::Display for ArrayShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a collection value by its key structure.
///
/// Decision order, first match wins: no entries → `Empty`; keys form the
/// exact range `0..n-1` in order (every list does) → `Sequential`; any
/// non-numeric key → `Associative`; otherwise → `Numeric`. Scalars have no
/// entries and classify as `Empty`.
///
/// # Examples
///
/// ```rust
/// use inigen::{classify, ini, ArrayShape};
///
/// assert_eq!(classify(&ini!({})), ArrayShape::Empty);
/// assert_eq!(classify(&ini!(["a", "b"])), ArrayShape::Sequential);
/// assert_eq!(classify(&ini!({"0": 1, "1": 2, "2": 3})), ArrayShape::Sequential);
/// assert_eq!(classify(&ini!({"0": 1, "2": 2})), ArrayShape::Numeric);
/// assert_eq!(classify(&ini!({"x": 1})), ArrayShape::Associative);
/// ```
#[must_use]
pub fn classify(value: &IniValue) -> ArrayShape {
    match value {
        IniValue::Array(items) => {
            if items.is_empty() {
                ArrayShape::Empty
            } else {
                ArrayShape::Sequential
            }
        }
        IniValue::Object(map) => classify_keys(map),
        _ => ArrayShape::Empty,
    }
}

fn classify_keys(map: &IniMap) -> ArrayShape {
    if map.is_empty() {
        return ArrayShape::Empty;
    }
    let sequential = map
        .keys()
        .enumerate()
        .all(|(index, key)| key.parse::<usize>() == Ok(index));
    if sequential {
        return ArrayShape::Sequential;
    }
    if map.keys().any(|key| key.parse::<i64>().is_err()) {
        return ArrayShape::Associative;
    }
    ArrayShape::Numeric
}

/// Stable scalar-before-nested partition of a mapping's entries.
///
/// Entries whose value is not a nested structure come first, in their
/// original relative order, followed by the nested entries, also in original
/// order. This keeps a section's plain assignments above its sub-structure
/// lines, matching INI's rule that un-sectioned keys precede the first
/// section header.
///
/// # Examples
///
/// ```rust
/// use inigen::{ini, ordered_entries, IniValue};
///
/// let config = ini!({
///     "a": {"nested": 1},
///     "b": 2,
///     "c": {"nested": 3},
///     "d": 4
/// });
/// let map = config.as_object().unwrap();
/// let keys: Vec<&str> = ordered_entries(map).into_iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, vec!["b", "d", "a", "c"]);
/// ```
#[must_use]
pub fn ordered_entries(map: &IniMap) -> Vec<(&str, &IniValue)> {
    let mut entries: Vec<(&str, &IniValue)> =
        map.iter().map(|(k, v)| (k.as_str(), v)).collect();
    // stable sort: false (scalar) before true (nested), relative order kept
    entries.sort_by_key(|(_, value)| value.is_nested());
    entries
}
