//! INI Dialect Specification
//!
//! This module documents the INI dialect emitted and accepted by this
//! library.
//!
//! # Overview
//!
//! INI is a line-oriented configuration format with two native levels:
//! `[section]` headers and `key = value` assignments. This library maps
//! arbitrarily deep value trees onto that surface with three devices, applied
//! in order of available depth:
//!
//! 1. **Sections**: a nested value at the top level opens `[name]`.
//! 2. **Bracket paths**: a nested value inside a section flattens to
//!    `label[key] = value` (keyed shapes) or `label[] = value` (sequential
//!    shapes).
//! 3. **Delimiter joins**: structure deeper than bracket paths can spell is
//!    collapsed into one quoted string, items joined by the configured
//!    delimiter (default `#`).
//!
//! # Line forms
//!
//! ```text
//! ; comment text
//! [section]
//! key = value
//! label[sub] = value
//! label[] = value
//! ```
//!
//! All output is UTF-8 with `\n` line endings. A blank line precedes each
//! section header.
//!
//! # Scalars
//!
//! | Type    | Written as          | Read back as                         |
//! |---------|---------------------|--------------------------------------|
//! | Null    | `null`              | `Null`                               |
//! | Boolean | `true` / `false`    | `Bool` (also `yes`/`no`/`on`/`off`)  |
//! | Integer | decimal literal     | `Number::Integer`                    |
//! | Float   | decimal literal     | `Number::Float` (whole floats print  |
//! |         |                     | bare and reparse as integers)        |
//! | String  | `"double-quoted"`   | `String`, quotes stripped            |
//!
//! Booleans are the literal words, not INI's conventional `1`/`0`. Bare
//! unquoted text that types as none of the above reads back as a string.
//!
//! # Shapes
//!
//! A collection's key structure decides its flattened spelling:
//!
//! - **empty**: no entries; nothing is emitted.
//! - **sequential**: a list, or a mapping keyed exactly `0..n-1` in order;
//!   spelled with the auto-index `label[]`.
//! - **numerical**: integer keys, but not the contiguous range from zero;
//!   indices are kept: `label[0]`, `label[7]`.
//! - **associative**: at least one non-numeric key; spelled `label[key]`.
//!
//! Within every mapping, scalar-valued entries are emitted before entries
//! with nested values, preserving relative order on both sides of the
//! partition, so plain assignments always precede the bracket paths and
//! section headers they belong with.
//!
//! # Comments
//!
//! A mapping entry whose key starts with `;` is a comment pseudo-entry: its
//! string value is written behind `; `, and the three-character marker `@@@`
//! is replaced with the current local time (`YYYY-MM-DD HH:MM:SS zone`).
//! The key itself never appears in the output.
//!
//! # Known precision losses
//!
//! These are properties of the format, preserved deliberately:
//!
//! - **Delimiter ambiguity**: the reader splits *every* string containing
//!   the delimiter; a literal `"a#b"` and a joined list `["a", "b"]` produce
//!   the same text. Pick a delimiter that cannot occur in item values.
//! - **One-way comments**: the parser skips `;` lines; comment entries do
//!   not survive a round trip.
//! - **No string escaping**: quotes inside string values are written as-is;
//!   a value containing `"` will not read back correctly.
//! - **Joined leaves are strings**: numbers and booleans inside a
//!   delimiter-joined list come back as their textual form.
//! - **Sequential mappings normalize to lists**: `label[]` lines carry no
//!   keys, so a mapping keyed `0..n-1` reads back as a list.
