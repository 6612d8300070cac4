//! Dynamic value representation for INI data.
//!
//! This module provides the [`IniValue`] enum which represents any value an
//! INI configuration tree can hold. Trees are built by callers (directly, via
//! the [`ini!`](crate::ini) macro, or from any `Serialize` type through
//! [`to_value`](crate::to_value)) and consumed once per serialize or
//! deserialize call.
//!
//! ## Core Types
//!
//! - [`IniValue`]: any INI value (null, bool, number, string, array, mapping)
//! - [`Number`]: integer or float; both serialize to the same decimal literal
//!
//! Comment lines are not a separate variant: a mapping entry whose key starts
//! with `;` is a comment pseudo-entry, its string value emitted behind `; `
//! and never as a configuration key.
//!
//! ## Usage Patterns
//!
//! ```rust
//! use inigen::{ini, IniValue};
//!
//! let config = ini!({
//!     "log_level": "debug",
//!     "retries": 3,
//!     "backends": ["file", "syslog"]
//! });
//!
//! if let IniValue::Object(map) = config {
//!     assert_eq!(map.get("log_level").and_then(|v| v.as_str()), Some("debug"));
//! }
//! ```

use crate::{Error, IniMap, Result};
use serde::de::{self, IntoDeserializer, Visitor};
use serde::{forward_to_deserialize_any, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any INI value.
///
/// # Examples
///
/// ```rust
/// use inigen::{IniValue, Number};
///
/// let null = IniValue::Null;
/// let num = IniValue::Number(Number::Integer(42));
/// let text = IniValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum IniValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<IniValue>),
    Object(IniMap),
}

/// A numeric value, integer or float.
///
/// INI text carries no type markers beyond the literal itself, so integers
/// and floats share one encoding: the plain decimal form of the value.
/// Equality compares numerically across variants, which keeps whole-valued
/// floats round-trippable (`Float(3.0)` serializes as `3` and reparses as
/// `Integer(3)`).
///
/// # Examples
///
/// ```rust
/// use inigen::Number;
///
/// assert_eq!(Number::Integer(3), Number::Float(3.0));
/// assert_eq!(Number::Float(3.5).to_string(), "3.5");
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some` for integers and for floats with no fractional part
    /// inside i64 range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inigen::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`. Always succeeds.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Integer(a), Number::Float(b)) | (Number::Float(b), Number::Integer(a)) => {
                *b == *a as f64
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl IniValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, IniValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, IniValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, IniValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, IniValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, IniValue::Array(_))
    }

    /// Returns `true` if the value is a mapping.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, IniValue::Object(_))
    }

    /// Returns `true` if the value is a nested structure (array or mapping).
    ///
    /// This is the partition key of the entry orderer: non-nested entries are
    /// emitted before nested ones so plain assignments precede section
    /// headers and bracket paths.
    #[inline]
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        matches!(self, IniValue::Array(_) | IniValue::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            IniValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            IniValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or whole-valued float, returns it as `i64`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            IniValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            IniValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<IniValue>> {
        match self {
            IniValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is a mapping, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&IniMap> {
        match self {
            IniValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Unquoted textual form of a scalar, as used inside delimiter-joined
    /// lists and comment bodies. `None` for arrays and mappings.
    pub(crate) fn scalar_lexeme(&self) -> Option<String> {
        match self {
            IniValue::Null => Some("null".to_string()),
            IniValue::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
            IniValue::Number(n) => Some(n.to_string()),
            IniValue::String(s) => Some(s.clone()),
            IniValue::Array(_) | IniValue::Object(_) => None,
        }
    }
}

impl fmt::Display for IniValue {
    /// Renders the value as it would appear on the right of an assignment:
    /// strings double-quoted, booleans as `true`/`false`, null as `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IniValue::Null => write!(f, "null"),
            IniValue::Bool(b) => write!(f, "{}", b),
            IniValue::Number(n) => write!(f, "{}", n),
            IniValue::String(s) => write!(f, "\"{}\"", s),
            IniValue::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            IniValue::Object(_) => write!(f, "{{mapping}}"),
        }
    }
}

impl Serialize for IniValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            IniValue::Null => serializer.serialize_unit(),
            IniValue::Bool(b) => serializer.serialize_bool(*b),
            IniValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            IniValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            IniValue::String(s) => serializer.serialize_str(s),
            IniValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            IniValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for IniValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IniValueVisitor;

        impl<'de> Visitor<'de> for IniValueVisitor {
            type Value = IniValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid INI value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(IniValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(IniValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(IniValue::Number(Number::Integer(value as i64)))
                } else {
                    Ok(IniValue::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(IniValue::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(IniValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(IniValue::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(IniValue::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(IniValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(IniValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = IniMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(IniValue::Object(values))
            }
        }

        deserializer.deserialize_any(IniValueVisitor)
    }
}

// Lets a parsed tree deserialize straight into user types: the value itself
// acts as a serde Deserializer, so `from_value::<T>` is `T::deserialize(value)`.
impl<'de> de::Deserializer<'de> for IniValue {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            IniValue::Null => visitor.visit_unit(),
            IniValue::Bool(b) => visitor.visit_bool(b),
            IniValue::Number(Number::Integer(i)) => visitor.visit_i64(i),
            IniValue::Number(Number::Float(f)) => visitor.visit_f64(f),
            IniValue::String(s) => visitor.visit_string(s),
            IniValue::Array(arr) => {
                visitor.visit_seq(de::value::SeqDeserializer::new(arr.into_iter()))
            }
            IniValue::Object(obj) => {
                visitor.visit_map(de::value::MapDeserializer::new(obj.into_iter()))
            }
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            IniValue::Null => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            IniValue::String(s) => visitor.visit_enum(s.into_deserializer()),
            other => Err(Error::custom(format!(
                "expected string for enum variant, found {:?}",
                other
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct newtype_struct seq tuple tuple_struct
        map struct identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for IniValue {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self {
        self
    }
}

// TryFrom implementations for extracting values from IniValue
impl TryFrom<IniValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: IniValue) -> crate::Result<Self> {
        match value {
            IniValue::Number(n) => n.as_i64().ok_or_else(|| {
                crate::Error::custom(format!("cannot convert {} to i64", n))
            }),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<IniValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: IniValue) -> crate::Result<Self> {
        match value {
            IniValue::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<IniValue> for bool {
    type Error = crate::Error;

    fn try_from(value: IniValue) -> crate::Result<Self> {
        match value {
            IniValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<IniValue> for String {
    type Error = crate::Error;

    fn try_from(value: IniValue) -> crate::Result<Self> {
        match value {
            IniValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

// From implementations for creating IniValue from primitives
impl From<bool> for IniValue {
    fn from(value: bool) -> Self {
        IniValue::Bool(value)
    }
}

impl From<i8> for IniValue {
    fn from(value: i8) -> Self {
        IniValue::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for IniValue {
    fn from(value: i16) -> Self {
        IniValue::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for IniValue {
    fn from(value: i32) -> Self {
        IniValue::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for IniValue {
    fn from(value: i64) -> Self {
        IniValue::Number(Number::Integer(value))
    }
}

impl From<u8> for IniValue {
    fn from(value: u8) -> Self {
        IniValue::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for IniValue {
    fn from(value: u16) -> Self {
        IniValue::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for IniValue {
    fn from(value: u32) -> Self {
        IniValue::Number(Number::Integer(value as i64))
    }
}

impl From<f32> for IniValue {
    fn from(value: f32) -> Self {
        IniValue::Number(Number::Float(value as f64))
    }
}

impl From<f64> for IniValue {
    fn from(value: f64) -> Self {
        IniValue::Number(Number::Float(value))
    }
}

impl From<String> for IniValue {
    fn from(value: String) -> Self {
        IniValue::String(value)
    }
}

impl From<&str> for IniValue {
    fn from(value: &str) -> Self {
        IniValue::String(value.to_string())
    }
}

impl From<Vec<IniValue>> for IniValue {
    fn from(value: Vec<IniValue>) -> Self {
        IniValue::Array(value)
    }
}

impl From<IniMap> for IniValue {
    fn from(value: IniMap) -> Self {
        IniValue::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_cross_variant_eq() {
        assert_eq!(Number::Integer(3), Number::Float(3.0));
        assert_ne!(Number::Integer(3), Number::Float(3.5));
        assert_eq!(Number::Float(3.0), Number::Integer(3));
    }

    #[test]
    fn test_tryfrom_i64() {
        let value = IniValue::Number(Number::Integer(42));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = IniValue::Number(Number::Float(42.0));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = IniValue::String("test".to_string());
        assert!(i64::try_from(value).is_err());
    }

    #[test]
    fn test_tryfrom_bool_and_string() {
        assert!(bool::try_from(IniValue::Bool(true)).unwrap());
        assert!(bool::try_from(IniValue::from(1)).is_err());

        let s: String = IniValue::from("hello").try_into().unwrap();
        assert_eq!(s, "hello");
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(IniValue::from(true), IniValue::Bool(true));
        assert_eq!(IniValue::from(42i64), IniValue::Number(Number::Integer(42)));
        assert_eq!(
            IniValue::from(3.5f64),
            IniValue::Number(Number::Float(3.5))
        );
        assert_eq!(
            IniValue::from("test"),
            IniValue::String("test".to_string())
        );
    }

    #[test]
    fn test_is_nested() {
        assert!(!IniValue::Null.is_nested());
        assert!(!IniValue::from("x").is_nested());
        assert!(IniValue::Array(vec![]).is_nested());
        assert!(IniValue::Object(IniMap::new()).is_nested());
    }

    #[test]
    fn test_display_literal_forms() {
        assert_eq!(IniValue::Null.to_string(), "null");
        assert_eq!(IniValue::Bool(true).to_string(), "true");
        assert_eq!(IniValue::from(7).to_string(), "7");
        assert_eq!(IniValue::from("day").to_string(), "\"day\"");
    }

    #[test]
    fn test_scalar_lexeme() {
        assert_eq!(
            IniValue::from("critical").scalar_lexeme().as_deref(),
            Some("critical")
        );
        assert_eq!(IniValue::Bool(false).scalar_lexeme().as_deref(), Some("false"));
        assert_eq!(IniValue::Array(vec![]).scalar_lexeme(), None);
    }

    #[test]
    fn test_value_deserializer_into_struct() {
        use serde::Deserialize;

        #[derive(Deserialize, Debug, PartialEq)]
        struct Target {
            name: String,
            count: i64,
            ratio: f64,
            enabled: bool,
        }

        let mut map = IniMap::new();
        map.insert("name".to_string(), IniValue::from("x"));
        map.insert("count".to_string(), IniValue::from(3));
        map.insert("ratio".to_string(), IniValue::from(0.5));
        map.insert("enabled".to_string(), IniValue::Bool(true));

        let target: Target = crate::from_value(IniValue::Object(map)).unwrap();
        assert_eq!(
            target,
            Target {
                name: "x".to_string(),
                count: 3,
                ratio: 0.5,
                enabled: true,
            }
        );
    }
}
