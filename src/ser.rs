//! INI serialization.
//!
//! This module provides the [`Serializer`] that walks an [`IniValue`] tree
//! depth by depth and emits INI text, and the [`IniValueSerializer`] bridge
//! that turns any `serde::Serialize` type into an [`IniValue`] tree first.
//!
//! ## Overview
//!
//! INI only has two native levels, `[section]` and `key = value`, so the
//! serializer makes a formatting decision at every nesting boundary:
//!
//! - **Top level**: scalar entries become plain assignments, nested entries
//!   open a `[section]`; the entry orderer keeps assignments above headers.
//! - **Inside a section**: nested values are classified
//!   ([`classify`](crate::classify)) and flattened to bracket paths:
//!   `label[key] = value` for keyed shapes, `label[] = value` for sequential
//!   ones.
//! - **Below the depth limit**: whatever structure remains is joined into a
//!   single delimiter-encoded string, so a flat parser can split it back
//!   into a list later.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use inigen::{ini, to_string};
//!
//! let config = ini!({
//!     "log_level": "debug",
//!     "log_file": {"rotate": "day"}
//! });
//!
//! let text = to_string(&config).unwrap();
//! assert!(text.contains("log_level = \"debug\""));
//! assert!(text.contains("[log_file]"));
//! ```
//!
//! ## Direct Serializer Usage
//!
//! The serializer itself exposes the per-call context: options, the
//! recursion-depth counter and the diagnostic log all live on the instance,
//! so concurrent serializations are fully independent.
//!
//! ```rust
//! use inigen::{ini, IniOptions, Serializer};
//!
//! let config = ini!({"server": {"host": "localhost"}});
//! let mut serializer = Serializer::new(IniOptions::default());
//! serializer.serialize(config.as_object().unwrap(), None);
//! let text = serializer.into_inner();
//! assert!(text.contains("host = \"localhost\""));
//! ```

use crate::shape::{classify, ordered_entries, ArrayShape};
use crate::{timestamp, Error, IniLogger, IniMap, IniOptions, IniValue, Number, Result};
use serde::{ser, Serialize};

/// Nesting deeper than this below the document root has no bracket-path
/// spelling left in INI; remaining structure is delimiter-joined instead.
const FLATTEN_DEPTH_LIMIT: usize = 3;

/// The INI serializer.
///
/// Owns everything one conversion needs: the output buffer, the options, the
/// recursion-depth counter and the diagnostic log. Created via
/// [`Serializer::new`], drained via [`Serializer::into_inner`].
pub struct Serializer {
    output: String,
    options: IniOptions,
    depth: usize,
    logger: IniLogger,
}

impl Serializer {
    #[must_use]
    pub fn new(options: IniOptions) -> Self {
        let logger = IniLogger::new(options.log_level);
        Serializer {
            output: String::with_capacity(256),
            options,
            depth: 0,
            logger,
        }
    }

    /// Consumes the serializer, returning the generated text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    /// The diagnostics accumulated so far.
    #[must_use]
    pub fn logger(&self) -> &IniLogger {
        &self.logger
    }

    /// Serializes one mapping into the output buffer.
    ///
    /// With `section: Some(name)`, top-level nested entries other than
    /// `name` are skipped; top-level scalars are always emitted. The depth
    /// counter resets on every call, so a serializer can be reused.
    pub fn serialize(&mut self, map: &IniMap, section: Option<&str>) {
        self.depth = 0;
        self.serialize_map(map, section);
    }

    fn serialize_map(&mut self, map: &IniMap, section: Option<&str>) {
        self.logger
            .debug("serialize_map", &format!("depth: {}", self.depth));
        if map.is_empty() {
            self.logger.notice("serialize_map", "mapping is empty");
            return;
        }
        for (key, value) in ordered_entries(map) {
            if key.starts_with(';') {
                self.write_comment(value);
                continue;
            }
            if value.is_nested() {
                if self.depth == 0 {
                    self.write_section(key, value, section);
                } else {
                    self.flatten(key, value);
                }
            } else {
                self.output.push_str(&format!("{} = {}\n", key, value));
            }
        }
    }

    /// Emits a comment pseudo-entry, substituting the current local time for
    /// the `@@@` marker. Comment keys never reach the output.
    fn write_comment(&mut self, value: &IniValue) {
        self.logger.debug("serialize_map", "inserting comment line");
        let text = value.scalar_lexeme().unwrap_or_default();
        let text = text.replace("@@@", &timestamp::now(timestamp::COMMENT_STAMP));
        self.output.push_str(&format!("; {}\n", text));
    }

    fn write_section(&mut self, key: &str, value: &IniValue, filter: Option<&str>) {
        if let Some(wanted) = filter {
            if wanted != key {
                self.logger
                    .debug("write_section", &format!("[{}] filtered out", key));
                return;
            }
        }
        let is_empty = match value {
            IniValue::Object(map) => map.is_empty(),
            IniValue::Array(items) => items.is_empty(),
            _ => true,
        };
        if is_empty {
            self.logger
                .notice("write_section", &format!("section [{}] is empty", key));
            return;
        }
        self.output.push_str(&format!("\n[{}]\n", key));
        self.depth = 1;
        match value {
            IniValue::Object(map) => self.serialize_map(map, None),
            // a top-level list gets flattened under the section's own name
            other => self.flatten(key, other),
        }
        self.depth = 0;
    }

    /// Emits a nested value as bracket-path assignments under `label`.
    ///
    /// Keyed shapes extend the path with `[subkey]`, sequential shapes with
    /// the auto-index `[]`. Depth-first, pre-order; mapping children visit in
    /// entry-orderer order.
    fn flatten(&mut self, label: &str, value: &IniValue) {
        self.depth += 1;
        let shape = classify(value);
        self.logger
            .debug("flatten", &format!("{} = {}", label, shape));
        match value {
            IniValue::Object(map)
                if matches!(shape, ArrayShape::Associative | ArrayShape::Numeric) =>
            {
                for (key, child) in ordered_entries(map) {
                    let path = format!("{}[{}]", label, key);
                    self.flatten_child(&path, child);
                }
            }
            IniValue::Object(map) => {
                let path = format!("{}[]", label);
                for (_, child) in ordered_entries(map) {
                    self.flatten_child(&path, child);
                }
            }
            IniValue::Array(items) => {
                let path = format!("{}[]", label);
                for child in items {
                    self.flatten_child(&path, child);
                }
            }
            _ => {}
        }
        self.depth -= 1;
    }

    fn flatten_child(&mut self, path: &str, child: &IniValue) {
        if child.is_nested() {
            if self.depth + 1 >= FLATTEN_DEPTH_LIMIT {
                self.write_joined(path, child);
            } else {
                self.flatten(path, child);
            }
        } else {
            self.output.push_str(&format!("{} = {}\n", path, child));
        }
    }

    /// Joins the remaining subtree's leaves into one quoted scalar. This is
    /// the lossy edge of the format: the deserializer's expander splits the
    /// string back on the same delimiter.
    fn write_joined(&mut self, path: &str, value: &IniValue) {
        let mut leaves = Vec::new();
        collect_leaves(value, &mut leaves);
        self.logger.debug(
            "write_joined",
            &format!("{}: {} leaves joined", path, leaves.len()),
        );
        let joined = leaves.join(&self.options.delimiter.to_string());
        self.output.push_str(&format!("{} = \"{}\"\n", path, joined));
    }
}

fn collect_leaves(value: &IniValue, out: &mut Vec<String>) {
    match value {
        IniValue::Array(items) => {
            for child in items {
                collect_leaves(child, out);
            }
        }
        IniValue::Object(map) => {
            for (_, child) in map.iter() {
                collect_leaves(child, out);
            }
        }
        scalar => {
            if let Some(lexeme) = scalar.scalar_lexeme() {
                out.push(lexeme);
            }
        }
    }
}

/// Serializer that converts any `Serialize` type into an [`IniValue`] tree.
///
/// This powers [`to_value`](crate::to_value); the tree serializer above then
/// does the actual text generation. Variants other than unit variants have
/// no INI representation and are rejected.
pub struct IniValueSerializer;

pub struct SerializeVec {
    vec: Vec<IniValue>,
}

pub struct SerializeMap {
    map: IniMap,
    current_key: Option<String>,
}

impl ser::Serializer for IniValueSerializer {
    type Ok = IniValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<IniValue> {
        Ok(IniValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<IniValue> {
        Ok(IniValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<IniValue> {
        Ok(IniValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<IniValue> {
        Ok(IniValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<IniValue> {
        Ok(IniValue::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<IniValue> {
        Ok(IniValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<IniValue> {
        Ok(IniValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<IniValue> {
        Ok(IniValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<IniValue> {
        if v <= i64::MAX as u64 {
            Ok(IniValue::Number(Number::Integer(v as i64)))
        } else {
            Ok(IniValue::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<IniValue> {
        Ok(IniValue::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<IniValue> {
        Ok(IniValue::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<IniValue> {
        Ok(IniValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<IniValue> {
        Ok(IniValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<IniValue> {
        let vec = v
            .iter()
            .map(|&b| IniValue::Number(Number::Integer(b as i64)))
            .collect();
        Ok(IniValue::Array(vec))
    }

    fn serialize_none(self) -> Result<IniValue> {
        Ok(IniValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<IniValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<IniValue> {
        Ok(IniValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<IniValue> {
        Ok(IniValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<IniValue> {
        Ok(IniValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<IniValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<IniValue>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: IniMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = IniValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_ini_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<IniValue> {
        Ok(IniValue::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = IniValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_ini_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<IniValue> {
        Ok(IniValue::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = IniValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_ini_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<IniValue> {
        Ok(IniValue::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = IniValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_ini_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<IniValue> {
        Ok(IniValue::Array(self.vec))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = IniValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_ini_value(key)? {
            IniValue::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::custom("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_ini_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<IniValue> {
        Ok(IniValue::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = IniValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_ini_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<IniValue> {
        Ok(IniValue::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = IniValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_ini_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<IniValue> {
        Ok(IniValue::Object(self.map))
    }
}

fn to_ini_value<T: Serialize + ?Sized>(value: &T) -> Result<IniValue> {
    value.serialize(IniValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini;

    fn serialize(value: &IniValue) -> (String, String) {
        let mut serializer = Serializer::new(IniOptions::default());
        serializer.serialize(value.as_object().unwrap(), None);
        let diagnostics = serializer.logger().all().to_string();
        (serializer.into_inner(), diagnostics)
    }

    #[test]
    fn test_empty_mapping_emits_nothing() {
        let (text, diagnostics) = serialize(&ini!({}));
        assert_eq!(text, "");
        assert!(diagnostics.contains("[NOTICE] serialize_map(): mapping is empty"));
    }

    #[test]
    fn test_scalar_encodings() {
        let (text, _) = serialize(&ini!({
            "flag": true,
            "off": false,
            "count": 42,
            "ratio": 2.5,
            "name": "phplog",
            "missing": null
        }));
        assert_eq!(
            text,
            "flag = true\noff = false\ncount = 42\nratio = 2.5\nname = \"phplog\"\nmissing = null\n"
        );
    }

    #[test]
    fn test_integral_float_prints_bare() {
        let (text, _) = serialize(&ini!({"x": 3.0}));
        assert_eq!(text, "x = 3\n");
    }

    #[test]
    fn test_comment_line_and_marker() {
        let (text, _) = serialize(&ini!({
            ";10": "made with inigen",
            ";20": "Generated at @@@",
            "key": 1
        }));
        assert!(text.starts_with("; made with inigen\n; Generated at "));
        assert!(!text.contains("@@@"));
        assert!(!text.contains(";10"));
        assert!(text.ends_with("key = 1\n"));
    }

    #[test]
    fn test_section_for_nested_entry() {
        let (text, _) = serialize(&ini!({
            "top": 1,
            "server": {"host": "localhost", "port": 8080}
        }));
        assert_eq!(
            text,
            "top = 1\n\n[server]\nhost = \"localhost\"\nport = 8080\n"
        );
    }

    #[test]
    fn test_scalars_precede_sections() {
        let (text, _) = serialize(&ini!({
            "server": {"port": 1},
            "name": "demo"
        }));
        let name_at = text.find("name = ").unwrap();
        let header_at = text.find("[server]").unwrap();
        assert!(name_at < header_at);
    }

    #[test]
    fn test_associative_flattening_inside_section() {
        let (text, _) = serialize(&ini!({
            "log_file": {
                "rotate": "day",
                "sub_name": {"errors": "critical"}
            }
        }));
        assert!(text.contains("\n[log_file]\nrotate = \"day\"\nsub_name[errors] = \"critical\"\n"));
    }

    #[test]
    fn test_sequential_flattening_auto_index() {
        let (text, _) = serialize(&ini!({
            "levels": ["critical", "error", "warning"]
        }));
        assert_eq!(
            text,
            "\n[levels]\nlevels[] = \"critical\"\nlevels[] = \"error\"\nlevels[] = \"warning\"\n"
        );
    }

    #[test]
    fn test_numeric_keys_keep_indices() {
        let (text, _) = serialize(&ini!({
            "slots": {"0": "a", "2": "b"}
        }));
        assert!(text.contains("slots[0] = \"a\"\nslots[2] = \"b\"\n"));
    }

    #[test]
    fn test_depth_limit_joins_leaves() {
        let (text, _) = serialize(&ini!({
            "log_file": {
                "sub_name": {
                    "errors": ["critical", "error"],
                    "messages": ["warning", "info"]
                }
            }
        }));
        assert!(text.contains("sub_name[errors] = \"critical#error\"\n"));
        assert!(text.contains("sub_name[messages] = \"warning#info\"\n"));
    }

    #[test]
    fn test_custom_delimiter() {
        let config = ini!({"s": {"deep": {"list": ["a", "b"]}}});
        let mut serializer = Serializer::new(IniOptions::new().with_delimiter('|'));
        serializer.serialize(config.as_object().unwrap(), None);
        assert!(serializer.into_inner().contains("deep[list] = \"a|b\"\n"));
    }

    #[test]
    fn test_section_filter() {
        let config = ini!({
            "shared": 1,
            "a": {"x": 1},
            "b": {"y": 2}
        });
        let mut serializer = Serializer::new(IniOptions::default());
        serializer.serialize(config.as_object().unwrap(), Some("b"));
        let text = serializer.into_inner();
        assert!(text.contains("shared = 1\n"));
        assert!(!text.contains("[a]"));
        assert!(text.contains("\n[b]\ny = 2\n"));
    }

    #[test]
    fn test_empty_section_skipped_with_notice() {
        let (text, diagnostics) = serialize(&ini!({"empty": {}}));
        assert_eq!(text, "");
        assert!(diagnostics.contains("section [empty] is empty"));
    }

    #[test]
    fn test_to_value_unit_variant_is_string() {
        #[derive(serde::Serialize)]
        enum Rotate {
            Day,
        }
        let value = crate::to_value(&Rotate::Day).unwrap();
        assert_eq!(value, IniValue::String("Day".to_string()));
    }
}
