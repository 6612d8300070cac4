//! # inigen
//!
//! Nested configuration trees to INI text and back.
//!
//! ## What is this?
//!
//! INI has exactly two native levels, `[section]` headers and `key = value`
//! assignments, but real configuration rarely stops there. This library
//! serializes arbitrarily deep key-value trees into INI by classifying each
//! collection's shape and picking the flattest spelling that still round
//! trips: sections at the top, bracket paths (`label[key]`, `label[]`)
//! inside them, and delimiter-joined strings (`"critical#error"`) once the
//! format runs out of depth. The deserializer reverses every step, splitting
//! joined strings back into lists.
//!
//! ## Key Features
//!
//! - **Shape-aware flattening**: sequential, numeric-keyed and associative
//!   collections each get the right bracket-path spelling
//! - **Deterministic layout**: scalar assignments always precede section
//!   headers; insertion order is preserved everywhere else
//! - **Serde Compatible**: any `#[derive(Serialize, Deserialize)]` type can
//!   be written and read via [`to_string`] / [`from_str`]
//! - **Comment lines**: `;`-keyed pseudo-entries become `; ` comments, with
//!   `@@@` replaced by the generation timestamp
//! - **Inspectable diagnostics**: each serializer/deserializer carries a
//!   level-filtered [`IniLogger`] you can query after the call
//!
//! ## Quick Start
//!
//! ```rust
//! use inigen::{ini, from_str, to_string, IniValue};
//!
//! let config = ini!({
//!     "log_level": "debug",
//!     "log_file": {
//!         "rotate": "day",
//!         "sub_name": {
//!             "errors": ["critical", "error"]
//!         }
//!     }
//! });
//!
//! let text = to_string(&config).unwrap();
//! assert!(text.contains("[log_file]"));
//! assert!(text.contains("rotate = \"day\""));
//! assert!(text.contains("sub_name[errors] = \"critical#error\""));
//!
//! let back: IniValue = from_str(&text).unwrap();
//! assert_eq!(back, config);
//! ```
//!
//! ### Typed configuration
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use inigen::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Config {
//!     log_level: String,
//!     server: Server,
//! }
//!
//! let config = Config {
//!     log_level: "debug".to_string(),
//!     server: Server { host: "localhost".to_string(), port: 8080 },
//! };
//!
//! let text = to_string(&config).unwrap();
//! let back: Config = from_str(&text).unwrap();
//! assert_eq!(config, back);
//! ```
//!
//! ## What INI cannot carry
//!
//! The format is lossy at three documented edges: strings containing the
//! delimiter split into lists on read, comment lines do not round trip, and
//! quotes inside strings are not escaped. See [`format`] for the dialect
//! specification and the full list.

pub mod de;
pub mod error;
pub mod format;
pub mod logger;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod shape;
pub mod value;

mod timestamp;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use logger::{IniLogger, Severity};
pub use map::IniMap;
pub use options::IniOptions;
pub use ser::{IniValueSerializer, Serializer};
pub use shape::{classify, ordered_entries, ArrayShape};
pub use value::{IniValue, Number};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// Serialize any `T: Serialize` to an INI string.
///
/// The top-level value must serialize to a mapping; INI has no spelling for
/// a bare scalar or list document.
///
/// # Examples
///
/// ```rust
/// use inigen::{ini, to_string};
///
/// let config = ini!({"log_level": "debug"});
/// let text = to_string(&config).unwrap();
/// assert_eq!(text, "log_level = \"debug\"\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if the value is not a mapping or
/// contains enum variants with payloads.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, IniOptions::default())
}

/// Serialize any `T: Serialize` to an INI string with custom options.
///
/// # Examples
///
/// ```rust
/// use inigen::{ini, to_string_with_options, IniOptions};
///
/// let config = ini!({"s": {"deep": {"list": ["a", "b"]}}});
/// let options = IniOptions::new().with_delimiter('|');
/// let text = to_string_with_options(&config, options).unwrap();
/// assert!(text.contains("deep[list] = \"a|b\""));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented (see [`to_string`]).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: IniOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let map = require_mapping(to_value(value)?)?;
    let mut serializer = Serializer::new(options);
    serializer.serialize(&map, None);
    Ok(serializer.into_inner())
}

/// Serialize only one section of a mapping.
///
/// Top-level scalar entries are still emitted; nested entries other than
/// `section` are skipped. Used for partial/selective generation.
///
/// # Examples
///
/// ```rust
/// use inigen::{ini, to_string_section};
///
/// let config = ini!({
///     "a": {"x": 1},
///     "b": {"y": 2}
/// });
/// let text = to_string_section(&config, "b").unwrap();
/// assert!(!text.contains("[a]"));
/// assert!(text.contains("[b]"));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented (see [`to_string`]).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_section<T>(value: &T, section: &str) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let map = require_mapping(to_value(value)?)?;
    let mut serializer = Serializer::new(IniOptions::default());
    serializer.serialize(&map, Some(section));
    Ok(serializer.into_inner())
}

/// Convert any `T: Serialize` to an [`IniValue`].
///
/// Useful for building or inspecting trees when the structure isn't known at
/// compile time.
///
/// # Examples
///
/// ```rust
/// use inigen::{to_value, IniValue};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: IniValue = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<IniValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(IniValueSerializer)
}

/// Deserialize a `T` from an [`IniValue`] tree.
///
/// # Examples
///
/// ```rust
/// use inigen::{from_value, ini};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i64, y: i64 }
///
/// let point: Point = from_value(ini!({"x": 1, "y": 2})).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the tree does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: IniValue) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(value)
}

/// Serialize any `T: Serialize` to a writer in INI format.
///
/// # Examples
///
/// ```rust
/// use inigen::{ini, to_writer};
///
/// let config = ini!({"key": 1});
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &config).unwrap();
/// assert_eq!(buffer, b"key = 1\n");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, IniOptions::default())
}

/// Serialize any `T: Serialize` to a writer in INI format with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: IniOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Generate an INI file with the default header and a timestamp.
///
/// Equivalent to
/// `to_file_with_header(path, value, None, true)`.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_file<T, P>(path: P, value: &T) -> Result<()>
where
    T: ?Sized + Serialize,
    P: AsRef<Path>,
{
    to_file_with_header(path, value, None, true)
}

/// Generate an INI file, creating the containing directory if needed.
///
/// The file starts with `header` (default `"; Config file generated at "`),
/// followed by the current local time when `timestamped` is set, a newline,
/// and the serialized document.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory or file cannot be written, or a
/// serialization error for unrepresentable values.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_file_with_header<T, P>(
    path: P,
    value: &T,
    header: Option<&str>,
    timestamped: bool,
) -> Result<()>
where
    T: ?Sized + Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|e| Error::io(&e.to_string()))?;
        }
    }
    let mut contents = String::from(header.unwrap_or("; Config file generated at "));
    if timestamped {
        contents.push_str(&timestamp::now(timestamp::FILE_STAMP));
    }
    contents.push('\n');
    contents.push_str(&to_string(value)?);
    fs::write(path, contents).map_err(|e| Error::io(&e.to_string()))
}

/// Deserialize an instance of type `T` from a string of INI text.
///
/// # Examples
///
/// ```rust
/// use inigen::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Config { log_level: String }
///
/// let config: Config = from_str("log_level = \"debug\"\n").unwrap();
/// assert_eq!(config.log_level, "debug");
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] with line information for malformed input, or a
/// deserialization error if the document does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, IniOptions::default())
}

/// Deserialize from a string of INI text with custom options.
///
/// The options' delimiter controls the expansion pass that splits joined
/// strings back into lists.
///
/// # Errors
///
/// See [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: IniOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    let value = Deserializer::with_options(s, options).parse()?;
    from_value(value)
}

/// Deserialize an instance of type `T` from an I/O stream of INI text.
///
/// # Errors
///
/// Returns an error if reading fails, the input is malformed, or the
/// document does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of INI text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, the input is
/// malformed, or the document does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Deserialize an instance of type `T` from an INI file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or any [`from_str`]
/// error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_file<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let text = fs::read_to_string(path).map_err(|e| Error::io(&e.to_string()))?;
    from_str(&text)
}

fn require_mapping(value: IniValue) -> Result<IniMap> {
    match value {
        IniValue::Object(map) => Ok(map),
        other => Err(Error::unsupported_type(&format!(
            "top-level value must be a mapping, found {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Server {
        host: String,
        port: u16,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Config {
        log_level: String,
        verbose: bool,
        server: Server,
    }

    fn sample() -> Config {
        Config {
            log_level: "debug".to_string(),
            verbose: true,
            server: Server {
                host: "localhost".to_string(),
                port: 8080,
            },
        }
    }

    #[test]
    fn test_struct_roundtrip() {
        let config = sample();
        let text = to_string(&config).unwrap();
        let back: Config = from_str(&text).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_tree_roundtrip() {
        let config = ini!({
            "log_level": "debug",
            "log_file": {
                "split": true,
                "rotate": "day"
            }
        });
        let text = to_string(&config).unwrap();
        let back: IniValue = from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_top_level_scalar_is_unsupported() {
        assert!(matches!(
            to_string(&42),
            Err(Error::UnsupportedType(_))
        ));
        assert!(matches!(
            to_string(&vec![1, 2, 3]),
            Err(Error::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_to_value_struct() {
        let value = to_value(&sample()).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(
            map.get("log_level"),
            Some(&IniValue::String("debug".to_string()))
        );
        assert!(map.get("server").is_some_and(|v| v.is_object()));
    }

    #[test]
    fn test_writer_matches_string() {
        let config = ini!({"a": 1, "b": {"c": 2}});
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &config).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), to_string(&config).unwrap());
    }

    #[test]
    fn test_from_slice_and_reader() {
        let text = b"key = 7\n";
        let via_slice: IniValue = from_slice(text).unwrap();
        let via_reader: IniValue = from_reader(std::io::Cursor::new(text)).unwrap();
        assert_eq!(via_slice, via_reader);
        assert_eq!(via_slice, ini!({"key": 7}));
    }

    #[test]
    fn test_section_selection() {
        let config = ini!({
            "shared": "x",
            "alpha": {"a": 1},
            "beta": {"b": 2}
        });
        let text = to_string_section(&config, "alpha").unwrap();
        assert!(text.contains("shared = \"x\""));
        assert!(text.contains("[alpha]"));
        assert!(!text.contains("[beta]"));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = std::env::temp_dir().join("inigen_test_cfg");
        let path = dir.join("app.ini");
        let config = ini!({"log_level": "debug", "log_file": {"rotate": "day"}});

        to_file(&path, &config).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("; Config file generated at "));

        let back: IniValue = from_file(&path).unwrap();
        assert_eq!(back, config);

        std::fs::remove_dir_all(&dir).ok();
    }
}
