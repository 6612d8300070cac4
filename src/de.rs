//! INI deserialization.
//!
//! Parsing runs in two passes, mirroring how the text was produced:
//!
//! 1. **Line parse**: sections fold into nested mappings one level deep,
//!    `name[sub] = v` builds a nested mapping, `name[] = v` appends to a
//!    list, and scalars are typed from their literal form (`true`/`false`,
//!    integers, floats, `null`, quoted or bare strings). Anything
//!    unparseable is a hard [`Error::Syntax`] with line information; there
//!    is no partial recovery.
//! 2. **Expand**: every string leaf containing the delimiter is split back
//!    into a list, recovering what the serializer joined at its depth
//!    limit. A literal string that happens to contain the delimiter splits
//!    too; the format cannot tell the difference (see [`crate::format`]).
//!
//! Comment lines (`;`) are skipped: comments are one-way, tree to text.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use inigen::{from_str, IniValue};
//!
//! let text = "log_level = \"debug\"\n\n[log_file]\nrotate = \"day\"\n";
//! let config: IniValue = from_str(text).unwrap();
//! let map = config.as_object().unwrap();
//! assert_eq!(map.get("log_level").and_then(|v| v.as_str()), Some("debug"));
//! ```

use crate::{Error, IniLogger, IniMap, IniOptions, IniValue, Number, Result};

/// The INI deserializer.
///
/// Like the serializer, it is a per-call context: input, options and the
/// diagnostic log live on the instance.
pub struct Deserializer<'de> {
    input: &'de str,
    options: IniOptions,
    logger: IniLogger,
}

impl<'de> Deserializer<'de> {
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn from_str(input: &'de str) -> Self {
        Self::with_options(input, IniOptions::default())
    }

    #[must_use]
    pub fn with_options(input: &'de str, options: IniOptions) -> Self {
        let logger = IniLogger::new(options.log_level);
        Deserializer {
            input,
            options,
            logger,
        }
    }

    /// The diagnostics accumulated so far.
    #[must_use]
    pub fn logger(&self) -> &IniLogger {
        &self.logger
    }

    /// Parses the input into a value tree, including the expansion pass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] on the first malformed line.
    pub fn parse(&mut self) -> Result<IniValue> {
        let flat = self.parse_document()?;
        Ok(expand(flat, self.options.delimiter))
    }

    fn parse_document(&mut self) -> Result<IniValue> {
        self.logger.debug("parse_document", "parsing INI text");
        let mut root = IniMap::new();
        let mut section: Option<String> = None;

        for (index, raw) in self.input.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }
            if let Some(rest) = line.strip_prefix('[') {
                let name = rest
                    .strip_suffix(']')
                    .ok_or_else(|| Error::syntax(line_no, line.len(), "unterminated section header"))?
                    .trim();
                if name.is_empty() {
                    return Err(Error::syntax(line_no, 2, "empty section name"));
                }
                self.logger
                    .debug("parse_document", &format!("entering section [{}]", name));
                if !matches!(root.get(name), Some(IniValue::Object(_))) {
                    root.insert(name.to_string(), IniValue::Object(IniMap::new()));
                }
                section = Some(name.to_string());
                continue;
            }

            let eq = line
                .find('=')
                .ok_or_else(|| Error::syntax(line_no, 1, "expected `key = value`"))?;
            let key_part = line[..eq].trim_end();
            let value_part = line[eq + 1..].trim();
            if key_part.is_empty() {
                return Err(Error::syntax(line_no, 1, "missing key before `=`"));
            }
            let (base, brackets) = parse_key(key_part, line_no)?;
            let value = parse_scalar(value_part, line_no)?;

            match &section {
                Some(name) => {
                    // the header pass above guarantees an Object slot
                    if let Some(IniValue::Object(inner)) = root.get_mut(name) {
                        insert_path(inner, &base, &brackets, value, line_no)?;
                    }
                }
                None => insert_path(&mut root, &base, &brackets, value, line_no)?,
            }
        }

        Ok(IniValue::Object(root))
    }
}

/// Splits `name[a][b]` into its base and bracket segments; an empty segment
/// is the auto-index `[]`.
fn parse_key(key: &str, line: usize) -> Result<(String, Vec<Option<String>>)> {
    let Some(open) = key.find('[') else {
        if key.contains(']') {
            return Err(Error::syntax(line, 1, "`]` without matching `[` in key"));
        }
        return Ok((key.to_string(), Vec::new()));
    };
    let base = key[..open].trim_end();
    if base.is_empty() {
        return Err(Error::syntax(line, 1, "missing key before `[`"));
    }
    let mut brackets = Vec::new();
    let mut rest = &key[open..];
    while !rest.is_empty() {
        if !rest.starts_with('[') {
            return Err(Error::syntax(line, open + 1, "malformed bracket path in key"));
        }
        let close = rest
            .find(']')
            .ok_or_else(|| Error::syntax(line, open + 1, "unterminated `[` in key"))?;
        let segment = rest[1..close].trim();
        brackets.push(if segment.is_empty() {
            None
        } else {
            Some(segment.to_string())
        });
        rest = &rest[close + 1..];
    }
    Ok((base.to_string(), brackets))
}

/// Types a raw scalar the way the writer encodes them: quoted strings,
/// boolean words (also `yes`/`no`/`on`/`off`), `null`, then numeric
/// literals, with bare text as the fallback.
fn parse_scalar(raw: &str, line: usize) -> Result<IniValue> {
    if let Some(stripped) = raw.strip_prefix('"') {
        return match stripped.strip_suffix('"') {
            Some(inner) => Ok(IniValue::String(inner.to_string())),
            None => Err(Error::syntax(line, 1, "unterminated quoted value")),
        };
    }
    if raw.is_empty() {
        return Ok(IniValue::String(String::new()));
    }
    if ["true", "yes", "on"].iter().any(|w| raw.eq_ignore_ascii_case(w)) {
        return Ok(IniValue::Bool(true));
    }
    if ["false", "no", "off"].iter().any(|w| raw.eq_ignore_ascii_case(w)) {
        return Ok(IniValue::Bool(false));
    }
    if raw.eq_ignore_ascii_case("null") {
        return Ok(IniValue::Null);
    }
    if let Ok(integer) = raw.parse::<i64>() {
        return Ok(IniValue::Number(Number::Integer(integer)));
    }
    if let Ok(float) = raw.parse::<f64>() {
        return Ok(IniValue::Number(Number::Float(float)));
    }
    Ok(IniValue::String(raw.to_string()))
}

fn insert_path(
    map: &mut IniMap,
    base: &str,
    brackets: &[Option<String>],
    value: IniValue,
    line: usize,
) -> Result<()> {
    match brackets.split_first() {
        None => {
            map.insert(base.to_string(), value);
            Ok(())
        }
        Some((None, [])) => {
            push_item(map, base, value);
            Ok(())
        }
        Some((None, _)) => Err(Error::syntax(
            line,
            1,
            "auto-index `[]` is only valid in final position",
        )),
        Some((Some(segment), rest)) => {
            let slot = map
                .entry(base.to_string())
                .or_insert_with(|| IniValue::Object(IniMap::new()));
            if !slot.is_object() {
                *slot = IniValue::Object(IniMap::new());
            }
            if let IniValue::Object(inner) = slot {
                insert_path(inner, segment, rest, value, line)?;
            }
            Ok(())
        }
    }
}

fn push_item(map: &mut IniMap, name: &str, value: IniValue) {
    let slot = map
        .entry(name.to_string())
        .or_insert_with(|| IniValue::Array(Vec::new()));
    if !slot.is_array() {
        *slot = IniValue::Array(Vec::new());
    }
    if let IniValue::Array(items) = slot {
        items.push(value);
    }
}

/// Expansion pass: splits delimiter-joined strings back into lists.
///
/// Trailing empty segments are dropped, so a joined value with a stray
/// trailing delimiter still yields the original items.
pub(crate) fn expand(value: IniValue, delimiter: char) -> IniValue {
    match value {
        IniValue::Object(map) => IniValue::Object(
            map.into_iter()
                .map(|(key, child)| (key, expand(child, delimiter)))
                .collect(),
        ),
        IniValue::Array(items) => IniValue::Array(
            items
                .into_iter()
                .map(|child| expand(child, delimiter))
                .collect(),
        ),
        IniValue::String(s) if s.contains(delimiter) => {
            let mut parts: Vec<&str> = s.split(delimiter).collect();
            while parts.len() > 1 && parts.last() == Some(&"") {
                parts.pop();
            }
            IniValue::Array(
                parts
                    .into_iter()
                    .map(|part| IniValue::String(part.to_string()))
                    .collect(),
            )
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini;

    fn parse(text: &str) -> IniValue {
        Deserializer::from_str(text).parse().unwrap()
    }

    #[test]
    fn test_typed_scalars() {
        let config = parse(
            "flag = true\noff = no\ncount = 42\nratio = 2.5\nname = \"phplog\"\nmissing = null\nbare = hello\n",
        );
        assert_eq!(
            config,
            ini!({
                "flag": true,
                "off": false,
                "count": 42,
                "ratio": 2.5,
                "name": "phplog",
                "missing": null,
                "bare": "hello"
            })
        );
    }

    #[test]
    fn test_sections_fold_one_level() {
        let config = parse("top = 1\n\n[server]\nhost = \"localhost\"\nport = 8080\n");
        assert_eq!(
            config,
            ini!({
                "top": 1,
                "server": {"host": "localhost", "port": 8080}
            })
        );
    }

    #[test]
    fn test_bracket_key_builds_mapping() {
        let config = parse("[log_file]\nsub_name[errors] = \"critical\"\nsub_name[messages] = \"warning\"\n");
        assert_eq!(
            config,
            ini!({
                "log_file": {
                    "sub_name": {"errors": "critical", "messages": "warning"}
                }
            })
        );
    }

    #[test]
    fn test_auto_index_appends() {
        let config = parse("[levels]\nlevels[] = \"critical\"\nlevels[] = \"error\"\n");
        assert_eq!(
            config,
            ini!({"levels": {"levels": ["critical", "error"]}})
        );
    }

    #[test]
    fn test_comment_lines_skipped() {
        let config = parse("; generated file\nkey = 1\n; trailing note\n");
        assert_eq!(config, ini!({"key": 1}));
    }

    #[test]
    fn test_repeated_section_merges() {
        let config = parse("[s]\na = 1\n[t]\nx = 9\n[s]\nb = 2\n");
        assert_eq!(
            config,
            ini!({"s": {"a": 1, "b": 2}, "t": {"x": 9}})
        );
    }

    #[test]
    fn test_expander_splits_joined_lists() {
        let config = parse("[log_file]\nsub_name[errors] = \"critical#error\"\n");
        assert_eq!(
            config,
            ini!({"log_file": {"sub_name": {"errors": ["critical", "error"]}}})
        );
    }

    #[test]
    fn test_expander_drops_trailing_empty_segments() {
        assert_eq!(
            expand(IniValue::from("a#b#"), '#'),
            ini!(["a", "b"])
        );
        assert_eq!(
            expand(IniValue::from("a##"), '#'),
            ini!(["a"])
        );
    }

    #[test]
    fn test_expander_keeps_leading_empty_segment() {
        assert_eq!(
            expand(IniValue::from("#a"), '#'),
            ini!(["", "a"])
        );
    }

    #[test]
    fn test_expander_leaves_plain_strings_alone() {
        assert_eq!(expand(IniValue::from("plain"), '#'), IniValue::from("plain"));
        assert_eq!(expand(IniValue::from(42), '#'), IniValue::from(42));
    }

    #[test]
    fn test_custom_delimiter() {
        let mut de = Deserializer::with_options(
            "[s]\ndeep[list] = \"a|b\"\n",
            IniOptions::new().with_delimiter('|'),
        );
        let config = de.parse().unwrap();
        assert_eq!(
            config,
            ini!({"s": {"deep": {"list": ["a", "b"]}}})
        );
    }

    #[test]
    fn test_missing_assignment_is_syntax_error() {
        let err = Deserializer::from_str("key = 1\nnonsense\n")
            .parse()
            .unwrap_err();
        match err {
            Error::Syntax { line, .. } => assert_eq!(line, 2),
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_unterminated_section_is_syntax_error() {
        let err = Deserializer::from_str("[section\n").parse().unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 1, .. }));
    }

    #[test]
    fn test_unterminated_quote_is_syntax_error() {
        let err = Deserializer::from_str("key = \"open\n").parse().unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 1, .. }));
    }

    #[test]
    fn test_empty_section_name_is_syntax_error() {
        let err = Deserializer::from_str("[]\n").parse().unwrap_err();
        assert!(matches!(err, Error::Syntax { .. }));
    }

    #[test]
    fn test_empty_value_is_empty_string() {
        let config = parse("key =\n");
        assert_eq!(config, ini!({"key": ""}));
    }
}
