//! Configuration options for INI serialization and deserialization.
//!
//! [`IniOptions`] travels with one [`Serializer`](crate::Serializer) or
//! [`Deserializer`](crate::Deserializer) instance, so concurrent conversions
//! with different delimiters never interfere.
//!
//! ## Examples
//!
//! ```rust
//! use inigen::{ini, to_string_with_options, IniOptions, Severity};
//!
//! let config = ini!({
//!     "section": {"deep": {"list": ["a", "b"]}}
//! });
//!
//! // Join deep lists with '|' instead of the default '#'
//! let options = IniOptions::new().with_delimiter('|');
//! let text = to_string_with_options(&config, options).unwrap();
//! assert!(text.contains("deep[list] = \"a|b\""));
//!
//! // Silence everything below notice in the diagnostic log
//! let options = IniOptions::new().with_log_level(Severity::Notice);
//! ```

use crate::Severity;

/// Per-instance configuration for serializers and deserializers.
///
/// # Examples
///
/// ```rust
/// use inigen::{IniOptions, Severity};
///
/// let options = IniOptions::new()
///     .with_delimiter('|')
///     .with_log_level(Severity::Warning);
/// assert_eq!(options.delimiter, '|');
/// ```
#[derive(Clone, Debug)]
pub struct IniOptions {
    /// Character joining the items of a list that sits too deep for bracket
    /// paths, and splitting such strings back into lists on read. Must not
    /// occur inside list item values; the format cannot tell the difference.
    pub delimiter: char,
    /// Maximum severity recorded by the instance's diagnostic log.
    pub log_level: Severity,
}

impl Default for IniOptions {
    fn default() -> Self {
        IniOptions {
            delimiter: '#',
            log_level: Severity::Debug,
        }
    }
}

impl IniOptions {
    /// Creates default options: delimiter `#`, full debug logging.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inigen::IniOptions;
    ///
    /// let options = IniOptions::new();
    /// assert_eq!(options.delimiter, '#');
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the list-encoding delimiter character.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the maximum severity recorded by the diagnostic log.
    #[must_use]
    pub fn with_log_level(mut self, level: Severity) -> Self {
        self.log_level = level;
        self
    }
}
