//! Level-filtered diagnostic log kept alongside a serializer or deserializer.
//!
//! Every [`crate::ser::Serializer`] and [`crate::de::Deserializer`] owns one
//! [`IniLogger`]; diagnostics accumulate in append-only buffers that can be
//! inspected after the call. Logging never fails and never propagates errors
//! into the conversion itself.
//!
//! Messages are routed into four subjects by severity:
//!
//! | Subject    | Severities            |
//! |------------|-----------------------|
//! | `all`      | critical ..= debug    |
//! | `errors`   | critical ..= error    |
//! | `warnings` | warning ..= notice    |
//! | `messages` | info ..= debug        |
//!
//! ## Examples
//!
//! ```rust
//! use inigen::{IniLogger, Severity};
//!
//! let mut log = IniLogger::new(Severity::Debug);
//! log.notice("serialize_map", "mapping is empty");
//! assert!(log.all().contains("[NOTICE] serialize_map(): mapping is empty"));
//! assert!(log.warnings().contains("mapping is empty"));
//! assert!(log.errors().is_empty());
//! ```

use crate::timestamp;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Severity of a diagnostic message, most urgent first.
///
/// The logger records a message when its severity is at most the configured
/// maximum level, so `Severity::Critical` always passes and
/// `Severity::Debug` only passes when everything is logged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Verbose,
    Debug,
}

impl Severity {
    /// Returns the lowercase name of this severity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inigen::Severity;
    ///
    /// assert_eq!(Severity::Notice.as_str(), "notice");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Info => "info",
            Severity::Verbose => "verbose",
            Severity::Debug => "debug",
        }
    }

    /// Returns the uppercase tag used in log lines.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Verbose => "VERBOSE",
            Severity::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "critical" => Ok(Severity::Critical),
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "notice" => Ok(Severity::Notice),
            "info" => Ok(Severity::Info),
            "verbose" => Ok(Severity::Verbose),
            "debug" => Ok(Severity::Debug),
            other => Err(Error::custom(format!("unknown severity `{}`", other))),
        }
    }
}

/// Append-only, level-filtered diagnostic log.
///
/// # Examples
///
/// ```rust
/// use inigen::{IniLogger, Severity};
///
/// let mut log = IniLogger::new(Severity::Notice);
/// log.debug("flatten", "sub_name = associative"); // filtered out
/// log.error("parse", "unterminated section header");
/// assert!(log.all().contains("[ERROR]"));
/// assert!(!log.all().contains("[DEBUG]"));
/// ```
#[derive(Debug, Clone)]
pub struct IniLogger {
    level: Severity,
    all: String,
    errors: String,
    warnings: String,
    messages: String,
}

impl IniLogger {
    /// Creates a logger recording everything up to and including `level`.
    #[must_use]
    pub fn new(level: Severity) -> Self {
        IniLogger {
            level,
            all: String::new(),
            errors: String::new(),
            warnings: String::new(),
            messages: String::new(),
        }
    }

    /// Sets the maximum severity to record.
    pub fn set_level(&mut self, level: Severity) {
        self.level = level;
    }

    /// Returns the maximum severity currently recorded.
    #[must_use]
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Records one message under `origin` at the given severity.
    ///
    /// Messages above the configured level are dropped silently. There is no
    /// failure mode: callers never observe a result.
    pub fn log(&mut self, severity: Severity, origin: &str, message: &str) {
        if severity > self.level {
            return;
        }
        let line = format!(
            "{} [{}] {}(): {}\n",
            timestamp::now(timestamp::LOG_STAMP),
            severity.tag(),
            origin,
            message
        );
        self.all.push_str(&line);
        match severity {
            Severity::Critical | Severity::Error => self.errors.push_str(&line),
            Severity::Warning | Severity::Notice => self.warnings.push_str(&line),
            Severity::Info | Severity::Verbose | Severity::Debug => {
                self.messages.push_str(&line);
            }
        }
    }

    pub fn critical(&mut self, origin: &str, message: &str) {
        self.log(Severity::Critical, origin, message);
    }

    pub fn error(&mut self, origin: &str, message: &str) {
        self.log(Severity::Error, origin, message);
    }

    pub fn warning(&mut self, origin: &str, message: &str) {
        self.log(Severity::Warning, origin, message);
    }

    pub fn notice(&mut self, origin: &str, message: &str) {
        self.log(Severity::Notice, origin, message);
    }

    pub fn info(&mut self, origin: &str, message: &str) {
        self.log(Severity::Info, origin, message);
    }

    pub fn verbose(&mut self, origin: &str, message: &str) {
        self.log(Severity::Verbose, origin, message);
    }

    pub fn debug(&mut self, origin: &str, message: &str) {
        self.log(Severity::Debug, origin, message);
    }

    /// Everything recorded so far.
    #[must_use]
    pub fn all(&self) -> &str {
        &self.all
    }

    /// Critical and error messages.
    #[must_use]
    pub fn errors(&self) -> &str {
        &self.errors
    }

    /// Warning and notice messages.
    #[must_use]
    pub fn warnings(&self) -> &str {
        &self.warnings
    }

    /// Info, verbose and debug messages.
    #[must_use]
    pub fn messages(&self) -> &str {
        &self.messages
    }
}

impl Default for IniLogger {
    fn default() -> Self {
        Self::new(Severity::Debug)
    }
}
