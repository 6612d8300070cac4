//! Error types for INI serialization and deserialization.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: malformed INI input with line/column information
//! - **Unsupported Types**: values the INI data model cannot carry
//! - **I/O Errors**: file reading/writing failures
//!
//! Two further failure classes are deliberately *not* errors: a literal
//! string containing the list delimiter is indistinguishable from an encoded
//! list (silent precision loss), and comment lines do not survive a parse
//! (one-way by contract). Both are documented in [`crate::format`].
//!
//! ## Examples
//!
//! ```rust
//! use inigen::{from_str, Error, IniValue};
//!
//! let result: Result<IniValue, Error> = from_str("[section\nkey = 1");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during INI serialization/deserialization.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed INI input; parsing stops at the first offending line
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    /// Unsupported type for serialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inigen::Error;
    ///
    /// let err = Error::syntax(10, 5, "expected `key = value`");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an unsupported type error for values the INI model cannot carry.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inigen::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
