//! Error types for combinator application.

use std::fmt;

use crate::value::Value;

/// Categories of application errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A non-combinator value was applied to an argument
    NotCallable,
    /// A value did not behave like `T` or `F` when asked to choose
    NotABoolean,
    /// Nested applications exceeded the configured maximum depth
    RecursionLimit,
}

/// An application error with context.
#[derive(Debug, Clone)]
pub struct Error {
    /// The category of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The value that caused the error (if available)
    pub value: Option<String>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            value: None,
        }
    }

    /// Add the offending value to the error.
    pub fn with_value(mut self, value: &Value) -> Self {
        self.value = Some(format!("{value}"));
        self
    }

    pub fn not_callable(value: &Value) -> Self {
        Self::new(ErrorKind::NotCallable, "value is not a combinator").with_value(value)
    }

    pub fn not_a_boolean(value: &Value) -> Self {
        Self::new(
            ErrorKind::NotABoolean,
            "boolean combinator did not select true or false",
        )
        .with_value(value)
    }

    pub fn recursion_limit(max_depth: usize, name: Option<&str>) -> Self {
        let message = match name {
            Some(name) => format!("maximum application depth {max_depth} exceeded applying {name}"),
            None => format!("maximum application depth {max_depth} exceeded"),
        };
        Self::new(ErrorKind::RecursionLimit, message)
    }

    pub fn is_recursion_limit(&self) -> bool {
        self.kind == ErrorKind::RecursionLimit
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref value) = self.value {
            // Long lists render badly in one line
            if value.chars().count() > 60 {
                let truncated: String = value.chars().take(57).collect();
                write!(f, ": {truncated}...")?;
            } else {
                write!(f, ": {value}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl From<Error> for String {
    fn from(err: Error) -> String {
        err.to_string()
    }
}
