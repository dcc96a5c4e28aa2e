//! This module implements `CalendarError`.

use core::fmt;

/// `CalendarError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error kind for values outside of a conversion domain.
    #[default]
    Range,
    /// Error kind for failed internal invariants.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Range => "RangeError",
            Self::Assert => "ImplementationError",
        })
    }
}

/// The error type for the checked conversions of `gregorian_eaf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarError {
    kind: ErrorKind,
    msg: &'static str,
}

impl CalendarError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self { kind, msg: "" }
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create an assertion error.
    #[inline]
    #[must_use]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert).with_message("Implementation error: assertion failed.")
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub const fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.msg
    }
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }

        Ok(())
    }
}

impl core::error::Error for CalendarError {}
