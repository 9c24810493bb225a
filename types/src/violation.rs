//! Structured failures returned by precondition checks.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a single precondition check.
pub type CheckResult = Result<(), Violation>;

/// Which rule a value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required value was absent or empty.
    MissingArgument,
    /// A value was present but breaks a domain rule.
    InvalidArgument,
    /// A numeric value is outside its permitted bounds.
    OutOfRange,
    /// A string does not have the required shape.
    InvalidFormat,
    /// The calling identity lacks a required role.
    Unauthorized,
}

impl ViolationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationKind::MissingArgument => "missing_argument",
            ViolationKind::InvalidArgument => "invalid_argument",
            ViolationKind::OutOfRange => "out_of_range",
            ViolationKind::InvalidFormat => "invalid_format",
            ViolationKind::Unauthorized => "unauthorized",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed precondition.
///
/// Carries the rule that was broken, the name of the offending argument and a
/// message fit for logs. `argument` is `None` only for [`ViolationKind::Unauthorized`],
/// which concerns the caller rather than any one argument.
///
/// # Serde
///
/// Serializes as `{"kind": "...", "argument": "..." | null, "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct Violation {
    kind: ViolationKind,
    argument: Option<String>,
    message: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            argument: Some(argument.into()),
            message: message.into(),
        }
    }

    pub fn missing_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::MissingArgument, argument, message)
    }

    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::InvalidArgument, argument, message)
    }

    pub fn out_of_range(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::OutOfRange, argument, message)
    }

    pub fn invalid_format(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::InvalidFormat, argument, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::Unauthorized,
            argument: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    #[must_use]
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
