use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::Value;

/// Indicates the kind of a conversion failure.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The wrapped value is nil.
    NilValue,
    /// The value is present but cannot be read as the requested type.
    ConversionFailure,
}

serde_plain::derive_display_from_serialize!(ErrorKind);

/// Represents a failed conversion.
///
/// The kind is what callers should match on; the description is only meant
/// for humans.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {description}")]
pub struct Error {
    kind: ErrorKind,
    target: Option<&'static str>,
    description: String,
}

impl Error {
    /// Creates a new error.
    pub fn new<S: Into<String>>(kind: ErrorKind, description: S) -> Error {
        Error {
            kind,
            target: None,
            description: description.into(),
        }
    }

    /// Creates the error reported for nil values.
    pub fn nil() -> Error {
        Error::new(ErrorKind::NilValue, "value is nil")
    }

    /// Creates the error reported when `value` does not convert into `target`.
    pub fn conversion(target: &'static str, value: &Value) -> Error {
        Error::new(
            ErrorKind::ConversionFailure,
            format!("failed to cast \"{}\" as {}", value, target),
        )
        .with_target(target)
    }

    /// Modifies the error to attach the name of the requested type.
    pub fn with_target(mut self, target: &'static str) -> Error {
        self.target = Some(target);
        self
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the name of the requested type, if the error has one.
    pub fn target(&self) -> Option<&'static str> {
        self.target
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` if this error was caused by a nil value.
    pub fn is_nil(&self) -> bool {
        self.kind == ErrorKind::NilValue
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use crate::Value;

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::NilValue.to_string(), "nil_value");
        assert_eq!(ErrorKind::ConversionFailure.to_string(), "conversion_failure");
    }

    #[test]
    fn test_nil() {
        let err = Error::nil();
        assert!(err.is_nil());
        assert_eq!(err.target(), None);
        assert_eq!(err.to_string(), "nil_value: value is nil");
    }

    #[test]
    fn test_conversion() {
        let err = Error::conversion("i8", &Value::from(200));
        assert!(!err.is_nil());
        assert_eq!(err.kind(), ErrorKind::ConversionFailure);
        assert_eq!(err.target(), Some("i8"));
        assert_eq!(err.description(), "failed to cast \"200\" as i8");
    }

    #[test]
    fn test_kind_not_derived_from_message() {
        // a conversion error whose message mentions nil is still a conversion error
        let err = Error::conversion("bool", &Value::from("nil_value"));
        assert!(!err.is_nil());
    }
}
