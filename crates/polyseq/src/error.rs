//! Error type shared by the polygon, cache and sequence modules.

use std::fmt;

/// Coarse classification of a `SequenceError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Argument is not a real numeric scalar (bool, complex, non-integral count).
    Type,
    /// Argument has the right type but an unusable value.
    Value,
    /// Scalar index outside `[-len, len)`.
    Index,
}

/// Errors surfaced by construction and lookups.
#[derive(Clone, Debug, PartialEq)]
pub enum SequenceError {
    InvalidType { what: String },
    InvalidValue { reason: String },
    IndexOutOfRange { index: isize, len: usize },
}

impl SequenceError {
    pub(crate) fn invalid_type(what: impl Into<String>) -> Self {
        Self::InvalidType { what: what.into() }
    }

    pub(crate) fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. } => ErrorKind::Type,
            Self::InvalidValue { .. } => ErrorKind::Value,
            Self::IndexOutOfRange { .. } => ErrorKind::Index,
        }
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidType { what } => write!(f, "expected a real number: {what}"),
            Self::InvalidValue { reason } => write!(f, "invalid value: {reason}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Invalid Index: {index} for sequence of length {len}")
            }
        }
    }
}

impl std::error::Error for SequenceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_and_messages() {
        let e = SequenceError::IndexOutOfRange { index: -9, len: 8 };
        assert_eq!(e.kind(), ErrorKind::Index);
        assert!(e.to_string().starts_with("Invalid Index"));

        let e = SequenceError::invalid_value("max_sides=2");
        assert_eq!(e.kind(), ErrorKind::Value);
        assert!(e.to_string().contains("max_sides=2"));

        assert_eq!(SequenceError::invalid_type("bool").kind(), ErrorKind::Type);
    }
}
