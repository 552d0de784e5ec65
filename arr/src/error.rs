//! Errors reported by the fallible sequence operations.
//!
//! Absence (an index out of range, a failed search, an empty aggregate) is
//! never an error: those operations return an [`Option`]. An [`Error`] means
//! that an argument was malformed, or that a host-level primitive (formatting,
//! serialization) failed on one of the elements.

/// An error produced by a fallible operation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was rejected before the operation ran.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Formatting the element at `index` failed while joining a sequence.
    #[error("failed to format the element at index {index} while joining")]
    Join { index: usize },

    /// The sequence could not be encoded.
    #[error("serialization failed: {msg}")]
    Serialization { msg: String },

    /// The input could not be decoded into a sequence.
    #[error("deserialization failed: {msg}")]
    Deserialization { msg: String },
}

/// The discriminant of an [`Error`], for callers that only need to branch on
/// the category of a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    Join,
    Serialization,
    Deserialization,
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::Join { .. } => ErrorKind::Join,
            Error::Serialization { .. } => ErrorKind::Serialization,
            Error::Deserialization { .. } => ErrorKind::Deserialization,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
