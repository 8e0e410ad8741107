//! JSON:API decoding errors.

use bell_core::schedules::ScheduleError;
use thiserror::Error;

/// Errors raised while decoding JSON:API documents.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The document is not valid JSON or does not match the resource schema.
    #[error("Malformed {resource} document at '{path}': {message}")]
    Malformed {
        /// The kind of resource being decoded.
        resource: &'static str,
        /// JSON path to the offending value.
        path: String,
        /// The underlying parser message.
        message: String,
    },

    /// The resource `type` member names a different kind of resource.
    #[error("Expected a '{expected}' resource, found '{found}'")]
    WrongType {
        /// The expected resource type.
        expected: &'static str,
        /// The type the document declared.
        found: String,
    },

    /// The resource has no `id` member.
    #[error("The {resource} resource has no id")]
    MissingId {
        /// The kind of resource being decoded.
        resource: &'static str,
    },

    /// The decoded values violate a domain rule.
    #[error("Invalid {resource} '{id}': {source}")]
    Invalid {
        /// The kind of resource being decoded.
        resource: &'static str,
        /// Identifier of the offending resource.
        id: String,
        /// The violated rule.
        #[source]
        source: ScheduleError,
    },
}

impl DecodeError {
    /// Builds a `Malformed` error from a path-tracking parse failure.
    pub(crate) fn malformed(
        resource: &'static str,
        err: serde_path_to_error::Error<serde_json::Error>,
    ) -> Self {
        DecodeError::Malformed {
            resource,
            path: err.path().to_string(),
            message: err.into_inner().to_string(),
        }
    }

    /// JSON path of a `Malformed` error.
    pub fn path(&self) -> Option<&str> {
        match self {
            DecodeError::Malformed { path, .. } => Some(path),
            _ => None,
        }
    }
}
