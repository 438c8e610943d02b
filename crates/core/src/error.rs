//! Request outcome model.
//!
//! A handler either produces a value or a non-empty list of [`Error`]s.
//! The HTTP layer only ever reports the first one.

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use utoipa::ToSchema;

/// Result type returned by every command/query handler.
pub type Outcome<T> = Result<T, Errors>;

/// Classification of an [`Error`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ErrorKind {
    /// A general, expected failure.
    Failure,
    /// Something that should not happen (e.g. missing wiring).
    Unexpected,
    /// Input failed validation.
    Validation,
    /// The operation conflicts with current state.
    Conflict,
    /// The referenced resource does not exist.
    NotFound,
    /// The caller is not allowed to perform the operation.
    Unauthorized,
}

/// A single, serializable error produced by a handler.
#[derive(Debug, ThisError, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[error("{code}: {description}")]
pub struct Error {
    pub code: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ErrorKind,
}

impl Error {
    pub fn new(kind: ErrorKind, code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            kind,
        }
    }

    pub fn failure(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::Failure, code, description)
    }

    pub fn unexpected(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, code, description)
    }

    pub fn validation(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, code, description)
    }

    pub fn conflict(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, code, description)
    }

    pub fn not_found(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, code, description)
    }

    pub fn unauthorized(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, code, description)
    }
}

/// Non-empty list of errors.
///
/// The first error is stored separately so an empty `Errors` cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Errors {
    first: Error,
    rest: Vec<Error>,
}

impl Errors {
    pub fn new(first: Error) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    pub fn push(&mut self, error: Error) {
        self.rest.push(error);
    }

    pub fn first(&self) -> &Error {
        &self.first
    }

    pub fn into_first(self) -> Error {
        self.first
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        core::iter::once(&self.first).chain(self.rest.iter())
    }
}

impl From<Error> for Errors {
    fn from(value: Error) -> Self {
        Self::new(value)
    }
}

impl core::fmt::Display for Errors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.first, f)?;
        if !self.rest.is_empty() {
            write!(f, " (+{} more)", self.rest.len())?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}
