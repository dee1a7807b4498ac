//! Unified Error Model
use thiserror::Error;

/// Failures raised by registry operations.
///
/// Both variants are configuration errors in the documentation build: they
/// abort the run instead of being skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("REGISTRY/NOT_FOUND: no documentation registered for binding '{id}'")]
    NotFound { id: String },

    #[error("REGISTRY/DUPLICATE: binding '{id}' is already registered")]
    DuplicateRegistration { id: String },
}

impl RegistryError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateRegistration { id: id.into() }
    }

    /// The binding identifier the error refers to
    pub fn binding_id(&self) -> &str {
        match self {
            Self::NotFound { id } | Self::DuplicateRegistration { id } => id,
        }
    }
}

/// Rejected binding identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidBindingId {
    #[error("BINDING/EMPTY: binding identifier must not be empty")]
    Empty,

    #[error("BINDING/WHITESPACE: binding identifier '{0}' contains whitespace")]
    Whitespace(String),
}

/// A language tag outside the caller's supported set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("LANG/UNKNOWN: '{tag}' is not one of [{supported}]")]
pub struct UnknownLanguage {
    pub tag: String,
    pub supported: String,
}
