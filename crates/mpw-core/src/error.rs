//! Error types for `mpw-core`.

use thiserror::Error;

/// Errors produced by key derivation, site result generation and registry lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MpwError {
    /// A caller-supplied value is unusable (empty name, stored type passed to
    /// the generator, length overflow). Never retried internally.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The master key was invalidated (or never derived). Re-derive it first.
    #[error("master key unavailable: it has been invalidated")]
    KeyUnavailable,

    /// scrypt, HMAC or digest primitive failure. Fatal for the current call.
    #[error("algorithm failure: {0}")]
    AlgorithmFailure(String),

    /// No result type, purpose or version matches the given name or alias.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Payload-free category of an [`MpwError`], for callers that only branch on the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`MpwError::InvalidArgument`].
    InvalidArgument,
    /// See [`MpwError::KeyUnavailable`].
    KeyUnavailable,
    /// See [`MpwError::AlgorithmFailure`].
    AlgorithmFailure,
    /// See [`MpwError::NotFound`].
    NotFound,
}

impl MpwError {
    /// Return the stable category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::KeyUnavailable => ErrorKind::KeyUnavailable,
            Self::AlgorithmFailure(_) => ErrorKind::AlgorithmFailure,
            Self::NotFound(_) => ErrorKind::NotFound,
        }
    }
}
