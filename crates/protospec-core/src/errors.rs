//! Error types for protospec-core.
//!
//! The core favors total functions: generation, diffing, and analysis accept
//! any well-formed document and never fail. The one reportable failure class
//! is a malformed document shape surfaced by the decoder, which callers are
//! expected to handle before invoking the rest of the pipeline.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type ProtoSpecResult<T> = Result<T, ProtoSpecError>;

/// Errors produced by protospec-core.
#[derive(Debug, Error)]
pub enum ProtoSpecError {
    /// The input JSON does not decode into a structurally complete document
    /// (a required name, number, or type is absent or mistyped).
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// A caller-supplied argument is outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ProtoSpecError {
    pub fn invalid_document(msg: impl Into<String>) -> Self {
        Self::InvalidDocument(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
