//! Error type definitions for key agreement operations

use thiserror::Error;

/// Primary error type for key agreement operations
///
/// The first three variants are the failures a caller has to distinguish:
/// the environment could not produce a key, the peer sent something that is
/// not a P-256 point, or the agreement itself could not complete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The random source or key store could not produce a key
    #[error("Key generation failed: {context}: {message}")]
    KeyGeneration {
        context: &'static str,
        message: String,
    },

    /// Malformed, off-curve or identity peer public key
    #[error("Invalid peer key: {context}: {message}")]
    InvalidPeerKey {
        context: &'static str,
        message: String,
    },

    /// The key agreement primitive rejected the operation
    #[error("Key agreement failed: {context}: {message}")]
    KeyAgreement {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for key agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::KeyGeneration { message, .. } => Self::KeyGeneration { context, message },
            Self::InvalidPeerKey { message, .. } => Self::InvalidPeerKey { context, message },
            Self::KeyAgreement { message, .. } => Self::KeyAgreement { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the message of an existing error, keeping its kind
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::KeyGeneration { context, .. } => Self::KeyGeneration { context, message },
            Self::InvalidPeerKey { context, .. } => Self::InvalidPeerKey { context, message },
            Self::KeyAgreement { context, .. } => Self::KeyAgreement { context, message },
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }

    /// Whether the caller can recover by changing its input
    ///
    /// `KeyGeneration` and `KeyAgreement` describe the environment or the
    /// primitive, not the request, and are not recoverable for that call.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidPeerKey { .. } | Self::InvalidParameter { .. }
        )
    }

    /// The context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::KeyGeneration { context, .. }
            | Self::InvalidPeerKey { context, .. }
            | Self::KeyAgreement { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}
