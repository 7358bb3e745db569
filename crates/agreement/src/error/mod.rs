//! Error handling for key agreement operations

use keyx_algorithms::error::Error as PrimitiveError;
use keyx_api::error::Error as CoreError;
use thiserror::Error;

use crate::element::ElementError;

/// Error type for key agreement operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Primitive error
    #[error("Primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// The backend could not produce a key
    #[error("Key generation error for {backend}: {details}")]
    KeyGeneration {
        backend: &'static str,
        details: String,
    },

    /// The backend could not complete an agreement with an accepted peer key
    #[error("Key agreement error for {backend}: {details}")]
    Agreement {
        backend: &'static str,
        details: String,
    },

    /// Invalid configuration value
    #[error("Invalid configuration field {field}: {reason}")]
    Config {
        field: &'static str,
        reason: &'static str,
    },
}

impl Error {
    /// Key generation failure reported by a secure element
    pub fn element_keygen(backend: &'static str, err: ElementError) -> Self {
        Error::KeyGeneration {
            backend,
            details: err.to_string(),
        }
    }

    /// Key agreement failure reported by a secure element
    pub fn element_agreement(backend: &'static str, err: ElementError) -> Self {
        Error::Agreement {
            backend,
            details: err.to_string(),
        }
    }
}

/// Result type for key agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::KeyGeneration { backend, details } => CoreError::KeyGeneration {
                context: backend,
                message: details,
            },
            Error::Agreement { backend, details } => CoreError::KeyAgreement {
                context: backend,
                message: details,
            },
            Error::Config { field, reason } => CoreError::InvalidParameter {
                context: field,
                message: reason.to_string(),
            },
        }
    }
}

pub use keyx_api::error::ResultExt;
