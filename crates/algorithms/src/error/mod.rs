//! Error handling for cryptographic primitives

use std::borrow::Cow;

use keyx_api::{Error as CoreError, Result as CoreResult};
use thiserror::Error;

/// The error type for cryptographic primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Encoded bytes do not describe a usable curve point
    #[error("Invalid point encoding for {context}: {reason}")]
    InvalidPoint {
        /// Where the point was being decoded
        context: &'static str,
        /// What was wrong with it
        reason: Cow<'static, str>,
    },

    /// A scalar multiplication produced the point at infinity
    #[error("{operation} produced the point at infinity")]
    IdentityPoint {
        /// Operation that hit the identity
        operation: &'static str,
    },

    /// The random source failed or kept producing out-of-range values
    #[error("Random generation failed in {context}: {details}")]
    Random {
        /// Operation that needed randomness
        context: &'static str,
        /// Description from the random source
        details: String,
    },

    /// Processing error during a cryptographic operation
    #[error("Processing error in {operation}: {details}")]
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create an InvalidPoint error
    pub fn point<R: Into<Cow<'static, str>>>(context: &'static str, reason: R) -> Self {
        Error::InvalidPoint {
            context,
            reason: reason.into(),
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: "primitive parameter",
                message: format!("{}: {}", name, reason),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::InvalidPoint { context, reason } => CoreError::InvalidPeerKey {
                context,
                message: reason.into_owned(),
            },
            Error::IdentityPoint { operation } => CoreError::KeyAgreement {
                context: operation,
                message: "shared point is the point at infinity".to_string(),
            },
            Error::Random { context, details } => CoreError::KeyGeneration {
                context,
                message: details,
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

pub mod validate;
