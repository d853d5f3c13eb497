//! Error handling for the curve and field primitives

use alloc::borrow::Cow;
use core::fmt;

use bls381_api::Error as ApiError;

/// The error type for the curve and field primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Non-canonical byte encoding
    Encoding {
        /// Type being decoded
        context: &'static str,
        /// Which check rejected the input
        details: &'static str,
    },

    /// Coordinates that do not describe a valid group element
    Point {
        /// Group being decoded
        context: &'static str,
        /// Which check rejected the point
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

    /// Shorthand to create an Encoding error
    pub fn encoding(context: &'static str, details: &'static str) -> Self {
        log::trace!("{}: rejected encoding ({})", context, details);
        Error::Encoding { context, details }
    }

    /// Shorthand to create a Point error
    pub fn point(context: &'static str, details: &'static str) -> Self {
        log::trace!("{}: rejected point ({})", context, details);
        Error::Point { context, details }
    }
}

/// Result type for the curve and field primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            },
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}",
                    context, expected, actual)
            },
            Error::Encoding { context, details } => {
                write!(f, "Invalid encoding for {}: {}", context, details)
            },
            Error::Point { context, details } => {
                write!(f, "Invalid point for {}: {}", context, details)
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => ApiError::InvalidParameter {
                context: name,
                message: reason,
            },
            Error::Length { context, expected, actual } => ApiError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Encoding { context, details } => ApiError::InvalidEncoding {
                context,
                message: details,
            },
            Error::Point { context, details } => ApiError::InvalidPoint {
                context,
                message: details,
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
