//! Error type definitions for curve and field operations

use alloc::borrow::Cow;

/// Primary error type for the public API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input had the wrong number of bytes
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Bytes are not a canonical encoding (flag bits, integer out of range)
    InvalidEncoding {
        context: &'static str,
        message: &'static str,
    },

    /// Decoded coordinates do not describe a point of the prime-order group
    InvalidPoint {
        context: &'static str,
        message: &'static str,
    },

    /// Invalid parameter error, naming the parameter and the reason
    InvalidParameter {
        context: Cow<'static, str>,
        message: Cow<'static, str>,
    },
}

/// Result type for curve and field operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidEncoding { message, .. } => Self::InvalidEncoding { context, message },
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter {
                context: Cow::Borrowed(context),
                message,
            },
        }
    }

    /// The context string carried by this error
    pub fn context(&self) -> &str {
        match self {
            Self::InvalidLength { context, .. }
            | Self::InvalidEncoding { context, .. }
            | Self::InvalidPoint { context, .. } => context,
            Self::InvalidParameter { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            },
            Self::InvalidEncoding { context, message } => {
                write!(f, "Invalid encoding: {}: {}", context, message)
            },
            Self::InvalidPoint { context, message } => {
                write!(f, "Invalid point: {}: {}", context, message)
            },
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
        }
    }
}
