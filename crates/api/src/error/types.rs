//! Error type definitions for nonce derivation

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for nonce derivation
///
/// Every failure is surfaced to the direct caller as one of these values;
/// no operation substitutes a default or partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The private key is zero, not below the group order, or unparsable
    InvalidPrivateKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// A required primitive (HMAC) was not configured or reports itself unavailable
    MissingPrimitive {
        primitive: &'static str,
    },

    /// The generation loop hit its iteration cap without an in-range candidate
    ExhaustedRetries {
        context: &'static str,
        attempts: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// A collaborator primitive returned an error of its own
    PrimitiveFailure {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for nonce derivation
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidPrivateKey` error
    pub fn invalid_key(context: &'static str, _message: &'static str) -> Self {
        Self::InvalidPrivateKey {
            context,
            #[cfg(feature = "std")]
            message: _message.into(),
        }
    }

    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, _message: &'static str) -> Self {
        Self::InvalidParameter {
            context,
            #[cfg(feature = "std")]
            message: _message.into(),
        }
    }

    /// The context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidPrivateKey { context, .. }
            | Self::ExhaustedRetries { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::RandomGenerationError { context, .. }
            | Self::PrimitiveFailure { context, .. } => *context,
            Self::MissingPrimitive { primitive } => *primitive,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidPrivateKey { context, message } => {
                write!(f, "Invalid private key: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidPrivateKey { context } => {
                write!(f, "Invalid private key: {}", context)
            }
            Self::MissingPrimitive { primitive } => {
                write!(f, "Missing primitive: {} is not available", primitive)
            }
            Self::ExhaustedRetries { context, attempts } => {
                write!(f, "{}: tried {} candidates, all were invalid", context, attempts)
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})", context, expected, actual)
            }
            #[cfg(feature = "std")]
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
            #[cfg(feature = "std")]
            Self::PrimitiveFailure { context, message } => {
                write!(f, "Primitive failure: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::PrimitiveFailure { context } => {
                write!(f, "Primitive failure: {}", context)
            }
        }
    }
}
