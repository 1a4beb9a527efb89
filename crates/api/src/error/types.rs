//! Error type definitions for bit and byte container operations

use thiserror::Error as ThisError;

/// Primary error type for container construction and manipulation
///
/// Every variant names the operation that failed in `context`. All of these
/// are caller or input errors; none of them is transient.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Input text does not follow the expected format, or the base is unsupported
    #[error("{context}: invalid format: {message}")]
    InvalidFormat {
        /// Operation that rejected the input
        context: &'static str,
        /// What was wrong with the input
        message: String,
    },

    /// A digit that is not legal for the stated base
    #[error("{context}: invalid character {character:?} at position {position} for base {base}")]
    InvalidCharacter {
        /// Operation that rejected the input
        context: &'static str,
        /// The offending character
        character: char,
        /// Character offset in the input
        position: usize,
        /// Numeric base the input was parsed in
        base: u32,
    },

    /// A value that does not fit in the target width
    #[error("{context}: value too large (max {max}, got {actual})")]
    LengthError {
        /// Operation that rejected the value
        context: &'static str,
        /// Largest accepted length or value
        max: usize,
        /// Length or value that was supplied
        actual: usize,
    },

    /// A bit or byte position outside the container
    #[error("{context}: index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Operation that rejected the position
        context: &'static str,
        /// Requested position
        index: usize,
        /// Number of addressable positions
        len: usize,
    },

    /// A shift amount wider than the container
    #[error("{context}: shift by {shift} exceeds maximum of {max}")]
    ShiftOutOfRange {
        /// Operation that rejected the shift
        context: &'static str,
        /// Requested shift amount
        shift: usize,
        /// Largest accepted shift amount
        max: usize,
    },

    /// A binary operation between containers of different sizes
    #[error("{context}: size mismatch (expected {expected} bytes, got {actual})")]
    SizeMismatch {
        /// Operation that rejected the operands
        context: &'static str,
        /// Size of the left-hand operand in bytes
        expected: usize,
        /// Size of the right-hand operand in bytes
        actual: usize,
    },
}

/// Result type for container operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidFormat` error
    pub fn format(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidFormat {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidFormat { message, .. } => Self::InvalidFormat { context, message },
            Self::InvalidCharacter { character, position, base, .. } => Self::InvalidCharacter {
                context,
                character,
                position,
                base,
            },
            Self::LengthError { max, actual, .. } => Self::LengthError { context, max, actual },
            Self::IndexOutOfRange { index, len, .. } => Self::IndexOutOfRange { context, index, len },
            Self::ShiftOutOfRange { shift, max, .. } => Self::ShiftOutOfRange { context, shift, max },
            Self::SizeMismatch { expected, actual, .. } => Self::SizeMismatch {
                context,
                expected,
                actual,
            },
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => Error::InvalidFormat {
                context: "hex decoding",
                message: format!("non-hex character {:?} at position {}", c, index),
            },
            hex::FromHexError::OddLength => Error::format("hex decoding", "odd number of digits"),
            hex::FromHexError::InvalidStringLength => {
                Error::format("hex decoding", "string length does not match target")
            }
        }
    }
}
