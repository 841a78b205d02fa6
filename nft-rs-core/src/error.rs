use core::{error, fmt};

/// Errors raised by nft-rs routines.
///
/// Every routine validates its arguments before touching any buffer, so an
/// `Err` always means the inputs were left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was out of its admissible range.
    InvalidArg {
        /// The invalid arg.
        arg: &'static str,
        /// Explaining why arg is invalid.
        reason: &'static str,
    },
    /// Two buffers that must be index-aligned had different lengths.
    LengthMismatch {
        /// Name of the offending argument.
        arg: &'static str,
        /// Required length.
        expected: usize,
        /// Received length.
        got: usize,
    },
    /// An output buffer could not be allocated.
    OutOfMemory {
        /// Number of elements that were requested.
        requested: usize,
    },
    /// The discretization has no mapping for the requested operation.
    Unsupported {
        /// Canonical name of the discretization.
        discretization: &'static str,
        /// What is missing.
        reason: &'static str,
    },
}

impl Error {
    /// True for the argument-validation failures (`InvalidArg` and
    /// `LengthMismatch`).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArg { .. } | Error::LengthMismatch { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArg { arg, reason } => {
                write!(f, "Invalid argument `{arg}`: {reason}")
            }
            Error::LengthMismatch { arg, expected, got } => {
                write!(
                    f,
                    "Length mismatch on `{arg}`. Expected {expected}, got {got}."
                )
            }
            Error::OutOfMemory { requested } => {
                write!(f, "Out of memory allocating {requested} elements.")
            }
            Error::Unsupported {
                discretization,
                reason,
            } => write!(f, "Discretization {discretization} is unsupported: {reason}"),
        }
    }
}

impl error::Error for Error {}

/// Result alias used throughout nft-rs.
pub type Result<T> = core::result::Result<T, Error>;
