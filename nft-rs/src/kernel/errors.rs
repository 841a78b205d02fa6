use core::fmt;

use nft_rs_core::Error;

/// Validation errors raised at kernel construction or adapter binding time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration argument value is invalid.
    InvalidArgument {
        /// Name of the argument.
        arg: &'static str,
        /// Human readable reason.
        reason: &'static str,
    },
    /// A contiguous 1D slice view could not be obtained.
    NonContiguous {
        /// Name of the argument that is non-contiguous.
        arg: &'static str,
    },
    /// Two index-aligned buffers had different lengths.
    LengthMismatch {
        /// Name of the argument.
        arg: &'static str,
        /// Required length.
        expected: usize,
        /// Received length.
        got: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidArgument { arg, reason } => {
                write!(f, "Invalid argument `{arg}`: {reason}")
            }
            ConfigError::NonContiguous { arg } => {
                write!(f, "Argument `{arg}` is not contiguous in memory.")
            }
            ConfigError::LengthMismatch { arg, expected, got } => {
                write!(
                    f,
                    "Length mismatch on `{arg}`. Expected {expected}, got {got}."
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(value: ConfigError) -> Self {
        match value {
            ConfigError::InvalidArgument { arg, reason } => Error::InvalidArg { arg, reason },
            ConfigError::NonContiguous { arg } => Error::InvalidArg {
                arg,
                reason: "buffer is not contiguous in memory",
            },
            ConfigError::LengthMismatch { arg, expected, got } => {
                Error::LengthMismatch { arg, expected, got }
            }
        }
    }
}

/// Reject a companion buffer that is not index-aligned with `len` values.
pub(crate) fn check_companion<T>(len: usize, companion: Option<&[T]>) -> Result<(), ConfigError> {
    match companion {
        Some(c) if c.len() != len => Err(ConfigError::LengthMismatch {
            arg: "companion",
            expected: len,
            got: c.len(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_map_onto_invalid_argument() {
        let err: Error = ConfigError::NonContiguous { arg: "values" }.into();
        assert!(err.is_invalid_argument());

        let err: Error = ConfigError::LengthMismatch {
            arg: "companion",
            expected: 4,
            got: 3,
        }
        .into();
        assert_eq!(
            err,
            Error::LengthMismatch {
                arg: "companion",
                expected: 4,
                got: 3
            }
        );
    }

    #[test]
    fn companion_must_match_length() {
        let c = [0u8; 3];
        assert!(check_companion(3, Some(&c[..])).is_ok());
        assert!(check_companion::<u8>(3, None).is_ok());
        assert_eq!(
            check_companion(2, Some(&c[..])),
            Err(ConfigError::LengthMismatch {
                arg: "companion",
                expected: 2,
                got: 3
            })
        );
    }
}
