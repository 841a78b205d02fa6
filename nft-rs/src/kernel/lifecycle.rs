use super::ConfigError;

/// Constructor validation lifecycle shared by the toolbox kernels.
///
/// A kernel that exists has passed validation, so its `run*` methods only
/// check the buffers they are handed.
pub trait KernelLifecycle: Sized {
    /// Kernel config type.
    type Config;

    /// Construct a validated kernel from config.
    fn try_new(config: Self::Config) -> Result<Self, ConfigError>;
}
