use alloc::vec::Vec;

use nft_rs_core::{Error, Result};

use super::traits::Downsample1D;
use crate::kernel::{ConfigError, KernelLifecycle, Read1D};

/// Constructor config for [`DownsampleKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownsampleConfig {
    /// Desired number of output samples. Clamped into `[2, D]` at run time.
    pub target_len: usize,
}

/// Strided downsampling with a uniform integer step.
///
/// For a signal of `D` samples the desired count is clamped into `[2, D]`,
/// the stride is `round(D / desired)` and the achieved count is
/// `round(D / stride)`. A uniform stride wins over hitting the requested
/// count exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownsampleKernel {
    target_len: usize,
}

/// Output of [`DownsampleKernel`]: an owned buffer plus its position in the
/// original signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Downsampled<T> {
    /// Retained samples, `samples[k] == q[first_index + k * stride]`.
    pub samples: Vec<T>,
    /// Original index of `samples[0]`. Always 0.
    pub first_index: usize,
    /// Original index of the last retained sample, `(len - 1) * stride`.
    /// This is not the end of the span covered by the last stride, which
    /// would be `len * stride - 1` and can lie past the input.
    pub last_index: usize,
    /// Distance between retained samples in the original signal.
    pub stride: usize,
}

impl<T> Downsampled<T> {
    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples were retained.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Take ownership of the sample buffer.
    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }
}

impl DownsampleKernel {
    /// Configured target length, before clamping.
    pub fn target_len(&self) -> usize {
        self.target_len
    }

    /// Stride and achieved length for a signal of `d >= 3` samples.
    pub fn plan(&self, d: usize) -> (usize, usize) {
        let desired = self.target_len.clamp(2, d.max(2));
        let stride = ((d as f64 / desired as f64).round() as usize).max(1);
        let achieved = (d as f64 / stride as f64).round() as usize;
        (stride, achieved)
    }
}

impl KernelLifecycle for DownsampleKernel {
    type Config = DownsampleConfig;

    fn try_new(config: Self::Config) -> core::result::Result<Self, ConfigError> {
        Ok(Self {
            target_len: config.target_len,
        })
    }
}

impl<T: Copy> Downsample1D<T> for DownsampleKernel {
    type Output = Downsampled<T>;

    fn run_alloc<I>(&self, input: &I) -> Result<Self::Output>
    where
        I: Read1D<T> + ?Sized,
    {
        let q = input.read_slice()?;
        let d = q.len();
        if d <= 2 {
            return Err(Error::InvalidArg {
                arg: "q",
                reason: "downsampling needs at least three samples",
            });
        }

        let (stride, achieved) = self.plan(d);
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(achieved)
            .map_err(|_| Error::OutOfMemory {
                requested: achieved,
            })?;
        samples.extend(q.iter().step_by(stride).take(achieved).copied());

        log::debug!(
            "downsample: {d} samples to {achieved} (requested {}, stride {stride})",
            self.target_len
        );
        Ok(Downsampled {
            samples,
            first_index: 0,
            last_index: (achieved - 1) * stride,
            stride,
        })
    }
}

///
/// Downsample `q` to roughly `target_len` evenly strided samples.
///
/// Fails with an invalid-argument error for signals of two samples or fewer.
///
/// ```
/// use nalgebra::Complex;
/// use nft_rs::spectral::downsample;
///
/// let q: Vec<_> = (0..10).map(|i| Complex::new(i as f64, 0.0)).collect();
/// let sub = downsample(&q, 4).unwrap();
/// assert_eq!(sub.stride, 3);
/// assert_eq!(sub.len(), 3);
/// assert_eq!(sub.samples[2], q[sub.last_index]);
/// ```
///
pub fn downsample<T: Copy>(q: &[T], target_len: usize) -> Result<Downsampled<T>> {
    let kernel = DownsampleKernel::try_new(DownsampleConfig { target_len })?;
    kernel.run_alloc(q)
}
