use nalgebra::Complex;
use nft_rs_core::Result;
use num_traits::Float;

use super::retain::retain_in_place;
use super::traits::SpectralFilter1D;
use crate::kernel::{check_companion, ConfigError, KernelLifecycle, Write1D};

/// Constructor config for [`MergeCloseKernel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeCloseConfig<F> {
    /// Values closer than `tol` to an already kept value are dropped.
    pub tol: F,
}

/// Greedy deduplication of nearly coincident spectral values.
///
/// Values are visited in their stored order. A value survives if its distance
/// to every value kept before it is at least `tol`, so the first value always
/// survives. Which member of a close pair survives depends only on the scan
/// order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeCloseKernel<F> {
    tol: F,
}

impl<F: Float> KernelLifecycle for MergeCloseKernel<F> {
    type Config = MergeCloseConfig<F>;

    fn try_new(config: Self::Config) -> core::result::Result<Self, ConfigError> {
        if config.tol.is_nan() || config.tol < F::zero() {
            return Err(ConfigError::InvalidArgument {
                arg: "tol",
                reason: "tolerance must be a non-negative number",
            });
        }
        Ok(Self { tol: config.tol })
    }
}

impl<F: Copy> MergeCloseKernel<F> {
    /// Configured merge radius.
    pub fn tol(&self) -> F {
        self.tol
    }
}

impl<F: Float> SpectralFilter1D<F> for MergeCloseKernel<F> {
    // A NaN distance never merges.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn run_in_place<V>(
        &self,
        values: &mut V,
        companion: Option<&mut [Complex<F>]>,
    ) -> Result<usize>
    where
        V: Write1D<Complex<F>> + ?Sized,
    {
        let values = values.write_slice_mut()?;
        check_companion(values.len(), companion.as_deref())?;

        let n = values.len();
        let tol = self.tol;
        // O(n^2); spectra handled here have at most a few hundred points.
        let kept = retain_in_place(values, companion, |kept, z| {
            kept.iter().all(|k| !((k - z).norm() < tol))
        });
        log::debug!("merge_close: kept {kept} of {n} values");
        Ok(kept)
    }
}

///
/// Merge values that lie closer than `tol` to an earlier kept value and return
/// the number of survivors.
///
/// `tol == 0` keeps every value; `tol == inf` keeps only the first of a
/// non-empty array of finite values.
///
/// ```
/// use nalgebra::Complex;
/// use nft_rs::spectral::merge_close;
///
/// let mut roots = [
///     Complex::new(1.0f64, 1.0),
///     Complex::new(1.0 + 1e-9, 1.0),
///     Complex::new(-1.0, 2.0),
/// ];
/// let n = merge_close(&mut roots, 1e-6).unwrap();
/// assert_eq!(&roots[..n], &[Complex::new(1.0, 1.0), Complex::new(-1.0, 2.0)]);
/// ```
///
pub fn merge_close<F: Float>(values: &mut [Complex<F>], tol: F) -> Result<usize> {
    MergeCloseKernel::try_new(MergeCloseConfig { tol })?.run_in_place(values, None)
}
