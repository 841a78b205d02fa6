use nalgebra::Complex;
use nft_rs_core::Result;
use num_traits::Float;

use super::retain::retain_in_place;
use super::traits::SpectralFilter1D;
use super::BoundingBox;
use crate::kernel::{check_companion, ConfigError, KernelLifecycle, Write1D};

/// Keeps the values inside a closed [`BoundingBox`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterInsideKernel<F> {
    bounding_box: BoundingBox<F>,
}

/// Keeps the values outside an open [`BoundingBox`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterOutsideKernel<F> {
    bounding_box: BoundingBox<F>,
}

/// Constructor config for [`RejectNearRealKernel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RejectNearRealConfig<F> {
    /// Values with `|Im| <= tol_im` are discarded.
    pub tol_im: F,
}

/// Discards values whose imaginary part is within `tol_im` of the real axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RejectNearRealKernel<F> {
    tol_im: F,
}

impl<F: Float> KernelLifecycle for FilterInsideKernel<F> {
    type Config = BoundingBox<F>;

    fn try_new(config: Self::Config) -> core::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            bounding_box: config,
        })
    }
}

impl<F: Float> KernelLifecycle for FilterOutsideKernel<F> {
    type Config = BoundingBox<F>;

    fn try_new(config: Self::Config) -> core::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            bounding_box: config,
        })
    }
}

impl<F: Float> KernelLifecycle for RejectNearRealKernel<F> {
    type Config = RejectNearRealConfig<F>;

    fn try_new(config: Self::Config) -> core::result::Result<Self, ConfigError> {
        if config.tol_im.is_nan() || config.tol_im < F::zero() {
            return Err(ConfigError::InvalidArgument {
                arg: "tol_im",
                reason: "tolerance must be a non-negative number",
            });
        }
        Ok(Self {
            tol_im: config.tol_im,
        })
    }
}

impl<F> FilterInsideKernel<F> {
    /// Configured box.
    pub fn bounding_box(&self) -> &BoundingBox<F> {
        &self.bounding_box
    }
}

impl<F> FilterOutsideKernel<F> {
    /// Configured box.
    pub fn bounding_box(&self) -> &BoundingBox<F> {
        &self.bounding_box
    }
}

impl<F: Copy> RejectNearRealKernel<F> {
    /// Configured tolerance.
    pub fn tol_im(&self) -> F {
        self.tol_im
    }
}

/// Bind the buffers, validate the companion and run the compaction.
fn compact<F, V, P>(
    op: &'static str,
    values: &mut V,
    companion: Option<&mut [Complex<F>]>,
    keep: P,
) -> Result<usize>
where
    F: Float,
    V: Write1D<Complex<F>> + ?Sized,
    P: FnMut(&[Complex<F>], &Complex<F>) -> bool,
{
    let values = values.write_slice_mut()?;
    check_companion(values.len(), companion.as_deref())?;
    let n = values.len();
    let kept = retain_in_place(values, companion, keep);
    log::debug!("{op}: kept {kept} of {n} values");
    Ok(kept)
}

impl<F: Float> SpectralFilter1D<F> for FilterInsideKernel<F> {
    fn run_in_place<V>(
        &self,
        values: &mut V,
        companion: Option<&mut [Complex<F>]>,
    ) -> Result<usize>
    where
        V: Write1D<Complex<F>> + ?Sized,
    {
        let b = self.bounding_box;
        compact("filter_inside", values, companion, |_, z| b.contains(z))
    }
}

impl<F: Float> SpectralFilter1D<F> for FilterOutsideKernel<F> {
    fn run_in_place<V>(
        &self,
        values: &mut V,
        companion: Option<&mut [Complex<F>]>,
    ) -> Result<usize>
    where
        V: Write1D<Complex<F>> + ?Sized,
    {
        let b = self.bounding_box;
        compact("filter_outside", values, companion, |_, z| b.excludes(z))
    }
}

impl<F: Float> SpectralFilter1D<F> for RejectNearRealKernel<F> {
    fn run_in_place<V>(
        &self,
        values: &mut V,
        companion: Option<&mut [Complex<F>]>,
    ) -> Result<usize>
    where
        V: Write1D<Complex<F>> + ?Sized,
    {
        let tol_im = self.tol_im;
        compact("filter_reject_near_real_axis", values, companion, |_, z| {
            z.im.abs() > tol_im
        })
    }
}

///
/// Keep the values inside `bounding_box = [re_min, re_max, im_min, im_max]`,
/// bounds inclusive, and return how many survived.
///
/// Survivors are packed to the front of `values` in their original order;
/// `companion` is rearranged the same way. NaN values never survive.
///
/// ```
/// use nalgebra::Complex;
/// use nft_rs::spectral::filter_inside;
///
/// let mut vals = [
///     Complex::new(0.0f64, 0.0),
///     Complex::new(5.0, 5.0),
///     Complex::new(-1.0, -1.0),
/// ];
/// let n = filter_inside(&mut vals, [-2.0, 2.0, -2.0, 2.0], None).unwrap();
/// assert_eq!(n, 2);
/// assert_eq!(&vals[..n], &[Complex::new(0.0, 0.0), Complex::new(-1.0, -1.0)]);
/// ```
///
pub fn filter_inside<F: Float>(
    values: &mut [Complex<F>],
    bounding_box: [F; 4],
    companion: Option<&mut [Complex<F>]>,
) -> Result<usize> {
    FilterInsideKernel::try_new(BoundingBox::from_bounds(bounding_box))?
        .run_in_place(values, companion)
}

///
/// Keep the values that lie outside or on the boundary of `bounding_box` on at
/// least one axis, and return how many survived.
///
/// A value is kept when any of `!(re > re_min)`, `!(re < re_max)`,
/// `!(im > im_min)`, `!(im < im_max)` holds, so values with a NaN coordinate
/// are kept.
///
pub fn filter_outside<F: Float>(
    values: &mut [Complex<F>],
    bounding_box: [F; 4],
    companion: Option<&mut [Complex<F>]>,
) -> Result<usize> {
    FilterOutsideKernel::try_new(BoundingBox::from_bounds(bounding_box))?
        .run_in_place(values, companion)
}

/// Keep only values with `|Im| > tol_im` and return how many survived.
pub fn filter_reject_near_real_axis<F: Float>(
    values: &mut [Complex<F>],
    tol_im: F,
) -> Result<usize> {
    RejectNearRealKernel::try_new(RejectNearRealConfig { tol_im })?.run_in_place(values, None)
}
