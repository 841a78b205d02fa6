//! Trait interfaces for the spectral toolbox kernels.

use nalgebra::Complex;
use nft_rs_core::Result;

use crate::kernel::Write1D;

#[cfg(feature = "alloc")]
use crate::kernel::Read1D;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// In-place, order-preserving filtering of a spectral array.
pub trait SpectralFilter1D<F> {
    /// Compact `values` so that the survivors occupy the leading entries and
    /// return their count.
    ///
    /// `companion`, when given, must have the same length as `values` and is
    /// permuted identically. Nothing is touched if validation fails.
    fn run_in_place<V>(
        &self,
        values: &mut V,
        companion: Option<&mut [Complex<F>]>,
    ) -> Result<usize>
    where
        V: Write1D<Complex<F>> + ?Sized;

    /// Like [`run_in_place`](Self::run_in_place), then truncate `values` and
    /// `companion` to the survivors. Capacity is left untouched.
    #[cfg(feature = "alloc")]
    fn run_vec(
        &self,
        values: &mut Vec<Complex<F>>,
        companion: Option<&mut Vec<Complex<F>>>,
    ) -> Result<usize> {
        let kept = match companion {
            Some(c) => {
                let kept = self.run_in_place(values.as_mut_slice(), Some(c.as_mut_slice()))?;
                c.truncate(kept);
                kept
            }
            None => self.run_in_place(values.as_mut_slice(), None)?,
        };
        values.truncate(kept);
        Ok(kept)
    }
}

/// Strided downsampling of a sampled signal into a fresh buffer.
#[cfg(feature = "alloc")]
pub trait Downsample1D<T> {
    /// Output bundle.
    type Output;

    /// Downsample `input`, allocating the output.
    fn run_alloc<I>(&self, input: &I) -> Result<Self::Output>
    where
        I: Read1D<T> + ?Sized;
}
