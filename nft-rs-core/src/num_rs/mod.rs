//! Elementary complex-valued functions used during discretization setup.

mod elementary;
mod quadrature;

pub use elementary::*;
pub use quadrature::*;

use num_traits::Float;

/// Convert an `f64` design constant into `F`, falling back to NaN when it is
/// not representable.
#[inline]
pub(crate) fn cast<F: Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::nan)
}
