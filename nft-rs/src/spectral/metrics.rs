//! Accuracy scores for computed spectral data.
//!
//! These back the automated accuracy checks, so degenerate inputs (zero
//! reference norm, empty point sets) are left to the caller rather than
//! checked at runtime.

use nalgebra::Complex;
use num_traits::Float;

///
/// Relative l1 error `sum |numerical[i] - exact[i]| / sum |exact[i]|`.
///
/// Both slices should have the same length; only the common prefix is
/// compared. The result is not finite when `exact` sums to zero magnitude.
///
/// ```
/// use nalgebra::Complex;
/// use nft_rs::spectral::relative_l1_error;
///
/// let exact = [Complex::new(1.0f64, 0.0), Complex::new(0.0, 1.0)];
/// let numerical = [Complex::new(1.1f64, 0.0), Complex::new(0.0, 1.0)];
/// assert!((relative_l1_error(&numerical, &exact) - 0.05).abs() < 1e-12);
/// ```
///
pub fn relative_l1_error<F: Float>(numerical: &[Complex<F>], exact: &[Complex<F>]) -> F {
    debug_assert_eq!(numerical.len(), exact.len());
    let (num, den) = numerical
        .iter()
        .zip(exact)
        .fold((F::zero(), F::zero()), |(num, den), (x, e)| {
            (num + (x - e).norm(), den + e.norm())
        });
    num / den
}

///
/// Two-sided Hausdorff distance between the point sets `a` and `b`.
///
/// The largest distance from a point of either set to its nearest neighbour
/// in the other set. Insensitive to ordering and to the number of points.
/// Runs in `O(|a| |b|)`.
///
/// Both sets must be non-empty. This is not checked: two empty sets give
/// `-1` and one empty set gives `+inf`.
///
pub fn hausdorff_distance<F: Float>(a: &[Complex<F>], b: &[Complex<F>]) -> F {
    directed_hausdorff(a, b).max(directed_hausdorff(b, a))
}

/// `max_{x in from} min_{y in to} |x - y|`, starting from `-1`.
fn directed_hausdorff<F: Float>(from: &[Complex<F>], to: &[Complex<F>]) -> F {
    from.iter()
        .map(|x| {
            to.iter()
                .map(|y| (x - y).norm())
                .fold(F::infinity(), F::min)
        })
        .fold(-F::one(), F::max)
}
