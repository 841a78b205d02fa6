use nalgebra::Complex;
use num_traits::Float;

use super::cast;

/// Below this magnitude [`csinc`] switches to its series approximation.
pub const SINC_THRESHOLD: f64 = 1.0e-8;

/// Hyperbolic secant, `2 / (e^z + e^-z)`.
///
/// There is no domain restriction. Large `|Re(z)|` overflows the exponentials
/// and the result follows IEEE semantics.
///
/// ```
/// use approx::assert_relative_eq;
/// use nalgebra::Complex;
/// use nft_rs_core::num_rs::sech;
///
/// let y = sech(Complex::new(0.0f64, 0.0));
/// assert_relative_eq!(y.re, 1.0);
/// assert_relative_eq!(y.im, 0.0);
/// ```
pub fn sech<F: Float>(z: Complex<F>) -> Complex<F> {
    let two = F::one() + F::one();
    Complex::new(two, F::zero()) / (z.exp() + (-z).exp())
}

/// Complex sinc, `sin(x)/x`.
///
/// For `|x| < SINC_THRESHOLD` the quotient is replaced by `cos(x/sqrt(3))`,
/// which agrees with `sinc` up to `O(x^4)` and has no cancellation at the
/// origin, so `csinc(0) == 1`.
pub fn csinc<F: Float>(x: Complex<F>) -> Complex<F> {
    if x.norm() >= cast::<F>(SINC_THRESHOLD) {
        x.sin() / x
    } else {
        let sqrt3 = (F::one() + F::one() + F::one()).sqrt();
        (x / sqrt3).cos()
    }
}

/// Smallest power of two that is `>= n`.
///
/// Returns 0 for `n == 0`, and also when the answer does not fit in `usize`.
///
/// ```
/// use nft_rs_core::num_rs::next_power_of_two;
///
/// assert_eq!(next_power_of_two(0), 0);
/// assert_eq!(next_power_of_two(1), 1);
/// assert_eq!(next_power_of_two(5), 8);
/// ```
pub const fn next_power_of_two(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    match n.checked_next_power_of_two() {
        Some(p) => p,
        None => 0,
    }
}
