use nalgebra::Complex;
use num_traits::Float;

///
/// Squared L2 norm of a sampled signal on `[a, b]`.
///
/// Trapezoidal rule with step `h = (b - a) / N`:
///
/// `h/2 * (|z[0]|^2 + |z[N-1]|^2) + h * sum_{i=1}^{N-2} |z[i]|^2`
///
/// Returns NaN when fewer than two samples are given or when `a >= b`
/// (NaN bounds included).
///
/// ```
/// use approx::assert_relative_eq;
/// use nalgebra::Complex;
/// use nft_rs_core::num_rs::l2_norm_squared;
///
/// let q = [Complex::new(1.0f64, 0.0); 4];
/// assert_relative_eq!(l2_norm_squared(&q, 0.0, 4.0), 3.0);
/// assert!(l2_norm_squared(&q, 1.0, 1.0).is_nan());
/// ```
///
pub fn l2_norm_squared<F: Float>(z: &[Complex<F>], a: F, b: F) -> F {
    let n = z.len();
    // Written so NaN bounds fall into the rejection branch too.
    if n < 2 || a.partial_cmp(&b) != Some(core::cmp::Ordering::Less) {
        return F::nan();
    }
    let Some(n_f) = F::from(n) else {
        return F::nan();
    };

    let h = (b - a) / n_f;
    let half = F::one() / (F::one() + F::one());
    let interior = z[1..n - 1]
        .iter()
        .fold(F::zero(), |acc, zi| acc + zi.norm_sqr());
    half * h * (z[0].norm_sqr() + z[n - 1].norm_sqr()) + h * interior
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn l2_norm_of_two_samples_uses_only_endpoints() {
        let z = [Complex::new(3.0f64, 4.0), Complex::new(0.0, 1.0)];
        // h = 0.5, val = 0.25 * (25 + 1)
        assert_relative_eq!(l2_norm_squared(&z, 0.0, 1.0), 6.5, epsilon = 1e-14);
    }

    #[test]
    fn l2_norm_weights_interior_samples_fully() {
        let z = [
            Complex::new(1.0f64, 0.0),
            Complex::new(0.0, 2.0),
            Complex::new(0.0, 2.0),
            Complex::new(1.0, 0.0),
        ];
        let h = 2.0 / 4.0;
        let expected = 0.5 * h * 2.0 + h * 8.0;
        assert_relative_eq!(l2_norm_squared(&z, -1.0, 1.0), expected, epsilon = 1e-14);
    }

    #[test]
    fn l2_norm_rejects_degenerate_input() {
        let one = [Complex::new(1.0f64, 0.0)];
        assert!(l2_norm_squared(&one, 0.0, 1.0).is_nan());

        let two = [Complex::new(1.0f64, 0.0); 2];
        assert!(l2_norm_squared(&two, 1.0, 0.0).is_nan());
        assert!(l2_norm_squared(&two, f64::NAN, 1.0).is_nan());
    }
}
