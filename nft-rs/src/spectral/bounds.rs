use core::cmp::Ordering;

use nalgebra::Complex;
use num_traits::Float;

use crate::kernel::ConfigError;

/// Axis-aligned rectangle in the complex plane.
///
/// Used to separate physically plausible spectral values from spurious ones.
/// A box is well formed when `re_min <= re_max` and `im_min <= im_max`; NaN
/// bounds are malformed. Kernels validate this on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<F> {
    /// Lower bound of the real part.
    pub re_min: F,
    /// Upper bound of the real part.
    pub re_max: F,
    /// Lower bound of the imaginary part.
    pub im_min: F,
    /// Upper bound of the imaginary part.
    pub im_max: F,
}

impl<F: Float> BoundingBox<F> {
    /// Box from `[re_min, re_max, im_min, im_max]`, unvalidated.
    pub fn from_bounds(bounds: [F; 4]) -> Self {
        let [re_min, re_max, im_min, im_max] = bounds;
        Self {
            re_min,
            re_max,
            im_min,
            im_max,
        }
    }

    /// Check the ordering invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !ordered(self.re_min, self.re_max) {
            return Err(ConfigError::InvalidArgument {
                arg: "bounding_box",
                reason: "re_min must not exceed re_max",
            });
        }
        if !ordered(self.im_min, self.im_max) {
            return Err(ConfigError::InvalidArgument {
                arg: "bounding_box",
                reason: "im_min must not exceed im_max",
            });
        }
        Ok(())
    }

    /// Inclusive containment. Any NaN coordinate makes this false.
    #[inline]
    pub fn contains(&self, z: &Complex<F>) -> bool {
        z.re >= self.re_min && z.re <= self.re_max && z.im >= self.im_min && z.im <= self.im_max
    }

    /// True when `z` is outside or on the boundary on at least one axis.
    ///
    /// Each axis comparison is negated on its own, so a NaN coordinate counts
    /// as outside. This is not `!contains(z)`: points on the boundary satisfy
    /// both.
    #[inline]
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn excludes(&self, z: &Complex<F>) -> bool {
        !(z.re > self.re_min)
            || !(z.re < self.re_max)
            || !(z.im > self.im_min)
            || !(z.im < self.im_max)
    }
}

fn ordered<F: Float>(lo: F, hi: F) -> bool {
    matches!(lo.partial_cmp(&hi), Some(Ordering::Less | Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox<f64> {
        BoundingBox::from_bounds([-1.0, 1.0, -1.0, 1.0])
    }

    #[test]
    fn validate_accepts_degenerate_and_rejects_inverted() {
        assert!(BoundingBox::from_bounds([0.0f64, 0.0, 2.0, 2.0])
            .validate()
            .is_ok());
        assert!(BoundingBox::from_bounds([1.0f64, 0.0, 0.0, 1.0])
            .validate()
            .is_err());
        assert!(BoundingBox::from_bounds([0.0f64, 1.0, 1.0, 0.0])
            .validate()
            .is_err());
        assert!(BoundingBox::from_bounds([f64::NAN, 1.0, 0.0, 1.0])
            .validate()
            .is_err());
    }

    #[test]
    fn boundary_is_inside_and_excluded() {
        let b = unit_box();
        let edge = Complex::new(1.0, 0.0);
        assert!(b.contains(&edge));
        assert!(b.excludes(&edge));
    }

    #[test]
    fn nan_coordinates() {
        let b = unit_box();
        let z = Complex::new(f64::NAN, 0.0);
        assert!(!b.contains(&z));
        assert!(b.excludes(&z));

        // NaN on one axis and out of box on the other: excluded, not contained.
        let z = Complex::new(f64::NAN, 5.0);
        assert!(!b.contains(&z));
        assert!(b.excludes(&z));
    }
}
