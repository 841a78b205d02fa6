use nalgebra::Complex;
use nft_rs_core::{Error, Result};
use num_traits::Float;

use super::{schemes, Discretization, SchemeProperties};

schemes! {
    /// Discretizations of the generic AKNS scattering problem.
    ///
    /// This is the taxonomy the scattering layer works in; the NSE and KdV
    /// schemes are translated to it before any degree is looked up.
    /// `2SPLITnX` and `4SPLIT4X` are splitting schemes whose transfer matrix
    /// entries are polynomials in z; the others are evaluated per step
    /// without a polynomial form.
    pub enum AknsDiscretization {
        /// Boffetta-Osborne, exact per-step matrix exponential.
        Bo => "BO",
        /// 2SPLIT1A.
        TwoSplit1A => "2SPLIT1A",
        /// 2SPLIT1B.
        TwoSplit1B => "2SPLIT1B",
        /// 2SPLIT2A.
        TwoSplit2A => "2SPLIT2A",
        /// 2SPLIT2B.
        TwoSplit2B => "2SPLIT2B",
        /// 2SPLIT2S.
        TwoSplit2S => "2SPLIT2S",
        /// Modified Ablowitz-Ladik.
        TwoSplit2Modal => "2SPLIT2_MODAL",
        /// 2SPLIT3A.
        TwoSplit3A => "2SPLIT3A",
        /// 2SPLIT3B.
        TwoSplit3B => "2SPLIT3B",
        /// 2SPLIT3S.
        TwoSplit3S => "2SPLIT3S",
        /// 2SPLIT4A.
        TwoSplit4A => "2SPLIT4A",
        /// 2SPLIT4B.
        TwoSplit4B => "2SPLIT4B",
        /// 2SPLIT5A.
        TwoSplit5A => "2SPLIT5A",
        /// 2SPLIT5B.
        TwoSplit5B => "2SPLIT5B",
        /// 2SPLIT6A.
        TwoSplit6A => "2SPLIT6A",
        /// 2SPLIT6B.
        TwoSplit6B => "2SPLIT6B",
        /// 2SPLIT7A.
        TwoSplit7A => "2SPLIT7A",
        /// 2SPLIT7B.
        TwoSplit7B => "2SPLIT7B",
        /// 2SPLIT8A.
        TwoSplit8A => "2SPLIT8A",
        /// 2SPLIT8B.
        TwoSplit8B => "2SPLIT8B",
        /// 4SPLIT4A.
        FourSplit4A => "4SPLIT4A",
        /// 4SPLIT4B.
        FourSplit4B => "4SPLIT4B",
        /// Commutator-free, order 4, two exponentials.
        Cf42 => "CF4_2",
        /// Commutator-free, order 4, three exponentials.
        Cf43 => "CF4_3",
        /// Commutator-free, order 5, three exponentials.
        Cf53 => "CF5_3",
        /// Commutator-free, order 6, four exponentials.
        Cf64 => "CF6_4",
        /// Exponential splitting, order 4.
        Es4 => "ES4",
        /// Transformed exponential splitting, order 4.
        Tes4 => "TES4",
    }
}

impl AknsDiscretization {
    /// Degree, upsampling factor and boundary coefficient of the scheme.
    pub const fn properties(self) -> SchemeProperties {
        use AknsDiscretization::*;

        let degree = match self {
            TwoSplit1A | TwoSplit1B | TwoSplit2A | TwoSplit2B | TwoSplit2S | TwoSplit2Modal => 1,
            TwoSplit3A | TwoSplit3B | TwoSplit3S => 3,
            TwoSplit4A | TwoSplit4B | FourSplit4A | FourSplit4B => 4,
            TwoSplit5A | TwoSplit5B => 15,
            TwoSplit6A | TwoSplit6B => 12,
            TwoSplit7A | TwoSplit7B => 105,
            TwoSplit8A | TwoSplit8B => 24,
            Bo | Cf42 | Cf43 | Cf53 | Cf64 | Es4 | Tes4 => 0,
        };
        // Samples per step the scheme consumes from the input signal.
        let upsampling_factor = match self {
            FourSplit4A | FourSplit4B | Cf42 | Es4 | Tes4 => 2,
            Cf43 | Cf53 => 3,
            Cf64 => 4,
            _ => 1,
        };
        SchemeProperties {
            degree,
            upsampling_factor,
            boundary_coeff: 0.5,
        }
    }
}

impl Discretization for AknsDiscretization {
    fn to_akns(self) -> AknsDiscretization {
        self
    }
}

/// Validate `eps_t` and fetch the degree of `d` as a float.
fn degree_for_mapping<F: Float>(d: AknsDiscretization, eps_t: F) -> Result<F> {
    if !(eps_t.is_finite() && eps_t > F::zero()) {
        return Err(Error::InvalidArg {
            arg: "eps_t",
            reason: "step size must be finite and positive",
        });
    }
    let degree = d.properties().degree;
    if degree == 0 {
        return Err(Error::Unsupported {
            discretization: d.name(),
            reason: "no polynomial degree for fast scattering",
        });
    }
    F::from(degree).ok_or(Error::InvalidArg {
        arg: "discretization",
        reason: "degree is not representable in the float type",
    })
}

pub(super) fn akns_lambda_to_z<F: Float>(
    d: AknsDiscretization,
    values: &mut [Complex<F>],
    eps_t: F,
) -> Result<()> {
    let degree = degree_for_mapping(d, eps_t)?;
    let scale = (eps_t + eps_t) / degree;
    log::trace!("lambda_to_z: {} values, scheme {d}", values.len());

    let i = Complex::<F>::i();
    for v in values.iter_mut() {
        *v = (i * *v * scale).exp();
    }
    Ok(())
}

pub(super) fn akns_z_to_lambda<F: Float>(
    d: AknsDiscretization,
    values: &mut [Complex<F>],
    eps_t: F,
) -> Result<()> {
    let degree = degree_for_mapping(d, eps_t)?;
    let denom = Complex::new(F::zero(), eps_t + eps_t);
    log::trace!("z_to_lambda: {} values, scheme {d}", values.len());

    for v in values.iter_mut() {
        *v = v.ln() * degree / denom;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f64::consts::PI;

    #[test]
    fn degree_table() {
        use AknsDiscretization::*;
        assert_eq!(TwoSplit2Modal.degree(), 1);
        assert_eq!(TwoSplit3S.degree(), 3);
        assert_eq!(TwoSplit4A.degree(), 4);
        assert_eq!(FourSplit4A.degree(), 4);
        assert_eq!(TwoSplit5B.degree(), 15);
        assert_eq!(TwoSplit6A.degree(), 12);
        assert_eq!(TwoSplit7A.degree(), 105);
        assert_eq!(TwoSplit8B.degree(), 24);
        for d in [Bo, Cf42, Cf43, Cf53, Cf64, Es4, Tes4] {
            assert_eq!(d.degree(), 0, "{d}");
        }
    }

    #[test]
    fn upsampling_table() {
        use AknsDiscretization::*;
        assert_eq!(TwoSplit4A.upsampling_factor(), 1);
        assert_eq!(Bo.upsampling_factor(), 1);
        assert_eq!(FourSplit4B.upsampling_factor(), 2);
        assert_eq!(Tes4.upsampling_factor(), 2);
        assert_eq!(Cf53.upsampling_factor(), 3);
        assert_eq!(Cf64.upsampling_factor(), 4);
    }

    #[test]
    fn every_scheme_has_half_step_boundary() {
        for &d in AknsDiscretization::ALL {
            assert_eq!(d.boundary_coeff::<f64>(), 0.5, "{d}");
        }
    }

    #[test]
    fn four_substep_scheme_has_quarter_grid_step() {
        let mut vals = [Complex::new(1.0f64, 0.0)];
        AknsDiscretization::TwoSplit4A
            .lambda_to_z(&mut vals, 0.1)
            .expect("supported");
        assert_relative_eq!(vals[0].arg(), 0.05, epsilon = 1e-15);
    }

    #[test]
    fn lambda_to_z_matches_formula() {
        let d = AknsDiscretization::FourSplit4A;
        let eps_t = 0.05f64;
        let lambda = Complex::new(1.5, 0.25);
        let mut vals = [lambda];
        d.lambda_to_z(&mut vals, eps_t).expect("supported");

        let expected = (Complex::<f64>::i() * lambda * (2.0 * eps_t / 4.0)).exp();
        assert_relative_eq!(vals[0].re, expected.re, epsilon = 1e-15);
        assert_relative_eq!(vals[0].im, expected.im, epsilon = 1e-15);
    }

    #[test]
    fn real_lambda_lands_on_unit_circle() {
        let mut vals = [Complex::new(3.0f64, 0.0), Complex::new(-7.5, 0.0)];
        AknsDiscretization::TwoSplit2A
            .lambda_to_z(&mut vals, 0.1)
            .expect("supported");
        for z in vals {
            assert_relative_eq!(z.norm(), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn round_trip_within_one_branch() {
        let eps_t = 0.02f64;
        for &d in AknsDiscretization::ALL.iter().filter(|d| d.degree() > 0) {
            // Keep |2 Re(λ) eps_t / degree| < π.
            let limit = 0.9 * PI * d.degree() as f64 / (2.0 * eps_t);
            let lambdas = [
                Complex::new(0.0, 0.0),
                Complex::new(0.5 * limit, 1.0),
                Complex::new(-0.99 * limit, -3.0),
                Complex::new(10.0, 0.7),
            ];
            let mut vals = lambdas;
            d.lambda_to_z(&mut vals, eps_t).expect("supported");
            d.z_to_lambda(&mut vals, eps_t).expect("supported");
            for (got, want) in vals.iter().zip(lambdas.iter()) {
                assert_relative_eq!(got.re, want.re, epsilon = 1e-9, max_relative = 1e-12);
                assert_relative_eq!(got.im, want.im, epsilon = 1e-9, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn results_outside_the_branch_wrap() {
        let d = AknsDiscretization::TwoSplit1A;
        let eps_t = 0.5f64;
        let period = PI * d.degree() as f64 / eps_t;
        let lambda = Complex::new(0.25 * period + period, 0.0);
        let mut vals = [lambda];
        d.lambda_to_z(&mut vals, eps_t).expect("supported");
        d.z_to_lambda(&mut vals, eps_t).expect("supported");
        assert_relative_eq!(vals[0].re, lambda.re - period, epsilon = 1e-12);
    }

    #[test]
    fn unsupported_scheme_fails_without_mutation() {
        let mut vals = [Complex::new(1.0f64, 1.0)];
        let err = AknsDiscretization::Bo
            .lambda_to_z(&mut vals, 0.1)
            .expect_err("no degree");
        assert_eq!(
            err,
            Error::Unsupported {
                discretization: "BO",
                reason: "no polynomial degree for fast scattering",
            }
        );
        assert!(AknsDiscretization::Bo.z_to_lambda(&mut vals, 0.1).is_err());
        assert!(AknsDiscretization::Cf42.lambda_to_z(&mut vals, 0.1).is_err());
        assert_eq!(vals[0], Complex::new(1.0, 1.0));
    }

    #[test]
    fn invalid_step_size_is_rejected() {
        let mut vals = [Complex::new(1.0f64, 0.0)];
        for eps_t in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let err = AknsDiscretization::TwoSplit3A
                .lambda_to_z(&mut vals, eps_t)
                .expect_err("bad eps_t");
            assert!(err.is_invalid_argument());
        }
        assert_eq!(vals[0], Complex::new(1.0, 0.0));
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for &d in AknsDiscretization::ALL {
            let parsed: AknsDiscretization = d.name().parse().expect("known name");
            assert_eq!(parsed, d);
        }
        assert_eq!(
            "2split2_modal".parse::<AknsDiscretization>(),
            Ok(AknsDiscretization::TwoSplit2Modal)
        );
        assert!("3SPLIT9Z".parse::<AknsDiscretization>().is_err());
    }
}
