use super::{schemes, AknsDiscretization};

schemes! {
    /// Discretizations available for the Korteweg-de Vries equation.
    ///
    /// Each variant translates to the AKNS scheme of the same name.
    pub enum KdvDiscretization => AknsDiscretization {
        /// Boffetta-Osborne.
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
        /// CF4_2.
        Cf42 => "CF4_2",
        /// CF4_3.
        Cf43 => "CF4_3",
        /// CF5_3.
        Cf53 => "CF5_3",
        /// CF6_4.
        Cf64 => "CF6_4",
        /// ES4.
        Es4 => "ES4",
        /// TES4.
        Tes4 => "TES4",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discretization::{Discretization, NseDiscretization};
    use nalgebra::Complex;

    #[test]
    fn shares_the_nse_table() {
        for &d in KdvDiscretization::ALL {
            let nse: NseDiscretization = d.name().parse().expect("same scheme set");
            assert_eq!(d.to_akns(), nse.to_akns());
            assert_eq!(d.degree(), nse.degree());
        }
    }

    #[test]
    fn frequency_grid_step_follows_degree() {
        // z on the unit circle advances by 2 eps_t / degree per unit of λ.
        let eps_t = 0.1f64;
        for d in [KdvDiscretization::TwoSplit4B, KdvDiscretization::TwoSplit7A] {
            let mut z = [Complex::new(1.0, 0.0)];
            d.lambda_to_z(&mut z, eps_t).expect("supported");
            let step = 2.0 * eps_t / d.degree() as f64;
            assert!((z[0].arg() - step).abs() < 1e-14);
        }
    }

    #[test]
    fn boffetta_osborne_is_unsupported() {
        let mut z = [Complex::new(1.0f64, 0.0)];
        let err = KdvDiscretization::Bo
            .z_to_lambda(&mut z, 0.1)
            .expect_err("no degree");
        assert!(!err.is_invalid_argument());
        assert_eq!(z[0], Complex::new(1.0, 0.0));
    }
}
