//! Discretization schemes and the λ ↔ z spectral-parameter maps.
//!
//! Every equation-specific scheme ([`NseDiscretization`],
//! [`KdvDiscretization`]) resolves to a generic [`AknsDiscretization`], and
//! the degree, boundary coefficient and both maps are read from the AKNS
//! table. Unknown schemes cannot be represented; parsing an unknown name
//! fails with an invalid-argument error.

use nalgebra::Complex;
use nft_rs_core::Result;
use num_traits::Float;

/// Declares a closed scheme enumeration with canonical names, `ALL`,
/// `Display` and case-insensitive `FromStr`. The `=> Target` form also emits
/// a same-variant `to_akns` mapping.
macro_rules! schemes {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every scheme, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Canonical scheme name, e.g. `"2SPLIT2_MODAL"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl core::str::FromStr for $name {
            type Err = nft_rs_core::Error;

            fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
                    .ok_or(nft_rs_core::Error::InvalidArg {
                        arg: "discretization",
                        reason: "unknown discretization name",
                    })
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident => $target:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $crate::discretization::schemes! {
            $(#[$meta])*
            $vis enum $name {
                $( $(#[$vmeta])* $variant => $label, )+
            }
        }

        impl $crate::discretization::Discretization for $name {
            fn to_akns(self) -> $target {
                match self {
                    $( $name::$variant => $target::$variant, )+
                }
            }
        }
    };
}
pub(crate) use schemes;

mod akns;
mod kdv;
mod nse;

pub use akns::*;
pub use kdv::*;
pub use nse::*;

/// Per-scheme constants of the AKNS table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeProperties {
    /// Degree of the polynomial entries of one scattering matrix; 0 when the
    /// scheme is not supported by fast scattering.
    pub degree: usize,
    /// Number of input samples consumed per discretization step.
    pub upsampling_factor: usize,
    /// Fraction of a step by which the discretized potential extends past the
    /// last sample.
    pub boundary_coeff: f64,
}

/// Common interface of all discretization enumerations.
///
/// Everything except [`to_akns`](Self::to_akns) is derived from the AKNS
/// table, so a scheme's degree is defined in exactly one place.
pub trait Discretization: Copy + core::fmt::Display {
    /// Equivalent scheme in the generic AKNS taxonomy.
    fn to_akns(self) -> AknsDiscretization;

    /// Polynomial degree of one scattering matrix, 0 if fast scattering does
    /// not support the scheme.
    fn degree(self) -> usize {
        self.to_akns().properties().degree
    }

    /// Samples of the input signal consumed per step.
    fn upsampling_factor(self) -> usize {
        self.to_akns().properties().upsampling_factor
    }

    /// Boundary coefficient, NaN if it is not representable in `F`.
    fn boundary_coeff<F: Float>(self) -> F {
        F::from(self.to_akns().properties().boundary_coeff).unwrap_or_else(F::nan)
    }

    /// Map continuous-time λ to discrete-time `z = exp(2iλ eps_t / degree)`
    /// in place.
    fn lambda_to_z<F: Float>(self, values: &mut [Complex<F>], eps_t: F) -> Result<()> {
        akns::akns_lambda_to_z(self.to_akns(), values, eps_t)
    }

    /// Map discrete-time z back to `λ = degree log(z) / (2i eps_t)` in place.
    ///
    /// Uses the principal branch of the logarithm: λ is recovered modulo
    /// `π degree / eps_t` in the real part.
    fn z_to_lambda<F: Float>(self, values: &mut [Complex<F>], eps_t: F) -> Result<()> {
        akns::akns_z_to_lambda(self.to_akns(), values, eps_t)
    }
}
