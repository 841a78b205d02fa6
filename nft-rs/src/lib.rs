//! Discretization registry and spectral array toolbox for nonlinear Fourier
//! transforms.
//!
//! The [`discretization`] module describes how a numerical scheme relates the
//! continuous-time spectral parameter λ to the discrete-time parameter z.
//! The [`spectral`] module cleans up candidate spectral values after
//! scattering and root finding: bounding-box and near-real-axis filters,
//! greedy merging of near duplicates, strided downsampling of input signals
//! and accuracy metrics.
//!
//! ```
//! use nalgebra::Complex;
//! use nft_rs::discretization::{Discretization, NseDiscretization};
//! use nft_rs::spectral::{filter_inside, merge_close};
//!
//! let scheme: NseDiscretization = "2SPLIT2_MODAL".parse().unwrap();
//! let eps_t = 0.01;
//!
//! // Roots found in the z-plane, mapped back to λ.
//! let mut roots = vec![
//!     Complex::new(0.5f64, 1.0),
//!     Complex::new(0.5 + 1e-12, 1.0),
//!     Complex::new(40.0, -3.0),
//! ];
//! scheme.lambda_to_z(&mut roots, eps_t).unwrap();
//! scheme.z_to_lambda(&mut roots, eps_t).unwrap();
//!
//! let n = filter_inside(&mut roots, [-10.0, 10.0, 0.0, 10.0], None).unwrap();
//! let n = merge_close(&mut roots[..n], 1e-6).unwrap();
//! roots.truncate(n);
//! assert_eq!(roots.len(), 1);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod discretization;
pub mod kernel;
pub mod spectral;

#[cfg(feature = "std")]
pub mod debug;

pub use nft_rs_core::num_rs;
pub use nft_rs_core::{Error, Result};
