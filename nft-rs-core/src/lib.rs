//! Shared substrate for `nft-rs`.
//!
//! Holds the error taxonomy every fallible routine reports through and the
//! elementary complex-valued kernels used by discretization setup and
//! scattering code.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod error;

/// Elementary numeric kernels.
pub mod num_rs;

pub use error::{Error, Result};
