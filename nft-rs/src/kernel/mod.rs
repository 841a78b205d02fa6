//! Shared kernel substrate.
//!
//! Construction-time validation for the toolbox kernels and the 1D buffer
//! adapters they read from and compact in place.

mod errors;
mod io;
mod lifecycle;

pub use errors::*;
pub use io::*;
pub use lifecycle::*;
