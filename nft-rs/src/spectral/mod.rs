//! Post-processing of candidate spectral data.
//!
//! Filters, merging and metrics operate on caller-owned buffers and only
//! ever shrink their logical length. The downsampler is the one routine that
//! allocates.

mod bounds;
mod filter;
mod merge;
mod metrics;
mod retain;

pub mod traits;

#[cfg(feature = "alloc")]
mod downsample;

pub use bounds::*;
pub use filter::*;
pub use merge::*;
pub use metrics::*;

#[cfg(feature = "alloc")]
pub use downsample::*;
