//! Sinc Filter - windowed-sinc FIR design and FFT filtering
//!
//! Designs low-pass and high-pass kernels from a cutoff, a transition band
//! and a window, and applies kernels to whole signals by frequency-domain
//! multiplication. Optional Python bindings behind the `python` feature.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod filters;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{FilterError, Result};
pub use filters::{
    apply, design, FilterApplicator, FilterDesigner, FilterKind, FilterSpec, Kernel, WindowType,
};
pub use spectrum::{RealFftTransform, SpectralTransform};
