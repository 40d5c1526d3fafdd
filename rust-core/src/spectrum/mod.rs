//! Real-signal transforms used for frequency-domain filtering

pub mod fft;

pub use fft::{SpectralTransform, RealFftTransform, ComplexFftTransform};
