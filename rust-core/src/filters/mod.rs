//! Windowed-sinc FIR filter design and FFT-based application

pub mod windows;
pub mod design;
pub mod fft_filter;

pub use windows::{WindowType, WindowSource, StandardWindows, generate_window};
pub use design::{
    FilterSpec, FilterSpecConfig, FilterKind, Kernel, FilterDesigner,
    design, design_fir, design_lowpass_fir, design_highpass_fir,
    frequency_response, magnitude_response_db,
};
pub use fft_filter::{FilterApplicator, apply};
