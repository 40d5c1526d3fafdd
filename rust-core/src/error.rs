//! Error types for filter design and application

use thiserror::Error;

/// Errors raised while designing or applying a filter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("unsupported window kind: '{0}' (expected 'none', 'blackman' or 'hanning')")]
    UnsupportedWindow(String),

    #[error("unsupported filter kind: '{0}' (expected 'lp' or 'hp')")]
    UnsupportedFilterKind(String),

    #[error("parameter out of range: {name} = {value} (expected {expected})")]
    ParameterOutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("kernel longer than signal: kernel has {kernel_len} taps, signal has {signal_len} samples")]
    KernelLongerThanSignal { kernel_len: usize, signal_len: usize },

    #[error("signal is empty")]
    EmptySignal,

    #[error("kernel is empty")]
    EmptyKernel,

    #[error("degenerate kernel: {0}")]
    DegenerateKernel(String),

    #[error("transform error: {0}")]
    Transform(String),
}

impl From<realfft::FftError> for FilterError {
    fn from(err: realfft::FftError) -> Self {
        FilterError::Transform(err.to_string())
    }
}

/// Result type for filter operations
pub type Result<T> = std::result::Result<T, FilterError>;
