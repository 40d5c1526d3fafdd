//! Windowed-sinc FIR filter design
//!
//! Low-pass kernels are a normalized sinc shaped by a window and scaled to
//! unit DC gain. High-pass kernels come from the low-pass kernel by spectral
//! inversion (impulse minus low-pass), so both share length and group delay.

use super::windows::{StandardWindows, WindowSource, WindowType};
use crate::error::{FilterError, Result};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Longest kernel the designer will build
pub const MAX_KERNEL_LENGTH: usize = 1 << 24;

/// Filter response type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterKind {
    /// Low-pass (named "lp")
    LowPass,
    /// High-pass (named "hp")
    HighPass,
}

impl FilterKind {
    pub const ALL: [FilterKind; 2] = [FilterKind::LowPass, FilterKind::HighPass];

    /// Canonical name used in configuration and error messages
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::LowPass => "lp",
            FilterKind::HighPass => "hp",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lp" => Ok(FilterKind::LowPass),
            "hp" => Ok(FilterKind::HighPass),
            other => {
                log::warn!("rejecting unknown filter kind '{}'", other);
                Err(FilterError::UnsupportedFilterKind(other.to_string()))
            }
        }
    }
}

impl TryFrom<String> for FilterKind {
    type Error = FilterError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<FilterKind> for String {
    fn from(kind: FilterKind) -> Self {
        kind.name().to_string()
    }
}

/// Filter specification for windowed-sinc design
///
/// Only constructible through [`FilterSpec::new`] (or deserialization,
/// which goes through the same checks), so every instance is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FilterSpecConfig", into = "FilterSpecConfig")]
pub struct FilterSpec {
    cutoff: f64,
    transition_band: f64,
    window_type: WindowType,
    kind: FilterKind,
}

/// Serialized form of [`FilterSpec`], validated on conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSpecConfig {
    /// Cutoff frequency, fraction of the sampling rate
    pub fc: f64,
    /// Transition bandwidth, fraction of the sampling rate
    pub b: f64,
    #[serde(default = "default_window")]
    pub window: WindowType,
    pub kind: FilterKind,
}

fn default_window() -> WindowType {
    WindowType::Blackman
}

impl TryFrom<FilterSpecConfig> for FilterSpec {
    type Error = FilterError;

    fn try_from(config: FilterSpecConfig) -> Result<Self> {
        FilterSpec::new(config.fc, config.b, config.window, config.kind)
    }
}

impl From<FilterSpec> for FilterSpecConfig {
    fn from(spec: FilterSpec) -> Self {
        Self {
            fc: spec.cutoff,
            b: spec.transition_band,
            window: spec.window_type,
            kind: spec.kind,
        }
    }
}

impl FilterSpec {
    /// Create a validated filter spec
    ///
    /// # Arguments
    /// * `cutoff` - Cutoff frequency as a fraction of the sampling rate, in (0, 0.5)
    /// * `transition_band` - Transition bandwidth as a fraction of the sampling rate, > 0
    /// * `window_type` - Window applied to the truncated sinc
    /// * `kind` - Low-pass or high-pass
    pub fn new(cutoff: f64, transition_band: f64, window_type: WindowType, kind: FilterKind) -> Result<Self> {
        if !(cutoff.is_finite() && cutoff > 0.0 && cutoff < 0.5) {
            return Err(FilterError::ParameterOutOfRange {
                name: "fc",
                value: cutoff,
                expected: "0 < fc < 0.5",
            });
        }

        if !(transition_band.is_finite() && transition_band > 0.0) {
            return Err(FilterError::ParameterOutOfRange {
                name: "b",
                value: transition_band,
                expected: "b > 0",
            });
        }

        if (4.0 / transition_band).ceil() > MAX_KERNEL_LENGTH as f64 {
            return Err(FilterError::ParameterOutOfRange {
                name: "b",
                value: transition_band,
                expected: "b >= 4 / MAX_KERNEL_LENGTH",
            });
        }

        Ok(Self {
            cutoff,
            transition_band,
            window_type,
            kind,
        })
    }

    /// Create a spec from window and kind names ("none"/"blackman"/"hanning", "lp"/"hp")
    pub fn parse(cutoff: f64, transition_band: f64, window: &str, kind: &str) -> Result<Self> {
        let window_type = window.parse()?;
        let kind = kind.parse()?;
        Self::new(cutoff, transition_band, window_type, kind)
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn transition_band(&self) -> f64 {
        self.transition_band
    }

    pub fn window_type(&self) -> WindowType {
        self.window_type
    }

    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Kernel length N: ceil(4 / b), bumped to the next odd number
    pub fn kernel_length(&self) -> usize {
        let n = (4.0 / self.transition_band).ceil() as usize;
        if n % 2 == 0 {
            n + 1
        } else {
            n
        }
    }
}

/// Designed FIR kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    coefficients: Vec<f64>,
}

impl Kernel {
    /// Filter coefficients h[n] for n in [`span`](Self::span)
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Index span 0..N
    pub fn span(&self) -> Range<usize> {
        0..self.coefficients.len()
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Index of the center tap, (N-1)/2
    pub fn center(&self) -> usize {
        (self.coefficients.len() - 1) / 2
    }

    /// Group delay in samples (linear phase, symmetric kernel)
    pub fn group_delay_samples(&self) -> f64 {
        (self.coefficients.len() - 1) as f64 / 2.0
    }

    /// Sum of coefficients (DC gain)
    pub fn sum(&self) -> f64 {
        self.coefficients.iter().sum()
    }

    pub fn into_parts(self) -> (Range<usize>, Vec<f64>) {
        (self.span(), self.coefficients)
    }
}

impl AsRef<[f64]> for Kernel {
    fn as_ref(&self) -> &[f64] {
        &self.coefficients
    }
}

impl From<Kernel> for Vec<f64> {
    fn from(kernel: Kernel) -> Self {
        kernel.coefficients
    }
}

/// Normalized sinc: sin(πx) / (πx), with sinc(0) = 1
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

/// Windowed-sinc designer with an injectable window source
#[derive(Debug, Clone, Default)]
pub struct FilterDesigner<W = StandardWindows> {
    windows: W,
}

impl FilterDesigner<StandardWindows> {
    pub fn new() -> Self {
        Self {
            windows: StandardWindows,
        }
    }
}

impl<W: WindowSource> FilterDesigner<W> {
    /// Create a designer that draws windows from `windows`
    pub fn with_windows(windows: W) -> Self {
        Self { windows }
    }

    /// Design a kernel for `spec`
    ///
    /// # Algorithm
    /// 1. N = ceil(4/b), forced odd
    /// 2. h[n] = sinc(2·fc·(n - (N-1)/2)) for n = 0..N-1
    /// 3. Multiply by the window and normalize to unit sum
    /// 4. High-pass: negate and add 1 at the center tap
    pub fn design(&self, spec: &FilterSpec) -> Result<Kernel> {
        let m = spec.kernel_length();
        let center = (m - 1) as f64 / 2.0;

        let window = self.windows.window(spec.window_type(), m);
        if window.len() != m {
            return Err(FilterError::DegenerateKernel(format!(
                "window source returned {} samples, expected {}",
                window.len(),
                m
            )));
        }

        let mut h: Vec<f64> = (0..m)
            .zip(window.iter())
            .map(|(n, &w)| sinc(2.0 * spec.cutoff() * (n as f64 - center)) * w)
            .collect();

        let sum: f64 = h.iter().sum();
        if !sum.is_finite() || sum == 0.0 {
            return Err(FilterError::DegenerateKernel(format!(
                "coefficient sum is {} before normalization",
                sum
            )));
        }
        for coeff in h.iter_mut() {
            *coeff /= sum;
        }

        if spec.kind() == FilterKind::HighPass {
            spectral_inversion(&mut h);
        }

        log::debug!(
            "designed {} kernel: fc={}, b={}, window={}, taps={}",
            spec.kind(),
            spec.cutoff(),
            spec.transition_band(),
            spec.window_type(),
            m
        );

        Ok(Kernel { coefficients: h })
    }
}

/// Turn a low-pass kernel into its complementary high-pass (δ - h)
fn spectral_inversion(h: &mut [f64]) {
    for coeff in h.iter_mut() {
        *coeff = -*coeff;
    }
    let center = (h.len() - 1) / 2;
    h[center] += 1.0;
}

/// Design a kernel from a validated spec with the standard windows
pub fn design_fir(spec: &FilterSpec) -> Result<Kernel> {
    FilterDesigner::new().design(spec)
}

/// Design a lowpass FIR filter
pub fn design_lowpass_fir(cutoff: f64, transition_band: f64, window_type: WindowType) -> Result<Kernel> {
    design_fir(&FilterSpec::new(cutoff, transition_band, window_type, FilterKind::LowPass)?)
}

/// Design a highpass FIR filter
pub fn design_highpass_fir(cutoff: f64, transition_band: f64, window_type: WindowType) -> Result<Kernel> {
    design_fir(&FilterSpec::new(cutoff, transition_band, window_type, FilterKind::HighPass)?)
}

/// Design a filter from named window/kind options
///
/// # Arguments
/// * `fc` - Cutoff frequency, fraction of sampling rate
/// * `b` - Transition band, fraction of sampling rate
/// * `window` - "none", "blackman" or "hanning"
/// * `kind` - "lp" or "hp"
///
/// # Returns
/// The index span of the filter and its coefficients
pub fn design(fc: f64, b: f64, window: &str, kind: &str) -> Result<(Range<usize>, Vec<f64>)> {
    let spec = FilterSpec::parse(fc, b, window, kind)?;
    Ok(design_fir(&spec)?.into_parts())
}

/// Calculate frequency response at given frequencies
///
/// # Arguments
/// * `h` - Filter coefficients
/// * `frequencies` - Frequencies as a fraction of the sampling rate (0 to 0.5)
///
/// # Returns
/// Complex frequency response H(e^jω)
pub fn frequency_response(h: &[f64], frequencies: &[f64]) -> Vec<Complex64> {
    frequencies
        .iter()
        .map(|&f| {
            let omega = 2.0 * PI * f;
            h.iter()
                .enumerate()
                .map(|(n, &h_n)| h_n * Complex64::from_polar(1.0, -omega * n as f64))
                .sum::<Complex64>()
        })
        .collect()
}

/// Calculate magnitude response in dB
pub fn magnitude_response_db(h: &[f64], frequencies: &[f64]) -> Vec<f64> {
    frequency_response(h, frequencies)
        .iter()
        .map(|c| 20.0 * c.norm().max(1e-20).log10())
        .collect()
}
