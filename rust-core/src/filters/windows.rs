//! Window functions for windowed-sinc filter design

use crate::error::FilterError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WindowType {
    /// No windowing: w[n] = 1 (named "none")
    Rectangular,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/(M-1)) + 0.08*cos(4πn/(M-1))
    Blackman,

    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(M-1)) (named "hanning")
    Hann,
}

impl WindowType {
    /// Every supported window, in canonical order
    pub const ALL: [WindowType; 3] = [WindowType::Rectangular, WindowType::Blackman, WindowType::Hann];

    /// Canonical name used in configuration and error messages
    pub fn name(&self) -> &'static str {
        match self {
            WindowType::Rectangular => "none",
            WindowType::Blackman => "blackman",
            WindowType::Hann => "hanning",
        }
    }
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(WindowType::Rectangular),
            "blackman" => Ok(WindowType::Blackman),
            "hanning" => Ok(WindowType::Hann),
            other => {
                log::warn!("rejecting unknown window kind '{}'", other);
                Err(FilterError::UnsupportedWindow(other.to_string()))
            }
        }
    }
}

impl TryFrom<String> for WindowType {
    type Error = FilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WindowType> for String {
    fn from(window: WindowType) -> Self {
        window.name().to_string()
    }
}

/// Source of window sequences used by the designer
///
/// The default is [`StandardWindows`]; tests can inject their own.
pub trait WindowSource {
    /// Produce `length` window coefficients of the given type
    fn window(&self, window_type: WindowType, length: usize) -> Vec<f64>;
}

/// Textbook symmetric windows, see [`generate_window`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardWindows;

impl WindowSource for StandardWindows {
    fn window(&self, window_type: WindowType, length: usize) -> Vec<f64> {
        generate_window(window_type, length)
    }
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (M)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..M-1.
/// A window of length 1 is `[1.0]`.
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    if length == 1 {
        return vec![1.0];
    }

    let m = length as f64;
    let mut window = Vec::with_capacity(length);

    match window_type {
        WindowType::Rectangular => {
            window.resize(length, 1.0);
        }

        WindowType::Blackman => {
            for n in 0..length {
                let angle1 = 2.0 * PI * n as f64 / (m - 1.0);
                let angle2 = 4.0 * PI * n as f64 / (m - 1.0);
                window.push(0.42 - 0.5 * angle1.cos() + 0.08 * angle2.cos());
            }
        }

        WindowType::Hann => {
            for n in 0..length {
                let angle = 2.0 * PI * n as f64 / (m - 1.0);
                window.push(0.5 - 0.5 * angle.cos());
            }
        }
    }

    window
}
