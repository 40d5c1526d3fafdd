//! Forward/inverse transform pair for real-valued signals
//!
//! Both backends follow the one-sided real-FFT convention: a signal of
//! length N maps to N/2 + 1 complex bins, and the inverse maps those bins
//! back to exactly N samples, scaled by 1/N.

use crate::error::{FilterError, Result};
use num_complex::Complex64;
use realfft::RealFftPlanner;
use rustfft::FftPlanner;

/// Number of one-sided bins for a real signal of `length` samples
pub fn num_bins(length: usize) -> usize {
    length / 2 + 1
}

/// Real-input transform pair used by the applicator
pub trait SpectralTransform {
    /// One-sided forward transform of a real signal
    fn forward(&mut self, signal: &[f64]) -> Result<Vec<Complex64>>;

    /// Inverse of [`forward`](Self::forward), producing `length` real samples
    fn inverse(&mut self, spectrum: &[Complex64], length: usize) -> Result<Vec<f64>>;
}

fn check_inverse_len(spectrum: &[Complex64], length: usize) -> Result<()> {
    if length == 0 {
        return Err(FilterError::Transform("zero-length inverse transform".into()));
    }
    if spectrum.len() != num_bins(length) {
        return Err(FilterError::Transform(format!(
            "spectrum has {} bins, expected {} for {} samples",
            spectrum.len(),
            num_bins(length),
            length
        )));
    }
    Ok(())
}

/// Default backend built on `realfft`
///
/// Plans are cached by the planner, so reusing one instance across
/// equal-length signals skips re-planning.
pub struct RealFftTransform {
    planner: RealFftPlanner<f64>,
}

impl RealFftTransform {
    pub fn new() -> Self {
        Self {
            planner: RealFftPlanner::<f64>::new(),
        }
    }
}

impl Default for RealFftTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectralTransform for RealFftTransform {
    fn forward(&mut self, signal: &[f64]) -> Result<Vec<Complex64>> {
        if signal.is_empty() {
            return Err(FilterError::Transform("zero-length forward transform".into()));
        }

        let r2c = self.planner.plan_fft_forward(signal.len());

        // realfft uses the input as scratch space
        let mut input = signal.to_vec();
        let mut output = r2c.make_output_vec();
        r2c.process(&mut input, &mut output)?;

        Ok(output)
    }

    fn inverse(&mut self, spectrum: &[Complex64], length: usize) -> Result<Vec<f64>> {
        check_inverse_len(spectrum, length)?;

        let c2r = self.planner.plan_fft_inverse(length);

        // DC and (for even lengths) Nyquist bins must be purely real
        let mut input = spectrum.to_vec();
        input[0].im = 0.0;
        if length % 2 == 0 {
            if let Some(last) = input.last_mut() {
                last.im = 0.0;
            }
        }

        let mut output = c2r.make_output_vec();
        c2r.process(&mut input, &mut output)?;

        let scale = 1.0 / length as f64;
        for sample in output.iter_mut() {
            *sample *= scale;
        }

        Ok(output)
    }
}

/// Reference backend built on a full complex `rustfft` transform
///
/// Slower than [`RealFftTransform`]; useful for cross-checking it.
pub struct ComplexFftTransform {
    planner: FftPlanner<f64>,
}

impl ComplexFftTransform {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }
}

impl Default for ComplexFftTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectralTransform for ComplexFftTransform {
    fn forward(&mut self, signal: &[f64]) -> Result<Vec<Complex64>> {
        if signal.is_empty() {
            return Err(FilterError::Transform("zero-length forward transform".into()));
        }

        let n = signal.len();
        let fft = self.planner.plan_fft_forward(n);

        let mut buffer: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        fft.process(&mut buffer);

        buffer.truncate(num_bins(n));
        Ok(buffer)
    }

    fn inverse(&mut self, spectrum: &[Complex64], length: usize) -> Result<Vec<f64>> {
        check_inverse_len(spectrum, length)?;

        let ifft = self.planner.plan_fft_inverse(length);

        // Rebuild the Hermitian-symmetric full spectrum
        let half = spectrum.len();
        let mut buffer = vec![Complex64::new(0.0, 0.0); length];
        buffer[..half].copy_from_slice(spectrum);
        buffer[0].im = 0.0;
        if length % 2 == 0 {
            buffer[half - 1].im = 0.0;
        }
        for k in half..length {
            buffer[k] = buffer[length - k].conj();
        }

        ifft.process(&mut buffer);

        let scale = 1.0 / length as f64;
        Ok(buffer.iter().map(|c| c.re * scale).collect())
    }
}
