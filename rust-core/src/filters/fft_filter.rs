//! FFT-based filter application
//!
//! Zero-pads the kernel to the signal length, multiplies the one-sided
//! spectra bin by bin and transforms back. The result is the circular
//! convolution of signal and padded kernel, with the same length as the
//! signal.

use crate::error::{FilterError, Result};
use crate::spectrum::fft::{RealFftTransform, SpectralTransform};
use num_complex::Complex64;

/// Applies FIR kernels to whole signals in the frequency domain
pub struct FilterApplicator<T = RealFftTransform> {
    transform: T,
}

impl FilterApplicator<RealFftTransform> {
    pub fn new() -> Self {
        Self {
            transform: RealFftTransform::new(),
        }
    }
}

impl Default for FilterApplicator<RealFftTransform> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SpectralTransform> FilterApplicator<T> {
    /// Create an applicator on top of a specific transform backend
    pub fn with_transform(transform: T) -> Self {
        Self { transform }
    }

    /// Filter `signal` with `kernel`
    ///
    /// # Arguments
    /// * `signal` - Input samples (length X >= 1)
    /// * `kernel` - Filter coefficients (length 1 <= Y <= X)
    ///
    /// # Returns
    /// Filtered signal of length X. Neither input is modified.
    pub fn apply(&mut self, signal: &[f64], kernel: &[f64]) -> Result<Vec<f64>> {
        if signal.is_empty() {
            return Err(FilterError::EmptySignal);
        }
        if kernel.is_empty() {
            return Err(FilterError::EmptyKernel);
        }

        let x = signal.len();
        let y = kernel.len();
        if y > x {
            return Err(FilterError::KernelLongerThanSignal {
                kernel_len: y,
                signal_len: x,
            });
        }
        if y % 2 == 0 {
            log::debug!("applying even-length kernel ({} taps)", y);
        }

        // 1. Forward transform of the signal
        let sig_fft = self.transform.forward(signal)?;

        // 2. Zero-pad the kernel to the signal length
        let mut padded = Vec::with_capacity(x);
        padded.extend_from_slice(kernel);
        padded.resize(x, 0.0);

        // 3. Forward transform of the kernel
        let filt_fft = self.transform.forward(&padded)?;

        // 4. Multiply in frequency domain (circular convolution in time domain)
        let product: Vec<Complex64> = sig_fft
            .iter()
            .zip(filt_fft.iter())
            .map(|(s, h)| s * h)
            .collect();

        log::debug!("filtered {} samples with {} taps ({} bins)", x, y, product.len());

        // 5. Back to the time domain, X samples
        self.transform.inverse(&product, x)
    }

    /// Get the transform backend
    pub fn transform(&self) -> &T {
        &self.transform
    }
}

/// Apply `kernel` to `signal` with a one-off applicator
pub fn apply(signal: &[f64], kernel: &[f64]) -> Result<Vec<f64>> {
    FilterApplicator::new().apply(signal, kernel)
}
