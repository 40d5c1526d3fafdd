//! Python bindings for filter design and application

use crate::error::FilterError;
use crate::filters::{design, FilterApplicator};
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

impl From<FilterError> for PyErr {
    fn from(err: FilterError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn contiguous<'a>(array: &'a PyReadonlyArray1<f64>, name: &str) -> PyResult<&'a [f64]> {
    array
        .as_slice()
        .map_err(|e| PyValueError::new_err(format!("{} must be contiguous: {}", name, e)))
}

/// Design a low-pass or high-pass windowed-sinc filter
///
/// Args:
///     fc: Cutoff frequency, fraction of the sampling rate (0 < fc < 0.5)
///     b: Transition band, fraction of the sampling rate (b > 0)
///     window: 'none', 'blackman' or 'hanning'
///     kind: 'lp' or 'hp'
///
/// Returns:
///     (span, kernel) as numpy arrays
///
/// Raises:
///     ValueError: on unknown window/kind or out-of-range parameters
#[pyfunction]
#[pyo3(signature = (fc, b, window="blackman", kind="lp"))]
pub fn design_filter<'py>(
    py: Python<'py>,
    fc: f64,
    b: f64,
    window: &str,
    kind: &str,
) -> PyResult<(&'py PyArray1<i64>, &'py PyArray1<f64>)> {
    let (span, kernel) = design(fc, b, window, kind)?;
    let span: Vec<i64> = span.map(|n| n as i64).collect();

    Ok((PyArray1::from_vec(py, span), PyArray1::from_vec(py, kernel)))
}

/// Apply a filter kernel to a signal via FFT multiplication
///
/// Args:
///     signal: Input samples as numpy array
///     kernel: Filter coefficients, no longer than the signal
///
/// Returns:
///     Filtered signal, same length as the input
#[pyfunction]
pub fn apply_filter<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
    kernel: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let signal = contiguous(&signal, "signal")?;
    let kernel = contiguous(&kernel, "kernel")?;
    let output = FilterApplicator::new().apply(signal, kernel)?;

    Ok(PyArray1::from_vec(py, output))
}
