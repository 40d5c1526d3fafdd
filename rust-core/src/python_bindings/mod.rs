//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod filter_bindings;

/// Python module definition
#[pymodule]
fn sinc_filter(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(filter_bindings::design_filter, m)?)?;
    m.add_function(wrap_pyfunction!(filter_bindings::apply_filter, m)?)?;

    Ok(())
}
