// src/lib.rs

// Publieke modules voor gebruik binnen de Rust-crate
pub mod bench;
pub mod brute;
pub mod error;
pub mod optimizer;
pub mod params;
pub mod report;
pub mod selection;
pub mod table;
pub mod weight;

// Her-exporteer de belangrijkste types voor Rust-gebruikers
pub use error::OptimizeError;
pub use optimizer::{optimize, optimize_signed, optimize_within};
pub use params::BenchParams;
pub use selection::Selection;
pub use weight::Weight;

#[cfg(feature = "python")]
mod python {
    use crate::{bench, brute, optimizer, report, BenchParams, OptimizeError, Selection, Weight};
    use pyo3::exceptions::{PyMemoryError, PyRuntimeError, PyValueError};
    use pyo3::prelude::*;

    /// Vertaalt een optimizer-fout naar de passende Python-exceptie.
    fn to_py_err(e: OptimizeError) -> PyErr {
        if e.is_invalid_argument() {
            PyValueError::new_err(e.to_string())
        } else if e.is_resource_limit() {
            PyMemoryError::new_err(e.to_string())
        } else {
            PyRuntimeError::new_err(e.to_string())
        }
    }

    fn unpack<W: Weight>(sel: Selection<W>) -> (W, Vec<u8>) {
        (sel.value(), sel.to_bits())
    }

    /// Python-binding voor de optimizer met gehele gewichten.
    #[pyfunction]
    #[pyo3(signature = (weights, k))]
    fn optimize_py(weights: Vec<i64>, k: i64) -> PyResult<(i64, Vec<u8>)> {
        optimizer::optimize_signed(&weights, k)
            .map(unpack)
            .map_err(to_py_err)
    }

    /// Python-binding voor de optimizer met floating-point gewichten.
    #[pyfunction]
    #[pyo3(signature = (weights, k))]
    fn optimize_float_py(weights: Vec<f64>, k: i64) -> PyResult<(f64, Vec<u8>)> {
        optimizer::optimize_signed(&weights, k)
            .map(unpack)
            .map_err(to_py_err)
    }

    /// Uitputtende referentie, voor controle van kleine instanties.
    #[pyfunction]
    #[pyo3(signature = (weights, k))]
    fn brute_force_py(weights: Vec<i64>, k: i64) -> PyResult<(i64, Vec<u8>)> {
        let k = usize::try_from(k).map_err(|_| to_py_err(OptimizeError::NegativeBound(k)))?;
        brute::brute_force(&weights, k)
            .map(unpack)
            .map_err(to_py_err)
    }

    #[pyfunction]
    fn count_adjacent_pairs_py(mask: Vec<u8>) -> usize {
        optimizer::count_adjacent_ones(&mask)
    }

    /// Draait een experimentreeks en geeft de opgemaakte tabel terug.
    #[pyfunction]
    #[pyo3(signature = (suite, py_params))]
    fn run_suite_py(py: Python<'_>, suite: String, py_params: Py<BenchParams>) -> PyResult<String> {
        let suite = bench::Suite::from_name(&suite)
            .ok_or_else(|| PyValueError::new_err(format!("unknown suite '{}'", suite)))?;
        let p = py_params.borrow(py).clone();
        // Meten zonder de GIL vast te houden.
        let rows = py
            .allow_threads(|| bench::run_suite(suite, &p))
            .map_err(to_py_err)?;
        Ok(match suite {
            bench::Suite::Sizes => report::format_size_table(&rows),
            _ => report::format_table(&rows),
        })
    }

    /// Definieert de Python-module `_native`.
    #[pymodule]
    fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_class::<BenchParams>()?;
        m.add_function(wrap_pyfunction!(optimize_py, m)?)?;
        m.add_function(wrap_pyfunction!(optimize_float_py, m)?)?;
        m.add_function(wrap_pyfunction!(brute_force_py, m)?)?;
        m.add_function(wrap_pyfunction!(count_adjacent_pairs_py, m)?)?;
        m.add_function(wrap_pyfunction!(run_suite_py, m)?)?;
        Ok(())
    }
}
