#![deny(rust_2018_idioms)]

pub mod chart;
pub mod db;
pub mod fmt;
#[cfg(feature = "pyo3")]
pub mod plot;

// Re-exports.
pub use chart::{Chart, ChartSeries};
pub use db::{Record, ResultFile, ResultsDB, Search, Status};
pub use fmt::SeriesFmt;

/// Unwraps the result of a python call. On error, the python traceback is
/// printed and the error is returned as a `Report`.
#[cfg(feature = "pyo3")]
#[macro_export]
macro_rules! pytry {
    ($py:expr, $e:expr) => {{
        match $e {
            Ok(value) => value,
            Err(e) => {
                e.print($py);
                return Err(color_eyre::eyre::eyre!("python error: {}", e));
            }
        }
    }};
}

/// Builds a python `dict` from `(key, value)` pairs; evaluates to a
/// `PyResult<&PyDict>`.
#[cfg(feature = "pyo3")]
#[macro_export]
macro_rules! pydict {
    ($py:expr, $($tup:expr),* $(,)?) => {{
        let dict = pyo3::types::PyDict::new($py);
        let mut result: pyo3::PyResult<&pyo3::types::PyDict> = Ok(dict);
        $(
            if result.is_ok() {
                let (key, value) = $tup;
                if let Err(e) = dict.set_item(key, value) {
                    result = Err(e);
                }
            }
        )*
        result
    }};
}
