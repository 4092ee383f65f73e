use crate::plot::axes::Axes;
use crate::plot::figure::Figure;
use pyo3::prelude::*;
use pyo3::types::PyDict;

pub struct PyPlot<'p> {
    plt: &'p PyModule,
}

impl<'p> PyPlot<'p> {
    pub fn new(py: Python<'p>) -> PyResult<Self> {
        let plt = PyModule::import(py, "matplotlib.pyplot")?;
        Ok(Self { plt })
    }

    /// Selects the matplotlib backend; needs to happen before any figure is
    /// created.
    pub fn use_backend(py: Python<'p>, backend: &str) -> PyResult<()> {
        let matplotlib = PyModule::import(py, "matplotlib")?;
        matplotlib.getattr("use")?.call1((backend,))?;
        Ok(())
    }

    pub fn subplots(
        &self,
        kwargs: Option<&PyDict>,
    ) -> PyResult<(Figure<'_>, Axes<'_>)> {
        let result = self.plt.getattr("subplots")?.call((), kwargs)?;
        let (fig, ax): (&PyAny, &PyAny) = result.extract()?;
        Ok((Figure::new(fig), Axes::new(ax)))
    }

    /// Blocks until all open figure windows are closed.
    pub fn show(&self) -> PyResult<()> {
        self.plt.getattr("show")?.call0()?;
        Ok(())
    }

    pub fn close(&self, figure: Figure<'_>) -> PyResult<()> {
        self.plt.getattr("close")?.call1((figure.fig(),))?;
        Ok(())
    }
}
