use pyo3::prelude::*;
use pyo3::types::PyDict;

// https://matplotlib.org/stable/api/axes_api.html
pub struct Axes<'a> {
    ax: &'a PyAny,
}

impl<'a> Axes<'a> {
    pub fn new(ax: &'a PyAny) -> Self {
        Self { ax }
    }

    pub fn set_title(&self, title: &str) -> PyResult<()> {
        self.ax.call_method1("set_title", (title,))?;
        Ok(())
    }

    pub fn set_xlabel(&self, label: &str) -> PyResult<()> {
        self.ax.call_method1("set_xlabel", (label,))?;
        Ok(())
    }

    pub fn set_ylabel(&self, label: &str) -> PyResult<()> {
        self.ax.call_method1("set_ylabel", (label,))?;
        Ok(())
    }

    pub fn legend(&self, kwargs: Option<&PyDict>) -> PyResult<()> {
        self.ax.call_method("legend", (), kwargs)?;
        Ok(())
    }

    /// Draws `y` versus `x` and returns the number of lines added to the axes.
    pub fn plot<X, Y>(
        &self,
        x: Vec<X>,
        y: Vec<Y>,
        fmt: Option<&str>,
        kwargs: Option<&PyDict>,
    ) -> PyResult<usize>
    where
        X: IntoPy<PyObject>,
        Y: IntoPy<PyObject>,
    {
        let lines = if let Some(fmt) = fmt {
            self.ax.call_method("plot", (x, y, fmt), kwargs)?
        } else {
            self.ax.call_method("plot", (x, y), kwargs)?
        };
        lines.len()
    }

    /// Number of lines currently drawn in these axes.
    pub fn line_count(&self) -> PyResult<usize> {
        self.ax.getattr("lines")?.len()
    }

    /// Labels of the legend entries, in the order they are shown.
    pub fn legend_labels(&self) -> PyResult<Vec<String>> {
        let legend = self.ax.call_method0("get_legend")?;
        if legend.is_none() {
            return Ok(Vec::new());
        }
        legend
            .call_method0("get_texts")?
            .iter()?
            .map(|text| -> PyResult<String> {
                text?.call_method0("get_text")?.extract()
            })
            .collect()
    }
}
