use pyo3::prelude::*;

// https://matplotlib.org/stable/api/figure_api.html
pub struct Figure<'a> {
    fig: &'a PyAny,
}

impl<'a> Figure<'a> {
    pub fn new(fig: &'a PyAny) -> Self {
        Self { fig }
    }

    /// Sets the title of the window holding this figure. Non-interactive
    /// backends have no window, in which case nothing is done.
    pub fn set_window_title(&self, title: &str) -> PyResult<()> {
        let manager = self.fig.getattr("canvas")?.getattr("manager")?;
        if !manager.is_none() {
            manager.call_method1("set_window_title", (title,))?;
        }
        Ok(())
    }

    pub fn fig(&self) -> &PyAny {
        self.fig
    }
}
