use color_eyre::eyre;
use color_eyre::Report;
#[cfg(feature = "pyo3")]
use {
    crate::plot::axes::Axes, crate::plot::pyplot::PyPlot, crate::pytry,
    pyo3::prelude::*,
};

// line with point markers
#[cfg(feature = "pyo3")]
const LINE_FMT: &str = ".-";
#[cfg(feature = "pyo3")]
const LINE_WIDTH: usize = 1;

#[derive(Debug, Clone, PartialEq)]
struct Labels {
    title: String,
    xlabel: String,
    ylabel: String,
}

/// One line of the chart: the elapsed time (y) of each test case (x).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

/// A line chart under construction. Nothing is drawn until `Chart::show`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chart {
    labels: Option<Labels>,
    series: Vec<ChartSeries>,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chart title and the axis labels. Can only be done once.
    pub fn configure(
        &mut self,
        title: &str,
        xlabel: &str,
        ylabel: &str,
    ) -> Result<(), Report> {
        if let Some(labels) = &self.labels {
            eyre::bail!("chart {:?} is already configured", labels.title);
        }
        self.labels = Some(Labels {
            title: title.to_string(),
            xlabel: xlabel.to_string(),
            ylabel: ylabel.to_string(),
        });
        Ok(())
    }

    /// Adds a new line connecting the (x, y) points in the order given.
    pub fn plot_series(
        &mut self,
        x: Vec<String>,
        y: Vec<f64>,
        label: impl Into<String>,
    ) -> Result<(), Report> {
        let label = label.into();
        if x.len() != y.len() {
            eyre::bail!(
                "series {:?} has {} x values but {} y values",
                label,
                x.len(),
                y.len()
            );
        }
        self.series.push(ChartSeries { label, x, y });
        Ok(())
    }

    pub fn title(&self) -> Option<&str> {
        self.labels.as_ref().map(|labels| labels.title.as_str())
    }

    pub fn xlabel(&self) -> Option<&str> {
        self.labels.as_ref().map(|labels| labels.xlabel.as_str())
    }

    pub fn ylabel(&self) -> Option<&str> {
        self.labels.as_ref().map(|labels| labels.ylabel.as_str())
    }

    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    /// Draws the chart with matplotlib and blocks until its window is
    /// closed.
    #[cfg(feature = "pyo3")]
    pub fn show(self) -> Result<(), Report> {
        Python::with_gil(|py| -> Result<(), Report> {
            let plt = pytry!(py, PyPlot::new(py));
            let (fig, ax) = pytry!(py, plt.subplots(None));
            if let Some(title) = self.title() {
                pytry!(py, fig.set_window_title(title));
            }
            let plotted = self.draw(py, &ax)?;

            tracing::info!("showing chart with {} lines", plotted);
            pytry!(py, plt.show());
            Ok(())
        })
    }

    /// Draws labels, lines and legend into `ax`, returning the number of
    /// lines drawn.
    #[cfg(feature = "pyo3")]
    pub fn draw(
        &self,
        py: Python<'_>,
        ax: &Axes<'_>,
    ) -> Result<usize, Report> {
        if let Some(labels) = &self.labels {
            pytry!(py, ax.set_title(&labels.title));
            pytry!(py, ax.set_xlabel(&labels.xlabel));
            pytry!(py, ax.set_ylabel(&labels.ylabel));
        }

        let mut plotted = 0;
        for series in &self.series {
            tracing::trace!(
                "plotting {:?} with {} points",
                series.label,
                series.x.len()
            );
            let kwargs = pytry!(
                py,
                crate::pydict!(
                    py,
                    ("label", series.label.as_str()),
                    ("linewidth", LINE_WIDTH),
                )
            );
            plotted += pytry!(
                py,
                ax.plot(
                    series.x.clone(),
                    series.y.clone(),
                    Some(LINE_FMT),
                    Some(kwargs),
                )
            );
        }

        // matplotlib warns about legends without labeled lines
        if !self.series.is_empty() {
            pytry!(py, ax.legend(None));
        }
        Ok(plotted)
    }
}
