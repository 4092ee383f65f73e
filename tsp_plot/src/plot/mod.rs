pub mod axes;
pub mod figure;
pub mod pyplot;

#[cfg(test)]
mod tests {
    use super::pyplot::PyPlot;
    use pyo3::prelude::*;

    #[test]
    fn plot_lines_test() {
        Python::with_gil(|py| {
            if let Err(e) = plot_lines(py) {
                e.print(py);
                panic!("error while plotting lines: {:?}", e);
            }
        });
    }

    fn plot_lines(py: Python<'_>) -> PyResult<()> {
        // headless backend, so that no window is ever opened
        PyPlot::use_backend(py, "Agg")?;
        let plt = PyPlot::new(py)?;
        let (fig, ax) = plt.subplots(None)?;
        fig.set_window_title("results")?;

        ax.set_title("elapsed time per test")?;
        ax.set_xlabel("test")?;
        ax.set_ylabel("time (s)")?;

        let x = vec!["ex1", "ex2", "ex3"];
        let y = vec![1.5, 0.25, 7.0];
        let kwargs = crate::pydict!(py, ("label", "omp"), ("linewidth", 1))?;
        assert_eq!(ax.plot(x, y, Some(".-"), Some(kwargs))?, 1);
        assert_eq!(ax.line_count()?, 1);

        ax.legend(None)?;
        assert_eq!(ax.legend_labels()?, vec![String::from("omp")]);

        plt.close(fig)?;
        Ok(())
    }
}
