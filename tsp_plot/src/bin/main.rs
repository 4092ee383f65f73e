use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use tsp_plot::{Chart, ResultsDB, SeriesFmt};

// folder with one results log per solver build
const RESULTS_DIR: &str = "../../omp_measurements/results";

// chart config
const TITLE: &str = "Time comparison between different TSP implementations";
const XLABEL: &str = "Test name";
const YLABEL: &str = "Time(s)";

fn main() -> Result<(), Report> {
    color_eyre::install()?;

    // init logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // load results
    let db = ResultsDB::load(RESULTS_DIR).wrap_err("load results")?;
    for result_file in db.files() {
        println!("{}", SeriesFmt::from(result_file));
    }

    let mut chart = Chart::new();
    chart.configure(TITLE, XLABEL, YLABEL)?;
    for (name, x, y) in db.results() {
        chart.plot_series(x, y, name)?;
    }
    chart.show().wrap_err("show chart")
}
