use crate::db::result_file::ResultFile;
use crate::db::Search;
use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use std::path::Path;

/// Series of a single results file: display name, test-case names and their
/// elapsed times (in seconds).
pub type Series = (String, Vec<String>, Vec<f64>);

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsDB {
    results: Vec<ResultFile>,
}

impl ResultsDB {
    /// Loads every file in `results_dir` (non-recursively). Files are loaded
    /// one after the other, sorted by file name. Any file that can't be read
    /// or parsed fails the whole load.
    pub fn load(results_dir: impl AsRef<Path>) -> Result<Self, Report> {
        let results_dir = results_dir.as_ref();

        // find all results files
        let read_dir = std::fs::read_dir(results_dir).wrap_err_with(|| {
            format!("read results directory {}", results_dir.display())
        })?;
        let mut paths = Vec::new();
        for entry in read_dir {
            let entry = entry.wrap_err("incorrect directory entry")?;
            paths.push(entry.path());
        }

        // the listing order is platform-dependent
        paths.sort();

        let mut results = Vec::with_capacity(paths.len());
        for path in paths {
            let result_file = ResultFile::load(&path)?;
            tracing::debug!(
                "loaded {:?} as {:?} with {} records",
                path.display(),
                result_file.name(),
                result_file.records().len()
            );
            results.push(result_file);
        }

        tracing::info!(
            "loaded {} results files from {:?}",
            results.len(),
            results_dir.display()
        );
        Ok(Self { results })
    }

    pub fn files(&self) -> &[ResultFile] {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns one series per results file, with all its records.
    pub fn results(&self) -> Vec<Series> {
        self.find(&Search::new())
    }

    /// Returns one series per results file, only with the records selected by
    /// `search`.
    pub fn find(&self, search: &Search) -> Vec<Series> {
        self.results
            .iter()
            .map(|result_file| {
                let (names, values) = result_file.series(search);
                (result_file.name().to_string(), names, values)
            })
            .collect()
    }
}
