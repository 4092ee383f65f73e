use crate::db::record::{Record, Status};
use crate::db::Search;
use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use std::path::Path;

/// All records of a single results log.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultFile {
    name: String,
    records: Vec<Record>,
}

impl ResultFile {
    pub fn new(name: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Reads and parses the log at `path`. The whole file is loaded in memory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Report> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("read results file {}", path.display()))?;
        let records = Record::parse_all(&contents)
            .wrap_err_with(|| format!("parse results file {}", path.display()))?;
        Ok(Self::new(Self::display_name(&file_name), records))
    }

    /// Computes the name shown for a results file: everything before its
    /// first period, e.g. "omp.final.log" is shown as "omp".
    pub fn display_name(file_name: &str) -> &str {
        file_name.split('.').next().unwrap_or(file_name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn names(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.name.clone())
            .collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|record| record.elapsed).collect()
    }

    pub fn failures(&self) -> usize {
        self.count(Status::Fail)
    }

    /// Returns the (names, values) pairs of the records selected by `search`,
    /// keeping their original order.
    pub fn series(&self, search: &Search) -> (Vec<String>, Vec<f64>) {
        self.records
            .iter()
            .filter(|record| search.matches(record))
            .map(|record| (record.name.clone(), record.elapsed))
            .unzip()
    }

    pub fn count(&self, status: Status) -> usize {
        self.records
            .iter()
            .filter(|record| record.status == status)
            .count()
    }
}
