use crate::db::ResultFile;
use std::fmt;

/// One-line summary of the elapsed times of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesFmt {
    name: String,
    cases: usize,
    failures: usize,
    total: f64,
    min: f64,
    max: f64,
}

impl SeriesFmt {
    pub fn new(
        name: impl Into<String>,
        values: &[f64],
        failures: usize,
    ) -> Self {
        let total = values.iter().sum();
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Self {
            name: name.into(),
            cases: values.len(),
            failures,
            total,
            min,
            max,
        }
    }

    pub fn avg(&self) -> Option<f64> {
        if self.cases == 0 {
            None
        } else {
            Some(self.total / self.cases as f64)
        }
    }
}

impl From<&ResultFile> for SeriesFmt {
    fn from(result_file: &ResultFile) -> Self {
        Self::new(
            result_file.name(),
            &result_file.values(),
            result_file.failures(),
        )
    }
}

impl fmt::Display for SeriesFmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<7} | ", self.name)?;
        match self.avg() {
            None => write!(f, "(empty)"),
            Some(avg) => write!(
                f,
                "cases = {:<3} fail = {:<3} total = {:.2}s  avg = {:.2}s  min = {:.2}s  max = {:.2}s",
                self.cases, self.failures, self.total, avg, self.min, self.max,
            ),
        }
    }
}
