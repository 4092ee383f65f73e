mod record;
mod result_file;
mod results_db;

// Re-exports.
pub use record::{Record, Status};
pub use result_file::ResultFile;
pub use results_db::ResultsDB;

#[derive(Clone, Copy, Debug, Default)]
pub struct Search {
    status: Option<Status>,
}

impl Search {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keep records with the given status. If not set, all records are
    /// kept, failed ones included.
    pub fn status(&mut self, status: Status) -> &mut Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        // filter out records with a different status (if set)
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        true
    }
}
