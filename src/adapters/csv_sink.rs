use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::model::TrajectoryRecord;
use crate::domain::ports::TrajectorySink;
use crate::utils::error::Result;

const OUTPUT_FILE: &str = "trajectory.csv";

/// Writes a trajectory to `<base_path>/trajectory.csv` with the header
/// `Date,Olin Bikes,Wellesley Bikes,Action`, one row per period in order.
#[derive(Debug, Clone)]
pub struct CsvSink {
    base_path: String,
}

impl CsvSink {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn output_file(&self) -> PathBuf {
        Path::new(&self.base_path).join(OUTPUT_FILE)
    }
}

impl TrajectorySink for CsvSink {
    fn write(&self, records: &[TrajectoryRecord]) -> Result<String> {
        let path = self.output_file();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Header is written explicitly so that a zero-period run still
        // produces a well-formed file.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)?;
        writer.write_record(["Date", "Olin Bikes", "Wellesley Bikes", "Action"])?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        tracing::debug!(rows = records.len(), path = %path.display(), "trajectory written");
        Ok(path.display().to_string())
    }
}
