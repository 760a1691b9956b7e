use crate::domain::model::{Period, TrajectoryRecord};
use crate::utils::error::Result;

/// Supplies the ordered, finite sequence of periods a run iterates over.
/// The core never does calendar arithmetic itself.
pub trait PeriodSource {
    fn periods(&self) -> Result<Vec<Period>>;
}

/// Consumes a finished trajectory. Returns the location the records were
/// persisted to, for reporting.
pub trait TrajectorySink {
    fn write(&self, records: &[TrajectoryRecord]) -> Result<String>;
}
