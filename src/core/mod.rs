pub mod ledger;
pub mod simulation;

pub use crate::domain::model::{
    Location, Period, PlannedMove, Season, TrajectoryRecord, TransferOutcome,
};
pub use crate::domain::ports::{PeriodSource, TrajectorySink};
pub use crate::utils::error::Result;
