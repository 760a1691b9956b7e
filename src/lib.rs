pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{CalendarPeriods, CsvSink};
pub use crate::config::{CliConfig, RunMode, RunSettings, ScenarioConfig};
pub use crate::core::{ledger::BikeLedger, simulation::Simulation};
pub use crate::domain::model::{
    Location, Period, PlannedMove, Season, TrajectoryRecord, TransferOutcome,
};
pub use crate::domain::ports::{PeriodSource, TrajectorySink};
pub use crate::utils::error::{Result, SimError};
