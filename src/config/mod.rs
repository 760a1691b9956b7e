pub mod toml_config;

use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, SimError};
use crate::utils::validation::{
    validate_date_pair, validate_non_empty_string, validate_positive_number, Validate,
};

pub use toml_config::ScenarioConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "bikeshare-sim")]
#[command(about = "Two-station bikeshare inventory simulator")]
pub struct CliConfig {
    /// Initial bike count at Olin
    #[arg(long, default_value = "8")]
    pub olin: u32,

    /// Initial bike count at Wellesley
    #[arg(long, default_value = "4")]
    pub wellesley: u32,

    /// First simulated day (ISO date, calendar mode)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Last simulated day, inclusive (ISO date, calendar mode)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Fixed number of season-free steps (walk mode)
    #[arg(long)]
    pub steps: Option<u32>,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// TOML scenario file; overrides the flags above
    #[arg(long)]
    pub scenario: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// How the run iterates: daily calendar periods with seasonal bands, or a
/// fixed-step season-free walk. A walk without a step count draws one at
/// random (40..=150) at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Calendar { start: NaiveDate, end: NaiveDate },
    Walk { steps: Option<u32> },
}

/// Fully resolved run parameters, after merging CLI flags or a scenario
/// file and validating them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub olin: u32,
    pub wellesley: u32,
    pub mode: RunMode,
    pub seed: Option<u64>,
    pub output_path: String,
}

impl CliConfig {
    /// Resolve into run settings. A `--scenario` file wins wholesale over
    /// the individual flags.
    pub fn resolve(&self) -> Result<RunSettings> {
        let settings = match &self.scenario {
            Some(path) => ScenarioConfig::from_file(path)?.into_settings()?,
            None => {
                let mode = resolve_mode(self.start_date, self.end_date, self.steps)?;
                RunSettings {
                    olin: self.olin,
                    wellesley: self.wellesley,
                    mode,
                    seed: self.seed,
                    output_path: self.output_path.clone(),
                }
            }
        };
        settings.validate()?;
        Ok(settings)
    }
}

pub(crate) fn resolve_mode(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    steps: Option<u32>,
) -> Result<RunMode> {
    let dates = validate_date_pair(start, end)?;
    match (dates, steps) {
        (Some(_), Some(_)) => Err(SimError::ConfigError {
            message: "a date range and --steps cannot be combined; pick one run mode".to_string(),
        }),
        (Some((start, end)), None) => Ok(RunMode::Calendar { start, end }),
        (None, steps) => Ok(RunMode::Walk { steps }),
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("output-path", &self.output_path)?;
        if let RunMode::Walk { steps: Some(steps) } = self.mode {
            validate_positive_number("steps", steps, 1)?;
        }
        Ok(())
    }
}
