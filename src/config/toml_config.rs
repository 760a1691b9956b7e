use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{resolve_mode, RunSettings};
use crate::utils::error::{Result, SimError};

/// A simulation scenario described in a TOML file, mirroring the CLI
/// flags. Useful for keeping repeatable runs under version control.
///
/// ```toml
/// [stations]
/// olin = 8
/// wellesley = 4
///
/// [schedule]
/// start_date = "2024-01-01"
/// end_date = "2024-12-31"
/// seed = 42
///
/// [output]
/// path = "./output"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub stations: StationsSection,
    #[serde(default)]
    pub schedule: ScheduleSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationsSection {
    pub olin: u32,
    pub wellesley: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleSection {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub steps: Option<u32>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> String {
    "./output".to_string()
}

impl ScenarioConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SimError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn into_settings(self) -> Result<RunSettings> {
        let mode = resolve_mode(
            self.schedule.start_date,
            self.schedule.end_date,
            self.schedule.steps,
        )?;
        Ok(RunSettings {
            olin: self.stations.olin,
            wellesley: self.stations.wellesley,
            mode,
            seed: self.schedule.seed,
            output_path: self.output.path,
        })
    }
}
