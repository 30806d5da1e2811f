use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

use crate::simulation::{PlantConfig, RunParameters};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub plant: PlantConfig,
    pub process: ProcessConfig,
    pub controller: ControllerConfig,
}

/// Operator-facing run parameters, range-checked at the edge before they
/// reach the simulation (the core never re-validates).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProcessConfig {
    #[validate(range(min = 1, max = 10))]
    pub pump_power: u32,
    #[validate(range(min = 20.0, max = 90.0))]
    pub target_temp_c: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ControllerConfig {
    pub tick_millis: u64,
    pub snapshot_log_secs: u64,
}

/// Operator parameters outside the control-panel ranges.
#[derive(Debug, Error)]
#[error("operator parameters out of range: {0}")]
pub struct InvalidParameters(#[from] validator::ValidationErrors);

impl ProcessConfig {
    /// Range-check the operator parameters and hand them over in the form
    /// the simulation takes.
    pub fn run_parameters(&self) -> Result<RunParameters, InvalidParameters> {
        self.validate()?;
        Ok(RunParameters {
            pump_power: self.pump_power,
            target_temp_c: self.target_temp_c,
        })
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("FPC__").split("__"));
        Ok(figment.extract()?)
    }
}
