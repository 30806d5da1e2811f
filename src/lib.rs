//! Fluid plant controller: tick-driven process simulation of a four-tank
//! heating line, plus the async driver and configuration layer around it.

pub mod config;
pub mod controller;
pub mod simulation;
pub mod telemetry;

pub use config::Config;
pub use controller::PlantController;
pub use simulation::{PlantConfig, PlantSimulator, PlantState, RunParameters};
