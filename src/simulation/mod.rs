//! # Process Simulation Module
//!
//! Tick-driven simulation of the four-tank fluid-processing line.
//!
//! ## Components
//!
//! - **Tank**: Bounded fluid reservoir with a level and a temperature, self-clamping add/withdraw
//! - **Actuator**: Binary-state pump and heater, flags derived from tank conditions each tick
//! - **Topology**: Static description of the line and the stage order of one step
//! - **PlantSimulator**: Master state machine that owns all tanks/actuators and executes the step
//! - **StatusReporter**: Sink the simulation pushes human-readable status lines into
//!
//! ## Usage
//!
//! ```rust
//! use fluid_plant_controller::simulation::{
//!     PlantConfig, PlantSimulator, RunParameters, TankId, TracingReporter,
//! };
//!
//! let mut plant = PlantSimulator::new(PlantConfig::default(), Box::new(TracingReporter));
//! plant.start(RunParameters {
//!     pump_power: 5,
//!     target_temp_c: 65.0,
//! });
//!
//! // Advance the plant by one discrete step
//! plant.tick();
//!
//! // Read current entity state for display
//! let feed_level = plant.tank(TankId::Feed).level_l();
//! let pump_running = plant.pump().is_active();
//! ```

pub mod actuator;
pub mod plant;
pub mod reporter;
pub mod tank;
pub mod topology;

pub use actuator::Actuator;
pub use plant::{PlantConfig, PlantSimulator, PlantState, RunParameters, RunPhase};
pub use reporter::{ChannelReporter, StatusReporter, TracingReporter};
pub use tank::{Tank, TankState, AMBIENT_TEMP_C};
pub use topology::{Pipe, Stage, TankId, TransferDriver, STAGES};
