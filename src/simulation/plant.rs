//! The process simulation core.
//!
//! One [`PlantSimulator`] owns the four tanks and both actuators and
//! advances them one discrete step per [`tick`](PlantSimulator::tick), in
//! the fixed stage order from [`STAGES`](crate::simulation::topology::STAGES):
//!
//! 1. Pump the feed tank into the buffer (flow scales with pump power).
//! 2. Gravity-drain the buffer into the heating tank at a fixed rate.
//! 3. Heat the heating tank toward the target, or let it cool to ambient.
//! 4. Discharge through the product valve once the target temperature is
//!    reached, mixing temperatures on arrival.
//!
//! All transfers are self-clamping through the tank operations; nothing in
//! a tick can fail. Run parameter ranges are the caller's responsibility
//! (see `config::ProcessConfig`); the simulator never re-validates them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::simulation::actuator::Actuator;
use crate::simulation::reporter::StatusReporter;
use crate::simulation::tank::{Tank, TankState, AMBIENT_TEMP_C};
use crate::simulation::topology::{Pipe, Stage, TankId, TransferDriver, STAGES};

/// Pump flow per unit of pump power (L per tick).
const PUMP_FLOW_PER_POWER_L: f64 = 0.15;
/// Gravity drain out of the buffer tank (L per tick).
const GRAVITY_FLOW_L: f64 = 0.4;
/// Temperature gain while the heater runs (°C per tick).
const HEATING_STEP_C: f64 = 0.4;
/// Passive cooling toward ambient while the heater is off (°C per tick).
const COOLING_STEP_C: f64 = 0.05;
/// Drain through the product valve (L per tick).
const VALVE_FLOW_L: f64 = 0.9;
/// The heater only engages above this level (L).
const HEATER_MIN_LEVEL_L: f64 = 1.0;
/// Ticks between periodic status reports.
const REPORT_INTERVAL_TICKS: u64 = 50;

/// Construction-time plant dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantConfig {
    /// Capacity of every tank in the line (L).
    pub tank_capacity_l: f64,
    /// How much raw fluid the feed tank holds before the first run (L).
    pub initial_feed_level_l: f64,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            tank_capacity_l: 100.0,
            initial_feed_level_l: 90.0,
        }
    }
}

/// Operator-chosen parameters for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunParameters {
    /// Pump power step, 1..=10.
    pub pump_power: u32,
    /// Temperature the heating tank is driven toward, 20..=90 (°C).
    pub target_temp_c: f64,
}

/// Whether a run has been started.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RunPhase {
    NotStarted,
    Running(RunParameters),
}

/// Copy-on-read snapshot of the whole plant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantState {
    pub phase: RunPhase,
    pub feed: TankState,
    pub buffer: TankState,
    pub heating: TankState,
    pub product: TankState,
    pub pump_active: bool,
    pub heater_active: bool,
    pub valve_open: bool,
    pub tick_count: u64,
}

/// Tick-driven simulation of the four-tank heating line.
pub struct PlantSimulator {
    tanks: [Tank; 4],
    pump: Actuator,
    heater: Actuator,
    phase: RunPhase,
    valve_open: bool,
    tick_count: u64,
    reporter: Box<dyn StatusReporter>,
}

impl PlantSimulator {
    pub fn new(config: PlantConfig, reporter: Box<dyn StatusReporter>) -> Self {
        let mut tanks = [
            Tank::new(TankId::Feed.label(), config.tank_capacity_l),
            Tank::new(TankId::Buffer.label(), config.tank_capacity_l),
            Tank::new(TankId::Heating.label(), config.tank_capacity_l),
            Tank::new(TankId::Product.label(), config.tank_capacity_l),
        ];
        let initial_l = config.initial_feed_level_l.min(config.tank_capacity_l);
        tanks[TankId::Feed.index()].add_fluid(initial_l);

        Self {
            tanks,
            pump: Actuator::new("P1 (pump)"),
            heater: Actuator::new("H1 (heater)"),
            phase: RunPhase::NotStarted,
            valve_open: false,
            tick_count: 0,
            reporter,
        }
    }

    /// Arm a run with the given parameters and report it.
    ///
    /// Calling this while a run is active overwrites the parameters and
    /// re-arms the valve latch and tick counter; tank levels and
    /// temperatures carry over untouched.
    pub fn start(&mut self, params: RunParameters) {
        self.phase = RunPhase::Running(params);
        self.valve_open = false;
        self.tick_count = 0;

        let line = format!(
            "START: pump power {}, target temperature {:.0}°C",
            params.pump_power, params.target_temp_c
        );
        self.reporter.report(&line);
    }

    /// Advance the plant by one discrete step.
    ///
    /// Does nothing until [`start`](PlantSimulator::start) has been called.
    pub fn tick(&mut self) {
        let params = match self.phase {
            RunPhase::NotStarted => {
                debug!("tick ignored, no run started");
                return;
            }
            RunPhase::Running(params) => params,
        };

        for stage in &STAGES {
            match *stage {
                Stage::Transfer(pipe) => match pipe.driver {
                    TransferDriver::Pump => self.pump_stage(pipe, params),
                    TransferDriver::Gravity => self.gravity_stage(pipe),
                    TransferDriver::Valve => self.valve_stage(pipe, params),
                },
                Stage::Heat(id) => self.heating_stage(id, params),
            }
        }

        self.tick_count += 1;
        if self.tick_count % REPORT_INTERVAL_TICKS == 0 {
            let line = format!(
                "STATUS: heating tank {:.1}°C, product tank {:.1} L",
                self.tanks[TankId::Heating.index()].temperature_c(),
                self.tanks[TankId::Product.index()].level_l(),
            );
            self.reporter.report(&line);
        }
    }

    /// The pump moves fluid while the feed tank has any and the buffer has
    /// headroom; flow scales linearly with pump power.
    fn pump_stage(&mut self, pipe: Pipe, params: RunParameters) {
        let running = {
            let source = self.tank(pipe.source);
            let dest = self.tank(pipe.dest);
            source.level_l() > 0.0 && dest.level_l() < dest.capacity_l()
        };
        if running {
            let flow_l = f64::from(params.pump_power) * PUMP_FLOW_PER_POWER_L;
            let (source, dest) = self.pair_mut(pipe.source, pipe.dest);
            let taken_l = source.withdraw_fluid(flow_l);
            dest.add_fluid(taken_l);
        }
        self.pump.set_active(running);
    }

    /// Free drain from the buffer at a fixed rate, independent of pump
    /// power.
    fn gravity_stage(&mut self, pipe: Pipe) {
        let draining = {
            let source = self.tank(pipe.source);
            let dest = self.tank(pipe.dest);
            source.level_l() > 0.0 && dest.level_l() < dest.capacity_l()
        };
        if draining {
            let (source, dest) = self.pair_mut(pipe.source, pipe.dest);
            let taken_l = source.withdraw_fluid(GRAVITY_FLOW_L);
            dest.add_fluid(taken_l);
        }
    }

    /// The heater engages above [`HEATER_MIN_LEVEL_L`] and drives the tank
    /// toward the target; otherwise the tank cools toward ambient, never
    /// below it.
    fn heating_stage(&mut self, id: TankId, params: RunParameters) {
        let tank = &mut self.tanks[id.index()];
        let heating = tank.level_l() > HEATER_MIN_LEVEL_L;
        if heating {
            if tank.temperature_c() < params.target_temp_c {
                tank.set_temperature_c(tank.temperature_c() + HEATING_STEP_C);
            }
        } else if tank.temperature_c() > AMBIENT_TEMP_C {
            let cooled_c = (tank.temperature_c() - COOLING_STEP_C).max(AMBIENT_TEMP_C);
            tank.set_temperature_c(cooled_c);
        }
        self.heater.set_active(heating);
    }

    /// The valve latches open once the heating tank reaches the target
    /// temperature and drains it into the product tank, mixing
    /// temperatures by volume on arrival. The latch only releases when the
    /// heating tank runs empty, which may happen in the same tick.
    fn valve_stage(&mut self, pipe: Pipe, params: RunParameters) {
        if self.tank(pipe.source).temperature_c() >= params.target_temp_c {
            self.valve_open = true;
        }

        if self.valve_open && self.tank(pipe.source).level_l() > 0.0 {
            let (source, dest) = self.pair_mut(pipe.source, pipe.dest);
            let taken_l = source.withdraw_fluid(VALVE_FLOW_L);
            dest.add_fluid(taken_l);

            if dest.level_l() > 0.0 {
                let mixed_c = (dest.temperature_c() * (dest.level_l() - taken_l)
                    + source.temperature_c() * taken_l)
                    / dest.level_l();
                dest.set_temperature_c(mixed_c);
            }
        }

        if self.tank(pipe.source).level_l() <= 0.0 {
            self.valve_open = false;
        }
    }

    pub fn tank(&self, id: TankId) -> &Tank {
        &self.tanks[id.index()]
    }

    pub fn pump(&self) -> &Actuator {
        &self.pump
    }

    pub fn heater(&self) -> &Actuator {
        &self.heater
    }

    pub fn valve_open(&self) -> bool {
        self.valve_open
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Snapshot of the whole plant for display by external renderers.
    pub fn state(&self) -> PlantState {
        PlantState {
            phase: self.phase,
            feed: self.tank(TankId::Feed).state(),
            buffer: self.tank(TankId::Buffer).state(),
            heating: self.tank(TankId::Heating).state(),
            product: self.tank(TankId::Product).state(),
            pump_active: self.pump.is_active(),
            heater_active: self.heater.is_active(),
            valve_open: self.valve_open,
            tick_count: self.tick_count,
        }
    }

    fn pair_mut(&mut self, source: TankId, dest: TankId) -> (&mut Tank, &mut Tank) {
        // Pipeline edges always flow forward, so source < dest.
        let (left, right) = self.tanks.split_at_mut(dest.index());
        (&mut left[source.index()], &mut right[0])
    }
}
