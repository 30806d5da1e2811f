//! Static plant topology: which tank feeds which, and in what order the
//! stages run.
//!
//! The line is fixed for the life of the process: feed is pumped into the
//! buffer, the buffer drains by gravity into the heating tank, and the
//! heating tank discharges through a temperature-gated valve into the
//! product tank. Nothing here is configurable at runtime; the table exists
//! so the step order lives in one place.

use serde::{Deserialize, Serialize};

/// The four tanks of the line, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TankId {
    Feed,
    Buffer,
    Heating,
    Product,
}

impl TankId {
    pub const ALL: [TankId; 4] = [
        TankId::Feed,
        TankId::Buffer,
        TankId::Heating,
        TankId::Product,
    ];

    /// Position in the simulator's tank array.
    pub const fn index(self) -> usize {
        match self {
            TankId::Feed => 0,
            TankId::Buffer => 1,
            TankId::Heating => 2,
            TankId::Product => 3,
        }
    }

    /// Stable display label.
    pub const fn label(self) -> &'static str {
        match self {
            TankId::Feed => "T1 (feed)",
            TankId::Buffer => "T2 (buffer)",
            TankId::Heating => "T3 (heating)",
            TankId::Product => "T4 (product)",
        }
    }
}

/// What moves fluid along a pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDriver {
    /// Powered transfer; flow scales with the configured pump power.
    Pump,
    /// Free drain at a fixed rate.
    Gravity,
    /// Temperature-gated drain through the product valve.
    Valve,
}

/// A directed connection between two tanks.
#[derive(Debug, Clone, Copy)]
pub struct Pipe {
    pub source: TankId,
    pub dest: TankId,
    pub driver: TransferDriver,
}

/// One stage of a simulation step.
#[derive(Debug, Clone, Copy)]
pub enum Stage {
    /// Move fluid along a pipe.
    Transfer(Pipe),
    /// Run the heater on a tank.
    Heat(TankId),
}

/// Stage order executed on every tick.
pub const STAGES: [Stage; 4] = [
    Stage::Transfer(Pipe {
        source: TankId::Feed,
        dest: TankId::Buffer,
        driver: TransferDriver::Pump,
    }),
    Stage::Transfer(Pipe {
        source: TankId::Buffer,
        dest: TankId::Heating,
        driver: TransferDriver::Gravity,
    }),
    Stage::Heat(TankId::Heating),
    Stage::Transfer(Pipe {
        source: TankId::Heating,
        dest: TankId::Product,
        driver: TransferDriver::Valve,
    }),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tank_indices_follow_flow_order() {
        for (position, id) in TankId::ALL.iter().enumerate() {
            assert_eq!(id.index(), position);
        }
    }

    #[test]
    fn every_pipe_flows_forward() {
        for stage in &STAGES {
            if let Stage::Transfer(pipe) = stage {
                assert!(pipe.source.index() < pipe.dest.index());
            }
        }
    }

    #[test]
    fn stage_order_is_pump_gravity_heat_valve() {
        let drivers: Vec<_> = STAGES
            .iter()
            .map(|stage| match stage {
                Stage::Transfer(pipe) => format!("{:?}", pipe.driver),
                Stage::Heat(id) => format!("Heat({:?})", id),
            })
            .collect();
        assert_eq!(drivers, ["Pump", "Gravity", "Heat(Heating)", "Valve"]);
    }

    #[test]
    fn heat_stage_targets_the_heating_tank() {
        let heated: Vec<_> = STAGES
            .iter()
            .filter_map(|stage| match stage {
                Stage::Heat(id) => Some(*id),
                Stage::Transfer(_) => None,
            })
            .collect();
        assert_eq!(heated, [TankId::Heating]);
    }
}
