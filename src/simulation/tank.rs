//! Bounded fluid reservoir with a level and a temperature.

use serde::{Deserialize, Serialize};

/// Ambient temperature every tank starts at (°C).
pub const AMBIENT_TEMP_C: f64 = 20.0;

/// A single tank in the plant line.
///
/// The level invariant `0 <= level <= capacity` is maintained entirely by
/// [`Tank::add_fluid`] and [`Tank::withdraw_fluid`]; there is no other way
/// to move fluid in or out.
#[derive(Debug, Clone)]
pub struct Tank {
    identifier: &'static str,
    capacity_l: f64,
    level_l: f64,
    temperature_c: f64,
}

impl Tank {
    /// Create an empty tank at ambient temperature.
    pub fn new(identifier: &'static str, capacity_l: f64) -> Self {
        Self {
            identifier,
            capacity_l,
            level_l: 0.0,
            temperature_c: AMBIENT_TEMP_C,
        }
    }

    /// Add fluid if the whole amount fits.
    ///
    /// Returns `false` and leaves the level untouched when the amount would
    /// overflow the capacity. There are no partial adds.
    pub fn add_fluid(&mut self, amount_l: f64) -> bool {
        if self.level_l + amount_l <= self.capacity_l {
            self.level_l += amount_l;
            true
        } else {
            false
        }
    }

    /// Withdraw up to `amount_l` and return how much actually came out.
    ///
    /// An empty tank yields 0.0; a low tank yields whatever is left. The
    /// level never goes negative.
    pub fn withdraw_fluid(&mut self, amount_l: f64) -> f64 {
        if self.level_l > 0.0 {
            let taken_l = self.level_l.min(amount_l);
            self.level_l -= taken_l;
            taken_l
        } else {
            0.0
        }
    }

    pub fn identifier(&self) -> &'static str {
        self.identifier
    }

    pub fn capacity_l(&self) -> f64 {
        self.capacity_l
    }

    pub fn level_l(&self) -> f64 {
        self.level_l
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    /// Temperature is adjusted only by the owning simulation, mirroring the
    /// level discipline.
    pub(crate) fn set_temperature_c(&mut self, temperature_c: f64) {
        self.temperature_c = temperature_c;
    }

    /// Snapshot for display and host consumption.
    pub fn state(&self) -> TankState {
        TankState {
            identifier: self.identifier.to_owned(),
            capacity_l: self.capacity_l,
            level_l: self.level_l,
            temperature_c: self.temperature_c,
        }
    }
}

/// Owned snapshot of a tank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankState {
    pub identifier: String,
    pub capacity_l: f64,
    pub level_l: f64,
    pub temperature_c: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tank_is_empty_at_ambient() {
        let tank = Tank::new("T1", 100.0);
        assert_eq!(tank.level_l(), 0.0);
        assert_eq!(tank.temperature_c(), AMBIENT_TEMP_C);
        assert_eq!(tank.capacity_l(), 100.0);
    }

    #[test]
    fn add_within_capacity_succeeds() {
        let mut tank = Tank::new("T1", 100.0);
        assert!(tank.add_fluid(40.0));
        assert!(tank.add_fluid(60.0));
        assert_eq!(tank.level_l(), 100.0);
    }

    #[test]
    fn add_overflowing_capacity_fails_and_leaves_level_unchanged() {
        let mut tank = Tank::new("T1", 100.0);
        assert!(tank.add_fluid(95.0));
        assert!(!tank.add_fluid(10.0));
        assert_eq!(tank.level_l(), 95.0);
    }

    #[test]
    fn exact_fill_to_capacity_is_accepted() {
        let mut tank = Tank::new("T1", 100.0);
        assert!(tank.add_fluid(100.0));
        assert!(!tank.add_fluid(0.1));
        assert_eq!(tank.level_l(), 100.0);
    }

    #[test]
    fn withdraw_clamps_to_available_fluid() {
        let mut tank = Tank::new("T1", 100.0);
        tank.add_fluid(0.5);
        let taken = tank.withdraw_fluid(2.0);
        assert!((taken - 0.5).abs() < 1e-12);
        assert_eq!(tank.level_l(), 0.0);
    }

    #[test]
    fn withdraw_from_empty_tank_yields_nothing() {
        let mut tank = Tank::new("T1", 100.0);
        assert_eq!(tank.withdraw_fluid(1.0), 0.0);
        assert_eq!(tank.level_l(), 0.0);
    }

    #[test]
    fn withdraw_partial_leaves_remainder() {
        let mut tank = Tank::new("T1", 100.0);
        tank.add_fluid(10.0);
        let taken = tank.withdraw_fluid(4.0);
        assert!((taken - 4.0).abs() < 1e-12);
        assert!((tank.level_l() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn snapshot_mirrors_tank() {
        let mut tank = Tank::new("T3", 100.0);
        tank.add_fluid(12.5);
        tank.set_temperature_c(37.5);

        let state = tank.state();
        assert_eq!(state.identifier, "T3");
        assert_eq!(state.capacity_l, 100.0);
        assert_eq!(state.level_l, 12.5);
        assert_eq!(state.temperature_c, 37.5);
    }
}
