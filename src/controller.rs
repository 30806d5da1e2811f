use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::info;

use crate::config::ControllerConfig;
use crate::simulation::{PlantSimulator, PlantState, RunParameters};

/// Shared handle to the plant.
///
/// Exactly one task drives [`run`](PlantController::run) and takes the write
/// lock for one tick per firing; everyone else reads through copy-on-read
/// [`snapshot`](PlantController::snapshot)s.
#[derive(Clone)]
pub struct PlantController {
    plant: Arc<RwLock<PlantSimulator>>,
}

impl PlantController {
    pub fn new(plant: PlantSimulator) -> Self {
        Self {
            plant: Arc::new(RwLock::new(plant)),
        }
    }

    /// Arm a run with already-validated operator parameters.
    pub async fn start(&self, params: RunParameters) {
        self.plant.write().await.start(params);
    }

    /// Clone of the full plant state, taken under the read lock.
    pub async fn snapshot(&self) -> PlantState {
        self.plant.read().await.state()
    }

    /// Tick the simulation on a fixed cadence until the task is dropped.
    pub async fn run(&self, tick_millis: u64) {
        let mut interval = tokio::time::interval(Duration::from_millis(tick_millis.max(1)));
        loop {
            interval.tick().await;
            self.plant.write().await.tick();
        }
    }
}

/// Spawn the tick loop and the periodic snapshot log onto the runtime.
pub fn spawn_plant_tasks(controller: PlantController, cfg: ControllerConfig) {
    let ticker = controller.clone();
    let tick_millis = cfg.tick_millis;
    tokio::spawn(async move {
        ticker.run(tick_millis).await;
    });

    let snapshot_log_secs = cfg.snapshot_log_secs.max(1);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(snapshot_log_secs));
        loop {
            interval.tick().await;
            let state = controller.snapshot().await;
            info!(
                tick = state.tick_count,
                feed_l = state.feed.level_l,
                buffer_l = state.buffer.level_l,
                heating_l = state.heating.level_l,
                heating_temp_c = state.heating.temperature_c,
                product_l = state.product.level_l,
                product_temp_c = state.product.temperature_c,
                pump = state.pump_active,
                heater = state.heater_active,
                valve = state.valve_open,
                "plant snapshot"
            );
        }
    });
}
