use anyhow::Result;
use fluid_plant_controller::{config, controller, simulation, telemetry};

use config::Config;
use controller::PlantController;
use simulation::{PlantSimulator, TracingReporter};
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load()?;
    let params = cfg.process.run_parameters()?;

    let plant = PlantSimulator::new(cfg.plant.clone(), Box::new(TracingReporter));
    let controller = PlantController::new(plant);

    info!(
        pump_power = params.pump_power,
        target_temp_c = params.target_temp_c,
        tick_millis = cfg.controller.tick_millis,
        "starting fluid plant controller"
    );

    controller.start(params).await;
    controller::spawn_plant_tasks(controller.clone(), cfg.controller.clone());

    telemetry::shutdown_signal().await;

    warn!("shutdown complete");
    Ok(())
}
