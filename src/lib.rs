// Public modules
pub mod bus;
pub mod config;
pub mod errors;
pub mod messages;
pub mod scheduler;
pub mod sensors;

// Re-export commonly used types
pub use config::{load_sensor_config, SensorConfig};
pub use errors::{Icm20649Error, PollError, PollResult, SensorError, SensorResult};
pub use scheduler::spawn_sensor_task;
pub use sensors::icm20649::Icm20649;

use crate::sensors::adapters::Icm20649Adapter;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build a log filter from `RUST_LOG`-style directives, INFO when none are given
pub fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

/// Initialize tracing, honouring `RUST_LOG`
pub fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .init();
}

/// Open the configured bus, bring up the ICM-20649 and poll it until the task ends
pub async fn run_poller(config_path: &str) -> PollResult<()> {
    info!("[NavigateICM20649] starting up...");

    let sensor_config_path = format!("{}/sensors.toml", config_path);
    let sensor_config = load_sensor_config(&sensor_config_path)?;
    let entry = &sensor_config.sensor;
    info!("[config] sensor '{}' on {} at {:#04x}", entry.id, entry.bus, entry.address);

    let i2c = bus::i2c::open(&entry.bus)?;
    let sensor = Icm20649Adapter::new(entry.id.clone(), entry.bus.clone(), i2c, entry.address)?;
    info!("[sensor] {} initialized", entry.id);

    let handle = spawn_sensor_task(Arc::new(Mutex::new(sensor)), entry.frequency_hz(), None);
    info!("[main] sensor task launched");

    handle.await?;
    Ok(())
}
