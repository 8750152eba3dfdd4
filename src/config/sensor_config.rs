use crate::errors::{ConfigError, ConfigResult};
use crate::sensors::icm20649::{ALTERNATE_ADDRESS, DEFAULT_ADDRESS};
use serde::Deserialize;
use std::fs;

/// Poll rate used when `frequency` is omitted (one sample every 0.5 s)
pub const DEFAULT_FREQUENCY_HZ: u32 = 2;

/// Highest accepted poll rate; the accelerometer itself tops out at 1125 Hz
pub const MAX_FREQUENCY_HZ: u32 = 1000;

/// Root configuration struct expecting a single `[sensor]` TOML table
#[derive(Debug, Deserialize)]
pub struct SensorConfig {
    pub sensor: SensorEntry,
}

/// The `[sensor]` section
#[derive(Debug, Deserialize)]
pub struct SensorEntry {
    pub id: String,
    /// I2C device path, e.g. `/dev/i2c-1`
    pub bus: String,
    #[serde(default = "default_address")]
    pub address: u8,
    pub frequency: Option<u32>,
}

fn default_address() -> u8 {
    DEFAULT_ADDRESS
}

impl SensorEntry {
    pub fn frequency_hz(&self) -> u32 {
        self.frequency.unwrap_or(DEFAULT_FREQUENCY_HZ)
    }
}

impl SensorConfig {
    fn validate(&self) -> ConfigResult<()> {
        let s = &self.sensor;
        if s.address != DEFAULT_ADDRESS && s.address != ALTERNATE_ADDRESS {
            return Err(ConfigError::InvalidValue {
                field: "sensor.address".to_string(),
                reason: format!(
                    "{:#04x} is not an ICM-20649 address ({:#04x} or {:#04x})",
                    s.address, DEFAULT_ADDRESS, ALTERNATE_ADDRESS
                ),
            });
        }
        if let Some(frequency) = s.frequency {
            if frequency == 0 || frequency > MAX_FREQUENCY_HZ {
                return Err(ConfigError::InvalidValue {
                    field: "sensor.frequency".to_string(),
                    reason: format!("must be between 1 and {} Hz", MAX_FREQUENCY_HZ),
                });
            }
        }
        if s.bus.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "sensor.bus".to_string(),
                reason: "must name an I2C device path".to_string(),
            });
        }
        Ok(())
    }
}

/// Parse and validate config text
pub fn parse_sensor_config(content: &str) -> ConfigResult<SensorConfig> {
    let parsed: SensorConfig = toml::from_str(content)?;
    parsed.validate()?;
    Ok(parsed)
}

/// Loads config from TOML file
pub fn load_sensor_config(path: &str) -> ConfigResult<SensorConfig> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::LoadError {
        path: path.to_string(),
        source: e,
    })?;
    parse_sensor_config(&content)
}
