/// Adapter exposing the embedded-hal ICM-20649 driver as a `SensorDriver`
use crate::errors::{Icm20649Error, SensorError, SensorResult};
use crate::sensors::icm20649::Icm20649;
use crate::sensors::{SensorDataFrame, SensorDriver};
use core::fmt::Debug;
use embedded_hal::i2c::I2c;
use tracing::info;

pub struct Icm20649Adapter<I2C> {
    id: String,
    bus_id: String,
    driver: Icm20649<I2C>,
}

impl<I2C> Icm20649Adapter<I2C>
where
    I2C: I2c,
{
    /// Probe and configure the device, failing on a wrong chip id
    pub fn new(id: String, bus_id: String, i2c: I2C, address: u8) -> SensorResult<Self> {
        let driver = Icm20649::with_address(i2c, address).map_err(|e| match e {
            Icm20649Error::DeviceNotFound { expected, actual } => SensorError::WrongChipId {
                sensor: id.clone(),
                expected,
                actual,
            },
            Icm20649Error::I2c(e) => SensorError::InitError {
                sensor: id.clone(),
                reason: format!("I2C communication failed: {:?}", e),
            },
        })?;

        info!("[{}] ICM-20649 ready on {} at {:#04x}", id, bus_id, address);
        Ok(Self { id, bus_id, driver })
    }
}

fn read_error<E: Debug>(sensor: &str, err: Icm20649Error<E>) -> SensorError {
    SensorError::ReadError {
        sensor: sensor.to_string(),
        reason: format!("Failed to read accelerometer: {}", err),
    }
}

impl<I2C> SensorDriver for Icm20649Adapter<I2C>
where
    I2C: I2c + Send,
{
    fn read(&mut self) -> SensorResult<SensorDataFrame> {
        let accel = self
            .driver
            .acceleration()
            .map_err(|e| read_error(&self.id, e))?;

        Ok(SensorDataFrame { accel: Some(accel) })
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn bus(&self) -> &str {
        &self.bus_id
    }
}
