use crate::errors::{SensorError, SensorResult};

/// Linux I2C bus handle, an `embedded_hal::i2c::I2c` implementation
#[cfg(feature = "linux-hal")]
pub type I2CBus = linux_embedded_hal::I2cdev;

#[cfg(feature = "linux-hal")]
use i2cdev::linux::LinuxI2CError;

/// Open an I2C bus by device path, e.g. `/dev/i2c-1`
#[cfg(feature = "linux-hal")]
pub fn open(path: &str) -> SensorResult<I2CBus> {
    I2CBus::new(path).map_err(|e: LinuxI2CError| SensorError::BusNotFound {
        bus: path.to_string(),
        reason: e.to_string(),
    })
}

/// Placeholder bus used when built without the `linux-hal` feature.
/// It cannot be opened, so no transfer ever reaches it.
#[cfg(not(feature = "linux-hal"))]
#[derive(Debug)]
pub struct I2CBus {
    _private: (),
}

#[cfg(not(feature = "linux-hal"))]
impl embedded_hal::i2c::ErrorType for I2CBus {
    type Error = embedded_hal::i2c::ErrorKind;
}

#[cfg(not(feature = "linux-hal"))]
impl embedded_hal::i2c::I2c for I2CBus {
    fn transaction(
        &mut self,
        _address: u8,
        _operations: &mut [embedded_hal::i2c::Operation<'_>],
    ) -> Result<(), Self::Error> {
        Err(embedded_hal::i2c::ErrorKind::Other)
    }
}

#[cfg(not(feature = "linux-hal"))]
pub fn open(path: &str) -> SensorResult<I2CBus> {
    Err(SensorError::BusNotFound {
        bus: path.to_string(),
        reason: "I2C is only supported with the linux-hal feature".to_string(),
    })
}
