//! ICM-20649 Wide-Range 6-DoF IMU Driver
//!
//! I2C driver for the TDK InvenSense ICM-20649, accelerometer only.
//!
//! ## Features
//!
//! - 3-axis accelerometer, fixed ±8 g range (4096 LSB/g)
//! - DLPF enabled at 50.4 Hz, output data rate ≈ 53.57 Hz
//! - Bank 0 / bank 2 register switching hidden behind the driver
//!
//! ## Usage
//!
//! ```ignore
//! use navigate_icm20649::sensors::icm20649::Icm20649;
//!
//! let mut imu = Icm20649::new(i2c)?;
//! let [x, y, z] = imu.acceleration()?;
//! ```

mod config;
mod driver;
pub mod registers;

pub use config::AccelConfig;
pub use driver::{Icm20649, RawAccel};
pub use registers::{RegisterBank, ALTERNATE_ADDRESS, DEFAULT_ADDRESS, DEVICE_ID};
