use core::fmt::Debug;
use thiserror::Error;

/// Errors raised by the ICM-20649 driver itself.
///
/// `E` is the transport error of the `embedded_hal::i2c::I2c` implementation
/// and is carried through untouched.
#[derive(Error, Debug)]
pub enum Icm20649Error<E: Debug> {
    #[error("I2C communication failed: {0:?}")]
    I2c(E),

    #[error("Failed to find ICM-20649 - check your wiring! (expected WHO_AM_I {expected:#04x}, found {actual:#04x})")]
    DeviceNotFound { expected: u8, actual: u8 },
}

/// Sensor-level errors, independent of the bus implementation
#[derive(Error, Debug)]
pub enum SensorError {
    #[error("Bus '{bus}' not found or unavailable: {reason}")]
    BusNotFound { bus: String, reason: String },

    #[error("Sensor '{sensor}' initialization failed: {reason}")]
    InitError { sensor: String, reason: String },

    #[error("Sensor '{sensor}' read failed: {reason}")]
    ReadError { sensor: String, reason: String },

    #[error("Sensor '{sensor}' wrong chip ID: expected {expected:#04x}, got {actual:#04x}")]
    WrongChipId { sensor: String, expected: u8, actual: u8 },
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from '{path}': {source}")]
    LoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration format: {0}")]
    FormatError(#[from] toml::de::Error),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Top-level errors of the polling daemon
#[derive(Error, Debug)]
pub enum PollError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sensor(#[from] SensorError),

    #[error("Sensor task terminated unexpectedly: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

/// Result type aliases for convenience
pub type DriverResult<T, E> = Result<T, Icm20649Error<E>>;
pub type SensorResult<T> = Result<T, SensorError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type PollResult<T> = Result<T, PollError>;
