/// Adapters between embedded-hal based drivers and the `SensorDriver` trait
pub mod icm20649;

pub use self::icm20649::Icm20649Adapter;
