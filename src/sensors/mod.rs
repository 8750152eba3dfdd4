pub mod adapters;
pub mod icm20649;

use crate::errors::SensorResult;

#[derive(Debug, Default, Clone, Copy)]
pub struct SensorDataFrame {
    /// Acceleration in m/s² (x, y, z)
    pub accel: Option<[f32; 3]>,
}

/// Common interface the poller drives
pub trait SensorDriver: Send {
    fn read(&mut self) -> SensorResult<SensorDataFrame>;
    fn id(&self) -> &str;
    fn bus(&self) -> &str;
}
