use serde::{Deserialize, Serialize};

/// Header metadata attached to every sample
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Header {
    /// Unique device identifier
    pub device_id: String,
    /// Sensor identifier from the config (e.g., "imu0")
    pub sensor_id: String,
    /// Reference frame identifier
    pub frame_id: String,
    /// Sequence number for message ordering
    pub seq: u64,
    /// UTC timestamp in nanoseconds
    pub t_utc_ns: u64,
    /// Message schema version for evolution
    pub schema_v: u16,
}

impl Header {
    /// Create a new header stamped with the current time
    pub fn new(device_id: String, sensor_id: String, frame_id: String, seq: u64) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let now_utc = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;

        Self {
            device_id,
            sensor_id,
            frame_id,
            seq,
            t_utc_ns: now_utc,
            schema_v: 1,
        }
    }
}

/// Accelerometer sample
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AccelMessage {
    pub h: Header,
    /// Acceleration X-axis (m/s²)
    pub ax: f32,
    /// Acceleration Y-axis (m/s²)
    pub ay: f32,
    /// Acceleration Z-axis (m/s²)
    pub az: f32,
}

impl AccelMessage {
    pub fn new(h: Header, accel: [f32; 3]) -> Self {
        Self {
            h,
            ax: accel[0],
            ay: accel[1],
            az: accel[2],
        }
    }

    /// Human readable line as printed by the poller
    pub fn display_line(&self) -> String {
        format!(
            "Acceleration: X:{:.2}, Y: {:.2}, Z: {:.2} m/s^2",
            self.ax, self.ay, self.az
        )
    }

    /// Serialize to JSON for debugging
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_creation() {
        let header = Header::new(
            "test_device".to_string(),
            "imu0".to_string(),
            "base_link".to_string(),
            42,
        );

        assert_eq!(header.device_id, "test_device");
        assert_eq!(header.sensor_id, "imu0");
        assert_eq!(header.seq, 42);
        assert_eq!(header.schema_v, 1);
        assert!(header.t_utc_ns > 0);
    }

    #[test]
    fn test_display_line() {
        let header = Header::new("hub".to_string(), "imu0".to_string(), "imu".to_string(), 1);
        let msg = AccelMessage::new(header, [9.80665, -0.5, 0.004]);
        assert_eq!(msg.display_line(), "Acceleration: X:9.81, Y: -0.50, Z: 0.00 m/s^2");
    }

    #[test]
    fn test_accel_message_json() {
        let header = Header::new("hub".to_string(), "imu0".to_string(), "imu".to_string(), 7);
        let msg = AccelMessage::new(header, [1.0, 2.0, 9.5]);

        let json = msg.to_json().unwrap();
        assert!(json.contains("\"sensor_id\":\"imu0\""));

        let decoded: AccelMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.az, 9.5);
        assert_eq!(decoded.h.seq, 7);
    }
}
