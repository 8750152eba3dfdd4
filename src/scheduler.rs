use crate::errors::SensorResult;
use crate::messages::{AccelMessage, Header};
use crate::sensors::SensorDriver;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{error, info, warn};

const DEVICE_ID: &str = "icm20649_poller";
const FRAME_ID: &str = "imu";

/// Period between samples for a poll rate in Hz, never shorter than 1 µs
pub fn poll_period(frequency: u32) -> Duration {
    Duration::from_micros((1_000_000 / u64::from(frequency.max(1))).max(1))
}

/// Take one sample under the sensor lock and wrap it in a message.
///
/// Returns `Ok(None)` when the sensor produced no acceleration.
pub async fn poll_once<S>(sensor: &Mutex<S>, seq: u64) -> SensorResult<Option<AccelMessage>>
where
    S: SensorDriver + ?Sized,
{
    let mut guard = sensor.lock().await;
    let frame = guard.read()?;
    let header = Header::new(
        DEVICE_ID.to_string(),
        guard.id().to_string(),
        FRAME_ID.to_string(),
        seq,
    );
    drop(guard); // Release lock early

    Ok(frame.accel.map(|accel| AccelMessage::new(header, accel)))
}

/// Poll `sensor` at `frequency` Hz, printing every sample.
///
/// Read failures are logged and polling continues. With `max_samples` set the
/// task ends after that many successful samples.
pub fn spawn_sensor_task<S>(
    sensor: Arc<Mutex<S>>,
    frequency: u32,
    max_samples: Option<u64>,
) -> JoinHandle<()>
where
    S: SensorDriver + ?Sized + 'static,
{
    tokio::spawn(async move {
        let sensor_id = sensor.lock().await.id().to_string();
        info!("[{}] Starting sensor task at {}Hz", sensor_id, frequency);

        let mut ticker = interval(poll_period(frequency));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut sequence_counter = 0u64;

        loop {
            ticker.tick().await;

            match poll_once(&sensor, sequence_counter + 1).await {
                Ok(Some(msg)) => {
                    sequence_counter += 1;
                    println!("{}", msg.display_line());
                    match msg.to_json() {
                        Ok(json) => tracing::debug!("[{}] {}", sensor_id, json),
                        Err(e) => warn!("[{}] Failed to serialize sample: {}", sensor_id, e),
                    }
                }
                Ok(None) => warn!("[{}] Frame without acceleration", sensor_id),
                Err(e) => error!("[{}] Sensor read error: {}", sensor_id, e),
            }

            if max_samples.is_some_and(|max| sequence_counter >= max) {
                info!("[{}] Collected {} samples, stopping", sensor_id, sequence_counter);
                break;
            }
        }
    })
}
