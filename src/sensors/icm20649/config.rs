use super::registers::{ACCEL_BASE_RATE_HZ, ACCEL_LSB_PER_G, ACCEL_SMPLRT_DIV_MASK};

/// Accelerometer configuration written during reset.
///
/// The driver only ever applies [`AccelConfig::DEFAULT`]; the range is fixed
/// at ±8 g, which the scaling in `acceleration()` relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccelConfig {
    /// ACCEL_FS_SEL: 0 = ±4 g, 1 = ±8 g, 2 = ±16 g, 3 = ±30 g
    pub fs_sel: u8,
    pub dlpf_enable: bool,
    /// ACCEL_DLPF_CFG: 3 selects the 50.4 Hz 3 dB bandwidth
    pub dlpf_cfg: u8,
    /// 12-bit ACCEL_SMPLRT_DIV
    pub sample_rate_div: u16,
}

impl AccelConfig {
    /// ±8 g, DLPF on at 50.4 Hz, ODR ≈ 53.57 Hz
    pub const DEFAULT: AccelConfig = AccelConfig {
        fs_sel: 1,
        dlpf_enable: true,
        dlpf_cfg: 3,
        sample_rate_div: 20,
    };

    /// Sensitivity for the configured range
    pub fn lsb_per_g(&self) -> f32 {
        ACCEL_LSB_PER_G[(self.fs_sel & 0x03) as usize]
    }

    /// 1125 Hz / (1 + ACCEL_SMPLRT_DIV)
    pub fn output_data_rate_hz(&self) -> f32 {
        ACCEL_BASE_RATE_HZ / (1.0 + (self.sample_rate_div & ACCEL_SMPLRT_DIV_MASK) as f32)
    }

    /// ACCEL_SMPLRT_DIV_1, ACCEL_SMPLRT_DIV_2 in transmission order
    pub fn sample_rate_div_bytes(&self) -> [u8; 2] {
        (self.sample_rate_div & ACCEL_SMPLRT_DIV_MASK).to_be_bytes()
    }
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
