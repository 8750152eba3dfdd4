//! ICM-20649 I2C driver
//!
//! Platform-agnostic: works with any `embedded_hal::i2c::I2c` implementation.
//! All register traffic goes through a small set of bank-aware accessors, so
//! callers never see REG_BANK_SEL.

use super::config::AccelConfig;
use super::registers::{
    Field, Register, RegisterBank, ACCEL_CONFIG_1, ACCEL_DLPF_CFG, ACCEL_DLPF_ENABLE,
    ACCEL_FS_SEL, ACCEL_SMPLRT_DIV_1, ACCEL_XOUT_H, DEFAULT_ADDRESS, DEVICE_ID, PWR_MGMT_1,
    PWR_MGMT_1_SLEEP, REG_BANK_SEL, STANDARD_GRAVITY, WHO_AM_I,
};
use crate::errors::{DriverResult, Icm20649Error};
use embedded_hal::i2c::I2c;
use tracing::{debug, error, info};

/// Raw accelerometer counts as latched by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawAccel {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawAccel {
    /// Decode ACCEL_XOUT_H..ACCEL_ZOUT_L (big-endian pairs)
    pub fn from_be_bytes(buf: [u8; 6]) -> Self {
        Self {
            x: i16::from_be_bytes([buf[0], buf[1]]),
            y: i16::from_be_bytes([buf[2], buf[3]]),
            z: i16::from_be_bytes([buf[4], buf[5]]),
        }
    }

    /// Convert to m/s² for the given sensitivity
    pub fn to_m_s2(&self, lsb_per_g: f32) -> [f32; 3] {
        let scale = |raw: i16| raw as f32 / lsb_per_g * STANDARD_GRAVITY;
        [scale(self.x), scale(self.y), scale(self.z)]
    }
}

/// ICM-20649 accelerometer driver
///
/// Construction verifies WHO_AM_I and runs [`Icm20649::reset`]. The device is
/// left on bank 0 after every public operation.
pub struct Icm20649<I2C> {
    /// I2C bus handle
    i2c: I2C,

    /// 7-bit device address
    address: u8,

    /// Last bank written to REG_BANK_SEL, `None` while unknown
    bank: Option<RegisterBank>,

    accel_config: AccelConfig,
}

impl<I2C> Icm20649<I2C>
where
    I2C: I2c,
{
    /// Create a driver at the default address (0x68)
    pub fn new(i2c: I2C) -> DriverResult<Self, I2C::Error> {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a driver at `address`, verify the device identity and configure it.
    ///
    /// Returns [`Icm20649Error::DeviceNotFound`] without touching any
    /// configuration register if WHO_AM_I does not read 0xE1.
    ///
    /// The handle is consumed and dropped on failure. To try several
    /// addresses on one bus, pass `&mut bus`, which is also an `I2c`.
    pub fn with_address(i2c: I2C, address: u8) -> DriverResult<Self, I2C::Error> {
        let mut driver = Self {
            i2c,
            address,
            bank: None,
            accel_config: AccelConfig::DEFAULT,
        };

        let whoami = driver.device_id()?;
        if whoami != DEVICE_ID {
            error!(
                "ICM-20649 WHO_AM_I mismatch at {:#04x}: expected {:#04x}, got {:#04x}",
                address, DEVICE_ID, whoami
            );
            return Err(Icm20649Error::DeviceNotFound {
                expected: DEVICE_ID,
                actual: whoami,
            });
        }
        info!("ICM-20649 detected at {:#04x} (WHO_AM_I: {:#04x})", address, whoami);

        driver.reset()?;
        Ok(driver)
    }

    /// Read WHO_AM_I
    pub fn device_id(&mut self) -> DriverResult<u8, I2C::Error> {
        self.read_register(WHO_AM_I)
    }

    /// Wake the device and apply the fixed accelerometer configuration.
    ///
    /// A transport failure part way through leaves the device partially
    /// configured; nothing is rolled back.
    pub fn reset(&mut self) -> DriverResult<(), I2C::Error> {
        self.select_bank(RegisterBank::Bank0)?;
        self.modify_field(PWR_MGMT_1, PWR_MGMT_1_SLEEP, 0)?;

        let cfg = self.accel_config;
        let mut accel_config_1 = self.read_register(ACCEL_CONFIG_1)?;
        accel_config_1 = ACCEL_FS_SEL.set(accel_config_1, cfg.fs_sel);
        accel_config_1 = ACCEL_DLPF_ENABLE.set(accel_config_1, cfg.dlpf_enable as u8);
        accel_config_1 = ACCEL_DLPF_CFG.set(accel_config_1, cfg.dlpf_cfg);
        self.write_register(ACCEL_CONFIG_1, accel_config_1)?;

        self.write_register_pair(ACCEL_SMPLRT_DIV_1, cfg.sample_rate_div_bytes())?;

        self.select_bank(RegisterBank::Bank0)?;

        info!(
            "ICM-20649 configured: {} LSB/g, DLPF cfg {}, ODR {:.2} Hz",
            cfg.lsb_per_g(),
            cfg.dlpf_cfg,
            cfg.output_data_rate_hz()
        );
        Ok(())
    }

    /// Burst-read the six accelerometer output bytes
    pub fn raw_acceleration(&mut self) -> DriverResult<RawAccel, I2C::Error> {
        let mut buf = [0u8; 6];
        self.read_registers(ACCEL_XOUT_H, &mut buf)?;
        let raw = RawAccel::from_be_bytes(buf);
        debug!("ICM-20649 raw accel: {:?}", raw);
        Ok(raw)
    }

    /// Acceleration in m/s² (x, y, z). Every call reads the device.
    pub fn acceleration(&mut self) -> DriverResult<[f32; 3], I2C::Error> {
        let raw = self.raw_acceleration()?;
        Ok(raw.to_m_s2(self.accel_config.lsb_per_g()))
    }

    /// Configuration applied by `reset()`
    pub fn accel_config(&self) -> AccelConfig {
        self.accel_config
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Bank the driver last selected, `None` if a bank switch failed
    pub fn current_bank(&self) -> Option<RegisterBank> {
        self.bank
    }

    /// Give the bus handle back
    pub fn release(self) -> I2C {
        self.i2c
    }

    // =========================================================================
    // Bank-aware register access
    // =========================================================================

    fn select_bank(&mut self, bank: RegisterBank) -> DriverResult<(), I2C::Error> {
        // Device state is unknown until the write is acknowledged
        self.bank = None;
        self.i2c
            .write(self.address, &[REG_BANK_SEL, bank.register_value()])
            .map_err(Icm20649Error::I2c)?;
        self.bank = Some(bank);
        debug!("ICM-20649 selected {:?}", bank);
        Ok(())
    }

    /// Make `bank` active for the next transfer.
    ///
    /// Bank 0 is the resting state and is only re-selected when the device
    /// may be elsewhere. Any other bank is selected right before each access.
    fn prepare(&mut self, bank: RegisterBank) -> DriverResult<(), I2C::Error> {
        if bank != RegisterBank::Bank0 || self.bank != Some(RegisterBank::Bank0) {
            self.select_bank(bank)?;
        }
        Ok(())
    }

    fn read_register(&mut self, reg: Register) -> DriverResult<u8, I2C::Error> {
        let mut buf = [0u8; 1];
        self.read_registers(reg, &mut buf)?;
        Ok(buf[0])
    }

    fn read_registers(&mut self, reg: Register, buf: &mut [u8]) -> DriverResult<(), I2C::Error> {
        self.prepare(reg.bank)?;
        self.i2c
            .write_read(self.address, &[reg.addr], buf)
            .map_err(Icm20649Error::I2c)
    }

    fn write_register(&mut self, reg: Register, value: u8) -> DriverResult<(), I2C::Error> {
        self.prepare(reg.bank)?;
        self.i2c
            .write(self.address, &[reg.addr, value])
            .map_err(Icm20649Error::I2c)
    }

    /// Write two consecutive registers in a single transfer
    fn write_register_pair(&mut self, reg: Register, data: [u8; 2]) -> DriverResult<(), I2C::Error> {
        self.prepare(reg.bank)?;
        self.i2c
            .write(self.address, &[reg.addr, data[0], data[1]])
            .map_err(Icm20649Error::I2c)
    }

    /// Read-modify-write of a single field
    fn modify_field(&mut self, reg: Register, field: Field, value: u8) -> DriverResult<(), I2C::Error> {
        let current = self.read_register(reg)?;
        self.write_register(reg, field.set(current, value))
    }
}
