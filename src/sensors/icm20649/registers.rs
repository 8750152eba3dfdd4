//! ICM-20649 register map
//!
//! The device exposes four user banks behind a single 7-bit offset space.
//! REG_BANK_SEL (0x7F) is reachable from every bank and routes all other
//! offsets to the bank stored in its bits[5:4]. Only banks 0 and 2 are used.

/// ICM-20649 default I2C address (AD0 = LOW)
pub const DEFAULT_ADDRESS: u8 = 0x68;

/// ICM-20649 alternate I2C address (AD0 = HIGH)
pub const ALTERNATE_ADDRESS: u8 = 0x69;

/// Expected WHO_AM_I contents
pub const DEVICE_ID: u8 = 0xE1;

/// Standard gravity in m/s²
pub const STANDARD_GRAVITY: f32 = 9.80665;

/// Register bank selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RegisterBank {
    Bank0 = 0,
    Bank1 = 1,
    Bank2 = 2,
    Bank3 = 3,
}

impl RegisterBank {
    /// Value written to REG_BANK_SEL to select this bank
    pub fn register_value(self) -> u8 {
        BANK_SEL.set(0, self as u8)
    }

    /// Decode the bank from a raw REG_BANK_SEL value
    pub fn from_register(value: u8) -> Self {
        match BANK_SEL.get(value) {
            0 => RegisterBank::Bank0,
            1 => RegisterBank::Bank1,
            2 => RegisterBank::Bank2,
            _ => RegisterBank::Bank3,
        }
    }
}

/// A physical register: bank plus offset within that bank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register {
    pub bank: RegisterBank,
    pub addr: u8,
}

impl Register {
    pub const fn new(bank: RegisterBank, addr: u8) -> Self {
        Self { bank, addr }
    }
}

/// A sub-byte field inside a register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub shift: u8,
    pub width: u8,
}

impl Field {
    pub const fn new(shift: u8, width: u8) -> Self {
        Self { shift, width }
    }

    /// Mask covering the field in its register position
    pub const fn mask(self) -> u8 {
        (((1u16 << self.width) - 1) as u8) << self.shift
    }

    /// Extract the field from a register value
    pub const fn get(self, reg: u8) -> u8 {
        (reg & self.mask()) >> self.shift
    }

    /// Replace the field inside `reg`, leaving all other bits untouched.
    /// Bits of `value` wider than the field are dropped.
    pub const fn set(self, reg: u8, value: u8) -> u8 {
        (reg & !self.mask()) | ((value << self.shift) & self.mask())
    }
}

// =============================================================================
// Bank 0
// =============================================================================

pub const WHO_AM_I: Register = Register::new(RegisterBank::Bank0, 0x00);
pub const PWR_MGMT_1: Register = Register::new(RegisterBank::Bank0, 0x06);
/// First of six data bytes: X_H, X_L, Y_H, Y_L, Z_H, Z_L
pub const ACCEL_XOUT_H: Register = Register::new(RegisterBank::Bank0, 0x2D);

/// REG_BANK_SEL lives at the same offset in every bank
pub const REG_BANK_SEL: u8 = 0x7F;

// =============================================================================
// Bank 2
// =============================================================================

/// ACCEL_SMPLRT_DIV[11:8]; ACCEL_SMPLRT_DIV_2 at 0x11 holds [7:0]
pub const ACCEL_SMPLRT_DIV_1: Register = Register::new(RegisterBank::Bank2, 0x10);
pub const ACCEL_CONFIG_1: Register = Register::new(RegisterBank::Bank2, 0x14);

// =============================================================================
// Fields
// =============================================================================

pub const BANK_SEL: Field = Field::new(4, 2);

pub const PWR_MGMT_1_SLEEP: Field = Field::new(6, 1);
pub const PWR_MGMT_1_CLKSEL: Field = Field::new(0, 3);

pub const ACCEL_DLPF_ENABLE: Field = Field::new(0, 1);
pub const ACCEL_FS_SEL: Field = Field::new(1, 2);
pub const ACCEL_DLPF_CFG: Field = Field::new(3, 3);

/// ACCEL_SMPLRT_DIV is 12 bits wide
pub const ACCEL_SMPLRT_DIV_MASK: u16 = 0x0FFF;

/// Accelerometer sensitivity per ACCEL_FS_SEL value, LSB/g
pub const ACCEL_LSB_PER_G: [f32; 4] = [8192.0, 4096.0, 2048.0, 1024.0];

/// Base rate the accelerometer sample divisor is applied to
pub const ACCEL_BASE_RATE_HZ: f32 = 1125.0;
