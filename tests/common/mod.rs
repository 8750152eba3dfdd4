#![allow(dead_code)]

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use std::cell::RefCell;
use std::rc::Rc;

pub use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

pub const DEV_ADDR: u8 = 0x68;

const REG_BANK_SEL: u8 = 0x7F;
const READ_ONLY_BANK0: &[u8] = &[0x00, 0x2D, 0x2E, 0x2F, 0x30, 0x31, 0x32];

pub fn trans_select_bank(bank: u8) -> I2cTrans {
    I2cTrans::write(DEV_ADDR, vec![REG_BANK_SEL, bank << 4])
}

pub fn trans_who_am_i(id: u8) -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![0x00], vec![id])
}

/// Transfers issued by construction against a device at power-on defaults
pub fn trans_init() -> Vec<I2cTrans> {
    vec![
        trans_select_bank(0),
        trans_who_am_i(0xE1),
        // reset
        trans_select_bank(0),
        I2cTrans::write_read(DEV_ADDR, vec![0x06], vec![0x41]),
        I2cTrans::write(DEV_ADDR, vec![0x06, 0x01]),
        trans_select_bank(2),
        I2cTrans::write_read(DEV_ADDR, vec![0x14], vec![0x01]),
        trans_select_bank(2),
        I2cTrans::write(DEV_ADDR, vec![0x14, 0x1B]),
        trans_select_bank(2),
        I2cTrans::write(DEV_ADDR, vec![0x10, 0x00, 0x14]),
        trans_select_bank(0),
    ]
}

/// Register file of a simulated ICM-20649
#[derive(Debug)]
pub struct DeviceState {
    pub banks: [[u8; 128]; 4],
    pub bank_sel: u8,
    /// Completed and failed transactions
    pub transactions: usize,
    /// Transaction index that fails with `ErrorKind::Bus`
    pub fail_at: Option<usize>,
    /// Contract violations seen so far
    pub violations: Vec<String>,
    last_was_bank_select: bool,
}

impl DeviceState {
    pub fn bank(&self) -> u8 {
        (self.bank_sel >> 4) & 0x03
    }

    pub fn reg(&self, bank: u8, addr: u8) -> u8 {
        self.banks[bank as usize][addr as usize]
    }

    pub fn set_accel_raw(&mut self, data: [u8; 6]) {
        self.banks[0][0x2D..0x33].copy_from_slice(&data);
    }

    fn read(&mut self, addr: u8) -> u8 {
        if addr == REG_BANK_SEL {
            return self.bank_sel;
        }
        self.banks[self.bank() as usize][addr as usize & 0x7F]
    }

    fn write(&mut self, addr: u8, value: u8) {
        if addr == REG_BANK_SEL {
            self.bank_sel = value;
            return;
        }
        if self.bank() == 0 && READ_ONLY_BANK0.contains(&addr) {
            self.violations
                .push(format!("write to read-only register {:#04x}", addr));
            return;
        }
        let bank = self.bank() as usize;
        self.banks[bank][addr as usize & 0x7F] = value;
    }

    /// Data access outside bank 0 must directly follow a bank select
    fn check_bank_contract(&mut self, addr: u8) {
        if addr != REG_BANK_SEL && self.bank() != 0 && !self.last_was_bank_select {
            self.violations.push(format!(
                "bank {} register {:#04x} accessed without a preceding bank select",
                self.bank(),
                addr
            ));
        }
    }
}

/// Simulated device; clones share the same register file
#[derive(Debug, Clone)]
pub struct FakeIcm20649 {
    pub address: u8,
    pub state: Rc<RefCell<DeviceState>>,
}

impl FakeIcm20649 {
    /// Device at power-on defaults
    pub fn new() -> Self {
        let mut banks = [[0u8; 128]; 4];
        banks[0][0x00] = 0xE1; // WHO_AM_I
        banks[0][0x06] = 0x41; // PWR_MGMT_1: sleep, clksel = 1
        banks[2][0x14] = 0x01; // ACCEL_CONFIG_1
        Self {
            address: DEV_ADDR,
            state: Rc::new(RefCell::new(DeviceState {
                banks,
                bank_sel: 0,
                transactions: 0,
                fail_at: None,
                violations: Vec::new(),
                last_was_bank_select: false,
            })),
        }
    }

    pub fn with_who_am_i(id: u8) -> Self {
        let fake = Self::new();
        fake.state.borrow_mut().banks[0][0x00] = id;
        fake
    }

    pub fn starting_in_bank(bank: u8) -> Self {
        let fake = Self::new();
        fake.state.borrow_mut().bank_sel = bank << 4;
        fake
    }
}

impl ErrorType for FakeIcm20649 {
    type Error = ErrorKind;
}

impl I2c for FakeIcm20649 {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        let index = state.transactions;
        state.transactions += 1;

        if address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        if state.fail_at == Some(index) {
            return Err(ErrorKind::Bus);
        }

        let mut pointer = 0u8;
        let mut selected_bank = false;
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    let Some((&reg, data)) = bytes.split_first() else {
                        continue;
                    };
                    pointer = reg;
                    if !data.is_empty() {
                        state.check_bank_contract(pointer);
                    }
                    for &b in data {
                        if pointer == REG_BANK_SEL {
                            selected_bank = true;
                        }
                        state.write(pointer, b);
                        pointer = pointer.wrapping_add(1);
                    }
                }
                Operation::Read(buf) => {
                    state.check_bank_contract(pointer);
                    for b in buf.iter_mut() {
                        *b = state.read(pointer);
                        pointer = pointer.wrapping_add(1);
                    }
                }
            }
        }

        state.last_was_bank_select = selected_bank;
        Ok(())
    }
}
