//! Register map definitions for the ADXL357 accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{
    HighPassCorner, InterruptPolarity, MeasurementRange, OutputDataRate, PowerMode, SyncMode,
};

/// Register address of `DEVID_AD`.
pub const REG_DEVID_AD: u8 = 0x00;
/// Register address of `DEVID_MST`.
pub const REG_DEVID_MST: u8 = 0x01;
/// Register address of `PARTID`.
pub const REG_PARTID: u8 = 0x02;
/// Register address of `REVID`.
pub const REG_REVID: u8 = 0x03;
/// Register address of `STATUS`.
pub const REG_STATUS: u8 = 0x04;
/// Register address of `FIFO_ENTRIES`.
pub const REG_FIFO_ENTRIES: u8 = 0x05;
/// Register address of `TEMP2`.
pub const REG_TEMP2: u8 = 0x06;
/// Register address of `TEMP1`.
pub const REG_TEMP1: u8 = 0x07;
/// Register address of `XDATA3`, the first register of the X/Y/Z data block.
pub const REG_XDATA3: u8 = 0x08;
/// Register address of `XDATA2`.
pub const REG_XDATA2: u8 = 0x09;
/// Register address of `XDATA1`.
pub const REG_XDATA1: u8 = 0x0A;
/// Register address of `YDATA3`.
pub const REG_YDATA3: u8 = 0x0B;
/// Register address of `YDATA2`.
pub const REG_YDATA2: u8 = 0x0C;
/// Register address of `YDATA1`.
pub const REG_YDATA1: u8 = 0x0D;
/// Register address of `ZDATA3`.
pub const REG_ZDATA3: u8 = 0x0E;
/// Register address of `ZDATA2`.
pub const REG_ZDATA2: u8 = 0x0F;
/// Register address of `ZDATA1`.
pub const REG_ZDATA1: u8 = 0x10;
/// Register address of `FIFO_DATA`.
pub const REG_FIFO_DATA: u8 = 0x11;
/// Register address of `OFFSET_X_H`.
pub const REG_OFFSET_X_H: u8 = 0x1E;
/// Register address of `OFFSET_X_L`.
pub const REG_OFFSET_X_L: u8 = 0x1F;
/// Register address of `OFFSET_Y_H`.
pub const REG_OFFSET_Y_H: u8 = 0x20;
/// Register address of `OFFSET_Y_L`.
pub const REG_OFFSET_Y_L: u8 = 0x21;
/// Register address of `OFFSET_Z_H`.
pub const REG_OFFSET_Z_H: u8 = 0x22;
/// Register address of `OFFSET_Z_L`.
pub const REG_OFFSET_Z_L: u8 = 0x23;
/// Register address of `ACT_EN`.
pub const REG_ACT_EN: u8 = 0x24;
/// Register address of `ACT_THRESH_H`.
pub const REG_ACT_THRESH_H: u8 = 0x25;
/// Register address of `ACT_THRESH_L`.
pub const REG_ACT_THRESH_L: u8 = 0x26;
/// Register address of `ACT_COUNT`.
pub const REG_ACT_COUNT: u8 = 0x27;
/// Register address of `FILTER`.
pub const REG_FILTER: u8 = 0x28;
/// Register address of `FIFO_SAMPLES`.
pub const REG_FIFO_SAMPLES: u8 = 0x29;
/// Register address of `INT_MAP`.
pub const REG_INT_MAP: u8 = 0x2A;
/// Register address of `SYNC`.
pub const REG_SYNC: u8 = 0x2B;
/// Register address of `RANGE`.
pub const REG_RANGE: u8 = 0x2C;
/// Register address of `POWER_CTL`.
pub const REG_POWER_CTL: u8 = 0x2D;
/// Register address of `SELF_TEST`.
pub const REG_SELF_TEST: u8 = 0x2E;
/// Register address of `RESET`.
pub const REG_RESET: u8 = 0x2F;

/// Expected content of `DEVID_AD` (Analog Devices vendor ID).
pub const EXPECTED_DEVID_AD: u8 = 0xAD;
/// Expected content of `DEVID_MST` (Analog Devices MEMS family ID).
pub const EXPECTED_DEVID_MST: u8 = 0x1D;
/// Expected content of `PARTID` for the ADXL357.
pub const EXPECTED_PART_ID: u8 = 0xED;
/// Mask revision at the time this driver was written.
pub const EXPECTED_REVID: u8 = 0x01;

/// Soft reset command value written to the `RESET` register.
pub const RESET_COMMAND: u8 = 0x52;

/// Number of consecutive bytes spanning the X, Y, Z data registers.
pub const RAW_SAMPLE_BYTES: usize = 9;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Write-only register.
    WriteOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

/// Bitfield representation of the `STATUS` register (address `0x04`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // A complete X/Y/Z sample is ready (bit 0).
    pub data_ready: bool,
    // FIFO watermark reached (bit 1).
    pub fifo_full: bool,
    // FIFO has overrun and samples were lost (bit 2).
    pub fifo_overrun: bool,
    // Activity detection event (bit 3).
    pub activity: bool,
    // Internal non-volatile memory busy indicator (bit 4).
    pub nvm_busy: bool,
    #[skip]
    __: B3,
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Status> for u8 {
    fn from(value: Status) -> Self {
        value.into_bytes()[0]
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Status {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Status {{ DATA_RDY: {}, FIFO_FULL: {}, FIFO_OVR: {}, Activity: {}, NVM_BUSY: {} }}",
            self.data_ready(),
            self.fifo_full(),
            self.fifo_overrun(),
            self.activity(),
            self.nvm_busy()
        );
    }
}

/// Bitfield representation of the `FILTER` register (address `0x28`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    // Output data rate and low-pass corner selection (bits 3:0).
    pub odr: OutputDataRate,
    // High-pass filter corner selection (bits 6:4).
    pub high_pass: HighPassCorner,
    #[skip]
    __: B1,
}

impl From<u8> for Filter {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Filter> for u8 {
    fn from(value: Filter) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `INT_MAP` register (address `0x2A`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptMap {
    // DATA_RDY routed to INT1 (bit 0).
    pub data_ready_int1: bool,
    // FIFO_FULL routed to INT1 (bit 1).
    pub fifo_full_int1: bool,
    // FIFO_OVR routed to INT1 (bit 2).
    pub fifo_overrun_int1: bool,
    // Activity routed to INT1 (bit 3).
    pub activity_int1: bool,
    // DATA_RDY routed to INT2 (bit 4).
    pub data_ready_int2: bool,
    // FIFO_FULL routed to INT2 (bit 5).
    pub fifo_full_int2: bool,
    // FIFO_OVR routed to INT2 (bit 6).
    pub fifo_overrun_int2: bool,
    // Activity routed to INT2 (bit 7).
    pub activity_int2: bool,
}

impl From<u8> for InterruptMap {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<InterruptMap> for u8 {
    fn from(value: InterruptMap) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `SYNC` register (address `0x2B`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sync {
    // External sync selection (bits 1:0).
    pub mode: SyncMode,
    // External clock enable (bit 2).
    pub ext_clk: bool,
    #[skip]
    __: B5,
}

impl From<u8> for Sync {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Sync> for u8 {
    fn from(value: Sync) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `RANGE` register (address `0x2C`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    // Full-scale range selection (bits 1:0).
    pub range: MeasurementRange,
    #[skip]
    __: B4,
    // Interrupt pin polarity (bit 6).
    pub int_polarity: InterruptPolarity,
    // I²C high-speed mode enable (bit 7).
    pub i2c_high_speed: bool,
}

impl From<u8> for Range {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Range> for u8 {
    fn from(value: Range) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `POWER_CTL` register (address `0x2D`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerControl {
    // Standby / measurement mode selection (bit 0).
    pub mode: PowerMode,
    // Temperature processing disable (bit 1).
    pub temp_off: bool,
    // DATA_RDY output disable (bit 2).
    pub data_ready_off: bool,
    #[skip]
    __: B5,
}

impl From<u8> for PowerControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PowerControl> for u8 {
    fn from(value: PowerControl) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for Status {
    type Raw = u8;
    const ADDRESS: u8 = REG_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = None;
}

impl Register for Filter {
    type Raw = u8;
    const ADDRESS: u8 = REG_FILTER;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for InterruptMap {
    type Raw = u8;
    const ADDRESS: u8 = REG_INT_MAP;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for Sync {
    type Raw = u8;
    const ADDRESS: u8 = REG_SYNC;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for Range {
    type Raw = u8;
    const ADDRESS: u8 = REG_RANGE;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x81);
}

impl Register for PowerControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_POWER_CTL;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x01);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates that Status bitfields match the datasheet layout.
    #[test]
    fn status_layout_matches_datasheet() {
        let status = Status::from(0b0001_0101);
        assert!(status.data_ready());
        assert!(!status.fifo_full());
        assert!(status.fifo_overrun());
        assert!(!status.activity());
        assert!(status.nvm_busy());
    }

    /// Ensures Filter encodes and decodes as expected across both fields.
    #[test]
    fn filter_roundtrip() {
        let filter = Filter::new()
            .with_odr(OutputDataRate::Od500Hz)
            .with_high_pass(HighPassCorner::Corner2);

        assert_eq!(u8::from(filter), 0b0_010_0011);
        let decoded = Filter::from(u8::from(filter));
        assert_eq!(decoded.odr(), OutputDataRate::Od500Hz);
        assert_eq!(decoded.high_pass(), HighPassCorner::Corner2);
    }

    /// A fresh Filter carries the datasheet default of 4000 Hz, HPF off.
    #[test]
    fn filter_default_is_4000hz_dc_coupled() {
        let filter = Filter::new();
        assert_eq!(u8::from(filter), 0x00);
        assert_eq!(filter.odr(), OutputDataRate::Od4000Hz);
        assert_eq!(filter.high_pass(), HighPassCorner::Off);
    }

    /// Range selections land in the two low bits with the datasheet encodings.
    #[test]
    fn range_field_encodings() {
        for (range, encoding) in [
            (MeasurementRange::G10, 0x01),
            (MeasurementRange::G20, 0x02),
            (MeasurementRange::G40, 0x03),
        ] {
            let reg = Range::new().with_range(range);
            assert_eq!(u8::from(reg), encoding);
        }
    }

    /// The measurement-mode encoding written to POWER_CTL is all bits clear,
    /// standby is bit 0 set.
    #[test]
    fn power_control_mode_encodings() {
        assert_eq!(u8::from(PowerControl::new().with_mode(PowerMode::Measure)), 0x00);
        assert_eq!(u8::from(PowerControl::new().with_mode(PowerMode::Standby)), 0x01);
    }

    /// Interrupt routing flags occupy the documented INT_MAP bit positions.
    #[test]
    fn interrupt_map_bit_positions() {
        assert_eq!(u8::from(InterruptMap::new().with_data_ready_int1(true)), 0x01);
        assert_eq!(u8::from(InterruptMap::new().with_activity_int1(true)), 0x08);
        assert_eq!(u8::from(InterruptMap::new().with_data_ready_int2(true)), 0x10);
        assert_eq!(u8::from(InterruptMap::new().with_activity_int2(true)), 0x80);
    }
}
