//! Strongly typed parameter enumerations for the ADXL357 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use adxl357::params::{MeasurementRange, OutputDataRate, PowerMode};
//!
//! let odr = OutputDataRate::Od4000Hz;
//! let range = MeasurementRange::G10;
//! let mode = PowerMode::Measure;
//! let _ = (odr, range, mode);
//! ```

use modular_bitfield::prelude::Specifier;

/// Available output data rate (ODR) selections programmed in `FILTER[3:0]`.
///
/// Each selection also sets the low-pass filter corner to ODR / 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 4]
pub enum OutputDataRate {
    /// 4000 Hz output data rate.
    Od4000Hz = 0x00,
    /// 2000 Hz output data rate.
    Od2000Hz = 0x01,
    /// 1000 Hz output data rate.
    Od1000Hz = 0x02,
    /// 500 Hz output data rate.
    Od500Hz = 0x03,
    /// 250 Hz output data rate.
    Od250Hz = 0x04,
    /// 125 Hz output data rate.
    Od125Hz = 0x05,
    /// 62.5 Hz output data rate.
    Od62_5Hz = 0x06,
    /// 31.25 Hz output data rate.
    Od31_25Hz = 0x07,
    /// 15.625 Hz output data rate.
    Od15_625Hz = 0x08,
    /// 7.813 Hz output data rate.
    Od7_813Hz = 0x09,
    /// 3.906 Hz output data rate.
    Od3_906Hz = 0x0A,
}

impl OutputDataRate {
    /// Returns the ODR in hertz.
    pub const fn hz(self) -> f32 {
        match self {
            Self::Od4000Hz => 4_000.0,
            Self::Od2000Hz => 2_000.0,
            Self::Od1000Hz => 1_000.0,
            Self::Od500Hz => 500.0,
            Self::Od250Hz => 250.0,
            Self::Od125Hz => 125.0,
            Self::Od62_5Hz => 62.5,
            Self::Od31_25Hz => 31.25,
            Self::Od15_625Hz => 15.625,
            Self::Od7_813Hz => 7.813,
            Self::Od3_906Hz => 3.906,
        }
    }
}

/// Measurement range selections programmed in `RANGE[1:0]`.
///
/// The encoding `0b00` is reserved by the datasheet and never produced by the
/// driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum MeasurementRange {
    /// ±10 g full-scale range.
    G10 = 0b01,
    /// ±20 g full-scale range.
    G20 = 0b10,
    /// ±40 g full-scale range.
    G40 = 0b11,
}

impl MeasurementRange {
    /// Returns the full-scale range in g.
    pub const fn max_g(self) -> u8 {
        match self {
            Self::G10 => 10,
            Self::G20 => 20,
            Self::G40 => 40,
        }
    }

    /// Returns the nominal sensitivity in micro-g per LSB of a 20-bit sample.
    pub const fn scale_ug_per_lsb(self) -> f32 {
        match self {
            Self::G10 => 19.5,
            Self::G20 => 39.0,
            Self::G40 => 78.0,
        }
    }
}

/// Operating power modes encoded in `POWER_CTL[0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum PowerMode {
    /// Continuous measurement mode.
    Measure = 0,
    /// Standby mode (device powers up in this state).
    Standby = 1,
}

/// High-pass filter corner selections encoded in `FILTER[6:4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 3]
pub enum HighPassCorner {
    /// High-pass filter disabled (dc coupling).
    Off = 0b000,
    /// Corner at 24.7 × 10⁻⁴ × ODR.
    Corner1 = 0b001,
    /// Corner at 6.2084 × 10⁻⁴ × ODR.
    Corner2 = 0b010,
    /// Corner at 1.5545 × 10⁻⁴ × ODR.
    Corner3 = 0b011,
    /// Corner at 0.3862 × 10⁻⁴ × ODR.
    Corner4 = 0b100,
    /// Corner at 0.0954 × 10⁻⁴ × ODR.
    Corner5 = 0b101,
    /// Corner at 0.0238 × 10⁻⁴ × ODR.
    Corner6 = 0b110,
}

impl HighPassCorner {
    /// Returns the −3 dB corner frequency in hertz for the supplied ODR,
    /// or `0.0` when the filter is disabled.
    pub const fn hz(self, odr: OutputDataRate) -> f32 {
        let coefficient = match self {
            Self::Off => 0.0,
            Self::Corner1 => 24.7e-4,
            Self::Corner2 => 6.2084e-4,
            Self::Corner3 => 1.5545e-4,
            Self::Corner4 => 0.3862e-4,
            Self::Corner5 => 0.0954e-4,
            Self::Corner6 => 0.0238e-4,
        };
        coefficient * odr.hz()
    }
}

/// Interrupt pin polarity bit (`RANGE.INT_POL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum InterruptPolarity {
    /// INT1/INT2 are active high.
    ActiveHigh = 0,
    /// INT1/INT2 are active low.
    ActiveLow = 1,
}

/// Data synchronization selections encoded in `SYNC[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum SyncMode {
    /// Internal sampling clock.
    Internal = 0b00,
    /// External sync, no interpolation filter.
    External = 0b01,
    /// External sync with interpolation filter.
    ExternalInterpolated = 0b10,
}
