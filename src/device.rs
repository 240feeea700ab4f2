//! High-level ADXL357 device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::spi::SpiInterface;
use crate::interface::Adxl357Interface;
use crate::params::{MeasurementRange, OutputDataRate, PowerMode};
use crate::registers::{
    Filter,
    PowerControl,
    Range,
    Status,
    EXPECTED_PART_ID,
    RAW_SAMPLE_BYTES,
    REG_DEVID_AD,
    REG_FILTER,
    REG_PARTID,
    REG_POWER_CTL,
    REG_RANGE,
    REG_RESET,
    REG_STATUS,
    REG_XDATA3,
    RESET_COMMAND,
};
use crate::sample::Acceleration;
use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiDevice;

// ADXL357 datasheet power-up and post-reset settling time (milliseconds).
const POWER_UP_DELAY_MS: u32 = 10;

/// High-level synchronous driver for the ADXL357 accelerometer.
///
/// The driver itself holds no sample history and no state machine; every
/// operation is a fixed sequence of bus transactions whose outcome is
/// reported synchronously to the caller. Device state (power mode, register
/// contents) lives entirely on the sensor.
pub struct Adxl357<IFACE> {
    interface: IFACE,
    config: Config,
}

/// Raw contents of the four identification registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId {
    /// `DEVID_AD`, the Analog Devices vendor ID (expected `0xAD`).
    pub analog_devices_id: u8,
    /// `DEVID_MST`, the MEMS family ID (expected `0x1D`).
    pub mems_id: u8,
    /// `PARTID`, the device ID (expected `0xED`).
    pub part_id: u8,
    /// `REVID`, the mask revision.
    pub revision: u8,
}

impl<IFACE> Adxl357<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self { interface, config }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }
}

impl<SPI> Adxl357<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for SPI transports.
    pub fn new_spi(spi: SPI, config: Config) -> Self {
        Self::new(SpiInterface::new(spi), config)
    }

    /// Releases the driver, returning the SPI device and configuration.
    pub fn release_spi(self) -> (SPI, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> Adxl357<IFACE>
where
    IFACE: Adxl357Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Global Configuration =========================
    // ==================================================================
    /// Initializes the sensor using the current configuration.
    ///
    /// Performs the power-up wait, a soft reset, identity verification, and
    /// programs the configured output data rate and range. The device is left
    /// in standby; call [`set_continuous_measurement`](Self::set_continuous_measurement)
    /// to start sampling.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        delay.delay_ms(POWER_UP_DELAY_MS);
        self.reset()?;
        delay.delay_ms(POWER_UP_DELAY_MS);
        self.verify_device_id()?;

        let config = self.config;
        self.set_output_data_rate(config.odr)?;
        self.set_range(config.range)?;
        Ok(())
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Issues a soft reset by writing the reset command byte.
    ///
    /// The `RESET` register is write-only, so no read-back verification is
    /// possible; the device needs a settling delay before the next command.
    pub fn reset(&mut self) -> Result<(), CommE> {
        self.interface
            .write_register(REG_RESET, RESET_COMMAND)
            .map_err(Error::from)
    }

    // ==================================================================
    // == Identification & Status =======================================
    // ==================================================================
    /// Verifies the `PARTID` register against the expected ADXL357 constant.
    ///
    /// Succeeds only when the read transaction itself succeeds and the
    /// returned byte matches; a bus failure is indistinguishable from a
    /// foreign device here and also reports [`Error::DeviceIdMismatch`].
    /// Recommended as the first call after power-up or reset.
    pub fn verify_device_id(&mut self) -> Result<(), CommE> {
        match self.interface.read_register(REG_PARTID) {
            Ok(id) if id == EXPECTED_PART_ID => Ok(()),
            _ => Err(Error::DeviceIdMismatch),
        }
    }

    /// Reads the four identification registers in one burst.
    pub fn device_ids(&mut self) -> Result<DeviceId, CommE> {
        let mut ids = [0u8; 4];
        self.interface
            .read_many(REG_DEVID_AD, &mut ids)
            .map_err(Error::from)?;

        Ok(DeviceId {
            analog_devices_id: ids[0],
            mems_id: ids[1],
            part_id: ids[2],
            revision: ids[3],
        })
    }

    /// Returns the current contents of the `STATUS` register.
    pub fn read_status(&mut self) -> Result<Status, CommE> {
        let raw = self
            .interface
            .read_register(REG_STATUS)
            .map_err(Error::from)?;

        Ok(Status::from(raw))
    }

    // ==================================================================
    // == Configuration Operations ======================================
    // ==================================================================
    /// Programs the output data rate into the `FILTER` register.
    ///
    /// Writing the rate selection resets the high-pass corner to dc coupling,
    /// matching the full-register write the device expects in standby.
    pub fn set_output_data_rate(&mut self, odr: OutputDataRate) -> Result<(), CommE> {
        let value = u8::from(Filter::new().with_odr(odr));
        self.write_verify(REG_FILTER, value)?;
        self.config.odr = odr;
        Ok(())
    }

    /// Programs the full-scale measurement range into the `RANGE` register.
    pub fn set_range(&mut self, range: MeasurementRange) -> Result<(), CommE> {
        let value = u8::from(Range::new().with_range(range));
        self.write_verify(REG_RANGE, value)?;
        self.config.range = range;
        Ok(())
    }

    /// Switches the device into continuous measurement mode.
    ///
    /// Writes the fixed measure encoding to `POWER_CTL`. No standby
    /// transition is exposed by this driver.
    pub fn set_continuous_measurement(&mut self) -> Result<(), CommE> {
        let value = u8::from(PowerControl::new().with_mode(PowerMode::Measure));
        self.write_verify(REG_POWER_CTL, value)
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads the latest conversion of all three axes in one burst.
    ///
    /// Issues a single read transaction covering the nine data registers
    /// starting at `XDATA3`. The buffer is only decoded after the full burst
    /// completed successfully.
    pub fn read_acceleration(&mut self) -> Result<Acceleration, CommE> {
        let mut raw = [0u8; RAW_SAMPLE_BYTES];
        self.interface
            .read_many(REG_XDATA3, &mut raw)
            .map_err(Error::from)?;

        Ok(Acceleration::from_raw(&raw))
    }

    // ==================================================================
    // == Internal Helpers ==============================================
    // ==================================================================
    /// Writes a register and immediately reads it back.
    ///
    /// A value surviving the round trip is the only accepted proof that the
    /// device applied it; a differing read-back reports
    /// [`Error::ReadbackMismatch`] while transfer failures on either step
    /// surface as [`Error::Interface`].
    fn write_verify(&mut self, register: u8, value: u8) -> Result<(), CommE> {
        self.interface
            .write_register(register, value)
            .map_err(Error::from)?;

        let readback = self
            .interface
            .read_register(register)
            .map_err(Error::from)?;

        if readback != value {
            return Err(Error::ReadbackMismatch);
        }

        Ok(())
    }
}
