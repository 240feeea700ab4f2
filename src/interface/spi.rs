//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.

use embedded_hal::spi::{Operation, SpiDevice};

use super::Adxl357Interface;

/// Command-byte direction bit for register reads.
const READ_COMMAND: u8 = 0x01;
/// Command-byte direction bit for register writes.
const WRITE_COMMAND: u8 = 0x00;

/// SPI-based interface implementation for the ADXL357 driver.
///
/// Chip-select bracketing is delegated to the [`SpiDevice`] contract: the
/// device implementation asserts the select line for exactly the duration of
/// one `transaction` call and releases it on every exit path.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Builds the command byte used to address registers over SPI.
    ///
    /// The ADXL357 frames every transaction with one byte carrying the 7-bit
    /// register address in the upper bits and the direction in bit 0.
    fn command_byte(register: u8, direction: u8) -> u8 {
        ((register & 0x7F) << 1) | direction
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Adxl357Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.write_many(register, core::slice::from_ref(&value))
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        let command = [Self::command_byte(register, READ_COMMAND)];
        let mut operations = [Operation::Write(&command), Operation::Read(buf)];
        self.spi.transaction(&mut operations)
    }

    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }

        let command = [Self::command_byte(register, WRITE_COMMAND)];
        let mut operations = [Operation::Write(&command), Operation::Write(data)];
        self.spi.transaction(&mut operations)
    }
}

#[cfg(test)]
mod tests {
    use super::{SpiInterface, READ_COMMAND, WRITE_COMMAND};
    use crate::interface::Adxl357Interface;
    use crate::registers::{REG_FILTER, REG_PARTID, REG_XDATA3};
    use core::convert::Infallible;
    use embedded_hal::spi::{ErrorType, Operation, SpiDevice};

    struct MockDevice<'a> {
        expectations: &'a [TransactionExpectation<'a>],
        index: usize,
    }

    impl<'a> MockDevice<'a> {
        fn new(expectations: &'a [TransactionExpectation<'a>]) -> Self {
            Self { expectations, index: 0 }
        }
    }

    impl<'a> Drop for MockDevice<'a> {
        fn drop(&mut self) {
            assert_eq!(
                self.index,
                self.expectations.len(),
                "not all SPI expectations consumed"
            );
        }
    }

    impl<'a> ErrorType for MockDevice<'a> {
        type Error = Infallible;
    }

    impl<'a> SpiDevice for MockDevice<'a> {
        fn transaction<'b>(
            &mut self,
            operations: &mut [Operation<'b, u8>],
        ) -> Result<(), Self::Error> {
            let expected = self
                .expectations
                .get(self.index)
                .expect("unexpected SPI transaction");
            self.index += 1;

            match *expected {
                TransactionExpectation::Read { command, response } => {
                    assert_eq!(operations.len(), 2, "expected write+read operations");
                    let (first, rest) = operations.split_first_mut().expect("missing first op");
                    match first {
                        Operation::Write(data) => {
                            assert_eq!(data.len(), 1, "command length mismatch");
                            assert_eq!(data[0], command, "command byte mismatch");
                        }
                        _ => panic!("first operation must be write"),
                    }

                    let second = rest.first_mut().expect("missing second op");
                    match second {
                        Operation::Read(buf) => {
                            assert_eq!(buf.len(), response.len(), "response length mismatch");
                            buf.copy_from_slice(response);
                        }
                        _ => panic!("second operation must be read"),
                    }
                }
                TransactionExpectation::Write { command, payload } => {
                    assert_eq!(operations.len(), 2, "expected write+write operations");
                    let (first, rest) = operations.split_first_mut().expect("missing first op");
                    match first {
                        Operation::Write(data) => {
                            assert_eq!(data.len(), 1, "command length mismatch");
                            assert_eq!(data[0], command, "command byte mismatch");
                        }
                        _ => panic!("first operation must be write"),
                    }

                    let second = rest.first_mut().expect("missing second op");
                    match second {
                        Operation::Write(data) => {
                            assert_eq!(*data, payload, "payload mismatch");
                        }
                        _ => panic!("second operation must be write"),
                    }
                }
            }

            Ok(())
        }
    }

    #[derive(Clone, Copy)]
    enum TransactionExpectation<'a> {
        Read { command: u8, response: &'a [u8] },
        Write { command: u8, payload: &'a [u8] },
    }

    /// Read and write commands for the same address differ in exactly bit 0,
    /// and the address is recoverable from the upper seven bits.
    #[test]
    fn command_byte_encodes_direction_and_address() {
        for register in 0x00..=0x7F {
            let read = SpiInterface::<()>::command_byte(register, READ_COMMAND);
            let write = SpiInterface::<()>::command_byte(register, WRITE_COMMAND);
            assert_ne!(read, write);
            assert_eq!(read ^ write, 0x01);
            assert_eq!(read >> 1, register);
            assert_eq!(write >> 1, register);
        }
    }

    #[test]
    fn read_register_issues_one_read_transaction() {
        let expectations = [TransactionExpectation::Read {
            command: (REG_PARTID << 1) | 0x01,
            response: &[0xED],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        let value = interface.read_register(REG_PARTID).unwrap();
        assert_eq!(value, 0xED);
    }

    #[test]
    fn write_register_issues_one_write_transaction() {
        let expectations = [TransactionExpectation::Write {
            command: REG_FILTER << 1,
            payload: &[0x05],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        interface.write_register(REG_FILTER, 0x05).unwrap();
    }

    #[test]
    fn read_many_receives_burst_after_single_command() {
        let expectations = [TransactionExpectation::Read {
            command: (REG_XDATA3 << 1) | 0x01,
            response: &[0x01, 0x23, 0x40, 0x02, 0x34, 0x50, 0x03, 0x45, 0x60],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        let mut buffer = [0u8; 9];
        interface.read_many(REG_XDATA3, &mut buffer).unwrap();
        assert_eq!(buffer[0], 0x01);
        assert_eq!(buffer[8], 0x60);
    }

    #[test]
    fn empty_transfers_touch_no_transaction() {
        let expectations: [TransactionExpectation; 0] = [];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        interface.read_many(REG_XDATA3, &mut []).unwrap();
        interface.write_many(REG_FILTER, &[]).unwrap();
    }
}
