#![no_std]

#[cfg(test)]
extern crate std;

mod error;

pub mod config;
pub mod device;
pub mod interface;
pub mod params;
pub mod registers;
pub mod sample;

pub use crate::config::Config;
pub use crate::device::Adxl357;
pub use crate::error::{Error, Result};
pub use crate::sample::Acceleration;
