//! A platform agnostic `no_std` driver for the TCS3472x family of color
//! light-to-digital converters (TCS34721, TCS34723, TCS34725, TCS34727).
//!
//! The driver speaks the sensor's register protocol over any
//! [`embedded-hal`](https://crates.io/crates/embedded-hal) I2C bus: every
//! transaction starts with a command byte selecting a register and a transfer
//! type, followed by the register data.
//!
//! ## Usage
//!
//! The blocking driver lives in [`blocking`]. Enable the `async` feature for
//! the [`r#async`] variant built on `embedded-hal-async`.
//!
//! ```no_run
//! # fn demo<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> Result<(), tcs3472x_nostd_rs::Error> {
//! use tcs3472x_nostd_rs::{blocking::Tcs3472x, Config};
//!
//! let mut sensor = Tcs3472x::new(i2c, Config::default());
//! sensor.init()?;
//! let actual_ms = sensor.set_integration_time(100.0)?;
//! let colors = sensor.read_all_channels()?;
//! # let _ = (actual_ms, colors);
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Each operation borrows the driver mutably for its whole command/data
//! sequence. Sharing one bus between several drivers is left to a bus-sharing
//! wrapper such as `embedded-hal-bus`.

#![cfg_attr(not(test), no_std)]

mod constants;
pub use constants::*;

mod error;
pub use error::*;

mod config;
pub use config::*;

mod enable;
pub use enable::*;

mod data;
pub use data::*;

pub mod command;
pub use command::{build_command, Command, TransferType};

pub mod timing;

pub mod blocking;

#[cfg(feature = "async")]
pub mod r#async;
