use crate::{EnableFlags, DEFAULT_ADDRESS};

/// Configuration settings for the TCS3472x sensor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// The 7-bit I2C address of the sensor.
    pub address: u8,
    /// Whether `init` sets WEN so WTIME is inserted between RGBC cycles.
    pub wait_enable: bool,
    /// Whether `init` sets AIEN.
    pub interrupt_enable: bool,
}

impl Config {
    /// Creates a new `Config` for a sensor at `address`, with wait and
    /// interrupt disabled.
    pub fn new(address: u8) -> Config {
        Config {
            address,
            wait_enable: false,
            interrupt_enable: false,
        }
    }
    /// Sets the I2C address.
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }
    /// Sets whether the wait state is enabled at init.
    pub fn wait_enable(mut self, enable: bool) -> Self {
        self.wait_enable = enable;
        self
    }
    /// Sets whether the RGBC interrupt is enabled at init.
    pub fn interrupt_enable(mut self, enable: bool) -> Self {
        self.interrupt_enable = enable;
        self
    }

    /// The ENABLE register value written by `init`. PON and AEN are always set.
    pub fn enable_flags(&self) -> EnableFlags {
        EnableFlags {
            power_on: true,
            rgbc_enable: true,
            wait_enable: self.wait_enable,
            interrupt_enable: self.interrupt_enable,
        }
    }
}

/// Provides default configuration values for the TCS3472x sensor.
impl Default for Config {
    /// The default configuration addresses the sensor at `0x29` with only PON
    /// and AEN enabled.
    fn default() -> Config {
        Config::new(DEFAULT_ADDRESS)
    }
}
