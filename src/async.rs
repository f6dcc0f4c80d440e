//! Async driver on top of [`embedded_hal_async::i2c::I2c`].
//!
//! Mirrors [`crate::blocking`]; every bus access is an await point, and the
//! driver stays mutably borrowed across the command write and the data read
//! that follows it.

use embedded_hal_async::i2c::{Error as _, I2c};
use log::debug;

use crate::command::block_command;
use crate::timing::{atime_from_ms, atime_to_ms, wtime_from_ms, wtime_to_ms};
use crate::{
    decode_channel, Channel, ColorData, Command, Config, EnableFlags, Error, Gain, Model,
    Status, TransferType, ATIME_REGISTER, CDATAL_REGISTER, CONFIG_REGISTER, CONFIG_WLONG,
    CONTROL_REGISTER, ENABLE_REGISTER, ID_REGISTER, STATUS_REGISTER, WTIME_REGISTER,
};

/// Represents a TCS3472x color sensor on an async I2C bus.
///
/// # Type Parameters
///
/// * `I2C`: The bus the sensor is attached to. It must implement
///   `embedded_hal_async::i2c::I2c`.
pub struct Tcs3472x<I2C> {
    i2c: I2C,
    config: Config,
}

impl<I2C> Tcs3472x<I2C>
where
    I2C: I2c,
{
    /// Creates a new `Tcs3472x` instance. No bus traffic happens until
    /// [`init`](Self::init) is awaited.
    pub fn new(i2c: I2C, config: Config) -> Self {
        Self { i2c, config }
    }

    /// Gives the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Returns the configuration the driver was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Powers the sensor on and starts RGBC conversions.
    ///
    /// See [`crate::blocking::Tcs3472x::init`].
    pub async fn init(&mut self) -> Result<(), Error> {
        let flags = self.config.enable_flags();
        debug!(
            "Initializing TCS3472x at {:#04x}, ENABLE = {:#04x}",
            self.config.address,
            flags.to_byte()
        );
        self.write_register(ENABLE_REGISTER, flags.to_byte())
            .await
            .map_err(|e| {
                log::error!("Failed to write ENABLE register during init: {:?}", e);
                e
            })?;
        debug!("TCS3472x init sequence complete.");
        Ok(())
    }

    /// Reads the ENABLE register verbatim.
    pub async fn get_enable_state(&mut self) -> Result<u8, Error> {
        self.read_register(ENABLE_REGISTER).await
    }

    /// Reads and decodes the ENABLE register.
    pub async fn enable_flags(&mut self) -> Result<EnableFlags, Error> {
        self.get_enable_state().await.map(EnableFlags::from_byte)
    }

    /// Reads the ID register verbatim.
    pub async fn get_device_id(&mut self) -> Result<u8, Error> {
        self.read_register(ID_REGISTER).await
    }

    /// Identifies the part from its ID register.
    ///
    /// # Returns
    ///
    /// * `Ok(Model)` for the known ID values 0x44 and 0x4D.
    /// * `Err(Error::UnknownDevice(id))` for any other ID.
    /// * `Err(Error)` if the bus write or read failed.
    pub async fn model(&mut self) -> Result<Model, Error> {
        let id = self.get_device_id().await?;
        Model::try_from(id).map_err(|e| {
            log::warn!("Unrecognized TCS3472x device id {:#04x}", id);
            e
        })
    }

    /// Reads the STATUS register.
    ///
    /// # Returns
    ///
    /// * `Ok(Status)` with AVALID set once an RGBC cycle has completed since AEN
    ///   was enabled, so channel data read now is valid.
    /// * `Err(Error)` if the bus write or read failed.
    pub async fn read_status(&mut self) -> Result<Status, Error> {
        self.read_register(STATUS_REGISTER)
            .await
            .map(Status::from_byte)
    }

    /// Reads a single channel's 16-bit sample.
    ///
    /// # Arguments
    ///
    /// * `channel` - The channel to read.
    ///
    /// # Returns
    ///
    /// * `Ok(u16)` containing the sample.
    /// * `Err(Error)` if the command write or the 2-byte read failed.
    pub async fn read_channel(&mut self, channel: Channel) -> Result<u16, Error> {
        self.read_channel_pair(channel.data_register()).await
    }

    /// Reads the clear channel. See [`read_channel`](Self::read_channel).
    pub async fn read_clear(&mut self) -> Result<u16, Error> {
        self.read_channel(Channel::Clear).await
    }

    /// Reads the red channel. See [`read_channel`](Self::read_channel).
    pub async fn read_red(&mut self) -> Result<u16, Error> {
        self.read_channel(Channel::Red).await
    }

    /// Reads the green channel. See [`read_channel`](Self::read_channel).
    pub async fn read_green(&mut self) -> Result<u16, Error> {
        self.read_channel(Channel::Green).await
    }

    /// Reads the blue channel. See [`read_channel`](Self::read_channel).
    pub async fn read_blue(&mut self) -> Result<u16, Error> {
        self.read_channel(Channel::Blue).await
    }

    /// Reads all four channels in one auto-increment transfer.
    pub async fn read_all_channels(&mut self) -> Result<ColorData, Error> {
        let mut bytes = [0u8; 8];
        self.read_block(CDATAL_REGISTER, &mut bytes).await?;
        let data = ColorData::from_bytes(&bytes);
        debug!("Read channels: {:?}", data);
        Ok(data)
    }

    /// Sets the RGBC integration time and returns the time actually programmed.
    pub async fn set_integration_time(&mut self, ms: f32) -> Result<f32, Error> {
        let atime = atime_from_ms(ms)?;
        self.write_register(ATIME_REGISTER, atime).await?;
        let actual = atime_to_ms(atime);
        debug!(
            "Integration time set to {} ms (requested {} ms, ATIME = {:#04x})",
            actual, ms, atime
        );
        Ok(actual)
    }

    /// Reads ATIME back and converts it to milliseconds.
    ///
    /// ATIME = 0 reads as 700 ms, not the 614.4 ms the cycle count gives.
    pub async fn get_integration_time(&mut self) -> Result<f32, Error> {
        self.read_register(ATIME_REGISTER).await.map(atime_to_ms)
    }

    /// Sets the wait time between RGBC cycles and returns the time actually
    /// programmed.
    ///
    /// CONFIG (WLONG) is written before WTIME. If the WTIME write fails, the
    /// error is returned with the new WLONG and the old WTIME in place; call
    /// again to finish the update.
    pub async fn set_wait_time(&mut self, ms: f32) -> Result<f32, Error> {
        let (wtime, wlong) = wtime_from_ms(ms)?;
        self.write_register(CONFIG_REGISTER, if wlong { CONFIG_WLONG } else { 0 })
            .await?;
        self.write_register(WTIME_REGISTER, wtime).await?;
        let actual = wtime_to_ms(wtime, wlong);
        debug!(
            "Wait time set to {} ms (WTIME = {:#04x}, WLONG = {})",
            actual, wtime, wlong
        );
        Ok(actual)
    }

    /// Reads WTIME and the WLONG bit back and converts them to milliseconds.
    pub async fn get_wait_time(&mut self) -> Result<f32, Error> {
        let wtime = self.read_register(WTIME_REGISTER).await?;
        let config = self.read_register(CONFIG_REGISTER).await?;
        Ok(wtime_to_ms(wtime, config & CONFIG_WLONG != 0))
    }

    /// Sets the RGBC analog gain.
    ///
    /// # Arguments
    ///
    /// * `gain` - The gain to program into the CONTROL register.
    pub async fn set_gain(&mut self, gain: Gain) -> Result<(), Error> {
        debug!("Setting gain to {:?}", gain);
        self.write_register(CONTROL_REGISTER, gain.into_reg_value())
            .await
    }

    /// Reads the RGBC analog gain from the CONTROL register.
    pub async fn get_gain(&mut self) -> Result<Gain, Error> {
        self.read_register(CONTROL_REGISTER)
            .await
            .map(Gain::from_control)
    }

    /// Reads one register in repeat mode.
    pub async fn read_register(&mut self, register: u8) -> Result<u8, Error> {
        self.write_command(register, TransferType::Repeat).await?;
        let mut buffer = [0u8; 1];
        self.read(&mut buffer).await?;
        debug!("Register {:#04x} = {:#04x}", register, buffer[0]);
        Ok(buffer[0])
    }

    /// Writes one register. The command byte and the value go out in a single
    /// bus write.
    pub async fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error> {
        let command = Command::new(register, TransferType::Repeat)?;
        self.write(&[command.byte(), value]).await
    }

    /// Fills `buffer` from consecutive registers starting at `start`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` once `buffer` holds the register contents.
    /// * `Err(Error::InvalidTransfer)` if `buffer` is empty or would run past
    ///   register 0x1F. Nothing is sent on the bus in that case.
    /// * `Err(Error)` if the bus write or read failed.
    pub async fn read_block(&mut self, start: u8, buffer: &mut [u8]) -> Result<(), Error> {
        let command = block_command(start, buffer.len())?;
        self.write(&[command.byte()]).await?;
        self.read(buffer).await
    }

    /// Reads a little-endian 16-bit value from `register` and the one after it.
    pub async fn read_channel_pair(&mut self, register: u8) -> Result<u16, Error> {
        let mut bytes = [0u8; 2];
        self.read_block(register, &mut bytes).await?;
        Ok(decode_channel(bytes))
    }

    /// Selects `register` for the next transfer without moving any data.
    pub async fn write_command(
        &mut self,
        register: u8,
        transfer: TransferType,
    ) -> Result<(), Error> {
        let command = Command::new(register, transfer)?;
        self.write(&[command.byte()]).await
    }

    async fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        debug!("Writing {:02X?} to {:#04x}", bytes, self.config.address);
        self.i2c
            .write(self.config.address, bytes)
            .await
            .map_err(|e| {
                let kind = e.kind();
                log::error!("I2C write of {:02X?} failed: {:?}", bytes, kind);
                Error::WriteFailure(kind)
            })
    }

    async fn read(&mut self, buffer: &mut [u8]) -> Result<(), Error> {
        let len = buffer.len();
        self.i2c
            .read(self.config.address, buffer)
            .await
            .map_err(|e| {
                let kind = e.kind();
                log::error!("I2C read of {} bytes failed: {:?}", len, kind);
                Error::ReadFailure(kind)
            })?;
        debug!("Read {:02X?}", buffer);
        Ok(())
    }
}
