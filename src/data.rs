use crate::{
    Error, BDATAL_REGISTER, CDATAL_REGISTER, CONTROL_AGAIN_MASK, GDATAL_REGISTER,
    RDATAL_REGISTER, STATUS_AINT, STATUS_AVALID, TCS34725_ID, TCS34727_ID,
};

/// One of the four photodiode channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Clear,
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Address of the channel's low data byte. The high byte follows it.
    pub const fn data_register(self) -> u8 {
        match self {
            Channel::Clear => CDATAL_REGISTER,
            Channel::Red => RDATAL_REGISTER,
            Channel::Green => GDATAL_REGISTER,
            Channel::Blue => BDATAL_REGISTER,
        }
    }
}

/// Reassembles a channel sample from its low and high data bytes.
pub fn decode_channel(bytes: [u8; 2]) -> u16 {
    u16::from_le_bytes(bytes)
}

/// Splits a channel sample into the low and high bytes the sensor stores.
pub fn encode_channel(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// A sample of all four channels from a single RGBC cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorData {
    pub clear: u16,
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl ColorData {
    /// Decodes the eight data bytes starting at CDATAL.
    pub fn from_bytes(bytes: &[u8; 8]) -> ColorData {
        ColorData {
            clear: decode_channel([bytes[0], bytes[1]]),
            red: decode_channel([bytes[2], bytes[3]]),
            green: decode_channel([bytes[4], bytes[5]]),
            blue: decode_channel([bytes[6], bytes[7]]),
        }
    }

    /// The channels in register order: clear, red, green, blue.
    pub fn to_array(self) -> [u16; 4] {
        [self.clear, self.red, self.green, self.blue]
    }

    /// Returns the sample of one channel.
    pub fn channel(&self, channel: Channel) -> u16 {
        match channel {
            Channel::Clear => self.clear,
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }
}

impl From<ColorData> for [u16; 4] {
    fn from(data: ColorData) -> [u16; 4] {
        data.to_array()
    }
}

/// Decoded STATUS register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// AVALID, an RGBC cycle has completed since AEN was set.
    pub data_valid: bool,
    /// AINT, the clear channel crossed a threshold.
    pub interrupt: bool,
}

impl Status {
    /// Decodes a STATUS register value. Reserved bits are ignored.
    pub fn from_byte(byte: u8) -> Status {
        Status {
            data_valid: byte & STATUS_AVALID != 0,
            interrupt: byte & STATUS_AINT != 0,
        }
    }
}

/// RGBC analog gain, the AGAIN field of the CONTROL register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Gain {
    X1 = 0b00,
    X4 = 0b01,
    X16 = 0b10,
    X60 = 0b11,
}

impl Gain {
    /// Extracts the gain from a CONTROL register value.
    ///
    /// # Arguments
    ///
    /// * `control` - The raw CONTROL register. Only bits 1-0 are used.
    pub fn from_control(control: u8) -> Gain {
        match control & CONTROL_AGAIN_MASK {
            0b00 => Gain::X1,
            0b01 => Gain::X4,
            0b10 => Gain::X16,
            _ => Gain::X60,
        }
    }

    /// Converts the gain into the CONTROL register value that selects it.
    pub fn into_reg_value(self) -> u8 {
        self as u8
    }
}

impl From<Gain> for f32 {
    fn from(gain: Gain) -> Self {
        match gain {
            Gain::X1 => 1.0,
            Gain::X4 => 4.0,
            Gain::X16 => 16.0,
            Gain::X60 => 60.0,
        }
    }
}

/// The part family as reported by the ID register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    /// TCS34721 or TCS34725.
    Tcs34725,
    /// TCS34723 or TCS34727.
    Tcs34727,
}

impl TryFrom<u8> for Model {
    type Error = Error;

    fn try_from(id: u8) -> Result<Model, Error> {
        match id {
            TCS34725_ID => Ok(Model::Tcs34725),
            TCS34727_ID => Ok(Model::Tcs34727),
            other => Err(Error::UnknownDevice(other)),
        }
    }
}
