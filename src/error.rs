use core::fmt;

use embedded_hal::i2c::ErrorKind;

/// Everything that can go wrong while talking to the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The bus rejected or cut short a write.
    WriteFailure(ErrorKind),
    /// The bus rejected or cut short a read.
    ReadFailure(ErrorKind),
    /// A register address does not fit the 5-bit address field of a command byte.
    InvalidRegister(u8),
    /// An auto-increment transfer would run past the last addressable register.
    InvalidTransfer { start: u8, len: usize },
    /// The ID register holds a value no known TCS3472x variant reports.
    UnknownDevice(u8),
    /// An argument is outside the range the sensor can represent.
    InvalidArg,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WriteFailure(kind) => write!(f, "i2c write failed: {}", kind),
            Error::ReadFailure(kind) => write!(f, "i2c read failed: {}", kind),
            Error::InvalidRegister(address) => {
                write!(f, "register address {:#04x} out of range (0x00-0x1f)", address)
            }
            Error::InvalidTransfer { start, len } => write!(
                f,
                "auto-increment read of {} bytes from {:#04x} runs past register 0x1f",
                len, start
            ),
            Error::UnknownDevice(id) => write!(f, "unknown device id {:#04x}", id),
            Error::InvalidArg => write!(f, "invalid argument"),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_register() {
        let msg = format!("{}", Error::InvalidRegister(0x20));
        assert!(msg.contains("0x20"), "{}", msg);
    }

    #[test]
    fn transport_errors_keep_their_kind() {
        let err = Error::ReadFailure(ErrorKind::Bus);
        assert_eq!(err, Error::ReadFailure(ErrorKind::Bus));
        assert_ne!(err, Error::WriteFailure(ErrorKind::Bus));
    }
}
