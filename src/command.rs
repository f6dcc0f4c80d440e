//! Command byte encoding.
//!
//! Every transaction with the sensor starts with a command byte:
//!
//! ```text
//!   7     6   5    4   3   2   1   0
//! +-----+--------+-------------------+
//! | CMD |  TYPE  |      ADDR/SF      |
//! +-----+--------+-------------------+
//! ```

use crate::{Error, MAX_REGISTER};

const CMD_BIT: u8 = 1 << 7;
const TYPE_SHIFT: u8 = 5;
const TYPE_MASK: u8 = 0b11;
const ADDR_MASK: u8 = 0b1_1111;

/// How the sensor treats the bytes following a command byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferType {
    /// Every following byte reads or writes the same register.
    Repeat,
    /// The register address advances after every byte.
    AutoIncrement,
    /// The address field selects a special function instead of a register.
    SpecialFunction,
}

impl TransferType {
    /// The two bits this transfer type occupies in the command byte.
    pub const fn bits(self) -> u8 {
        match self {
            TransferType::Repeat => 0b00,
            TransferType::AutoIncrement => 0b01,
            TransferType::SpecialFunction => 0b11,
        }
    }

    /// Decodes the two transfer type bits. `0b10` is undefined on the part.
    pub const fn from_bits(bits: u8) -> Option<TransferType> {
        match bits & TYPE_MASK {
            0b00 => Some(TransferType::Repeat),
            0b01 => Some(TransferType::AutoIncrement),
            0b11 => Some(TransferType::SpecialFunction),
            _ => None,
        }
    }
}

/// Packs a register address and transfer type into a command byte.
///
/// Address bits above bit 4 are discarded. Use [`Command::new`] to have
/// out-of-range addresses rejected instead.
pub const fn build_command(register: u8, transfer: TransferType) -> u8 {
    CMD_BIT | (transfer.bits() << TYPE_SHIFT) | (register & ADDR_MASK)
}

/// A validated command byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    register: u8,
    transfer: TransferType,
}

impl Command {
    /// Builds a command selecting `register`, failing for addresses above 0x1F.
    pub fn new(register: u8, transfer: TransferType) -> Result<Command, Error> {
        if register > MAX_REGISTER {
            log::error!("Register address {:#04x} does not fit a command byte", register);
            return Err(Error::InvalidRegister(register));
        }
        Ok(Command { register, transfer })
    }

    /// Interprets a raw byte as a command. Returns `None` if the command flag is
    /// clear or the transfer type is undefined.
    pub fn from_byte(byte: u8) -> Option<Command> {
        if byte & CMD_BIT == 0 {
            return None;
        }
        TransferType::from_bits(byte >> TYPE_SHIFT).map(|transfer| Command {
            register: byte & ADDR_MASK,
            transfer,
        })
    }

    /// The register address or special-function code, 0 to 31.
    pub fn register(self) -> u8 {
        self.register
    }

    /// The transfer type applied to the bytes after this command.
    pub fn transfer_type(self) -> TransferType {
        self.transfer
    }

    /// Returns the command byte as sent on the bus, with the command flag set.
    pub fn byte(self) -> u8 {
        build_command(self.register, self.transfer)
    }
}

/// Validates an auto-increment read of `len` bytes starting at `start` and
/// returns the command that begins it.
pub(crate) fn block_command(start: u8, len: usize) -> Result<Command, Error> {
    let command = Command::new(start, TransferType::AutoIncrement)?;
    if len == 0 || usize::from(start) + len > usize::from(MAX_REGISTER) + 1 {
        log::error!(
            "Auto-increment read of {} bytes from {:#04x} leaves the register map",
            len,
            start
        );
        return Err(Error::InvalidTransfer { start, len });
    }
    Ok(command)
}

impl From<Command> for u8 {
    fn from(command: Command) -> u8 {
        command.byte()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: [TransferType; 3] = [
        TransferType::Repeat,
        TransferType::AutoIncrement,
        TransferType::SpecialFunction,
    ];

    #[test]
    fn every_address_and_type_packs_into_its_field() {
        for register in 0..=MAX_REGISTER {
            for transfer in ALL_TYPES {
                let byte = build_command(register, transfer);
                assert_eq!(byte & 0x80, 0x80, "command flag missing for {:#04x}", byte);
                assert_eq!((byte >> 5) & 0b11, transfer.bits());
                assert_eq!(byte & 0x1F, register);
            }
        }
    }

    #[test]
    fn known_command_bytes() {
        assert_eq!(build_command(0x00, TransferType::Repeat), 0x80);
        assert_eq!(build_command(0x14, TransferType::AutoIncrement), 0xB4);
        assert_eq!(build_command(0x06, TransferType::SpecialFunction), 0xE6);
    }

    #[test]
    fn unchecked_builder_truncates_high_address_bits() {
        assert_eq!(build_command(0x21, TransferType::Repeat), 0x81);
    }

    #[test]
    fn checked_builder_rejects_out_of_range_addresses() {
        assert_eq!(
            Command::new(0x20, TransferType::Repeat),
            Err(Error::InvalidRegister(0x20))
        );
        assert_eq!(
            Command::new(0xFF, TransferType::AutoIncrement),
            Err(Error::InvalidRegister(0xFF))
        );
    }

    #[test]
    fn command_unpacks_to_its_fields() {
        let command = Command::new(0x1B, TransferType::AutoIncrement).unwrap();
        assert_eq!(command.register(), 0x1B);
        assert_eq!(command.transfer_type(), TransferType::AutoIncrement);
        assert_eq!(u8::from(command), 0xBB);
    }

    #[test]
    fn block_reads_must_stay_inside_the_register_map() {
        assert_eq!(block_command(0x14, 8).map(u8::from), Ok(0xB4));
        assert!(block_command(0x1E, 2).is_ok());
        assert_eq!(
            block_command(0x1E, 3),
            Err(Error::InvalidTransfer { start: 0x1E, len: 3 })
        );
        assert_eq!(
            block_command(0x14, 0),
            Err(Error::InvalidTransfer { start: 0x14, len: 0 })
        );
        assert_eq!(block_command(0x20, 1), Err(Error::InvalidRegister(0x20)));
    }

    #[test]
    fn from_byte_rejects_data_and_undefined_types() {
        assert_eq!(Command::from_byte(0x14), None);
        assert_eq!(Command::from_byte(0b1100_0001), None);
        let command = Command::from_byte(0x80).unwrap();
        assert_eq!(command.transfer_type(), TransferType::Repeat);
        assert_eq!(command.register(), 0x00);
        let command = Command::from_byte(0xB4).unwrap();
        assert_eq!(command.transfer_type(), TransferType::AutoIncrement);
        assert_eq!(command.register(), 0x14);
    }
}
