const PON: u8 = 1 << 0;
const AEN: u8 = 1 << 1;
const WEN: u8 = 1 << 3;
const AIEN: u8 = 1 << 4;

/// The writable bits of the ENABLE register.
///
/// Bit 2 and bits 7-5 are reserved and always encode as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnableFlags {
    /// PON, activates the internal oscillator.
    pub power_on: bool,
    /// AEN, runs the RGBC ADC.
    pub rgbc_enable: bool,
    /// WEN, inserts the WTIME wait between RGBC cycles.
    pub wait_enable: bool,
    /// AIEN, lets the clear channel thresholds raise an interrupt.
    pub interrupt_enable: bool,
}

impl EnableFlags {
    /// Encodes the flags as an ENABLE register value.
    ///
    /// # Returns
    ///
    /// The register byte, with the reserved bits cleared.
    pub fn to_byte(self) -> u8 {
        let mut byte = 0;
        if self.power_on {
            byte |= PON;
        }
        if self.rgbc_enable {
            byte |= AEN;
        }
        if self.wait_enable {
            byte |= WEN;
        }
        if self.interrupt_enable {
            byte |= AIEN;
        }
        byte
    }

    /// Decodes an ENABLE register value, ignoring reserved bits.
    pub fn from_byte(byte: u8) -> EnableFlags {
        EnableFlags {
            power_on: byte & PON != 0,
            rgbc_enable: byte & AEN != 0,
            wait_enable: byte & WEN != 0,
            interrupt_enable: byte & AIEN != 0,
        }
    }
}

impl From<EnableFlags> for u8 {
    fn from(flags: EnableFlags) -> u8 {
        flags.to_byte()
    }
}
