// DEFAULT_ADDRESS is the fixed 7-bit I2C address of the TCS34721/TCS34725 parts.
// The TCS34723/TCS34727 variants answer on 0x39.
pub const DEFAULT_ADDRESS: u8 = 0x29;

// ENABLE_REGISTER holds the power, RGBC, wait and interrupt enable bits (R/W).
pub const ENABLE_REGISTER: u8 = 0x00;

// ATIME_REGISTER holds the RGBC integration time (R/W).
pub const ATIME_REGISTER: u8 = 0x01;

// WTIME_REGISTER holds the wait time between RGBC cycles (R/W).
pub const WTIME_REGISTER: u8 = 0x03;

// Clear channel interrupt thresholds, low and high byte each (R/W).
pub const AILTL_REGISTER: u8 = 0x04;
pub const AILTH_REGISTER: u8 = 0x05;
pub const AIHTL_REGISTER: u8 = 0x06;
pub const AIHTH_REGISTER: u8 = 0x07;

// PERS_REGISTER is the interrupt persistence filter (R/W).
pub const PERS_REGISTER: u8 = 0x0C;

// CONFIG_REGISTER carries the WLONG bit (R/W).
pub const CONFIG_REGISTER: u8 = 0x0D;

// CONTROL_REGISTER carries the analog gain (R/W).
pub const CONTROL_REGISTER: u8 = 0x0F;

// ID_REGISTER identifies the part (read only).
pub const ID_REGISTER: u8 = 0x12;

// STATUS_REGISTER reports AVALID and AINT (read only).
pub const STATUS_REGISTER: u8 = 0x13;

// Channel data, low byte first (read only).
pub const CDATAL_REGISTER: u8 = 0x14;
pub const CDATAH_REGISTER: u8 = 0x15;
pub const RDATAL_REGISTER: u8 = 0x16;
pub const RDATAH_REGISTER: u8 = 0x17;
pub const GDATAL_REGISTER: u8 = 0x18;
pub const GDATAH_REGISTER: u8 = 0x19;
pub const BDATAL_REGISTER: u8 = 0x1A;
pub const BDATAH_REGISTER: u8 = 0x1B;

// Highest address reachable through the 5-bit address field of a command byte.
pub const MAX_REGISTER: u8 = 0x1F;

// ID register values.
pub const TCS34725_ID: u8 = 0x44;
pub const TCS34727_ID: u8 = 0x4D;

// STATUS register bits.
pub const STATUS_AVALID: u8 = 1 << 0;
pub const STATUS_AINT: u8 = 1 << 4;

// CONFIG register bits.
pub const CONFIG_WLONG: u8 = 1 << 1;

// CONTROL register gain field.
pub const CONTROL_AGAIN_MASK: u8 = 0b0000_0011;
