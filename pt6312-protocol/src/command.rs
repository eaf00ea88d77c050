//! Command byte encoding and decoding
//!
//! Four command classes, selected by the two high bits:
//! - mode set (`0x00`): grid/segment split of the display memory
//! - data set (`0x40`): data target, read/write, address increment
//! - display control (`0x80`): on/off and brightness
//! - address set (`0xC0`): display memory address for following data

use crate::{ADDRESS_MASK, BRIGHTNESS_MASK, MAX_ADDRESS};

const CLASS_MASK: u8 = 0xC0;

const MODE_SET_CMD: u8 = 0x00;
const DATA_SET_CMD: u8 = 0x40;
const DISPLAY_CTRL_CMD: u8 = 0x80;
const ADDRESS_SET_CMD: u8 = 0xC0;

const MODE_MASK: u8 = 0x07;
const TARGET_MASK: u8 = 0x03;
const ADDR_FIXED: u8 = 0x04;
const MODE_TEST: u8 = 0x08;
const DISPLAY_ON: u8 = 0x08;

/// Errors that can occur while decoding a command byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// A reserved bit of the command class is set
    ReservedBits,
    /// Address-set beyond the end of display memory
    AddressOutOfRange,
}

/// Grid/segment split selected by the mode-set command
///
/// The controller has 22 bytes of display memory shared between grids
/// and segments: more grids leave fewer segments per grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GridMode {
    Grids4Segments16,
    Grids5Segments16,
    Grids6Segments16,
    Grids7Segments15,
    Grids8Segments14,
    Grids9Segments13,
    Grids10Segments12,
    Grids11Segments11,
}

impl GridMode {
    /// Mode for a display with `grids` digits (4..=11)
    pub fn from_grids(grids: u8) -> Option<Self> {
        match grids {
            4 => Some(GridMode::Grids4Segments16),
            5 => Some(GridMode::Grids5Segments16),
            6 => Some(GridMode::Grids6Segments16),
            7 => Some(GridMode::Grids7Segments15),
            8 => Some(GridMode::Grids8Segments14),
            9 => Some(GridMode::Grids9Segments13),
            10 => Some(GridMode::Grids10Segments12),
            11 => Some(GridMode::Grids11Segments11),
            _ => None,
        }
    }

    /// Decode the low 3 bits of a mode-set command
    pub fn from_bits(bits: u8) -> Self {
        match bits & MODE_MASK {
            0 => GridMode::Grids4Segments16,
            1 => GridMode::Grids5Segments16,
            2 => GridMode::Grids6Segments16,
            3 => GridMode::Grids7Segments15,
            4 => GridMode::Grids8Segments14,
            5 => GridMode::Grids9Segments13,
            6 => GridMode::Grids10Segments12,
            _ => GridMode::Grids11Segments11,
        }
    }

    /// Low 3 bits of the mode-set command
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Number of grids driven
    pub fn grids(self) -> u8 {
        self.bits() + 4
    }

    /// Number of segments per grid
    pub fn segments(self) -> u8 {
        match self {
            GridMode::Grids4Segments16 | GridMode::Grids5Segments16 | GridMode::Grids6Segments16 => {
                16
            }
            other => 18 - other.bits(),
        }
    }
}

/// Where data-set traffic goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataTarget {
    /// Write display memory
    Display,
    /// Write the LED port
    Leds,
    /// Read the key matrix
    Keys,
    /// Read the switch inputs
    Switches,
}

impl DataTarget {
    fn bits(self) -> u8 {
        match self {
            DataTarget::Display => 0x00,
            DataTarget::Leds => 0x01,
            DataTarget::Keys => 0x02,
            DataTarget::Switches => 0x03,
        }
    }

    fn from_bits(bits: u8) -> Self {
        match bits & TARGET_MASK {
            0x00 => DataTarget::Display,
            0x01 => DataTarget::Leds,
            0x02 => DataTarget::Keys,
            _ => DataTarget::Switches,
        }
    }

    /// Returns true if the controller drives the data line afterwards
    pub fn is_read(self) -> bool {
        matches!(self, DataTarget::Keys | DataTarget::Switches)
    }
}

/// Address pointer behaviour after each data byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressMode {
    Increment,
    Fixed,
}

/// A controller command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Select the grid/segment split
    ModeSet(GridMode),
    /// Select data target and addressing
    DataSet {
        target: DataTarget,
        addressing: AddressMode,
        test_mode: bool,
    },
    /// Display on/off and brightness (0..=7, masked)
    DisplayControl { on: bool, brightness: u8 },
    /// Set the display memory address (masked to 5 bits)
    AddressSet(u8),
}

impl Command {
    /// Normal mode, auto-increment, write display memory
    pub const fn write_display() -> Self {
        Command::DataSet {
            target: DataTarget::Display,
            addressing: AddressMode::Increment,
            test_mode: false,
        }
    }

    /// Normal mode, write the LED port
    pub const fn write_leds() -> Self {
        Command::DataSet {
            target: DataTarget::Leds,
            addressing: AddressMode::Increment,
            test_mode: false,
        }
    }

    /// Normal mode, read the key matrix
    pub const fn read_keys() -> Self {
        Command::DataSet {
            target: DataTarget::Keys,
            addressing: AddressMode::Increment,
            test_mode: false,
        }
    }

    /// Normal mode, read the switch inputs
    pub const fn read_switches() -> Self {
        Command::DataSet {
            target: DataTarget::Switches,
            addressing: AddressMode::Increment,
            test_mode: false,
        }
    }

    /// Display on at the given brightness
    pub const fn display_on(brightness: u8) -> Self {
        Command::DisplayControl {
            on: true,
            brightness,
        }
    }

    /// Display off (brightness bits cleared)
    pub const fn display_off() -> Self {
        Command::DisplayControl {
            on: false,
            brightness: 0,
        }
    }

    /// Encode to the byte sent on the wire
    pub fn to_byte(self) -> u8 {
        match self {
            Command::ModeSet(mode) => MODE_SET_CMD | mode.bits(),
            Command::DataSet {
                target,
                addressing,
                test_mode,
            } => {
                let mut byte = DATA_SET_CMD | target.bits();
                if addressing == AddressMode::Fixed {
                    byte |= ADDR_FIXED;
                }
                if test_mode {
                    byte |= MODE_TEST;
                }
                byte
            }
            Command::DisplayControl { on, brightness } => {
                let on_bit = if on { DISPLAY_ON } else { 0 };
                DISPLAY_CTRL_CMD | on_bit | (brightness & BRIGHTNESS_MASK)
            }
            Command::AddressSet(address) => ADDRESS_SET_CMD | (address & ADDRESS_MASK),
        }
    }

    /// Decode a command byte
    pub fn from_byte(byte: u8) -> Result<Self, CommandError> {
        match byte & CLASS_MASK {
            MODE_SET_CMD => {
                if byte & !MODE_MASK != 0 {
                    return Err(CommandError::ReservedBits);
                }
                Ok(Command::ModeSet(GridMode::from_bits(byte)))
            }
            DATA_SET_CMD => {
                if byte & 0x30 != 0 {
                    return Err(CommandError::ReservedBits);
                }
                let addressing = if byte & ADDR_FIXED != 0 {
                    AddressMode::Fixed
                } else {
                    AddressMode::Increment
                };
                Ok(Command::DataSet {
                    target: DataTarget::from_bits(byte),
                    addressing,
                    test_mode: byte & MODE_TEST != 0,
                })
            }
            DISPLAY_CTRL_CMD => {
                if byte & 0x30 != 0 {
                    return Err(CommandError::ReservedBits);
                }
                Ok(Command::DisplayControl {
                    on: byte & DISPLAY_ON != 0,
                    brightness: byte & BRIGHTNESS_MASK,
                })
            }
            _ => {
                if byte & 0x20 != 0 {
                    return Err(CommandError::ReservedBits);
                }
                let address = byte & ADDRESS_MASK;
                if address > MAX_ADDRESS {
                    return Err(CommandError::AddressOutOfRange);
                }
                Ok(Command::AddressSet(address))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mode_set_bytes() {
        assert_eq!(Command::ModeSet(GridMode::Grids4Segments16).to_byte(), 0x00);
        assert_eq!(Command::ModeSet(GridMode::Grids7Segments15).to_byte(), 0x03);
        assert_eq!(Command::ModeSet(GridMode::Grids11Segments11).to_byte(), 0x07);
    }

    #[test]
    fn test_grid_mode_table() {
        for grids in 4..=11 {
            let mode = GridMode::from_grids(grids).unwrap();
            assert_eq!(mode.grids(), grids);
            assert_eq!(mode.bits(), grids - 4);
        }
        assert_eq!(GridMode::from_grids(3), None);
        assert_eq!(GridMode::from_grids(12), None);

        assert_eq!(GridMode::Grids6Segments16.segments(), 16);
        assert_eq!(GridMode::Grids7Segments15.segments(), 15);
        assert_eq!(GridMode::Grids11Segments11.segments(), 11);
    }

    #[test]
    fn test_data_set_bytes() {
        assert_eq!(Command::write_display().to_byte(), 0x40);
        assert_eq!(Command::write_leds().to_byte(), 0x41);
        assert_eq!(Command::read_keys().to_byte(), 0x42);
        assert_eq!(Command::read_switches().to_byte(), 0x43);

        let fixed = Command::DataSet {
            target: DataTarget::Display,
            addressing: AddressMode::Fixed,
            test_mode: true,
        };
        assert_eq!(fixed.to_byte(), 0x4C);
    }

    #[test]
    fn test_display_control_bytes() {
        assert_eq!(Command::display_on(7).to_byte(), 0x8F);
        assert_eq!(Command::display_on(0).to_byte(), 0x88);
        assert_eq!(Command::display_off().to_byte(), 0x80);
        // Out-of-range brightness is masked, never rejected
        assert_eq!(Command::display_on(0x0B).to_byte(), 0x8B);
    }

    #[test]
    fn test_address_set_bytes() {
        assert_eq!(Command::AddressSet(0).to_byte(), 0xC0);
        assert_eq!(Command::AddressSet(0x15).to_byte(), 0xD5);
        assert_eq!(Command::AddressSet(0xFF).to_byte(), 0xDF);
    }

    #[test]
    fn test_decode_rejects_reserved_bits() {
        assert_eq!(Command::from_byte(0x08), Err(CommandError::ReservedBits));
        assert_eq!(Command::from_byte(0x50), Err(CommandError::ReservedBits));
        assert_eq!(Command::from_byte(0x90), Err(CommandError::ReservedBits));
        assert_eq!(Command::from_byte(0xE0), Err(CommandError::ReservedBits));
        assert_eq!(Command::from_byte(0xD6), Err(CommandError::AddressOutOfRange));
    }

    #[test]
    fn test_decode_known_bytes() {
        assert_eq!(Command::from_byte(0x42), Ok(Command::read_keys()));
        assert_eq!(Command::from_byte(0x8F), Ok(Command::display_on(7)));
        assert_eq!(Command::from_byte(0xC4), Ok(Command::AddressSet(4)));
        assert_eq!(
            Command::from_byte(0x05),
            Ok(Command::ModeSet(GridMode::Grids9Segments13))
        );
    }

    #[test]
    fn test_read_targets() {
        assert!(DataTarget::Keys.is_read());
        assert!(DataTarget::Switches.is_read());
        assert!(!DataTarget::Display.is_read());
        assert!(!DataTarget::Leds.is_read());
    }

    proptest! {
        #[test]
        fn test_brightness_always_masked(brightness in any::<u8>()) {
            let byte = Command::display_on(brightness).to_byte();
            prop_assert_eq!(byte, 0x88 | (brightness & 0x07));
        }

        #[test]
        fn test_decoded_bytes_encode_back(byte in any::<u8>()) {
            if let Ok(command) = Command::from_byte(byte) {
                prop_assert_eq!(command.to_byte(), byte);
            }
        }
    }
}
