//! Key matrix and switch decoding
//!
//! A key scan returns three bytes holding six time-multiplexed samples of
//! the four key lines. The last byte read ends up in the lowest 8 bits;
//! its low nibble is the most recent sample.

use pt6312_protocol::{KEY_BYTES, SWITCH_MASK};

/// Key lines per sample
pub const KEY_LINES: u8 = 4;

/// Samples per scan
pub const SAMPLES: u8 = 6;

const SAMPLE_MASK: u32 = 0x0F;

/// Raw 24-bit key scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyScan(u32);

impl KeyScan {
    pub fn new(raw: u32) -> Self {
        Self(raw & 0x00FF_FFFF)
    }

    /// Assemble a scan from the bytes in the order they were read
    pub fn from_bytes(bytes: [u8; KEY_BYTES]) -> Self {
        let raw = bytes
            .iter()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
        Self::new(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    /// Sample `n` (0 = most recent), four key bits
    pub fn sample(self, n: u8) -> u8 {
        if n >= SAMPLES {
            return 0;
        }
        ((self.0 >> (u32::from(n) * 4)) & SAMPLE_MASK) as u8
    }

    /// Is any key set in any sample?
    pub fn any(self) -> bool {
        self.0 != 0
    }

    /// Number of the first pressed key in the most recent sample
    ///
    /// Key lines 1..=3 are reported by their bit number, checked from
    /// the lowest. Returns 0 when nothing is pressed.
    ///
    /// Line 0 alone reports 4. A scan that starts at line 1 has no
    /// defined result for it, so 4 is a stand-in chosen by this driver.
    /// No other line ever reports 4.
    pub fn pressed_key(self) -> u8 {
        let sample = self.sample(0);
        if sample == 0 {
            return 0;
        }
        (1..KEY_LINES)
            .find(|&line| sample & (1 << line) != 0)
            .unwrap_or(KEY_LINES)
    }
}

/// Raw switch byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Switches(u8);

impl Switches {
    pub fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Byte as read from the controller
    pub fn raw(self) -> u8 {
        self.0
    }

    /// Switch bits SW1..SW4 (bit 0 = SW1)
    pub fn bits(self) -> u8 {
        self.0 & SWITCH_MASK
    }

    /// State of switch `n` (0-based)
    pub fn is_on(self, n: u8) -> bool {
        n < 4 && self.bits() & (1 << n) != 0
    }
}
