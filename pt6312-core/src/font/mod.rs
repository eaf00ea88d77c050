//! Character and icon tables
//!
//! Both character tables cover the printable range `0x20..=0x60`
//! (space through backtick). Anything outside the range renders blank.
//! Each wiring has its own table: the segment order of a 16-segment
//! grid and of a shared 8-segment grid have nothing in common.

pub mod hybrid;
pub mod icons;
pub mod paired;

pub use icons::Icon;

/// First character covered by the tables
pub const FIRST_CHAR: u8 = 0x20;

/// Last character covered by the tables
pub const LAST_CHAR: u8 = 0x60;

/// Entries per table
pub const FONT_LEN: usize = (LAST_CHAR - FIRST_CHAR) as usize + 1;

/// Segment pattern of one 16-segment character
///
/// `low` holds segments 1..=8 and is transmitted first, `high` holds
/// segments 9..=16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    pub high: u8,
    pub low: u8,
}

impl Glyph {
    /// No segment lit
    pub const BLANK: Glyph = Glyph { high: 0, low: 0 };

    pub const fn new(high: u8, low: u8) -> Self {
        Self { high, low }
    }

    /// Bytes in transmission order (low first)
    pub fn bytes(self) -> [u8; 2] {
        [self.low, self.high]
    }
}

/// Table index of a character, if the tables cover it
pub(crate) fn index(c: u8) -> Option<usize> {
    if (FIRST_CHAR..=LAST_CHAR).contains(&c) {
        Some(usize::from(c - FIRST_CHAR))
    } else {
        None
    }
}
