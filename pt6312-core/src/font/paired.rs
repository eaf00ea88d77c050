//! Font for grids shared by two 7-segment characters (paired wiring)
//!
//! Each character owns one memory byte. Bit 7 is not part of the digit:
//! it drives the colon segment, so the `:` entry only sets that bit.

use super::{index, FONT_LEN};

/// Colon / point segment bit
pub const COLON_BIT: u8 = 0x80;

#[rustfmt::skip]
static FONT: [u8; FONT_LEN] = [
    // 0x20: space ! " # $ % & '
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 0x28: ( ) * + , - . /
    0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00,
    // 0x30: 0 1 2 3 4 5 6 7
    0x77, 0x24, 0x6B, 0x6D, 0x3C, 0x5D, 0x5F, 0x64,
    // 0x38: 8 9 : ; < = > ?
    0x7F, 0x7D, 0x80, 0x00, 0x00, 0x09, 0x00, 0x00,
    // 0x40: @ A B C D E F G
    0x00, 0x7E, 0x1F, 0x53, 0x2F, 0x5B, 0x5A, 0x5F,
    // 0x48: H I J K L M N O
    0x1E, 0x24, 0x25, 0x00, 0x13, 0x0E, 0x76, 0x77,
    // 0x50: P Q R S T U V W
    0x7A, 0x7C, 0x6E, 0x5D, 0x1B, 0x07, 0x37, 0x38,
    // 0x58: X Y Z [ \ ] ^ _
    0x3E, 0x3D, 0x6B, 0x53, 0x00, 0x65, 0x00, 0x01,
    // 0x60: `
    0x00,
];

/// Segment byte of a character, blank when not covered
pub fn glyph(c: u8) -> u8 {
    index(c).map_or(0, |i| FONT[i])
}
