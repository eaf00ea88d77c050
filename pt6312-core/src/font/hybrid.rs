//! Font for 16-segment grids (hybrid wiring)
//!
//! Segment layout of the low byte:
//!
//! ```text
//!      0x80
//!    ┌──────┐
//! 0x20│      │0x40
//!    ├─0x10─┤
//! 0x04│      │0x08
//!    └──────┘
//!      0x02       0x01 = colon / point
//! ```
//!
//! The high byte adds the center and diagonal strokes: `0x01` upper
//! vertical, `0x02` lower vertical, `0x04`/`0x08` upper diagonals (left,
//! right), `0x10`/`0x20` lower diagonals (left, right).
//!
//! Grids that share two characters only receive the low byte of each.

use super::{index, Glyph, FONT_LEN};

const fn g(high: u8, low: u8) -> Glyph {
    Glyph::new(high, low)
}

const BLANK: Glyph = Glyph::BLANK;

#[rustfmt::skip]
static FONT: [Glyph; FONT_LEN] = [
    // 0x20: space ! " # $ % & '
    BLANK,          BLANK,          g(0x00, 0x60),  BLANK,
    g(0x03, 0xBA),  BLANK,          BLANK,          g(0x00, 0x20),
    // 0x28: ( ) * + , - . /
    g(0x00, 0xA6),  g(0x00, 0xCA),  g(0x3F, 0x10),  g(0x03, 0x10),
    g(0x10, 0x00),  g(0x00, 0x10),  BLANK,          g(0x18, 0x00),
    // 0x30: 0 1 2 3 4 5 6 7
    g(0x00, 0xEE),  g(0x00, 0x48),  g(0x00, 0xD6),  g(0x00, 0xDA),
    g(0x00, 0x78),  g(0x00, 0xBA),  g(0x00, 0xBE),  g(0x00, 0xC8),
    // 0x38: 8 9 : ; < = > ?
    g(0x00, 0xFE),  g(0x00, 0xFA),  g(0x00, 0x01),  BLANK,
    g(0x28, 0x00),  g(0x00, 0x12),  g(0x24, 0x00),  g(0x02, 0xD0),
    // 0x40: @ A B C D E F G
    BLANK,          g(0x00, 0xFC),  g(0x03, 0xDA),  g(0x00, 0xA6),
    g(0x03, 0xCA),  g(0x00, 0xB6),  g(0x00, 0xB4),  g(0x00, 0xAE),
    // 0x48: H I J K L M N O
    g(0x00, 0x7C),  g(0x03, 0x82),  g(0x00, 0x4E),  g(0x28, 0x34),
    g(0x00, 0x26),  g(0x0C, 0x6C),  g(0x24, 0x6C),  g(0x00, 0xEE),
    // 0x50: P Q R S T U V W
    g(0x00, 0xF4),  g(0x20, 0xEE),  g(0x20, 0xF4),  g(0x00, 0xBA),
    g(0x03, 0x80),  g(0x00, 0x6E),  g(0x18, 0x24),  g(0x30, 0x6C),
    // 0x58: X Y Z [ \ ] ^ _
    g(0x3C, 0x00),  g(0x0E, 0x00),  g(0x18, 0x82),  g(0x00, 0xA6),
    g(0x24, 0x00),  g(0x00, 0xCA),  g(0x30, 0x00),  g(0x00, 0x02),
    // 0x60: `
    g(0x04, 0x00),
];

/// Glyph of a character, blank when not covered
pub fn glyph(c: u8) -> Glyph {
    index(c).map_or(Glyph::BLANK, |i| FONT[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        let expected = [0xEE, 0x48, 0xD6, 0xDA, 0x78, 0xBA, 0xBE, 0xC8, 0xFE, 0xFA];
        for (digit, low) in (b'0'..=b'9').zip(expected) {
            assert_eq!(glyph(digit), Glyph::new(0x00, low), "digit {}", digit as char);
        }
    }

    #[test]
    fn test_sixteen_segment_letters() {
        assert_eq!(glyph(b'T'), Glyph::new(0x03, 0x80));
        assert_eq!(glyph(b'X'), Glyph::new(0x3C, 0x00));
        assert_eq!(glyph(b'`'), Glyph::new(0x04, 0x00));
    }

    #[test]
    fn test_out_of_range_is_blank() {
        assert_eq!(glyph(b'a'), Glyph::BLANK);
        assert_eq!(glyph(0x7F), Glyph::BLANK);
        assert_eq!(glyph(b'\n'), Glyph::BLANK);
        assert_eq!(glyph(b' '), Glyph::BLANK);
    }
}
