//! Paired wiring renderer
//!
//! Every grid holds two characters, one byte each. A `:` in the text is
//! not a character: it sets the colon bit of the previous one and every
//! later character moves one slot to the left.
//!
//! The slot before the last one is wired one bit off: its byte is shifted
//! right and the dropped bit 0 reappears as bit 7 of the last slot.
//! Slots are computed left to right and transmitted last slot first.
//! A write never runs past the last grid: the text is cut to the grids
//! left after the cursor, the same way `max_chars` cuts it.
//!
//! The slot arithmetic below is reference behavior checked against real
//! panels. Its handling of colons near the end of the text and of texts
//! with several colons is irregular but must be kept as is: the panel
//! output depends on it.

use pt6312_protocol::DISPLAY_MEMORY_SIZE;

use crate::font::paired::{glyph, COLON_BIT};

use super::Rendered;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PairedRenderer {
    /// Characters rendered at most
    pub max_chars: u8,
    pub grids: u8,
    pub bytes_per_grid: u8,
}

/// Slot buffer addressed with signed indices; anything out of range is
/// dropped on write and reads as blank.
struct Slots {
    bytes: [u8; DISPLAY_MEMORY_SIZE],
    len: isize,
}

impl Slots {
    fn slot(&mut self, i: isize) -> Option<&mut u8> {
        if (0..self.len).contains(&i) {
            self.bytes.get_mut(i as usize)
        } else {
            None
        }
    }

    fn set(&mut self, i: isize, value: u8) {
        if let Some(b) = self.slot(i) {
            *b = value;
        }
    }

    fn or(&mut self, i: isize, value: u8) {
        if let Some(b) = self.slot(i) {
            *b |= value;
        }
    }

    fn shift_right(&mut self, i: isize) {
        if let Some(b) = self.slot(i) {
            *b >>= 1;
        }
    }

    fn get(&self, i: isize) -> u8 {
        if (0..self.len).contains(&i) {
            self.bytes[i as usize]
        } else {
            0
        }
    }
}

impl PairedRenderer {
    /// Display bytes between grid `position` and the last grid
    pub fn room(&self, position: u8) -> usize {
        let grids_left = self.grids.saturating_sub(position.max(1)) + 1;
        usize::from(grids_left) * usize::from(self.bytes_per_grid)
    }

    /// Encode `text` for a write starting at grid `position`
    pub fn render(&self, text: &[u8], position: u8) -> Rendered {
        let visible = text.iter().filter(|&&c| c != b':').count();
        let len = visible
            .min(usize::from(self.max_chars))
            .min(self.room(position))
            .min(DISPLAY_MEMORY_SIZE) as isize;

        let char_at = |k: isize| -> u8 {
            usize::try_from(k)
                .ok()
                .and_then(|k| text.get(k).copied())
                .unwrap_or(b' ')
        };
        let font = |k: isize| glyph(char_at(k));

        let mut slots = Slots {
            bytes: [0; DISPLAY_MEMORY_SIZE],
            len,
        };
        let mut colon_at: isize = 0;
        let mut carry = false;

        for i in 0..len {
            if colon_at > 3 || carry {
                if carry {
                    slots.or(i, font(i));
                    carry = false;
                }
                if colon_at > 3 {
                    slots.set(i, font(i + 2));
                }
            } else if colon_at > 0 {
                slots.set(i, font(i + 1));
            } else {
                slots.set(i, font(i));
            }

            if char_at(i) == b':' {
                if i > 4 {
                    slots.or(i - 2, COLON_BIT);
                    slots.set(i - 1, font(i + 1));
                } else {
                    slots.or(i - 1, COLON_BIT);
                    slots.set(i, font(i + 1));
                }
                colon_at = i;
            }

            if i == len - 2 {
                if slots.get(i) & 0x01 != 0 {
                    slots.set(i + 1, COLON_BIT);
                    carry = true;
                }
                slots.shift_right(i);
            } else if colon_at >= len - 2 {
                slots.shift_right(i - 1);
                slots.or(i, COLON_BIT);
            }
        }

        let mut out = Rendered::default();
        for i in (0..len).rev() {
            if !out.push(slots.get(i)) {
                break;
            }
        }

        let per_grid = usize::from(self.bytes_per_grid.max(1));
        out.grids = out.bytes.len().div_ceil(per_grid) as u8;
        out
    }
}
