//! Hybrid wiring renderer
//!
//! The leading grids each show one 16-segment character (low byte, then
//! high byte). The following grids share two 8-segment characters: only
//! the low byte of each glyph is used and the pair goes out second
//! character first.

use crate::config::ColonIndicator;
use crate::font::hybrid::glyph;

use super::Rendered;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HybridRenderer {
    pub grids: u8,
    pub single_char_grids: u8,
    pub colon: Option<ColonIndicator>,
}

impl HybridRenderer {
    /// Encode `text` from grid `position` up to the last grid
    pub fn render(&self, text: &[u8], position: u8, colon: bool) -> Rendered {
        let mut out = Rendered::default();
        let mut grid = position.max(1);
        let mut i = 0;

        while i < text.len() && grid <= self.grids {
            if grid <= self.single_char_grids {
                let g = glyph(text[i]);
                i += 1;
                if !(out.push(g.low) && out.push(g.high)) {
                    break;
                }
            } else {
                let mut first = glyph(text[i]).low;
                let mut second = text.get(i + 1).map_or(0, |&c| glyph(c).low);
                i += 2;

                if let Some(indicator) = self.colon.filter(|c| colon && c.grid == grid) {
                    if indicator.segment > 8 {
                        first |= 1 << (indicator.segment - 9);
                    } else {
                        second |= 1 << (indicator.segment - 1);
                    }
                }

                if !(out.push(second) && out.push(first)) {
                    break;
                }
            }
            grid += 1;
            out.grids += 1;
        }

        out
    }
}
