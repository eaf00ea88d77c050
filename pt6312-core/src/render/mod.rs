//! String renderers
//!
//! A renderer turns text into the display bytes to send after the
//! address-set of the current grid. The two wirings encode text in
//! unrelated ways, so the renderer is picked once from the configuration
//! and never mixed.

pub mod hybrid;
pub mod paired;

use heapless::Vec;
use pt6312_protocol::DISPLAY_MEMORY_SIZE;

use crate::config::{DisplayConfig, Wiring};

pub use hybrid::HybridRenderer;
pub use paired::PairedRenderer;

/// Display bytes produced by one string write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rendered {
    /// Bytes in transmission order, written to consecutive addresses
    pub bytes: Vec<u8, DISPLAY_MEMORY_SIZE>,
    /// Grids the cursor moves forward by
    pub grids: u8,
}

impl Rendered {
    /// Append a byte; returns false once display memory is full
    pub(crate) fn push(&mut self, byte: u8) -> bool {
        self.bytes.push(byte).is_ok()
    }
}

/// Renderer for the configured wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Renderer {
    Hybrid(HybridRenderer),
    Paired(PairedRenderer),
}

impl Renderer {
    pub fn from_config(config: &DisplayConfig) -> Self {
        match config.wiring {
            Wiring::Hybrid => Renderer::Hybrid(HybridRenderer {
                grids: config.grids,
                single_char_grids: config.single_char_grids,
                colon: config.colon,
            }),
            Wiring::Paired => Renderer::Paired(PairedRenderer {
                max_chars: config.max_chars,
                grids: config.grids,
                bytes_per_grid: config.bytes_per_grid,
            }),
        }
    }

    /// Encode `text` for a write starting at grid `position`
    ///
    /// `colon` lights the configured colon indicator; the paired wiring
    /// takes its colons from the text instead and ignores it.
    pub fn render(&self, text: &[u8], position: u8, colon: bool) -> Rendered {
        match self {
            Renderer::Hybrid(r) => r.render(text, position, colon),
            Renderer::Paired(r) => r.render(text, position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_config_picks_wiring() {
        assert!(matches!(
            Renderer::from_config(&DisplayConfig::hybrid(4)),
            Renderer::Hybrid(_)
        ));
        assert!(matches!(
            Renderer::from_config(&DisplayConfig::paired(6)),
            Renderer::Paired(_)
        ));
    }

    proptest! {
        #[test]
        fn test_never_overflows(
            grids in 4u8..=11,
            position in 1u8..=11,
            colon in any::<bool>(),
            text in "[ -~]{0,40}",
        ) {
            let position = position.min(grids);
            for config in [DisplayConfig::hybrid(grids), DisplayConfig::paired(grids)] {
                let rendered = Renderer::from_config(&config).render(text.as_bytes(), position, colon);
                prop_assert!(rendered.bytes.len() <= config.memory_len().max(usize::from(config.max_chars)));
                prop_assert!(rendered.grids <= grids - position + 1);
            }
        }
    }
}
