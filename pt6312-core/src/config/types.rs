//! Configuration type definitions
//!
//! These types describe one physical display: how many grids it has, how
//! its segments are wired to the controller memory, and how the driver
//! paces the bus.

use pt6312_protocol::{GridMode, DISPLAY_MEMORY_SIZE, MAX_ADDRESS, MAX_BRIGHTNESS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest grid count the controller can drive
pub const MAX_GRIDS: u8 = 11;

/// Smallest grid count the controller can drive
pub const MIN_GRIDS: u8 = 4;

/// Errors reported by [`DisplayConfig::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Grid count outside 4..=11
    GridCount,
    /// Bytes per grid is neither 1 nor 2, or not 2 for hybrid wiring
    BytesPerGrid,
    /// Grids times bytes per grid exceeds the 22-byte display memory
    MemoryOverflow,
    /// Default brightness above 7
    Brightness,
    /// Colon indicator on a missing grid or segment
    ColonPosition,
    /// More single-character grids than grids
    SingleCharGrids,
    /// Paired wiring character limit outside 1..=22
    MaxChars,
    /// Spinner address beyond display memory
    SpinnerAddress,
    /// Spinner frame or refresh divisor of zero
    SpinnerCadence,
}

/// How characters are wired to grids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Wiring {
    /// Leading grids hold one 16-segment character, the rest hold two
    /// 8-segment characters with an optional colon segment.
    #[default]
    Hybrid,
    /// Every grid holds two 8-segment characters. A `:` in the text sets
    /// the colon segment of the preceding character instead of taking a
    /// position of its own.
    Paired,
}

/// Position of the colon indicator segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColonIndicator {
    /// Grid carrying the colon (1-based)
    pub grid: u8,
    /// Segment number within the grid (1..=16)
    pub segment: u8,
}

/// Busy-spinner animation cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpinnerConfig {
    /// Display memory address of the byte holding segments 9..=16
    pub address: u8,
    /// Refreshes spent on one frame before the next segment lights
    pub frames_per_step: u8,
    /// Ticks between two refreshes (1 or 2 in practice)
    pub ticks_per_refresh: u8,
    /// Let the fading trail wrap from segment 11 back to 16
    pub wrap_trail: bool,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            address: 1,
            frames_per_step: 70,
            ticks_per_refresh: 2,
            wrap_trail: true,
        }
    }
}

impl SpinnerConfig {
    /// Ticks spent on one frame
    pub fn ticks_per_step(&self) -> u32 {
        u32::from(self.frames_per_step) * u32::from(self.ticks_per_refresh)
    }

    /// Ticks for a full turn of the six frames
    pub fn ticks_per_turn(&self) -> u32 {
        6 * self.ticks_per_step()
    }
}

/// Bus timing
///
/// One time unit of the protocol is a microsecond: each clock phase is
/// held for half a unit and the strobe settles for a full unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BusTiming {
    /// Hold time of each clock phase (ns)
    pub half_period_ns: u32,
    /// Strobe and data-line settle time (ns)
    pub settle_ns: u32,
    /// Controller power-up wait before the first command (ms)
    pub startup_ms: u32,
}

impl Default for BusTiming {
    fn default() -> Self {
        Self {
            half_period_ns: 500,
            settle_ns: 1_000,
            startup_ms: 500,
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Number of grids (digits)
    pub grids: u8,
    /// Display memory bytes per grid
    pub bytes_per_grid: u8,
    /// Brightness applied at initialization (0..=7)
    pub brightness: u8,
    /// Character wiring
    pub wiring: Wiring,
    /// Hybrid wiring: number of leading one-character grids
    pub single_char_grids: u8,
    /// Paired wiring: characters rendered at most
    pub max_chars: u8,
    /// Colon indicator segment, if the display has one
    pub colon: Option<ColonIndicator>,
    /// Busy-spinner cadence
    pub spinner: SpinnerConfig,
    /// Bus timing
    pub timing: BusTiming,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::hybrid(4)
    }
}

impl DisplayConfig {
    /// Hybrid wiring: two one-character grids, then two characters per
    /// grid, colon on the last grid.
    pub fn hybrid(grids: u8) -> Self {
        Self {
            grids,
            bytes_per_grid: 2,
            brightness: MAX_BRIGHTNESS,
            wiring: Wiring::Hybrid,
            single_char_grids: 2,
            max_chars: grids.saturating_mul(2),
            colon: Some(ColonIndicator {
                grid: grids,
                segment: 1,
            }),
            spinner: SpinnerConfig::default(),
            timing: BusTiming::default(),
        }
    }

    /// Paired wiring: two characters per grid on every grid, one-byte
    /// spinner refresh.
    pub fn paired(grids: u8) -> Self {
        Self {
            wiring: Wiring::Paired,
            single_char_grids: 0,
            colon: None,
            spinner: SpinnerConfig {
                ticks_per_refresh: 1,
                ..SpinnerConfig::default()
            },
            ..Self::hybrid(grids)
        }
    }

    /// Mode-set value for the configured grid count
    pub fn grid_mode(&self) -> Option<GridMode> {
        GridMode::from_grids(self.grids)
    }

    /// Display memory used by the grids
    pub fn memory_len(&self) -> usize {
        usize::from(self.grids) * usize::from(self.bytes_per_grid)
    }

    /// Check the configuration against the controller's limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_mode().is_none() {
            return Err(ConfigError::GridCount);
        }
        if !matches!(self.bytes_per_grid, 1 | 2)
            || (self.wiring == Wiring::Hybrid && self.bytes_per_grid != 2)
        {
            return Err(ConfigError::BytesPerGrid);
        }
        if self.memory_len() > DISPLAY_MEMORY_SIZE {
            return Err(ConfigError::MemoryOverflow);
        }
        if self.brightness > MAX_BRIGHTNESS {
            return Err(ConfigError::Brightness);
        }
        if let Some(colon) = self.colon {
            if colon.grid == 0 || colon.grid > self.grids || !(1..=16).contains(&colon.segment) {
                return Err(ConfigError::ColonPosition);
            }
        }
        if self.single_char_grids > self.grids {
            return Err(ConfigError::SingleCharGrids);
        }
        if self.max_chars == 0 || usize::from(self.max_chars) > DISPLAY_MEMORY_SIZE {
            return Err(ConfigError::MaxChars);
        }
        if self.spinner.address > MAX_ADDRESS {
            return Err(ConfigError::SpinnerAddress);
        }
        if self.spinner.frames_per_step == 0 || self.spinner.ticks_per_refresh == 0 {
            return Err(ConfigError::SpinnerCadence);
        }
        Ok(())
    }
}
