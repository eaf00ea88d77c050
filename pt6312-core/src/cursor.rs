//! Cursor-to-address model
//!
//! The cursor is a grid number in `1..=N`. Out-of-range requests are
//! clamped, never reported:
//!
//! | request   | result |
//! |-----------|--------|
//! | `0`       | `N`    |
//! | `1..=N`   | as is  |
//! | `N + 1`   | `1`    |
//! | `> N + 1` | `N`    |

/// Logical write position on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    position: u8,
    grids: u8,
    bytes_per_grid: u8,
}

impl Cursor {
    /// Cursor on grid 1
    pub fn new(grids: u8, bytes_per_grid: u8) -> Self {
        Self {
            position: 1,
            grids: grids.max(1),
            bytes_per_grid,
        }
    }

    /// Apply the clamp table to a requested position
    pub fn clamp(&self, position: u8) -> u8 {
        let last = self.grids;
        match position {
            0 => last,
            p if p <= last => p,
            p if p == last.saturating_add(1) => 1,
            _ => last,
        }
    }

    /// Move to `position` (clamped) and return the new position
    pub fn set(&mut self, position: u8) -> u8 {
        self.position = self.clamp(position);
        self.position
    }

    /// Move forward by `grids`, clamping the result
    pub fn advance(&mut self, grids: u8) -> u8 {
        self.set(self.position.saturating_add(grids))
    }

    /// Current grid (1-based)
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Configured grid count
    pub fn grids(&self) -> u8 {
        self.grids
    }

    /// Is the cursor on the last grid?
    pub fn at_last_grid(&self) -> bool {
        self.position == self.grids
    }

    /// Display memory address of the current grid
    pub fn address(&self) -> u8 {
        self.address_of(self.position)
    }

    /// Display memory address of a grid (1-based, unclamped)
    pub fn address_of(&self, position: u8) -> u8 {
        position.saturating_sub(1).saturating_mul(self.bytes_per_grid)
    }
}
