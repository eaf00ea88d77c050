//! Busy-spinner animation
//!
//! Six segments (11..=16) of one grid form a circle. One segment is lit
//! at full duty per frame; the three segments behind it are lit on 1/2,
//! 1/5 and 1/12 of the refreshes, which reads as a fading tail.
//!
//! ```text
//! tick ──► delay_count == ticks_per_refresh ? ──► compute byte
//!                                                   │
//!                     loop_count += 1 ◄─────────────┘
//!                     loop_count == frames_per_step ? ──► next frame
//! ```

use crate::config::SpinnerConfig;

/// Frames in one turn
pub const FRAMES: u8 = 6;

/// Segment lit by frame 1
pub const FIRST_SEGMENT: u8 = 11;

/// Duty-cycle divisors of the three trailing segments
pub const TRAIL_DIVISORS: [u8; 3] = [2, 5, 12];

/// Which trailing segments are lit for a given refresh count
///
/// Entry `k` covers the segment `k + 1` places behind the head.
pub fn gates(loop_count: u8) -> [bool; 3] {
    TRAIL_DIVISORS.map(|d| loop_count % d == 0)
}

/// Bit of a spinner segment within the grid's high byte
fn segment_bit(segment: u8) -> u8 {
    1 << (segment - 9)
}

/// Spinner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Spinner {
    config: SpinnerConfig,
    frame: u8,
    loop_count: u8,
    delay_count: u8,
}

impl Spinner {
    pub fn new(config: SpinnerConfig) -> Self {
        Self {
            config,
            frame: 1,
            loop_count: 0,
            delay_count: 1,
        }
    }

    /// Restart from frame 1
    pub fn reset(&mut self) {
        self.frame = 1;
        self.loop_count = 0;
        self.delay_count = 1;
    }

    /// Current frame (1..=6)
    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Refreshes spent on the current frame
    pub fn loop_count(&self) -> u8 {
        self.loop_count
    }

    pub fn delay_count(&self) -> u8 {
        self.delay_count
    }

    pub fn config(&self) -> &SpinnerConfig {
        &self.config
    }

    /// Segment byte for the current frame and refresh count
    pub fn frame_byte(&self) -> u8 {
        let head = FIRST_SEGMENT + self.frame - 1;
        let mut byte = segment_bit(head);

        for (behind, lit) in (1u8..).zip(gates(self.loop_count)) {
            if !lit {
                continue;
            }
            let trail = head - behind;
            if trail >= FIRST_SEGMENT {
                byte |= segment_bit(trail);
            } else if self.config.wrap_trail {
                byte |= segment_bit(trail + FRAMES);
            }
        }

        byte
    }

    /// Advance by one tick
    ///
    /// Returns the byte to write when this tick refreshes the spinner
    /// segments. The display command refresh is due on every tick either
    /// way.
    pub fn tick(&mut self) -> Option<u8> {
        let byte = if self.delay_count >= self.config.ticks_per_refresh {
            let byte = self.frame_byte();
            self.delay_count = 0;
            self.loop_count += 1;
            if self.loop_count >= self.config.frames_per_step {
                self.frame = self.frame % FRAMES + 1;
                self.loop_count = 0;
            }
            Some(byte)
        } else {
            None
        };

        self.delay_count = self.delay_count.saturating_add(1);
        byte
    }
}
