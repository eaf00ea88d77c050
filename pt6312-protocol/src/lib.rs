//! PT6312 Command Protocol
//!
//! This crate defines the command bytes understood by the PT6312 family
//! (PT6312, ET16312N, AD16312, HT16512). Every transmission starts with a
//! command byte whose two high bits select the command class:
//!
//! ```text
//! ┌────┬────┬──────────────────────────────┐
//! │ b7 │ b6 │ class                        │
//! ├────┼────┼──────────────────────────────┤
//! │ 0  │ 0  │ mode set (grids/segments)    │
//! │ 0  │ 1  │ data set (target, r/w, addr) │
//! │ 1  │ 0  │ display control              │
//! │ 1  │ 1  │ address set                  │
//! └────┴────┴──────────────────────────────┘
//! ```
//!
//! Bytes are shifted out least-significant bit first. Display data
//! follows an address-set command inside the same strobe frame.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod command;
pub mod payload;

pub use command::{AddressMode, Command, CommandError, DataTarget, GridMode};
pub use payload::{led_payload, LED_MASK, SWITCH_MASK};

/// Highest display memory address (22 bytes: 0x00..=0x15)
pub const MAX_ADDRESS: u8 = 0x15;

/// Size of the display memory in bytes
pub const DISPLAY_MEMORY_SIZE: usize = MAX_ADDRESS as usize + 1;

/// Address bits of an address-set command
pub const ADDRESS_MASK: u8 = 0x1F;

/// Brightness bits of a display-control command
pub const BRIGHTNESS_MASK: u8 = 0x07;

/// Brightest setting (pulse width 14/16)
pub const MAX_BRIGHTNESS: u8 = 7;

/// Number of bytes returned by a key scan
pub const KEY_BYTES: usize = 3;
