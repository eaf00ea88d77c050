//! Board-agnostic display logic for PT6312 VFD controllers
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Configuration type definitions and validation
//! - Cursor-to-address model
//! - Font and icon tables for both supported display wirings
//! - String renderers producing the bytes to transmit
//! - Busy-spinner animation state machine
//! - Key and switch sample decoding
//! - Display memory mirror used for icon overlays

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod cursor;
pub mod font;
pub mod input;
pub mod memory;
pub mod render;
pub mod session;
pub mod spinner;

pub use config::{BusTiming, ColonIndicator, ConfigError, DisplayConfig, SpinnerConfig, Wiring};
pub use cursor::Cursor;
pub use font::Icon;
pub use input::{KeyScan, Switches};
pub use memory::DisplayMemory;
pub use render::{Rendered, Renderer};
pub use session::Session;
pub use spinner::Spinner;
