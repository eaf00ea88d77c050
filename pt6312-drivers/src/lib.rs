//! PT6312 driver implementations
//!
//! This crate ties the board-agnostic logic of `pt6312-core` to a real
//! bus:
//!
//! - [`bus`]: the bit-banged 3-wire serial transport
//! - [`vfd`]: the display driver exposing the command surface
//!
//! The bus has a single master and no locking. Callers must keep every
//! driver call free of preemption by other bus users.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bus;
pub mod vfd;

#[cfg(test)]
mod testing;

pub use bus::BitBangBus;
pub use vfd::Vfd;
