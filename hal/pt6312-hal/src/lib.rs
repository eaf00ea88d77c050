//! PT6312 Hardware Abstraction Layer
//!
//! This crate defines the small GPIO capability the VFD driver needs to
//! bit-bang the controller's 3-wire bus. Platform code implements
//! [`GpioPort`] (directly, or through [`ThreeWirePins`]) and the driver
//! never touches chip registers itself.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  pt6312-drivers (transport + Vfd)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pt6312-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ ThreeWirePins │       │ custom port   │
//! │ + embedded-hal│       │ (register IO, │
//! │   adapters    │       │  simulators)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::GpioPort`] - configure/write/read the three bus lines
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::FlexPin`] - single pins
//!
//! Timing is not abstracted here: the driver takes any
//! [`embedded_hal::delay::DelayNs`] implementation.

#![no_std]
#![deny(unsafe_code)]

pub mod embedded;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use embedded::{OpenDrain, PushPull};
pub use gpio::{Direction, FlexPin, GpioPort, InputPin, Level, Line, OutputPin, ThreeWirePins};

/// Delay capability used for bus timing
pub use embedded_hal::delay::DelayNs;
