//! Display session state
//!
//! Everything the driver has to remember between two bus operations:
//! the cursor, the brightness, the spinner counters, the memory mirror
//! and where the controller's address pointer currently is.

use crate::config::{ConfigError, DisplayConfig};
use crate::cursor::Cursor;
use crate::memory::DisplayMemory;
use crate::render::{Rendered, Renderer};
use crate::spinner::Spinner;
use pt6312_protocol::{GridMode, BRIGHTNESS_MASK};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Session {
    config: DisplayConfig,
    mode: GridMode,
    renderer: Renderer,
    /// Logical write position
    pub cursor: Cursor,
    /// Busy-spinner counters
    pub spinner: Spinner,
    /// What the display memory holds
    pub memory: DisplayMemory,
    brightness: u8,
    lit: bool,
    address: Option<u8>,
}

impl Session {
    /// Validate `config` and start with the cursor on grid 1
    pub fn new(config: DisplayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mode = config.grid_mode().ok_or(ConfigError::GridCount)?;

        Ok(Self {
            mode,
            renderer: Renderer::from_config(&config),
            cursor: Cursor::new(config.grids, config.bytes_per_grid),
            spinner: Spinner::new(config.spinner),
            memory: DisplayMemory::new(),
            brightness: config.brightness,
            lit: false,
            address: None,
            config,
        })
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Mode-set value for the configured grid count
    pub fn mode(&self) -> GridMode {
        self.mode
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Store a brightness, masked to 0..=7
    pub fn set_brightness(&mut self, brightness: u8) -> u8 {
        self.brightness = brightness & BRIGHTNESS_MASK;
        self.brightness
    }

    /// Was the display last switched on?
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn set_lit(&mut self, lit: bool) {
        self.lit = lit;
    }

    /// Controller address pointer, if known
    pub fn address_pointer(&self) -> Option<u8> {
        self.address
    }

    /// An address-set command was sent
    pub fn address_set(&mut self, address: u8) {
        self.address = Some(address);
    }

    /// The pointer position can no longer be trusted
    pub fn forget_address(&mut self) {
        self.address = None;
    }

    /// Does the pointer disagree with the cursor?
    pub fn needs_address(&self) -> bool {
        self.address != Some(self.cursor.address())
    }

    /// Prepare one display data byte for sending
    ///
    /// Records it in the mirror at the pointer, merges the icon bits and
    /// moves the pointer on, like the controller does.
    pub fn stage_data(&mut self, byte: u8) -> u8 {
        match self.address {
            Some(address) => {
                self.address = Some(address.wrapping_add(1));
                self.memory.write(address, byte)
            }
            None => byte,
        }
    }

    /// Encode text at the cursor
    pub fn render(&self, text: &[u8], colon: bool) -> Rendered {
        self.renderer.render(text, self.cursor.position(), colon)
    }

    /// Move the cursor past a rendered write
    pub fn advance(&mut self, rendered: &Rendered) -> u8 {
        if rendered.grids == 0 {
            return self.cursor.position();
        }
        self.cursor.advance(rendered.grids)
    }
}
