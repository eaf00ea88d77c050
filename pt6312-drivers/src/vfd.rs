//! VFD display driver
//!
//! [`Vfd`] owns the bus and the [`Session`] state. Every public method is
//! one logical bus operation: it opens the frames it needs and closes
//! them before returning, except the cursor calls that explicitly leave
//! a frame open for the data that follows.

use embedded_hal::delay::DelayNs;
use pt6312_core::{ConfigError, DisplayConfig, Icon, KeyScan, Session, Switches};
use pt6312_hal::GpioPort;
use pt6312_protocol::{led_payload, Command, ADDRESS_MASK, DISPLAY_MEMORY_SIZE, KEY_BYTES};

use crate::bus::BitBangBus;

/// Time each segment stays lit during [`Vfd::segment_walk`]
pub const SEGMENT_WALK_MS: u32 = 500;

/// Longest number [`Vfd::write_number`] renders
const MAX_NUMBER_DIGITS: usize = 10;

/// PT6312 display driver
pub struct Vfd<P, D> {
    bus: BitBangBus<P, D>,
    session: Session,
}

impl<P: GpioPort, D: DelayNs> Vfd<P, D> {
    /// Create a driver; nothing is sent until [`Vfd::initialize`]
    pub fn new(port: P, delay: D, config: DisplayConfig) -> Result<Self, ConfigError> {
        let timing = config.timing;
        let session = Session::new(config)?;
        Ok(Self {
            bus: BitBangBus::new(port, delay, timing),
            session,
        })
    }

    /// Power-up sequence: idle lines, wait, then mode, display on and
    /// data-write mode. The cursor goes to grid 1.
    pub fn initialize(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "VFD init: {} grids, brightness {}",
            self.session.config().grids,
            self.session.brightness()
        );

        self.bus.init();
        self.refresh();
        self.session.cursor.set(1);
        self.session.forget_address();
    }

    /// Re-send mode, display-on and data-write commands
    ///
    /// The controller blanks the screen if these are not repeated while
    /// the spinner is running.
    pub fn refresh(&mut self) {
        self.bus.send(Command::ModeSet(self.session.mode()), true);
        self.bus
            .send(Command::display_on(self.session.brightness()), true);
        self.bus.send(Command::write_display(), true);
        self.session.set_lit(true);
    }

    /// Switch the display on at `brightness` (masked to 0..=7)
    pub fn set_brightness(&mut self, brightness: u8) {
        let brightness = self.session.set_brightness(brightness);

        #[cfg(feature = "defmt")]
        defmt::debug!("VFD brightness {}", brightness);

        self.bus.send(Command::display_on(brightness), true);
        self.session.set_lit(true);
    }

    pub fn brightness(&self) -> u8 {
        self.session.brightness()
    }

    /// Switch the display on at the current brightness
    pub fn display_on(&mut self) {
        self.bus
            .send(Command::display_on(self.session.brightness()), true);
        self.session.set_lit(true);
    }

    /// Blank the display; memory is kept
    pub fn display_off(&mut self) {
        self.bus.send(Command::display_off(), true);
        self.session.set_lit(false);
    }

    pub fn is_display_on(&self) -> bool {
        self.session.is_lit()
    }

    /// Turn every segment off and forget text and icons
    ///
    /// The cursor is left on the last grid.
    pub fn clear(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("VFD clear");

        self.session.memory.clear();
        self.fill(0x00);
    }

    /// Turn every segment on; the cursor is left on the last grid
    pub fn light_all_segments(&mut self) {
        self.session.memory.clear();
        self.fill(0xFF);
    }

    fn fill(&mut self, byte: u8) {
        self.set_cursor_position(1, false);
        for _ in 0..self.session.config().memory_len() {
            let out = self.session.stage_data(byte);
            self.bus.write_byte(out, false);
        }
        self.bus.end_frame();
        let last = self.session.config().grids;
        self.session.cursor.set(last);
    }

    /// Move the cursor and point the controller at its grid
    ///
    /// `position` is clamped: 0 selects the last grid, one past the last
    /// grid wraps to the first, anything further selects the last. With
    /// `end_frame` false the frame stays open for the data that follows.
    /// Returns the grid selected.
    pub fn set_cursor_position(&mut self, position: u8, end_frame: bool) -> u8 {
        let position = self.session.cursor.set(position);
        let address = self.session.cursor.address();
        self.bus.send(Command::AddressSet(address), end_frame);
        self.session.address_set(address);
        position
    }

    /// Cursor to grid 1, frame left open
    pub fn home(&mut self) {
        self.set_cursor_position(1, false);
    }

    /// Current grid (1-based)
    pub fn cursor(&self) -> u8 {
        self.session.cursor.position()
    }

    /// Write text at the cursor
    pub fn write_string(&mut self, text: &str) {
        self.write_text(text.as_bytes(), false);
    }

    /// Write text at the cursor, lighting the colon indicator if asked
    pub fn write_string_with_colon(&mut self, text: &str, colon: bool) {
        self.write_text(text.as_bytes(), colon);
    }

    /// Move to `position`, then write text
    pub fn write_string_at(&mut self, position: u8, text: &str) {
        self.set_cursor_position(position, false);
        self.write_text(text.as_bytes(), false);
    }

    /// Write `value` right-aligned and zero-padded to `digits` digits
    ///
    /// Only the least significant `digits` digits are shown.
    pub fn write_number(&mut self, value: u32, digits: u8, colon: bool) {
        let digits = usize::from(digits).clamp(1, MAX_NUMBER_DIGITS);
        let mut buf = [b'0'; MAX_NUMBER_DIGITS];
        let mut rest = value;
        for slot in buf[..digits].iter_mut().rev() {
            *slot = b'0' + (rest % 10) as u8;
            rest /= 10;
        }
        self.write_text(&buf[..digits], colon);
    }

    fn write_text(&mut self, text: &[u8], colon: bool) {
        let rendered = self.session.render(text, colon);

        if !rendered.bytes.is_empty() {
            // A new frame must open with a command byte
            if !self.bus.is_frame_open() || self.session.needs_address() {
                let address = self.session.cursor.address();
                self.bus.send(Command::AddressSet(address), false);
                self.session.address_set(address);
            }
            for &byte in rendered.bytes.iter() {
                let out = self.session.stage_data(byte);
                self.bus.write_byte(out, false);
            }
        }

        self.bus.end_frame();
        self.session.advance(&rendered);
    }

    /// Write one byte at a raw memory address, bypassing the cursor
    pub fn write_byte_at(&mut self, address: u8, byte: u8) {
        let address = address & ADDRESS_MASK;
        self.bus.send(Command::AddressSet(address), false);
        self.session.address_set(address);
        let out = self.session.stage_data(byte);
        self.bus.write_byte(out, true);
    }

    /// Restart the spinner from its first frame
    pub fn spinner_reset(&mut self) {
        self.session.spinner.reset();
    }

    /// Advance the spinner by one tick
    ///
    /// Writes the spinner byte when this tick is a refresh, then always
    /// re-sends the display commands. The cursor is not moved.
    pub fn spinner_tick(&mut self) {
        if let Some(byte) = self.session.spinner.tick() {
            let address = self.session.spinner.config().address;
            self.write_byte_at(address, byte);
        }
        self.refresh();
    }

    /// Turn an icon on or off, keeping the text under it
    pub fn set_icon(&mut self, icon: Icon, on: bool) {
        let bytes_per_grid = self.session.config().bytes_per_grid;
        if let Some((address, _)) = self.session.memory.set_icon(icon, bytes_per_grid, on) {
            self.rewrite(address);
        }
    }

    /// Turn every icon off
    pub fn clear_icons(&mut self) {
        let mut lit = [false; DISPLAY_MEMORY_SIZE];
        for (address, flag) in (0u8..).zip(lit.iter_mut()) {
            *flag = self.session.memory.icon_bits(address) != 0;
        }
        self.session.memory.clear_icons();

        for (address, _) in (0u8..).zip(lit).filter(|(_, was_lit)| *was_lit) {
            self.rewrite(address);
        }
    }

    fn rewrite(&mut self, address: u8) {
        let byte = self.session.memory.read(address);
        self.bus.send(Command::AddressSet(address), false);
        self.bus.write_byte(byte, true);
        self.session.address_set(address.wrapping_add(1));
    }

    /// Light LEDs; bit 0 is LED 1
    pub fn set_leds(&mut self, mask: u8) {
        #[cfg(feature = "defmt")]
        defmt::debug!("VFD LEDs {=u8:b}", mask);

        self.bus.send(Command::write_leds(), false);
        self.bus.write_byte(led_payload(mask), true);
        self.bus.send(Command::write_display(), true);
    }

    /// Scan the key matrix
    pub fn read_keys(&mut self) -> KeyScan {
        let mut bytes = [0u8; KEY_BYTES];
        self.read_frame(Command::read_keys(), &mut bytes);
        let scan = KeyScan::from_bytes(bytes);

        #[cfg(feature = "defmt")]
        defmt::debug!("VFD keys {=u32:x}", scan.raw());

        scan
    }

    /// Number of the first pressed key, 0 for none
    pub fn pressed_key(&mut self) -> u8 {
        self.read_keys().pressed_key()
    }

    /// Read the switch inputs
    pub fn read_switches(&mut self) -> Switches {
        let mut byte = [0u8; 1];
        self.read_frame(Command::read_switches(), &mut byte);

        #[cfg(feature = "defmt")]
        defmt::debug!("VFD switches {=u8:x}", byte[0]);

        Switches::new(byte[0])
    }

    fn read_frame(&mut self, command: Command, buf: &mut [u8]) {
        self.bus.send(command, false);
        self.bus.listen();
        self.bus.read_into(buf);
        self.bus.drive();
        self.bus.end_frame();
        self.bus.send(Command::write_display(), true);
    }

    /// Light each segment of each grid in turn, clearing after each grid
    pub fn segment_walk(&mut self) {
        let grids = self.session.config().grids;
        let bytes_per_grid = self.session.config().bytes_per_grid;

        for grid in 1..=grids {
            for segment in 0..8 * bytes_per_grid {
                self.set_cursor_position(grid, false);
                for byte in 0..bytes_per_grid {
                    let value = if segment / 8 == byte {
                        1 << (segment % 8)
                    } else {
                        0
                    };
                    let out = self.session.stage_data(value);
                    self.bus.write_byte(out, byte + 1 == bytes_per_grid);
                }
                self.bus.pause_ms(SEGMENT_WALK_MS);
            }
            self.clear();
        }
    }

    /// Send a raw command
    pub fn command(&mut self, command: Command, end_frame: bool) {
        self.bus.send(command, end_frame);
        if let Command::AddressSet(address) = command {
            self.session.address_set(address & ADDRESS_MASK);
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Give the port and delay back
    pub fn release(self) -> (P, D) {
        self.bus.release()
    }
}
