//! Bit-banged 3-wire serial transport
//!
//! ```text
//! STB ‾‾╲____________________________________╱‾‾‾
//! CLK ‾‾‾‾‾╲_╱‾╲_╱‾╲_╱‾  ...  ‾╲_╱‾╲_╱‾‾‾‾‾‾‾‾‾‾‾
//! DIO ─────<b0><b1><b2>  ...  <b6><b7>──────────
//!      settle                          settle  settle
//! ```
//!
//! Strobe low opens a frame and stays low across every byte of one
//! logical operation; a single strobe-high closes it. Bits go out least
//! significant first and are latched by the controller on the rising
//! clock edge. The clock idles high.

use embedded_hal::delay::DelayNs;
use pt6312_core::BusTiming;
use pt6312_hal::{Direction, GpioPort, Level, Line};
use pt6312_protocol::Command;

/// Bus master over a [`GpioPort`]
pub struct BitBangBus<P, D> {
    port: P,
    delay: D,
    timing: BusTiming,
    frame_open: bool,
}

impl<P: GpioPort, D: DelayNs> BitBangBus<P, D> {
    pub fn new(port: P, delay: D, timing: BusTiming) -> Self {
        Self {
            port,
            delay,
            timing,
            frame_open: false,
        }
    }

    /// Drive all lines to idle and wait for the controller to power up
    pub fn init(&mut self) {
        for line in [Line::Strobe, Line::Clock, Line::Data] {
            self.port.configure(line, Direction::Output);
        }
        self.port.write(Line::Strobe, Level::High);
        self.port.write(Line::Clock, Level::High);
        self.frame_open = false;

        self.delay.delay_ms(self.timing.startup_ms);
    }

    fn begin_frame(&mut self) {
        if !self.frame_open {
            self.port.write(Line::Strobe, Level::Low);
            self.delay.delay_ns(self.timing.settle_ns);
            self.frame_open = true;
        }
    }

    /// Close the frame: the controller acts on what it received
    pub fn end_frame(&mut self) {
        self.delay.delay_ns(self.timing.settle_ns);
        self.port.write(Line::Strobe, Level::High);
        self.delay.delay_ns(self.timing.settle_ns);
        self.frame_open = false;
    }

    /// Is strobe held low?
    pub fn is_frame_open(&self) -> bool {
        self.frame_open
    }

    /// Shift one byte out, LSB first, optionally closing the frame
    pub fn write_byte(&mut self, value: u8, end_frame: bool) {
        self.begin_frame();

        #[cfg(feature = "defmt")]
        defmt::trace!("tx {=u8:x}", value);

        for bit in 0..8 {
            self.port.write(Line::Clock, Level::Low);
            self.port.write(Line::Data, Level::from(value & (1 << bit) != 0));
            self.delay.delay_ns(self.timing.half_period_ns);
            self.port.write(Line::Clock, Level::High);
            self.delay.delay_ns(self.timing.half_period_ns);
        }

        if end_frame {
            self.end_frame();
        }
    }

    /// Send a command byte
    pub fn send(&mut self, command: Command, end_frame: bool) {
        self.write_byte(command.to_byte(), end_frame);
    }

    /// Hand the data line to the controller (input with pull-up)
    pub fn listen(&mut self) {
        self.port.configure(Line::Data, Direction::Input);
        self.port.write(Line::Data, Level::High);
        self.delay.delay_ns(self.timing.settle_ns);
    }

    /// Take the data line back
    pub fn drive(&mut self) {
        self.port.configure(Line::Data, Direction::Output);
    }

    /// Clock one byte in, LSB first
    ///
    /// Each bit is sampled half a period after the falling clock edge.
    /// The result starts as all ones and a bit is cleared for every low
    /// sample, so a floating line reads as nothing pressed.
    pub fn read_byte(&mut self) -> u8 {
        let mut value = 0xFF;

        for bit in 0..8 {
            self.port.write(Line::Clock, Level::Low);
            self.delay.delay_ns(self.timing.half_period_ns);
            if !self.port.read(Line::Data).is_high() {
                value &= !(1 << bit);
            }
            self.port.write(Line::Clock, Level::High);
            self.delay.delay_ns(self.timing.half_period_ns);
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("rx {=u8:x}", value);

        value
    }

    /// Fill `buf` with consecutive reads
    pub fn read_into(&mut self, buf: &mut [u8]) {
        for byte in buf.iter_mut() {
            *byte = self.read_byte();
        }
    }

    /// Blocking wait
    pub fn pause_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    pub fn timing(&self) -> &BusTiming {
        &self.timing
    }

    /// Give the port and delay back
    pub fn release(self) -> (P, D) {
        (self.port, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Analyzer, MockDelay};
    use proptest::prelude::*;
    use std::vec;

    fn bus() -> (BitBangBus<Analyzer, MockDelay>, Analyzer, MockDelay) {
        let analyzer = Analyzer::new();
        let delay = MockDelay::new();
        let bus = BitBangBus::new(analyzer.clone(), delay.clone(), BusTiming::default());
        (bus, analyzer, delay)
    }

    #[test]
    fn test_init_idles_lines() {
        let (mut bus, analyzer, delay) = bus();
        bus.init();

        assert_eq!(
            analyzer.configured(),
            vec![
                (Line::Strobe, Direction::Output),
                (Line::Clock, Direction::Output),
                (Line::Data, Direction::Output),
            ]
        );
        assert_eq!(analyzer.level(Line::Strobe), Level::High);
        assert_eq!(analyzer.level(Line::Clock), Level::High);
        assert_eq!(delay.elapsed_ns(), 500_000_000);
        assert!(analyzer.frames().is_empty());
    }

    #[test]
    fn test_lsb_first() {
        let (mut bus, analyzer, _) = bus();
        bus.init();
        bus.write_byte(0xA5, true);
        bus.write_byte(0x01, true);
        assert_eq!(analyzer.frames(), vec![vec![0xA5], vec![0x01]]);
        assert_eq!(analyzer.partial_frames(), 0);
        assert_eq!(analyzer.level(Line::Clock), Level::High);
    }

    #[test]
    fn test_frame_spans_bytes() {
        let (mut bus, analyzer, _) = bus();
        bus.init();
        bus.send(Command::AddressSet(0), false);
        assert!(bus.is_frame_open());
        bus.write_byte(0x12, false);
        bus.write_byte(0x34, false);
        assert!(analyzer.frames().is_empty());

        bus.end_frame();
        assert!(!bus.is_frame_open());
        assert_eq!(analyzer.frames(), vec![vec![0xC0, 0x12, 0x34]]);
        assert_eq!(analyzer.stray_clocks(), 0);
    }

    #[test]
    fn test_byte_timing() {
        let (mut bus, _, delay) = bus();
        bus.init();
        delay.reset();

        bus.write_byte(0x00, true);
        // settle + 8 full clock periods + settle + settle
        assert_eq!(delay.elapsed_ns(), 1_000 + 8 * 1_000 + 2_000);

        delay.reset();
        bus.write_byte(0x00, false);
        bus.write_byte(0x00, false);
        assert_eq!(delay.elapsed_ns(), 1_000 + 2 * 8 * 1_000);
    }

    #[test]
    fn test_read_defaults_high() {
        let (mut bus, analyzer, _) = bus();
        bus.init();
        bus.listen();
        assert_eq!(bus.read_byte(), 0xFF);
        assert_eq!(analyzer.data_reads(), 8);
        assert_eq!(analyzer.pull_up_requests(), 1);
    }

    #[test]
    fn test_read_into_keeps_order() {
        let (mut bus, analyzer, _) = bus();
        bus.init();
        analyzer.script_bytes(&[0x01, 0x80, 0x5A]);
        bus.send(Command::read_keys(), false);
        bus.listen();

        let mut buf = [0u8; 3];
        bus.read_into(&mut buf);
        bus.drive();
        bus.end_frame();

        assert_eq!(buf, [0x01, 0x80, 0x5A]);
        assert_eq!(analyzer.data_direction(), Direction::Output);
        // Read clocks are not captured as host data
        assert_eq!(analyzer.frames(), vec![vec![0x42]]);
    }

    proptest! {
        #[test]
        fn test_write_then_capture(bytes in proptest::collection::vec(any::<u8>(), 1..22)) {
            let (mut bus, analyzer, _) = bus();
            bus.init();
            for &b in &bytes {
                bus.write_byte(b, false);
            }
            bus.end_frame();
            prop_assert_eq!(analyzer.frames(), vec![bytes]);
        }
    }
}
