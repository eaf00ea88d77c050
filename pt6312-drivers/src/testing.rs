//! Host-side bus doubles
//!
//! [`Analyzer`] watches the three lines the way a logic analyzer would:
//! bits are latched on rising clock edges while strobe is low and the
//! data line is driven, and every strobe-low period becomes one frame of
//! bytes. Key and switch reads are served from a scripted bit queue.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use pt6312_hal::{Direction, GpioPort, Level, Line};

struct Capture {
    strobe: Level,
    clock: Level,
    data: Level,
    data_dir: Direction,
    configured: Vec<(Line, Direction)>,
    pull_up_requests: usize,
    frames: Vec<Vec<u8>>,
    current: Vec<u8>,
    shift: u8,
    bits: u8,
    partial_frames: usize,
    stray_clocks: usize,
    input: VecDeque<bool>,
    data_reads: usize,
}

impl Capture {
    fn new() -> Self {
        Self {
            strobe: Level::High,
            clock: Level::High,
            data: Level::Low,
            data_dir: Direction::Output,
            configured: Vec::new(),
            pull_up_requests: 0,
            frames: Vec::new(),
            current: Vec::new(),
            shift: 0,
            bits: 0,
            partial_frames: 0,
            stray_clocks: 0,
            input: VecDeque::new(),
            data_reads: 0,
        }
    }

    fn strobe_edge(&mut self, level: Level) {
        match (self.strobe, level) {
            (Level::High, Level::Low) => {
                self.current.clear();
                self.shift = 0;
                self.bits = 0;
            }
            (Level::Low, Level::High) => {
                if self.bits != 0 {
                    self.partial_frames += 1;
                }
                let frame = core::mem::take(&mut self.current);
                self.frames.push(frame);
            }
            _ => {}
        }
        self.strobe = level;
    }

    fn clock_edge(&mut self, level: Level) {
        let rising = self.clock == Level::Low && level == Level::High;
        self.clock = level;
        if !rising || self.data_dir != Direction::Output {
            return;
        }
        if self.strobe == Level::High {
            self.stray_clocks += 1;
            return;
        }
        if self.data.is_high() {
            self.shift |= 1 << self.bits;
        }
        self.bits += 1;
        if self.bits == 8 {
            self.current.push(self.shift);
            self.shift = 0;
            self.bits = 0;
        }
    }
}

/// Recording [`GpioPort`]; clones share the same capture
#[derive(Clone)]
pub struct Analyzer(Rc<RefCell<Capture>>);

impl Analyzer {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Capture::new())))
    }

    /// Completed frames, oldest first
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.0.borrow().frames.clone()
    }

    /// Completed frames, clearing the record
    pub fn take_frames(&self) -> Vec<Vec<u8>> {
        core::mem::take(&mut self.0.borrow_mut().frames)
    }

    /// Queue bytes for the controller to shift out, LSB first
    pub fn script_bytes(&self, bytes: &[u8]) {
        let mut capture = self.0.borrow_mut();
        for &byte in bytes {
            for bit in 0..8 {
                capture.input.push_back(byte & (1 << bit) != 0);
            }
        }
    }

    pub fn level(&self, line: Line) -> Level {
        let capture = self.0.borrow();
        match line {
            Line::Strobe => capture.strobe,
            Line::Clock => capture.clock,
            Line::Data => capture.data,
        }
    }

    pub fn data_direction(&self) -> Direction {
        self.0.borrow().data_dir
    }

    pub fn configured(&self) -> Vec<(Line, Direction)> {
        self.0.borrow().configured.clone()
    }

    pub fn pull_up_requests(&self) -> usize {
        self.0.borrow().pull_up_requests
    }

    pub fn data_reads(&self) -> usize {
        self.0.borrow().data_reads
    }

    /// Frames closed in the middle of a byte
    pub fn partial_frames(&self) -> usize {
        self.0.borrow().partial_frames
    }

    /// Clock pulses outside any frame
    pub fn stray_clocks(&self) -> usize {
        self.0.borrow().stray_clocks
    }
}

impl GpioPort for Analyzer {
    fn configure(&mut self, line: Line, direction: Direction) {
        let mut capture = self.0.borrow_mut();
        capture.configured.push((line, direction));
        if line == Line::Data {
            capture.data_dir = direction;
        }
    }

    fn write(&mut self, line: Line, level: Level) {
        let mut capture = self.0.borrow_mut();
        match line {
            Line::Strobe => capture.strobe_edge(level),
            Line::Clock => capture.clock_edge(level),
            Line::Data if capture.data_dir == Direction::Input => {
                if level.is_high() {
                    capture.pull_up_requests += 1;
                }
            }
            Line::Data => capture.data = level,
        }
    }

    fn read(&mut self, line: Line) -> Level {
        let mut capture = self.0.borrow_mut();
        match line {
            Line::Strobe => capture.strobe,
            Line::Clock => capture.clock,
            Line::Data if capture.data_dir == Direction::Input => {
                capture.data_reads += 1;
                // Released line floats high through the pull-up
                capture.input.pop_front().unwrap_or(true).into()
            }
            Line::Data => capture.data,
        }
    }
}

/// [`DelayNs`] that only adds up the requested time
#[derive(Clone, Default)]
pub struct MockDelay(Rc<Cell<u64>>);

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total requested delay in nanoseconds
    pub fn elapsed_ns(&self) -> u64 {
        self.0.get()
    }

    pub fn reset(&self) {
        self.0.set(0);
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.set(self.0.get() + u64::from(ns));
    }
}
