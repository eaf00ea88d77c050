//! GPIO pin abstractions
//!
//! Provides the three-line port the controller bus is bit-banged over,
//! plus single-pin traits that chip-specific code can implement instead.

/// One of the three bus lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Strobe / chip select. Low while a transmission is in progress.
    Strobe,
    /// Serial clock. Data is latched on the rising edge.
    Clock,
    /// Bidirectional data line
    Data,
}

/// Line direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Input,
    Output,
}

/// Logic level of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Returns true for [`Level::High`]
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// The bus as seen by the driver
///
/// Writing [`Level::High`] to a line configured as [`Direction::Input`]
/// requests its pull-up, as on AVR ports. Implementations without
/// configurable pull-ups may ignore such writes.
pub trait GpioPort {
    /// Set the direction of a line
    fn configure(&mut self, line: Line, direction: Direction);

    /// Drive a line to a level
    fn write(&mut self, line: Line, level: Level);

    /// Sample the current level of a line
    fn read(&mut self, line: Line) -> Level;
}

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Pin that switches between input and output at runtime
///
/// The data line is driven by the host for commands and display data,
/// and by the controller while keys and switches are read back.
pub trait FlexPin: OutputPin + InputPin {
    /// Stop driving the pin and sample it instead
    fn set_as_input(&mut self);

    /// Drive the pin again
    fn set_as_output(&mut self);
}

/// [`GpioPort`] built from three individual pins
///
/// Strobe and clock are output-only; reading them returns the last level
/// written. Configuring them is a no-op.
pub struct ThreeWirePins<STB, CLK, DIO> {
    strobe: STB,
    clock: CLK,
    data: DIO,
    data_is_input: bool,
}

impl<STB, CLK, DIO> ThreeWirePins<STB, CLK, DIO>
where
    STB: OutputPin,
    CLK: OutputPin,
    DIO: FlexPin,
{
    /// Bundle the three bus pins
    pub fn new(strobe: STB, clock: CLK, data: DIO) -> Self {
        Self {
            strobe,
            clock,
            data,
            data_is_input: false,
        }
    }

    /// Give the pins back
    pub fn release(self) -> (STB, CLK, DIO) {
        (self.strobe, self.clock, self.data)
    }
}

impl<STB, CLK, DIO> GpioPort for ThreeWirePins<STB, CLK, DIO>
where
    STB: OutputPin,
    CLK: OutputPin,
    DIO: FlexPin,
{
    fn configure(&mut self, line: Line, direction: Direction) {
        if line != Line::Data {
            return;
        }
        match direction {
            Direction::Input => {
                self.data.set_as_input();
                self.data_is_input = true;
            }
            Direction::Output => {
                self.data.set_as_output();
                self.data_is_input = false;
            }
        }
    }

    fn write(&mut self, line: Line, level: Level) {
        match line {
            Line::Strobe => self.strobe.set_state(level.is_high()),
            Line::Clock => self.clock.set_state(level.is_high()),
            // A high write on an input only asks for the pull-up, which
            // FlexPin implementations apply in set_as_input.
            Line::Data if self.data_is_input => {}
            Line::Data => self.data.set_state(level.is_high()),
        }
    }

    fn read(&mut self, line: Line) -> Level {
        match line {
            Line::Strobe => self.strobe.is_set_high().into(),
            Line::Clock => self.clock.is_set_high().into(),
            Line::Data => self.data.is_high().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
        input: bool,
        external: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                input: false,
                external: false,
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> bool {
            if self.input {
                self.external
            } else {
                self.high
            }
        }
    }

    impl FlexPin for MockPin {
        fn set_as_input(&mut self) {
            self.input = true;
        }

        fn set_as_output(&mut self) {
            self.input = false;
        }
    }

    #[test]
    fn test_level_from_bool() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(Level::High.is_high());
        assert!(!Level::Low.is_high());
    }

    #[test]
    fn test_three_wire_outputs() {
        let mut port = ThreeWirePins::new(MockPin::new(), MockPin::new(), MockPin::new());

        port.write(Line::Strobe, Level::High);
        port.write(Line::Clock, Level::Low);
        port.write(Line::Data, Level::High);

        assert_eq!(port.read(Line::Strobe), Level::High);
        assert_eq!(port.read(Line::Clock), Level::Low);
        assert_eq!(port.read(Line::Data), Level::High);
    }

    #[test]
    fn test_data_direction_switch() {
        let mut port = ThreeWirePins::new(MockPin::new(), MockPin::new(), MockPin::new());
        port.write(Line::Data, Level::Low);

        port.configure(Line::Data, Direction::Input);
        // Pull-up request must not drive the line
        port.write(Line::Data, Level::High);
        let (_, _, mut data) = port.release();
        assert!(data.input);
        assert!(!data.is_set_high());

        data.external = true;
        let mut port = ThreeWirePins::new(MockPin::new(), MockPin::new(), data);
        port.configure(Line::Data, Direction::Input);
        assert_eq!(port.read(Line::Data), Level::High);

        port.configure(Line::Data, Direction::Output);
        port.write(Line::Data, Level::Low);
        assert_eq!(port.read(Line::Data), Level::Low);
    }

    #[test]
    fn test_configure_ignores_output_only_lines() {
        let mut port = ThreeWirePins::new(MockPin::new(), MockPin::new(), MockPin::new());
        port.configure(Line::Strobe, Direction::Input);
        port.configure(Line::Clock, Direction::Input);
        port.write(Line::Strobe, Level::High);
        assert_eq!(port.read(Line::Strobe), Level::High);
    }
}
