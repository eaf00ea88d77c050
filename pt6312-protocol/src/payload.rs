//! Data bytes that follow LED and switch commands

/// LED port bits (LED1..LED4)
pub const LED_MASK: u8 = 0x0F;

/// Switch input bits (SW1..SW4)
pub const SWITCH_MASK: u8 = 0x0F;

/// Encode the LED port byte for a mask of lit LEDs
///
/// Bit 0 is LED 1. The port is active-low, so every requested LED is
/// cleared and the result is limited to the four LED bits.
pub fn led_payload(lit: u8) -> u8 {
    !lit & LED_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_payload_inverts() {
        assert_eq!(led_payload(0b0101), 0b1010);
        assert_eq!(led_payload(0), 0x0F);
        assert_eq!(led_payload(0x0F), 0);
    }

    #[test]
    fn test_led_payload_ignores_high_bits() {
        assert_eq!(led_payload(0xF0), 0x0F);
        assert_eq!(led_payload(0xA1), 0x0E);
    }
}
