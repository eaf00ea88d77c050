//! Display memory mirror
//!
//! The controller's display memory cannot be read back, so the driver
//! keeps a copy of what it wrote. Text and icon bits are tracked apart:
//! icons are ORed into every byte sent to their address, and text writes
//! never clear them.

use pt6312_protocol::DISPLAY_MEMORY_SIZE;

use crate::font::Icon;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayMemory {
    text: [u8; DISPLAY_MEMORY_SIZE],
    icons: [u8; DISPLAY_MEMORY_SIZE],
}

impl Default for DisplayMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayMemory {
    pub const fn new() -> Self {
        Self {
            text: [0; DISPLAY_MEMORY_SIZE],
            icons: [0; DISPLAY_MEMORY_SIZE],
        }
    }

    /// Record a data byte and return it with the icon bits merged in
    ///
    /// Addresses past the end of memory are passed through untouched.
    pub fn write(&mut self, address: u8, byte: u8) -> u8 {
        match self.text.get_mut(usize::from(address)) {
            Some(slot) => {
                *slot = byte;
                byte | self.icons[usize::from(address)]
            }
            None => byte,
        }
    }

    /// Byte currently shown at `address`
    pub fn read(&self, address: u8) -> u8 {
        let i = usize::from(address);
        match (self.text.get(i), self.icons.get(i)) {
            (Some(t), Some(c)) => t | c,
            _ => 0,
        }
    }

    /// Text part of `address`
    pub fn text(&self, address: u8) -> u8 {
        self.text.get(usize::from(address)).copied().unwrap_or(0)
    }

    /// Turn an icon on or off; returns the address to rewrite and the
    /// byte it should now hold
    pub fn set_icon(&mut self, icon: Icon, bytes_per_grid: u8, on: bool) -> Option<(u8, u8)> {
        let address = icon.address(bytes_per_grid);
        let slot = self.icons.get_mut(usize::from(address))?;
        if on {
            *slot |= icon.mask();
        } else {
            *slot &= !icon.mask();
        }
        Some((address, self.read(address)))
    }

    /// Is an icon currently on?
    pub fn icon(&self, icon: Icon, bytes_per_grid: u8) -> bool {
        self.icons
            .get(usize::from(icon.address(bytes_per_grid)))
            .is_some_and(|b| b & icon.mask() != 0)
    }

    /// Drop every icon bit
    pub fn clear_icons(&mut self) {
        self.icons = [0; DISPLAY_MEMORY_SIZE];
    }

    /// Icon bits at `address`
    pub fn icon_bits(&self, address: u8) -> u8 {
        self.icons.get(usize::from(address)).copied().unwrap_or(0)
    }

    /// Forget everything
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
