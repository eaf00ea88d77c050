//! Static indicator icons
//!
//! Each icon is a single segment, packed as `(segment << 4) | grid` with
//! both fields counted from zero.

/// Front-panel indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Icon {
    Pbc,
    Dvd,
    Play,
    S,
    SpeakerRight,
    SpeakerLeft,
    Square,
    Antennas,
    Pause,
    Cd,
    V,
    Dts,
    Dolby,
    Colon,
    Mp3,
}

impl Icon {
    /// Every icon, in table order
    pub const ALL: [Icon; 15] = [
        Icon::Pbc,
        Icon::Dvd,
        Icon::Play,
        Icon::S,
        Icon::SpeakerRight,
        Icon::SpeakerLeft,
        Icon::Square,
        Icon::Antennas,
        Icon::Pause,
        Icon::Cd,
        Icon::V,
        Icon::Dts,
        Icon::Dolby,
        Icon::Colon,
        Icon::Mp3,
    ];

    /// Packed `(segment << 4) | grid` code
    pub const fn code(self) -> u8 {
        match self {
            Icon::Pbc => 0x80,
            Icon::Dvd => 0x90,
            Icon::Play => 0x01,
            Icon::S => 0x81,
            Icon::SpeakerRight => 0x91,
            Icon::SpeakerLeft => 0xA1,
            Icon::Square => 0xB1,
            Icon::Antennas => 0xC1,
            Icon::Pause => 0xD1,
            Icon::Cd => 0xE1,
            Icon::V => 0xF1,
            Icon::Dts => 0x02,
            Icon::Dolby => 0x82,
            Icon::Colon => 0x03,
            Icon::Mp3 => 0x83,
        }
    }

    /// Grid index (0-based)
    pub const fn grid(self) -> u8 {
        self.code() & 0x0F
    }

    /// Segment index within the grid (0-based)
    pub const fn segment(self) -> u8 {
        self.code() >> 4
    }

    /// Display memory address holding the segment
    pub fn address(self, bytes_per_grid: u8) -> u8 {
        self.grid() * bytes_per_grid + self.segment() / 8
    }

    /// Bit mask of the segment within its byte
    pub fn mask(self) -> u8 {
        1 << (self.segment() % 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack() {
        assert_eq!(Icon::Pbc.grid(), 0);
        assert_eq!(Icon::Pbc.segment(), 8);
        assert_eq!(Icon::Pbc.address(2), 1);
        assert_eq!(Icon::Pbc.mask(), 0x01);

        assert_eq!(Icon::V.address(2), 3);
        assert_eq!(Icon::V.mask(), 0x80);

        assert_eq!(Icon::Colon.address(2), 6);
        assert_eq!(Icon::Colon.mask(), 0x01);
    }

    #[test]
    fn test_codes_unique() {
        for (i, a) in Icon::ALL.iter().enumerate() {
            for b in &Icon::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_addresses_fit_four_grids() {
        for icon in Icon::ALL {
            assert!(icon.address(2) < 8, "{:?}", icon);
        }
    }
}
