use modular_bitfield::prelude::*;

/// Upper nibble of the select byte shared by the whole 24Cxx family.
pub const FAMILY_CODE: u8 = 0b1010;

/// Control byte sent after a start condition: `1010 A2 A1 A0 R/W`.
#[bitfield]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DeviceSelect {
    read: bool,
    chip: B3,
    family: B4,
}

impl DeviceSelect {
    /// Returns `None` when `chip` does not fit the three select pins.
    pub fn for_chip(chip: u8) -> Option<Self> {
        Self::new()
            .with_family(FAMILY_CODE)
            .with_chip_checked(chip)
            .ok()
    }

    pub fn chip_index(&self) -> u8 {
        self.chip()
    }

    /// 7-bit bus address, as expected by `embedded-hal`.
    pub fn address(&self) -> u8 {
        self.into_bytes()[0] >> 1
    }

    /// Full 8-bit control byte for a read or write transfer.
    pub fn control_byte(&self, read: bool) -> u8 {
        self.with_read(read).into_bytes()[0]
    }
}
