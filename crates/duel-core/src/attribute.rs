//! Monster attribute bitmask.

/// Monster card attribute mask.
pub struct Attribute;

impl Attribute {
    pub const EARTH: u32 = 0x01;
    pub const WATER: u32 = 0x02;
    pub const FIRE: u32 = 0x04;
    pub const WIND: u32 = 0x08;
    pub const LIGHT: u32 = 0x10;
    pub const DARK: u32 = 0x20;
    pub const DIVINE: u32 = 0x40;
}
