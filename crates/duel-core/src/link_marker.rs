//! Link monster marker bitmask.

/// Link marker positions, one bit per arrow.
pub struct LinkMarker;

impl LinkMarker {
    pub const BOTTOM_LEFT: u32 = 0o001;
    pub const BOTTOM: u32 = 0o002;
    pub const BOTTOM_RIGHT: u32 = 0o004;
    pub const LEFT: u32 = 0o010;
    pub const RIGHT: u32 = 0o040;
    pub const TOP_LEFT: u32 = 0o100;
    pub const TOP: u32 = 0o200;
    pub const TOP_RIGHT: u32 = 0o400;
}
