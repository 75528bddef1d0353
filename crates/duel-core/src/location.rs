//! Card location bitmask.

/// Location of a card on the board or in a pile, as a bitmask.
///
/// The `OVERLAY` bit is special: a location reference with it set carries
/// an overlay sequence in place of a position (see
/// `duel-protocol`'s location-reference decoding).
pub struct Location;

impl Location {
    pub const DECK: u32 = 0x01;
    pub const HAND: u32 = 0x02;
    pub const MZONE: u32 = 0x04;
    pub const SZONE: u32 = 0x08;
    pub const GRAVE: u32 = 0x10;
    pub const REMOVED: u32 = 0x20;
    pub const EXTRA: u32 = 0x40;
    pub const OVERLAY: u32 = 0x80;
    pub const FZONE: u32 = 0x100;
    pub const PZONE: u32 = 0x200;

    /// Monster + spell/trap zones.
    pub const ONFIELD: u32 = 0x0c;
    pub const ALL: u32 = 0x3ff;
}
