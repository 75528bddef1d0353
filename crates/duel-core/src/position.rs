//! Card position bitmask (face-up/face-down crossed with attack/defense).

/// Battle position of a card, as a bitmask.
///
/// Single-bit values name a concrete position; the composite values
/// (`FACEUP`, `ATTACK`, ...) appear in masks such as
/// `Message::SelectPosition::positions`.
pub struct Position;

impl Position {
    pub const FACEUP_ATTACK: u32 = 0x1;
    pub const FACEDOWN_ATTACK: u32 = 0x2;
    pub const FACEUP_DEFENSE: u32 = 0x4;
    pub const FACEDOWN_DEFENSE: u32 = 0x8;
    pub const FACEUP: u32 = 0x5;
    pub const FACEDOWN: u32 = 0xa;
    pub const ATTACK: u32 = 0x3;
    pub const DEFENSE: u32 = 0xc;

    /// Expand a position mask into the concrete positions it matches.
    pub fn parse(mask: u32) -> Vec<u32> {
        [
            Position::FACEUP_ATTACK,
            Position::FACEDOWN_ATTACK,
            Position::FACEUP_DEFENSE,
            Position::FACEDOWN_DEFENSE,
        ]
        .into_iter()
        .filter(|p| mask & p != 0)
        .collect()
    }
}
