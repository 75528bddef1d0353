//! Static card data and the new-card record.

/// Static attributes of a card, as supplied by the card database.
///
/// This is what the engine's card reader callback fills in, and what the
/// opcode evaluator matches announced filters against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardData {
    /// Passcode.
    pub code: u32,

    /// Passcode of the card this one is treated as, or 0.
    pub alias: u32,

    /// Archetype set codes (each `0xSFFF`: low 12 bits family, high 4 bits
    /// sub-family).
    pub setcodes: Vec<u16>,

    /// `CardType` mask.
    pub card_type: u32,

    /// Level (or 0 for cards without one).
    pub level: u32,

    /// `Attribute` mask.
    pub attribute: u32,

    /// `Race` mask (64-bit).
    pub race: u64,

    pub attack: i32,
    pub defense: i32,

    /// Pendulum scales.
    pub lscale: u32,
    pub rscale: u32,

    /// `LinkMarker` mask.
    pub link_marker: u32,
}

/// A card to be added to a duel at creation time.
///
/// Serialized write-only by `duel-protocol` (the engine never sends it
/// back).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCardInfo {
    /// Receiving team, 0 or 1.
    pub team: u8,

    /// Index of the original owner within the team.
    pub duelist: u8,

    pub code: u32,
    pub controller: u8,

    /// `Location` mask value.
    pub location: u32,

    pub sequence: u32,

    /// `Position` mask value.
    pub position: u32,
}
