//! Card query model: flag mask, sparse per-card query records, and the
//! full-field snapshot.
//!
//! A query answer is a sequence of `(size, flag, payload)` entries, one per
//! requested flag. Flags the server did not answer stay `None` in
//! [`CardQueryInfo`], so every field here is optional.

use crate::messages::{ChainLink, LocPos};

/// Query flag bits. OR them together to request several card properties in
/// one round trip.
pub struct QueryFlag;

impl QueryFlag {
    pub const CODE: u32 = 0x1;
    pub const POSITION: u32 = 0x2;
    pub const ALIAS: u32 = 0x4;
    pub const TYPE: u32 = 0x8;
    pub const LEVEL: u32 = 0x10;
    pub const RANK: u32 = 0x20;
    pub const ATTRIBUTE: u32 = 0x40;
    pub const RACE: u32 = 0x80;
    pub const ATTACK: u32 = 0x100;
    pub const DEFENSE: u32 = 0x200;
    pub const BASE_ATTACK: u32 = 0x400;
    pub const BASE_DEFENSE: u32 = 0x800;
    pub const REASON: u32 = 0x1000;
    pub const REASON_CARD: u32 = 0x2000;
    pub const EQUIP_CARD: u32 = 0x4000;
    pub const TARGET_CARD: u32 = 0x8000;
    pub const OVERLAY_CARD: u32 = 0x10000;
    pub const COUNTERS: u32 = 0x20000;
    pub const OWNER: u32 = 0x40000;
    pub const STATUS: u32 = 0x80000;
    pub const IS_PUBLIC: u32 = 0x100000;
    pub const LSCALE: u32 = 0x200000;
    pub const RSCALE: u32 = 0x400000;
    pub const LINK: u32 = 0x800000;
    pub const IS_HIDDEN: u32 = 0x1000000;
    pub const COVER: u32 = 0x2000000;

    /// End-of-record sentinel emitted by the engine after the last answered
    /// flag.
    pub const END: u32 = 0x80000000;
}

/// One counter on a card: how many, and of which kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterEntry {
    pub count: u16,
    pub kind: u16,
}

/// Link rating and arrow mask, answered together for the `LINK` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkInfo {
    pub rating: u32,
    pub markers: u32,
}

/// Decoded query answer for one card. Only the fields whose flags the
/// engine answered are populated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardQueryInfo {
    pub code: Option<u32>,
    pub position: Option<u32>,
    pub alias: Option<u32>,
    pub level: Option<u32>,
    pub rank: Option<u32>,
    pub attribute: Option<u32>,
    pub race: Option<u64>,
    pub attack: Option<u32>,
    pub defense: Option<u32>,
    pub base_attack: Option<u32>,
    pub base_defense: Option<u32>,
    pub reason: Option<u32>,
    /// Card that caused `reason`; `None` inside `Some` means the engine
    /// sent an all-zero reference.
    pub reason_card: Option<Option<LocPos>>,
    pub equip_card: Option<Option<LocPos>>,
    pub target_cards: Option<Vec<LocPos>>,
    pub overlay_cards: Option<Vec<u32>>,
    pub counters: Option<Vec<CounterEntry>>,
    pub owner: Option<u8>,
    pub status: Option<u32>,
    pub is_public: Option<bool>,
    pub lscale: Option<u32>,
    pub rscale: Option<u32>,
    pub link: Option<LinkInfo>,
    pub is_hidden: Option<bool>,
    pub cover: Option<u32>,
}

/// Parameters of a single-card query request (write-only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryRequest {
    pub flags: u32,
    pub controller: u8,
    pub location: u32,
    pub sequence: u32,
    pub overlay_sequence: u32,
}

/// One occupied field slot in a [`FieldSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCard {
    pub position: u32,
    /// Xyz material count; 0 for non-xyz cards.
    pub materials: u32,
}

/// One player's half of the field snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPlayer {
    pub lp: u32,
    pub monsters: [Option<FieldCard>; 7],
    pub spells: [Option<FieldCard>; 8],
    pub deck_size: u32,
    pub hand_size: u32,
    pub grave_size: u32,
    pub banish_size: u32,
    pub extra_size: u32,
}

/// Coarse whole-board state, sent by `ReloadField`.
///
/// Slot occupancy only; card identities must be fetched with follow-up
/// queries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSnapshot {
    /// Low 32 bits of the duel's creation flags.
    pub flags: u32,
    pub players: [FieldPlayer; 2],
    pub chain: Vec<ChainLink>,
}
