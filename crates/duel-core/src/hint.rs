//! Hint classifications: generic hints, card hints, player hints, and the
//! chain timing mask.

/// Kind discriminator of a `Hint` message.
pub struct HintType;

impl HintType {
    pub const EVENT: u8 = 1;
    pub const MESSAGE: u8 = 2;
    pub const SELECTMSG: u8 = 3;
    pub const OPSELECTED: u8 = 4;
    pub const EFFECT: u8 = 5;
    pub const RACE: u8 = 6;
    pub const ATTRIB: u8 = 7;
    pub const CODE: u8 = 8;
    pub const NUMBER: u8 = 9;
    pub const CARD: u8 = 10;
    pub const ZONE: u8 = 11;
}

/// Kind discriminator of a `CardHint` message.
pub struct CardHintType;

impl CardHintType {
    pub const TURN: u8 = 1;
    pub const CARD: u8 = 2;
    pub const RACE: u8 = 3;
    pub const ATTRIBUTE: u8 = 4;
    pub const NUMBER: u8 = 5;
    pub const DESC_ADD: u8 = 6;
    pub const DESC_REMOVE: u8 = 7;
}

/// Kind discriminator of a `PlayerHint` message.
pub struct PlayerHintType;

impl PlayerHintType {
    pub const DESC_ADD: u8 = 6;
    pub const DESC_REMOVE: u8 = 7;
}

/// Chain timing hint mask, carried by `SelectChain`.
pub struct HintTiming;

impl HintTiming {
    pub const DRAW_PHASE: u32 = 0x1;
    pub const STANDBY_PHASE: u32 = 0x2;
    pub const MAIN_END: u32 = 0x4;
    pub const BATTLE_START: u32 = 0x8;
    pub const BATTLE_END: u32 = 0x10;
    pub const END_PHASE: u32 = 0x20;
    pub const SUMMON: u32 = 0x40;
    pub const SPSUMMON: u32 = 0x80;
    pub const FLIPSUMMON: u32 = 0x100;
    pub const MSET: u32 = 0x200;
    pub const SSET: u32 = 0x400;
    pub const POS_CHANGE: u32 = 0x800;
    pub const ATTACK: u32 = 0x1000;
    pub const DAMAGE_STEP: u32 = 0x2000;
    pub const DAMAGE_CAL: u32 = 0x4000;
    pub const CHAIN_END: u32 = 0x8000;
    pub const DRAW: u32 = 0x10000;
    pub const DAMAGE: u32 = 0x20000;
    pub const RECOVER: u32 = 0x40000;
    pub const DESTROY: u32 = 0x80000;
    pub const REMOVE: u32 = 0x100000;
    pub const TOHAND: u32 = 0x200000;
    pub const TODECK: u32 = 0x400000;
    pub const TOGRAVE: u32 = 0x800000;
    pub const BATTLE_PHASE: u32 = 0x1000000;
    pub const EQUIP: u32 = 0x2000000;
    pub const BATTLE_STEP_END: u32 = 0x4000000;
    pub const BATTLED: u32 = 0x8000000;
}
