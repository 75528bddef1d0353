//! Card type bitmask (monster/spell/trap plus monster sub-properties).

/// Card type mask. A card carries one of the three frame bits
/// (`MONSTER`/`SPELL`/`TRAP`) plus any number of the property bits.
pub struct CardType;

impl CardType {
    pub const MONSTER: u32 = 0x1;
    pub const SPELL: u32 = 0x2;
    pub const TRAP: u32 = 0x4;
    pub const NORMAL: u32 = 0x10;
    pub const EFFECT: u32 = 0x20;
    pub const FUSION: u32 = 0x40;
    pub const RITUAL: u32 = 0x80;
    pub const TRAPMONSTER: u32 = 0x100;
    pub const SPIRIT: u32 = 0x200;
    pub const UNION: u32 = 0x400;
    pub const GEMINI: u32 = 0x800;
    pub const TUNER: u32 = 0x1000;
    pub const SYNCHRO: u32 = 0x2000;
    pub const TOKEN: u32 = 0x4000;
    pub const MAXIMUM: u32 = 0x8000;
    pub const QUICKPLAY: u32 = 0x10000;
    pub const CONTINUOUS: u32 = 0x20000;
    pub const EQUIP: u32 = 0x40000;
    pub const FIELD: u32 = 0x80000;
    pub const COUNTER: u32 = 0x100000;
    pub const FLIP: u32 = 0x200000;
    pub const TOON: u32 = 0x400000;
    pub const XYZ: u32 = 0x800000;
    pub const PENDULUM: u32 = 0x1000000;
    pub const SPSUMMON: u32 = 0x2000000;
    pub const LINK: u32 = 0x4000000;
}
