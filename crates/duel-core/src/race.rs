//! Monster race bitmask.
//!
//! Races are 64-bit on the wire (card data, queries, announcements).

/// Monster card race mask.
pub struct Race;

impl Race {
    pub const WARRIOR: u64 = 0x1;
    pub const SPELLCASTER: u64 = 0x2;
    pub const FAIRY: u64 = 0x4;
    pub const FIEND: u64 = 0x8;
    pub const ZOMBIE: u64 = 0x10;
    pub const MACHINE: u64 = 0x20;
    pub const AQUA: u64 = 0x40;
    pub const PYRO: u64 = 0x80;
    pub const ROCK: u64 = 0x100;
    pub const WINGED_BEAST: u64 = 0x200;
    pub const PLANT: u64 = 0x400;
    pub const INSECT: u64 = 0x800;
    pub const THUNDER: u64 = 0x1000;
    pub const DRAGON: u64 = 0x2000;
    pub const BEAST: u64 = 0x4000;
    pub const BEAST_WARRIOR: u64 = 0x8000;
    pub const DINOSAUR: u64 = 0x10000;
    pub const FISH: u64 = 0x20000;
    pub const SEA_SERPENT: u64 = 0x40000;
    pub const REPTILE: u64 = 0x80000;
    pub const PSYCHIC: u64 = 0x100000;
    pub const DIVINE: u64 = 0x200000;
    pub const CREATOR_GOD: u64 = 0x400000;
    pub const WYRM: u64 = 0x800000;
    pub const CYBERSE: u64 = 0x1000000;
    pub const ILLUSION: u64 = 0x2000000;
    pub const CYBORG: u64 = 0x4000000;
    pub const MAGICAL_KNIGHT: u64 = 0x8000000;
    pub const HIGH_DRAGON: u64 = 0x10000000;
    pub const OMEGA_PSYCHIC: u64 = 0x20000000;
    pub const CELESTIAL_WARRIOR: u64 = 0x40000000;
    pub const GALAXY: u64 = 0x80000000;
}
