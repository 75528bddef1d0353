//! Duel-mode flag bitmask and the named rule-set presets.

/// Duel creation / field flags. 64-bit on the wire (duel options), though
/// the field snapshot only reports the low 32 bits.
pub struct DuelMode;

impl DuelMode {
    pub const TEST_MODE: u64 = 0x01;
    pub const ATTACK_FIRST_TURN: u64 = 0x02;
    pub const USE_TRAPS_IN_NEW_CHAIN: u64 = 0x04;
    pub const SIX_STEP_BATTLE_STEP: u64 = 0x08;
    pub const PSEUDO_SHUFFLE: u64 = 0x10;
    pub const TRIGGER_WHEN_PRIVATE_KNOWLEDGE: u64 = 0x20;
    pub const SIMPLE_AI: u64 = 0x40;
    pub const RELAY: u64 = 0x80;
    pub const OBSOLETE_IGNITION: u64 = 0x100;
    pub const FIRST_TURN_DRAW: u64 = 0x200;
    pub const ONE_FACEUP_FIELD: u64 = 0x400;
    pub const PZONE: u64 = 0x800;
    pub const SEPARATE_PZONE: u64 = 0x1000;
    pub const EMZONE: u64 = 0x2000;
    pub const FSX_MMZONE: u64 = 0x4000;
    pub const TRAP_MONSTERS_NOT_USE_ZONE: u64 = 0x8000;
    pub const RETURN_TO_EXTRA_DECK_TRIGGERS: u64 = 0x10000;
    pub const TRIGGER_ONLY_IN_LOCATION: u64 = 0x20000;
    pub const SPSUMMON_ONCE_OLD_NEGATE: u64 = 0x40000;
    pub const CANNOT_SUMMON_OATH_OLD: u64 = 0x80000;
    pub const NO_STANDBY_PHASE: u64 = 0x100000;
    pub const NO_MAIN_PHASE_2: u64 = 0x200000;
    pub const THREE_COLUMNS_FIELD: u64 = 0x400000;
    pub const DRAW_UNTIL_5: u64 = 0x800000;
    pub const NO_HAND_LIMIT: u64 = 0x1000000;
    pub const UNLIMITED_SUMMONS: u64 = 0x2000000;
    pub const INVERTED_QUICK_PRIORITY: u64 = 0x4000000;
    pub const EQUIP_NOT_SENT_IF_MISSING_TARGET: u64 = 0x8000000;
    pub const ZERO_ATK_DESTROYED: u64 = 0x10000000;
    pub const STORE_ATTACK_REPLAYS: u64 = 0x20000000;
    pub const SINGLE_CHAIN_IN_DAMAGE_SUBSTEP: u64 = 0x40000000;
    pub const CAN_REPOS_IF_NON_SUMPLAYER: u64 = 0x80000000;
    pub const TCG_SEGOC_NONPUBLIC: u64 = 0x100000000;
    pub const TCG_SEGOC_FIRSTTRIGGER: u64 = 0x200000000;

    // Named rule-set presets, stable composites of the flags above.

    pub const MODE_MR1: u64 = Self::OBSOLETE_IGNITION
        | Self::FIRST_TURN_DRAW
        | Self::ONE_FACEUP_FIELD
        | Self::SPSUMMON_ONCE_OLD_NEGATE
        | Self::RETURN_TO_EXTRA_DECK_TRIGGERS
        | Self::CANNOT_SUMMON_OATH_OLD;

    pub const MODE_SPEED: u64 =
        Self::THREE_COLUMNS_FIELD | Self::NO_MAIN_PHASE_2 | Self::TRIGGER_ONLY_IN_LOCATION;

    pub const MODE_RUSH: u64 = Self::THREE_COLUMNS_FIELD
        | Self::NO_MAIN_PHASE_2
        | Self::NO_STANDBY_PHASE
        | Self::FIRST_TURN_DRAW
        | Self::INVERTED_QUICK_PRIORITY
        | Self::DRAW_UNTIL_5
        | Self::NO_HAND_LIMIT
        | Self::UNLIMITED_SUMMONS
        | Self::TRIGGER_ONLY_IN_LOCATION;

    pub const MODE_GOAT: u64 = Self::MODE_MR1
        | Self::USE_TRAPS_IN_NEW_CHAIN
        | Self::SIX_STEP_BATTLE_STEP
        | Self::TRIGGER_WHEN_PRIVATE_KNOWLEDGE
        | Self::EQUIP_NOT_SENT_IF_MISSING_TARGET
        | Self::ZERO_ATK_DESTROYED
        | Self::STORE_ATTACK_REPLAYS
        | Self::SINGLE_CHAIN_IN_DAMAGE_SUBSTEP
        | Self::CAN_REPOS_IF_NON_SUMPLAYER
        | Self::TCG_SEGOC_NONPUBLIC
        | Self::TCG_SEGOC_FIRSTTRIGGER;

    pub const MODE_MR2: u64 = Self::FIRST_TURN_DRAW
        | Self::ONE_FACEUP_FIELD
        | Self::SPSUMMON_ONCE_OLD_NEGATE
        | Self::RETURN_TO_EXTRA_DECK_TRIGGERS
        | Self::CANNOT_SUMMON_OATH_OLD;

    pub const MODE_MR3: u64 = Self::PZONE
        | Self::SEPARATE_PZONE
        | Self::SPSUMMON_ONCE_OLD_NEGATE
        | Self::RETURN_TO_EXTRA_DECK_TRIGGERS
        | Self::CANNOT_SUMMON_OATH_OLD;

    pub const MODE_MR4: u64 = Self::PZONE
        | Self::EMZONE
        | Self::SPSUMMON_ONCE_OLD_NEGATE
        | Self::RETURN_TO_EXTRA_DECK_TRIGGERS
        | Self::CANNOT_SUMMON_OATH_OLD;

    pub const MODE_MR5: u64 = Self::PZONE
        | Self::EMZONE
        | Self::FSX_MMZONE
        | Self::TRAP_MONSTERS_NOT_USE_ZONE
        | Self::TRIGGER_ONLY_IN_LOCATION;
}
