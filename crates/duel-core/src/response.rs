//! Player responses to engine prompts.
//!
//! Each variant answers exactly one `Select*`/`Sort*`/`Announce*` message.
//! The binary layout (mostly little-endian `i32`s) is produced by the
//! response encoder in `duel-protocol`.

/// Action field of a `SelectBattleCmd` answer.
pub struct BattleCmdAction;

impl BattleCmdAction {
    pub const CHAIN: u32 = 0;
    pub const ATTACK: u32 = 1;
    pub const TO_M2: u32 = 2;
    pub const TO_EP: u32 = 3;
}

/// Action field of a `SelectIdleCmd` answer.
pub struct IdleCmdAction;

impl IdleCmdAction {
    pub const SUMMON: u32 = 0;
    pub const SPSUMMON: u32 = 1;
    pub const POS_CHANGE: u32 = 2;
    pub const MONSTER_SET: u32 = 3;
    pub const SPELL_SET: u32 = 4;
    pub const ACTIVATE: u32 = 5;
    pub const TO_BP: u32 = 6;
    pub const TO_EP: u32 = 7;
    pub const SHUFFLE: u32 = 8;
}

/// One field zone named in a `SelectPlace`/`SelectDisfield` answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPlace {
    pub player: u8,
    pub location: u8,
    pub sequence: u8,
}

/// A structured answer, ready to be encoded and handed back to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Pick one battle-phase action; `index` selects within that action's
    /// candidate list.
    SelectBattleCmd { action: u32, index: Option<u32> },
    SelectIdleCmd { action: u32, index: Option<u32> },
    SelectEffectYn { yes: bool },
    SelectYesNo { yes: bool },
    SelectOption { index: u32 },
    /// `None` cancels the selection (only legal when the prompt said so).
    SelectCard { indices: Option<Vec<u32>> },
    /// `None` declines to chain (or cancels when not forced).
    SelectChain { index: Option<u32> },
    SelectPlace { places: Vec<FieldPlace> },
    SelectPosition { position: u32 },
    SelectTribute { indices: Option<Vec<u32>> },
    SelectCounter { counters: Vec<u16> },
    SelectSum { indices: Vec<u32> },
    SelectDisfield { places: Vec<FieldPlace> },
    /// `None` asks the engine to keep the presented order.
    SortCard { order: Option<Vec<u8>> },
    /// Toggle one card, or `None` to finish/cancel.
    SelectUnselectCard { index: Option<u32> },
    AnnounceRace { races: Vec<u64> },
    AnnounceAttribute { attributes: Vec<u32> },
    AnnounceCard { code: u32 },
    AnnounceNumber { value: i32 },
    /// Hand value, one of the `Rps` constants.
    RockPaperScissors { value: u8 },
}
