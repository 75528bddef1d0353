//! Message types emitted by the duel engine.
//!
//! These are **transport-agnostic** logical messages: one [`Message`] per
//! decoded engine event. The binary decoder lives in the `duel-protocol`
//! crate; this module is purely the model.
//!
//! Shapes follow the engine wire protocol exactly, including its width
//! oddities (8-bit vs 32-bit array lengths, the occasional 8-bit sequence).
//! Those are documented on the decoder, not here.

/// Wire type codes of engine messages.
///
/// These IDs are the first byte of each message body. The numbering has
/// gaps; they are part of the stable engine contract.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MessageType {
    Retry = 1,
    Hint = 2,
    Waiting = 3,
    Start = 4,
    Win = 5,
    UpdateData = 6,
    UpdateCard = 7,
    RequestDeck = 8,
    SelectBattleCmd = 10,
    SelectIdleCmd = 11,
    SelectEffectYn = 12,
    SelectYesNo = 13,
    SelectOption = 14,
    SelectCard = 15,
    SelectChain = 16,
    SelectPlace = 18,
    SelectPosition = 19,
    SelectTribute = 20,
    SortChain = 21,
    SelectCounter = 22,
    SelectSum = 23,
    SelectDisfield = 24,
    SortCard = 25,
    SelectUnselectCard = 26,
    ConfirmDecktop = 30,
    ConfirmCards = 31,
    ShuffleDeck = 32,
    ShuffleHand = 33,
    RefreshDeck = 34,
    SwapGraveDeck = 35,
    ShuffleSetCard = 36,
    ReverseDeck = 37,
    DeckTop = 38,
    ShuffleExtra = 39,
    NewTurn = 40,
    NewPhase = 41,
    ConfirmExtratop = 42,
    Move = 50,
    PosChange = 53,
    Set = 54,
    Swap = 55,
    FieldDisabled = 56,
    Summoning = 60,
    Summoned = 61,
    SpSummoning = 62,
    SpSummoned = 63,
    FlipSummoning = 64,
    FlipSummoned = 65,
    Chaining = 70,
    Chained = 71,
    ChainSolving = 72,
    ChainSolved = 73,
    ChainEnd = 74,
    ChainNegated = 75,
    ChainDisabled = 76,
    CardSelected = 80,
    RandomSelected = 81,
    BecomeTarget = 83,
    Draw = 90,
    Damage = 91,
    Recover = 92,
    Equip = 93,
    LpUpdate = 94,
    CardTarget = 96,
    CancelTarget = 97,
    PayLpCost = 100,
    AddCounter = 101,
    RemoveCounter = 102,
    Attack = 110,
    Battle = 111,
    AttackDisabled = 112,
    DamageStepStart = 113,
    DamageStepEnd = 114,
    MissedEffect = 120,
    BeChainTarget = 121,
    CreateRelation = 122,
    ReleaseRelation = 123,
    TossCoin = 130,
    TossDice = 131,
    RockPaperScissors = 132,
    HandResult = 133,
    AnnounceRace = 140,
    AnnounceAttribute = 141,
    AnnounceCard = 142,
    AnnounceNumber = 143,
    CardHint = 160,
    TagSwap = 161,
    ReloadField = 162,
    AiName = 163,
    ShowHint = 164,
    PlayerHint = 165,
    MatchKill = 170,
    CustomMsg = 180,
    RemoveCards = 190,
}

impl MessageType {
    /// Map a raw wire byte to a known message type.
    pub fn from_u8(v: u8) -> Option<Self> {
        use MessageType::*;
        Some(match v {
            1 => Retry,
            2 => Hint,
            3 => Waiting,
            4 => Start,
            5 => Win,
            6 => UpdateData,
            7 => UpdateCard,
            8 => RequestDeck,
            10 => SelectBattleCmd,
            11 => SelectIdleCmd,
            12 => SelectEffectYn,
            13 => SelectYesNo,
            14 => SelectOption,
            15 => SelectCard,
            16 => SelectChain,
            18 => SelectPlace,
            19 => SelectPosition,
            20 => SelectTribute,
            21 => SortChain,
            22 => SelectCounter,
            23 => SelectSum,
            24 => SelectDisfield,
            25 => SortCard,
            26 => SelectUnselectCard,
            30 => ConfirmDecktop,
            31 => ConfirmCards,
            32 => ShuffleDeck,
            33 => ShuffleHand,
            34 => RefreshDeck,
            35 => SwapGraveDeck,
            36 => ShuffleSetCard,
            37 => ReverseDeck,
            38 => DeckTop,
            39 => ShuffleExtra,
            40 => NewTurn,
            41 => NewPhase,
            42 => ConfirmExtratop,
            50 => Move,
            53 => PosChange,
            54 => Set,
            55 => Swap,
            56 => FieldDisabled,
            60 => Summoning,
            61 => Summoned,
            62 => SpSummoning,
            63 => SpSummoned,
            64 => FlipSummoning,
            65 => FlipSummoned,
            70 => Chaining,
            71 => Chained,
            72 => ChainSolving,
            73 => ChainSolved,
            74 => ChainEnd,
            75 => ChainNegated,
            76 => ChainDisabled,
            80 => CardSelected,
            81 => RandomSelected,
            83 => BecomeTarget,
            90 => Draw,
            91 => Damage,
            92 => Recover,
            93 => Equip,
            94 => LpUpdate,
            96 => CardTarget,
            97 => CancelTarget,
            100 => PayLpCost,
            101 => AddCounter,
            102 => RemoveCounter,
            110 => Attack,
            111 => Battle,
            112 => AttackDisabled,
            113 => DamageStepStart,
            114 => DamageStepEnd,
            120 => MissedEffect,
            121 => BeChainTarget,
            122 => CreateRelation,
            123 => ReleaseRelation,
            130 => TossCoin,
            131 => TossDice,
            132 => RockPaperScissors,
            133 => HandResult,
            140 => AnnounceRace,
            141 => AnnounceAttribute,
            142 => AnnounceCard,
            143 => AnnounceNumber,
            160 => CardHint,
            161 => TagSwap,
            162 => ReloadField,
            163 => AiName,
            164 => ShowHint,
            165 => PlayerHint,
            170 => MatchKill,
            180 => CustomMsg,
            190 => RemoveCards,
            _ => return None,
        })
    }
}

// =============================================================================
// Shared record shapes
// =============================================================================

/// Location reference: one card slot on the board.
///
/// When the raw location has the `OVERLAY` bit set, the wire's position
/// field actually carries the overlay sequence; the decoder stores it in
/// `overlay_sequence` and forces `position` to `FACEUP_ATTACK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocPos {
    pub controller: u8,
    pub location: u32,
    pub sequence: u32,
    pub position: u32,
    pub overlay_sequence: Option<u32>,
}

/// Card passcode and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPos {
    pub code: u32,
    pub position: u32,
}

/// Card passcode and location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLoc {
    pub code: u32,
    pub controller: u8,
    pub location: u32,
    pub sequence: u32,
}

/// Card passcode plus a full location reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLocPos {
    pub code: u32,
    pub place: LocPos,
}

/// Activatable effect entry (battle and idle command prompts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLocActive {
    pub code: u32,
    pub controller: u8,
    pub location: u32,
    pub sequence: u32,
    pub description: u64,
    /// Effect client mode. 8-bit on the wire in battle prompts, 32-bit in
    /// idle prompts.
    pub client_mode: u32,
}

/// Chainable effect entry (`SelectChain`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLocPosActive {
    pub code: u32,
    pub place: LocPos,
    pub description: u64,
    pub client_mode: u32,
}

/// Attack-capable card entry (`SelectBattleCmd`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLocAttack {
    pub code: u32,
    pub controller: u8,
    pub location: u32,
    pub sequence: u32,
    pub can_direct: bool,
}

/// Tribute candidate entry (`SelectTribute`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLocTribute {
    pub code: u32,
    pub controller: u8,
    pub location: u32,
    pub sequence: u32,
    pub release_param: u8,
}

/// Counter-bearing card entry (`SelectCounter`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLocCounter {
    pub code: u32,
    pub controller: u8,
    pub location: u32,
    pub sequence: u32,
    pub count: u16,
}

/// Sum-selection candidate entry (`SelectSum`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLocSum {
    pub code: u32,
    pub controller: u8,
    pub location: u32,
    pub sequence: u32,
    pub amount: u32,
}

/// One side of a `Battle` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleCard {
    pub place: LocPos,
    pub attack: u32,
    pub defense: u32,
    pub destroyed: bool,
}

/// One link of the active chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainLink {
    pub code: u32,
    pub place: LocPos,
    pub triggering_controller: u8,
    pub triggering_location: u32,
    pub triggering_sequence: u32,
    pub description: u64,
}

// =============================================================================
// The message union
// =============================================================================

/// One structured, decoded unit of the engine's output stream.
///
/// Variants mirror [`MessageType`] one-to-one. Several carry no payload
/// beyond the type byte.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The engine rejected the previous response; submit a new one.
    Retry,
    /// Auxiliary information. The `hint` width on the wire depends on the
    /// message size (legacy quirk, see the decoder).
    Hint { hint_type: u8, player: u8, hint: u64 },
    Waiting,
    Start,
    Win { player: u8, reason: u8 },
    UpdateData,
    UpdateCard,
    RequestDeck,
    /// Available battle step actions.
    SelectBattleCmd {
        player: u8,
        chains: Vec<CardLocActive>,
        attacks: Vec<CardLocAttack>,
        to_m2: bool,
        to_ep: bool,
    },
    /// Available main phase actions.
    SelectIdleCmd {
        player: u8,
        summons: Vec<CardLoc>,
        special_summons: Vec<CardLoc>,
        pos_changes: Vec<CardLoc>,
        monster_sets: Vec<CardLoc>,
        spell_sets: Vec<CardLoc>,
        activates: Vec<CardLocActive>,
        to_bp: bool,
        to_ep: bool,
        shuffle: bool,
    },
    /// Yes/no prompt about a specific card effect.
    SelectEffectYn {
        player: u8,
        code: u32,
        place: LocPos,
        description: u64,
    },
    SelectYesNo { player: u8, description: u64 },
    SelectOption { player: u8, options: Vec<u64> },
    SelectCard {
        player: u8,
        can_cancel: bool,
        min: u32,
        max: u32,
        selects: Vec<CardLocPos>,
    },
    SelectChain {
        player: u8,
        spe_count: u8,
        forced: bool,
        hint_timing: u32,
        hint_timing_other: u32,
        selects: Vec<CardLocPosActive>,
    },
    SelectPlace { player: u8, count: u8, field_mask: u32 },
    SelectPosition { player: u8, code: u32, positions: u32 },
    SelectTribute {
        player: u8,
        can_cancel: bool,
        min: u32,
        max: u32,
        selects: Vec<CardLocTribute>,
    },
    SortChain { player: u8, cards: Vec<CardLoc> },
    SelectCounter {
        player: u8,
        counter_type: u16,
        count: u16,
        cards: Vec<CardLocCounter>,
    },
    SelectSum {
        player: u8,
        select_max: u8,
        amount: u32,
        min: u32,
        max: u32,
        selects: Vec<CardLocSum>,
        selects_must: Vec<CardLocSum>,
    },
    SelectDisfield { player: u8, count: u8, field_mask: u32 },
    SortCard { player: u8, cards: Vec<CardLoc> },
    SelectUnselectCard {
        player: u8,
        can_finish: bool,
        can_cancel: bool,
        min: u32,
        max: u32,
        select_cards: Vec<CardLocPos>,
        unselect_cards: Vec<CardLocPos>,
    },
    ConfirmDecktop { player: u8, cards: Vec<CardLoc> },
    ConfirmCards { player: u8, cards: Vec<CardLoc> },
    ShuffleDeck { player: u8 },
    ShuffleHand { player: u8, cards: Vec<u32> },
    RefreshDeck,
    /// Deck and grave were swapped; `returned_to_extra` lists the deck
    /// indices sent back to the extra deck (decoded from a bitmap).
    SwapGraveDeck {
        player: u8,
        deck_size: u32,
        returned_to_extra: Vec<u32>,
    },
    ShuffleSetCard {
        location: u32,
        cards: Vec<(LocPos, LocPos)>,
    },
    ReverseDeck,
    DeckTop {
        player: u8,
        count: u32,
        code: u32,
        position: u32,
    },
    ShuffleExtra { player: u8, cards: Vec<u32> },
    NewTurn { player: u8 },
    NewPhase { phase: u16 },
    ConfirmExtratop { player: u8, cards: Vec<CardLoc> },
    Move { code: u32, from: LocPos, to: LocPos },
    PosChange {
        code: u32,
        controller: u8,
        location: u32,
        sequence: u32,
        prev_position: u32,
        position: u32,
    },
    Set { code: u32, place: LocPos },
    Swap { card1: CardLocPos, card2: CardLocPos },
    FieldDisabled { field_mask: u32 },
    Summoning { code: u32, place: LocPos },
    Summoned,
    SpSummoning { code: u32, place: LocPos },
    SpSummoned,
    FlipSummoning { code: u32, place: LocPos },
    FlipSummoned,
    Chaining {
        code: u32,
        place: LocPos,
        triggering_controller: u8,
        triggering_location: u32,
        triggering_sequence: u32,
        description: u64,
        chain_size: u32,
    },
    Chained { chain_size: u32 },
    ChainSolving { chain_size: u32 },
    ChainSolved { chain_size: u32 },
    ChainEnd,
    ChainNegated { chain_size: u32 },
    ChainDisabled { chain_size: u32 },
    CardSelected { cards: Vec<LocPos> },
    RandomSelected { player: u8, cards: Vec<LocPos> },
    BecomeTarget { cards: Vec<LocPos> },
    Draw { player: u8, drawn: Vec<CardPos> },
    Damage { player: u8, amount: u32 },
    Recover { player: u8, amount: u32 },
    Equip { card: LocPos, target: LocPos },
    LpUpdate { player: u8, lp: u32 },
    CardTarget { card: LocPos, target: LocPos },
    CancelTarget { card: LocPos, target: LocPos },
    PayLpCost { player: u8, amount: u32 },
    AddCounter {
        counter_type: u16,
        controller: u8,
        location: u32,
        sequence: u32,
        count: u16,
    },
    RemoveCounter {
        counter_type: u16,
        controller: u8,
        location: u32,
        sequence: u32,
        count: u16,
    },
    /// Attack declaration; `target` is `None` for a direct attack (the
    /// engine sends an all-zero location reference).
    Attack { card: LocPos, target: Option<LocPos> },
    Battle {
        card: BattleCard,
        target: Option<BattleCard>,
    },
    AttackDisabled,
    DamageStepStart,
    DamageStepEnd,
    MissedEffect { place: LocPos, code: u32 },
    BeChainTarget,
    CreateRelation,
    ReleaseRelation,
    TossCoin { player: u8, results: Vec<bool> },
    TossDice { player: u8, results: Vec<u8> },
    RockPaperScissors { player: u8 },
    /// Both players' hands, unpacked from one byte (two 2-bit fields).
    HandResult { results: [u8; 2] },
    AnnounceRace { player: u8, count: u8, available: u64 },
    AnnounceAttribute { player: u8, count: u8, available: u32 },
    /// Announce a card matching the filter expressed by `opcodes`
    /// (see [`crate::opcode`]).
    AnnounceCard {
        player: u8,
        opcodes: Vec<crate::opcode::OpCode>,
    },
    AnnounceNumber { player: u8, options: Vec<u64> },
    CardHint {
        place: LocPos,
        card_hint: u8,
        description: u64,
    },
    TagSwap {
        player: u8,
        deck_size: u32,
        extra_faceup_count: u32,
        deck_top_card: Option<u32>,
        hand: Vec<CardPos>,
        extra: Vec<CardPos>,
    },
    /// Full board reload after a tag swap or reconnect; the body is a
    /// [`crate::query::FieldSnapshot`].
    ReloadField(crate::query::FieldSnapshot),
    AiName,
    ShowHint,
    PlayerHint {
        player: u8,
        player_hint: u8,
        description: u64,
    },
    MatchKill { code: u32 },
    CustomMsg,
    RemoveCards { cards: Vec<LocPos> },
}
