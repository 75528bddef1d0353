//! Binary decoding of engine messages.
//!
//! This module converts raw engine buffers into `duel_core::Message`
//! values.
//!
//! Framing model (message stream buffer):
//!
//! ```text
//! repeated:
//!   [0..4] : frame length (u32 LE), not counting these four bytes
//!   [4]    : msg_type (MessageType as u8)
//!   [5..]  : body (depends on msg_type)
//! ```
//!
//! Recurring body shapes (all LE):
//!
//! ```text
//! loc_pos:
//!   [0]    controller (u8)
//!   [1]    location (u8)
//!   [2..6] sequence (u32)
//!   [6..10] position (u32)
//! card_loc:
//!   [0..4] code (u32), then controller/location/sequence as above
//! ```
//!
//! When a `loc_pos` location has the overlay bit set, the position word is
//! the overlay sequence and the card itself is face-up attack.
//!
//! Width quirks are faithful to the engine: list lengths are u32 except
//! where noted (u8 for options, coin/dice results, card-select lists),
//! and a few sequences shrink to u8 (position changes, counter cards,
//! battle-phase attack lists).
//!
//! Unknown message types are not an error: [`decode_message`] returns
//! `Ok(None)` and the caller decides whether to skip or abort. The stream
//! decoder skips them with a warning, keeping one bad frame from killing a
//! replay.

use tracing::warn;

use duel_core::messages::{
    BattleCard, CardLoc, CardLocActive, CardLocAttack, CardLocCounter, CardLocPos,
    CardLocPosActive, CardLocSum, CardLocTribute, CardPos, LocPos, Message, MessageType,
};
use duel_core::opcode::OpCode;
use duel_core::{Location, Position};

use crate::buffer::BufferReader;
use crate::error::ProtocolError;
use crate::query_codec::decode_field;

// =============================================================================
// Shared record readers
// =============================================================================

pub(crate) fn read_loc_pos(r: &mut BufferReader) -> Result<LocPos, ProtocolError> {
    let controller = r.read_u8()?;
    let location = r.read_u8()? as u32;
    let sequence = r.read_u32()?;
    let raw_position = r.read_u32()?;
    Ok(if location & Location::OVERLAY != 0 {
        // Overlay materials have no position of their own.
        LocPos {
            controller,
            location,
            sequence,
            position: Position::FACEUP_ATTACK,
            overlay_sequence: Some(raw_position),
        }
    } else {
        LocPos {
            controller,
            location,
            sequence,
            position: raw_position,
            overlay_sequence: None,
        }
    })
}

fn read_card_loc(r: &mut BufferReader) -> Result<CardLoc, ProtocolError> {
    Ok(CardLoc {
        code: r.read_u32()?,
        controller: r.read_u8()?,
        location: r.read_u8()? as u32,
        sequence: r.read_u32()?,
    })
}

fn read_card_loc_pos(r: &mut BufferReader) -> Result<CardLocPos, ProtocolError> {
    Ok(CardLocPos {
        code: r.read_u32()?,
        place: read_loc_pos(r)?,
    })
}

fn read_card_pos(r: &mut BufferReader) -> Result<CardPos, ProtocolError> {
    Ok(CardPos {
        code: r.read_u32()?,
        position: r.read_u32()?,
    })
}

fn read_list_u32<'a, T>(
    r: &mut BufferReader<'a>,
    mut f: impl FnMut(&mut BufferReader<'a>) -> Result<T, ProtocolError>,
) -> Result<Vec<T>, ProtocolError> {
    let count = r.read_u32()? as usize;
    let mut out = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        out.push(f(r)?);
    }
    Ok(out)
}

fn read_list_u8<'a, T>(
    r: &mut BufferReader<'a>,
    mut f: impl FnMut(&mut BufferReader<'a>) -> Result<T, ProtocolError>,
) -> Result<Vec<T>, ProtocolError> {
    let count = r.read_u8()? as usize;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(f(r)?);
    }
    Ok(out)
}

// =============================================================================
// Per-message decoding
// =============================================================================

/// Decode one message, starting at its type byte.
///
/// Returns `Ok(None)` for an unrecognized type byte; the cursor position is
/// then unspecified and the caller should `reset()` before inspecting the
/// frame.
pub fn decode_message(r: &mut BufferReader) -> Result<Option<Message>, ProtocolError> {
    let raw_type = r.read_u8()?;
    let Some(msg_type) = MessageType::from_u8(raw_type) else {
        return Ok(None);
    };

    let msg = match msg_type {
        MessageType::Retry => Message::Retry,
        MessageType::Hint => {
            let hint_type = r.read_u8()?;
            let player = r.read_u8()?;
            // Old engine cores sent a 32-bit hint value. Width-sniffing on
            // the leftover byte count is how every client tells them apart.
            let hint = if r.remaining() > 4 {
                r.read_u64()?
            } else {
                r.read_u32()? as u64
            };
            Message::Hint {
                hint_type,
                player,
                hint,
            }
        }
        MessageType::Waiting => Message::Waiting,
        MessageType::Start => Message::Start,
        MessageType::Win => Message::Win {
            player: r.read_u8()?,
            reason: r.read_u8()?,
        },
        MessageType::UpdateData => Message::UpdateData,
        MessageType::UpdateCard => Message::UpdateCard,
        MessageType::RequestDeck => Message::RequestDeck,

        MessageType::SelectBattleCmd => {
            let player = r.read_u8()?;
            let chains = read_list_u32(r, |r| {
                Ok(CardLocActive {
                    code: r.read_u32()?,
                    controller: r.read_u8()?,
                    location: r.read_u8()? as u32,
                    sequence: r.read_u32()?,
                    description: r.read_u64()?,
                    client_mode: r.read_u8()? as u32,
                })
            })?;
            let attacks = read_list_u32(r, |r| {
                Ok(CardLocAttack {
                    code: r.read_u32()?,
                    controller: r.read_u8()?,
                    location: r.read_u8()? as u32,
                    sequence: r.read_u8()? as u32,
                    can_direct: r.read_bool()?,
                })
            })?;
            Message::SelectBattleCmd {
                player,
                chains,
                attacks,
                to_m2: r.read_bool()?,
                to_ep: r.read_bool()?,
            }
        }
        MessageType::SelectIdleCmd => {
            let player = r.read_u8()?;
            let summons = read_list_u32(r, read_card_loc)?;
            let special_summons = read_list_u32(r, read_card_loc)?;
            let pos_changes = read_list_u32(r, |r| {
                Ok(CardLoc {
                    code: r.read_u32()?,
                    controller: r.read_u8()?,
                    location: r.read_u8()? as u32,
                    sequence: r.read_u8()? as u32,
                })
            })?;
            let monster_sets = read_list_u32(r, read_card_loc)?;
            let spell_sets = read_list_u32(r, read_card_loc)?;
            let activates = read_list_u32(r, |r| {
                Ok(CardLocActive {
                    code: r.read_u32()?,
                    controller: r.read_u8()?,
                    location: r.read_u8()? as u32,
                    sequence: r.read_u32()?,
                    description: r.read_u64()?,
                    client_mode: r.read_u32()?,
                })
            })?;
            Message::SelectIdleCmd {
                player,
                summons,
                special_summons,
                pos_changes,
                monster_sets,
                spell_sets,
                activates,
                to_bp: r.read_bool()?,
                to_ep: r.read_bool()?,
                shuffle: r.read_bool()?,
            }
        }
        MessageType::SelectEffectYn => Message::SelectEffectYn {
            player: r.read_u8()?,
            code: r.read_u32()?,
            place: read_loc_pos(r)?,
            description: r.read_u64()?,
        },
        MessageType::SelectYesNo => Message::SelectYesNo {
            player: r.read_u8()?,
            description: r.read_u64()?,
        },
        MessageType::SelectOption => Message::SelectOption {
            player: r.read_u8()?,
            options: read_list_u8(r, |r| r.read_u64())?,
        },
        MessageType::SelectCard => Message::SelectCard {
            player: r.read_u8()?,
            can_cancel: r.read_bool()?,
            min: r.read_u32()?,
            max: r.read_u32()?,
            selects: read_list_u8(r, read_card_loc_pos)?,
        },
        MessageType::SelectChain => Message::SelectChain {
            player: r.read_u8()?,
            spe_count: r.read_u8()?,
            forced: r.read_bool()?,
            hint_timing: r.read_u32()?,
            hint_timing_other: r.read_u32()?,
            selects: read_list_u8(r, |r| {
                Ok(CardLocPosActive {
                    code: r.read_u32()?,
                    place: read_loc_pos(r)?,
                    description: r.read_u64()?,
                    client_mode: r.read_u8()? as u32,
                })
            })?,
        },
        MessageType::SelectPlace => Message::SelectPlace {
            player: r.read_u8()?,
            count: r.read_u8()?,
            field_mask: r.read_u32()?,
        },
        // The one prompt whose player field is a full u32.
        MessageType::SelectPosition => Message::SelectPosition {
            player: r.read_u32()? as u8,
            code: r.read_u32()?,
            positions: r.read_u8()? as u32,
        },
        MessageType::SelectTribute => Message::SelectTribute {
            player: r.read_u8()?,
            can_cancel: r.read_bool()?,
            min: r.read_u32()?,
            max: r.read_u32()?,
            selects: read_list_u32(r, |r| {
                Ok(CardLocTribute {
                    code: r.read_u32()?,
                    controller: r.read_u8()?,
                    location: r.read_u8()? as u32,
                    sequence: r.read_u32()?,
                    release_param: r.read_u8()?,
                })
            })?,
        },
        MessageType::SortChain | MessageType::SortCard => {
            let player = r.read_u8()?;
            // Sort prompts widen the location to u32.
            let cards = read_list_u32(r, |r| {
                Ok(CardLoc {
                    code: r.read_u32()?,
                    controller: r.read_u8()?,
                    location: r.read_u32()?,
                    sequence: r.read_u32()?,
                })
            })?;
            if msg_type == MessageType::SortChain {
                Message::SortChain { player, cards }
            } else {
                Message::SortCard { player, cards }
            }
        }
        MessageType::SelectCounter => Message::SelectCounter {
            player: r.read_u8()?,
            counter_type: r.read_u16()?,
            count: r.read_u16()?,
            cards: read_list_u32(r, |r| {
                Ok(CardLocCounter {
                    code: r.read_u32()?,
                    controller: r.read_u8()?,
                    location: r.read_u8()? as u32,
                    sequence: r.read_u8()? as u32,
                    count: r.read_u16()?,
                })
            })?,
        },
        MessageType::SelectSum => {
            let player = r.read_u8()?;
            let select_max = r.read_u8()?;
            let amount = r.read_u32()?;
            let min = r.read_u32()?;
            let max = r.read_u32()?;
            let read_sum = |r: &mut BufferReader| {
                Ok(CardLocSum {
                    code: r.read_u32()?,
                    controller: r.read_u8()?,
                    location: r.read_u8()? as u32,
                    sequence: r.read_u32()?,
                    amount: r.read_u32()?,
                })
            };
            let selects = read_list_u32(r, read_sum)?;
            let selects_must = read_list_u32(r, read_sum)?;
            Message::SelectSum {
                player,
                select_max,
                amount,
                min,
                max,
                selects,
                selects_must,
            }
        }
        MessageType::SelectDisfield => Message::SelectDisfield {
            player: r.read_u8()?,
            count: r.read_u8()?,
            field_mask: r.read_u32()?,
        },
        MessageType::SelectUnselectCard => Message::SelectUnselectCard {
            player: r.read_u8()?,
            can_finish: r.read_bool()?,
            can_cancel: r.read_bool()?,
            min: r.read_u32()?,
            max: r.read_u32()?,
            select_cards: read_list_u32(r, read_card_loc_pos)?,
            unselect_cards: read_list_u32(r, read_card_loc_pos)?,
        },

        MessageType::ConfirmDecktop => Message::ConfirmDecktop {
            player: r.read_u8()?,
            cards: read_list_u32(r, read_card_loc)?,
        },
        MessageType::ConfirmCards => Message::ConfirmCards {
            player: r.read_u8()?,
            cards: read_list_u32(r, read_card_loc)?,
        },
        MessageType::ShuffleDeck => Message::ShuffleDeck {
            player: r.read_u8()?,
        },
        MessageType::ShuffleHand => Message::ShuffleHand {
            player: r.read_u8()?,
            cards: read_list_u32(r, |r| r.read_u32())?,
        },
        MessageType::RefreshDeck => Message::RefreshDeck,
        MessageType::SwapGraveDeck => {
            let player = r.read_u8()?;
            let deck_size = r.read_u32()?;
            let bitmap_len = r.read_u32()? as usize;
            let bitmap = r.read_bytes(bitmap_len)?;
            let mut returned_to_extra = Vec::new();
            for i in 0..deck_size {
                let byte = bitmap.get(i as usize / 8).copied().unwrap_or(0);
                if byte & (1 << (i % 8)) != 0 {
                    returned_to_extra.push(i);
                }
            }
            Message::SwapGraveDeck {
                player,
                deck_size,
                returned_to_extra,
            }
        }
        MessageType::ShuffleSetCard => Message::ShuffleSetCard {
            location: r.read_u8()? as u32,
            cards: read_list_u32(r, |r| Ok((read_loc_pos(r)?, read_loc_pos(r)?)))?,
        },
        MessageType::ReverseDeck => Message::ReverseDeck,
        MessageType::DeckTop => Message::DeckTop {
            player: r.read_u8()?,
            count: r.read_u32()?,
            code: r.read_u32()?,
            position: r.read_u32()?,
        },
        MessageType::ShuffleExtra => Message::ShuffleExtra {
            player: r.read_u8()?,
            cards: read_list_u32(r, |r| r.read_u32())?,
        },
        MessageType::NewTurn => Message::NewTurn {
            player: r.read_u8()?,
        },
        MessageType::NewPhase => Message::NewPhase {
            phase: r.read_u16()?,
        },
        MessageType::ConfirmExtratop => Message::ConfirmExtratop {
            player: r.read_u8()?,
            cards: read_list_u32(r, read_card_loc)?,
        },

        MessageType::Move => Message::Move {
            code: r.read_u32()?,
            from: read_loc_pos(r)?,
            to: read_loc_pos(r)?,
        },
        MessageType::PosChange => Message::PosChange {
            code: r.read_u32()?,
            controller: r.read_u8()?,
            location: r.read_u8()? as u32,
            sequence: r.read_u8()? as u32,
            prev_position: r.read_u8()? as u32,
            position: r.read_u8()? as u32,
        },
        MessageType::Set => Message::Set {
            code: r.read_u32()?,
            place: read_loc_pos(r)?,
        },
        MessageType::Swap => Message::Swap {
            card1: read_card_loc_pos(r)?,
            card2: read_card_loc_pos(r)?,
        },
        MessageType::FieldDisabled => Message::FieldDisabled {
            field_mask: r.read_u32()?,
        },
        MessageType::Summoning => Message::Summoning {
            code: r.read_u32()?,
            place: read_loc_pos(r)?,
        },
        MessageType::Summoned => Message::Summoned,
        MessageType::SpSummoning => Message::SpSummoning {
            code: r.read_u32()?,
            place: read_loc_pos(r)?,
        },
        MessageType::SpSummoned => Message::SpSummoned,
        MessageType::FlipSummoning => Message::FlipSummoning {
            code: r.read_u32()?,
            place: read_loc_pos(r)?,
        },
        MessageType::FlipSummoned => Message::FlipSummoned,

        MessageType::Chaining => Message::Chaining {
            code: r.read_u32()?,
            place: read_loc_pos(r)?,
            triggering_controller: r.read_u8()?,
            triggering_location: r.read_u8()? as u32,
            triggering_sequence: r.read_u32()?,
            description: r.read_u64()?,
            chain_size: r.read_u32()?,
        },
        MessageType::Chained => Message::Chained {
            chain_size: r.read_u32()?,
        },
        MessageType::ChainSolving => Message::ChainSolving {
            chain_size: r.read_u32()?,
        },
        MessageType::ChainSolved => Message::ChainSolved {
            chain_size: r.read_u32()?,
        },
        MessageType::ChainEnd => Message::ChainEnd,
        MessageType::ChainNegated => Message::ChainNegated {
            chain_size: r.read_u32()?,
        },
        MessageType::ChainDisabled => Message::ChainDisabled {
            chain_size: r.read_u32()?,
        },

        MessageType::CardSelected => Message::CardSelected {
            cards: read_list_u32(r, read_loc_pos)?,
        },
        MessageType::RandomSelected => Message::RandomSelected {
            player: r.read_u8()?,
            cards: read_list_u32(r, read_loc_pos)?,
        },
        MessageType::BecomeTarget => Message::BecomeTarget {
            cards: read_list_u32(r, read_loc_pos)?,
        },
        MessageType::Draw => Message::Draw {
            player: r.read_u8()?,
            drawn: read_list_u32(r, read_card_pos)?,
        },
        MessageType::Damage => Message::Damage {
            player: r.read_u8()?,
            amount: r.read_u32()?,
        },
        MessageType::Recover => Message::Recover {
            player: r.read_u8()?,
            amount: r.read_u32()?,
        },
        MessageType::Equip => Message::Equip {
            card: read_loc_pos(r)?,
            target: read_loc_pos(r)?,
        },
        MessageType::LpUpdate => Message::LpUpdate {
            player: r.read_u8()?,
            lp: r.read_u32()?,
        },
        MessageType::CardTarget => Message::CardTarget {
            card: read_loc_pos(r)?,
            target: read_loc_pos(r)?,
        },
        MessageType::CancelTarget => Message::CancelTarget {
            card: read_loc_pos(r)?,
            target: read_loc_pos(r)?,
        },
        MessageType::PayLpCost => Message::PayLpCost {
            player: r.read_u8()?,
            amount: r.read_u32()?,
        },
        MessageType::AddCounter => Message::AddCounter {
            counter_type: r.read_u16()?,
            controller: r.read_u8()?,
            location: r.read_u8()? as u32,
            sequence: r.read_u8()? as u32,
            count: r.read_u16()?,
        },
        MessageType::RemoveCounter => Message::RemoveCounter {
            counter_type: r.read_u16()?,
            controller: r.read_u8()?,
            location: r.read_u8()? as u32,
            sequence: r.read_u8()? as u32,
            count: r.read_u16()?,
        },

        MessageType::Attack => {
            let card = read_loc_pos(r)?;
            let target = read_loc_pos(r)?;
            Message::Attack {
                card,
                // All-zero location marks a direct attack.
                target: (target.location != 0).then_some(target),
            }
        }
        MessageType::Battle => {
            let read_battle_card = |r: &mut BufferReader| -> Result<BattleCard, ProtocolError> {
                Ok(BattleCard {
                    place: read_loc_pos(r)?,
                    attack: r.read_u32()?,
                    defense: r.read_u32()?,
                    destroyed: r.read_bool()?,
                })
            };
            let card = read_battle_card(r)?;
            let target = read_battle_card(r)?;
            Message::Battle {
                card,
                target: (target.place.location != 0).then_some(target),
            }
        }
        MessageType::AttackDisabled => Message::AttackDisabled,
        MessageType::DamageStepStart => Message::DamageStepStart,
        MessageType::DamageStepEnd => Message::DamageStepEnd,

        MessageType::MissedEffect => Message::MissedEffect {
            place: read_loc_pos(r)?,
            code: r.read_u32()?,
        },
        MessageType::BeChainTarget => Message::BeChainTarget,
        MessageType::CreateRelation => Message::CreateRelation,
        MessageType::ReleaseRelation => Message::ReleaseRelation,

        MessageType::TossCoin => Message::TossCoin {
            player: r.read_u8()?,
            results: read_list_u8(r, |r| r.read_bool())?,
        },
        MessageType::TossDice => Message::TossDice {
            player: r.read_u8()?,
            results: read_list_u8(r, |r| r.read_u8())?,
        },
        MessageType::RockPaperScissors => Message::RockPaperScissors {
            player: r.read_u8()?,
        },
        MessageType::HandResult => {
            let res = r.read_u8()?;
            Message::HandResult {
                results: [res & 0x3, (res >> 2) & 0x3],
            }
        }

        MessageType::AnnounceRace => Message::AnnounceRace {
            player: r.read_u8()?,
            count: r.read_u8()?,
            available: r.read_u64()?,
        },
        MessageType::AnnounceAttribute => Message::AnnounceAttribute {
            player: r.read_u8()?,
            count: r.read_u8()?,
            available: r.read_u32()?,
        },
        MessageType::AnnounceCard => Message::AnnounceCard {
            player: r.read_u8()?,
            opcodes: read_list_u8(r, |r| Ok(OpCode::from_raw(r.read_u64()?)))?,
        },
        MessageType::AnnounceNumber => Message::AnnounceNumber {
            player: r.read_u8()?,
            options: read_list_u8(r, |r| r.read_u64())?,
        },

        MessageType::CardHint => Message::CardHint {
            place: read_loc_pos(r)?,
            card_hint: r.read_u8()?,
            description: r.read_u64()?,
        },
        MessageType::TagSwap => {
            let player = r.read_u8()?;
            let deck_size = r.read_u32()?;
            let extra_count = r.read_u32()?;
            let extra_faceup_count = r.read_u32()?;
            let hand_count = r.read_u32()?;
            let deck_top = r.read_u32()?;
            let mut hand = Vec::with_capacity(hand_count as usize);
            for _ in 0..hand_count {
                hand.push(read_card_pos(r)?);
            }
            let mut extra = Vec::with_capacity(extra_count as usize);
            for _ in 0..extra_count {
                extra.push(read_card_pos(r)?);
            }
            Message::TagSwap {
                player,
                deck_size,
                extra_faceup_count,
                deck_top_card: (deck_top != 0).then_some(deck_top),
                hand,
                extra,
            }
        }
        MessageType::ReloadField => Message::ReloadField(decode_field(r)?),
        MessageType::AiName => Message::AiName,
        MessageType::ShowHint => Message::ShowHint,
        MessageType::PlayerHint => Message::PlayerHint {
            player: r.read_u8()?,
            player_hint: r.read_u8()?,
            description: r.read_u64()?,
        },
        MessageType::MatchKill => Message::MatchKill {
            code: r.read_u32()?,
        },
        MessageType::CustomMsg => Message::CustomMsg,
        MessageType::RemoveCards => Message::RemoveCards {
            cards: read_list_u32(r, read_loc_pos)?,
        },
    };
    Ok(Some(msg))
}

/// Decode a whole engine output buffer of length-prefixed frames.
///
/// Frames of unknown type, and frames whose body fails to decode, are
/// skipped with a warning. A truncated frame header or body is still an
/// error, since nothing after it can be trusted.
pub fn decode_message_stream(buf: &[u8]) -> Result<Vec<Message>, ProtocolError> {
    let mut r = BufferReader::new(buf);
    let mut out = Vec::new();
    while r.remaining() > 0 {
        let len = r.read_u32()? as usize;
        let mut body = r.sub(len)?;
        match decode_message(&mut body) {
            Ok(Some(msg)) => out.push(msg),
            Ok(None) => {
                body.reset();
                let raw_type = body.read_u8().unwrap_or(0);
                warn!(msg_type = raw_type, "skipping message of unknown type");
            }
            Err(err) => {
                body.reset();
                let raw_type = body.read_u8().unwrap_or(0);
                warn!(msg_type = raw_type, %err, "skipping undecodable message");
            }
        }
    }
    Ok(out)
}
