//! Binary decoding of card query answers and field snapshots.
//!
//! Query answer layout:
//!
//! ```text
//! repeated:
//!   [0..2] : entry size (u16), counting the flag word and payload
//!   [2..6] : query flag (u32)
//!   [6..]  : payload, size - 4 bytes, layout depends on the flag
//! ```
//!
//! Two terminators exist:
//! - an entry of size 0 means "no card here" and yields `None`;
//! - the `END` flag (0x80000000) closes a populated record.
//!
//! Each payload is decoded inside its declared window, so an entry with an
//! unknown flag (or an unexpected payload width) is skipped whole and the
//! cursor stays in sync with the next entry.

use duel_core::messages::{ChainLink, LocPos};
use duel_core::query::{
    CardQueryInfo, CounterEntry, FieldCard, FieldPlayer, FieldSnapshot, LinkInfo, QueryFlag,
};

use crate::buffer::BufferReader;
use crate::error::ProtocolError;
use crate::message_codec::read_loc_pos;

/// Read a 10-byte card reference; all-zero means "no card".
fn read_card_ref(r: &mut BufferReader) -> Result<Option<LocPos>, ProtocolError> {
    let place = read_loc_pos(r)?;
    let empty = place.controller == 0
        && place.location == 0
        && place.sequence == 0
        && place.position == 0
        && place.overlay_sequence.is_none();
    Ok((!empty).then_some(place))
}

/// Decode one card's query answer.
///
/// Returns `Ok(None)` for the empty-record terminator (the queried slot
/// holds no card).
pub fn decode_query(r: &mut BufferReader) -> Result<Option<CardQueryInfo>, ProtocolError> {
    let mut info = CardQueryInfo::default();

    while r.remaining() > 0 {
        let size = r.read_u16()? as usize;
        if size == 0 {
            return Ok(None);
        }
        if size < 4 {
            // Malformed entry; salvage what was decoded so far.
            break;
        }
        let flag = r.read_u32()?;
        if flag == QueryFlag::END {
            break;
        }
        let mut p = r.sub(size - 4)?;
        let width = p.remaining();

        match flag {
            QueryFlag::CODE if width == 4 => info.code = Some(p.read_u32()?),
            QueryFlag::POSITION if width == 4 => info.position = Some(p.read_u32()?),
            QueryFlag::ALIAS if width == 4 => info.alias = Some(p.read_u32()?),
            QueryFlag::LEVEL if width == 4 => info.level = Some(p.read_u32()?),
            QueryFlag::RANK if width == 4 => info.rank = Some(p.read_u32()?),
            QueryFlag::ATTRIBUTE if width == 4 => info.attribute = Some(p.read_u32()?),
            QueryFlag::RACE if width == 8 => info.race = Some(p.read_u64()?),
            QueryFlag::ATTACK if width == 4 => info.attack = Some(p.read_u32()?),
            QueryFlag::DEFENSE if width == 4 => info.defense = Some(p.read_u32()?),
            QueryFlag::BASE_ATTACK if width == 4 => info.base_attack = Some(p.read_u32()?),
            QueryFlag::BASE_DEFENSE if width == 4 => info.base_defense = Some(p.read_u32()?),
            QueryFlag::REASON if width == 4 => info.reason = Some(p.read_u32()?),
            QueryFlag::COVER if width == 4 => info.cover = Some(p.read_u32()?),
            QueryFlag::REASON_CARD if width == 10 => {
                info.reason_card = Some(read_card_ref(&mut p)?)
            }
            QueryFlag::EQUIP_CARD if width == 10 => {
                info.equip_card = Some(read_card_ref(&mut p)?)
            }
            QueryFlag::TARGET_CARD if width >= 4 => {
                let count = p.read_u32()?;
                let mut targets = Vec::new();
                for _ in 0..count {
                    if let Some(place) = read_card_ref(&mut p)? {
                        targets.push(place);
                    }
                }
                info.target_cards = Some(targets);
            }
            QueryFlag::OVERLAY_CARD if width >= 4 => {
                let count = p.read_u32()?;
                let mut codes = Vec::with_capacity(count as usize);
                for _ in 0..count {
                    codes.push(p.read_u32()?);
                }
                info.overlay_cards = Some(codes);
            }
            QueryFlag::COUNTERS if width >= 4 => {
                let count = p.read_u32()?;
                let mut counters = Vec::with_capacity(count as usize);
                for _ in 0..count {
                    counters.push(CounterEntry {
                        count: p.read_u16()?,
                        kind: p.read_u16()?,
                    });
                }
                info.counters = Some(counters);
            }
            QueryFlag::OWNER if width == 1 => info.owner = Some(p.read_u8()?),
            QueryFlag::STATUS if width == 4 => info.status = Some(p.read_u32()?),
            QueryFlag::IS_PUBLIC if width == 1 => info.is_public = Some(p.read_bool()?),
            QueryFlag::LSCALE if width == 4 => info.lscale = Some(p.read_u32()?),
            QueryFlag::RSCALE if width == 4 => info.rscale = Some(p.read_u32()?),
            QueryFlag::IS_HIDDEN if width == 1 => info.is_hidden = Some(p.read_bool()?),
            QueryFlag::LINK if width == 8 => {
                info.link = Some(LinkInfo {
                    rating: p.read_u32()?,
                    markers: p.read_u32()?,
                })
            }
            // Unknown flag or unexpected width: the whole entry window has
            // already been consumed from the parent cursor.
            _ => {}
        }
    }
    Ok(Some(info))
}

/// Decode a whole-location query answer: one record per slot, in sequence
/// order, `None` for empty slots.
pub fn decode_query_location(
    r: &mut BufferReader,
) -> Result<Vec<Option<CardQueryInfo>>, ProtocolError> {
    // Total byte length; redundant with the buffer itself.
    let _ = r.read_u32()?;
    let mut cards = Vec::new();
    while r.remaining() > 0 {
        cards.push(decode_query(r)?);
    }
    Ok(cards)
}

fn read_field_card(r: &mut BufferReader) -> Result<Option<FieldCard>, ProtocolError> {
    Ok(if r.read_bool()? {
        Some(FieldCard {
            position: r.read_u8()? as u32,
            materials: r.read_u32()?,
        })
    } else {
        None
    })
}

fn read_field_player(r: &mut BufferReader) -> Result<FieldPlayer, ProtocolError> {
    let lp = r.read_u32()?;
    let mut monsters: [Option<FieldCard>; 7] = Default::default();
    for slot in monsters.iter_mut() {
        *slot = read_field_card(r)?;
    }
    let mut spells: [Option<FieldCard>; 8] = Default::default();
    for slot in spells.iter_mut() {
        *slot = read_field_card(r)?;
    }
    Ok(FieldPlayer {
        lp,
        monsters,
        spells,
        deck_size: r.read_u32()?,
        hand_size: r.read_u32()?,
        grave_size: r.read_u32()?,
        banish_size: r.read_u32()?,
        extra_size: r.read_u32()?,
    })
}

/// Decode the whole-board snapshot carried by `ReloadField`.
pub fn decode_field(r: &mut BufferReader) -> Result<FieldSnapshot, ProtocolError> {
    let flags = r.read_u32()?;
    let players = [read_field_player(r)?, read_field_player(r)?];
    let chain_len = r.read_u32()?;
    let mut chain = Vec::with_capacity(chain_len.min(64) as usize);
    for _ in 0..chain_len {
        chain.push(ChainLink {
            code: r.read_u32()?,
            place: read_loc_pos(r)?,
            triggering_controller: r.read_u8()?,
            triggering_location: r.read_u8()? as u32,
            triggering_sequence: r.read_u32()?,
            description: r.read_u64()?,
        });
    }
    Ok(FieldSnapshot {
        flags,
        players,
        chain,
    })
}
