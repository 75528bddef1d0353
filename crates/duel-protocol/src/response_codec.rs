//! Binary encoding of player responses.
//!
//! Response buffers are tiny, mostly little-endian `i32`s:
//!
//! ```text
//! SelectBattleCmd / SelectIdleCmd:
//!   [0..4] action | (index << 16)  (i32)
//! SelectCard / SelectTribute / SelectSum:
//!   [0..4] 0, [4..8] count, then count * i32 indices
//!   (cancel: single i32 = -1)
//! SelectPlace / SelectDisfield:
//!   3 bytes per zone (player, location, sequence), no count prefix
//! SelectCounter:
//!   one i16 per presented card
//! SortCard:
//!   u8 count, then one u8 per card (keep order: single i8 = -1)
//! ```
//!
//! The engine validates against the prompt it sent; an out-of-range index
//! comes back as a `Retry` message rather than an encode error, so only
//! locally checkable values are validated here.

use duel_core::response::Response;

use crate::buffer::BufferWriter;
use crate::error::ProtocolError;

/// Encode one response into the buffer handed back to the engine.
pub fn encode_response(response: &Response) -> Result<Vec<u8>, ProtocolError> {
    let mut w = BufferWriter::new();
    match response {
        Response::SelectBattleCmd { action, index }
        | Response::SelectIdleCmd { action, index } => {
            w.write_i32((action | (index.unwrap_or(0) << 16)) as i32);
        }
        Response::SelectEffectYn { yes } | Response::SelectYesNo { yes } => {
            w.write_i32(*yes as i32);
        }
        Response::SelectOption { index } => {
            w.write_i32(*index as i32);
        }
        Response::SelectCard { indices } | Response::SelectTribute { indices } => {
            match indices {
                Some(indices) => {
                    w.write_i32(0);
                    w.write_i32(indices.len() as i32);
                    for &i in indices {
                        w.write_i32(i as i32);
                    }
                }
                None => w.write_i32(-1),
            }
        }
        Response::SelectUnselectCard { index } => match index {
            Some(i) => {
                w.write_i32(0);
                w.write_i32(1);
                w.write_i32(*i as i32);
            }
            None => w.write_i32(-1),
        },
        Response::SelectChain { index } => match index {
            Some(i) => w.write_i32(*i as i32),
            None => w.write_i32(-1),
        },
        Response::SelectPlace { places } | Response::SelectDisfield { places } => {
            for place in places {
                if place.player > i8::MAX as u8
                    || place.location > i8::MAX as u8
                    || place.sequence > i8::MAX as u8
                {
                    return Err(ProtocolError::InvalidResponse(
                        "field place out of range",
                    ));
                }
                w.write_i8(place.player as i8);
                w.write_i8(place.location as i8);
                w.write_i8(place.sequence as i8);
            }
        }
        Response::SelectPosition { position } => {
            w.write_i32(*position as i32);
        }
        Response::SelectCounter { counters } => {
            for &count in counters {
                w.write_i16(count as i16);
            }
        }
        Response::SelectSum { indices } => {
            w.write_i32(0);
            w.write_i32(indices.len() as i32);
            for &i in indices {
                w.write_i32(i as i32);
            }
        }
        Response::SortCard { order } => match order {
            Some(order) => {
                if order.len() > u8::MAX as usize {
                    return Err(ProtocolError::InvalidResponse("sort order too long"));
                }
                w.write_u8(order.len() as u8);
                w.write_bytes(order);
            }
            None => w.write_i8(-1),
        },
        Response::AnnounceRace { races } => {
            let mask = races.iter().fold(0u64, |acc, &r| acc | r);
            w.write_u64(mask);
        }
        Response::AnnounceAttribute { attributes } => {
            let mask = attributes.iter().fold(0u32, |acc, &a| acc | a);
            w.write_i32(mask as i32);
        }
        Response::AnnounceCard { code } => {
            w.write_u32(*code);
        }
        Response::AnnounceNumber { value } => {
            w.write_i32(*value);
        }
        Response::RockPaperScissors { value } => {
            if !(1..=3).contains(value) {
                return Err(ProtocolError::InvalidResponse(
                    "rock-paper-scissors hand must be 1, 2 or 3",
                ));
            }
            w.write_i32(*value as i32);
        }
    }
    Ok(w.into_vec())
}
