//! Write-only serialization of engine request structs.
//!
//! These mirror the engine's C structs, so fields sit at their naturally
//! aligned offsets and the buffer is padded out to the struct size:
//!
//! ```text
//! Query request (20 bytes):
//!   [0..4]   flags (u32)
//!   [4]      controller (u8), 3 padding bytes
//!   [8..12]  location (u32)
//!   [12..16] sequence (u32)
//!   [16..20] overlay_sequence (u32)
//! New card (24 bytes):
//!   [0]      team (u8)
//!   [1]      duelist (u8), 2 padding bytes
//!   [4..8]   code (u32)
//!   [8]      controller (u8), 3 padding bytes
//!   [12..16] location (u32)
//!   [16..20] sequence (u32)
//!   [20..24] position (u32)
//! ```

use duel_core::card::NewCardInfo;
use duel_core::query::QueryRequest;

use crate::buffer::BufferWriter;

/// Serialize a single-card query request.
pub fn encode_query_request(req: &QueryRequest) -> Vec<u8> {
    let mut w = BufferWriter::new_aligned();
    w.write_u32(req.flags);
    w.write_u8(req.controller);
    w.write_u32(req.location);
    w.write_u32(req.sequence);
    w.write_u32(req.overlay_sequence);
    w.pad_to(4);
    w.into_vec()
}

/// Serialize a card addition.
pub fn encode_new_card(card: &NewCardInfo) -> Vec<u8> {
    let mut w = BufferWriter::new_aligned();
    w.write_u8(card.team);
    w.write_u8(card.duelist);
    w.write_u32(card.code);
    w.write_u8(card.controller);
    w.write_u32(card.location);
    w.write_u32(card.sequence);
    w.write_u32(card.position);
    w.pad_to(4);
    w.into_vec()
}
