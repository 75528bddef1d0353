// crates/duel-protocol/tests/request_encode.rs
use duel_core::card::NewCardInfo;
use duel_core::query::{QueryRequest, QueryFlag};
use duel_core::{Location, Position};
use duel_protocol::request::{encode_new_card, encode_query_request};

#[test]
fn query_request_struct_layout() {
    let buf = encode_query_request(&QueryRequest {
        flags: QueryFlag::CODE | QueryFlag::ATTACK,
        controller: 1,
        location: Location::MZONE,
        sequence: 4,
        overlay_sequence: 0,
    });
    assert_eq!(buf.len(), 20);
    assert_eq!(&buf[0..4], &(QueryFlag::CODE | QueryFlag::ATTACK).to_le_bytes());
    assert_eq!(buf[4], 1);
    // Padding bytes up to the next u32.
    assert_eq!(&buf[5..8], &[0, 0, 0]);
    assert_eq!(&buf[8..12], &Location::MZONE.to_le_bytes());
    assert_eq!(&buf[12..16], &4u32.to_le_bytes());
    assert_eq!(&buf[16..20], &[0, 0, 0, 0]);
}

#[test]
fn new_card_struct_layout() {
    let buf = encode_new_card(&NewCardInfo {
        team: 1,
        duelist: 0,
        code: 46986414,
        controller: 1,
        location: Location::DECK,
        sequence: 0,
        position: Position::FACEDOWN_DEFENSE,
    });
    assert_eq!(buf.len(), 24);
    assert_eq!(&buf[0..2], &[1, 0]);
    assert_eq!(&buf[2..4], &[0, 0]); // padding
    assert_eq!(&buf[4..8], &46986414u32.to_le_bytes());
    assert_eq!(buf[8], 1);
    assert_eq!(&buf[9..12], &[0, 0, 0]); // padding
    assert_eq!(&buf[12..16], &Location::DECK.to_le_bytes());
    assert_eq!(&buf[16..20], &[0, 0, 0, 0]);
    assert_eq!(&buf[20..24], &Position::FACEDOWN_DEFENSE.to_le_bytes());
}
