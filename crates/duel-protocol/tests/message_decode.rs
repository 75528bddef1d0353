// crates/duel-protocol/tests/message_decode.rs
use duel_core::messages::{LocPos, Message};
use duel_core::opcode::OpCode;
use duel_core::{Location, Position};
use duel_protocol::buffer::{BufferReader, BufferWriter};
use duel_protocol::error::ProtocolError;
use duel_protocol::message_codec::{decode_message, decode_message_stream};

fn decode(body: &[u8]) -> Option<Message> {
    decode_message(&mut BufferReader::new(body)).unwrap()
}

#[test]
fn draw_message() {
    let mut w = BufferWriter::new();
    w.write_u8(90); // Draw
    w.write_u8(1);
    w.write_u32(2);
    w.write_u32(46986414);
    w.write_u32(Position::FACEUP_ATTACK);
    w.write_u32(89631139);
    w.write_u32(Position::FACEDOWN);
    let msg = decode(&w.into_vec()).unwrap();
    let Message::Draw { player, drawn } = msg else {
        panic!("wrong variant: {msg:?}");
    };
    assert_eq!(player, 1);
    assert_eq!(drawn.len(), 2);
    assert_eq!(drawn[0].code, 46986414);
    assert_eq!(drawn[1].position, Position::FACEDOWN);
}

#[test]
fn zero_payload_messages() {
    assert_eq!(decode(&[1]), Some(Message::Retry));
    assert_eq!(decode(&[74]), Some(Message::ChainEnd));
    assert_eq!(decode(&[113]), Some(Message::DamageStepStart));
    assert_eq!(decode(&[163]), Some(Message::AiName));
}

#[test]
fn unknown_type_is_none_not_an_error() {
    assert_eq!(decode(&[200, 1, 2, 3]), None);
    assert_eq!(decode(&[9]), None); // a gap in the numbering
}

#[test]
fn truncated_body_is_an_error() {
    let mut w = BufferWriter::new();
    w.write_u8(90);
    w.write_u8(0);
    w.write_u32(1); // promises one entry, provides none
    let err = decode_message(&mut BufferReader::new(&w.into_vec())).unwrap_err();
    assert!(matches!(err, ProtocolError::UnexpectedEof { .. }));
}

#[test]
fn hint_value_width_depends_on_size() {
    // 4 bytes left after the header: legacy 32-bit hint.
    let mut w = BufferWriter::new();
    w.write_u8(2);
    w.write_u8(3); // selectmsg
    w.write_u8(0);
    w.write_u32(569);
    assert_eq!(
        decode(&w.into_vec()),
        Some(Message::Hint {
            hint_type: 3,
            player: 0,
            hint: 569
        })
    );

    // 8 bytes left: full 64-bit hint.
    let mut w = BufferWriter::new();
    w.write_u8(2);
    w.write_u8(3);
    w.write_u8(0);
    w.write_u64(0x1_0000_0239);
    assert_eq!(
        decode(&w.into_vec()),
        Some(Message::Hint {
            hint_type: 3,
            player: 0,
            hint: 0x1_0000_0239
        })
    );
}

#[test]
fn overlay_location_moves_the_position_word() {
    let mut w = BufferWriter::new();
    w.write_u8(50); // Move
    w.write_u32(1234);
    // from: hand, ordinary position
    w.write_u8(0);
    w.write_u8(Location::HAND as u8);
    w.write_u32(2);
    w.write_u32(Position::FACEDOWN);
    // to: overlay of a monster zone card
    w.write_u8(1);
    w.write_u8((Location::MZONE | Location::OVERLAY) as u8);
    w.write_u32(4);
    w.write_u32(1); // overlay sequence, not a position
    let Some(Message::Move { code, from, to }) = decode(&w.into_vec()) else {
        panic!("wrong variant");
    };
    assert_eq!(code, 1234);
    assert_eq!(from.position, Position::FACEDOWN);
    assert_eq!(from.overlay_sequence, None);
    assert_eq!(to.position, Position::FACEUP_ATTACK);
    assert_eq!(to.overlay_sequence, Some(1));
}

#[test]
fn direct_attack_has_no_target() {
    let mut w = BufferWriter::new();
    w.write_u8(110); // Attack
    w.write_u8(0);
    w.write_u8(Location::MZONE as u8);
    w.write_u32(2);
    w.write_u32(Position::FACEUP_ATTACK);
    // all-zero target
    w.write_u8(0);
    w.write_u8(0);
    w.write_u32(0);
    w.write_u32(0);
    let Some(Message::Attack { card, target }) = decode(&w.into_vec()) else {
        panic!("wrong variant");
    };
    assert_eq!(card.sequence, 2);
    assert_eq!(target, None);
}

#[test]
fn select_position_player_is_a_full_word() {
    let mut w = BufferWriter::new();
    w.write_u8(19);
    w.write_u32(1);
    w.write_u32(46986414);
    w.write_u8(Position::FACEUP as u8);
    assert_eq!(
        decode(&w.into_vec()),
        Some(Message::SelectPosition {
            player: 1,
            code: 46986414,
            positions: Position::FACEUP
        })
    );
}

#[test]
fn hand_result_unpacks_both_players() {
    // player 0: rock (2), player 1: paper (3)
    let res = 2 | (3 << 2);
    assert_eq!(
        decode(&[133, res]),
        Some(Message::HandResult { results: [2, 3] })
    );
}

#[test]
fn swap_grave_deck_bitmap() {
    let mut w = BufferWriter::new();
    w.write_u8(35);
    w.write_u8(0);
    w.write_u32(10); // deck size
    w.write_u32(2); // bitmap bytes
    w.write_u8(0b0000_0101); // indices 0 and 2
    w.write_u8(0b0000_0010); // index 9
    let Some(Message::SwapGraveDeck {
        returned_to_extra, ..
    }) = decode(&w.into_vec())
    else {
        panic!("wrong variant");
    };
    assert_eq!(returned_to_extra, vec![0, 2, 9]);
}

#[test]
fn announce_card_decodes_opcodes() {
    let mut w = BufferWriter::new();
    w.write_u8(142);
    w.write_u8(0);
    w.write_u8(3);
    w.write_u64(0x10); // literal: monster type bit
    w.write_u64(0x4000010200000000); // is-type
    w.write_u64(0x4000001500000000); // allow tokens
    let Some(Message::AnnounceCard { player, opcodes }) = decode(&w.into_vec()) else {
        panic!("wrong variant");
    };
    assert_eq!(player, 0);
    assert_eq!(
        opcodes,
        vec![OpCode::Value(0x10), OpCode::IsType, OpCode::AllowTokens]
    );
}

#[test]
fn select_card_list_length_is_one_byte() {
    let mut w = BufferWriter::new();
    w.write_u8(15);
    w.write_u8(0); // player
    w.write_u8(1); // can cancel
    w.write_u32(1);
    w.write_u32(2);
    w.write_u8(1); // one candidate
    w.write_u32(555);
    w.write_u8(0);
    w.write_u8(Location::HAND as u8);
    w.write_u32(0);
    w.write_u32(Position::FACEDOWN);
    let Some(Message::SelectCard {
        can_cancel,
        min,
        max,
        selects,
        ..
    }) = decode(&w.into_vec())
    else {
        panic!("wrong variant");
    };
    assert!(can_cancel);
    assert_eq!((min, max), (1, 2));
    assert_eq!(
        selects[0].place,
        LocPos {
            controller: 0,
            location: Location::HAND,
            sequence: 0,
            position: Position::FACEDOWN,
            overlay_sequence: None,
        }
    );
}

#[test]
fn stream_skips_unknown_frames() {
    let mut w = BufferWriter::new();
    // frame 1: NewTurn
    w.write_u32(2);
    w.write_u8(40);
    w.write_u8(1);
    // frame 2: unknown type with a body
    w.write_u32(5);
    w.write_u8(250);
    w.write_u32(0xdeadbeef);
    // frame 3: NewPhase
    w.write_u32(3);
    w.write_u8(41);
    w.write_u16(0x04);
    let messages = decode_message_stream(&w.into_vec()).unwrap();
    assert_eq!(
        messages,
        vec![
            Message::NewTurn { player: 1 },
            Message::NewPhase { phase: 0x04 }
        ]
    );
}

#[test]
fn stream_truncated_frame_is_an_error() {
    let mut w = BufferWriter::new();
    w.write_u32(10); // frame claims 10 bytes
    w.write_u8(40);
    let err = decode_message_stream(&w.into_vec()).unwrap_err();
    assert!(matches!(err, ProtocolError::UnexpectedEof { .. }));
}
