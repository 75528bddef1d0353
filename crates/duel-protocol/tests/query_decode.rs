// crates/duel-protocol/tests/query_decode.rs
use duel_core::messages::LocPos;
use duel_core::query::{CounterEntry, LinkInfo, QueryFlag};
use duel_core::{Location, Position};
use duel_protocol::buffer::{BufferReader, BufferWriter};
use duel_protocol::query_codec::{decode_field, decode_query, decode_query_location};

fn entry_u32(w: &mut BufferWriter, flag: u32, value: u32) {
    w.write_u16(8);
    w.write_u32(flag);
    w.write_u32(value);
}

fn end_entry(w: &mut BufferWriter) {
    w.write_u16(4);
    w.write_u32(QueryFlag::END);
}

#[test]
fn basic_record() {
    let mut w = BufferWriter::new();
    entry_u32(&mut w, QueryFlag::CODE, 46986414);
    entry_u32(&mut w, QueryFlag::POSITION, Position::FACEUP_ATTACK);
    entry_u32(&mut w, QueryFlag::ATTACK, 2500);
    w.write_u16(12);
    w.write_u32(QueryFlag::RACE);
    w.write_u64(0x2);
    end_entry(&mut w);
    let buf = w.into_vec();

    let info = decode_query(&mut BufferReader::new(&buf)).unwrap().unwrap();
    assert_eq!(info.code, Some(46986414));
    assert_eq!(info.position, Some(Position::FACEUP_ATTACK));
    assert_eq!(info.attack, Some(2500));
    assert_eq!(info.race, Some(0x2));
    // Flags that were never answered stay empty.
    assert_eq!(info.defense, None);
    assert_eq!(info.link, None);
}

#[test]
fn empty_record_terminator_means_no_card() {
    let buf = [0u8, 0u8];
    assert_eq!(decode_query(&mut BufferReader::new(&buf)).unwrap(), None);
}

#[test]
fn unknown_flag_entries_are_skipped_whole() {
    let mut w = BufferWriter::new();
    // Unrecognized flag with a 6-byte payload.
    w.write_u16(10);
    w.write_u32(0x40000000);
    w.write_bytes(&[1, 2, 3, 4, 5, 6]);
    entry_u32(&mut w, QueryFlag::LEVEL, 8);
    end_entry(&mut w);
    let buf = w.into_vec();

    let info = decode_query(&mut BufferReader::new(&buf)).unwrap().unwrap();
    assert_eq!(info.level, Some(8));
}

#[test]
fn wrong_width_known_flag_does_not_desync() {
    let mut w = BufferWriter::new();
    // CODE with a bogus 6-byte payload; the cursor must still land on the
    // next entry.
    w.write_u16(10);
    w.write_u32(QueryFlag::CODE);
    w.write_bytes(&[0xff; 6]);
    entry_u32(&mut w, QueryFlag::DEFENSE, 2100);
    end_entry(&mut w);
    let buf = w.into_vec();

    let info = decode_query(&mut BufferReader::new(&buf)).unwrap().unwrap();
    assert_eq!(info.code, None);
    assert_eq!(info.defense, Some(2100));
}

#[test]
fn card_reference_fields() {
    let mut w = BufferWriter::new();
    // Equip card: a real reference.
    w.write_u16(14);
    w.write_u32(QueryFlag::EQUIP_CARD);
    w.write_u8(1);
    w.write_u8(Location::SZONE as u8);
    w.write_u32(3);
    w.write_u32(Position::FACEUP_ATTACK);
    // Reason card: all-zero reference, meaning none.
    w.write_u16(14);
    w.write_u32(QueryFlag::REASON_CARD);
    w.write_bytes(&[0; 10]);
    end_entry(&mut w);
    let buf = w.into_vec();

    let info = decode_query(&mut BufferReader::new(&buf)).unwrap().unwrap();
    assert_eq!(
        info.equip_card,
        Some(Some(LocPos {
            controller: 1,
            location: Location::SZONE,
            sequence: 3,
            position: Position::FACEUP_ATTACK,
            overlay_sequence: None,
        }))
    );
    assert_eq!(info.reason_card, Some(None));
}

#[test]
fn list_valued_flags() {
    let mut w = BufferWriter::new();
    // Two overlay materials.
    w.write_u16(16);
    w.write_u32(QueryFlag::OVERLAY_CARD);
    w.write_u32(2);
    w.write_u32(111);
    w.write_u32(222);
    // One counter.
    w.write_u16(12);
    w.write_u32(QueryFlag::COUNTERS);
    w.write_u32(1);
    w.write_u16(3); // count
    w.write_u16(0x10); // kind
    // Link rating and markers together.
    w.write_u16(12);
    w.write_u32(QueryFlag::LINK);
    w.write_u32(2);
    w.write_u32(0o011); // bottom-left | bottom
    end_entry(&mut w);
    let buf = w.into_vec();

    let info = decode_query(&mut BufferReader::new(&buf)).unwrap().unwrap();
    assert_eq!(info.overlay_cards, Some(vec![111, 222]));
    assert_eq!(info.counters, Some(vec![CounterEntry { count: 3, kind: 0x10 }]));
    assert_eq!(
        info.link,
        Some(LinkInfo {
            rating: 2,
            markers: 0o011
        })
    );
}

#[test]
fn location_query_yields_one_record_per_slot() {
    let mut w = BufferWriter::new();
    w.write_u32(0); // total length word, ignored
    // Slot 0: a card with a code.
    entry_u32(&mut w, QueryFlag::CODE, 555);
    end_entry(&mut w);
    // Slot 1: empty.
    w.write_u16(0);
    // Slot 2: another card.
    entry_u32(&mut w, QueryFlag::CODE, 777);
    end_entry(&mut w);
    let buf = w.into_vec();

    let cards = decode_query_location(&mut BufferReader::new(&buf)).unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].as_ref().unwrap().code, Some(555));
    assert!(cards[1].is_none());
    assert_eq!(cards[2].as_ref().unwrap().code, Some(777));
}

#[test]
fn field_snapshot_round() {
    let mut w = BufferWriter::new();
    w.write_u32(0x2000); // emzone rules
    for player in 0..2u32 {
        w.write_u32(8000 - player * 1000);
        // Monster zones: one occupied xyz in slot 2 for player 0.
        for seq in 0..7u8 {
            if player == 0 && seq == 2 {
                w.write_u8(1);
                w.write_u8(Position::FACEUP_ATTACK as u8);
                w.write_u32(2); // materials
            } else {
                w.write_u8(0);
            }
        }
        for _ in 0..8u8 {
            w.write_u8(0);
        }
        w.write_u32(38); // deck
        w.write_u32(5); // hand
        w.write_u32(1); // grave
        w.write_u32(0); // banish
        w.write_u32(14); // extra
    }
    w.write_u32(0); // no chain
    let buf = w.into_vec();
    // 4 flags + player 0 (39 + 5 extra for the occupied slot) + player 1
    // (39, all slots empty) + 4 chain count
    assert_eq!(buf.len(), 4 + 44 + 39 + 4);

    let field = decode_field(&mut BufferReader::new(&buf)).unwrap();
    assert_eq!(field.flags, 0x2000);
    assert_eq!(field.players[0].lp, 8000);
    assert_eq!(field.players[1].lp, 7000);
    let card = field.players[0].monsters[2].unwrap();
    assert_eq!(card.position, Position::FACEUP_ATTACK);
    assert_eq!(card.materials, 2);
    assert!(field.players[0].monsters[3].is_none());
    assert_eq!(field.players[1].deck_size, 38);
    assert!(field.chain.is_empty());
}
