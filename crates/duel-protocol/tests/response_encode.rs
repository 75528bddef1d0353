// crates/duel-protocol/tests/response_encode.rs
use duel_core::response::{BattleCmdAction, FieldPlace, IdleCmdAction, Response};
use duel_core::{Location, Rps};
use duel_protocol::error::ProtocolError;
use duel_protocol::response_codec::encode_response;

fn encode(r: Response) -> Vec<u8> {
    encode_response(&r).unwrap()
}

#[test]
fn command_responses_pack_action_and_index() {
    assert_eq!(
        encode(Response::SelectBattleCmd {
            action: BattleCmdAction::ATTACK,
            index: Some(3),
        }),
        vec![0x01, 0x00, 0x03, 0x00]
    );
    assert_eq!(
        encode(Response::SelectIdleCmd {
            action: IdleCmdAction::TO_EP,
            index: None,
        }),
        vec![0x07, 0x00, 0x00, 0x00]
    );
}

#[test]
fn yes_no_responses() {
    assert_eq!(
        encode(Response::SelectEffectYn { yes: true }),
        vec![1, 0, 0, 0]
    );
    assert_eq!(
        encode(Response::SelectYesNo { yes: false }),
        vec![0, 0, 0, 0]
    );
}

#[test]
fn card_selection_lists_indices() {
    assert_eq!(
        encode(Response::SelectCard {
            indices: Some(vec![2, 5]),
        }),
        vec![0, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 5, 0, 0, 0]
    );
    assert_eq!(
        encode(Response::SelectCard { indices: None }),
        vec![0xff, 0xff, 0xff, 0xff]
    );
    assert_eq!(
        encode(Response::SelectTribute {
            indices: Some(vec![0]),
        }),
        vec![0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0]
    );
}

#[test]
fn unselect_toggles_one_card() {
    assert_eq!(
        encode(Response::SelectUnselectCard { index: Some(2) }),
        vec![0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0]
    );
    assert_eq!(
        encode(Response::SelectUnselectCard { index: None }),
        vec![0xff, 0xff, 0xff, 0xff]
    );
}

#[test]
fn chain_declines_with_minus_one() {
    assert_eq!(
        encode(Response::SelectChain { index: Some(1) }),
        vec![1, 0, 0, 0]
    );
    assert_eq!(
        encode(Response::SelectChain { index: None }),
        vec![0xff, 0xff, 0xff, 0xff]
    );
}

#[test]
fn place_responses_are_bare_triples() {
    assert_eq!(
        encode(Response::SelectPlace {
            places: vec![
                FieldPlace {
                    player: 0,
                    location: Location::MZONE as u8,
                    sequence: 2,
                },
                FieldPlace {
                    player: 1,
                    location: Location::SZONE as u8,
                    sequence: 0,
                },
            ],
        }),
        vec![0, 4, 2, 1, 8, 0]
    );
}

#[test]
fn counter_responses_are_i16s() {
    assert_eq!(
        encode(Response::SelectCounter {
            counters: vec![2, 0, 1],
        }),
        vec![2, 0, 0, 0, 1, 0]
    );
}

#[test]
fn sum_selection_always_lists() {
    assert_eq!(
        encode(Response::SelectSum {
            indices: vec![1, 3],
        }),
        vec![0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 3, 0, 0, 0]
    );
}

#[test]
fn sort_order_or_keep() {
    assert_eq!(
        encode(Response::SortCard {
            order: Some(vec![2, 0, 1]),
        }),
        vec![3, 2, 0, 1]
    );
    assert_eq!(encode(Response::SortCard { order: None }), vec![0xff]);
}

#[test]
fn announce_responses() {
    assert_eq!(
        encode(Response::AnnounceRace {
            races: vec![0x1, 0x4],
        }),
        vec![0x05, 0, 0, 0, 0, 0, 0, 0]
    );
    assert_eq!(
        encode(Response::AnnounceAttribute {
            attributes: vec![0x01, 0x20],
        }),
        vec![0x21, 0, 0, 0]
    );
    assert_eq!(
        encode(Response::AnnounceCard { code: 46986414 }),
        46986414u32.to_le_bytes().to_vec()
    );
    assert_eq!(
        encode(Response::AnnounceNumber { value: 12 }),
        vec![12, 0, 0, 0]
    );
}

#[test]
fn rock_paper_scissors_validates_the_hand() {
    assert_eq!(
        encode(Response::RockPaperScissors { value: Rps::PAPER }),
        vec![3, 0, 0, 0]
    );
    assert_eq!(
        encode_response(&Response::RockPaperScissors { value: 0 }),
        Err(ProtocolError::InvalidResponse(
            "rock-paper-scissors hand must be 1, 2 or 3"
        ))
    );
    assert!(encode_response(&Response::RockPaperScissors { value: 4 }).is_err());
}
