//! Keystream generation tests.

use solitaire::{Deck, JOKER_VALUE, KeyStream, KeyStreamError};

const FIRST: &str = "C2,C3,C4,C5,C6,C7,C8,C9,C10,C11,C12,C13,D1,D2,D3,D4,D5,D6,D7,D8,D9,D10,D11,D12,D13,H1,H2,H3,H4,H5,H6,H7,H8,H9,H10,H11,H12,H13,S1,S2,S3,S4,S5,S6,S7,S8,S9,S10,S11,S12,S13,A,B,C1";
const SECOND: &str = "S12,A,C1,B,C2,C3,C4,C5,C6,C7,C8,C9,C10,C11,C12,C13,D1,D2,D3,D4,D5,D6,D7,D8,D9,D10,D11,D12,D13,H1,H2,H3,H4,H5,H6,H7,H8,H9,H10,H11,H12,H13,S1,S2,S3,S4,S5,S6,S7,S8,S9,S10,S11,S13";

fn stream(list: &str) -> KeyStream {
    KeyStream::new(list.parse().unwrap()).unwrap()
}

#[test]
fn iterates_unkeyed_deck() {
    let start = KeyStream::unkeyed();

    let first = start.iterate();
    assert_eq!(first.deck().len(), 54);
    assert_eq!(first.deck().to_string(), FIRST);

    let second = first.iterate();
    assert_eq!(second.deck().len(), 54);
    assert_eq!(second.deck().to_string(), SECOND);

    // Advancing never touches the original.
    assert_eq!(start.deck(), &Deck::unkeyed());
}

#[test]
fn value_counts_down_from_top_card() {
    assert_eq!(stream(FIRST).value(), 4);
    assert_eq!(stream(SECOND).value(), 49);
    assert_eq!(stream(SECOND).character_value(), 23);
    assert_eq!(stream(SECOND).character(), 'W');
}

#[test]
fn raw_values_include_jokers() {
    let values: Vec<u8> = KeyStream::unkeyed()
        .get_next(11, KeyStream::value, false)
        .collect();
    assert_eq!(values, [4, 49, 10, 53, 24, 8, 51, 44, 6, 4, 33]);
}

#[test]
fn characters_skip_jokers() {
    let stream = KeyStream::unkeyed();

    let ten: String = stream.characters(10).collect();
    assert_eq!(ten, "DWJXHYRFDG");

    // Each request starts over from the same state.
    let twenty: String = stream.characters(20).collect();
    assert_eq!(twenty, "DWJXHYRFDGTMSHPUURXJ");
}

#[test]
fn skipped_values_are_not_counted() {
    let values: Vec<u8> = KeyStream::unkeyed().values(10).collect();
    assert_eq!(values, [4, 49, 10, 24, 8, 51, 44, 6, 4, 33]);
}

#[test]
fn emitted_values_stay_in_range() {
    for seed in 0..8 {
        let stream = KeyStream::shuffled(seed);

        for value in stream.get_next(200, KeyStream::value, false) {
            assert!((1..=JOKER_VALUE).contains(&value), "seed {seed}: {value}");
        }
        for value in stream.values(200) {
            assert!((1..JOKER_VALUE).contains(&value), "seed {seed}: {value}");
        }
        for c in stream.characters(200) {
            assert!(c.is_ascii_uppercase(), "seed {seed}: {c:?}");
        }
    }
}

#[test]
fn next_is_bounded_and_keeps_last_state() {
    let start = KeyStream::unkeyed();

    let values = start.values(10);
    assert_eq!(values.len(), 10);

    let mut next = start.get_next(2, KeyStream::value, false);
    assert_eq!(next.stream(), &start);
    assert_eq!(next.by_ref().count(), 2);
    assert_eq!(next.next(), None);
    assert_eq!(next.stream().deck().to_string(), SECOND);
}

#[test]
fn selector_can_project_whole_state() {
    let states: Vec<KeyStream> = KeyStream::unkeyed()
        .get_next(2, |s: &KeyStream| s.clone(), false)
        .collect();
    assert_eq!(states.len(), 2);
    assert_eq!(states[0].deck().to_string(), FIRST);
    assert_eq!(states[1].deck().to_string(), SECOND);
}

#[test]
fn zero_count_yields_nothing() {
    assert_eq!(KeyStream::unkeyed().values(0).count(), 0);
}

#[test]
fn rejects_empty_and_partial_decks() {
    assert_eq!(
        KeyStream::new(Deck::new(Vec::new()).unwrap()).unwrap_err(),
        KeyStreamError::EmptyDeck
    );
    assert_eq!(
        KeyStream::new("C1,C2,C3".parse().unwrap()).unwrap_err(),
        KeyStreamError::IncompleteDeck
    );
    assert_eq!(
        KeyStream::try_from(Deck::unkeyed()).unwrap(),
        KeyStream::unkeyed()
    );
}
