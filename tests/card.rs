//! Card and deck-list parsing tests.

use solitaire::{Card, CardParseError, DECK_SIZE, Deck, DeckError, JOKER_VALUE, Suit};

#[test]
fn joker_values() {
    assert_eq!(Card::LittleJoker.suit_value(), JOKER_VALUE);
    assert_eq!(Card::BigJoker.suit_value(), JOKER_VALUE);
    assert_eq!(Card::LittleJoker.value(), 1);
    assert_eq!(Card::BigJoker.value(), 1);
    assert_eq!(Card::LittleJoker.suit(), Suit::Jokers);
    assert_ne!(Card::LittleJoker, Card::BigJoker);
}

#[test]
fn suit_values_span_one_to_fifty_two() {
    assert_eq!(Card::new(Suit::Clubs, 1).unwrap().suit_value(), 1);
    assert_eq!(Card::new(Suit::Diamonds, 1).unwrap().suit_value(), 14);
    assert_eq!(Card::new(Suit::Hearts, 13).unwrap().suit_value(), 39);
    assert_eq!(Card::new(Suit::Spades, 13).unwrap().suit_value(), 52);
}

#[test]
fn new_rejects_jokers_and_bad_ranks() {
    assert_eq!(Card::new(Suit::Jokers, 1), None);
    assert_eq!(Card::new(Suit::Clubs, 0), None);
    assert_eq!(Card::new(Suit::Clubs, 14), None);
}

#[test]
fn parses_valid_short_codes() {
    let cases = [
        ("C1", Suit::Clubs, 1),
        ("D12", Suit::Diamonds, 12),
        ("s9", Suit::Spades, 9),
        ("h10", Suit::Hearts, 10),
        ("C13", Suit::Clubs, 13),
        ("C01", Suit::Clubs, 1),
    ];

    for (code, suit, rank) in cases {
        let card: Card = code.parse().unwrap();
        assert_eq!(card.suit(), suit, "suit of {code}");
        assert_eq!(card.value(), rank, "rank of {code}");
    }

    assert_eq!("a".parse::<Card>().unwrap(), Card::LittleJoker);
    assert_eq!("B".parse::<Card>().unwrap(), Card::BigJoker);
}

#[test]
fn rejects_malformed_short_codes() {
    let cases = [
        ("", CardParseError::MissingInput),
        ("1", CardParseError::UnknownSuit),
        ("J53", CardParseError::UnknownSuit),
        ("C14", CardParseError::RankOutOfRange),
        ("C0", CardParseError::RankOutOfRange),
        ("C999", CardParseError::RankOutOfRange),
        ("C1a", CardParseError::NonNumericRank),
        ("C1.0", CardParseError::NonNumericRank),
        ("C", CardParseError::NonNumericRank),
        ("AB", CardParseError::UnknownSuit),
    ];

    for (code, expected) in cases {
        assert_eq!(code.parse::<Card>().unwrap_err(), expected, "parsing {code:?}");
    }
}

#[test]
fn displays_short_codes() {
    assert_eq!(Card::new(Suit::Spades, 13).unwrap().to_string(), "S13");
    assert_eq!(Card::new(Suit::Hearts, 1).unwrap().to_string(), "H1");
    assert_eq!(Card::LittleJoker.to_string(), "A");
    assert_eq!(Card::BigJoker.to_string(), "B");
}

#[test]
fn deck_list_round_trips() {
    let list = "A,C7,D2,B,D9,S4,H1";
    let deck: Deck = list.parse().unwrap();
    assert_eq!(deck.len(), 7);
    assert_eq!(deck.to_string(), list);
}

#[test]
fn unkeyed_deck_round_trips() {
    let deck = Deck::unkeyed();
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(deck.is_complete());

    let back: Deck = deck.to_string().parse().unwrap();
    assert_eq!(back, deck);
}

#[test]
fn deck_list_skips_blank_entries() {
    let deck: Deck = " C1 , ,c2,".parse().unwrap();
    assert_eq!(deck.to_string(), "C1,C2");
}

#[test]
fn deck_list_reports_bad_entry_position() {
    let err = "C1,X5,C2".parse::<Deck>().unwrap_err();
    assert_eq!(
        err,
        DeckError::InvalidCard {
            position: 2,
            source: CardParseError::UnknownSuit,
        }
    );
}

#[test]
fn deck_rejects_duplicates() {
    assert_eq!(
        "C1,C2,c1".parse::<Deck>().unwrap_err(),
        DeckError::DuplicateCard
    );
    assert_eq!(
        Deck::new(vec![Card::BigJoker, Card::BigJoker]).unwrap_err(),
        DeckError::DuplicateCard
    );
}

#[test]
fn out_of_range_card_value_does_not_overflow() {
    let bogus = Card::Suited {
        suit: Suit::Spades,
        rank: 250,
    };
    assert_eq!(bogus.suit_value(), u8::MAX);
}
