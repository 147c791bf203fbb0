//! Deck ordering and the positional moves of the Solitaire algorithm.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// An ordered run of unique cards, top card first.
///
/// A complete deck holds all 54 cards. Shorter decks are accepted so that the
/// positional moves can be used on any arrangement, but only a complete deck
/// can drive a [`KeyStream`](crate::KeyStream).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck from the given cards, top card first.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::UnknownCard`] if a card is outside the 54-card
    /// deck and [`DeckError::DuplicateCard`] if any card appears twice.
    pub fn new(cards: Vec<Card>) -> Result<Self, DeckError> {
        if !cards.iter().all(is_standard) {
            return Err(DeckError::UnknownCard);
        }

        let mut seen = HashSet::with_capacity(cards.len());
        if !cards.iter().all(|card| seen.insert(*card)) {
            return Err(DeckError::DuplicateCard);
        }
        Ok(Self { cards })
    }

    /// Returns the unkeyed deck: Clubs, Diamonds, Hearts, Spades with ranks
    /// ascending, then the little joker, then the big joker.
    #[must_use]
    pub fn unkeyed() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ORDINARY {
            for rank in 1..=13 {
                cards.push(Card::Suited { suit, rank });
            }
        }
        cards.push(Card::LittleJoker);
        cards.push(Card::BigJoker);
        Self { cards }
    }

    /// Returns a complete deck shuffled with the given seed.
    ///
    /// The same seed always yields the same order, so the seed can serve as a
    /// compact key.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Self::unkeyed();
        deck.cards.shuffle(&mut rng);
        deck
    }

    /// Keys a deck from a passphrase.
    ///
    /// Starting from the unkeyed deck, each letter of the passphrase advances
    /// the deck one step and then count cuts it by the letter's position in
    /// the alphabet. Characters other than ASCII letters are ignored.
    #[must_use]
    pub fn from_passphrase(passphrase: &str) -> Self {
        let mut deck = Self::unkeyed();
        for letter in passphrase.bytes().filter(u8::is_ascii_alphabetic) {
            deck.advance();
            deck.count_cut_by(usize::from(letter.to_ascii_uppercase() - b'A' + 1));
        }
        deck
    }

    /// Returns the cards, top card first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consumes the deck and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck holds all 54 cards.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.len() == DECK_SIZE
    }

    /// Returns the 1-based position of the card.
    #[must_use]
    pub fn position(&self, card: Card) -> Option<usize> {
        self.index_of(card).map(|index| index + 1)
    }

    fn index_of(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|c| *c == card)
    }

    /// Moves a card so that it ends up at the given 1-based position.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is not in the deck or the position is
    /// outside `1..=len`.
    pub fn move_card_to_position(&mut self, card: Card, position: usize) -> Result<(), DeckError> {
        let index = self.index_of(card).ok_or(DeckError::CardNotFound)?;
        if position == 0 || position > self.cards.len() {
            return Err(DeckError::PositionOutOfRange);
        }

        self.cards.remove(index);
        self.cards.insert(position - 1, card);
        Ok(())
    }

    /// Moves a card down by `distance` places, treating the deck as circular.
    ///
    /// A card that passes the bottom card lands just below the top card,
    /// never on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is not in the deck or `distance` is not
    /// less than the deck length.
    pub fn move_down(&mut self, card: Card, distance: usize) -> Result<(), DeckError> {
        let index = self.index_of(card).ok_or(DeckError::CardNotFound)?;
        if distance >= self.cards.len() {
            return Err(DeckError::DistanceOutOfRange);
        }

        self.shift_down(index, distance);
        Ok(())
    }

    // Requires `distance < len`.
    fn shift_down(&mut self, index: usize, distance: usize) {
        let len = self.cards.len();
        let mut new_index = index + distance;
        if new_index >= len {
            new_index = new_index - len + 1;
        }

        let card = self.cards.remove(index);
        self.cards.insert(new_index, card);
    }

    fn move_joker_one_down(&mut self, joker: Card) {
        if self.cards.len() < 2 {
            return;
        }
        if let Some(index) = self.index_of(joker) {
            self.shift_down(index, 1);
        }
    }

    /// Moves the little joker down one place.
    pub fn move_little_joker(&mut self) {
        self.move_joker_one_down(Card::LittleJoker);
    }

    /// Moves the big joker down two places, one place at a time.
    pub fn move_big_joker(&mut self) {
        self.move_joker_one_down(Card::BigJoker);
        self.move_joker_one_down(Card::BigJoker);
    }

    /// Swaps the cards above the first joker with the cards below the last
    /// joker. The jokers and everything between them stay in place relative
    /// to each other.
    pub fn triple_cut(&mut self) {
        let Some(first) = self.cards.iter().position(Card::is_joker) else {
            return;
        };
        let Some(last) = self.cards.iter().rposition(Card::is_joker) else {
            return;
        };

        let mut cut = Vec::with_capacity(self.cards.len());
        cut.extend_from_slice(&self.cards[last + 1..]);
        cut.extend_from_slice(&self.cards[first..=last]);
        cut.extend_from_slice(&self.cards[..first]);
        self.cards = cut;
    }

    /// Count cuts by the suit value of the bottom card.
    ///
    /// Does nothing when the bottom card is a joker.
    pub fn count_cut(&mut self) {
        match self.cards.last() {
            Some(bottom) if !bottom.is_joker() => {
                let count = usize::from(bottom.suit_value());
                self.count_cut_by(count);
            }
            _ => {}
        }
    }

    /// Moves the top `count` cards to just above the bottom card.
    ///
    /// The bottom card never moves. `count` is capped at the number of cards
    /// above the bottom card.
    pub fn count_cut_by(&mut self, count: usize) {
        let Some(bottom) = self.cards.len().checked_sub(1) else {
            return;
        };
        self.cards[..bottom].rotate_left(count.min(bottom));
    }

    /// Runs one full step of the algorithm: joker moves, triple cut, and count
    /// cut.
    pub fn advance(&mut self) {
        self.move_little_joker();
        self.move_big_joker();
        self.triple_cut();
        self.count_cut();
    }
}

fn is_standard(card: &Card) -> bool {
    match card {
        Card::Suited { suit, rank } => Card::new(*suit, *rank).is_some(),
        Card::LittleJoker | Card::BigJoker => true,
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::unkeyed()
    }
}

impl fmt::Display for Deck {
    /// Writes the deck as comma-separated short codes, e.g. `C1,C2,A,B`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for Deck {
    type Err = DeckError;

    /// Parses comma-separated short codes. Blank entries are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .enumerate()
            .map(|(index, entry)| {
                entry.parse::<Card>().map_err(|source| DeckError::InvalidCard {
                    position: index + 1,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(cards)
    }
}
