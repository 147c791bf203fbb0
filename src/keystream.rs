//! Keystream generation from a keyed deck.

use core::iter::FusedIterator;

use tracing::{debug, trace};

use crate::card::{DECK_SIZE, JOKER_VALUE};
use crate::deck::Deck;
use crate::error::KeyStreamError;

/// Offset that maps 1 to `'A'`.
const ZERO_CHARACTER: u8 = b'A' - 1;

/// Letters in the alphabet.
pub(crate) const ALPHABET_LEN: u8 = 26;

/// A snapshot of the Solitaire generator.
///
/// A keystream always holds a complete 54-card deck. Advancing it with
/// [`iterate`](Self::iterate) returns a new keystream and leaves the original
/// untouched, so any state can be kept and replayed.
///
/// # Example
///
/// ```
/// use solitaire::KeyStream;
///
/// let stream = KeyStream::unkeyed();
/// let values: Vec<u8> = stream.get_next(4, KeyStream::value, false).collect();
/// assert_eq!(values, [4, 49, 10, 53]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyStream {
    deck: Deck,
}

impl KeyStream {
    /// Creates a keystream from a keyed deck.
    ///
    /// # Errors
    ///
    /// Returns [`KeyStreamError::EmptyDeck`] if the deck has no cards and
    /// [`KeyStreamError::IncompleteDeck`] if it does not hold all 54.
    pub fn new(deck: Deck) -> Result<Self, KeyStreamError> {
        if deck.is_empty() {
            return Err(KeyStreamError::EmptyDeck);
        }
        if !deck.is_complete() {
            return Err(KeyStreamError::IncompleteDeck);
        }
        Ok(Self { deck })
    }

    /// Creates a keystream from the unkeyed deck.
    #[must_use]
    pub fn unkeyed() -> Self {
        Self {
            deck: Deck::unkeyed(),
        }
    }

    /// Creates a keystream from a deck keyed by a passphrase.
    ///
    /// See [`Deck::from_passphrase`].
    #[must_use]
    pub fn from_passphrase(passphrase: &str) -> Self {
        Self {
            deck: Deck::from_passphrase(passphrase),
        }
    }

    /// Creates a keystream from a deck shuffled with the given seed.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        Self {
            deck: Deck::shuffled(seed),
        }
    }

    /// Returns the current deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Consumes the keystream and returns its deck.
    #[must_use]
    pub fn into_deck(self) -> Deck {
        self.deck
    }

    /// Advances the generator by one step.
    #[must_use]
    pub fn iterate(&self) -> Self {
        let mut deck = self.deck.clone();
        deck.advance();
        debug_assert_eq!(deck.len(), DECK_SIZE);

        let (top, bottom) = (deck.cards()[0], deck.cards()[DECK_SIZE - 1]);
        trace!(top = %top, bottom = %bottom, "advanced deck");
        Self { deck }
    }

    /// Returns the output value of the current state, in `1..=53`.
    ///
    /// The top card's suit value says how many cards to count down; the
    /// suit value of the next card is the output.
    #[must_use]
    pub fn value(&self) -> u8 {
        let cards = self.deck.cards();
        let count = usize::from(cards[0].suit_value());
        cards[count].suit_value()
    }

    /// Returns the output value folded into `1..=26`.
    #[must_use]
    pub fn character_value(&self) -> u8 {
        let value = self.value();
        if value > ALPHABET_LEN {
            value - ALPHABET_LEN
        } else {
            value
        }
    }

    /// Returns the output value as an uppercase letter.
    #[must_use]
    pub fn character(&self) -> char {
        char::from(self.character_value() + ZERO_CHARACTER)
    }

    /// Returns whether a joker landed on the output slot.
    #[must_use]
    pub fn should_skip(&self) -> bool {
        self.value() == JOKER_VALUE
    }

    /// Returns an iterator over the next `count` states, each projected
    /// through `selector`.
    ///
    /// When `skip_jokers` is set, states whose value is 53 are passed over
    /// and do not count toward `count`.
    pub fn get_next<T, F>(&self, count: usize, selector: F, skip_jokers: bool) -> Next<F>
    where
        F: FnMut(&Self) -> T,
    {
        Next {
            stream: self.clone(),
            remaining: count,
            selector,
            skip_jokers,
        }
    }

    /// Returns the next `count` output values, skipping jokers.
    pub fn values(&self, count: usize) -> Next<fn(&Self) -> u8> {
        self.get_next(count, Self::value as fn(&Self) -> u8, true)
    }

    /// Returns the next `count` keystream letters, skipping jokers.
    pub fn characters(&self, count: usize) -> Next<fn(&Self) -> char> {
        self.get_next(count, Self::character as fn(&Self) -> char, true)
    }
}

impl Default for KeyStream {
    fn default() -> Self {
        Self::unkeyed()
    }
}

impl TryFrom<Deck> for KeyStream {
    type Error = KeyStreamError;

    fn try_from(deck: Deck) -> Result<Self, Self::Error> {
        Self::new(deck)
    }
}

/// Iterator returned by [`KeyStream::get_next`].
///
/// Yields exactly the requested number of items, one generator step (or more,
/// when jokers are skipped) per item.
#[derive(Debug, Clone)]
pub struct Next<F> {
    stream: KeyStream,
    remaining: usize,
    selector: F,
    skip_jokers: bool,
}

impl<F> Next<F> {
    /// Returns the most recent state, or the starting state if nothing has
    /// been yielded yet.
    #[must_use]
    pub const fn stream(&self) -> &KeyStream {
        &self.stream
    }
}

impl<T, F> Iterator for Next<F>
where
    F: FnMut(&KeyStream) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        loop {
            self.stream = self.stream.iterate();
            if self.skip_jokers && self.stream.should_skip() {
                debug!(remaining = self.remaining, "skipping joker output");
                continue;
            }

            self.remaining -= 1;
            return Some((self.selector)(&self.stream));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, F> ExactSizeIterator for Next<F> where F: FnMut(&KeyStream) -> T {}

impl<T, F> FusedIterator for Next<F> where F: FnMut(&KeyStream) -> T {}
