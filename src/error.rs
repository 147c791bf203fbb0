//! Error types for cipher operations.

use thiserror::Error;

/// Errors that can occur while parsing a card short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// The short code is empty.
    #[error("card identifier is empty")]
    MissingInput,
    /// The first character does not name a suit.
    #[error("unknown suit identifier")]
    UnknownSuit,
    /// The characters after the suit are not all digits.
    #[error("rank is not numeric")]
    NonNumericRank,
    /// The rank is outside 1..=13.
    #[error("rank is out of range")]
    RankOutOfRange,
}

/// Errors that can occur while building or rearranging a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The card is not in the deck.
    #[error("card not found in deck")]
    CardNotFound,
    /// The same card appears more than once.
    #[error("card appears more than once in deck")]
    DuplicateCard,
    /// A card is not one of the 54 in a Solitaire deck.
    #[error("card is not part of a solitaire deck")]
    UnknownCard,
    /// The requested position is outside the deck.
    #[error("position is outside the deck")]
    PositionOutOfRange,
    /// The move distance is not shorter than the deck.
    #[error("move distance must be shorter than the deck")]
    DistanceOutOfRange,
    /// A card in a deck list could not be parsed.
    #[error("could not parse card at position {position}: {source}")]
    InvalidCard {
        /// 1-based position of the entry in the list.
        position: usize,
        /// The underlying parse failure.
        source: CardParseError,
    },
}

/// Errors that can occur when constructing a keystream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyStreamError {
    /// The deck holds no cards.
    #[error("deck is empty")]
    EmptyDeck,
    /// The deck does not hold all 54 cards.
    #[error("deck does not hold all 54 cards")]
    IncompleteDeck,
}

/// Errors that can occur during encryption or decryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CipherError {
    /// No text was supplied.
    #[error("no text to process")]
    MissingInput,
    /// The ciphertext contains characters other than letters and spaces.
    #[error("only alphabetic characters are acceptable")]
    InvalidCiphertext,
    /// The padding character is not an ASCII letter.
    #[error("padding must be an ASCII letter")]
    InvalidPadding,
}
