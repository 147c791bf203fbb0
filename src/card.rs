//! Card types and short-code parsing.

use core::fmt;
use core::str::FromStr;

use crate::error::CardParseError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// The two jokers.
    Jokers,
}

impl Suit {
    /// The four ordinary suits in deck order.
    pub const ORDINARY: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the ordinal rank of the suit (Clubs = 0 through Jokers = 4).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Clubs => 0,
            Self::Diamonds => 1,
            Self::Hearts => 2,
            Self::Spades => 3,
            Self::Jokers => 4,
        }
    }

    /// Returns the single-character identifier of the suit.
    #[must_use]
    pub const fn identifier(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
            Self::Jokers => 'J',
        }
    }

    /// Returns the name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Jokers => "Jokers",
        }
    }

    /// Looks up an ordinary suit by its identifier, ignoring case.
    ///
    /// Jokers have no suit code of their own and are never returned.
    #[must_use]
    pub const fn from_identifier(identifier: char) -> Option<Self> {
        match identifier.to_ascii_uppercase() {
            'C' => Some(Self::Clubs),
            'D' => Some(Self::Diamonds),
            'H' => Some(Self::Hearts),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// A card of the Solitaire deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// One of the 52 ordinary cards.
    Suited {
        /// The suit of the card. Never [`Suit::Jokers`].
        suit: Suit,
        /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
        rank: u8,
    },
    /// The little joker, written `A`.
    LittleJoker,
    /// The big joker, written `B`.
    BigJoker,
}

/// Number of cards in a complete deck.
pub const DECK_SIZE: usize = 54;

/// Suit value shared by both jokers.
pub const JOKER_VALUE: u8 = 53;

const RANKS_PER_SUIT: u8 = 13;

impl Card {
    /// Creates an ordinary card.
    ///
    /// Returns `None` for [`Suit::Jokers`] or a rank outside `1..=13`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Option<Self> {
        if matches!(suit, Suit::Jokers) || rank < 1 || rank > RANKS_PER_SUIT {
            return None;
        }
        Some(Self::Suited { suit, rank })
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        match self {
            Self::Suited { suit, .. } => *suit,
            Self::LittleJoker | Self::BigJoker => Suit::Jokers,
        }
    }

    /// Returns the face value of the card. Both jokers carry 1.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::Suited { rank, .. } => *rank,
            Self::LittleJoker | Self::BigJoker => 1,
        }
    }

    /// Returns the position-independent weight used by the cipher:
    /// `suit rank * 13 + value`. Both jokers score 53.
    #[must_use]
    pub const fn suit_value(&self) -> u8 {
        (self.suit().rank() * RANKS_PER_SUIT).saturating_add(self.value())
    }

    /// Returns whether the card is one of the jokers.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self, Self::LittleJoker | Self::BigJoker)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suited { suit, rank } => write!(f, "{}{rank}", suit.identifier()),
            Self::LittleJoker => f.write_str("A"),
            Self::BigJoker => f.write_str("B"),
        }
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses a short code such as `C1`, `s13`, `A` or `b`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("A") {
            return Ok(Self::LittleJoker);
        }
        if s.eq_ignore_ascii_case("B") {
            return Ok(Self::BigJoker);
        }

        let mut chars = s.chars();
        let first = chars.next().ok_or(CardParseError::MissingInput)?;
        let suit = Suit::from_identifier(first).ok_or(CardParseError::UnknownSuit)?;

        let rank = chars.as_str();
        if rank.is_empty() || !rank.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CardParseError::NonNumericRank);
        }

        // All digits, so the only possible parse failure is overflow.
        let rank: u8 = rank.parse().map_err(|_| CardParseError::RankOutOfRange)?;
        Self::new(suit, rank).ok_or(CardParseError::RankOutOfRange)
    }
}
