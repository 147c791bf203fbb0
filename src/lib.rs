//! The Solitaire stream cipher with optional `no_std` support.
//!
//! A [`KeyStream`] wraps a 54-card [`Deck`] (four suits plus two jokers) and
//! advances it with the joker moves, triple cut, and count cut of the
//! Solitaire algorithm. Each step yields one keystream value, which a
//! [`Cipher`] adds to (or subtracts from) letters of text.
//!
//! # Example
//!
//! ```
//! use solitaire::Cipher;
//!
//! let cipher = Cipher::unkeyed();
//! let encrypted = cipher.encrypt("AAAAAAAAAA");
//! assert_eq!(encrypted, "EXKYIZSGEH");
//! assert_eq!(cipher.decrypt(&encrypted).unwrap(), "AAAAAAAAAA");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod cipher;
pub mod deck;
pub mod error;
pub mod keystream;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, JOKER_VALUE, Suit};
pub use cipher::Cipher;
pub use deck::Deck;
pub use error::{CardParseError, CipherError, DeckError, KeyStreamError};
pub use keystream::{KeyStream, Next};
pub use options::CipherOptions;
