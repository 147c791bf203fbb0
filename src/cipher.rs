//! Encryption and decryption over a Solitaire keystream.

extern crate alloc;

use alloc::borrow::ToOwned;
use alloc::string::String;

use tracing::debug;

use crate::error::CipherError;
use crate::keystream::{ALPHABET_LEN, KeyStream};
use crate::options::CipherOptions;

/// Encrypts and decrypts letters with a Solitaire keystream.
///
/// Every call starts from the same starting state, so a single cipher can
/// encrypt a message and then decrypt the result.
///
/// # Example
///
/// ```
/// use solitaire::Cipher;
///
/// let cipher = Cipher::from_passphrase("CRYPTONOMICON");
/// let encrypted = cipher.encrypt("Solitaire");
/// assert_eq!(cipher.group(&encrypted), "KIRAK SFJAN");
/// ```
#[derive(Debug, Clone)]
pub struct Cipher {
    /// Keystream every call starts from.
    stream: KeyStream,
    /// Padding and grouping options.
    options: CipherOptions,
}

impl Cipher {
    /// Creates a cipher starting from the given keystream.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidPadding`] if the padding character is
    /// not an ASCII letter.
    pub fn new(stream: KeyStream, options: CipherOptions) -> Result<Self, CipherError> {
        if !options.padding.is_ascii_alphabetic() {
            return Err(CipherError::InvalidPadding);
        }
        Ok(Self { stream, options })
    }

    /// Creates a cipher over the unkeyed deck with default options.
    #[must_use]
    pub fn unkeyed() -> Self {
        Self::from(KeyStream::unkeyed())
    }

    /// Creates a cipher over a passphrase-keyed deck with default options.
    #[must_use]
    pub fn from_passphrase(passphrase: &str) -> Self {
        Self::from(KeyStream::from_passphrase(passphrase))
    }

    /// Returns the starting keystream.
    #[must_use]
    pub const fn stream(&self) -> &KeyStream {
        &self.stream
    }

    /// Returns the options.
    #[must_use]
    pub const fn options(&self) -> &CipherOptions {
        &self.options
    }

    /// Strips everything but letters, uppercases the rest, and pads it to a
    /// whole number of groups.
    #[must_use]
    pub fn pad(&self, plaintext: &str) -> String {
        let mut text: String = plaintext
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let group_size = self.options.group_size;
        if group_size > 0 {
            let padding = self.options.padding.to_ascii_uppercase();
            while text.len() % group_size != 0 {
                text.push(padding);
            }
        }
        text
    }

    /// Encrypts plaintext.
    ///
    /// Non-letters are dropped and the text is padded (see [`pad`](Self::pad))
    /// before each letter is shifted forward by one keystream value.
    #[must_use]
    pub fn encrypt(&self, plaintext: &str) -> String {
        let text = self.pad(plaintext);
        debug!(len = text.len(), "encrypting");

        self.combine(&text, |letter, key| {
            let shifted = letter + key;
            if shifted > ALPHABET_LEN {
                shifted - ALPHABET_LEN
            } else {
                shifted
            }
        })
    }

    /// Decrypts ciphertext. Spaces are ignored and case does not matter.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::MissingInput`] if nothing is left once spaces
    /// are removed, so `"   "` is rejected too. Returns
    /// [`CipherError::InvalidCiphertext`] if any character other than a
    /// letter or space is present.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let text: String = ciphertext
            .chars()
            .filter(|&c| c != ' ')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if text.is_empty() {
            return Err(CipherError::MissingInput);
        }
        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(CipherError::InvalidCiphertext);
        }
        debug!(len = text.len(), "decrypting");

        Ok(self.combine(&text, |letter, key| {
            if letter > key {
                letter - key
            } else {
                letter + ALPHABET_LEN - key
            }
        }))
    }

    /// Splits text into space-separated groups.
    #[must_use]
    pub fn group(&self, text: &str) -> String {
        let group_size = self.options.group_size;
        if group_size == 0 {
            return text.to_owned();
        }

        let mut grouped = String::with_capacity(text.len() + text.len() / group_size);
        for (index, c) in text.chars().enumerate() {
            if index > 0 && index % group_size == 0 {
                grouped.push(' ');
            }
            grouped.push(c);
        }
        grouped
    }

    // `text` must be uppercase ASCII letters; `op` receives 1-based letters
    // and keys and returns a 1-based letter.
    fn combine(&self, text: &str, op: impl Fn(u8, u8) -> u8) -> String {
        let keys = self
            .stream
            .get_next(text.len(), KeyStream::character_value, true);

        text.bytes()
            .zip(keys)
            .map(|(b, key)| char::from(op(b - b'A' + 1, key) + b'A' - 1))
            .collect()
    }
}

impl From<KeyStream> for Cipher {
    fn from(stream: KeyStream) -> Self {
        Self {
            stream,
            options: CipherOptions::default(),
        }
    }
}

impl Default for Cipher {
    fn default() -> Self {
        Self::unkeyed()
    }
}
