//! Cipher configuration options.

/// Configuration options for a [`Cipher`](crate::Cipher).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use solitaire::CipherOptions;
///
/// let options = CipherOptions::default()
///     .with_padding('Q')
///     .with_group_size(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherOptions {
    /// Letter appended to plaintext until it fills whole groups.
    pub padding: char,
    /// Group width for padding and for formatted output.
    /// 0 disables both.
    pub group_size: usize,
}

impl Default for CipherOptions {
    fn default() -> Self {
        Self {
            padding: 'X',
            group_size: 5,
        }
    }
}

impl CipherOptions {
    /// Sets the padding letter.
    ///
    /// # Example
    ///
    /// ```
    /// use solitaire::CipherOptions;
    ///
    /// let options = CipherOptions::default().with_padding('Z');
    /// assert_eq!(options.padding, 'Z');
    /// ```
    #[must_use]
    pub const fn with_padding(mut self, padding: char) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the group width.
    ///
    /// # Example
    ///
    /// ```
    /// use solitaire::CipherOptions;
    ///
    /// let options = CipherOptions::default().with_group_size(0);
    /// assert_eq!(options.group_size, 0);
    /// ```
    #[must_use]
    pub const fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }
}
