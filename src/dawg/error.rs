use thiserror::Error;

use super::char_trait::DawgChar;

/// Errors that can occur when building a DAWG.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError<C: DawgChar> {
    /// Words were not provided in lexicographically sorted order.
    ///
    /// Contains the two words that were out of order.
    #[error("words out of order: {previous:?} came before {word:?}")]
    Unsorted {
        /// The word accepted last.
        previous: Vec<C>,
        /// The rejected word, which sorts before `previous`.
        word: Vec<C>,
    },
}

/// Returned by [`Dawg::has_prefix`](super::Dawg::has_prefix) when no stored
/// word starts with the queried prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no word starts with {prefix:?} (matched {matched} labels)")]
pub struct NotFoundError<C: DawgChar> {
    /// The queried prefix.
    pub prefix: Vec<C>,
    /// Number of leading labels of `prefix` that could be followed.
    pub matched: usize,
}
