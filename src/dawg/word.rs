use smallvec::SmallVec;

use super::char_trait::DawgChar;

/// Label buffer used for words during construction and lookup.
///
/// Words of up to 32 labels never touch the heap.
pub type WordBuf<C> = SmallVec<[C; 32]>;

/// Trait for types that can be used as a word, both when building a DAWG
/// and when querying one.
///
/// Implemented for common string and sequence types so that
/// [`Builder::insert`](super::Builder::insert), [`Dawg::accepts`](super::Dawg::accepts)
/// and friends accept them without manual conversion.
pub trait IntoWord<C: DawgChar> {
    /// Collects this word into a label buffer.
    fn collect_word(self) -> WordBuf<C>;
}

impl IntoWord<char> for &str {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &&str {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for String {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &String {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

impl<C: DawgChar> IntoWord<C> for &[C] {
    fn collect_word(self) -> WordBuf<C> {
        SmallVec::from_slice(self)
    }
}

impl<C: DawgChar> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> WordBuf<C> {
        self.into_iter().collect()
    }
}

impl<C: DawgChar> IntoWord<C> for &Vec<C> {
    fn collect_word(self) -> WordBuf<C> {
        SmallVec::from_slice(self)
    }
}

impl<C: DawgChar, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> WordBuf<C> {
        self.into_iter().collect()
    }
}

impl<C: DawgChar, const N: usize> IntoWord<C> for &[C; N] {
    fn collect_word(self) -> WordBuf<C> {
        SmallVec::from_slice(self)
    }
}
