use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can label the transitions of a [`Dawg`](super::Dawg).
///
/// Blanket-implemented for every type with the required bounds, so `char`,
/// `u8`, `u16` and `u32` work out of the box.
///
/// - `Copy`: transitions store labels by value
/// - `Ord`: transitions are kept sorted and input order is checked with it
/// - `Hash`: the register hashes labels when looking for equivalent states
/// - `Debug`: error messages print the offending words
pub trait DawgChar: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> DawgChar for T {}
