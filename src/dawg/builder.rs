use tracing::debug;

use super::char_trait::DawgChar;
use super::error::BuildError;
use super::graph::Dawg;
use super::register::Register;
use super::state::{PendingState, State, StateId};
use super::word::IntoWord;

/// A builder for constructing a minimal DAWG incrementally.
///
/// Words must be added in lexicographically sorted order. Each state on the
/// path of the previous word stays mutable until a later word diverges from
/// it; it is then frozen and either replaced by an equivalent registered
/// state or registered itself.
pub struct Builder<C: DawgChar> {
    arena: Vec<State<C>>,
    register: Register,
    root: PendingState<C>,
    /// States along the previous word, each with the label leading into it.
    path: Vec<(C, PendingState<C>)>,
    word_count: usize,
}

impl<C: DawgChar> Builder<C> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty builder with room for `states` distinct states
    /// before reallocating.
    pub fn with_capacity(states: usize) -> Self {
        Builder {
            arena: Vec::with_capacity(states),
            register: Register::with_capacity(states),
            root: PendingState::new(),
            path: Vec::new(),
            word_count: 0,
        }
    }

    /// Adds a word to the DAWG being constructed.
    ///
    /// Inserting the same word twice in a row is allowed and has no effect.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Unsorted`] if the word sorts before the previously
    /// added word. The builder is left untouched in that case.
    pub fn insert(&mut self, word: impl IntoWord<C>) -> Result<(), BuildError<C>> {
        let word = word.collect_word();
        let prefix_len = self.common_prefix_len(&word)?;
        self.close_path(prefix_len);
        self.path.extend(
            word[prefix_len..]
                .iter()
                .map(|&label| (label, PendingState::new())),
        );
        let last = self.tip();
        if !last.is_final() {
            last.mark_final();
            self.word_count += 1;
        }
        Ok(())
    }

    /// Finalizes construction and returns the finished automaton.
    pub fn finish(mut self) -> Dawg<C> {
        self.close_path(0);
        let root = StateId(self.arena.len());
        self.arena.push(self.root.freeze());
        debug!(
            words = self.word_count,
            states = self.arena.len(),
            registered = self.register.len(),
            "built dawg"
        );
        Dawg::from_parts(self.arena.into_boxed_slice(), root, self.word_count)
    }

    fn common_prefix_len(&self, word: &[C]) -> Result<usize, BuildError<C>> {
        let prefix_len = self
            .path
            .iter()
            .zip(word)
            .take_while(|(entry, label)| entry.0 == **label)
            .count();
        let out_of_order = match (self.path.get(prefix_len), word.get(prefix_len)) {
            (Some(&(previous, _)), Some(&next)) => next < previous,
            // the new word is a proper prefix of the previous one
            (Some(_), None) => true,
            _ => false,
        };
        if out_of_order {
            let previous = self.previous_word();
            debug!(?previous, ?word, "rejected unsorted word");
            return Err(BuildError::Unsorted {
                previous,
                word: word.to_vec(),
            });
        }
        Ok(prefix_len)
    }

    fn previous_word(&self) -> Vec<C> {
        self.path.iter().map(|(label, _)| *label).collect()
    }

    /// The deepest state on the active path.
    fn tip(&mut self) -> &mut PendingState<C> {
        match self.path.last_mut() {
            Some((_, state)) => state,
            None => &mut self.root,
        }
    }

    /// Closes every state deeper than `keep` labels, deepest first, linking
    /// each to its parent through the register.
    fn close_path(&mut self, keep: usize) {
        while self.path.len() > keep {
            let Some((label, state)) = self.path.pop() else {
                break;
            };
            let id = self.canonicalize(state.freeze());
            self.tip().push(label, id);
        }
    }

    fn canonicalize(&mut self, state: State<C>) -> StateId {
        debug_assert!(
            state
                .transitions
                .as_slice()
                .iter()
                .all(|&(_, target)| target.index() < self.arena.len()),
            "Cannot canonicalize unless all children are canonical"
        );
        if let Some(id) = self.register.find(&self.arena, &state) {
            return id;
        }
        let id = StateId(self.arena.len());
        self.arena.push(state);
        self.register.insert(&self.arena, id);
        id
    }
}

impl<C: DawgChar> Default for Builder<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a minimal DAWG from an iterator of sorted words.
///
/// Each word must implement [`IntoWord`], so `&str`, `String`, slices,
/// vectors and arrays are all accepted. Consecutive duplicates are allowed.
///
/// # Errors
///
/// Returns [`BuildError::Unsorted`] at the first word that sorts before its
/// predecessor. No automaton is produced in that case.
///
/// # Examples
///
/// ```
/// use wordgraph::dawg::build_dawg;
///
/// let dawg = build_dawg(["APPLE", "BANANA", "CHERRY"]).unwrap();
/// assert!(dawg.accepts("BANANA"));
/// assert!(!dawg.accepts("APRICOT"));
///
/// let bytes = build_dawg(vec![vec![1u8, 2, 3], vec![1, 2, 4], vec![2, 3, 4]]).unwrap();
/// assert!(bytes.accepts([1, 2, 4]));
/// assert!(!bytes.accepts([1, 2, 5]));
/// ```
pub fn build_dawg<C, W>(words: impl IntoIterator<Item = W>) -> Result<Dawg<C>, BuildError<C>>
where
    C: DawgChar,
    W: IntoWord<C>,
{
    let mut builder = Builder::new();
    for word in words {
        builder.insert(word)?;
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod test {
    use super::*;

    fn order_err(previous: &str, word: &str) -> BuildError<char> {
        BuildError::Unsorted {
            previous: previous.chars().collect(),
            word: word.chars().collect(),
        }
    }

    #[test]
    fn graph_shares_nodes() {
        let single = build_dawg(["ABCDEF"]).unwrap();
        assert_eq!(single.size(), "ABCDEF".len() + 1);

        let shared = build_dawg(["ABCDEF", "ABDEF", "ABEF", "AF"]).unwrap();
        assert_eq!(single.size(), shared.size());
    }

    #[test]
    fn graph_shares_nodes_unicode() {
        let single = build_dawg(["授人以鱼不如授人以渔"]).unwrap();
        let shared = build_dawg(["授人以渔", "授人以鱼不如授人以渔"]).unwrap();
        assert_eq!(single.size(), shared.size());
    }

    #[test]
    fn sorted_input_words_gives_no_error() {
        let res = build_dawg(["ALFA", "BRAVO", "CHARLIE", "DELTA"]);
        assert!(res.is_ok());
    }

    #[test]
    fn unsorted_input_words_gives_error() {
        use itertools::Itertools;
        const SORTED_WORDS: [&str; 7] = [
            "ALFA", "BRAVO", "CHARLIE", "DELTA", "ECHO", "FOXTROT", "GOLF",
        ];
        let mut sorted_count = 0;
        // Every permutation except the sorted one must be rejected.
        for wordlist in SORTED_WORDS.iter().permutations(SORTED_WORDS.len()) {
            let is_sorted = wordlist.iter().copied().eq(SORTED_WORDS.iter());
            let res = build_dawg(wordlist);
            assert_eq!(res.is_ok(), is_sorted);
            sorted_count += is_sorted as i32;
        }
        assert_eq!(sorted_count, 1);
    }

    #[test]
    fn unsorted_input_words_gives_unsorted_words_in_error() {
        let res = build_dawg([
            "ALFA", "BRAVO", "CHARLIE", "DELTA", "ECHO", "GOLF", "FOXTROT", "HOTEL",
        ]);
        assert_eq!(res.unwrap_err(), order_err("GOLF", "FOXTROT"));

        let res = build_dawg(["ZULU", "ALFA", "BRAVO", "CHARLIE"]);
        assert_eq!(res.unwrap_err(), order_err("ZULU", "ALFA"));
    }

    #[test]
    fn prefix_of_previous_word_is_unsorted() {
        let res = build_dawg(["ABC", "AB"]);
        assert_eq!(res.unwrap_err(), order_err("ABC", "AB"));

        let res = build_dawg(["A", ""]);
        assert_eq!(res.unwrap_err(), order_err("A", ""));
    }

    #[test]
    fn same_word_twice_is_tolerated() {
        let dawg = build_dawg(["ALFA", "BRAVO", "CHARLIE", "CHARLIE"]).unwrap();
        let once = build_dawg(["ALFA", "BRAVO", "CHARLIE"]).unwrap();
        assert!(dawg.accepts("CHARLIE"));
        assert_eq!(dawg.word_count(), 3);
        assert_eq!(dawg.size(), once.size());
    }

    #[test]
    fn rejected_word_leaves_builder_usable() {
        let mut builder = Builder::new();
        builder.insert("BRAVO").unwrap();
        assert_eq!(
            builder.insert("ALFA").unwrap_err(),
            order_err("BRAVO", "ALFA")
        );
        builder.insert("CHARLIE").unwrap();
        let dawg = builder.finish();
        assert!(dawg.accepts("BRAVO"));
        assert!(dawg.accepts("CHARLIE"));
        assert!(!dawg.accepts("ALFA"));
        assert_eq!(dawg.word_count(), 2);
    }

    #[test]
    fn empty_input_accepts_nothing() {
        let dawg = build_dawg::<char, &str>([]).unwrap();
        assert_eq!(dawg.size(), 1);
        assert_eq!(dawg.word_count(), 0);
        assert!(!dawg.accepts(""));
        assert_eq!(dawg.root().transition_count(), 0);
    }

    #[test]
    fn empty_word_marks_root_final() {
        let dawg = build_dawg(["", "", "A"]).unwrap();
        assert!(dawg.accepts(""));
        assert!(dawg.accepts("A"));
        assert_eq!(dawg.word_count(), 2);
        assert_eq!(dawg.size(), 2);
    }

    #[test]
    fn suffixes_are_shared() {
        let testdata = [
            "ASUFFIX",
            "BSUFFIX",
            "CDESUFFIX",
            "FFFFFFFSUFFIX",
            "INBETWEEN",
            "JSUFFIX",
            "XXSUFFIX",
        ];
        let dawg = build_dawg(testdata).unwrap();
        let suffix_node = dawg.root().walk("AS").unwrap();
        for word in testdata {
            if let Some(prefix) = word.strip_suffix("SUFFIX") {
                let through = format!("{prefix}S");
                assert_eq!(dawg.root().walk(through.as_str()), Some(suffix_node));
            }
        }
    }

    #[test]
    fn root_is_never_merged() {
        let dawg = build_dawg(["A", "AA"]).unwrap();
        assert_eq!(dawg.size(), 3);
        assert!(dawg.accepts("AA"));
        assert!(!dawg.accepts("AAA"));
    }

    #[test]
    fn generic_dawg_with_u8() {
        let mut builder = Builder::<u8>::new();
        builder.insert([1, 2, 3]).unwrap();
        builder.insert([1, 2, 4]).unwrap();
        builder.insert([2, 3, 4]).unwrap();
        let dawg = builder.finish();
        assert!(dawg.accepts([1, 2, 3]));
        assert!(dawg.accepts([1, 2, 4]));
        assert!(dawg.accepts([2, 3, 4]));
        assert!(!dawg.accepts([1, 2, 5]));
        assert!(!dawg.accepts([1, 2]));
    }

    #[test]
    fn with_capacity_builds_the_same_graph() {
        let words = ["CAT", "CATS", "DOG", "DOGS"];
        let mut builder = Builder::with_capacity(64);
        for word in words {
            builder.insert(word).unwrap();
        }
        let dawg = builder.finish();
        assert_eq!(dawg.size(), build_dawg(words).unwrap().size());
        // root, C, D, CA, DO, the shared final state after T/G, and the S tail
        assert_eq!(dawg.size(), 7);
    }
}
