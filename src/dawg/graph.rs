use std::fmt;

use hashbrown::HashSet;

use super::char_trait::DawgChar;
use super::error::NotFoundError;
use super::node::{Node, Words};
use super::state::{State, StateId};
use super::word::IntoWord;

/// A finished, immutable minimal DAWG.
///
/// All states live in one arena and refer to each other by index, so the
/// graph can be moved, cloned and shared between threads freely.
///
/// # Examples
///
/// ```
/// use wordgraph::dawg::build_dawg;
///
/// let dawg = build_dawg(["abfg", "acfg", "adfg"]).unwrap();
/// assert!(dawg.accepts("abfg"));
/// assert!(!dawg.accepts("adf"));
/// assert!(dawg.has_prefix("ad").is_ok());
/// assert!(dawg.has_prefix("ar").is_err());
/// assert_eq!(dawg.size(), 5);
/// ```
#[derive(Clone)]
pub struct Dawg<C: DawgChar> {
    states: Box<[State<C>]>,
    root: StateId,
    word_count: usize,
}

impl<C: DawgChar> Dawg<C> {
    pub(crate) fn from_parts(states: Box<[State<C>]>, root: StateId, word_count: usize) -> Self {
        Dawg {
            states,
            root,
            word_count,
        }
    }

    #[inline]
    pub(crate) fn state(&self, id: StateId) -> &State<C> {
        &self.states[id.index()]
    }

    /// Returns a view of the root state.
    #[inline]
    pub fn root(&self) -> Node<'_, C> {
        Node::new(self, self.root)
    }

    /// Returns true if `word` is one of the words the DAWG was built from.
    pub fn accepts(&self, word: impl IntoWord<C>) -> bool {
        self.root().walk(word).is_some_and(|node| node.is_final())
    }

    /// Returns the node reached by following `prefix` from the root, whether
    /// or not it ends a word.
    ///
    /// The empty prefix always succeeds with the root, even for a DAWG built
    /// from no words.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no stored word starts with `prefix`.
    pub fn has_prefix(&self, prefix: impl IntoWord<C>) -> Result<Node<'_, C>, NotFoundError<C>> {
        let prefix = prefix.collect_word();
        let mut node = self.root();
        for (matched, &label) in prefix.iter().enumerate() {
            node = node.get(label).ok_or_else(|| NotFoundError {
                prefix: prefix.to_vec(),
                matched,
            })?;
        }
        Ok(node)
    }

    /// Returns the number of distinct states reachable from the root.
    ///
    /// Shared states are counted once, however many transitions lead to them.
    pub fn size(&self) -> usize {
        let mut visited = HashSet::with_capacity(self.states.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            stack.extend(
                self.state(id)
                    .transitions
                    .as_slice()
                    .iter()
                    .map(|&(_, target)| target),
            );
        }
        visited.len()
    }

    /// Returns the number of distinct words in the DAWG.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns true if the DAWG accepts no words at all.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns an iterator over all words, in lexicographic order.
    pub fn words(&self) -> Words<'_, C> {
        Words::new(self.root())
    }
}

impl<C: DawgChar> fmt::Debug for Dawg<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dawg")
            .field("words", &self.word_count)
            .field("states", &self.states.len())
            .finish()
    }
}
