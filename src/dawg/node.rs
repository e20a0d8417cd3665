use std::fmt;
use std::slice;

use super::char_trait::DawgChar;
use super::graph::Dawg;
use super::state::StateId;
use super::word::IntoWord;

/// A read-only handle to one state of a [`Dawg`].
///
/// Nodes are cheap to copy. Two nodes compare equal when they are the same
/// state of the same DAWG, so suffix sharing is directly observable.
#[derive(Clone, Copy)]
pub struct Node<'d, C: DawgChar> {
    dawg: &'d Dawg<C>,
    id: StateId,
}

impl<'d, C: DawgChar> Node<'d, C> {
    pub(crate) fn new(dawg: &'d Dawg<C>, id: StateId) -> Self {
        Node { dawg, id }
    }

    /// Returns the node that `label`'s transition leads to, or `None` if there
    /// is no such transition.
    #[inline]
    pub fn get(self, label: C) -> Option<Node<'d, C>> {
        self.dawg
            .state(self.id)
            .transitions
            .get(label)
            .map(|id| Node::new(self.dawg, id))
    }

    /// Follows every label of `word` in turn.
    pub fn walk(self, word: impl IntoWord<C>) -> Option<Node<'d, C>> {
        word.collect_word()
            .iter()
            .try_fold(self, |node, &label| node.get(label))
    }

    /// True if this node ends a word.
    #[inline]
    pub fn is_final(self) -> bool {
        self.dawg.state(self.id).is_final
    }

    /// Returns the number of outgoing transitions.
    #[inline]
    pub fn transition_count(self) -> usize {
        self.dawg.state(self.id).transitions.len()
    }

    /// Returns an iterator over the outgoing transitions, in label order.
    #[inline]
    pub fn transitions(self) -> Edges<'d, C> {
        Edges {
            dawg: self.dawg,
            inner: self.dawg.state(self.id).transitions.as_slice().iter(),
        }
    }

    /// Returns the arena index of this node's state.
    #[inline]
    pub fn id(self) -> StateId {
        self.id
    }
}

impl<C: DawgChar> PartialEq for Node<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.dawg, other.dawg) && self.id == other.id
    }
}

impl<C: DawgChar> Eq for Node<'_, C> {}

impl<C: DawgChar> fmt::Debug for Node<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("is_final", &self.is_final())
            .field("transitions", &self.transition_count())
            .finish()
    }
}

/// An iterator over the transitions of a [`Node`].
#[derive(Clone)]
pub struct Edges<'d, C: DawgChar> {
    dawg: &'d Dawg<C>,
    inner: slice::Iter<'d, (C, StateId)>,
}

impl<'d, C: DawgChar> Iterator for Edges<'d, C> {
    type Item = (C, Node<'d, C>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|&(label, id)| (label, Node::new(self.dawg, id)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<C: DawgChar> ExactSizeIterator for Edges<'_, C> {}

/// An iterator over the words below a node, in lexicographic order.
///
/// Created by [`Dawg::words`].
pub struct Words<'d, C: DawgChar> {
    dawg: &'d Dawg<C>,
    /// Depth-first frames: a state and the index of its next transition.
    stack: Vec<(StateId, usize)>,
    word: Vec<C>,
    emit_start: bool,
}

impl<'d, C: DawgChar> Words<'d, C> {
    pub(crate) fn new(start: Node<'d, C>) -> Self {
        Words {
            dawg: start.dawg,
            stack: vec![(start.id, 0)],
            word: Vec::new(),
            emit_start: start.is_final(),
        }
    }
}

impl<C: DawgChar> Iterator for Words<'_, C> {
    type Item = Vec<C>;

    fn next(&mut self) -> Option<Vec<C>> {
        if std::mem::take(&mut self.emit_start) {
            return Some(Vec::new());
        }
        loop {
            let (id, next_edge) = self.stack.last_mut()?;
            let edge = self
                .dawg
                .state(*id)
                .transitions
                .as_slice()
                .get(*next_edge)
                .copied();
            match edge {
                Some((label, target)) => {
                    *next_edge += 1;
                    self.word.push(label);
                    self.stack.push((target, 0));
                    if self.dawg.state(target).is_final {
                        return Some(self.word.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    self.word.pop();
                }
            }
        }
    }
}
