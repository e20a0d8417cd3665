use smallvec::SmallVec;

use super::char_trait::DawgChar;

/// Index of a state in a [`Dawg`](super::Dawg)'s state arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub(crate) usize);

impl StateId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// The outgoing transitions of a frozen state, sorted by label.
///
/// Doesn't allocate until there are at least three transitions. The variant is
/// determined by the number of transitions, so the derived `Eq` and `Hash`
/// compare exactly the `(label, target)` sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Transitions<C: DawgChar> {
    None,
    One((C, StateId)),
    Two([(C, StateId); 2]),
    Many(Box<[(C, StateId)]>),
}

impl<C: DawgChar> Transitions<C> {
    /// Returns the target of the transition labeled `label`.
    #[inline]
    pub(crate) fn get(&self, label: C) -> Option<StateId> {
        match self {
            Transitions::None => None,
            Transitions::One((c, target)) => (*c == label).then_some(*target),
            Transitions::Two([(c1, t1), (c2, t2)]) => {
                if label == *c1 {
                    Some(*t1)
                } else if label == *c2 {
                    Some(*t2)
                } else {
                    None
                }
            }
            Transitions::Many(edges) => edges
                .binary_search_by_key(&label, |&(c, _)| c)
                .ok()
                .map(|i| edges[i].1),
        }
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[(C, StateId)] {
        match self {
            Transitions::None => &[],
            Transitions::One(edge) => std::slice::from_ref(edge),
            Transitions::Two(edges) => &edges[..],
            Transitions::Many(edges) => &edges[..],
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.as_slice().len()
    }
}

/// A state of a finished automaton. Never mutated once it is in the arena.
///
/// Equality and hashing look one level deep only: targets are compared by id.
/// That is sufficient because states are frozen bottom-up, so every target is
/// already canonical when its parent is compared.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct State<C: DawgChar> {
    pub(crate) is_final: bool,
    pub(crate) transitions: Transitions<C>,
}

/// A state on the builder's active path. It only gains transitions, in
/// increasing label order, as its children are closed.
#[derive(Clone, Debug)]
pub(crate) struct PendingState<C: DawgChar> {
    is_final: bool,
    transitions: SmallVec<[(C, StateId); 4]>,
}

impl<C: DawgChar> PendingState<C> {
    pub(crate) fn new() -> Self {
        PendingState {
            is_final: false,
            transitions: SmallVec::new(),
        }
    }

    pub(crate) fn is_final(&self) -> bool {
        self.is_final
    }

    pub(crate) fn mark_final(&mut self) {
        self.is_final = true;
    }

    /// Appends a transition to an already-canonical target.
    pub(crate) fn push(&mut self, label: C, target: StateId) {
        debug_assert!(
            self.transitions.last().is_none_or(|&(last, _)| last < label),
            "transitions must be added in increasing label order"
        );
        self.transitions.push((label, target));
    }

    /// Converts this state into its immutable form.
    pub(crate) fn freeze(self) -> State<C> {
        let transitions = match self.transitions.as_slice() {
            [] => Transitions::None,
            [edge] => Transitions::One(*edge),
            [e1, e2] => Transitions::Two([*e1, *e2]),
            edges => Transitions::Many(edges.into()),
        };
        State {
            is_final: self.is_final,
            transitions,
        }
    }
}
