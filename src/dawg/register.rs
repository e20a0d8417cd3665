use std::hash::BuildHasher;

use hashbrown::{DefaultHashBuilder, HashTable};

use super::char_trait::DawgChar;
use super::state::{State, StateId};

/// The set of canonical states seen so far during one construction.
///
/// Stores only ids; hashing and equality go through the arena the ids point
/// into, so every canonical state is stored exactly once.
pub(crate) struct Register {
    table: HashTable<StateId>,
    hasher: DefaultHashBuilder,
}

impl Register {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Register {
            table: HashTable::with_capacity(capacity),
            hasher: DefaultHashBuilder::default(),
        }
    }

    /// Returns the id of a registered state equivalent to `candidate`.
    pub(crate) fn find<C: DawgChar>(
        &self,
        arena: &[State<C>],
        candidate: &State<C>,
    ) -> Option<StateId> {
        let hash = self.hasher.hash_one(candidate);
        self.table
            .find(hash, |&id| arena[id.index()] == *candidate)
            .copied()
    }

    /// Registers the arena state `id`, which must not have an equivalent
    /// already registered.
    pub(crate) fn insert<C: DawgChar>(&mut self, arena: &[State<C>], id: StateId) {
        debug_assert!(self.find(arena, &arena[id.index()]).is_none());
        let hasher = &self.hasher;
        let hash = hasher.hash_one(&arena[id.index()]);
        self.table
            .insert_unique(hash, id, |&id| hasher.hash_one(&arena[id.index()]));
    }

    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }
}
