use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

use fixedbitset::FixedBitSet;

/// Set of nodes already finished by a traversal.
pub trait VisitSet<I> {
    /// Marks the node as visited and returns `true` if it was not visited
    /// before.
    fn visit(&mut self, index: I) -> bool;
    fn is_visited(&self, index: &I) -> bool;
}

impl<I: Eq + Hash, S: BuildHasher> VisitSet<I> for HashSet<I, S> {
    fn visit(&mut self, index: I) -> bool {
        self.insert(index)
    }

    fn is_visited(&self, index: &I) -> bool {
        self.contains(index)
    }
}

impl VisitSet<usize> for FixedBitSet {
    fn visit(&mut self, index: usize) -> bool {
        if index >= self.len() {
            self.grow(index + 1);
        }
        !self.put(index)
    }

    fn is_visited(&self, index: &usize) -> bool {
        self.contains(*index)
    }
}
