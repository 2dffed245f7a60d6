//! Find [single source shortest paths] and their distances in a graph using
//! [Dijkstra's algorithm].
//!
//! See available parameters [here](ShortestPathsBuilder).
//!
//! The result holds a distance and a predecessor for every node of the graph.
//! Nodes that cannot be reached from the source have the infinite distance
//! ([`Weight::inf`]) and no predecessor.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//! [Dijkstra's algorithm]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use dijkstra_lab::{algo::ShortestPaths, Graph};
//!
//! let mut graph = Graph::new();
//!
//! graph.extend_with_edges([
//!     ("Prague", "Bratislava", 328u32),
//!     ("Prague", "Nuremberg", 297),
//!     ("Prague", "Vienna", 293),
//!     ("Bratislava", "Vienna", 79),
//!     ("Nuremberg", "Munich", 170),
//!     ("Vienna", "Munich", 402),
//!     ("Vienna", "Florence", 863),
//!     ("Munich", "Florence", 646),
//!     ("Florence", "Rome", 278),
//! ]);
//!
//! let shortest_paths = ShortestPaths::on(&graph).run("Prague").unwrap();
//! let distance = shortest_paths[&"Rome"];
//! let path = shortest_paths.path_to(&"Rome").unwrap().join(" - ");
//!
//! assert_eq!(distance, 1391);
//! assert_eq!(path, "Prague - Nuremberg - Munich - Florence - Rome");
//! ```

use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash},
    ops::Index,
};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{common::FxIndexMap, core::weight::Weight};

mod builder;
mod dijkstra;
mod linear_scan;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their distances from a single source node.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct ShortestPaths<K, W> {
    source: K,
    // All nodes of the graph in the graph order, unreachable ones with the
    // infinite distance.
    dist: FxIndexMap<K, W>,
    pred: FxHashMap<K, K>,
}

impl<K, W> ShortestPaths<K, W> {
    /// Source node where the search was started.
    pub fn source(&self) -> &K {
        &self.source
    }

    /// Distances of all nodes of the graph, in the graph order.
    ///
    /// Unreachable nodes are reported with [`Weight::inf`].
    pub fn distances(&self) -> impl Iterator<Item = (&K, &W)> + '_ {
        self.dist.iter()
    }

    /// Predecessors on the shortest path for every node, keyed by the node.
    ///
    /// The source and unreachable nodes have no entry.
    pub fn predecessor_map(&self) -> &FxHashMap<K, K> {
        &self.pred
    }
}

impl<K, W> ShortestPaths<K, W>
where
    K: Clone + Eq + Hash,
    W: Weight,
{
    /// Returns the path distance between the source node and the given node,
    /// or `None` if the node is not reachable from the source or is not in the
    /// graph.
    pub fn dist(&self, to: &K) -> Option<&W> {
        self.dist.get(to).filter(|dist| is_finite(*dist))
    }

    pub fn is_reachable(&self, to: &K) -> bool {
        self.dist(to).is_some()
    }

    /// Number of nodes reachable from the source, including the source.
    pub fn reachable_count(&self) -> usize {
        self.dist.values().filter(|dist| is_finite(*dist)).count()
    }

    /// Returns the node preceding the given node on its shortest path.
    ///
    /// The source and unreachable nodes have no predecessor.
    pub fn pred(&self, to: &K) -> Option<&K> {
        self.pred.get(to)
    }

    /// Predecessors of all nodes of the graph, in the graph order.
    pub fn predecessors(&self) -> impl Iterator<Item = (&K, Option<&K>)> + '_ {
        self.dist.keys().map(|node| (node, self.pred.get(node)))
    }

    /// Returns an iterator over nodes on the path between the given node and
    /// the source node, in this order.
    ///
    /// The given node itself is not included. The iterator is empty for the
    /// source and for unreachable nodes.
    pub fn reconstruct(&self, to: K) -> PathReconstruction<'_, K> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }

    /// Returns the nodes of the shortest path from the source to the given
    /// node, both ends included, or `None` if there is no path.
    pub fn path_to(&self, to: &K) -> Option<Vec<K>> {
        reconstruct_path(&self.pred, &self.source, to)
    }
}

impl<K, W> Index<&K> for ShortestPaths<K, W>
where
    K: Clone + Eq + Hash,
    W: Weight,
{
    type Output = W;

    fn index(&self, index: &K) -> &Self::Output {
        match self.dist(index) {
            Some(dist) => dist,
            None => panic!("node is not reachable from the source"),
        }
    }
}

fn is_finite<W: Weight>(dist: &W) -> bool {
    *dist < W::inf()
}

/// Walks the predecessors from `end` back to `start` and returns the nodes in
/// the order from `start` to `end`.
///
/// Returns `None` if the walk hits a node without a predecessor before
/// reaching `start` (`end` is not reachable), or if the predecessors form a
/// cycle. When `start == end`, the path is the single node regardless of the
/// predecessors.
pub fn reconstruct_path<K, S>(pred: &HashMap<K, K, S>, start: &K, end: &K) -> Option<Vec<K>>
where
    K: Clone + Eq + Hash,
    S: BuildHasher,
{
    if start == end {
        return Some(vec![start.clone()]);
    }

    let mut path = vec![end.clone()];
    let mut curr = end;

    while curr != start {
        // A path over distinct nodes cannot be longer than this.
        if path.len() > pred.len() {
            return None;
        }

        curr = pred.get(curr)?;
        path.push(curr.clone());
    }

    path.reverse();
    Some(path)
}

/// Algorithm for [`ShortestPaths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algo {
    /// Dijkstra's algorithm with a binary heap as the priority queue.
    ///
    /// Runs in O((V + E) log V) time and is the right choice in general.
    #[default]
    BinaryHeap,

    /// Dijkstra's algorithm that finds the closest unvisited node by scanning
    /// all nodes.
    ///
    /// Runs in O(V²) time. It has no overhead of maintaining a priority queue,
    /// which can pay off for small or dense graphs. Ties are broken in favor
    /// of the node that was added to the graph first.
    LinearScan,
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The source node is not in the graph.
    #[error("source node does not exist")]
    SourceAbsent,
}

/// Iterator over the nodes on the path from a node to the source node.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a, K> {
    curr: K,
    pred: &'a FxHashMap<K, K>,
}

impl<'a, K> Iterator for PathReconstruction<'a, K>
where
    K: Clone + Eq + Hash,
{
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(&self.curr).cloned()?;
        Some(self.curr.clone())
    }
}
