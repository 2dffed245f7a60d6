//! Weighted undirected graph keyed by node identifiers.
//!
//! Nodes are created implicitly when an edge touching them is added and are
//! never removed. Every edge is stored in both directions, so the adjacency is
//! always symmetric. Weights must be non-negative, which is checked on
//! insertion (see [`check_weight`](crate::core::check_weight)).
//!
//! Node and neighbor iteration follows insertion order, which makes the
//! results of algorithms reproducible.
//!
//! # Examples
//!
//! ```
//! use dijkstra_lab::Graph;
//!
//! let mut graph = Graph::new();
//!
//! graph.add_edge("Prague", "Vienna", 293.0);
//! graph.add_edge("Vienna", "Bratislava", 79.0);
//!
//! assert!(graph.has_edge(&"Bratislava", &"Vienna"));
//! assert_eq!(graph.edge_weight(&"Vienna", &"Prague"), Ok(&293.0));
//! assert_eq!(graph.nodes().collect::<Vec<_>>(), [&"Prague", &"Vienna", &"Bratislava"]);
//! ```

use std::hash::Hash;

use tracing::{debug, trace};

use crate::{
    common::FxIndexMap,
    core::{check_weight, AddEdgeError, LookupError, Weight},
    layout::{Layout, Position},
};

pub mod demo;

/// Weighted undirected graph with display positions of its nodes.
///
/// The graph is not synchronized. Concurrent use requires external
/// synchronization, which the borrow rules enforce for safe code anyway:
/// algorithms borrow the graph immutably for the whole run.
#[derive(Debug, Clone)]
pub struct Graph<K = String, W = f64> {
    adjacency: FxIndexMap<K, FxIndexMap<K, W>>,
    layout: Layout<K>,
}

impl<K, W> Graph<K, W> {
    pub fn new() -> Self {
        Self::with_layout(Layout::new())
    }

    /// Creates an empty graph that places new nodes using given layout.
    pub fn with_layout(mut layout: Layout<K>) -> Self {
        layout.clear();

        Self {
            adjacency: FxIndexMap::default(),
            layout,
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterates over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &K> + '_ {
        self.adjacency.keys()
    }

    /// Iterates over all edges as `(from, to, weight)` triples.
    ///
    /// Each undirected edge is reported twice, once in each direction. A
    /// self-loop is reported once. Use
    /// [`undirected_edges`](Graph::undirected_edges) to get every edge once.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, &W)> + '_ {
        self.adjacency.iter().flat_map(|(from, neighbors)| {
            neighbors
                .iter()
                .map(move |(to, weight)| (from, to, weight))
        })
    }

    pub fn positions(&self) -> impl Iterator<Item = (&K, Position)> + '_ {
        self.layout.iter().map(|(key, position)| (key, *position))
    }

    pub fn layout(&self) -> &Layout<K> {
        &self.layout
    }
}

impl<K, W> Default for Graph<K, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, W> Graph<K, W>
where
    K: Clone + Eq + Hash,
{
    pub fn contains_node(&self, key: &K) -> bool {
        self.adjacency.contains_key(key)
    }

    /// Adds the node if it is not present yet and assigns it a position.
    ///
    /// Returns `true` if the node was added.
    pub fn add_node(&mut self, key: K) -> bool {
        if self.adjacency.contains_key(&key) {
            return false;
        }

        self.layout.place(key.clone());
        self.adjacency.insert(key, FxIndexMap::default());
        trace!(index = self.adjacency.len() - 1, "node added");

        true
    }

    /// Number of undirected edges, each counted once.
    pub fn edge_count(&self) -> usize {
        self.undirected_edges().count()
    }

    /// Iterates over the nodes adjacent to the given node.
    pub fn neighbors(&self, key: &K) -> Result<impl Iterator<Item = &K> + '_, LookupError<K>> {
        self.neighbors_weighted(key)
            .map(|neighbors| neighbors.map(|(neighbor, _)| neighbor))
    }

    /// Iterates over the nodes adjacent to the given node together with the
    /// weights of the connecting edges.
    pub fn neighbors_weighted(
        &self,
        key: &K,
    ) -> Result<impl Iterator<Item = (&K, &W)> + '_, LookupError<K>> {
        self.adjacency
            .get(key)
            .map(|neighbors| neighbors.iter())
            .ok_or_else(|| LookupError::NodeAbsent(key.clone()))
    }

    /// Returns `false` also when `from` is not in the graph.
    pub fn has_edge(&self, from: &K, to: &K) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.contains_key(to))
    }

    pub fn edge_weight(&self, from: &K, to: &K) -> Result<&W, LookupError<K>> {
        self.adjacency
            .get(from)
            .and_then(|neighbors| neighbors.get(to))
            .ok_or_else(|| LookupError::EdgeAbsent(from.clone(), to.clone()))
    }

    /// Iterates over all edges, each undirected edge exactly once.
    ///
    /// An edge is oriented from the endpoint that was added to the graph
    /// first.
    pub fn undirected_edges(&self) -> impl Iterator<Item = (&K, &K, &W)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(index, (from, neighbors))| {
                neighbors
                    .iter()
                    .filter(move |(to, _)| {
                        self.adjacency
                            .get_index_of(*to)
                            .is_some_and(|to_index| to_index >= index)
                    })
                    .map(move |(to, weight)| (from, to, weight))
            })
    }

    pub fn position(&self, key: &K) -> Option<Position> {
        self.layout.get(key)
    }

    /// Overrides the position of a node.
    ///
    /// Only nodes of the graph have positions, so setting a position of an
    /// unknown node fails.
    pub fn set_position<P>(&mut self, key: &K, position: P) -> Result<(), LookupError<K>>
    where
        P: Into<Position>,
    {
        if !self.contains_node(key) {
            return Err(LookupError::NodeAbsent(key.clone()));
        }

        self.layout.set(key.clone(), position.into());
        Ok(())
    }

    pub(crate) fn index_of(&self, key: &K) -> Option<usize> {
        self.adjacency.get_index_of(key)
    }

    pub(crate) fn key_at(&self, index: usize) -> Option<&K> {
        self.adjacency.get_index(index).map(|(key, _)| key)
    }

    /// Neighbors of the node at the index, with neighbors given by their
    /// indices.
    pub(crate) fn neighbors_by_index(
        &self,
        index: usize,
    ) -> impl Iterator<Item = (usize, &W)> + '_ {
        self.adjacency
            .get_index(index)
            .into_iter()
            .flat_map(|(_, neighbors)| neighbors.iter())
            .filter_map(|(neighbor, weight)| {
                self.adjacency
                    .get_index_of(neighbor)
                    .map(|neighbor| (neighbor, weight))
            })
    }
}

impl<K, W> Graph<K, W>
where
    K: Clone + Eq + Hash,
    W: Weight,
{
    /// Adds an undirected edge, creating its endpoints if needed.
    ///
    /// If the nodes are already connected, the weight is overwritten in both
    /// directions. Negative and NaN weights are rejected and the graph is left
    /// unchanged.
    pub fn try_add_edge(&mut self, from: K, to: K, weight: W) -> Result<(), AddEdgeError<K, W>> {
        if let Err(kind) = check_weight(&weight) {
            debug!(%kind, "edge rejected");
            return Err(AddEdgeError::new(from, to, weight, kind));
        }

        self.add_node(from.clone());
        self.add_node(to.clone());

        if let Some(neighbors) = self.adjacency.get_mut(&from) {
            if neighbors.insert(to.clone(), weight.clone()).is_some() {
                trace!("edge weight overwritten");
            }
        }

        if let Some(neighbors) = self.adjacency.get_mut(&to) {
            neighbors.insert(from, weight);
        }

        Ok(())
    }

    /// Adds an undirected edge, creating its endpoints if needed.
    ///
    /// # Panics
    ///
    /// Panics if the weight is negative or NaN. See
    /// [`try_add_edge`](Graph::try_add_edge) for a fallible version.
    pub fn add_edge(&mut self, from: K, to: K, weight: W) {
        if let Err(error) = self.try_add_edge(from, to, weight) {
            panic!("{error}");
        }
    }

    /// Adds all edges from the iterator, stopping at the first rejected one.
    pub fn try_extend_with_edges<I>(&mut self, iter: I) -> Result<(), AddEdgeError<K, W>>
    where
        I: IntoIterator<Item = (K, K, W)>,
    {
        for (from, to, weight) in iter {
            self.try_add_edge(from, to, weight)?;
        }

        Ok(())
    }

    /// Adds all edges from the iterator.
    ///
    /// # Panics
    ///
    /// Panics if any weight is negative or NaN.
    pub fn extend_with_edges<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, K, W)>,
    {
        if let Err(error) = self.try_extend_with_edges(iter) {
            panic!("{error}");
        }
    }

    pub fn from_edges<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, K, W)>,
    {
        let mut graph = Self::new();
        graph.extend_with_edges(iter);
        graph
    }

    /// Total weight of the edges along the sequence of nodes.
    ///
    /// A path of a single node has zero weight. Fails if two consecutive nodes
    /// are not adjacent. A total that does not fit into `W` saturates at
    /// [`Weight::inf`].
    pub fn path_weight(&self, path: &[K]) -> Result<W, LookupError<K>> {
        match path.first() {
            Some(first) if !self.contains_node(first) => {
                return Err(LookupError::NodeAbsent(first.clone()))
            }
            _ => {}
        }

        path.windows(2).try_fold(W::zero(), |total, pair| {
            self.edge_weight(&pair[0], &pair[1])
                .map(|weight| total.checked_add(weight).unwrap_or_else(W::inf))
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::{core::AddEdgeErrorKind, infra::testing::check_consistency};

    use super::*;

    fn create_triangle() -> Graph<&'static str, f64> {
        Graph::from_edges([("a", "b", 1.0), ("b", "c", 2.0), ("a", "c", 4.0)])
    }

    #[test]
    fn add_node_idempotent() {
        let mut graph = Graph::<_, f64>::new();

        assert!(graph.add_node("a"));
        let position = graph.position(&"a");
        assert!(!graph.add_node("a"));

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.position(&"a"), position);
        assert_eq!(graph.neighbors(&"a").unwrap().count(), 0);
    }

    #[test]
    fn add_edge_creates_nodes() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", 3.0);

        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec![&"a", &"b"]);
        assert!(graph.position(&"a").is_some());
        assert!(graph.position(&"b").is_some());
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn add_edge_symmetric() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", 3.0);

        assert!(graph.has_edge(&"a", &"b"));
        assert!(graph.has_edge(&"b", &"a"));
        assert_eq!(graph.edge_weight(&"a", &"b"), Ok(&3.0));
        assert_eq!(graph.edge_weight(&"b", &"a"), Ok(&3.0));
    }

    #[test]
    fn add_edge_overwrites_weight() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", 3.0);
        graph.add_edge("b", "a", 5.0);

        assert_eq!(graph.edge_weight(&"a", &"b"), Ok(&5.0));
        assert_eq!(graph.edge_weight(&"b", &"a"), Ok(&5.0));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn add_edge_twice_same_state() {
        let mut once = Graph::with_layout(Layout::with_seed(1));
        once.add_edge("a", "b", 2.0);

        let mut twice = Graph::with_layout(Layout::with_seed(1));
        twice.add_edge("a", "b", 2.0);
        twice.add_edge("a", "b", 2.0);

        assert_eq!(
            once.edges().collect::<Vec<_>>(),
            twice.edges().collect::<Vec<_>>()
        );
        assert_eq!(
            once.positions().collect::<Vec<_>>(),
            twice.positions().collect::<Vec<_>>()
        );
    }

    #[test]
    fn add_edge_negative_weight() {
        let mut graph = Graph::new();

        let result = graph.try_add_edge("a", "b", -1.0);

        assert_matches!(
            result,
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::NegativeWeight,
                ..
            })
        );
        assert!(graph.is_empty());
    }

    #[test]
    fn add_edge_nan_weight() {
        let mut graph = Graph::new();

        let result = graph.try_add_edge("a", "b", f64::NAN);

        assert_matches!(
            result,
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::NotANumber,
                ..
            })
        );
        assert!(graph.is_empty());
    }

    #[test]
    #[should_panic(expected = "adding edge failed: the weight is negative")]
    fn add_edge_panics_on_negative_weight() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", -2);
    }

    #[test]
    fn try_extend_stops_at_first_error() {
        let mut graph = Graph::new();

        let result = graph.try_extend_with_edges([("a", "b", 1), ("b", "c", -1), ("c", "d", 1)]);

        assert_matches!(result, Err(AddEdgeError { from: "b", to: "c", weight: -1, .. }));
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn self_loop() {
        let mut graph = Graph::new();
        graph.add_edge("a", "a", 1u32);

        assert!(graph.has_edge(&"a", &"a"));
        assert_eq!(graph.edges().count(), 1);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(&"a").unwrap().collect::<Vec<_>>(), vec![&"a"]);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn neighbors_absent_node() {
        let graph = create_triangle();

        assert!(matches!(
            graph.neighbors(&"x"),
            Err(LookupError::NodeAbsent("x"))
        ));
    }

    #[test]
    fn neighbors_insertion_order() {
        let graph = create_triangle();

        assert_eq!(
            graph.neighbors(&"a").unwrap().collect::<Vec<_>>(),
            vec![&"b", &"c"]
        );
        assert_eq!(
            graph.neighbors_weighted(&"c").unwrap().collect::<Vec<_>>(),
            vec![(&"b", &2.0), (&"a", &4.0)]
        );
    }

    #[test]
    fn edge_weight_absent() {
        let mut graph = create_triangle();
        graph.add_node("d");

        assert_eq!(
            graph.edge_weight(&"a", &"d"),
            Err(LookupError::EdgeAbsent("a", "d"))
        );
        assert_eq!(
            graph.edge_weight(&"x", &"a"),
            Err(LookupError::EdgeAbsent("x", "a"))
        );
    }

    #[test]
    fn has_edge_absent_node() {
        let graph = create_triangle();

        assert!(!graph.has_edge(&"x", &"a"));
        assert!(!graph.has_edge(&"a", &"x"));
    }

    #[test]
    fn edges_reported_in_both_directions() {
        let graph = create_triangle();

        let mut edges = graph.edges().collect::<Vec<_>>();
        edges.sort_by(|lhs, rhs| (lhs.0, lhs.1).cmp(&(rhs.0, rhs.1)));

        assert_eq!(
            edges,
            vec![
                (&"a", &"b", &1.0),
                (&"a", &"c", &4.0),
                (&"b", &"a", &1.0),
                (&"b", &"c", &2.0),
                (&"c", &"a", &4.0),
                (&"c", &"b", &2.0),
            ]
        );
    }

    #[test]
    fn undirected_edges_once() {
        let graph = create_triangle();

        assert_eq!(
            graph.undirected_edges().collect::<Vec<_>>(),
            vec![(&"a", &"b", &1.0), (&"a", &"c", &4.0), (&"b", &"c", &2.0)]
        );
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn set_position() {
        let mut graph = create_triangle();

        graph.set_position(&"b", (0.5, 0.5)).unwrap();

        assert_eq!(graph.position(&"b"), Some(Position::new(0.5, 0.5)));
        assert_eq!(
            graph.set_position(&"x", (0.1, 0.1)),
            Err(LookupError::NodeAbsent("x"))
        );
        assert_eq!(graph.position(&"x"), None);
    }

    #[test]
    fn path_weight() {
        let graph = create_triangle();

        assert_eq!(graph.path_weight(&["a", "b", "c"]), Ok(3.0));
        assert_eq!(graph.path_weight(&["c"]), Ok(0.0));
        assert_eq!(graph.path_weight(&[]), Ok(0.0));
        assert_eq!(
            graph.path_weight(&["x"]),
            Err(LookupError::NodeAbsent("x"))
        );
        assert_eq!(
            graph.path_weight(&["a", "b", "x"]),
            Err(LookupError::EdgeAbsent("b", "x"))
        );
    }

    #[test]
    fn with_layout_discards_foreign_positions() {
        let graph = create_triangle();
        let reused = Graph::<&str, f64>::with_layout(graph.layout().clone());

        assert_eq!(reused.positions().count(), 0);
    }
}
