use std::hash::Hash;

use tracing::debug;

use crate::{core::weight::Weight, graph::Graph};

use super::{dijkstra::dijkstra, linear_scan::linear_scan, Algo, Error, ShortestPaths};

pub struct ShortestPathsBuilder<'a, K, W> {
    graph: &'a Graph<K, W>,
    algo: Algo,
}

impl<K, W> ShortestPaths<K, W> {
    pub fn on(graph: &Graph<K, W>) -> ShortestPathsBuilder<'_, K, W> {
        ShortestPathsBuilder {
            graph,
            algo: Algo::default(),
        }
    }
}

impl<'a, K, W> ShortestPathsBuilder<'a, K, W> {
    pub fn using(self, algo: Algo) -> Self {
        Self { algo, ..self }
    }

    pub fn binary_heap(self) -> Self {
        self.using(Algo::BinaryHeap)
    }

    pub fn linear_scan(self) -> Self {
        self.using(Algo::LinearScan)
    }
}

impl<'a, K, W> ShortestPathsBuilder<'a, K, W>
where
    K: Clone + Eq + Hash,
    W: Weight,
{
    pub fn run(self, source: K) -> Result<ShortestPaths<K, W>, Error> {
        let ShortestPathsBuilder { graph, algo } = self;

        debug!(?algo, nodes = graph.node_count(), "computing shortest paths");

        let shortest_paths = match algo {
            Algo::BinaryHeap => dijkstra(graph, source),
            Algo::LinearScan => linear_scan(graph, source),
        }?;

        debug!(
            reachable = shortest_paths.reachable_count(),
            "shortest paths computed"
        );

        Ok(shortest_paths)
    }
}
