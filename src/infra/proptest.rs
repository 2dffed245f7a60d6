use std::fmt;

use proptest::{
    collection::vec,
    strategy::{BoxedStrategy, Just, NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};

use crate::{
    core::{check_weight, Weight},
    graph::Graph,
    layout::Layout,
};

/// Strategy generating undirected graphs with nodes `0..n` for some `n >= 1`.
///
/// Generated weights that are rejected by the graph (negative, NaN, integer
/// maximum) are skipped.
pub fn graph_undirected<E: Strategy>(edge: E) -> GraphStrategy<E> {
    GraphStrategy::new(edge)
}

pub struct GraphStrategy<E: Strategy> {
    edge: E,
    params: StrategyParams,
}

impl<E: Strategy> fmt::Debug for GraphStrategy<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("edge", &self.edge)
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<E: Strategy> GraphStrategy<E> {
    pub fn new(edge: E) -> Self {
        Self::with_params(edge, StrategyParams::default())
    }

    pub fn with_params(edge: E, params: StrategyParams) -> Self {
        Self { edge, params }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph_undirected(0..10).max_size(100).connected()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(connected);
    delegate_builder_fn!(allow_loops);
    delegate_builder_fn!(density, density: f32);
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    connected: bool,
    allow_loops: bool,
    // (0, 1] - fraction of all possible edges that may be generated at most
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 512,
            connected: false,
            allow_loops: false,
            density: 0.1,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        assert!(max_size > 0, "graph must have at least one node");
        Self { max_size, ..self }
    }

    pub fn connected(self) -> Self {
        Self {
            connected: true,
            ..self
        }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    fn max_edges(&self, n: usize) -> usize {
        let complete = n * n.saturating_sub(1) / 2 + if self.allow_loops { n } else { 0 };
        (complete as f32 * self.density).ceil() as usize
    }
}

impl<E> GraphStrategy<E>
where
    E: Strategy + Clone + 'static,
    E::Value: Weight + fmt::Debug + 'static,
{
    fn build(&self) -> BoxedStrategy<Graph<usize, E::Value>> {
        let params = self.params;
        let edge = self.edge.clone();

        (1..=params.max_size)
            .prop_flat_map(move |n| {
                let spanning = if params.connected { n - 1 } else { 0 };

                (
                    Just(n),
                    vec((0..n, 0..n, edge.clone()), 0..=params.max_edges(n)),
                    vec(edge.clone(), spanning),
                )
            })
            .prop_map(move |(n, edges, spanning)| {
                let mut graph = Graph::with_layout(Layout::with_seed(n as u64));

                for node in 0..n {
                    graph.add_node(node);
                }

                // A path over all nodes makes the graph connected.
                for (node, weight) in spanning.into_iter().enumerate() {
                    if check_weight(&weight).is_ok() {
                        graph.add_edge(node, node + 1, weight);
                    }
                }

                for (u, v, weight) in edges {
                    if u == v && !params.allow_loops {
                        continue;
                    }

                    if check_weight(&weight).is_ok() {
                        graph.add_edge(u, v, weight);
                    }
                }

                graph
            })
            .boxed()
    }
}

impl<E> Strategy for GraphStrategy<E>
where
    E: Strategy + Clone + 'static,
    E::Value: Weight + fmt::Debug + 'static,
{
    type Tree = Box<dyn ValueTree<Value = Graph<usize, E::Value>>>;
    type Value = Graph<usize, E::Value>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        self.build().new_tree(runner)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{algo::ShortestPaths, infra::testing::check_consistency};

    use super::*;

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_generated_graph_consistent(graph in graph_undirected(0u8..10).max_size(32).allow_loops()) {
            prop_assert!(graph.node_count() >= 1);
            prop_assert_eq!(check_consistency(&graph), Ok(()));
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_generated_graph_connected(graph in graph_undirected(0u32..10).max_size(32).connected()) {
            let paths = ShortestPaths::on(&graph).run(0).unwrap();
            prop_assert_eq!(paths.reachable_count(), graph.node_count());
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_generated_graph_skips_invalid_weights(graph in graph_undirected(-5i32..5).max_size(16)) {
            prop_assert!(graph.undirected_edges().all(|(_, _, w)| *w >= 0));
        }
    }
}
