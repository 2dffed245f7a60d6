//! The sample graph offered by the visualizer before the user enters any
//! edges.

use crate::layout::Layout;

use super::Graph;

/// Seed of the layout of the demo graph, so that it is drawn the same way
/// every time.
pub const DEMO_LAYOUT_SEED: u64 = 0x5eed_d1a6;

pub const DEMO_EDGES: [(&str, &str, f64); 9] = [
    ("A", "B", 4.0),
    ("A", "C", 2.0),
    ("B", "D", 3.0),
    ("C", "D", 1.0),
    ("C", "E", 5.0),
    ("D", "E", 2.0),
    ("D", "F", 6.0),
    ("E", "G", 4.0),
    ("F", "G", 3.0),
];

/// Builds the seven-node demo graph with nodes `A` to `G`.
pub fn demo_graph() -> Graph<String, f64> {
    let mut graph = Graph::with_layout(Layout::with_seed(DEMO_LAYOUT_SEED));

    graph.extend_with_edges(
        DEMO_EDGES
            .iter()
            .map(|&(from, to, weight)| (from.to_owned(), to.to_owned(), weight)),
    );

    graph
}
