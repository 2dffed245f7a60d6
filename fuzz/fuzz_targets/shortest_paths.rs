#![no_main]

use libfuzzer_sys::fuzz_target;

use dijkstra_lab::{
    algo::ShortestPaths,
    infra::{arbitrary::MutOpsSeq, testing::check_optimality},
    Graph,
};

fuzz_target!(|ops: MutOpsSeq<u8, f64>| {
    let mut graph = Graph::new();

    for op in ops {
        op.apply(&mut graph);
    }

    let Some(source) = graph.nodes().next().copied() else {
        return;
    };

    let heap = ShortestPaths::on(&graph).binary_heap().run(source).unwrap();
    let scan = ShortestPaths::on(&graph).linear_scan().run(source).unwrap();

    check_optimality(&graph, &heap)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();
    check_optimality(&graph, &scan)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    for node in graph.nodes() {
        assert_eq!(heap.dist(node), scan.dist(node), "distance of {node}");
    }
});
