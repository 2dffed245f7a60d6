mod common;

use common::{RANDOM_SEED, petgraph_random, random_graph};
use dijkstra_lab::algo::ShortestPaths;
use fastrand::Rng;
use petgraph::prelude::*;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.01, 0.25])]
fn binary_heap_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_graph(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| ShortestPaths::on(&graph).binary_heap().run(0));
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.25])]
fn linear_scan_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_graph(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| ShortestPaths::on(&graph).linear_scan().run(0));
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.01, 0.25])]
fn petgraph_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let start = NodeIndex::new(0);

    bencher.bench(|| petgraph::algo::dijkstra(&graph, start, None, |e| *e.weight()));
}
