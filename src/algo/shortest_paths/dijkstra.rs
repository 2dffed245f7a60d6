use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashSet},
    hash::{BuildHasherDefault, Hash},
};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    common::{FxIndexMap, VisitSet},
    core::weight::{Weight, Weighted},
    graph::Graph,
};

use super::{Error, ShortestPaths};

pub fn dijkstra<K, W>(graph: &Graph<K, W>, source: K) -> Result<ShortestPaths<K, W>, Error>
where
    K: Clone + Eq + Hash,
    W: Weight,
{
    if !graph.contains_node(&source) {
        return Err(Error::SourceAbsent);
    }

    let mut visited: FxHashSet<K> = HashSet::with_capacity_and_hasher(
        graph.node_count(),
        BuildHasherDefault::default(),
    );

    // Every node starts as unreachable.
    let mut dist = graph
        .nodes()
        .map(|node| (node.clone(), W::inf()))
        .collect::<FxIndexMap<_, _>>();
    let mut pred = FxHashMap::default();
    let mut queue = BinaryHeap::new();

    dist.insert(source.clone(), W::zero());
    queue.push(Reverse(Weighted(source.clone(), W::Ord::from(W::zero()))));

    while let Some(Reverse(Weighted(vertex, vertex_dist))) = queue.pop() {
        let vertex_dist: W = vertex_dist.into();

        // This can happen due to duplication of vertices when doing relaxation
        // in our implementation.
        if visited.is_visited(&vertex) {
            continue;
        }

        for (next, edge_dist) in graph.neighbors_weighted(&vertex).into_iter().flatten() {
            if visited.is_visited(next) {
                continue;
            }

            // A sum that overflows is never an improvement.
            let Some(next_dist) = vertex_dist.checked_add(edge_dist) else {
                continue;
            };

            // Relaxation operation. If the distance is better than what we had
            // so far, update it. A self-loop never passes this check.
            let improves = dist.get(next).is_some_and(|curr| next_dist < *curr);

            if improves {
                dist.insert(next.clone(), next_dist.clone());
                // A textbook version of the algorithm would update the
                // priority of `next`. Adding it as a new item causes
                // duplicities which is unfortunate for dense graphs, but
                // should be fine in practice.
                queue.push(Reverse(Weighted(next.clone(), next_dist.into())));
                pred.insert(next.clone(), vertex.clone());
            }
        }

        // The vertex is finished.
        visited.visit(vertex);
    }

    Ok(ShortestPaths { source, dist, pred })
}
