use std::hash::Hash;

use fixedbitset::FixedBitSet;
use rustc_hash::FxHashMap;

use crate::{
    common::{FxIndexMap, VisitSet},
    core::weight::Weight,
    graph::Graph,
};

use super::{Error, ShortestPaths};

pub fn linear_scan<K, W>(graph: &Graph<K, W>, source: K) -> Result<ShortestPaths<K, W>, Error>
where
    K: Clone + Eq + Hash,
    W: Weight,
{
    let source_index = graph.index_of(&source).ok_or(Error::SourceAbsent)?;
    let n = graph.node_count();

    let mut dist = vec![W::inf(); n];
    let mut pred = vec![None; n];
    let mut visited = FixedBitSet::with_capacity(n);

    dist[source_index] = W::zero();

    for _ in 0..n {
        // Unvisited node with the smallest distance. On ties, the node added
        // to the graph first wins.
        let mut current: Option<usize> = None;
        for index in 0..n {
            if visited.is_visited(&index) {
                continue;
            }

            match current {
                Some(best) if dist[index] >= dist[best] => {}
                _ => current = Some(index),
            }
        }

        let Some(current) = current else {
            break;
        };

        visited.visit(current);

        // All remaining nodes are unreachable.
        if dist[current] >= W::inf() {
            break;
        }

        for (next, weight) in graph.neighbors_by_index(current) {
            let Some(candidate) = dist[current].checked_add(weight) else {
                continue;
            };

            if candidate < dist[next] {
                dist[next] = candidate;
                pred[next] = Some(current);
            }
        }
    }

    let pred = pred
        .into_iter()
        .enumerate()
        .filter_map(|(index, pred)| {
            let pred = graph.key_at(pred?)?;
            let node = graph.key_at(index)?;
            Some((node.clone(), pred.clone()))
        })
        .collect::<FxHashMap<_, _>>();

    let dist = graph
        .nodes()
        .cloned()
        .zip(dist)
        .collect::<FxIndexMap<_, _>>();

    Ok(ShortestPaths { source, dist, pred })
}
