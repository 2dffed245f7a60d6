use std::{fmt, hash::Hash};

use thiserror::Error;

use crate::{
    algo::ShortestPaths,
    core::{check_weight, Weight},
    graph::Graph,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("edge ({0}, {1}) is not stored in the opposite direction with the same weight")]
    AsymmetricEdge(String, String),
    #[error("neighbor {1} of {0} is not a node of the graph")]
    DanglingNeighbor(String, String),
    #[error("edge ({0}, {1}) has invalid weight")]
    InvalidWeight(String, String),
    #[error("node {0} has no position")]
    MissingPosition(String),
    #[error("position count ({0}) is not equal to node count ({1})")]
    PositionCountMismatch(usize, usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count without loops ({1})")]
    HandshakingLemma(usize, usize),
}

pub fn check_consistency<K, W>(graph: &Graph<K, W>) -> Result<(), ConsistencyCheckError>
where
    K: Clone + Eq + Hash + fmt::Debug,
    W: Weight,
{
    let name = |key: &K| format!("{key:?}");

    for (from, to, weight) in graph.edges() {
        if !graph.contains_node(to) {
            return Err(ConsistencyCheckError::DanglingNeighbor(name(from), name(to)));
        }

        if graph.edge_weight(to, from).ok() != Some(weight) {
            return Err(ConsistencyCheckError::AsymmetricEdge(name(from), name(to)));
        }

        if check_weight(weight).is_err() {
            return Err(ConsistencyCheckError::InvalidWeight(name(from), name(to)));
        }
    }

    for node in graph.nodes() {
        if graph.position(node).is_none() {
            return Err(ConsistencyCheckError::MissingPosition(name(node)));
        }
    }

    let position_count = graph.positions().count();
    if position_count != graph.node_count() {
        return Err(ConsistencyCheckError::PositionCountMismatch(
            position_count,
            graph.node_count(),
        ));
    }

    // https://en.wikipedia.org/wiki/Handshaking_lemma, with a self-loop
    // contributing only one entry to the adjacency.
    let deg_sum = graph
        .nodes()
        .map(|node| graph.neighbors(node).map_or(0, Iterator::count))
        .sum::<usize>();
    let loop_count = graph.undirected_edges().filter(|(u, v, _)| u == v).count();
    let expected = 2 * graph.edge_count() - loop_count;

    if deg_sum != expected {
        return Err(ConsistencyCheckError::HandshakingLemma(deg_sum, expected));
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimalityCheckError {
    #[error("distance of the source is not zero")]
    SourceDistance,
    #[error("relaxing edge ({0}, {1}) would improve the distance of {1}")]
    EdgeRelaxable(String, String),
    #[error("path to {0} does not lead from the source")]
    PathEndpoints(String),
    #[error("weight of the path to {0} is not equal to its distance")]
    PathWeightMismatch(String),
    #[error("path to {0} is inconsistent with its reachability")]
    Reachability(String),
}

/// Checks that the distances cannot be improved by any edge and that the
/// reconstructed paths match the distances.
pub fn check_optimality<K, W>(
    graph: &Graph<K, W>,
    paths: &ShortestPaths<K, W>,
) -> Result<(), OptimalityCheckError>
where
    K: Clone + Eq + Hash + fmt::Debug,
    W: Weight,
{
    let name = |key: &K| format!("{key:?}");

    if paths.dist(paths.source()) != Some(&W::zero()) {
        return Err(OptimalityCheckError::SourceDistance);
    }

    // Undirected edges are reported in both directions, so both triangle
    // inequalities are covered.
    for (from, to, weight) in graph.edges() {
        if let Some(from_dist) = paths.dist(from) {
            let relaxable = match (from_dist.checked_add(weight), paths.dist(to)) {
                (None, _) => false,
                (Some(through), Some(to_dist)) => through < *to_dist,
                (Some(through), None) => through < W::inf(),
            };

            if relaxable {
                return Err(OptimalityCheckError::EdgeRelaxable(name(from), name(to)));
            }
        }
    }

    for node in graph.nodes() {
        match (paths.dist(node), paths.path_to(node)) {
            (Some(dist), Some(path)) => {
                if path.first() != Some(paths.source()) || path.last() != Some(node) {
                    return Err(OptimalityCheckError::PathEndpoints(name(node)));
                }

                if graph.path_weight(&path).ok().as_ref() != Some(dist) {
                    return Err(OptimalityCheckError::PathWeightMismatch(name(node)));
                }
            }
            (None, None) => {
                if paths.pred(node).is_some() {
                    return Err(OptimalityCheckError::Reachability(name(node)));
                }
            }
            _ => return Err(OptimalityCheckError::Reachability(name(node))),
        }
    }

    Ok(())
}
