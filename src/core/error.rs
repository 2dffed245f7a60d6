use std::fmt;

use thiserror::Error;

/// The error returned by [`Graph::try_add_edge`](crate::Graph::try_add_edge).
///
/// The rejected endpoints and weight are handed back so that the caller can
/// report them or retry with a corrected value.
#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<K, W> {
    pub from: K,
    pub to: K,
    pub weight: W,
    pub kind: AddEdgeErrorKind,
}

impl<K, W> AddEdgeError<K, W> {
    pub fn new(from: K, to: K, weight: W, kind: AddEdgeErrorKind) -> Self {
        Self {
            from,
            to,
            weight,
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    NegativeWeight,
    NotANumber,
    /// The weight is equal to the distance of unreachable nodes.
    Reserved,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::NegativeWeight => "the weight is negative",
            AddEdgeErrorKind::NotANumber => "the weight is not a number",
            AddEdgeErrorKind::Reserved => "the weight is reserved for unreachable distance",
        };
        f.write_str(reason)
    }
}

/// A query referred to a node or an edge that is not in the graph.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError<K> {
    #[error("node does not exist")]
    NodeAbsent(K),

    /// Returned for non-adjacent nodes as well as when either endpoint is
    /// missing.
    #[error("edge does not exist")]
    EdgeAbsent(K, K),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_error_message() {
        let error = AddEdgeError::new("a", "b", -1.0, AddEdgeErrorKind::NegativeWeight);
        assert_eq!(error.to_string(), "adding edge failed: the weight is negative");

        let error = AddEdgeError::new("a", "b", f64::NAN, AddEdgeErrorKind::NotANumber);
        assert_eq!(
            error.to_string(),
            "adding edge failed: the weight is not a number"
        );
    }

    #[test]
    fn lookup_error_message() {
        assert_eq!(
            LookupError::NodeAbsent("x").to_string(),
            "node does not exist"
        );
        assert_eq!(
            LookupError::EdgeAbsent("x", "y").to_string(),
            "edge does not exist"
        );
    }
}
