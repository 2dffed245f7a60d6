//! Display positions of graph nodes.
//!
//! Every node gets a position in the unit square when it is first added to a
//! [`Graph`](crate::Graph). Positions are consumed by rendering code only and
//! never influence the shortest paths computation.
//!
//! By default, new nodes are placed [spaced](Placement::Spaced) from the
//! existing ones so that labels in the drawing do not overlap. Use a
//! [seeded](Layout::with_seed) layout when the positions must be reproducible.
//!
//! # Examples
//!
//! ```
//! use dijkstra_lab::{
//!     layout::{Layout, Placement},
//!     Graph,
//! };
//!
//! let layout = Layout::with_seed(42).placement(Placement::Random);
//! let mut graph = Graph::<&str, f64>::with_layout(layout);
//!
//! graph.add_edge("A", "B", 1.5);
//!
//! let a = graph.position(&"A").unwrap();
//! assert!((0.0..1.0).contains(&a.x) && (0.0..1.0).contains(&a.y));
//! ```

use std::hash::Hash;

use fastrand::Rng;

use crate::common::FxIndexMap;

/// Minimal distance between spaced nodes used by the visualizer.
pub const DEFAULT_MIN_DISTANCE: f64 = 0.2;

/// Number of candidates tried by spaced placement before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// A point in the drawing plane.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to the other position.
    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Strategy for choosing the position of a newly added node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Uniformly random point in `[0, 1)²`.
    Random,

    /// Random point that is farther than `min_distance` from all existing
    /// nodes.
    ///
    /// The square fills up eventually. If no suitable point is found within
    /// `max_attempts` candidates, the last candidate is used anyway, so adding
    /// a node always succeeds.
    Spaced {
        min_distance: f64,
        max_attempts: usize,
    },
}

impl Default for Placement {
    fn default() -> Self {
        Placement::Spaced {
            min_distance: DEFAULT_MIN_DISTANCE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Positions of nodes together with the strategy for placing new ones.
#[derive(Debug, Clone)]
pub struct Layout<K> {
    positions: FxIndexMap<K, Position>,
    placement: Placement,
    rng: Rng,
}

impl<K> Layout<K> {
    /// Creates an empty layout seeded from the system entropy.
    pub fn new() -> Self {
        Self::with_rng(Rng::new())
    }

    /// Creates an empty layout with deterministic placement.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Rng::with_seed(seed))
    }

    fn with_rng(rng: Rng) -> Self {
        Self {
            positions: FxIndexMap::default(),
            placement: Placement::default(),
            rng,
        }
    }

    pub fn placement(self, placement: Placement) -> Self {
        Self { placement, ..self }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Position)> {
        self.positions.iter()
    }

    pub(crate) fn clear(&mut self) {
        self.positions.clear();
    }
}

impl<K> Default for Layout<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Layout<K>
where
    K: Eq + Hash,
{
    pub fn get(&self, key: &K) -> Option<Position> {
        self.positions.get(key).copied()
    }

    /// Assigns a position to the key unless it already has one.
    pub(crate) fn place(&mut self, key: K) {
        if self.positions.contains_key(&key) {
            return;
        }

        let position = self.next_position();
        self.positions.insert(key, position);
    }

    pub(crate) fn set(&mut self, key: K, position: Position) {
        self.positions.insert(key, position);
    }

    fn random_position(&mut self) -> Position {
        Position::new(self.rng.f64(), self.rng.f64())
    }

    fn next_position(&mut self) -> Position {
        match self.placement {
            Placement::Random => self.random_position(),
            Placement::Spaced {
                min_distance,
                max_attempts,
            } => {
                let mut candidate = self.random_position();

                for _ in 1..max_attempts {
                    let spaced = self
                        .positions
                        .values()
                        .all(|existing| existing.distance(&candidate) > min_distance);

                    if spaced {
                        break;
                    }

                    candidate = self.random_position();
                }

                candidate
            }
        }
    }
}
