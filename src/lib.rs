pub mod algo;
pub mod common;
pub mod core;
pub mod graph;
pub mod infra;
pub mod layout;

pub use graph::Graph;

pub mod prelude {
    pub use crate::{
        algo::ShortestPaths,
        core::{LookupError, Weight},
        graph::Graph,
        layout::{Layout, Placement, Position},
    };
}
