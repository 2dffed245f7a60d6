pub mod shortest_paths;

pub use shortest_paths::{reconstruct_path, ShortestPaths};
