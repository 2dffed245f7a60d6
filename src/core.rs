pub mod error;
pub mod weight;

pub use error::{AddEdgeError, AddEdgeErrorKind, LookupError};
pub use weight::{check_weight, Weight};
