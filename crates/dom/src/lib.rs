#[cfg(any(test, feature = "dom-snapshot"))]
pub mod dom_snapshot;
pub mod traverse;

mod types;

pub use crate::types::{Element, Node, Scalar};
