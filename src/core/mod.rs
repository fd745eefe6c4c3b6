//! Core traits shared by the vector and matrix types.

pub mod traits;
pub use traits::{Element, Indexing};
