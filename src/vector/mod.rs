//! Vector module: the dense vector type and its text scanner.

pub mod dense;
pub use dense::Vector;
mod parse;
