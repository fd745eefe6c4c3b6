//! Matrix module: a sequence of vector rows.

pub mod dense;
pub use dense::Matrix;
