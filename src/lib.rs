//! vecmat: small fixed-dimension Vector and Matrix value types
//!
//! This crate provides generic numeric `Vector<T>` and `Matrix<T>` types with bounds-checked
//! access, summation, Euclidean norm, element-wise addition, best-effort parsing from free-form
//! text and a human-readable display format.

pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod vector;

// Re-exports for convenience
pub use config::FormatOptions;
pub use crate::core::{Element, Indexing};
pub use error::{Result, VmError};
pub use format::{to_string, to_string_with};
pub use matrix::Matrix;
pub use ops::{add_matrices, add_vectors, addition_error};
pub use vector::Vector;
