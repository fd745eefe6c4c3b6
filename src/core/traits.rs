//! Core element and shape traits for vecmat.

use num_traits::{Num, NumCast, ToPrimitive};
use std::fmt;

/// Numeric element stored in a `Vector` or `Matrix`.
///
/// Blanket-implemented for every primitive integer and float type, so a container is
/// instantiated with exactly one numeric type.
pub trait Element: Num + NumCast + ToPrimitive + Copy + fmt::Display + fmt::Debug {}

impl<T> Element for T where T: Num + NumCast + ToPrimitive + Copy + fmt::Display + fmt::Debug {}

/// Uniform outer length for vectors and matrices.
pub trait Indexing {
    /// Number of rows (or length for a vector).
    fn nrows(&self) -> usize;
}
