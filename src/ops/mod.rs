//! Element-wise addition of vectors and matrices.
//!
//! Both operations are shape-checked before any work is done and return a fresh value; the
//! operands are never modified.

use crate::core::traits::{Element, Indexing};
use crate::error::{Result, VmError};
use crate::matrix::Matrix;
use crate::vector::Vector;

fn check_same_len<A: Indexing>(what: &'static str, a: &A, b: &A) -> Result<()> {
    let (left, right) = (a.nrows(), b.nrows());
    if left != right {
        log::debug!("rejecting addition: {what} of unequal size ({left} and {right})");
        return Err(VmError::DimensionMismatch { what, left, right });
    }
    Ok(())
}

/// `result[i] = v1[i] + v2[i]`.
///
/// Fails with `DimensionMismatch` ("Vectors of unequal size (L1 and L2)") when the lengths
/// differ.
pub fn add_vectors<T: Element>(v1: &Vector<T>, v2: &Vector<T>) -> Result<Vector<T>> {
    check_same_len("Vectors", v1, v2)?;
    Ok(v1.iter().zip(v2.iter()).map(|(&a, &b)| a + b).collect())
}

/// Row-wise `add_vectors`.
///
/// Row counts are compared first ("Matrices of unequal size (R1 and R2)"); after that the
/// first row pair with different lengths fails with the vector error.
pub fn add_matrices<T: Element>(m1: &Matrix<T>, m2: &Matrix<T>) -> Result<Matrix<T>> {
    check_same_len("Matrices", m1, m2)?;
    m1.iter().zip(m2.iter()).map(|(r1, r2)| add_vectors(r1, r2)).collect()
}

/// Message of the error `add_vectors` would return, or an empty string if the vectors add.
pub fn addition_error<T: Element>(v1: &Vector<T>, v2: &Vector<T>) -> String {
    match add_vectors(v1, v2) {
        Ok(_) => String::new(),
        Err(e) => e.to_string(),
    }
}
