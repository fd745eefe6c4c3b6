//! Human-readable rendering of vectors and matrices.
//!
//! Vectors render on one line as `[ 1, 2, 3 ]` (an empty vector is `[]`). Matrices render as
//! a block with one indented row per line:
//!
//! ```text
//! [
//!   [ 1, 2 ],
//!   [ 3, 4 ]
//! ]
//! ```
//!
//! The output is meant for display; feeding it back through `Vector::from_string` does not
//! preserve signs, fractions or structure.

use crate::config::FormatOptions;
use crate::core::traits::Element;
use crate::matrix::Matrix;
use crate::vector::Vector;
use std::fmt;

impl<T: Element> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.len();
        f.write_str("[")?;
        for (i, e) in self.iter().enumerate() {
            let sep = if i + 1 < len { "," } else { " " };
            write!(f, " {e}{sep}")?;
        }
        f.write_str("]")
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_block(f, self, FormatOptions::default().indent)
    }
}

fn write_block<T: Element>(f: &mut fmt::Formatter<'_>, m: &Matrix<T>, indent: usize) -> fmt::Result {
    let rows = m.row_count();
    writeln!(f, "[")?;
    for (i, row) in m.iter().enumerate() {
        let sep = if i + 1 < rows { "," } else { "" };
        writeln!(f, "{:indent$}{row}{sep}", "")?;
    }
    f.write_str("]")
}

/// Matrix paired with non-default layout options.
struct WithOptions<'a, T> {
    matrix: &'a Matrix<T>,
    options: &'a FormatOptions,
}

impl<T: Element> fmt::Display for WithOptions<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_block(f, self.matrix, self.options.indent)
    }
}

/// Render a vector or a matrix.
pub fn to_string<D: fmt::Display + ?Sized>(value: &D) -> String {
    value.to_string()
}

/// Render a matrix using custom layout options.
pub fn to_string_with<T: Element>(matrix: &Matrix<T>, options: &FormatOptions) -> String {
    WithOptions { matrix, options }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_layout() {
        assert_eq!(to_string(&Vector::from(vec![1, 2, 3])), "[ 1, 2, 3 ]");
        assert_eq!(to_string(&Vector::from(vec![-4])), "[ -4 ]");
        assert_eq!(to_string(&Vector::<i32>::new(0)), "[]");
        assert_eq!(to_string(&Vector::from(vec![1.5, 3.0])), "[ 1.5, 3 ]");
    }

    #[test]
    fn matrix_layout() {
        let m = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(to_string(&m), "[\n  [ 1, 2 ],\n  [ 3, 4 ]\n]");
        assert_eq!(format!("{m}"), to_string(&m));
    }

    #[test]
    fn single_row_and_empty_matrix() {
        assert_eq!(to_string(&Matrix::from(vec![vec![7]])), "[\n  [ 7 ]\n]");
        assert_eq!(to_string(&Matrix::<i32>::new(0, 0)), "[\n]");
        assert_eq!(to_string(&Matrix::<i32>::new(1, 0)), "[\n  []\n]");
    }

    #[test]
    fn custom_indent() {
        let m = Matrix::from(vec![vec![1], vec![2]]);
        let opts = FormatOptions { indent: 4 };
        assert_eq!(to_string_with(&m, &opts), "[\n    [ 1 ],\n    [ 2 ]\n]");
        assert_eq!(to_string_with(&m, &FormatOptions::default()), to_string(&m));
        assert_eq!(to_string_with(&m, &FormatOptions { indent: 0 }), "[\n[ 1 ],\n[ 2 ]\n]");
    }
}
