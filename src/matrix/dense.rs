//! Row-major matrix built from `Vector` rows.
//!
//! Rows are not required to share a length. A ragged matrix is a valid value; use
//! [`Matrix::is_rectangular`] to check, and expect `add_matrices` to reject ragged operands
//! whose rows disagree.

use crate::core::traits::{Element, Indexing};
use crate::error::{Result, VmError};
use crate::vector::Vector;
use std::ops::{Index, IndexMut};

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    rows: Vec<Vector<T>>,
}

impl<T: Element> Matrix<T> {
    /// `row_count` zero-filled rows of length `col_count`.
    pub fn new(row_count: usize, col_count: usize) -> Self {
        Self { rows: vec![Vector::new(col_count); row_count] }
    }

    /// Build from rows, keeping their order and individual lengths.
    ///
    /// Accepts anything that converts into `Vector<T>`, so both `Vec<Vector<T>>` and
    /// `Vec<Vec<T>>` work.
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Vector<T>>,
    {
        Self { rows: rows.into_iter().map(Into::into).collect() }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when every row has the same length. An empty matrix is rectangular.
    pub fn is_rectangular(&self) -> bool {
        match self.rows.first() {
            Some(first) => self.rows.iter().all(|r| r.len() == first.len()),
            None => true,
        }
    }

    pub fn get_row(&self, index: usize) -> Result<&Vector<T>> {
        let len = self.row_count();
        self.rows.get(index).ok_or(VmError::IndexOutOfBounds { index, len })
    }

    pub fn get_row_mut(&mut self, index: usize) -> Result<&mut Vector<T>> {
        let len = self.row_count();
        self.rows.get_mut(index).ok_or(VmError::IndexOutOfBounds { index, len })
    }

    /// Replace row `index`. The new row may have any length.
    pub fn set_row(&mut self, index: usize, row: Vector<T>) -> Result<()> {
        *self.get_row_mut(index)? = row;
        Ok(())
    }

    /// Sum of every element, row by row.
    pub fn sum(&self) -> T {
        self.rows.iter().fold(T::zero(), |acc, r| acc + r.sum())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector<T>> {
        self.rows.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Vector<T>> {
        self.rows.iter_mut()
    }
}

impl<T: Element> From<Vec<Vec<T>>> for Matrix<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: Element> From<Vec<Vector<T>>> for Matrix<T> {
    fn from(rows: Vec<Vector<T>>) -> Self {
        Self { rows }
    }
}

impl<T: Element> FromIterator<Vector<T>> for Matrix<T> {
    fn from_iter<I: IntoIterator<Item = Vector<T>>>(iter: I) -> Self {
        Self { rows: iter.into_iter().collect() }
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = Vector<T>;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

impl<T> Indexing for Matrix<T> {
    fn nrows(&self) -> usize {
        self.rows.len()
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a Vector<T>;
    type IntoIter = std::slice::Iter<'a, Vector<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Matrix<T> {
    type Item = &'a mut Vector<T>;
    type IntoIter = std::slice::IterMut<'a, Vector<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter_mut()
    }
}

impl<T> IntoIterator for Matrix<T> {
    type Item = Vector<T>;
    type IntoIter = std::vec::IntoIter<Vector<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zero_filled() {
        let m = Matrix::<i32>::new(2, 3);
        assert_eq!(m.row_count(), 2);
        assert!(m.iter().all(|r| r.len() == 3 && r.sum() == 0));
        assert!(m.is_rectangular());
    }

    #[test]
    fn from_rows_keeps_ragged_lengths() {
        let m = Matrix::<i32>::from_rows(vec![vec![1, 2, 3], vec![4]]);
        assert_eq!(m.row_count(), 2);
        assert_eq!(m[0].len(), 3);
        assert_eq!(m[1].len(), 1);
        assert!(!m.is_rectangular());
        assert_eq!(m.sum(), 10);
    }

    #[test]
    fn sum_over_all_rows() {
        let m = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(m.sum(), 10);
        assert_eq!(Matrix::<i32>::from_rows(Vec::<Vec<i32>>::new()).sum(), 0);
    }

    #[test]
    fn row_access_is_bounds_checked() {
        let mut m = Matrix::<i32>::new(2, 2);
        m.set_row(1, Vector::from(vec![5, 6])).unwrap();
        assert_eq!(m.get_row(1).unwrap().as_slice(), &[5, 6]);
        assert_eq!(
            m.set_row(2, Vector::from(vec![1, 1])),
            Err(VmError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert!(m.get_row(7).is_err());
        m.get_row_mut(0).unwrap().set(0, 9).unwrap();
        assert_eq!(m.sum(), 20);
    }

    #[test]
    fn mutable_iteration_updates_rows() {
        let mut m = Matrix::from(vec![vec![1, 1], vec![2, 2]]);
        for row in &mut m {
            row[0] = 0;
        }
        let sums: Vec<i32> = m.iter().map(Vector::sum).collect();
        assert_eq!(sums, vec![1, 2]);
    }
}
