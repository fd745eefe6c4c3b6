//! Dense fixed-length vector.
//!
//! `Vector<T>` owns its elements exclusively. Its length is fixed once built: element values
//! can be changed in place, but nothing is ever added or removed.

use crate::core::traits::{Element, Indexing};
use crate::error::{Result, VmError};
use crate::vector::parse::scan_digit_runs;
use std::convert::Infallible;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Length used by `Vector::default`.
pub const DEFAULT_LEN: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Element> Vector<T> {
    /// Zero-filled vector of the given length. Zero is a valid length.
    pub fn new(len: usize) -> Self {
        Self { data: vec![T::zero(); len] }
    }

    /// Wrap an existing sequence.
    pub fn from_sequence(seq: Vec<T>) -> Self {
        Self { data: seq }
    }

    /// Best-effort parse: each run of ASCII digits in `text` becomes one element.
    ///
    /// Never fails; input without digits gives an empty vector. See [`FromStr`] for the
    /// trait form.
    pub fn from_string(text: &str) -> Self {
        Self { data: scan_digit_runs(text) }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bounds-checked element access.
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.data.get(index).ok_or(VmError::IndexOutOfBounds { index, len })
    }

    /// Bounds-checked mutable element access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.data.get_mut(index).ok_or(VmError::IndexOutOfBounds { index, len })
    }

    /// Overwrite element `index`. The vector is left untouched on error.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Sum of all elements with the element type's own `+`.
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// Euclidean norm `sqrt(sum(e*e))`, computed in `f64`.
    pub fn norm(&self) -> f64 {
        self.data
            .iter()
            .map(|v| v.to_f64().unwrap_or(0.0))
            .fold(0.0, |acc, v| acc + v * v)
            .sqrt()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Element> Default for Vector<T> {
    fn default() -> Self {
        Self::new(DEFAULT_LEN)
    }
}

impl<T: Element> From<Vec<T>> for Vector<T> {
    fn from(seq: Vec<T>) -> Self {
        Self::from_sequence(seq)
    }
}

impl<T: Element> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl<T: Element> FromStr for Vector<T> {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_string(s))
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T> Indexing for Vector<T> {
    fn nrows(&self) -> usize {
        self.data.len()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
