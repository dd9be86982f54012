//! Dense square matrices indexed by vertex labels.

use crate::types::{Index, Name};
use std::collections::HashMap;
use std::ops::{Index as IndexOp, IndexMut};

/// A row-major `n x n` matrix where `T::default()` means "no arc".
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    n: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Matrix<T> {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![T::default(); n * n],
        }
    }
}

impl<T> Matrix<T> {
    /// The number of rows (and columns).
    pub fn order(&self) -> usize {
        self.n
    }

    pub fn row(&self, i: Index) -> &[T] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }
}

impl<T: Clone> Matrix<T> {
    /// Overwrite row `dst` with the result of `f(dst_cell, src_cell)` for each column.
    pub fn merge_row<F>(&mut self, dst: Index, src: Index, f: F)
    where
        F: Fn(&T, &T) -> T,
    {
        for j in 0..self.n {
            let merged = f(&self[(dst, j)], &self[(src, j)]);
            self[(dst, j)] = merged;
        }
    }
}

impl<T> IndexOp<(Index, Index)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (Index, Index)) -> &T {
        &self.cells[i * self.n + j]
    }
}

impl<T> IndexMut<(Index, Index)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (Index, Index)) -> &mut T {
        &mut self.cells[i * self.n + j]
    }
}

/// Assign dense indices to labels in order of first appearance.
#[derive(Debug, Default, Clone)]
pub struct Labels {
    indices: HashMap<Name, Index>,
}

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the indices from `(source, destination)` pairs, source first.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut labels = Self::new();
        for (src, dst) in pairs {
            labels.insert(src);
            labels.insert(dst);
        }
        labels
    }

    /// Return the index of `label`, assigning the next free one if it is new.
    pub fn insert(&mut self, label: &str) -> Index {
        let next = self.indices.len();
        *self.indices.entry(label.to_owned()).or_insert(next)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let mut labels = Labels::from_pairs(vec![("b", "a"), ("a", "c"), ("c", "b")]);
        assert_eq!(labels.len(), 3);
        assert_eq!(labels.insert("b"), 0);
        assert_eq!(labels.insert("a"), 1);
        assert_eq!(labels.insert("c"), 2);
        assert_eq!(labels.len(), 3);
        assert_eq!(labels.insert("d"), 3);
        assert_eq!(labels.len(), 4);
    }

    #[test]
    fn test_matrix() {
        let mut m = Matrix::new(3);
        m[(0, 1)] = true;
        m[(2, 2)] = true;
        assert_eq!(m.row(0), &[false, true, false]);
        m.merge_row(2, 0, |a, b| *a || *b);
        assert_eq!(m.row(2), &[false, true, true]);
        assert_eq!(m.order(), 3);
    }
}
