//! Rank-3 complex tensor built from depth slices.
//!
//! A `TensorBuffer` owns `depth` `MatrixBuffer` slices, each `rows x cols`. Entry
//! `(i, j, k)` is entry `(i, j)` of slice `k`. Like matrices, the slice shape is stored
//! separately so that a tensor of depth zero keeps its row and column counts.

use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::fmt;
use std::ops::Index;

use crate::core::ComplexScalar;
use crate::error::{AlgebraError, Result};
use crate::matrix::MatrixBuffer;
use crate::utils::validation::{check_len, check_name};

#[derive(Clone, Debug)]
pub struct TensorBuffer {
    slices: Vec<MatrixBuffer>,
    rows: usize,
    cols: usize,
    name: CString,
}

impl TensorBuffer {
    /// Stack matrices along the depth axis; every slice must have the same shape.
    pub fn new<N: Into<Vec<u8>>>(name: N, slices: Vec<MatrixBuffer>) -> Result<Self> {
        let (rows, cols) = slices.first().map_or((0, 0), MatrixBuffer::shape);
        check_len("tensor depth", slices.len())?;
        if let Some((k, s)) = slices.iter().enumerate().find(|(_, s)| s.shape() != (rows, cols)) {
            return Err(AlgebraError::InvalidBuffer(format!(
                "slice {k} is {}x{}, expected {rows}x{cols}",
                s.rows(),
                s.cols()
            )));
        }
        Ok(Self { slices, rows, cols, name: check_name(name)? })
    }

    /// Build a `rows x cols x depth` tensor from `f(i, j, k)`.
    pub fn from_fn<N, F>(name: N, rows: usize, cols: usize, depth: usize, mut f: F) -> Result<Self>
    where
        N: Into<Vec<u8>>,
        F: FnMut(usize, usize, usize) -> ComplexScalar,
    {
        check_len("tensor rows", rows)?;
        check_len("tensor cols", cols)?;
        check_len("tensor depth", depth)?;
        Ok(Self::generate(&check_name(name)?, rows, cols, depth, |i, j, k| f(i, j, k)))
    }

    pub fn zeros<N: Into<Vec<u8>>>(name: N, rows: usize, cols: usize, depth: usize) -> Result<Self> {
        Self::from_fn(name, rows, cols, depth, |_, _, _| ComplexScalar::ZERO)
    }

    pub(crate) fn generate<F>(name: &CStr, rows: usize, cols: usize, depth: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> ComplexScalar,
    {
        let slices = (0..depth)
            .map(|k| MatrixBuffer::generate(name, rows, cols, |i, j| f(i, j, k)))
            .collect();
        Self { slices, rows, cols, name: name.to_owned() }
    }

    /// Slices produced by matrix operations whose shapes were validated upstream.
    pub(crate) fn from_slices(name: &CStr, rows: usize, cols: usize, slices: Vec<MatrixBuffer>) -> Self {
        debug_assert!(slices.iter().all(|s| s.shape() == (rows, cols)));
        Self { slices, rows, cols, name: name.to_owned() }
    }

    pub fn with_name<N: Into<Vec<u8>>>(mut self, name: N) -> Result<Self> {
        self.name = check_name(name)?;
        Ok(self)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.slices.len()
    }

    /// `(rows, cols, depth)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.rows, self.cols, self.slices.len())
    }

    pub fn name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    pub fn slice(&self, k: usize) -> Option<&MatrixBuffer> {
        self.slices.get(k)
    }

    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<ComplexScalar> {
        self.slices.get(k)?.get(i, j)
    }

    pub fn iter_slices(&self) -> std::slice::Iter<'_, MatrixBuffer> {
        self.slices.iter()
    }

    pub fn into_slices(self) -> Vec<MatrixBuffer> {
        self.slices
    }
}

/// Same shape and exactly equal entries; names are not compared.
impl PartialEq for TensorBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.slices == other.slices
    }
}

impl Index<(usize, usize, usize)> for TensorBuffer {
    type Output = ComplexScalar;
    fn index(&self, (i, j, k): (usize, usize, usize)) -> &ComplexScalar {
        &self.slices[k][(i, j)]
    }
}

impl fmt::Display for TensorBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} = [", self.name())?;
        for (k, slice) in self.slices.iter().enumerate() {
            writeln!(f, "[{k}] {slice}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Slices of different shapes cannot be stacked.
    #[test]
    fn mismatched_slices_are_rejected() {
        let a = MatrixBuffer::zeros("A", 2, 2).unwrap();
        let b = MatrixBuffer::zeros("B", 2, 3).unwrap();
        assert!(matches!(TensorBuffer::new("T", vec![a, b]), Err(AlgebraError::InvalidBuffer(_))));
    }

    /// Entry `(i, j, k)` reads row `i`, column `j` of slice `k`.
    #[test]
    fn indexing_follows_slices() {
        let t = TensorBuffer::from_fn("T", 2, 3, 4, |i, j, k| {
            ComplexScalar::new((100 * k + 10 * i + j) as f32, 0.0)
        })
        .unwrap();
        assert_eq!(t.shape(), (2, 3, 4));
        assert_eq!(t[(1, 2, 3)].real, 312.0);
        assert_eq!(t.get(0, 1, 2), Some(ComplexScalar::from_real(201.0)));
        assert_eq!(t.get(0, 0, 4), None);
        assert_eq!(t.slice(1).map(MatrixBuffer::shape), Some((2, 3)));
    }

    /// A tensor of depth zero keeps its slice shape.
    #[test]
    fn empty_depth_keeps_shape() {
        let t = TensorBuffer::zeros("E", 3, 2, 0).unwrap();
        assert_eq!(t.shape(), (3, 2, 0));
        assert_eq!(t.iter_slices().count(), 0);
        assert_eq!(t.to_string(), "E = [\n]");
    }
}
