//! Row-major complex matrix built from owned row vectors.
//!
//! A `MatrixBuffer` owns `rows` `VectorBuffer`s, each of capacity `cols`. The row width
//! is stored separately so that a `0 x n` matrix keeps its column count.

use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::fmt;
use std::ops::Index;

use crate::core::ComplexScalar;
use crate::error::{AlgebraError, Result};
use crate::utils::validation::{check_len, check_name};
use crate::vector::VectorBuffer;
use crate::vector::buffer::write_component;

#[derive(Clone, Debug)]
pub struct MatrixBuffer {
    rows: Vec<VectorBuffer>,
    cols: usize,
    name: CString,
}

impl MatrixBuffer {
    /// Build a matrix from row vectors; every row must have the same capacity.
    pub fn new<N: Into<Vec<u8>>>(name: N, rows: Vec<VectorBuffer>) -> Result<Self> {
        let cols = rows.first().map_or(0, VectorBuffer::capacity);
        Self::with_shape(name, rows.len(), cols, rows)
    }

    /// Build a matrix with an explicit shape; `rows` must match it exactly.
    pub fn with_shape<N: Into<Vec<u8>>>(
        name: N,
        nrows: usize,
        ncols: usize,
        rows: Vec<VectorBuffer>,
    ) -> Result<Self> {
        check_len("matrix rows", nrows)?;
        check_len("matrix cols", ncols)?;
        if rows.len() != nrows {
            return Err(AlgebraError::InvalidBuffer(format!(
                "expected {nrows} rows, got {}",
                rows.len()
            )));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.capacity() != ncols) {
            return Err(AlgebraError::InvalidBuffer(format!(
                "row {i} has {} columns, expected {ncols}",
                row.capacity()
            )));
        }
        Ok(Self { rows, cols: ncols, name: check_name(name)? })
    }

    pub fn from_rows<N: Into<Vec<u8>>>(name: N, rows: Vec<Vec<ComplexScalar>>) -> Result<Self> {
        let name = check_name(name)?;
        let rows = rows
            .into_iter()
            .map(|r| VectorBuffer::new(name.as_bytes(), r))
            .collect::<Result<Vec<_>>>()?;
        Self::new(name, rows)
    }

    /// Promote a table of reals to a complex matrix with zero imaginary parts.
    pub fn from_reals<N: Into<Vec<u8>>>(name: N, rows: &[Vec<f32>]) -> Result<Self> {
        Self::from_rows(
            name,
            rows.iter()
                .map(|r| r.iter().copied().map(ComplexScalar::from_real).collect())
                .collect(),
        )
    }

    /// Build an `nrows x ncols` matrix from `f(i, j)`.
    pub fn from_fn<N, F>(name: N, nrows: usize, ncols: usize, f: F) -> Result<Self>
    where
        N: Into<Vec<u8>>,
        F: FnMut(usize, usize) -> ComplexScalar,
    {
        check_len("matrix rows", nrows)?;
        check_len("matrix cols", ncols)?;
        Ok(Self::generate(&check_name(name)?, nrows, ncols, f))
    }

    pub fn zeros<N: Into<Vec<u8>>>(name: N, nrows: usize, ncols: usize) -> Result<Self> {
        Self::from_fn(name, nrows, ncols, |_, _| ComplexScalar::ZERO)
    }

    /// `n x n` identity: ones on the diagonal, zero elsewhere, all imaginary parts zero.
    pub fn identity<N: Into<Vec<u8>>>(name: N, n: usize) -> Result<Self> {
        Self::from_fn(name, n, n, |i, j| if i == j { ComplexScalar::ONE } else { ComplexScalar::ZERO })
    }

    /// Internal constructor for results whose dimensions were validated upstream.
    pub(crate) fn generate<F>(name: &CStr, nrows: usize, ncols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> ComplexScalar,
    {
        let rows = (0..nrows)
            .map(|i| VectorBuffer::labelled(name, (0..ncols).map(|j| f(i, j)).collect()))
            .collect();
        Self { rows, cols: ncols, name: name.to_owned() }
    }

    pub(crate) fn from_row_buffers(name: &CStr, ncols: usize, rows: Vec<VectorBuffer>) -> Self {
        debug_assert!(rows.iter().all(|r| r.capacity() == ncols));
        Self { rows, cols: ncols, name: name.to_owned() }
    }

    pub fn with_name<N: Into<Vec<u8>>>(mut self, name: N) -> Result<Self> {
        self.name = check_name(name)?;
        Ok(self)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols
    }

    pub fn name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    pub fn name_c(&self) -> &CStr {
        &self.name
    }

    pub fn row(&self, i: usize) -> Option<&VectorBuffer> {
        self.rows.get(i)
    }

    pub fn get(&self, i: usize, j: usize) -> Option<ComplexScalar> {
        self.rows.get(i).and_then(|r| r.get(j))
    }

    pub fn iter_rows(&self) -> std::slice::Iter<'_, VectorBuffer> {
        self.rows.iter()
    }

    pub fn as_rows(&self) -> &[VectorBuffer] {
        &self.rows
    }

    /// Copy column `j` out into its own vector.
    pub fn column(&self, j: usize) -> Option<VectorBuffer> {
        (j < self.cols).then(|| {
            VectorBuffer::labelled(&self.name, self.rows.iter().map(|r| r[j]).collect())
        })
    }

    /// Every column materialized as a vector, in order.
    pub fn columns(&self) -> Vec<VectorBuffer> {
        (0..self.cols)
            .map(|j| VectorBuffer::labelled(&self.name, self.rows.iter().map(|r| r[j]).collect()))
            .collect()
    }

    pub fn into_rows(self) -> Vec<VectorBuffer> {
        self.rows
    }
}

/// Same shape and exactly equal entries; names are not compared.
impl PartialEq for MatrixBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.rows == other.rows
    }
}

impl Index<(usize, usize)> for MatrixBuffer {
    type Output = ComplexScalar;
    fn index(&self, (i, j): (usize, usize)) -> &ComplexScalar {
        &self.rows[i][j]
    }
}

impl fmt::Display for MatrixBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let props = self
            .rows
            .iter()
            .map(VectorBuffer::properties)
            .fold(crate::vector::VectorProperties::all(), |acc, p| acc & p);
        writeln!(f, "{} = (", self.name())?;
        for row in &self.rows {
            for &c in row {
                write!(f, "  ")?;
                write_component(f, c, props)?;
            }
            writeln!(f)?;
        }
        write!(f, ")")
    }
}
