//! Core linear-algebra traits for calgebra.

use crate::error::Result;

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x as a new vector.
    fn matvec(&self, x: &V) -> Result<V>;
}

/// Dot products & norms.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: Copy;
    /// Compute dot(x, y).
    fn dot(&self, x: &V, y: &V) -> Result<Self::Scalar>;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> f32;
}

/// Uniform length query (rows of a matrix, capacity of a vector).
pub trait Indexing {
    /// Number of rows (or length for a vector).
    fn nrows(&self) -> usize;
}

/// Two-dimensional shape.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
}
