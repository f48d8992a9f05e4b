//! Trait implementations for the crate's buffers, plus faer interop.
//!
//! This module wires `VectorBuffer` and `MatrixBuffer` into the core traits so they can be
//! used by code written against `InnerProduct`, `MatVec`, `Indexing` and `MatShape`, and it
//! bridges `MatrixBuffer` to `faer` dense matrices. A complex matrix maps to a pair of real
//! `faer::Mat<f32>`: one for the real parts, one for the imaginary parts. The factorizations
//! (determinant, inverse) work on a single `faer::Mat<c32>` instead.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use faer::{Mat, MatRef, c32};

use crate::config::EngineOptions;
use crate::core::ComplexScalar;
use crate::core::traits::{Indexing, InnerProduct, MatShape, MatVec};
use crate::error::{AlgebraError, Dims, Result};
use crate::kernels::DotKernel;
use crate::matrix::{self, MatrixBuffer};
use crate::vector::{self, NormKind, VectorBuffer};

/// Each kernel is an inner-product implementation over vectors.
impl InnerProduct<VectorBuffer> for DotKernel {
    type Scalar = ComplexScalar;
    /// Computes the bilinear dot product `Σ x[i] y[i]`.
    fn dot(&self, x: &VectorBuffer, y: &VectorBuffer) -> Result<ComplexScalar> {
        vector::ops::dot_product(*self, x, y)
    }
    /// Computes the Euclidean norm over complex magnitudes.
    fn norm(&self, x: &VectorBuffer) -> f32 {
        vector::norm::norm(x, NormKind::L2)
    }
}

/// Matrix-vector product with default engine options.
impl MatVec<VectorBuffer> for MatrixBuffer {
    fn matvec(&self, x: &VectorBuffer) -> Result<VectorBuffer> {
        matrix::ops::matrix_vector_multiply(&EngineOptions::default(), self, x)
    }
}

impl Indexing for VectorBuffer {
    fn nrows(&self) -> usize {
        self.capacity()
    }
}

impl Indexing for MatrixBuffer {
    fn nrows(&self) -> usize {
        self.rows()
    }
}

impl MatShape for MatrixBuffer {
    fn nrows(&self) -> usize {
        self.rows()
    }
    fn ncols(&self) -> usize {
        self.cols()
    }
}

impl From<c32> for ComplexScalar {
    fn from(z: c32) -> Self {
        ComplexScalar::new(z.re, z.im)
    }
}

impl From<ComplexScalar> for c32 {
    fn from(c: ComplexScalar) -> Self {
        c32::new(c.real, c.imag)
    }
}

impl MatrixBuffer {
    /// Copy into a single complex faer matrix.
    pub fn to_faer_complex(&self) -> Mat<c32> {
        Mat::from_fn(self.rows(), self.cols(), |i, j| self[(i, j)].into())
    }

    /// Build from a complex faer matrix.
    pub fn from_faer_complex<N: Into<Vec<u8>>>(name: N, m: MatRef<'_, c32>) -> Result<Self> {
        Self::from_fn(name, m.nrows(), m.ncols(), |i, j| m[(i, j)].into())
    }

    /// Split into `(real, imag)` faer matrices.
    pub fn to_faer(&self) -> (Mat<f32>, Mat<f32>) {
        let re = Mat::from_fn(self.rows(), self.cols(), |i, j| self[(i, j)].real);
        let im = Mat::from_fn(self.rows(), self.cols(), |i, j| self[(i, j)].imag);
        (re, im)
    }

    /// Build from a faer matrix of real parts and an optional one of imaginary parts.
    pub fn from_faer<N: Into<Vec<u8>>>(
        name: N,
        re: MatRef<'_, f32>,
        im: Option<MatRef<'_, f32>>,
    ) -> Result<Self> {
        if let Some(im) = im {
            if im.nrows() != re.nrows() || im.ncols() != re.ncols() {
                return Err(AlgebraError::DimensionMismatch {
                    op: "from faer",
                    lhs: Dims::Matrix(re.nrows(), re.ncols()),
                    rhs: Dims::Matrix(im.nrows(), im.ncols()),
                });
            }
        }
        Self::from_fn(name, re.nrows(), re.ncols(), |i, j| {
            ComplexScalar::new(re[(i, j)], im.map_or(0.0, |m| m[(i, j)]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splitting into real/imaginary faer matrices and rebuilding is lossless.
    #[test]
    fn faer_round_trip_keeps_both_parts() {
        let m = MatrixBuffer::from_rows(
            "A",
            vec![
                vec![ComplexScalar::new(1.0, -1.0), ComplexScalar::new(2.0, 0.5)],
                vec![ComplexScalar::new(0.0, 3.0), ComplexScalar::new(-4.0, 0.0)],
            ],
        )
        .unwrap();
        let (re, im) = m.to_faer();
        assert_eq!(re[(1, 1)], -4.0);
        assert_eq!(im[(1, 0)], 3.0);
        let back = MatrixBuffer::from_faer("A", re.as_ref(), Some(im.as_ref())).unwrap();
        assert_eq!(back, m);
    }

    /// Real and imaginary parts of different shapes are rejected.
    #[test]
    fn faer_shapes_must_agree() {
        let re = Mat::<f32>::zeros(2, 2);
        let im = Mat::<f32>::zeros(2, 3);
        assert!(MatrixBuffer::from_faer("A", re.as_ref(), Some(im.as_ref())).is_err());
    }

    /// The buffers behave through the core traits as through their inherent methods.
    #[test]
    fn trait_views() {
        let m = MatrixBuffer::identity("I", 2).unwrap();
        let x = VectorBuffer::from_reals("x", &[2.0, 3.0]).unwrap();
        assert_eq!(m.matvec(&x).unwrap(), x);
        assert_eq!(MatShape::ncols(&m), 2);
        assert_eq!(Indexing::nrows(&x), 2);
        let k = DotKernel::Reference;
        assert_eq!(k.dot(&x, &x).unwrap(), ComplexScalar::from_real(13.0));
        assert_eq!(InnerProduct::norm(&k, &VectorBuffer::from_reals("y", &[3.0, 4.0]).unwrap()), 5.0);
    }

    /// The complex faer bridge keeps both parts of every entry, and faer's
    /// determinant agrees with the hand-computed one.
    #[test]
    fn faer_complex_round_trip() {
        let m = MatrixBuffer::from_rows(
            "A",
            vec![
                vec![ComplexScalar::new(1.0, 1.0), ComplexScalar::new(2.0, 0.0)],
                vec![ComplexScalar::new(0.0, -1.0), ComplexScalar::new(3.0, 0.5)],
            ],
        )
        .unwrap();
        let z = m.to_faer_complex();
        assert_eq!(z[(1, 0)], c32::new(0.0, -1.0));
        assert_eq!(MatrixBuffer::from_faer_complex("A", z.as_ref()).unwrap(), m);
        // (1+i)(3+0.5i) - 2(-i) = 2.5 + 3.5i + 2i
        let det = ComplexScalar::from(z.as_ref().determinant());
        approx::assert_abs_diff_eq!(det, ComplexScalar::new(2.5, 5.5), epsilon = 1e-5);
    }
}
