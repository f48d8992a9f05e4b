//! Tensor operations.
//!
//! Every operation works slice by slice through `matrix::ops`, so the matrix kernels
//! (and their rayon fan-out) are reused unchanged. Shapes are checked once, on the whole
//! tensor, before any slice is touched.

use crate::config::EngineOptions;
use crate::core::ComplexScalar;
use crate::error::Result;
use crate::matrix::{self, MatrixBuffer};
use crate::tensor::TensorBuffer;
use crate::utils::validation::{same_cols, same_tensor_shape, tensor_inner_dims};

fn slice_wise<F>(a: &TensorBuffer, b: &TensorBuffer, rows: usize, cols: usize, f: F) -> Result<TensorBuffer>
where
    F: Fn(&MatrixBuffer, &MatrixBuffer) -> Result<MatrixBuffer>,
{
    let slices = a
        .iter_slices()
        .zip(b.iter_slices())
        .map(|(x, y)| f(x, y))
        .collect::<Result<Vec<_>>>()?;
    Ok(TensorBuffer::from_slices(c"T", rows, cols, slices))
}

/// Elementwise sum.
pub fn add(opts: &EngineOptions, a: &TensorBuffer, b: &TensorBuffer) -> Result<TensorBuffer> {
    same_tensor_shape("tensor add", a, b)?;
    slice_wise(a, b, a.rows(), a.cols(), |x, y| matrix::ops::add(opts, x, y))
}

/// Elementwise difference.
pub fn subtract(opts: &EngineOptions, a: &TensorBuffer, b: &TensorBuffer) -> Result<TensorBuffer> {
    same_tensor_shape("tensor subtract", a, b)?;
    slice_wise(a, b, a.rows(), a.cols(), |x, y| matrix::ops::subtract(opts, x, y))
}

pub fn scalar_multiply(opts: &EngineOptions, a: &TensorBuffer, s: ComplexScalar) -> TensorBuffer {
    let slices = a.iter_slices().map(|x| matrix::ops::scalar_multiply(opts, x, s)).collect();
    TensorBuffer::from_slices(c"V", a.rows(), a.cols(), slices)
}

/// Elementwise (Hadamard) product.
pub fn hadamard_product(a: &TensorBuffer, b: &TensorBuffer) -> Result<TensorBuffer> {
    same_tensor_shape("tensor hadamard product", a, b)?;
    slice_wise(a, b, a.rows(), a.cols(), matrix::ops::hadamard_product)
}

/// Contraction over the shared inner index, one depth slice at a time:
/// `T[i][j][k] = Σ_n A[i][n][k] · B[n][j][k]`.
pub fn contract(opts: &EngineOptions, a: &TensorBuffer, b: &TensorBuffer) -> Result<TensorBuffer> {
    tensor_inner_dims("tensor contract", a, b)?;
    slice_wise(a, b, a.rows(), b.cols(), |x, y| matrix::ops::multiply(opts, x, y))
}

/// Rank-`R` canonical polyadic composition of three factor matrices with `R` columns each:
/// `V[i][j][k] = Σ_r A[i][r] · B[j][r] · C[k][r]`.
pub fn cp_compose(a: &MatrixBuffer, b: &MatrixBuffer, c: &MatrixBuffer) -> Result<TensorBuffer> {
    let rank = a.cols();
    same_cols("cp compose", a, b)?;
    same_cols("cp compose", a, c)?;
    Ok(TensorBuffer::generate(c"V", a.rows(), b.rows(), c.rows(), |i, j, k| {
        (0..rank).fold(ComplexScalar::ZERO, |acc, r| acc + a[(i, r)] * b[(j, r)] * c[(k, r)])
    }))
}

/// Same shape and bitwise-equal entries.
pub fn equals(a: &TensorBuffer, b: &TensorBuffer) -> bool {
    a.shape() == b.shape() && a.iter_slices().zip(b.iter_slices()).all(|(x, y)| matrix::ops::equals(x, y))
}

/// Same shape and every entry within `epsilon`.
pub fn equals_within(a: &TensorBuffer, b: &TensorBuffer, epsilon: f32) -> bool {
    a.shape() == b.shape()
        && a.iter_slices()
            .zip(b.iter_slices())
            .all(|(x, y)| matrix::ops::equals_within(x, y, epsilon))
}
