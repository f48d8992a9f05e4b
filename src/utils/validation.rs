//! Dimension checks shared by every bulk operation.
//!
//! Each check runs before any arithmetic so that a failing operation never produces a
//! partial result. Failures are logged at `debug` and returned to the caller unchanged.

use std::ffi::CString;

use crate::error::{AlgebraError, Dims, Result};
use crate::matrix::MatrixBuffer;
use crate::tensor::TensorBuffer;
use crate::vector::VectorBuffer;

/// Largest length representable by the 32-bit signed size fields of the raw layout.
pub const MAX_DIM: usize = i32::MAX as usize;

pub(crate) fn dims_of_vector(v: &VectorBuffer) -> Dims {
    Dims::Vector(v.capacity())
}

pub(crate) fn dims_of_matrix(m: &MatrixBuffer) -> Dims {
    Dims::Matrix(m.rows(), m.cols())
}

pub(crate) fn dims_of_tensor(t: &TensorBuffer) -> Dims {
    let (r, c, d) = t.shape();
    Dims::Tensor(r, c, d)
}

fn mismatch(op: &'static str, lhs: Dims, rhs: Dims) -> AlgebraError {
    log::debug!("{op}: rejected operands {lhs} and {rhs}");
    AlgebraError::DimensionMismatch { op, lhs, rhs }
}

pub(crate) fn check_len(what: &str, len: usize) -> Result<()> {
    if len > MAX_DIM {
        return Err(AlgebraError::InvalidBuffer(format!(
            "{what} length {len} exceeds {MAX_DIM}"
        )));
    }
    Ok(())
}

pub(crate) fn check_name<N: Into<Vec<u8>>>(name: N) -> Result<CString> {
    CString::new(name).map_err(|e| {
        AlgebraError::InvalidBuffer(format!(
            "name contains a NUL byte at offset {}",
            e.nul_position()
        ))
    })
}

pub(crate) fn same_capacity(op: &'static str, u: &VectorBuffer, v: &VectorBuffer) -> Result<()> {
    if u.capacity() != v.capacity() {
        return Err(mismatch(op, dims_of_vector(u), dims_of_vector(v)));
    }
    Ok(())
}

pub(crate) fn require_capacity(op: &'static str, u: &VectorBuffer, expected: usize) -> Result<()> {
    if u.capacity() != expected {
        log::debug!("{op}: requires capacity {expected}, got {}", u.capacity());
        return Err(AlgebraError::InvalidDimension { op, expected, found: u.capacity() });
    }
    Ok(())
}

pub(crate) fn same_shape(op: &'static str, a: &MatrixBuffer, b: &MatrixBuffer) -> Result<()> {
    if a.rows() != b.rows() || a.cols() != b.cols() {
        return Err(mismatch(op, dims_of_matrix(a), dims_of_matrix(b)));
    }
    Ok(())
}

/// `a.cols == b.rows`, as required by a matrix product.
pub(crate) fn inner_dims(op: &'static str, a: &MatrixBuffer, b: &MatrixBuffer) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(mismatch(op, dims_of_matrix(a), dims_of_matrix(b)));
    }
    Ok(())
}

pub(crate) fn matrix_vector_dims(op: &'static str, a: &MatrixBuffer, x: &VectorBuffer) -> Result<()> {
    if a.cols() != x.capacity() {
        return Err(mismatch(op, dims_of_matrix(a), dims_of_vector(x)));
    }
    Ok(())
}

/// Factor matrices sharing a column count.
pub(crate) fn same_cols(op: &'static str, a: &MatrixBuffer, b: &MatrixBuffer) -> Result<()> {
    if a.cols() != b.cols() {
        return Err(mismatch(op, dims_of_matrix(a), dims_of_matrix(b)));
    }
    Ok(())
}

pub(crate) fn same_tensor_shape(op: &'static str, a: &TensorBuffer, b: &TensorBuffer) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(mismatch(op, dims_of_tensor(a), dims_of_tensor(b)));
    }
    Ok(())
}

/// Slice-wise product: `a.cols == b.rows` and equal depth.
pub(crate) fn tensor_inner_dims(op: &'static str, a: &TensorBuffer, b: &TensorBuffer) -> Result<()> {
    if a.cols() != b.rows() || a.depth() != b.depth() {
        return Err(mismatch(op, dims_of_tensor(a), dims_of_tensor(b)));
    }
    Ok(())
}

pub(crate) fn require_square(op: &'static str, a: &MatrixBuffer) -> Result<()> {
    if a.rows() != a.cols() {
        log::debug!("{op}: requires a square matrix, got {}", dims_of_matrix(a));
        return Err(AlgebraError::InvalidDimension { op, expected: a.rows(), found: a.cols() });
    }
    Ok(())
}

/// Returns the norm unchanged when it can be used as a divisor.
pub(crate) fn nonzero_norm(op: &'static str, norm: f32) -> Result<f32> {
    if norm == 0.0 {
        log::debug!("{op}: divisor has zero norm");
        return Err(AlgebraError::DegenerateOperand { op });
    }
    Ok(norm)
}
