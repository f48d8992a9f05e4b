//! Matrix operations.
//!
//! Matrices are row-major collections of `VectorBuffer`s, so elementwise operations are
//! expressed row by row through `vector::ops`. The product `A·B` transposes `B` into
//! materialized columns first and fills `C[i][j]` with the configured bilinear dot
//! kernel applied to row `i` of `A` and column `j` of `B`.
//!
//! With the `rayon` feature, row-wise kernels run in parallel once the output has at
//! least `EngineOptions::parallel_threshold` rows.

use faer::linalg::solvers::{DenseSolveCore, PartialPivLu};
use num_traits::Zero;

use crate::config::EngineOptions;
use crate::core::ComplexScalar;
use crate::error::{AlgebraError, Result};
use crate::matrix::MatrixBuffer;
use crate::utils::validation::{check_len, inner_dims, matrix_vector_dims, require_square, same_shape};
use crate::vector::{self, VectorBuffer};

/// Supported matrix norms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixNorm {
    /// Largest column sum of magnitudes.
    L1,
    /// Largest row sum of magnitudes.
    LInf,
    /// Root of the sum of squared magnitudes.
    #[default]
    Frobenius,
}

/// Evaluate `f` for every row index, in parallel when the row count warrants it.
fn map_rows<T, F>(opts: &EngineOptions, n: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        if n >= opts.parallel_threshold {
            use rayon::prelude::*;
            log::trace!("row kernel: {n} rows across the rayon pool");
            return (0..n).into_par_iter().map(f).collect();
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = opts;
    (0..n).map(f).collect()
}

fn combine(
    op: &'static str,
    opts: &EngineOptions,
    a: &MatrixBuffer,
    b: &MatrixBuffer,
    negate_rhs: bool,
) -> Result<MatrixBuffer> {
    same_shape(op, a, b)?;
    let rows = map_rows(opts, a.rows(), |i| {
        let (u, v) = (&a.as_rows()[i], &b.as_rows()[i]);
        if negate_rhs { vector::ops::subtract(u, v) } else { vector::ops::add(u, v) }
    })
    .into_iter()
    .collect::<Result<Vec<_>>>()?;
    Ok(MatrixBuffer::from_row_buffers(c"M", a.cols(), rows))
}

pub fn add(opts: &EngineOptions, a: &MatrixBuffer, b: &MatrixBuffer) -> Result<MatrixBuffer> {
    combine("matrix add", opts, a, b, false)
}

pub fn subtract(opts: &EngineOptions, a: &MatrixBuffer, b: &MatrixBuffer) -> Result<MatrixBuffer> {
    combine("matrix subtract", opts, a, b, true)
}

/// Multiply every entry by `s`, row by row.
pub fn scalar_multiply(opts: &EngineOptions, a: &MatrixBuffer, s: ComplexScalar) -> MatrixBuffer {
    let rows = map_rows(opts, a.rows(), |i| {
        vector::ops::scalar_multiply(&a.as_rows()[i], s)
    });
    MatrixBuffer::from_row_buffers(c"MS", a.cols(), rows)
}

/// `A·B` for `A: r x k`, `B: k x c`, giving `r x c`.
pub fn multiply(opts: &EngineOptions, a: &MatrixBuffer, b: &MatrixBuffer) -> Result<MatrixBuffer> {
    inner_dims("matrix multiply", a, b)?;
    let kernel = opts.dot_kernel;
    let columns = b.columns();
    log::trace!(
        "matrix multiply {}x{} * {}x{} with {:?}",
        a.rows(),
        a.cols(),
        b.rows(),
        b.cols(),
        kernel
    );
    let rows = map_rows(opts, a.rows(), |i| {
        let row = a.as_rows()[i].as_slice();
        let cells = columns.iter().map(|col| kernel.apply(row, col.as_slice())).collect();
        VectorBuffer::labelled(c"M", cells)
    });
    Ok(MatrixBuffer::from_row_buffers(c"M", b.cols(), rows))
}

/// `A·x`: the bilinear dot product of each row of `A` with `x`.
pub fn matrix_vector_multiply(opts: &EngineOptions, a: &MatrixBuffer, x: &VectorBuffer) -> Result<VectorBuffer> {
    matrix_vector_dims("matrix-vector multiply", a, x)?;
    let kernel = opts.dot_kernel;
    let cells = map_rows(opts, a.rows(), |i| kernel.apply(a.as_rows()[i].as_slice(), x.as_slice()));
    Ok(VectorBuffer::labelled(c"W", cells))
}

/// `A^p` by repeated squaring; `A^0` is the identity.
pub fn power(opts: &EngineOptions, a: &MatrixBuffer, p: u32) -> Result<MatrixBuffer> {
    require_square("matrix power", a)?;
    let n = a.rows();
    let mut result = MatrixBuffer::generate(c"P", n, n, |i, j| {
        if i == j { ComplexScalar::ONE } else { ComplexScalar::ZERO }
    });
    let mut base = a.clone();
    let mut exp = p;
    while exp > 0 {
        if exp & 1 == 1 {
            result = multiply(opts, &result, &base)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = multiply(opts, &base, &base)?;
        }
    }
    result.with_name("P")
}

/// Entrywise product of two equally shaped matrices.
pub fn hadamard_product(a: &MatrixBuffer, b: &MatrixBuffer) -> Result<MatrixBuffer> {
    same_shape("hadamard product", a, b)?;
    Ok(MatrixBuffer::generate(c"M", a.rows(), a.cols(), |i, j| a[(i, j)] * b[(i, j)]))
}

/// Kronecker product: `(r1·r2) x (c1·c2)` block matrix of `A[i][j]·B`.
pub fn kronecker_product(a: &MatrixBuffer, b: &MatrixBuffer) -> Result<MatrixBuffer> {
    let overflow = || AlgebraError::InvalidBuffer("kronecker product dimensions overflow".into());
    let rows = a.rows().checked_mul(b.rows()).ok_or_else(overflow)?;
    let cols = a.cols().checked_mul(b.cols()).ok_or_else(overflow)?;
    check_len("matrix rows", rows)?;
    check_len("matrix cols", cols)?;
    let (br, bc) = b.shape();
    Ok(MatrixBuffer::generate(c"K", rows, cols, |i, j| {
        a[(i / br, j / bc)] * b[(i % br, j % bc)]
    }))
}

/// Tensor (outer) product `M[i][j] = u[i]·v[j]`.
pub fn outer_product(u: &VectorBuffer, v: &VectorBuffer) -> MatrixBuffer {
    MatrixBuffer::generate(c"M", u.capacity(), v.capacity(), |i, j| u[i] * v[j])
}

pub fn transpose(a: &MatrixBuffer) -> MatrixBuffer {
    MatrixBuffer::generate(c"T", a.cols(), a.rows(), |i, j| a[(j, i)])
}

/// Transpose with every imaginary part negated.
pub fn conjugate_transpose(a: &MatrixBuffer) -> MatrixBuffer {
    MatrixBuffer::generate(c"T", a.cols(), a.rows(), |i, j| {
        let c = a[(j, i)];
        ComplexScalar::new(c.real, -c.imag)
    })
}

/// Sum of the diagonal of a square matrix.
pub fn trace(a: &MatrixBuffer) -> Result<ComplexScalar> {
    require_square("trace", a)?;
    Ok((0..a.rows()).fold(ComplexScalar::ZERO, |acc, i| acc + a[(i, i)]))
}

/// Determinant from faer's LU factorization. The empty matrix has determinant one.
pub fn determinant(a: &MatrixBuffer) -> Result<ComplexScalar> {
    require_square("determinant", a)?;
    if a.rows() == 0 {
        return Ok(ComplexScalar::ONE);
    }
    Ok(a.to_faer_complex().as_ref().determinant().into())
}

/// Inverse via faer's partially pivoted LU. A zero or non-finite determinant, or a
/// non-finite entry in the result, is reported as `Singular`.
pub fn inverse(a: &MatrixBuffer) -> Result<MatrixBuffer> {
    const OP: &str = "inverse";
    require_square(OP, a)?;
    if a.rows() == 0 {
        return Ok(MatrixBuffer::generate(c"I", 0, 0, |_, _| ComplexScalar::ZERO));
    }
    let m = a.to_faer_complex();
    let det = ComplexScalar::from(m.as_ref().determinant());
    if det.is_zero() || !det.abs().is_finite() {
        log::debug!("{OP}: determinant is {det}");
        return Err(AlgebraError::Singular { op: OP });
    }
    let inv = PartialPivLu::new(m.as_ref()).inverse();
    let result = MatrixBuffer::from_faer_complex("I", inv.as_ref())?;
    if result.iter_rows().flat_map(|r| r.iter()).any(|c| !c.real.is_finite() || !c.imag.is_finite()) {
        log::debug!("{OP}: factorization produced non-finite entries");
        return Err(AlgebraError::Singular { op: OP });
    }
    Ok(result)
}

/// Cofactor matrix: `C[i][j] = (-1)^(i+j) · det(minor(i, j))`.
pub fn cofactor(a: &MatrixBuffer) -> Result<MatrixBuffer> {
    require_square("cofactor", a)?;
    let n = a.rows();
    let mut cells = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let minor = MatrixBuffer::generate(c"S", n - 1, n - 1, |r, c| {
                a[(r + usize::from(r >= i), c + usize::from(c >= j))]
            });
            let det = determinant(&minor)?;
            cells.push(if (i + j) % 2 == 0 { det } else { -det });
        }
    }
    Ok(MatrixBuffer::generate(c"C", n, n, |i, j| cells[i * n + j]))
}

/// Classical adjugate: the transposed cofactor matrix, so that `A · adj(A) = det(A) · I`.
pub fn adjoint(a: &MatrixBuffer) -> Result<MatrixBuffer> {
    let c = cofactor(a)?;
    transpose(&c).with_name("A")
}

/// Rotate 90° counter-clockwise; an `r x c` matrix becomes `c x r`.
pub fn rotate_left(a: &MatrixBuffer) -> MatrixBuffer {
    let c = a.cols();
    MatrixBuffer::generate(c"R", a.cols(), a.rows(), |i, j| a[(j, c - 1 - i)])
}

/// Rotate 90° clockwise; an `r x c` matrix becomes `c x r`.
pub fn rotate_right(a: &MatrixBuffer) -> MatrixBuffer {
    let r = a.rows();
    MatrixBuffer::generate(c"R", a.cols(), a.rows(), |i, j| a[(r - 1 - j, i)])
}

/// Same shape and exactly equal entries.
pub fn equals(a: &MatrixBuffer, b: &MatrixBuffer) -> bool {
    a.shape() == b.shape()
        && a.iter_rows().zip(b.iter_rows()).all(|(u, v)| vector::ops::equals(u, v))
}

/// Same shape and every entry within `epsilon`.
pub fn equals_within(a: &MatrixBuffer, b: &MatrixBuffer, epsilon: f32) -> bool {
    a.shape() == b.shape()
        && a.iter_rows().zip(b.iter_rows()).all(|(u, v)| vector::ops::equals_within(u, v, epsilon))
}

pub fn norm(a: &MatrixBuffer, kind: MatrixNorm) -> f32 {
    match kind {
        MatrixNorm::L1 => (0..a.cols())
            .map(|j| a.iter_rows().map(|r| r[j].abs()).sum::<f32>())
            .fold(0.0, f32::max),
        MatrixNorm::LInf => a
            .iter_rows()
            .map(|r| vector::norm::norm(r, vector::NormKind::L1))
            .fold(0.0, f32::max),
        MatrixNorm::Frobenius => a
            .iter_rows()
            .flat_map(|r| r.iter())
            .map(|c| {
                let (re, im) = (f64::from(c.real), f64::from(c.imag));
                re * re + im * im
            })
            .sum::<f64>()
            .sqrt() as f32,
    }
}
