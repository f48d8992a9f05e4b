//! Algebra engine: one entry point for every vector and matrix operation.
//!
//! `AlgebraEngine` holds nothing but its `EngineOptions`, so it is `Copy`, `Send` and
//! `Sync`. It is built once (typically at startup) and passed around by value or
//! reference. Every method borrows its operands and returns a new buffer or scalar.
//! Operations on shared read-only operands can therefore run concurrently without locks.
//!
//! # Usage
//!
//! 1. Construct an engine with `AlgebraEngine::new()` or `AlgebraEngine::with_options`.
//! 2. Optionally pick a dot kernel with `with_kernel`.
//! 3. Call the vector (`vector_*`, `dot_product`, ...), matrix (`matrix_*`) and tensor
//!    (`tensor_*`) methods.
//!
//! # Example
//! ```rust
//! use calgebra::{AlgebraEngine, VectorBuffer};
//! let engine = AlgebraEngine::new();
//! let u = VectorBuffer::from_reals("u", &[1.0, 2.0]).unwrap();
//! let v = VectorBuffer::from_reals("v", &[3.0, 4.0]).unwrap();
//! assert_eq!(engine.dot_product(&u, &v).unwrap().real, 11.0);
//! ```

use crate::config::EngineOptions;
use crate::core::ComplexScalar;
use crate::error::Result;
use crate::kernels::DotKernel;
use crate::matrix::{self, MatrixBuffer, MatrixNorm};
use crate::tensor::{self, TensorBuffer};
use crate::vector::{self, NormKind, VectorBuffer};

/// Stateless operation set over vector and matrix buffers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlgebraEngine {
    opts: EngineOptions,
}

impl AlgebraEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: EngineOptions) -> Self {
        Self { opts }
    }

    /// Select the kernel used by dot-based operations.
    pub fn with_kernel(mut self, kernel: DotKernel) -> Self {
        log::trace!("engine dot kernel set to {kernel:?}");
        self.opts.dot_kernel = kernel;
        self
    }

    pub fn options(&self) -> &EngineOptions {
        &self.opts
    }

    pub fn kernel(&self) -> DotKernel {
        self.opts.dot_kernel
    }

    // ---- vectors ----

    pub fn vector_add(&self, u: &VectorBuffer, v: &VectorBuffer) -> Result<VectorBuffer> {
        vector::ops::add(u, v)
    }

    pub fn vector_subtract(&self, u: &VectorBuffer, v: &VectorBuffer) -> Result<VectorBuffer> {
        vector::ops::subtract(u, v)
    }

    pub fn vector_scalar_multiply(&self, u: &VectorBuffer, s: ComplexScalar) -> VectorBuffer {
        vector::ops::scalar_multiply(u, s)
    }

    /// Bilinear dot product with the configured kernel.
    pub fn dot_product(&self, u: &VectorBuffer, v: &VectorBuffer) -> Result<ComplexScalar> {
        vector::ops::dot_product(self.opts.dot_kernel, u, v)
    }

    /// Bilinear dot product with the sequential reference kernel.
    pub fn dot_product_reference(&self, u: &VectorBuffer, v: &VectorBuffer) -> Result<ComplexScalar> {
        vector::ops::dot_product_reference(u, v)
    }

    /// Bilinear dot product with the lane-unrolled kernel; uses the configured lane count
    /// when an unrolled kernel is configured, four lanes otherwise.
    pub fn dot_product_optimized(&self, u: &VectorBuffer, v: &VectorBuffer) -> Result<ComplexScalar> {
        match self.opts.dot_kernel {
            DotKernel::Reference => vector::ops::dot_product_optimized(u, v),
            unrolled => vector::ops::dot_product(unrolled, u, v),
        }
    }

    pub fn cross_product(&self, u: &VectorBuffer, v: &VectorBuffer) -> Result<VectorBuffer> {
        vector::ops::cross_product(u, v)
    }

    pub fn scalar_projection(&self, u: &VectorBuffer, v: &VectorBuffer) -> Result<ComplexScalar> {
        vector::ops::scalar_projection(self.opts.dot_kernel, u, v)
    }

    pub fn vector_projection(&self, u: &VectorBuffer, v: &VectorBuffer) -> Result<VectorBuffer> {
        vector::ops::vector_projection(self.opts.dot_kernel, u, v)
    }

    /// Angle in radians, within `[0, π]`.
    pub fn angle_between(&self, u: &VectorBuffer, v: &VectorBuffer) -> Result<f32> {
        vector::ops::angle_between(self.opts.dot_kernel, u, v)
    }

    pub fn angle_between_degrees(&self, u: &VectorBuffer, v: &VectorBuffer) -> Result<f32> {
        vector::ops::angle_between_degrees(self.opts.dot_kernel, u, v)
    }

    pub fn norm(&self, u: &VectorBuffer, kind: NormKind) -> f32 {
        vector::norm::norm(u, kind)
    }

    pub fn vector_equals(&self, u: &VectorBuffer, v: &VectorBuffer) -> bool {
        vector::ops::equals(u, v)
    }

    pub fn vector_equals_within(&self, u: &VectorBuffer, v: &VectorBuffer, epsilon: f32) -> bool {
        vector::ops::equals_within(u, v, epsilon)
    }

    pub fn is_orthogonal(&self, u: &VectorBuffer, v: &VectorBuffer) -> Result<bool> {
        vector::ops::is_orthogonal(self.opts.dot_kernel, u, v)
    }

    pub fn is_opposite(&self, u: &VectorBuffer, v: &VectorBuffer) -> bool {
        vector::ops::is_opposite(u, v)
    }

    pub fn is_collinear(&self, u: &VectorBuffer, v: &VectorBuffer) -> Result<bool> {
        vector::ops::is_collinear(u, v)
    }

    // ---- matrices ----

    pub fn matrix_add(&self, a: &MatrixBuffer, b: &MatrixBuffer) -> Result<MatrixBuffer> {
        matrix::ops::add(&self.opts, a, b)
    }

    pub fn matrix_subtract(&self, a: &MatrixBuffer, b: &MatrixBuffer) -> Result<MatrixBuffer> {
        matrix::ops::subtract(&self.opts, a, b)
    }

    pub fn matrix_scalar_multiply(&self, a: &MatrixBuffer, s: ComplexScalar) -> MatrixBuffer {
        matrix::ops::scalar_multiply(&self.opts, a, s)
    }

    pub fn matrix_multiply(&self, a: &MatrixBuffer, b: &MatrixBuffer) -> Result<MatrixBuffer> {
        matrix::ops::multiply(&self.opts, a, b)
    }

    pub fn matrix_vector_multiply(&self, a: &MatrixBuffer, x: &VectorBuffer) -> Result<VectorBuffer> {
        matrix::ops::matrix_vector_multiply(&self.opts, a, x)
    }

    pub fn matrix_power(&self, a: &MatrixBuffer, p: u32) -> Result<MatrixBuffer> {
        matrix::ops::power(&self.opts, a, p)
    }

    pub fn hadamard_product(&self, a: &MatrixBuffer, b: &MatrixBuffer) -> Result<MatrixBuffer> {
        matrix::ops::hadamard_product(a, b)
    }

    pub fn kronecker_product(&self, a: &MatrixBuffer, b: &MatrixBuffer) -> Result<MatrixBuffer> {
        matrix::ops::kronecker_product(a, b)
    }

    pub fn outer_product(&self, u: &VectorBuffer, v: &VectorBuffer) -> MatrixBuffer {
        matrix::ops::outer_product(u, v)
    }

    pub fn transpose(&self, a: &MatrixBuffer) -> MatrixBuffer {
        matrix::ops::transpose(a)
    }

    pub fn conjugate_transpose(&self, a: &MatrixBuffer) -> MatrixBuffer {
        matrix::ops::conjugate_transpose(a)
    }

    pub fn trace(&self, a: &MatrixBuffer) -> Result<ComplexScalar> {
        matrix::ops::trace(a)
    }

    pub fn determinant(&self, a: &MatrixBuffer) -> Result<ComplexScalar> {
        matrix::ops::determinant(a)
    }

    /// Inverse through an LU factorization; `Singular` when none exists.
    pub fn inverse(&self, a: &MatrixBuffer) -> Result<MatrixBuffer> {
        matrix::ops::inverse(a)
    }

    pub fn cofactor(&self, a: &MatrixBuffer) -> Result<MatrixBuffer> {
        matrix::ops::cofactor(a)
    }

    pub fn adjoint(&self, a: &MatrixBuffer) -> Result<MatrixBuffer> {
        matrix::ops::adjoint(a)
    }

    pub fn rotate_left(&self, a: &MatrixBuffer) -> MatrixBuffer {
        matrix::ops::rotate_left(a)
    }

    pub fn rotate_right(&self, a: &MatrixBuffer) -> MatrixBuffer {
        matrix::ops::rotate_right(a)
    }

    pub fn matrix_norm(&self, a: &MatrixBuffer, kind: MatrixNorm) -> f32 {
        matrix::ops::norm(a, kind)
    }

    pub fn matrix_equals(&self, a: &MatrixBuffer, b: &MatrixBuffer) -> bool {
        matrix::ops::equals(a, b)
    }

    pub fn matrix_equals_within(&self, a: &MatrixBuffer, b: &MatrixBuffer, epsilon: f32) -> bool {
        matrix::ops::equals_within(a, b, epsilon)
    }

    // ---- tensors ----

    pub fn tensor_add(&self, a: &TensorBuffer, b: &TensorBuffer) -> Result<TensorBuffer> {
        tensor::ops::add(&self.opts, a, b)
    }

    pub fn tensor_subtract(&self, a: &TensorBuffer, b: &TensorBuffer) -> Result<TensorBuffer> {
        tensor::ops::subtract(&self.opts, a, b)
    }

    pub fn tensor_scalar_multiply(&self, a: &TensorBuffer, s: ComplexScalar) -> TensorBuffer {
        tensor::ops::scalar_multiply(&self.opts, a, s)
    }

    pub fn tensor_hadamard_product(&self, a: &TensorBuffer, b: &TensorBuffer) -> Result<TensorBuffer> {
        tensor::ops::hadamard_product(a, b)
    }

    /// Per-slice matrix product with the configured kernel.
    pub fn tensor_contract(&self, a: &TensorBuffer, b: &TensorBuffer) -> Result<TensorBuffer> {
        tensor::ops::contract(&self.opts, a, b)
    }

    pub fn cp_compose(&self, a: &MatrixBuffer, b: &MatrixBuffer, c: &MatrixBuffer) -> Result<TensorBuffer> {
        tensor::ops::cp_compose(a, b, c)
    }

    pub fn tensor_equals(&self, a: &TensorBuffer, b: &TensorBuffer) -> bool {
        tensor::ops::equals(a, b)
    }

    pub fn tensor_equals_within(&self, a: &TensorBuffer, b: &TensorBuffer, epsilon: f32) -> bool {
        tensor::ops::equals_within(a, b, epsilon)
    }
}
