//! calgebra: complex vector & matrix algebra over fixed-layout buffers
//!
//! This crate provides single-precision complex vectors and matrices whose memory layout
//! can be shared with C, together with a stateless algebra engine: arithmetic, bilinear
//! dot products (reference and lane-unrolled kernels), cross products, projections,
//! norms, angles, matrix products and factorizations, and rank-3 tensors.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod kernels;
pub mod matrix;
pub mod tensor;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use crate::config::EngineOptions;
pub use crate::context::AlgebraEngine;
pub use crate::core::{ComplexScalar, MatrixView, RawMatrix, RawVector, VectorView};
pub use crate::error::{AlgebraError, Dims};
pub use crate::kernels::DotKernel;
pub use crate::matrix::{MatrixBuffer, MatrixNorm, MatrixProperties};
pub use crate::tensor::TensorBuffer;
pub use crate::vector::{NormKind, VectorBuffer, VectorProperties};
