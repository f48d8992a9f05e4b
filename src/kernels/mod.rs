//! Numeric kernels shared by vector and matrix operations.

pub mod dot;
pub use dot::{DotKernel, dot_reference, dot_unrolled};
