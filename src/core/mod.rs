//! Core types and traits: the complex scalar, the operation traits, the C-compatible
//! raw layout and interop wrappers.

pub mod ffi;
pub mod scalar;
pub mod traits;
pub mod wrappers;

pub use ffi::{MatrixView, RawMatrix, RawVector, VectorView};
pub use scalar::ComplexScalar;
