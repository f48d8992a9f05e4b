//! Tensor module: rank-3 complex tensors stored as a stack of equally shaped matrices.

pub mod buffer;
pub use buffer::TensorBuffer;
pub mod ops;
