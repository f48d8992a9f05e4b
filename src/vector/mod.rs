//! Vector module: the owned vector buffer, its operations and norms.

pub mod buffer;
pub use buffer::{VectorBuffer, VectorProperties};
pub mod norm;
pub use norm::NormKind;
pub mod ops;
