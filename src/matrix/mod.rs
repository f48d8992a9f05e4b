//! Matrix module: the row-major matrix buffer, its operations and classification.

pub mod buffer;
pub use buffer::MatrixBuffer;
pub mod ops;
pub use ops::MatrixNorm;
pub mod properties;
pub use properties::MatrixProperties;
