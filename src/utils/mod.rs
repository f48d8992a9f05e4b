//! Shared validation and the plain-text interchange format.

pub mod text;
pub mod validation;
pub use text::{parse_matrix, parse_vector, write_matrix, write_vector};
