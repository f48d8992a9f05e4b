//! Context module: the algebra engine that fronts every operation.
//!
//! Modules:
//! - [`engine`]: Contains the `AlgebraEngine` struct, configured once with `EngineOptions`.

pub mod engine;
pub use engine::AlgebraEngine;
