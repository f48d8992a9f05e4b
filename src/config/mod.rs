//! Configuration for the algebra engine.

pub mod options;
pub use options::EngineOptions;
