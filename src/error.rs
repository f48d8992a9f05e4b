use std::fmt;
use thiserror::Error;

// Unified error type for calgebra

/// Operand dimensions as reported in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dims {
    Vector(usize),
    Matrix(usize, usize),
    /// `rows x cols x depth`.
    Tensor(usize, usize, usize),
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dims::Vector(n) => write!(f, "vector[{n}]"),
            Dims::Matrix(r, c) => write!(f, "matrix[{r}x{c}]"),
            Dims::Tensor(r, c, d) => write!(f, "tensor[{r}x{c}x{d}]"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgebraError {
    #[error("dimension mismatch in {op}: {lhs} vs {rhs}")]
    DimensionMismatch { op: &'static str, lhs: Dims, rhs: Dims },
    #[error("invalid dimension for {op}: expected {expected}, found {found}")]
    InvalidDimension { op: &'static str, expected: usize, found: usize },
    #[error("parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },
    #[error("invalid buffer: {0}")]
    InvalidBuffer(String),
    #[error("degenerate operand in {op}: zero norm")]
    DegenerateOperand { op: &'static str },
    #[error("non-finite intermediate result in {op}")]
    NonFinite { op: &'static str },
    #[error("singular matrix in {op}")]
    Singular { op: &'static str },
    #[error("null pointer in raw {0}")]
    NullPointer(&'static str),
}

pub type Result<T> = std::result::Result<T, AlgebraError>;
