//! Plain-text interchange format for fixtures.
//!
//! A vector is one real decimal per line; a matrix is one row per line with
//! whitespace-separated reals. Values are promoted to complex numbers with zero
//! imaginary part. Blank lines are ignored. Line numbers in errors are 1-based.
//!
//! Only real parts are written back out, so the format is lossless for real data only.

use std::fmt::Write as _;

use crate::core::ComplexScalar;
use crate::error::{AlgebraError, Result};
use crate::matrix::MatrixBuffer;
use crate::vector::VectorBuffer;

fn parse_real(line: usize, token: &str) -> Result<f32> {
    token.parse::<f32>().map_err(|e| AlgebraError::ParseError {
        line,
        message: format!("invalid number {token:?}: {e}"),
    })
}

fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
}

pub fn parse_vector<N: Into<Vec<u8>>>(name: N, text: &str) -> Result<VectorBuffer> {
    let items = content_lines(text)
        .map(|(line, l)| parse_real(line, l).map(ComplexScalar::from_real))
        .collect::<Result<Vec<_>>>()?;
    VectorBuffer::new(name, items)
}

pub fn parse_matrix<N: Into<Vec<u8>>>(name: N, text: &str) -> Result<MatrixBuffer> {
    let mut rows: Vec<Vec<ComplexScalar>> = Vec::new();
    for (line, l) in content_lines(text) {
        let row = l
            .split_whitespace()
            .map(|t| parse_real(line, t).map(ComplexScalar::from_real))
            .collect::<Result<Vec<_>>>()?;
        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(AlgebraError::ParseError {
                    line,
                    message: format!("expected {} values, found {}", first.len(), row.len()),
                });
            }
        }
        rows.push(row);
    }
    MatrixBuffer::from_rows(name, rows)
}

pub fn write_vector(v: &VectorBuffer) -> String {
    let mut out = String::new();
    for c in v {
        let _ = writeln!(out, "{}", c.real);
    }
    out
}

pub fn write_matrix(m: &MatrixBuffer) -> String {
    let mut out = String::new();
    for row in m.iter_rows() {
        let line: Vec<String> = row.iter().map(|c| c.real.to_string()).collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }
    out
}
