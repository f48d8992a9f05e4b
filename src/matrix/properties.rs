//! Structural classification of a matrix.
//!
//! All checks are exact: an entry is zero only when both parts compare equal to `0.0`,
//! and stochastic rows must sum to exactly `1.0`.

use bitflags::bitflags;

use crate::core::ComplexScalar;
use crate::matrix::MatrixBuffer;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct MatrixProperties: u16 {
        const SQUARE            = 0b0000_0001;
        /// No entry has an imaginary part.
        const REAL              = 0b0000_0010;
        /// Real with whole-number entries.
        const INTEGRAL          = 0b0000_0100;
        /// Square with `A[i][j] == A[j][i]`.
        const SYMMETRIC         = 0b0000_1000;
        /// Square with every off-diagonal entry zero.
        const DIAGONAL          = 0b0001_0000;
        /// At least one row is entirely zero.
        const ZERO_ROW          = 0b0010_0000;
        /// Real, non-negative, every row sums to one.
        const STOCHASTIC        = 0b0100_0000;
        /// Stochastic, and every column also sums to one.
        const DOUBLY_STOCHASTIC = Self::STOCHASTIC.bits() | 0b1000_0000;
        /// Real, with every row a geometric progression `1, x, x², ...`.
        const VANDERMONDE       = 0b1_0000_0000;
    }
}

fn is_zero(c: ComplexScalar) -> bool {
    c.real == 0.0 && c.imag == 0.0
}

/// Row `1, x, x², ...` with powers built by repeated multiplication.
fn is_vandermonde_row(row: &[ComplexScalar]) -> bool {
    let Some(x) = row.get(1).map(|c| c.real) else {
        return row.first().is_none_or(|c| c.real == 1.0);
    };
    let mut power = 1.0_f32;
    row.iter().all(|c| {
        let ok = c.real == power;
        power *= x;
        ok
    })
}

impl MatrixBuffer {
    pub fn properties(&self) -> MatrixProperties {
        let (rows, cols) = self.shape();
        let mut props = MatrixProperties::empty();
        let entries = || self.iter_rows().flat_map(|r| r.iter().copied());

        if rows == cols {
            props |= MatrixProperties::SQUARE;
            let pairs = || (0..rows).flat_map(|i| (0..cols).map(move |j| (i, j)));
            if pairs().all(|(i, j)| self[(i, j)] == self[(j, i)]) {
                props |= MatrixProperties::SYMMETRIC;
            }
            if pairs().all(|(i, j)| i == j || is_zero(self[(i, j)])) {
                props |= MatrixProperties::DIAGONAL;
            }
        }

        if entries().all(ComplexScalar::is_real) {
            props |= MatrixProperties::REAL;
            if entries().all(ComplexScalar::is_integral) {
                props |= MatrixProperties::INTEGRAL;
            }
            let non_negative = entries().all(|c| c.real >= 0.0);
            let rows_sum_to_one = self
                .iter_rows()
                .all(|r| r.iter().map(|c| c.real).sum::<f32>() == 1.0);
            if rows > 0 && cols > 0 && self.iter_rows().all(|r| is_vandermonde_row(r.as_slice())) {
                props |= MatrixProperties::VANDERMONDE;
            }
            if rows > 0 && non_negative && rows_sum_to_one {
                props |= MatrixProperties::STOCHASTIC;
                let cols_sum_to_one = (0..cols)
                    .all(|j| self.iter_rows().map(|r| r[j].real).sum::<f32>() == 1.0);
                if cols_sum_to_one {
                    props |= MatrixProperties::DOUBLY_STOCHASTIC;
                }
            }
        }

        if self.iter_rows().any(|r| r.iter().all(|&c| is_zero(c))) {
            props |= MatrixProperties::ZERO_ROW;
        }
        props
    }
}
