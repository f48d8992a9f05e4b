//! Vector norms over complex magnitudes.

use crate::core::ComplexScalar;
use crate::vector::VectorBuffer;

/// Supported vector norms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormKind {
    /// `Σ |u[i]|`
    L1,
    /// `sqrt(Σ |u[i]|²)`
    #[default]
    L2,
    /// `max |u[i]|`
    LInf,
}

/// Compute `‖u‖` for the selected norm. An empty vector has norm zero.
pub fn norm(u: &VectorBuffer, kind: NormKind) -> f32 {
    norm_of_slice(u.as_slice(), kind)
}

pub(crate) fn norm_of_slice(items: &[ComplexScalar], kind: NormKind) -> f32 {
    match kind {
        NormKind::L1 => items.iter().map(|c| c.abs()).sum(),
        // squares of f32 values neither overflow nor underflow in f64
        NormKind::L2 => items
            .iter()
            .map(|c| {
                let (re, im) = (f64::from(c.real), f64::from(c.imag));
                re * re + im * im
            })
            .sum::<f64>()
            .sqrt() as f32,
        NormKind::LInf => items.iter().map(|c| c.abs()).fold(0.0, f32::max),
    }
}
