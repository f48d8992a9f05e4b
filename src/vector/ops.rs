//! Vector operations.
//!
//! Every function borrows its operands and returns a freshly allocated result; operands
//! are never mutated. Binary operations validate capacities before any arithmetic.
//!
//! The dot product is bilinear: `Σ u[i] * v[i]`, with neither operand conjugated.
//! Projections and angles are defined in terms of that exact product.

use crate::core::ComplexScalar;
use crate::error::{AlgebraError, Result};
use crate::kernels::DotKernel;
use crate::utils::validation::{nonzero_norm, require_capacity, same_capacity};
use crate::vector::norm::{NormKind, norm, norm_of_slice};
use crate::vector::VectorBuffer;

/// Elementwise `u + v`, or `u - v` when `negate_rhs` is set.
fn combine(op: &'static str, u: &VectorBuffer, v: &VectorBuffer, negate_rhs: bool) -> Result<VectorBuffer> {
    same_capacity(op, u, v)?;
    let items = u
        .iter()
        .zip(v.iter())
        .map(|(&a, &b)| if negate_rhs { a + (-b) } else { a + b })
        .collect();
    Ok(VectorBuffer::labelled(c"W", items))
}

pub fn add(u: &VectorBuffer, v: &VectorBuffer) -> Result<VectorBuffer> {
    combine("vector add", u, v, false)
}

pub fn subtract(u: &VectorBuffer, v: &VectorBuffer) -> Result<VectorBuffer> {
    combine("vector subtract", u, v, true)
}

/// Multiply every component by `s`.
pub fn scalar_multiply(u: &VectorBuffer, s: ComplexScalar) -> VectorBuffer {
    VectorBuffer::labelled(c"V", u.iter().map(|&a| a * s).collect())
}

/// Bilinear dot product with the given kernel.
pub fn dot_product(kernel: DotKernel, u: &VectorBuffer, v: &VectorBuffer) -> Result<ComplexScalar> {
    same_capacity("dot product", u, v)?;
    Ok(kernel.apply(u.as_slice(), v.as_slice()))
}

/// Sequential dot product.
pub fn dot_product_reference(u: &VectorBuffer, v: &VectorBuffer) -> Result<ComplexScalar> {
    dot_product(DotKernel::Reference, u, v)
}

/// Four-lane unrolled dot product.
pub fn dot_product_optimized(u: &VectorBuffer, v: &VectorBuffer) -> Result<ComplexScalar> {
    dot_product(DotKernel::Unrolled4, u, v)
}

/// 3-D cross product `(u1v2 - u2v1, u2v0 - u0v2, u0v1 - u1v0)`.
pub fn cross_product(u: &VectorBuffer, v: &VectorBuffer) -> Result<VectorBuffer> {
    require_capacity("cross product", u, 3)?;
    require_capacity("cross product", v, 3)?;
    let (u, v) = (u.as_slice(), v.as_slice());
    let items = vec![
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ];
    Ok(VectorBuffer::labelled(c"W", items))
}

fn divide_by_real(c: ComplexScalar, d: f32) -> ComplexScalar {
    ComplexScalar::new(c.real / d, c.imag / d)
}

/// `dot(u, v) / ‖v‖₂`
pub fn scalar_projection(kernel: DotKernel, u: &VectorBuffer, v: &VectorBuffer) -> Result<ComplexScalar> {
    let dot = dot_product(kernel, u, v)?;
    let len = nonzero_norm("scalar projection", norm(v, NormKind::L2))?;
    Ok(divide_by_real(dot, len))
}

/// `scalar_projection(u, v) * (v / ‖v‖₂)`
pub fn vector_projection(kernel: DotKernel, u: &VectorBuffer, v: &VectorBuffer) -> Result<VectorBuffer> {
    let factor = scalar_projection(kernel, u, v)?;
    let len = norm(v, NormKind::L2);
    let items = v.iter().map(|&b| factor * divide_by_real(b, len)).collect();
    Ok(VectorBuffer::labelled(c"W", items))
}

/// Copy of `u` divided by its largest real or imaginary magnitude, so every part lies in
/// `[-1, 1]` and at least one has magnitude one.
fn unit_scaled(op: &'static str, u: &VectorBuffer) -> Result<Vec<ComplexScalar>> {
    if u.iter().any(|c| !c.real.is_finite() || !c.imag.is_finite()) {
        log::debug!("{op}: operand has a non-finite component");
        return Err(AlgebraError::NonFinite { op });
    }
    let peak = u.iter().map(|c| c.real.abs().max(c.imag.abs())).fold(0.0f32, f32::max);
    let peak = nonzero_norm(op, peak)?;
    Ok(u.iter().map(|&c| divide_by_real(c, peak)).collect())
}

/// `acos(Re(dot(u, v)) / (‖u‖₂ ‖v‖₂))` in radians, always within `[0, π]`.
///
/// The angle is invariant under positive scaling, so both operands are first scaled to
/// unit peak magnitude; the products then stay inside the f32 range for any finite input.
pub fn angle_between(kernel: DotKernel, u: &VectorBuffer, v: &VectorBuffer) -> Result<f32> {
    const OP: &str = "angle between";
    same_capacity(OP, u, v)?;
    let (su, sv) = (unit_scaled(OP, u)?, unit_scaled(OP, v)?);
    let dot = kernel.apply(&su, &sv);
    let (nu, nv) = (norm_of_slice(&su, NormKind::L2), norm_of_slice(&sv, NormKind::L2));
    let cos = dot.real / (nu * nv);
    if !cos.is_finite() {
        log::debug!("{OP}: cosine evaluated to {cos}");
        return Err(AlgebraError::NonFinite { op: OP });
    }
    // rounding can push the cosine slightly past ±1
    Ok(cos.clamp(-1.0, 1.0).acos())
}

pub fn angle_between_degrees(kernel: DotKernel, u: &VectorBuffer, v: &VectorBuffer) -> Result<f32> {
    angle_between(kernel, u, v).map(f32::to_degrees)
}

/// Bit-exact equality: same capacity and every component pair identical bit for bit.
/// Reflexive even for NaN components; `0.0` and `-0.0` differ.
pub fn equals(u: &VectorBuffer, v: &VectorBuffer) -> bool {
    u.capacity() == v.capacity() && u.iter().zip(v.iter()).all(|(a, b)| a.equals(*b))
}

/// Same capacity and every component within `epsilon` (absolute, per real/imag part).
pub fn equals_within(u: &VectorBuffer, v: &VectorBuffer, epsilon: f32) -> bool {
    use approx::AbsDiffEq;
    u.capacity() == v.capacity() && u.iter().zip(v.iter()).all(|(a, b)| a.abs_diff_eq(b, epsilon))
}

/// True when the dot product is exactly zero.
pub fn is_orthogonal(kernel: DotKernel, u: &VectorBuffer, v: &VectorBuffer) -> Result<bool> {
    Ok(dot_product(kernel, u, v)? == ComplexScalar::ZERO)
}

/// True when `u == -v` under IEEE comparison, so a zero matches either signed zero.
/// Vectors of different capacity are never opposite.
pub fn is_opposite(u: &VectorBuffer, v: &VectorBuffer) -> bool {
    u.capacity() == v.capacity() && u.iter().zip(v.iter()).all(|(&a, &b)| a == -b)
}

/// True when one vector is a complex multiple of the other, checked exactly as
/// `u[k]·v[i] == u[i]·v[k]` for every `i`, where `k` is the first nonzero component of
/// `u`. A zero vector is collinear with every vector of its capacity.
pub fn is_collinear(u: &VectorBuffer, v: &VectorBuffer) -> Result<bool> {
    same_capacity("collinearity", u, v)?;
    let Some(k) = u.iter().position(|c| *c != ComplexScalar::ZERO) else {
        return Ok(true);
    };
    let (uk, vk) = (u[k], v[k]);
    Ok(u.iter().zip(v.iter()).all(|(&a, &b)| uk * b == a * vk))
}
