//! Owned, fixed-capacity complex vector.
//!
//! A `VectorBuffer` owns a contiguous run of `ComplexScalar` and a NUL-terminated
//! diagnostic name. Capacity is fixed at construction and never changes; operations in
//! `vector::ops` always allocate a new buffer for their result.

use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::fmt;
use std::ops::Index;

use bitflags::bitflags;

use crate::core::ComplexScalar;
use crate::error::{AlgebraError, Result};
use crate::utils::validation::{check_len, check_name};

bitflags! {
    /// Coarse classification of a vector's contents.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct VectorProperties: u8 {
        /// Every imaginary part is zero.
        const REAL     = 0b001;
        /// Real, and every real part is a whole number.
        const INTEGRAL = 0b010;
        /// Every component is zero.
        const ZERO     = 0b100;
    }
}

#[derive(Clone, Debug)]
pub struct VectorBuffer {
    items: Vec<ComplexScalar>,
    name: CString,
}

impl VectorBuffer {
    /// Build a vector whose capacity is the number of `items`.
    pub fn new<N: Into<Vec<u8>>>(name: N, items: Vec<ComplexScalar>) -> Result<Self> {
        check_len("vector", items.len())?;
        Ok(Self { items, name: check_name(name)? })
    }

    /// Build a vector with an explicit capacity; `items` must yield exactly that many values.
    pub fn with_capacity_from<N, I>(name: N, capacity: usize, items: I) -> Result<Self>
    where
        N: Into<Vec<u8>>,
        I: IntoIterator<Item = ComplexScalar>,
    {
        check_len("vector", capacity)?;
        let mut buf = Vec::with_capacity(capacity);
        for item in items {
            if buf.len() == capacity {
                return Err(AlgebraError::InvalidBuffer(format!(
                    "more than {capacity} items supplied"
                )));
            }
            buf.push(item);
        }
        if buf.len() != capacity {
            return Err(AlgebraError::InvalidBuffer(format!(
                "expected {capacity} items, got {}",
                buf.len()
            )));
        }
        Ok(Self { items: buf, name: check_name(name)? })
    }

    pub fn zeros<N: Into<Vec<u8>>>(name: N, capacity: usize) -> Result<Self> {
        check_len("vector", capacity)?;
        Ok(Self { items: vec![ComplexScalar::ZERO; capacity], name: check_name(name)? })
    }

    /// Promote real values to complex ones with zero imaginary part.
    pub fn from_reals<N: Into<Vec<u8>>>(name: N, reals: &[f32]) -> Result<Self> {
        Self::new(name, reals.iter().copied().map(ComplexScalar::from_real).collect())
    }

    /// Internal constructor for results whose length is already known to be valid.
    pub(crate) fn from_parts(name: CString, items: Vec<ComplexScalar>) -> Self {
        debug_assert!(items.len() <= crate::utils::validation::MAX_DIM);
        Self { items, name }
    }

    pub(crate) fn labelled(name: &CStr, items: Vec<ComplexScalar>) -> Self {
        Self::from_parts(name.to_owned(), items)
    }

    /// Replace the diagnostic name.
    pub fn with_name<N: Into<Vec<u8>>>(mut self, name: N) -> Result<Self> {
        self.name = check_name(name)?;
        Ok(self)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    pub fn name_c(&self) -> &CStr {
        &self.name
    }

    #[inline]
    pub fn as_slice(&self) -> &[ComplexScalar] {
        &self.items
    }

    pub fn get(&self, i: usize) -> Option<ComplexScalar> {
        self.items.get(i).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComplexScalar> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<ComplexScalar> {
        self.items
    }

    pub fn properties(&self) -> VectorProperties {
        let mut props = VectorProperties::empty();
        if self.items.iter().all(|c| c.is_real()) {
            props |= VectorProperties::REAL;
            if self.items.iter().all(|c| c.is_integral()) {
                props |= VectorProperties::INTEGRAL;
            }
        }
        if self.items.iter().all(|c| c.real == 0.0 && c.imag == 0.0) {
            props |= VectorProperties::ZERO;
        }
        props
    }
}

/// Equal capacity and exactly equal components; the name is not compared.
impl PartialEq for VectorBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Index<usize> for VectorBuffer {
    type Output = ComplexScalar;
    fn index(&self, i: usize) -> &ComplexScalar {
        &self.items[i]
    }
}

impl<'a> IntoIterator for &'a VectorBuffer {
    type Item = &'a ComplexScalar;
    type IntoIter = std::slice::Iter<'a, ComplexScalar>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl AsRef<[ComplexScalar]> for VectorBuffer {
    fn as_ref(&self) -> &[ComplexScalar] {
        &self.items
    }
}

/// Writes one component per line, choosing integer, fixed-point or complex form from
/// the vector's contents.
pub(crate) fn write_component(
    f: &mut fmt::Formatter<'_>,
    c: ComplexScalar,
    props: VectorProperties,
) -> fmt::Result {
    if props.contains(VectorProperties::INTEGRAL) {
        write!(f, "{}", c.real as i64)
    } else if props.contains(VectorProperties::REAL) {
        write!(f, "{:.3}", c.real)
    } else {
        let sign = if c.imag < 0.0 { '-' } else { '+' };
        write!(f, "{:.3} {} {:.3}i", c.real, sign, c.imag.abs())
    }
}

impl fmt::Display for VectorBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let props = self.properties();
        writeln!(f, "{} = (", self.name())?;
        for &c in &self.items {
            write!(f, "     ")?;
            write_component(f, c, props)?;
            writeln!(f)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A declared capacity that disagrees with the item count is rejected.
    #[test]
    fn explicit_capacity_must_match_items() {
        let items = vec![ComplexScalar::ONE; 3];
        assert!(VectorBuffer::with_capacity_from("u", 3, items.clone()).is_ok());
        assert!(matches!(
            VectorBuffer::with_capacity_from("u", 4, items.clone()),
            Err(AlgebraError::InvalidBuffer(_))
        ));
        assert!(matches!(
            VectorBuffer::with_capacity_from("u", 2, items),
            Err(AlgebraError::InvalidBuffer(_))
        ));
    }

    /// `zeros` allocates exactly the requested capacity.
    #[test]
    fn zeros_has_requested_capacity() {
        let z = VectorBuffer::zeros("z", 5).unwrap();
        assert_eq!(z.capacity(), 5);
        assert!(z.properties().contains(VectorProperties::ZERO | VectorProperties::INTEGRAL));
    }

    /// `==` compares components, never names.
    #[test]
    fn equality_ignores_name() {
        let a = VectorBuffer::from_reals("a", &[1.0, 2.0]).unwrap();
        let b = VectorBuffer::from_reals("b", &[1.0, 2.0]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.name(), "a");
    }

    /// Classification flags follow the component values.
    #[test]
    fn properties_classify_contents() {
        let ints = VectorBuffer::from_reals("i", &[1.0, -2.0]).unwrap();
        let reals = VectorBuffer::from_reals("r", &[1.5, -2.0]).unwrap();
        let cplx = VectorBuffer::new("c", vec![ComplexScalar::new(1.0, 1.0)]).unwrap();
        assert_eq!(ints.properties(), VectorProperties::REAL | VectorProperties::INTEGRAL);
        assert_eq!(reals.properties(), VectorProperties::REAL);
        assert!(cplx.properties().is_empty());
    }

    /// Display prints the name, then one formatted component per line.
    #[test]
    fn display_uses_print_style() {
        let v = VectorBuffer::new(
            "V",
            vec![ComplexScalar::new(1.0, -0.5), ComplexScalar::new(2.25, 1.0)],
        )
        .unwrap();
        assert_eq!(v.to_string(), "V = (\n     1.000 - 0.500i\n     2.250 + 1.000i\n)");
        let ints = VectorBuffer::from_reals("N", &[3.0, -1.0]).unwrap();
        assert_eq!(ints.to_string(), "N = (\n     3\n     -1\n)");
    }
}
