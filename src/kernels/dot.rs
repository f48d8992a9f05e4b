//! Bilinear dot-product kernels over complex slices.
//!
//! Both kernels compute `Σ u[i] * v[i]` with no conjugation. The reference kernel is a
//! single sequential accumulation; the unrolled kernel keeps `LANES` independent running
//! sums (element `i` feeds lane `i mod LANES`) and combines them at the end, which is the
//! shape a vectorizing compiler turns into SIMD adds. Results agree to rounding, not bits.
//!
//! The slice kernels do not validate lengths; callers go through `vector::ops`, which does.

use crate::core::ComplexScalar;

/// Selects the dot-product kernel used by dot-based operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DotKernel {
    /// Sequential accumulation.
    Reference,
    /// Four independent accumulators.
    #[default]
    Unrolled4,
    /// Eight independent accumulators.
    Unrolled8,
}

impl DotKernel {
    /// Number of running accumulators.
    pub fn lanes(self) -> usize {
        match self {
            DotKernel::Reference => 1,
            DotKernel::Unrolled4 => 4,
            DotKernel::Unrolled8 => 8,
        }
    }

    /// Run the kernel on two equal-length slices.
    #[inline]
    pub fn apply(self, u: &[ComplexScalar], v: &[ComplexScalar]) -> ComplexScalar {
        match self {
            DotKernel::Reference => dot_reference(u, v),
            DotKernel::Unrolled4 => dot_unrolled::<4>(u, v),
            DotKernel::Unrolled8 => dot_unrolled::<8>(u, v),
        }
    }
}

/// Sequential bilinear dot product.
pub fn dot_reference(u: &[ComplexScalar], v: &[ComplexScalar]) -> ComplexScalar {
    debug_assert_eq!(u.len(), v.len(), "dot kernel called with unequal lengths");
    let mut re = 0.0f32;
    let mut im = 0.0f32;
    for (a, b) in u.iter().zip(v) {
        re += a.real * b.real - a.imag * b.imag;
        im += a.real * b.imag + a.imag * b.real;
    }
    ComplexScalar::new(re, im)
}

/// Lane-unrolled bilinear dot product with `LANES` running accumulators.
pub fn dot_unrolled<const LANES: usize>(u: &[ComplexScalar], v: &[ComplexScalar]) -> ComplexScalar {
    const { assert!(LANES > 0, "at least one lane is required") };
    debug_assert_eq!(u.len(), v.len(), "dot kernel called with unequal lengths");

    let mut re = [0.0f32; LANES];
    let mut im = [0.0f32; LANES];

    let u_chunks = u.chunks_exact(LANES);
    let v_chunks = v.chunks_exact(LANES);
    let u_tail = u_chunks.remainder();
    let v_tail = v_chunks.remainder();

    for (cu, cv) in u_chunks.zip(v_chunks) {
        for lane in 0..LANES {
            let (a, b) = (cu[lane], cv[lane]);
            re[lane] += a.real * b.real - a.imag * b.imag;
            im[lane] += a.real * b.imag + a.imag * b.real;
        }
    }

    // the tail starts at a multiple of LANES, so its offset is the lane index
    for (lane, (a, b)) in u_tail.iter().zip(v_tail).enumerate() {
        re[lane] += a.real * b.real - a.imag * b.imag;
        im[lane] += a.real * b.imag + a.imag * b.real;
    }

    ComplexScalar::new(re.iter().sum::<f32>(), im.iter().sum::<f32>())
}
