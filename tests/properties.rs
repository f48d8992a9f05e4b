//! Algebraic laws checked over seeded random vectors and matrices.
//!
//! Integer-valued data keeps every f32 operation exact, so those laws are asserted with
//! `==`; laws over arbitrary reals use `approx` tolerances.

use approx::assert_relative_eq;
use calgebra::{AlgebraEngine, ComplexScalar, DotKernel, MatrixBuffer, NormKind, VectorBuffer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TRIALS: usize = 64;

fn integer_vector(rng: &mut StdRng, n: usize) -> VectorBuffer {
    let items = (0..n)
        .map(|_| ComplexScalar::new(rng.gen_range(-20..=20) as f32, rng.gen_range(-20..=20) as f32))
        .collect();
    VectorBuffer::new("r", items).unwrap()
}

fn random_vector(rng: &mut StdRng, n: usize) -> VectorBuffer {
    let items = (0..n)
        .map(|_| ComplexScalar::new(rng.r#gen::<f32>() * 2.0 - 1.0, rng.r#gen::<f32>() * 2.0 - 1.0))
        .collect();
    VectorBuffer::new("r", items).unwrap()
}

/// `u + v == v + u` over random reals.
#[test]
fn addition_commutes() {
    let mut rng = StdRng::seed_from_u64(1);
    let engine = AlgebraEngine::new();
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..32);
        let (u, v) = (random_vector(&mut rng, n), random_vector(&mut rng, n));
        assert!(engine.vector_equals(&engine.vector_add(&u, &v).unwrap(), &engine.vector_add(&v, &u).unwrap()));
    }
}

/// `u - u` is exactly the zero vector.
#[test]
fn self_subtraction_is_zero() {
    let mut rng = StdRng::seed_from_u64(2);
    let engine = AlgebraEngine::new();
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..32);
        let u = random_vector(&mut rng, n);
        let d = engine.vector_subtract(&u, &u).unwrap();
        assert!(engine.vector_equals(&d, &VectorBuffer::zeros("z", n).unwrap()));
    }
}

/// Bilinearity holds exactly on integer-valued data.
#[test]
fn dot_is_bilinear_on_integers() {
    let mut rng = StdRng::seed_from_u64(3);
    for kernel in [DotKernel::Reference, DotKernel::Unrolled4, DotKernel::Unrolled8] {
        let engine = AlgebraEngine::new().with_kernel(kernel);
        for _ in 0..TRIALS {
            let n = rng.gen_range(0..24);
            let (u, v) = (integer_vector(&mut rng, n), integer_vector(&mut rng, n));
            let s = ComplexScalar::new(rng.gen_range(-5..=5) as f32, rng.gen_range(-5..=5) as f32);
            let lhs = engine.dot_product(&engine.vector_scalar_multiply(&u, s), &v).unwrap();
            let rhs = s * engine.dot_product(&u, &v).unwrap();
            assert_eq!(lhs, rhs, "{kernel:?}");
        }
    }
}

/// Bilinearity holds within tolerance on arbitrary reals.
#[test]
fn dot_is_bilinear_on_reals() {
    let mut rng = StdRng::seed_from_u64(4);
    let engine = AlgebraEngine::new();
    for _ in 0..TRIALS {
        let n = rng.gen_range(1..24);
        let (u, v) = (random_vector(&mut rng, n), random_vector(&mut rng, n));
        let s = ComplexScalar::new(rng.r#gen::<f32>() - 0.5, rng.r#gen::<f32>() - 0.5);
        let lhs = engine.dot_product(&engine.vector_scalar_multiply(&u, s), &v).unwrap();
        let rhs = s * engine.dot_product(&u, &v).unwrap();
        assert_relative_eq!(lhs, rhs, epsilon = 1e-4, max_relative = 1e-4);
    }
}

/// All dot kernels agree on random lengths.
#[test]
fn kernels_agree() {
    let mut rng = StdRng::seed_from_u64(5);
    let engine = AlgebraEngine::new();
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..100);
        let (u, v) = (random_vector(&mut rng, n), random_vector(&mut rng, n));
        let r = engine.dot_product_reference(&u, &v).unwrap();
        let o = engine.dot_product_optimized(&u, &v).unwrap();
        assert_relative_eq!(r, o, epsilon = 1e-4, max_relative = 1e-4);
    }
}

/// `u × v == -(v × u)` on integer data.
#[test]
fn cross_product_is_antisymmetric() {
    let mut rng = StdRng::seed_from_u64(6);
    let engine = AlgebraEngine::new();
    for _ in 0..TRIALS {
        let (u, v) = (random_vector(&mut rng, 3), random_vector(&mut rng, 3));
        let uv = engine.cross_product(&u, &v).unwrap();
        let vu = engine.cross_product(&v, &u).unwrap();
        assert!(engine.is_opposite(&uv, &vu));
    }
}

/// `|u + v| <= |u| + |v|` in the Euclidean norm.
#[test]
fn triangle_inequality() {
    let mut rng = StdRng::seed_from_u64(7);
    let engine = AlgebraEngine::new();
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..32);
        let (u, v) = (random_vector(&mut rng, n), random_vector(&mut rng, n));
        let sum = engine.vector_add(&u, &v).unwrap();
        let (nu, nv, ns) = (engine.norm(&u, NormKind::L2), engine.norm(&v, NormKind::L2), engine.norm(&sum, NormKind::L2));
        assert!(nu >= 0.0 && nv >= 0.0);
        assert!(ns <= nu + nv + 1e-4, "{ns} > {nu} + {nv}");
    }
}

/// Angles stay within `[0, π]`.
#[test]
fn angle_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(8);
    let engine = AlgebraEngine::new();
    for _ in 0..TRIALS {
        let n = rng.gen_range(1..16);
        let (u, v) = (random_vector(&mut rng, n), random_vector(&mut rng, n));
        for (a, b) in [(&u, &v), (&u, &u)] {
            let theta = engine.angle_between(a, b).unwrap();
            assert!((0.0..=std::f32::consts::PI).contains(&theta), "{theta}");
        }
        let neg = engine.vector_scalar_multiply(&u, -ComplexScalar::ONE);
        let theta = engine.angle_between(&u, &neg).unwrap();
        assert!((0.0..=std::f32::consts::PI).contains(&theta), "{theta}");
    }
}

/// Every vector equals itself and never a vector of another size.
#[test]
fn equality_is_reflexive_and_size_aware() {
    let mut rng = StdRng::seed_from_u64(9);
    let engine = AlgebraEngine::new();
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..16);
        let u = random_vector(&mut rng, n);
        assert!(engine.vector_equals(&u, &u));
        let longer = random_vector(&mut rng, n + 1);
        assert!(!engine.vector_equals(&u, &longer));
        assert!(!engine.vector_equals_within(&u, &longer, f32::MAX));
    }
}

/// The identity leaves random integer matrices unchanged.
#[test]
fn identity_is_neutral_for_multiply() {
    let mut rng = StdRng::seed_from_u64(10);
    let engine = AlgebraEngine::new();
    for n in 1..12 {
        let a = MatrixBuffer::from_fn("A", n, n, |_, _| {
            ComplexScalar::new(rng.r#gen::<f32>() - 0.5, rng.r#gen::<f32>() - 0.5)
        })
        .unwrap();
        let id = MatrixBuffer::identity("I", n).unwrap();
        assert!(engine.matrix_equals(&engine.matrix_multiply(&a, &id).unwrap(), &a));
        assert!(engine.matrix_equals(&engine.matrix_multiply(&id, &a).unwrap(), &a));
    }
}
