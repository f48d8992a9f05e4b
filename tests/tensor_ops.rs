//! Integration tests for rank-3 tensors through the engine.

use calgebra::{AlgebraEngine, AlgebraError, ComplexScalar, Dims, MatrixBuffer, TensorBuffer};

fn ramp(name: &str, rows: usize, cols: usize, depth: usize) -> TensorBuffer {
    TensorBuffer::from_fn(name, rows, cols, depth, |i, j, k| {
        ComplexScalar::new((i * cols + j) as f32, k as f32)
    })
    .unwrap()
}

/// Add, subtract, scale and elementwise product over every depth slice.
#[test]
fn elementwise_operations() {
    let engine = AlgebraEngine::new();
    let a = ramp("A", 2, 3, 2);
    let b = engine.tensor_scalar_multiply(&a, ComplexScalar::from_real(2.0));
    assert_eq!(b.name(), "V");
    let sum = engine.tensor_add(&a, &a).unwrap();
    assert!(engine.tensor_equals(&sum, &b));
    let zero = engine.tensor_subtract(&a, &a).unwrap();
    assert!(engine.tensor_equals(&zero, &TensorBuffer::zeros("Z", 2, 3, 2).unwrap()));
    let h = engine.tensor_hadamard_product(&a, &a).unwrap();
    // (2 + i)² = 3 + 4i
    assert_eq!(h[(0, 2, 1)], ComplexScalar::new(3.0, 4.0));
}

/// Depth mismatches are reported with the full tensor shapes.
#[test]
fn depth_mismatch_is_rejected() {
    let engine = AlgebraEngine::new();
    let err = engine.tensor_add(&ramp("A", 2, 2, 2), &ramp("B", 2, 2, 3)).unwrap_err();
    assert_eq!(
        err,
        AlgebraError::DimensionMismatch { op: "tensor add", lhs: Dims::Tensor(2, 2, 2), rhs: Dims::Tensor(2, 2, 3) }
    );
    assert_eq!(err.to_string(), "dimension mismatch in tensor add: tensor[2x2x2] vs tensor[2x2x3]");
}

/// Contraction of identity slices returns the other operand.
#[test]
fn contraction_with_identity_slices() {
    let engine = AlgebraEngine::new();
    let id = TensorBuffer::new(
        "I",
        vec![MatrixBuffer::identity("I", 3).unwrap(), MatrixBuffer::identity("I", 3).unwrap()],
    )
    .unwrap();
    let b = ramp("B", 3, 4, 2);
    let c = engine.tensor_contract(&id, &b).unwrap();
    assert_eq!(c.shape(), (3, 4, 2));
    assert!(engine.tensor_equals(&c, &b));
    assert!(engine.tensor_contract(&b, &id).is_err());
}

/// A rank-two composition sums two triple outer products.
#[test]
fn rank_two_composition() {
    let engine = AlgebraEngine::new();
    let a = MatrixBuffer::from_reals("A", &[vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
    let b = MatrixBuffer::from_reals("B", &[vec![1.0, 1.0]]).unwrap();
    let c = MatrixBuffer::from_reals("C", &[vec![2.0, 3.0]]).unwrap();
    let v = engine.cp_compose(&a, &b, &c).unwrap();
    assert_eq!(v.shape(), (2, 1, 1));
    assert_eq!(v[(0, 0, 0)], ComplexScalar::from_real(2.0));
    assert_eq!(v[(1, 0, 0)], ComplexScalar::from_real(3.0));
}
