//! Raw layout checks and round trips through the C-compatible views.

use std::ffi::CStr;
use std::mem::{align_of, offset_of, size_of};

use calgebra::{ComplexScalar, MatrixBuffer, RawMatrix, RawVector, VectorBuffer};

/// A complex scalar is two packed `f32`s with no padding.
#[test]
fn scalar_is_two_packed_floats() {
    assert_eq!(size_of::<ComplexScalar>(), 2 * size_of::<f32>());
    assert_eq!(align_of::<ComplexScalar>(), align_of::<f32>());
    assert_eq!(offset_of!(ComplexScalar, real), 0);
    assert_eq!(offset_of!(ComplexScalar, imag), 4);
}

/// Raw header fields sit at the offsets C code expects.
#[test]
fn header_field_order() {
    assert_eq!(offset_of!(RawVector, capacity), 0);
    assert!(offset_of!(RawVector, items) < offset_of!(RawVector, name));
    assert_eq!(offset_of!(RawMatrix, rows), 0);
    assert_eq!(offset_of!(RawMatrix, cols), 4);
    assert!(offset_of!(RawMatrix, items) < offset_of!(RawMatrix, name));
}

/// A vector survives a trip through its raw header.
#[test]
fn vector_round_trip() {
    let v = VectorBuffer::new("vec", vec![ComplexScalar::new(1.0, -1.0), ComplexScalar::new(0.5, 2.0)]).unwrap();
    let view = v.as_raw();
    let back = unsafe { VectorBuffer::from_raw(view.raw()) }.unwrap();
    assert_eq!(back, v);
    assert_eq!(back.name(), "vec");
}

/// A matrix survives a trip through its raw header.
#[test]
fn matrix_round_trip() {
    let m = MatrixBuffer::from_reals("mat", &[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let view = m.as_raw();
    let raw = view.raw();
    assert_eq!((raw.rows, raw.cols), (2, 3));
    assert_eq!(view.row_headers().len(), 2);
    assert!(view.row_headers().iter().all(|h| h.capacity == 3));
    let name = unsafe { CStr::from_ptr(raw.name) };
    assert_eq!(name.to_bytes(), b"mat");

    let back = unsafe { MatrixBuffer::from_raw(raw) }.unwrap();
    assert_eq!(back, m);
    assert_eq!(back.name(), "mat");
}

/// Empty vectors and matrices cross the raw boundary.
#[test]
fn empty_buffers_cross_the_boundary() {
    let v = VectorBuffer::zeros("e", 0).unwrap();
    let back = unsafe { VectorBuffer::from_raw(v.as_raw().raw()) }.unwrap();
    assert!(back.is_empty());

    let m = MatrixBuffer::zeros("E", 0, 3).unwrap();
    let back = unsafe { MatrixBuffer::from_raw(m.as_raw().raw()) }.unwrap();
    assert_eq!(back.shape(), (0, 3));
}
