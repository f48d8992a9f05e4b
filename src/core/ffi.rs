//! C-compatible raw layout for sharing buffers across a language boundary.
//!
//! The raw structs mirror the C declarations
//!
//! ```c
//! typedef struct { float real, imag; } ComplexScalar;
//! typedef struct { int capacity; ComplexScalar *items; char *name; } Vector;
//! typedef struct { int rows, cols; Vector *items; char *name; } Matrix;
//! ```
//!
//! Owned buffers hand out borrowed views (`VectorView`, `MatrixView`) whose pointers stay
//! valid for as long as the view lives; no data is copied to produce a vector view. The
//! reverse direction (`from_raw`) copies foreign memory into owned buffers.

use std::ffi::{CStr, CString, c_char};
use std::marker::PhantomData;

use crate::core::ComplexScalar;
use crate::error::{AlgebraError, Result};
use crate::matrix::MatrixBuffer;
use crate::vector::VectorBuffer;

/// Raw vector header: `capacity`, pointer to `capacity` scalars, NUL-terminated name.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawVector {
    pub capacity: i32,
    pub items: *const ComplexScalar,
    pub name: *const c_char,
}

/// Raw matrix header: `rows`, `cols`, pointer to `rows` vector headers, NUL-terminated name.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawMatrix {
    pub rows: i32,
    pub cols: i32,
    pub items: *const RawVector,
    pub name: *const c_char,
}

/// Borrowed raw view of a `VectorBuffer`.
pub struct VectorView<'a> {
    raw: RawVector,
    _buffer: PhantomData<&'a VectorBuffer>,
}

impl VectorView<'_> {
    pub fn raw(&self) -> &RawVector {
        &self.raw
    }

    /// Pointer suitable for passing as `const Vector *`; valid while `self` is alive.
    pub fn as_ptr(&self) -> *const RawVector {
        &self.raw
    }
}

/// Borrowed raw view of a `MatrixBuffer`. Owns the array of row headers it points to.
pub struct MatrixView<'a> {
    rows: Vec<RawVector>,
    raw: RawMatrix,
    _buffer: PhantomData<&'a MatrixBuffer>,
}

impl MatrixView<'_> {
    pub fn raw(&self) -> &RawMatrix {
        &self.raw
    }

    pub fn row_headers(&self) -> &[RawVector] {
        &self.rows
    }

    /// Pointer suitable for passing as `const Matrix *`; valid while `self` is alive.
    pub fn as_ptr(&self) -> *const RawMatrix {
        &self.raw
    }
}

// Lengths are bounded by `i32::MAX` at construction, so the narrowing casts below are exact.
fn raw_len(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

fn from_raw_len(what: &'static str, len: i32) -> Result<usize> {
    usize::try_from(len).map_err(|_| AlgebraError::InvalidBuffer(format!("negative {what} {len}")))
}

/// # Safety
/// `name` must be null or point to a NUL-terminated string.
unsafe fn name_from_raw(name: *const c_char) -> CString {
    if name.is_null() {
        CString::default()
    } else {
        // SAFETY: non-null and NUL-terminated per the caller's contract.
        unsafe { CStr::from_ptr(name) }.to_owned()
    }
}

impl VectorBuffer {
    pub fn as_raw(&self) -> VectorView<'_> {
        VectorView {
            raw: RawVector {
                capacity: raw_len(self.capacity()),
                items: self.as_slice().as_ptr(),
                name: self.name_c().as_ptr(),
            },
            _buffer: PhantomData,
        }
    }

    /// Copy a foreign vector into an owned buffer.
    ///
    /// # Safety
    /// When `raw.capacity > 0`, `raw.items` must point to `raw.capacity` initialized
    /// scalars. `raw.name` must be null or point to a NUL-terminated string. Both must
    /// stay valid for the duration of the call.
    pub unsafe fn from_raw(raw: &RawVector) -> Result<Self> {
        let len = from_raw_len("capacity", raw.capacity)?;
        let items = if len == 0 {
            Vec::new()
        } else if raw.items.is_null() {
            return Err(AlgebraError::NullPointer("vector items"));
        } else {
            // SAFETY: non-null, and `len` initialized scalars per the caller's contract.
            unsafe { std::slice::from_raw_parts(raw.items, len) }.to_vec()
        };
        // SAFETY: forwarded from the caller's contract on `raw.name`.
        let name = unsafe { name_from_raw(raw.name) };
        Ok(Self::from_parts(name, items))
    }
}

impl MatrixBuffer {
    pub fn as_raw(&self) -> MatrixView<'_> {
        let rows: Vec<RawVector> = self.iter_rows().map(|r| *r.as_raw().raw()).collect();
        let raw = RawMatrix {
            rows: raw_len(self.rows()),
            cols: raw_len(self.cols()),
            items: rows.as_ptr(),
            name: self.name_c().as_ptr(),
        };
        MatrixView { rows, raw, _buffer: PhantomData }
    }

    /// Copy a foreign matrix into an owned buffer.
    ///
    /// # Safety
    /// When `raw.rows > 0`, `raw.items` must point to `raw.rows` vector headers, each
    /// satisfying the contract of [`VectorBuffer::from_raw`]. `raw.name` must be null or
    /// point to a NUL-terminated string.
    pub unsafe fn from_raw(raw: &RawMatrix) -> Result<Self> {
        let nrows = from_raw_len("rows", raw.rows)?;
        let ncols = from_raw_len("cols", raw.cols)?;
        let headers: &[RawVector] = if nrows == 0 {
            &[]
        } else if raw.items.is_null() {
            return Err(AlgebraError::NullPointer("matrix rows"));
        } else {
            // SAFETY: non-null, and `nrows` headers per the caller's contract.
            unsafe { std::slice::from_raw_parts(raw.items, nrows) }
        };
        let rows = headers
            .iter()
            // SAFETY: each header satisfies the vector contract per the caller's contract.
            .map(|h| unsafe { VectorBuffer::from_raw(h) })
            .collect::<Result<Vec<_>>>()?;
        // SAFETY: forwarded from the caller's contract on `raw.name`.
        let name = unsafe { name_from_raw(raw.name) };
        Self::with_shape(name, nrows, ncols, rows)
    }
}
