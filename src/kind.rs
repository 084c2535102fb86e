//! Kind-tagged inputs for runtime dispatch.
//!
//! [`ArrayRef`] carries one of the supported element kinds. The kind is
//! resolved once per call and the scan then runs the monomorphic kernel for
//! that kind; there is no per-element dispatch.

use num_complex::{Complex32, Complex64};
#[cfg(feature = "json")]
use serde_json::Value;
#[cfg(feature = "json")]
use strided_cunone_traits::Truthy;
use strided_cunone_traits::{Sequence, SequenceMut};

use crate::buffer::InterleavedComplex;
use crate::scan::{cunone, cunone_assign};
use crate::Result;

/// Element kind of an [`ArrayRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Arbitrary values tested with the generic truthiness predicate.
    Generic,
    Float64,
    Float32,
    /// One boolean per element (`bool` or byte-packed).
    Bool,
    Complex128,
    Complex64,
}

/// Borrowed input of any supported element kind.
#[derive(Debug, Clone, Copy)]
pub enum ArrayRef<'a> {
    #[cfg(feature = "json")]
    Generic(&'a [Value]),
    Float64(&'a [f64]),
    Float32(&'a [f32]),
    Bool(&'a [bool]),
    /// Byte-per-element booleans; any non-zero byte is `true`.
    Packed(&'a [u8]),
    Complex128(&'a [Complex64]),
    Complex64(&'a [Complex32]),
    Interleaved128(InterleavedComplex<'a, f64>),
    Interleaved64(InterleavedComplex<'a, f32>),
}

/// Resolve the concrete kind once, then run `$body` with `$x` bound to the
/// monomorphic sequence.
macro_rules! dispatch {
    ($array:expr, $x:ident => $body:expr) => {
        match $array {
            #[cfg(feature = "json")]
            ArrayRef::Generic($x) => $body,
            ArrayRef::Float64($x) => $body,
            ArrayRef::Float32($x) => $body,
            ArrayRef::Bool($x) => $body,
            ArrayRef::Packed($x) => $body,
            ArrayRef::Complex128($x) => $body,
            ArrayRef::Complex64($x) => $body,
            ArrayRef::Interleaved128(ref $x) => $body,
            ArrayRef::Interleaved64(ref $x) => $body,
        }
    };
}

impl<'a> ArrayRef<'a> {
    pub fn kind(&self) -> Kind {
        match self {
            #[cfg(feature = "json")]
            ArrayRef::Generic(_) => Kind::Generic,
            ArrayRef::Float64(_) => Kind::Float64,
            ArrayRef::Float32(_) => Kind::Float32,
            ArrayRef::Bool(_) | ArrayRef::Packed(_) => Kind::Bool,
            ArrayRef::Complex128(_) | ArrayRef::Interleaved128(_) => Kind::Complex128,
            ArrayRef::Complex64(_) | ArrayRef::Interleaved64(_) => Kind::Complex64,
        }
    }

    /// Number of logical elements.
    pub fn len(&self) -> usize {
        dispatch!(*self, x => Sequence::len(x))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Scan into a freshly allocated output.
    ///
    /// Generic input yields a generic sequence of `Value::Bool`; every typed
    /// kind yields a `Vec<bool>`.
    pub fn cunone(&self) -> Result<BoolArray> {
        match *self {
            #[cfg(feature = "json")]
            ArrayRef::Generic(x) => {
                let mut out = Vec::new();
                out.try_reserve_exact(x.len())?;
                out.resize(x.len(), Value::Bool(false));
                cunone_assign(x, &mut out, 1, 0)?;
                Ok(BoolArray::Generic(out))
            }
            other => dispatch!(other, x => cunone(x).map(BoolArray::Bool)),
        }
    }
}

/// Scan a kind-tagged input into a strided, offset output.
pub fn cunone_array<'y, D>(
    x: &ArrayRef<'_>,
    y: &'y mut D,
    stride_y: isize,
    offset_y: usize,
) -> Result<&'y mut D>
where
    D: SequenceMut + ?Sized,
{
    tracing::trace!(kind = ?x.kind(), len = x.len(), "dispatching cunone");
    dispatch!(*x, x => cunone_assign(x, y, stride_y, offset_y))
}

/// Freshly allocated scan result, shaped after the input kind.
#[derive(Debug, Clone, PartialEq)]
pub enum BoolArray {
    Bool(Vec<bool>),
    #[cfg(feature = "json")]
    Generic(Vec<Value>),
}

impl BoolArray {
    pub fn len(&self) -> usize {
        match self {
            BoolArray::Bool(v) => v.len(),
            #[cfg(feature = "json")]
            BoolArray::Generic(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten to plain booleans.
    ///
    /// Scan results only hold `Value::Bool`; any other value a caller stores
    /// in a `Generic` array is read through its truthiness.
    pub fn to_bools(&self) -> Vec<bool> {
        match self {
            BoolArray::Bool(v) => v.clone(),
            #[cfg(feature = "json")]
            BoolArray::Generic(v) => v
                .iter()
                .map(|value| match value {
                    Value::Bool(b) => *b,
                    other => other.is_truthy(),
                })
                .collect(),
        }
    }
}

#[cfg(feature = "json")]
impl<'a> From<&'a [Value]> for ArrayRef<'a> {
    fn from(x: &'a [Value]) -> Self {
        ArrayRef::Generic(x)
    }
}

impl<'a> From<&'a [f64]> for ArrayRef<'a> {
    fn from(x: &'a [f64]) -> Self {
        ArrayRef::Float64(x)
    }
}

impl<'a> From<&'a [f32]> for ArrayRef<'a> {
    fn from(x: &'a [f32]) -> Self {
        ArrayRef::Float32(x)
    }
}

impl<'a> From<&'a [bool]> for ArrayRef<'a> {
    fn from(x: &'a [bool]) -> Self {
        ArrayRef::Bool(x)
    }
}

impl<'a> From<&'a [u8]> for ArrayRef<'a> {
    fn from(x: &'a [u8]) -> Self {
        ArrayRef::Packed(x)
    }
}

impl<'a> From<&'a [Complex64]> for ArrayRef<'a> {
    fn from(x: &'a [Complex64]) -> Self {
        ArrayRef::Complex128(x)
    }
}

impl<'a> From<&'a [Complex32]> for ArrayRef<'a> {
    fn from(x: &'a [Complex32]) -> Self {
        ArrayRef::Complex64(x)
    }
}

impl<'a> From<InterleavedComplex<'a, f64>> for ArrayRef<'a> {
    fn from(x: InterleavedComplex<'a, f64>) -> Self {
        ArrayRef::Interleaved128(x)
    }
}

impl<'a> From<InterleavedComplex<'a, f32>> for ArrayRef<'a> {
    fn from(x: InterleavedComplex<'a, f32>) -> Self {
        ArrayRef::Interleaved64(x)
    }
}
