//! Buffer adapters implementing the sequence capability for storage that is
//! not a plain slice of truthy elements.

use num_complex::Complex;
use strided_cunone_traits::{Sequence, SequenceMut, Truthy};

use crate::pod_complex::{cast_interleaved, InterleavedReal};
use crate::{Result, StridedError};

// ============================================================================
// InterleavedComplex
// ============================================================================

/// A real buffer `[re0, im0, re1, im1, ...]` read as complex elements.
///
/// Lengths and indices are in logical (complex) elements: element `i` lives
/// in storage slots `2i` and `2i + 1`.
pub struct InterleavedComplex<'a, T: InterleavedReal> {
    pairs: &'a [T::Pair],
}

impl<T: InterleavedReal> std::fmt::Debug for InterleavedComplex<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterleavedComplex")
            .field("len", &self.pairs.len())
            .finish()
    }
}

impl<T: InterleavedReal> Clone for InterleavedComplex<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: InterleavedReal> Copy for InterleavedComplex<'_, T> {}

impl<'a, T: InterleavedReal> InterleavedComplex<'a, T> {
    /// Wrap an interleaved real buffer. Fails if `buf.len()` is odd.
    pub fn new(buf: &'a [T]) -> Result<Self> {
        let pairs =
            cast_interleaved(buf).ok_or(StridedError::OddInterleavedLength(buf.len()))?;
        Ok(Self { pairs })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Complex element at logical index `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Complex<T> {
        self.pairs[i].into()
    }
}

impl<T: InterleavedReal> Sequence for InterleavedComplex<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    fn is_truthy_at(&self, index: usize) -> bool {
        self.pairs[index].is_truthy()
    }
}

// ============================================================================
// Accessor adapters
// ============================================================================

/// Read-only accessor built from a length and a getter.
#[derive(Clone, Copy)]
pub struct FnSequence<F> {
    len: usize,
    get: F,
}

impl<F> FnSequence<F> {
    pub fn new<T>(len: usize, get: F) -> Self
    where
        F: Fn(usize) -> T,
    {
        Self { len, get }
    }
}

impl<F, T> Sequence for FnSequence<F>
where
    F: Fn(usize) -> T,
    T: Truthy,
{
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn is_truthy_at(&self, index: usize) -> bool {
        (self.get)(index).is_truthy()
    }
}

/// Write-only accessor built from a length and a setter.
pub struct FnSequenceMut<F> {
    len: usize,
    set: F,
}

impl<F: FnMut(usize, bool)> FnSequenceMut<F> {
    pub fn new(len: usize, set: F) -> Self {
        Self { len, set }
    }
}

impl<F: FnMut(usize, bool)> SequenceMut for FnSequenceMut<F> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn write_at(&mut self, index: usize, value: bool) {
        (self.set)(index, value);
    }
}
