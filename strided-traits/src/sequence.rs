//! Indexable-sequence capability consumed by the cumulative scan.
//!
//! Indices passed to these traits are *physical* indices into the backing
//! storage. Strides and offsets are resolved by the caller.

use crate::truthy::Truthy;

/// Read side of a buffer: its length and a truthiness test per slot.
///
/// The truthiness rule is owned by the implementor, so buffers whose logical
/// element spans several storage slots (e.g. interleaved complex numbers)
/// report `len` and index in logical elements.
pub trait Sequence {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Test the element stored at `index`.
    ///
    /// Callers must keep `index < self.len()`; implementations may panic
    /// otherwise.
    fn is_truthy_at(&self, index: usize) -> bool;
}

/// Write side of a buffer of boolean-capable slots.
pub trait SequenceMut {
    fn len(&self) -> usize;

    /// Store `value` at `index`.
    ///
    /// Callers must keep `index < self.len()`; implementations may panic
    /// otherwise.
    fn write_at(&mut self, index: usize, value: bool);
}

impl<T: Truthy> Sequence for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn is_truthy_at(&self, index: usize) -> bool {
        self[index].is_truthy()
    }
}

impl<T: Truthy> Sequence for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn is_truthy_at(&self, index: usize) -> bool {
        self[index].is_truthy()
    }
}

impl<T: Truthy, const N: usize> Sequence for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn is_truthy_at(&self, index: usize) -> bool {
        self[index].is_truthy()
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn is_truthy_at(&self, index: usize) -> bool {
        (**self).is_truthy_at(index)
    }
}

// Any slot type constructible from a bool can receive scan results:
// bool, u8 (1/0), Option<bool>, serde_json::Value, ...
impl<T: From<bool>> SequenceMut for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn write_at(&mut self, index: usize, value: bool) {
        self[index] = T::from(value);
    }
}

impl<T: From<bool>> SequenceMut for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn write_at(&mut self, index: usize, value: bool) {
        self[index] = T::from(value);
    }
}

impl<T: From<bool>, const N: usize> SequenceMut for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn write_at(&mut self, index: usize, value: bool) {
        self[index] = T::from(value);
    }
}

impl<D: SequenceMut + ?Sized> SequenceMut for &mut D {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn write_at(&mut self, index: usize, value: bool) {
        (**self).write_at(index, value);
    }
}
