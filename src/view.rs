//! One-dimensional strided views over indexable sequences.
//!
//! A view is the quadruple `(sequence, len, stride, offset)`. Logical
//! position `i` maps to physical index `offset + i * stride`; a negative
//! stride walks the backing storage backwards while logical position 0 is
//! still the first element visited.
//!
//! - [`StridedView`]: read-only view over a [`Sequence`]
//! - [`StridedViewMut`]: write view over a [`SequenceMut`]
//!
//! Both are validated on construction, so element access afterwards never
//! leaves the backing storage.

use strided_cunone_traits::{Sequence, SequenceMut};

use crate::{Result, StridedError};

// ============================================================================
// Validation helpers
// ============================================================================

/// Validate that all `len` logical positions stay within `[0, storage_len)`.
pub(crate) fn validate_bounds(
    storage_len: usize,
    len: usize,
    stride: isize,
    offset: usize,
    operand: &'static str,
) -> Result<()> {
    if stride == 0 {
        tracing::debug!(operand, "rejecting zero stride");
        return Err(StridedError::ZeroStride { operand });
    }
    // Empty view - no access needed
    if len == 0 {
        return Ok(());
    }
    let first = isize::try_from(offset).map_err(|_| StridedError::OffsetOverflow)?;
    let steps = isize::try_from(len - 1).map_err(|_| StridedError::OffsetOverflow)?;
    let last = stride
        .checked_mul(steps)
        .and_then(|span| first.checked_add(span))
        .ok_or(StridedError::OffsetOverflow)?;
    for index in [first, last] {
        if index < 0 || index as usize >= storage_len {
            tracing::debug!(operand, index, storage_len, "view leaves backing storage");
            return Err(StridedError::OutOfRange {
                index,
                len: storage_len,
            });
        }
    }
    Ok(())
}

/// Number of logical positions reachable from `offset` before stepping
/// outside `[0, storage_len)`.
fn reachable_len(storage_len: usize, stride: isize, offset: usize) -> usize {
    if offset >= storage_len {
        return 0;
    }
    let step = stride.unsigned_abs();
    if stride > 0 {
        (storage_len - 1 - offset) / step + 1
    } else {
        offset / step + 1
    }
}

#[inline(always)]
pub(crate) fn physical(offset: usize, stride: isize, i: usize) -> usize {
    // Validated on construction: the result lies in [0, storage_len).
    (offset as isize + i as isize * stride) as usize
}

// ============================================================================
// StridedView
// ============================================================================

/// Read-only 1-D strided view over a [`Sequence`].
pub struct StridedView<'a, S: Sequence + ?Sized> {
    seq: &'a S,
    len: usize,
    stride: isize,
    offset: usize,
}

impl<S: Sequence + ?Sized> Clone for StridedView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Sequence + ?Sized> Copy for StridedView<'_, S> {}

impl<S: Sequence + ?Sized> std::fmt::Debug for StridedView<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StridedView")
            .field("len", &self.len)
            .field("stride", &self.stride)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<'a, S: Sequence + ?Sized> StridedView<'a, S> {
    /// Create a view of `len` logical positions starting at physical `offset`.
    pub fn new(seq: &'a S, len: usize, stride: isize, offset: usize) -> Result<Self> {
        validate_bounds(seq.len(), len, stride, offset, "input")?;
        Ok(Self {
            seq,
            len,
            stride,
            offset,
        })
    }

    /// Create a view covering every position reachable from `offset` in the
    /// direction of `stride`.
    ///
    /// With `stride = 1, offset = 0` this is the whole sequence; with
    /// `stride = -1, offset = len - 1` it is the whole sequence reversed.
    /// `offset` must name a slot in storage; only empty storage with
    /// `offset = 0` yields an empty view.
    pub fn from_offset(seq: &'a S, stride: isize, offset: usize) -> Result<Self> {
        if stride == 0 {
            tracing::debug!(operand = "input", "rejecting zero stride");
            return Err(StridedError::ZeroStride { operand: "input" });
        }
        let storage_len = seq.len();
        if offset > 0 && offset >= storage_len {
            tracing::debug!(
                operand = "input",
                offset,
                storage_len,
                "offset leaves backing storage"
            );
            return Err(StridedError::OutOfRange {
                index: isize::try_from(offset).unwrap_or(isize::MAX),
                len: storage_len,
            });
        }
        let len = reachable_len(storage_len, stride, offset);
        Self::new(seq, len, stride, offset)
    }

    /// View the whole sequence with unit stride.
    pub fn contiguous(seq: &'a S) -> Self {
        Self {
            seq,
            len: seq.len(),
            stride: 1,
            offset: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Physical index of logical position `i`.
    #[inline]
    pub fn physical_index(&self, i: usize) -> usize {
        assert!(i < self.len, "index {} out of bounds for len {}", i, self.len);
        physical(self.offset, self.stride, i)
    }

    /// Truthiness of the element at logical position `i`.
    #[inline]
    pub fn is_truthy(&self, i: usize) -> bool {
        self.seq.is_truthy_at(self.physical_index(i))
    }

    /// Reverse the logical order (zero-copy).
    pub fn reversed(&self) -> Self {
        if self.len == 0 {
            return *self;
        }
        Self {
            seq: self.seq,
            len: self.len,
            stride: -self.stride,
            offset: physical(self.offset, self.stride, self.len - 1),
        }
    }
}

// ============================================================================
// StridedViewMut
// ============================================================================

/// Write-side 1-D strided view over a [`SequenceMut`].
pub struct StridedViewMut<'a, D: SequenceMut + ?Sized> {
    seq: &'a mut D,
    len: usize,
    stride: isize,
    offset: usize,
}

impl<D: SequenceMut + ?Sized> std::fmt::Debug for StridedViewMut<'_, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StridedViewMut")
            .field("len", &self.len)
            .field("stride", &self.stride)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<'a, D: SequenceMut + ?Sized> StridedViewMut<'a, D> {
    /// Create a mutable view of `len` logical positions starting at `offset`.
    pub fn new(seq: &'a mut D, len: usize, stride: isize, offset: usize) -> Result<Self> {
        validate_bounds(seq.len(), len, stride, offset, "output")?;
        Ok(Self {
            seq,
            len,
            stride,
            offset,
        })
    }

    /// View the whole buffer with unit stride.
    pub fn contiguous(seq: &'a mut D) -> Self {
        let len = seq.len();
        Self {
            seq,
            len,
            stride: 1,
            offset: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Physical index of logical position `i`.
    #[inline]
    pub fn physical_index(&self, i: usize) -> usize {
        assert!(i < self.len, "index {} out of bounds for len {}", i, self.len);
        physical(self.offset, self.stride, i)
    }

    /// Write `value` at logical position `i`.
    #[inline]
    pub fn set(&mut self, i: usize, value: bool) {
        let idx = self.physical_index(i);
        self.seq.write_at(idx, value);
    }

    /// Release the view, returning the underlying buffer.
    pub fn into_inner(self) -> &'a mut D {
        self.seq
    }
}
