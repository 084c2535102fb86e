//! Cumulative "none" scan over strided sequences.
//!
//! All entry points funnel into one kernel: an accumulator starts at `true`
//! and flips to `false` at the first truthy element. Every logical output
//! position receives the current accumulator; once flipped, the remaining
//! positions are filled with `false` without reading the input again.

use strided_cunone_traits::{Sequence, SequenceMut};

use crate::view::{physical, validate_bounds, StridedView, StridedViewMut};
use crate::{Result, StridedError};

/// Per-position access used by the scan kernel.
///
/// Implementations index by logical position; stride and offset are already
/// resolved and validated.
trait ScanLanes {
    fn is_truthy(&self, i: usize) -> bool;
    fn write(&mut self, i: usize, value: bool);
}

/// Run the scan over `n` logical positions.
///
/// Returns the logical position at which the accumulator flipped, if any.
#[inline]
fn scan_kernel<L: ScanLanes>(lanes: &mut L, n: usize) -> Option<usize> {
    for i in 0..n {
        if lanes.is_truthy(i) {
            for j in i..n {
                lanes.write(j, false);
            }
            return Some(i);
        }
        lanes.write(i, true);
    }
    None
}

struct ViewLanes<'v, 'a, 'b, S: Sequence + ?Sized, D: SequenceMut + ?Sized> {
    src: &'v StridedView<'a, S>,
    dest: &'v mut StridedViewMut<'b, D>,
}

impl<S: Sequence + ?Sized, D: SequenceMut + ?Sized> ScanLanes for ViewLanes<'_, '_, '_, S, D> {
    #[inline(always)]
    fn is_truthy(&self, i: usize) -> bool {
        self.src.is_truthy(i)
    }

    #[inline(always)]
    fn write(&mut self, i: usize, value: bool) {
        self.dest.set(i, value);
    }
}

/// One buffer read and written through two independent stride/offset pairs.
struct InPlaceLanes<'b, B: Sequence + SequenceMut + ?Sized> {
    buf: &'b mut B,
    stride_x: isize,
    offset_x: usize,
    stride_y: isize,
    offset_y: usize,
}

impl<B: Sequence + SequenceMut + ?Sized> ScanLanes for InPlaceLanes<'_, B> {
    #[inline(always)]
    fn is_truthy(&self, i: usize) -> bool {
        self.buf
            .is_truthy_at(physical(self.offset_x, self.stride_x, i))
    }

    #[inline(always)]
    fn write(&mut self, i: usize, value: bool) {
        self.buf
            .write_at(physical(self.offset_y, self.stride_y, i), value);
    }
}

/// Scan `src` into `dest`: `dest[i] = !(src[0] || ... || src[i])`.
///
/// Exactly `src.len()` logical positions of `dest` are written; `dest` may be
/// longer, and its extra positions are left untouched.
pub fn cunone_into<S, D>(dest: &mut StridedViewMut<'_, D>, src: &StridedView<'_, S>) -> Result<()>
where
    S: Sequence + ?Sized,
    D: SequenceMut + ?Sized,
{
    let n = src.len();
    if dest.len() < n {
        tracing::debug!(required = n, available = dest.len(), "destination too short");
        return Err(StridedError::LengthMismatch {
            required: n,
            available: dest.len(),
        });
    }
    tracing::trace!(
        len = n,
        stride_x = src.stride(),
        offset_x = src.offset(),
        stride_y = dest.stride(),
        offset_y = dest.offset(),
        "cunone"
    );
    let mut lanes = ViewLanes { src, dest };
    if let Some(pos) = scan_kernel(&mut lanes, n) {
        tracing::trace!(pos, "accumulator flipped");
    }
    Ok(())
}

/// Fully strided scan.
///
/// The input spans every position reachable from `offset_x` in the direction
/// of `stride_x` (see [`StridedView::from_offset`]); with `stride_x = 1` and
/// `offset_x = 0` that is the whole input. Results land at
/// `offset_y + i * stride_y` in `y`. Both layouts are validated before
/// anything is read or written.
///
/// # Example
///
/// ```rust
/// use strided_cunone::cunone_strided;
///
/// // Walk the input backwards, write results backwards.
/// let x = [1.0f64, 0.0, 0.0];
/// let mut y = [false; 3];
/// cunone_strided(&x[..], -1, 2, &mut y[..], -1, 2).unwrap();
/// assert_eq!(y, [false, true, true]);
/// ```
pub fn cunone_strided<'y, S, D>(
    x: &S,
    stride_x: isize,
    offset_x: usize,
    y: &'y mut D,
    stride_y: isize,
    offset_y: usize,
) -> Result<&'y mut D>
where
    S: Sequence + ?Sized,
    D: SequenceMut + ?Sized,
{
    let src = StridedView::from_offset(x, stride_x, offset_x)?;
    let mut dest = StridedViewMut::new(y, src.len(), stride_y, offset_y)?;
    cunone_into(&mut dest, &src)?;
    Ok(dest.into_inner())
}

/// Scan a contiguous input into a strided, offset output.
pub fn cunone_assign<'y, S, D>(
    x: &S,
    y: &'y mut D,
    stride_y: isize,
    offset_y: usize,
) -> Result<&'y mut D>
where
    S: Sequence + ?Sized,
    D: SequenceMut + ?Sized,
{
    cunone_strided(x, 1, 0, y, stride_y, offset_y)
}

/// Scan `x` into a freshly allocated `Vec<bool>` of the same length.
///
/// # Example
///
/// ```rust
/// use num_complex::Complex64;
/// use strided_cunone::cunone;
///
/// let x = [Complex64::new(0.0, 0.0), Complex64::new(0.0, 1.0), Complex64::new(0.0, 0.0)];
/// assert_eq!(cunone(&x[..]).unwrap(), vec![true, false, false]);
/// ```
pub fn cunone<S: Sequence + ?Sized>(x: &S) -> Result<Vec<bool>> {
    let mut out = Vec::new();
    out.try_reserve_exact(x.len())?;
    out.resize(x.len(), false);
    cunone_strided(x, 1, 0, &mut out, 1, 0)?;
    Ok(out)
}

/// Scan `n` positions where input and output share `buf`.
///
/// Logical input position `i` is read before logical output position `i` is
/// written, and no input position is read again once passed. Choosing strides
/// and offsets so that output writes do not land on input slots that are
/// still to be read is up to the caller.
///
/// # Example
///
/// ```rust
/// use strided_cunone::cunone_in_place;
///
/// // Inputs in the even slots, results in the odd slots.
/// let mut buf = [0u8, 9, 0, 9, 1, 9];
/// cunone_in_place(&mut buf[..], 3, 2, 0, 2, 1).unwrap();
/// assert_eq!(buf, [0, 1, 0, 1, 1, 0]);
/// ```
pub fn cunone_in_place<B>(
    buf: &mut B,
    n: usize,
    stride_x: isize,
    offset_x: usize,
    stride_y: isize,
    offset_y: usize,
) -> Result<&mut B>
where
    B: Sequence + SequenceMut + ?Sized,
{
    validate_bounds(Sequence::len(&*buf), n, stride_x, offset_x, "input")?;
    validate_bounds(SequenceMut::len(&*buf), n, stride_y, offset_y, "output")?;
    tracing::trace!(
        len = n,
        stride_x,
        offset_x,
        stride_y,
        offset_y,
        "cunone in place"
    );
    let mut lanes = InPlaceLanes {
        buf,
        stride_x,
        offset_x,
        stride_y,
        offset_y,
    };
    if let Some(pos) = scan_kernel(&mut lanes, n) {
        tracing::trace!(pos, "accumulator flipped");
    }
    Ok(lanes.buf)
}
