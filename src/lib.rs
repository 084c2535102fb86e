//! Cumulative logical "none" over strided one-dimensional sequences.
//!
//! For every logical position `i` the result is `true` while every element in
//! `0..=i` is falsy, and `false` from the first truthy element onwards. Input
//! and output are addressed independently through a stride and an offset, so
//! results can be written into alternating slots, in reverse, or into a
//! pre-existing buffer at an offset.
//!
//! # Core Types
//!
//! - [`StridedView`] / [`StridedViewMut`]: Validated 1-D strided views over any
//!   [`Sequence`] / [`SequenceMut`]
//! - [`ArrayRef`]: Kind-tagged input (generic, real, boolean, complex) for
//!   runtime dispatch
//! - [`InterleavedComplex`]: `[re, im, re, im, ...]` real buffers read as complex
//!   elements
//!
//! # Operations
//!
//! - [`cunone`]: Allocate a fresh output with unit strides and zero offsets
//! - [`cunone_strided`]: Fully strided scan (input and output stride/offset)
//! - [`cunone_assign`]: Contiguous input, strided/offset output
//! - [`cunone_into`]: Scan between two pre-built views
//! - [`cunone_in_place`]: Scan where input and output share one buffer
//! - [`cunone_array`]: Kind-dispatched scan over an [`ArrayRef`]
//!
//! # Example
//!
//! ```rust
//! use strided_cunone::{cunone, cunone_assign};
//!
//! let x = [false, false, false, true, false];
//! assert_eq!(cunone(&x[..]).unwrap(), vec![true, true, true, false, false]);
//!
//! // Write into every other slot of a larger buffer.
//! let x = [0.0f64, 0.0, 1.0, 0.0, 0.0];
//! let mut y: [Option<bool>; 10] = [None; 10];
//! cunone_assign(&x[..], &mut y[..], 2, 0).unwrap();
//! assert_eq!(&y[..6], &[Some(true), None, Some(true), None, Some(false), None]);
//! ```
//!
//! # Validation
//!
//! Every entry point validates strides and index ranges for both operands
//! before the first element is read or written, so a failed call leaves the
//! output untouched.

mod buffer;
mod kind;
mod pod_complex;
mod scan;
pub mod view;

// ============================================================================
// Capability traits
// ============================================================================
pub use strided_cunone_traits::{Sequence, SequenceMut, Truthy};

// ============================================================================
// Scan operations
// ============================================================================
pub use scan::{cunone, cunone_assign, cunone_in_place, cunone_into, cunone_strided};

// ============================================================================
// Kind dispatch
// ============================================================================
pub use kind::{cunone_array, ArrayRef, BoolArray, Kind};

// ============================================================================
// View types and buffer adapters
// ============================================================================
pub use buffer::{FnSequence, FnSequenceMut, InterleavedComplex};
pub use view::{StridedView, StridedViewMut};

// Pod complex utilities
pub use pod_complex::{InterleavedReal, PodComplexF32, PodComplexF64};

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur during strided scan operations.
#[derive(Debug, thiserror::Error)]
pub enum StridedError {
    /// Zero stride is not allowed for the named operand.
    #[error("invalid stride 0 for {operand}")]
    ZeroStride { operand: &'static str },

    /// A computed physical index falls outside the backing storage.
    #[error("index {index} out of range for storage of length {len}")]
    OutOfRange { index: isize, len: usize },

    /// Integer overflow while computing a physical index.
    #[error("offset overflow while computing index")]
    OffsetOverflow,

    /// Destination view is shorter than the source view.
    #[error("destination holds {available} positions but {required} are required")]
    LengthMismatch { required: usize, available: usize },

    /// Interleaved complex buffers hold two slots per element.
    #[error("interleaved complex buffer has odd length {0}")]
    OddInterleavedLength(usize),

    /// The output buffer could not be allocated.
    #[error("failed to allocate output: {0}")]
    Allocation(#[from] std::collections::TryReserveError),
}

/// Result type for strided scan operations.
pub type Result<T> = std::result::Result<T, StridedError>;
