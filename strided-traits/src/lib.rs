//! Shared traits for the strided-cunone ecosystem.
//!
//! This crate provides the capability the cumulative scan needs from a
//! buffer: its length, a truthiness test at a physical index, and (for
//! outputs) a boolean write at a physical index.
//!
//! External buffer crates can depend on `strided-cunone-traits` to implement
//! [`Sequence`] / [`SequenceMut`] for their own storage without orphan rule
//! violations.

pub mod sequence;
pub mod truthy;

pub use sequence::{Sequence, SequenceMut};
pub use truthy::Truthy;
