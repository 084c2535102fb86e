use bytemuck::{Pod, Zeroable};
use num_complex::Complex;
use strided_cunone_traits::Truthy;

/// POD representation of `Complex<f64>`: `[re, im]` with `repr(C)`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Zeroable, Pod)]
pub struct PodComplexF64 {
    pub re: f64,
    pub im: f64,
}

/// POD representation of `Complex<f32>`: `[re, im]` with `repr(C)`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Zeroable, Pod)]
pub struct PodComplexF32 {
    pub re: f32,
    pub im: f32,
}

impl From<Complex<f64>> for PodComplexF64 {
    fn from(c: Complex<f64>) -> Self {
        PodComplexF64 { re: c.re, im: c.im }
    }
}

impl From<PodComplexF64> for Complex<f64> {
    fn from(p: PodComplexF64) -> Self {
        Complex { re: p.re, im: p.im }
    }
}

impl From<Complex<f32>> for PodComplexF32 {
    fn from(c: Complex<f32>) -> Self {
        PodComplexF32 { re: c.re, im: c.im }
    }
}

impl From<PodComplexF32> for Complex<f32> {
    fn from(p: PodComplexF32) -> Self {
        Complex { re: p.re, im: p.im }
    }
}

impl Truthy for PodComplexF64 {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        self.re.is_truthy() || self.im.is_truthy()
    }
}

impl Truthy for PodComplexF32 {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        self.re.is_truthy() || self.im.is_truthy()
    }
}

/// Real component types that can back an interleaved complex buffer.
///
/// `Pair` is the `repr(C)` `[re, im]` struct the real buffer is reinterpreted
/// as, two storage slots per logical element.
pub trait InterleavedReal: Pod {
    type Pair: Pod + Truthy + Into<Complex<Self>>;
}

impl InterleavedReal for f64 {
    type Pair = PodComplexF64;
}

impl InterleavedReal for f32 {
    type Pair = PodComplexF32;
}

/// Reinterpret `[re0, im0, re1, im1, ...]` as complex pairs.
///
/// Returns `None` when `buf` has an odd number of slots.
pub(crate) fn cast_interleaved<T: InterleavedReal>(buf: &[T]) -> Option<&[T::Pair]> {
    bytemuck::try_cast_slice(buf).ok()
}
