//! Truthiness predicate for sequence elements.
//!
//! Each element kind carries its own rule:
//! - `bool`: the value itself
//! - integers and floats: non-zero (NaN compares unequal to zero, so it is truthy)
//! - `Complex<T>`: non-zero real part or non-zero imaginary part
//! - `Option<T>`: `None` is falsy, `Some(v)` defers to `v`
//! - strings: non-empty
//! - `serde_json::Value` (feature `json`): `null`, `false`, `0` and `""` are
//!   falsy; arrays and objects are always truthy

use num_complex::Complex;
use num_traits::{Num, Zero};

/// Kind-dependent boolean interpretation of a value.
pub trait Truthy {
    fn is_truthy(&self) -> bool;

    #[inline(always)]
    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for bool {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_num {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                #[inline(always)]
                fn is_truthy(&self) -> bool {
                    !self.is_zero()
                }
            }
        )*
    };
}

impl_truthy_num!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<T: Clone + Num> Truthy for Complex<T> {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        // Complex::is_zero requires both parts to be zero.
        !self.is_zero()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        matches!(self, Some(v) if v.is_truthy())
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

#[cfg(feature = "json")]
impl Truthy for serde_json::Value {
    fn is_truthy(&self) -> bool {
        use serde_json::Value;
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => {
                // Integers are compared exactly; as_f64 would lose u64/i64 precision.
                if let Some(i) = n.as_i64() {
                    i != 0
                } else if let Some(u) = n.as_u64() {
                    u != 0
                } else {
                    n.as_f64().map_or(true, |f| f != 0.0)
                }
            }
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}
