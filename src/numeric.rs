//! Numeric element types storable in a [`Vector`](crate::Vector).
//!
//! [`Numeric`] is implemented for every built-in integer kind (`i8`..`i64`,
//! `isize`, `u8`..`u64`, `usize`) and for `f32`/`f64`. Arithmetic goes
//! through the `wrapping_*` methods so integer overflow wraps the same way in
//! debug and release builds; float implementations use plain IEEE arithmetic.

use core::cmp::Ordering;
use core::fmt;

/// Base trait for all numeric vector elements.
///
/// Statistical results are produced by widening every element to `f64`
/// with [`Numeric::to_f64`].
pub trait Numeric:
    Copy + fmt::Debug + fmt::Display + PartialEq + PartialOrd + Default + Send + Sync + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;

    /// Widening conversion used by mean, norm, distance and friends.
    fn to_f64(self) -> f64;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Division; callers must reject a zero `rhs` first.
    fn wrapping_div(self, rhs: Self) -> Self;

    /// Natural total order: `Ord` for integers, IEEE `totalOrder` for floats.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Identity key for deduplication.
    ///
    /// Equal values map to the same key (`-0.0` and `0.0` included).
    /// Returns `None` for NaN, which is never equal to anything.
    fn dedup_key(self) -> Option<u64>;

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::zero()
    }
}

macro_rules! impl_numeric_int {
    ($($ty:ty),*) => {$(
        impl Numeric for $ty {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn one() -> Self {
                1
            }
            #[inline]
            #[allow(clippy::cast_precision_loss)]
            fn to_f64(self) -> f64 {
                self as f64
            }
            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }
            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$ty>::wrapping_sub(self, rhs)
            }
            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$ty>::wrapping_mul(self, rhs)
            }
            #[inline]
            fn wrapping_div(self, rhs: Self) -> Self {
                <$ty>::wrapping_div(self, rhs)
            }
            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
            #[inline]
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
            fn dedup_key(self) -> Option<u64> {
                Some(self as u64)
            }
        }
    )*};
}

macro_rules! impl_numeric_float {
    ($($ty:ty),*) => {$(
        impl Numeric for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }
            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                self + rhs
            }
            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                self - rhs
            }
            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                self * rhs
            }
            #[inline]
            fn wrapping_div(self, rhs: Self) -> Self {
                self / rhs
            }
            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                <$ty>::total_cmp(self, other)
            }
            #[inline]
            fn dedup_key(self) -> Option<u64> {
                if self.is_nan() {
                    None
                } else if self == 0.0 {
                    Some(0)
                } else {
                    Some(u64::from(self.to_bits()))
                }
            }
        }
    )*};
}

impl_numeric_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_numeric_float!(f32, f64);

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one() {
        assert_eq!(<f64 as Numeric>::zero(), 0.0);
        assert_eq!(<f32 as Numeric>::one(), 1.0);
        assert_eq!(<i32 as Numeric>::zero(), 0);
        assert_eq!(<u8 as Numeric>::one(), 1);
    }

    #[test]
    fn test_to_f64_widening() {
        assert_eq!(Numeric::to_f64(-3_i8), -3.0);
        assert_eq!(Numeric::to_f64(255_u8), 255.0);
        assert_eq!(Numeric::to_f64(1.5_f32), 1.5);
    }

    #[test]
    fn test_integer_overflow_wraps() {
        assert_eq!(Numeric::wrapping_add(i8::MAX, 1), i8::MIN);
        assert_eq!(Numeric::wrapping_sub(0_u8, 1), u8::MAX);
        assert_eq!(Numeric::wrapping_mul(200_u8, 2), 144);
        assert_eq!(Numeric::wrapping_div(i32::MIN, -1), i32::MIN);
    }

    #[test]
    fn test_float_arithmetic_is_ieee() {
        assert_eq!(Numeric::wrapping_add(f64::MAX, f64::MAX), f64::INFINITY);
        assert_eq!(Numeric::wrapping_div(1.0_f64, 4.0), 0.25);
    }

    #[test]
    fn test_total_cmp() {
        assert_eq!(Numeric::total_cmp(&1_i32, &2), Ordering::Less);
        assert_eq!(Numeric::total_cmp(&-0.0_f64, &0.0), Ordering::Less);
        assert_eq!(Numeric::total_cmp(&f64::NAN, &f64::INFINITY), Ordering::Greater);
    }

    #[test]
    fn test_dedup_key() {
        assert_eq!(Numeric::dedup_key(-1_i64), Numeric::dedup_key(-1_i64));
        assert_ne!(Numeric::dedup_key(1_i32), Numeric::dedup_key(2_i32));
        assert_eq!(Numeric::dedup_key(-0.0_f64), Numeric::dedup_key(0.0_f64));
        assert_eq!(Numeric::dedup_key(f32::NAN), None);
    }

    #[test]
    fn test_is_zero() {
        assert!(Numeric::is_zero(0_u16));
        assert!(Numeric::is_zero(-0.0_f32));
        assert!(!Numeric::is_zero(1e-300_f64));
    }
}
