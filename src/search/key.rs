//! Integer key types that interpolation search can probe over.

use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// An integer type whose values can be interpolated between.
///
/// Every implementor widens losslessly into `i128`, so the distance between
/// any two values is exact and below 2^64. This keeps the position estimate
/// free of overflow for all supported widths.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `isize`, `u8`, `u16`, `u32`,
/// `u64` and `usize`. The trait is sealed.
///
/// # Examples
///
/// ```rust
/// use interpolation_search::search::InterpolationKey;
///
/// assert_eq!(InterpolationKey::distance_from(i64::MAX, i64::MIN), u128::from(u64::MAX));
/// assert_eq!(40_u8.distance_from(10), 30);
/// ```
pub trait InterpolationKey: Copy + Ord + Debug + sealed::Sealed {
    /// Converts the value into `i128` without loss.
    fn widen(self) -> i128;

    /// Returns `self - base` as an unsigned distance.
    ///
    /// Callers must ensure `self >= base`; otherwise the absolute distance is
    /// returned.
    #[inline]
    fn distance_from(self, base: Self) -> u128 {
        (self.widen() - base.widen()).unsigned_abs()
    }
}

macro_rules! impl_interpolation_key {
    ($($key:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $key {}

            impl InterpolationKey for $key {
                #[inline]
                fn widen(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_interpolation_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
