//! Numeric kinds for progressions and averaging.
//!
//! Both traits form a fixed table over the built-in numeric types:
//!
//! | Type | [`Progression`] | [`Average::Output`] |
//! |------|-----------------|---------------------|
//! | `i8`..`i128`, `isize` | yes | `f64` |
//! | `u8`..`u128`, `usize` | yes | `f64` |
//! | `f32` | yes | `f32` |
//! | `f64` | yes | `f64` |
//!
//! Any other element type is rejected at compile time.

mod sealed {
    pub trait Sealed {}
}

/// Element types a numeric progression can walk over.
///
/// Sealed: only the built-in integer and floating-point types implement it.
pub trait Progression: sealed::Sealed + Copy + PartialOrd {
    /// The additive identity.
    fn zero() -> Self;

    /// The default step.
    fn one() -> Self;

    /// Absolute value, saturating for the most negative signed integer.
    fn magnitude(self) -> Self;

    /// The value `index` steps of `step` away from `self` in the direction of
    /// `bound`, clamped so it never overshoots `bound`.
    ///
    /// `step` is a magnitude and must be non-negative.
    fn step_toward(self, step: Self, index: usize, bound: Self) -> Self;
}

/// Numeric promotion used by [`Sequence::average`](crate::Sequence::average).
pub trait Average: Sized {
    /// The promoted result type.
    type Output;

    /// Averages `values`, or returns zero when there are none.
    fn average<I: IntoIterator<Item = Self>>(values: I) -> Self::Output;
}

// Offsets are computed in the unsigned counterpart `$u`, which holds any
// distance between two values of `$t`.
macro_rules! int_progression {
    ($($t:ty => $u:ty, $abs:expr, $add:ident, $sub:ident);* $(;)?) => {$(
        impl sealed::Sealed for $t {}

        impl Progression for $t {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn magnitude(self) -> Self {
                let abs: fn($t) -> $t = $abs;
                abs(self)
            }

            fn step_toward(self, step: Self, index: usize, bound: Self) -> Self {
                let span = self.abs_diff(bound);
                let offset = <$u>::try_from(index)
                    .ok()
                    .and_then(|i| (step as $u).checked_mul(i))
                    .filter(|o| *o <= span);
                match offset {
                    Some(o) if self <= bound => self.$add(o),
                    Some(o) => self.$sub(o),
                    None => bound,
                }
            }
        }

        impl Average for $t {
            type Output = f64;

            fn average<I: IntoIterator<Item = Self>>(values: I) -> f64 {
                let (sum, count) = values
                    .into_iter()
                    .fold((0.0f64, 0usize), |(sum, count), v| (sum + v as f64, count + 1));
                if count > 0 {
                    sum / count as f64
                } else {
                    0.0
                }
            }
        }
    )*};
}

int_progression! {
    i8 => u8, |v| v.checked_abs().unwrap_or(i8::MAX), wrapping_add_unsigned, wrapping_sub_unsigned;
    i16 => u16, |v| v.checked_abs().unwrap_or(i16::MAX), wrapping_add_unsigned, wrapping_sub_unsigned;
    i32 => u32, |v| v.checked_abs().unwrap_or(i32::MAX), wrapping_add_unsigned, wrapping_sub_unsigned;
    i64 => u64, |v| v.checked_abs().unwrap_or(i64::MAX), wrapping_add_unsigned, wrapping_sub_unsigned;
    i128 => u128, |v| v.checked_abs().unwrap_or(i128::MAX), wrapping_add_unsigned, wrapping_sub_unsigned;
    isize => usize, |v| v.checked_abs().unwrap_or(isize::MAX), wrapping_add_unsigned, wrapping_sub_unsigned;
    u8 => u8, |v| v, wrapping_add, wrapping_sub;
    u16 => u16, |v| v, wrapping_add, wrapping_sub;
    u32 => u32, |v| v, wrapping_add, wrapping_sub;
    u64 => u64, |v| v, wrapping_add, wrapping_sub;
    u128 => u128, |v| v, wrapping_add, wrapping_sub;
    usize => usize, |v| v, wrapping_add, wrapping_sub;
}

macro_rules! float_progression {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Progression for $t {
            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn magnitude(self) -> Self {
                self.abs()
            }

            fn step_toward(self, step: Self, index: usize, bound: Self) -> Self {
                let offset = step * index as $t;
                if self <= bound {
                    let next = self + offset;
                    if next > bound { bound } else { next }
                } else {
                    let next = self - offset;
                    if next < bound { bound } else { next }
                }
            }
        }

        impl Average for $t {
            type Output = $t;

            fn average<I: IntoIterator<Item = Self>>(values: I) -> $t {
                let (sum, count) = values
                    .into_iter()
                    .fold((0.0, 0usize), |(sum, count): ($t, usize), v| (sum + v, count + 1));
                if count > 0 {
                    sum / count as $t
                } else {
                    0.0
                }
            }
        }
    )*};
}

float_progression!(f32, f64);
