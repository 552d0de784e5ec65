//! Tagged integer types for lengths, positions and steps.
//!
//! A bare `usize` or `i64` says nothing about what it measures. The operations
//! of this crate take a [`Size`] where they expect a length or a count, an
//! [`Index`] where they expect a position in a sequence, and a [`Step`] where
//! they expect the stride of a progression. Each type has a validated
//! `TryFrom` constructor from the signed integer types, so a negative length
//! or a zero step is rejected at the boundary instead of deep inside an
//! algorithm.

use std::{
    fmt,
    num::{NonZeroI64, NonZeroUsize},
};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A non-negative length or count.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Size(usize);

impl Size {
    pub const ZERO: Size = Size(0);

    pub const fn new(n: usize) -> Self {
        Size(n)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// Subtracts `rhs`, stopping at zero.
    ///
    /// ```rust
    /// # use seqkit_arr::num::Size;
    /// assert_eq!(Size::new(3).saturating_sub(5), Size::ZERO);
    /// assert_eq!(Size::new(5).saturating_sub(3), Size::new(2));
    /// ```
    pub fn saturating_sub(self, rhs: impl Into<Size>) -> Size {
        Size(self.0.saturating_sub(rhs.into().0))
    }

    pub fn saturating_add(self, rhs: impl Into<Size>) -> Size {
        Size(self.0.saturating_add(rhs.into().0))
    }

    pub fn checked_add(self, rhs: impl Into<Size>) -> Option<Size> {
        self.0.checked_add(rhs.into().0).map(Size)
    }
}

/// A length that is statically known to be at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositiveSize(NonZeroUsize);

impl PositiveSize {
    pub const ONE: PositiveSize = PositiveSize(NonZeroUsize::MIN);

    /// Returns `None` if `n` is zero.
    pub fn new(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(PositiveSize)
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub fn saturating_add(self, rhs: impl Into<Size>) -> PositiveSize {
        PositiveSize(self.0.saturating_add(rhs.into().get()))
    }
}

/// A non-negative position inside a sequence.
///
/// Positions past the end are representable: the structural edit operations
/// decide for themselves whether such a position clamps or is a no-op.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Index(usize);

impl Index {
    pub const fn new(i: usize) -> Self {
        Index(i)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

/// The stride of an arithmetic progression. Never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Step(NonZeroI64);

impl Step {
    pub const ONE: Step = match NonZeroI64::new(1) {
        Some(one) => Step(one),
        None => unreachable!(),
    };

    /// Returns `None` if `step` is zero.
    pub fn new(step: i64) -> Option<Self> {
        NonZeroI64::new(step).map(Step)
    }

    pub const fn get(self) -> i64 {
        self.0.get()
    }

    pub const fn is_ascending(self) -> bool {
        self.0.get() > 0
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::ONE
    }
}

impl From<usize> for Size {
    fn from(n: usize) -> Self {
        Size(n)
    }
}

impl From<Size> for usize {
    fn from(n: Size) -> Self {
        n.0
    }
}

impl From<PositiveSize> for Size {
    fn from(n: PositiveSize) -> Self {
        Size(n.get())
    }
}

impl From<NonZeroUsize> for PositiveSize {
    fn from(n: NonZeroUsize) -> Self {
        PositiveSize(n)
    }
}

impl TryFrom<usize> for PositiveSize {
    type Error = Error;

    fn try_from(n: usize) -> Result<Self> {
        PositiveSize::new(n)
            .ok_or_else(|| Error::invalid_argument("size", "expected a positive integer, got 0"))
    }
}

impl From<usize> for Index {
    fn from(i: usize) -> Self {
        Index(i)
    }
}

impl From<Index> for usize {
    fn from(i: Index) -> Self {
        i.0
    }
}

impl From<NonZeroI64> for Step {
    fn from(step: NonZeroI64) -> Self {
        Step(step)
    }
}

impl TryFrom<i64> for Step {
    type Error = Error;

    fn try_from(step: i64) -> Result<Self> {
        Step::new(step).ok_or_else(|| Error::invalid_argument("step", "a step cannot be zero"))
    }
}

macro_rules! impl_try_from_signed {
    ($($int:ty),*) => {
        $(
            impl TryFrom<$int> for Size {
                type Error = Error;

                fn try_from(n: $int) -> Result<Self> {
                    usize::try_from(n).map(Size).map_err(|_| {
                        Error::invalid_argument(
                            "size",
                            format!("expected a non-negative integer, got {n}"),
                        )
                    })
                }
            }

            impl TryFrom<$int> for PositiveSize {
                type Error = Error;

                fn try_from(n: $int) -> Result<Self> {
                    usize::try_from(n)
                        .ok()
                        .and_then(PositiveSize::new)
                        .ok_or_else(|| {
                            Error::invalid_argument(
                                "size",
                                format!("expected a positive integer, got {n}"),
                            )
                        })
                }
            }

            impl TryFrom<$int> for Index {
                type Error = Error;

                fn try_from(i: $int) -> Result<Self> {
                    usize::try_from(i).map(Index).map_err(|_| {
                        Error::invalid_argument(
                            "index",
                            format!("expected a non-negative integer, got {i}"),
                        )
                    })
                }
            }
        )*
    };
}

impl_try_from_signed!(i8, i16, i32, i64, isize);

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for PositiveSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A value accepted as the bound of a range fill.
///
/// Bounds may arrive as floats from loosely-typed sources (JSON documents,
/// configuration values), so every primitive numeric type is accepted. Only
/// values that denote an integer representable as an `i64` are valid.
pub trait FillBound: Copy + fmt::Display {
    /// Converts the bound, reporting `name` as the offending argument on
    /// failure.
    fn to_offset(self, name: &'static str) -> Result<i64>;
}

macro_rules! impl_fill_bound_int {
    ($($int:ty),*) => {
        $(
            impl FillBound for $int {
                fn to_offset(self, name: &'static str) -> Result<i64> {
                    i64::try_from(self).map_err(|_| {
                        Error::invalid_argument(name, format!("{self} does not fit in an i64"))
                    })
                }
            }
        )*
    };
}

impl_fill_bound_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// 2^63, exactly representable as a float.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl FillBound for f64 {
    fn to_offset(self, name: &'static str) -> Result<i64> {
        if !self.is_finite() || self.fract() != 0.0 {
            return Err(Error::invalid_argument(
                name,
                format!("expected an integer, got {self}"),
            ));
        }
        if self < -I64_UPPER_BOUND || self >= I64_UPPER_BOUND {
            return Err(Error::invalid_argument(
                name,
                format!("{self} does not fit in an i64"),
            ));
        }
        Ok(self as i64)
    }
}

impl FillBound for f32 {
    fn to_offset(self, name: &'static str) -> Result<i64> {
        f64::from(self).to_offset(name)
    }
}

/// Rewrites a possibly negative `index` (counted from the end when negative)
/// and checks it against `[0, len)`.
pub(crate) fn resolve_index(len: usize, index: isize) -> Option<usize> {
    let resolved = match usize::try_from(index) {
        Ok(i) => i,
        Err(_) => len.checked_sub(index.unsigned_abs())?,
    };
    (resolved < len).then_some(resolved)
}

/// Clamps `offset` into `[lo, hi]`. Requires `lo <= hi`.
pub(crate) fn clamp_offset(offset: i64, lo: usize, hi: usize) -> usize {
    debug_assert!(lo <= hi);
    match usize::try_from(offset) {
        Ok(offset) => offset.clamp(lo, hi),
        Err(_) => lo,
    }
}

/// Interprets `offset` relative to a sequence of length `len`: negative
/// offsets count from the end. The result is clamped into `[0, len]`.
pub(crate) fn relative_offset(len: usize, offset: i64) -> usize {
    if offset < 0 {
        let back = usize::try_from(offset.unsigned_abs()).unwrap_or(usize::MAX);
        len.saturating_sub(back)
    } else {
        clamp_offset(offset, 0, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn validated_constructors() {
        assert_eq!(Size::try_from(3i64), Ok(Size::new(3)));
        assert_eq!(
            Size::try_from(-1i32).map_err(|e| e.kind()),
            Err(ErrorKind::InvalidArgument)
        );
        assert_eq!(PositiveSize::new(0), None);
        assert_eq!(PositiveSize::try_from(4i64).map(PositiveSize::get), Ok(4));
        assert!(PositiveSize::try_from(0usize).is_err());
        assert!(Index::try_from(-2isize).is_err());
        assert_eq!(Step::ONE.get(), 1);
        assert_eq!(Step::default(), Step::ONE);
        assert!(Step::try_from(0i64).is_err());
        assert_eq!(Step::new(-2).map(Step::is_ascending), Some(false));
    }

    #[test]
    fn size_arithmetic() {
        assert_eq!(Size::new(2).saturating_add(3), Size::new(5));
        assert_eq!(Size::new(usize::MAX).checked_add(1), None);
        assert_eq!(PositiveSize::ONE.saturating_add(2).get(), 3);
        assert_eq!(usize::from(Size::from(PositiveSize::ONE)), 1);
    }

    #[test]
    fn fill_bounds() {
        assert_eq!(3u8.to_offset("start"), Ok(3));
        assert_eq!((-3i64).to_offset("start"), Ok(-3));
        assert_eq!(2.0f64.to_offset("start"), Ok(2));
        assert_eq!((-0.0f32).to_offset("end"), Ok(0));
        assert!(u64::MAX.to_offset("end").is_err());
        assert!(1.5f64.to_offset("start").is_err());
        assert!(f64::NAN.to_offset("start").is_err());
        assert!(f64::INFINITY.to_offset("end").is_err());
        assert!(1e19f64.to_offset("end").is_err());

        let Err(Error::InvalidArgument { name, .. }) = 0.25f32.to_offset("end") else {
            panic!("expected an invalid argument");
        };
        assert_eq!(name, "end");
    }

    #[test]
    fn index_resolution() {
        assert_eq!(resolve_index(3, 0), Some(0));
        assert_eq!(resolve_index(3, 2), Some(2));
        assert_eq!(resolve_index(3, 3), None);
        assert_eq!(resolve_index(3, -1), Some(2));
        assert_eq!(resolve_index(3, -3), Some(0));
        assert_eq!(resolve_index(3, -4), None);
        assert_eq!(resolve_index(0, 0), None);
        assert_eq!(resolve_index(0, -1), None);
        assert_eq!(resolve_index(3, isize::MIN), None);
    }

    #[test]
    fn offsets() {
        assert_eq!(clamp_offset(-5, 0, 4), 0);
        assert_eq!(clamp_offset(2, 3, 4), 3);
        assert_eq!(clamp_offset(i64::MAX, 0, 4), 4);
        assert_eq!(relative_offset(5, -2), 3);
        assert_eq!(relative_offset(5, -7), 0);
        assert_eq!(relative_offset(5, i64::MIN), 0);
        assert_eq!(relative_offset(5, 9), 5);
    }
}
