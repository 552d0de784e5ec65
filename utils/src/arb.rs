//! Input generators for `arbtest` property tests.

use arbitrary::{Arbitrary, Result, Unstructured};

/// A vector of arbitrary elements, with the length drawn first so that the
/// fuzzer can shrink it independently.
pub fn arb_vec<'a, T: Arbitrary<'a>>(u: &mut Unstructured<'a>) -> Result<Vec<T>> {
    let len = u.arbitrary_len::<T>()?;
    (0..len).map(|_| u.arbitrary()).collect()
}

/// Like [`arb_vec`], sorted in ascending order.
pub fn arb_sorted_vec<'a, T: Arbitrary<'a> + Ord>(u: &mut Unstructured<'a>) -> Result<Vec<T>> {
    let mut xs = arb_vec(u)?;
    xs.sort();
    Ok(xs)
}

/// An integer in `[lo, hi]`, used for bounds and indices that should mostly
/// land near the sequence under test.
pub fn arb_offset(u: &mut Unstructured<'_>, lo: i64, hi: i64) -> Result<i64> {
    u.int_in_range(lo..=hi)
}
