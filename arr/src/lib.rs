//! Immutable operations on sequences.
//!
//! Every operation takes its input sequence by reference (`&[T]`) and returns
//! a freshly allocated result, so inputs are never mutated. Out-of-range
//! indices and bounds never panic: reads return [`Option`], slices clamp, and
//! edits past the end leave the copy unchanged. The only fallible operations
//! are the ones whose *arguments* can be malformed (see [`Error`]).
//!
//! Each operation exists as a free function taking the sequence first, and as
//! a curried form in [`op`] taking everything but the sequence. The curried
//! forms chain with [`Pipe`]:
//!
//! ```rust
//! use seqkit_arr::{op, range, scan, Pipe};
//!
//! let xs = range(1, 6);
//! assert_eq!(scan(&xs, |acc, x, _| acc + x, 0i64).as_slice(), &[0, 1, 3, 6, 10, 15]);
//!
//! let evens = xs.pipe(op::filter(|x: &i64, _| x % 2 == 0)).pipe(op::to_reversed());
//! assert_eq!(evens, vec![4, 2]);
//! ```
//!
//! Lengths, indices and steps are carried by the newtypes of [`num`], which
//! validate their invariants at construction.

pub mod access;
pub mod edit;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod map;
pub mod memo;
pub mod nonempty;
pub mod num;
pub mod op;
pub mod partition;
pub mod pipe;
pub mod range;
pub mod reduce;
pub mod set;
pub mod slice;
pub mod text;

pub use access::{
    at, find, find_index, find_last, find_last_index, head, includes, index_of, index_of_from,
    last, last_index_of, last_index_of_from,
};
pub use edit::{
    concat, filter, filter_not, flat_map, flatten, map, to_filled, to_inserted, to_pushed,
    to_range_filled, to_removed, to_reversed, to_sorted, to_sorted_by, to_sorted_by_key,
    to_unshifted, to_updated,
};
pub use error::{Error, ErrorKind, Result};
pub use map::OrderedMap;
pub use memo::Memo;
pub use nonempty::NonEmpty;
pub use num::{FillBound, Index, PositiveSize, Size, Step};
pub use partition::{entries, partition, zip};
pub use pipe::Pipe;
pub use range::{generate, new_array, range, range_step, seq, zeros, Progression};
pub use reduce::{
    count, count_by, every, foldl, foldr, group_by, max, max_by, max_by_key, min, min_by,
    min_by_key, scan, some, sum,
};
pub use set::{
    is_subset, is_superset, set_difference, set_intersection, sorted_num_set_difference, uniq,
    uniq_by,
};
pub use slice::{
    but_last, clamp_range, copy, skip, skip_last, slice_clamped, tail, take, take_last,
    ClampedRange,
};
pub use text::join;
