//! Chunking and pairing.

/// Splits `seq` into consecutive chunks of `chunk_size` elements. The last
/// chunk holds the remainder and may be shorter.
///
/// A `chunk_size` below 2 yields no chunks at all.
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::partition;
/// assert_eq!(partition(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(partition(&[1, 2, 3], 1).is_empty());
/// ```
pub fn partition<T: Clone>(seq: &[T], chunk_size: usize) -> Vec<Vec<T>> {
    if chunk_size < 2 {
        return Vec::new();
    }
    seq.chunks(chunk_size).map(<[T]>::to_vec).collect()
}

/// Pairs up the elements of `a` and `b` by position, stopping at the end of
/// the shorter sequence.
pub fn zip<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<(A, B)> {
    a.iter().cloned().zip(b.iter().cloned()).collect()
}

/// Every element paired with its index.
pub fn entries<T: Clone>(seq: &[T]) -> Vec<(usize, T)> {
    seq.iter().cloned().enumerate().collect()
}
