/// Left-to-right application of a function to a sequence.
///
/// Together with the curried forms in [`op`](crate::op), this lets a chain of
/// operations read in the order it runs:
///
/// ```rust
/// use seqkit_arr::{op, Pipe};
///
/// let xs = vec![1, 2, 3, 4, 5];
/// let middle = xs.pipe(op::skip(1)).pipe(op::skip_last(1));
/// assert_eq!(middle, vec![2, 3, 4]);
/// assert_eq!(middle.pipe(op::sum()), 9);
/// ```
///
/// The trait is implemented for slices. Vectors, arrays and
/// [`NonEmpty`](crate::NonEmpty) reach it through auto-deref, so the
/// receiver is always borrowed and never consumed.
pub trait Pipe {
    fn pipe<'a, R>(&'a self, f: impl FnOnce(&'a Self) -> R) -> R {
        f(self)
    }
}

impl<T> Pipe for [T] {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{op, NonEmpty};

    #[test]
    fn receivers() {
        let arr = [3, 1, 2];
        assert_eq!(arr.pipe(op::to_sorted()), vec![1, 2, 3]);
        assert_eq!(arr[..].pipe(<[i32]>::len), 3);

        let xs = NonEmpty::new(1, vec![2]);
        assert_eq!(xs.pipe(op::to_reversed()), vec![2, 1]);
        assert_eq!(xs.pipe(op::head()), Some(&1));
    }

    #[test]
    fn chains() {
        let words = vec!["a", "bb", "cc", "ddd"];
        let lengths = words
            .pipe(op::map(|w: &&str, _| w.len()))
            .pipe(op::uniq());
        assert_eq!(lengths, vec![1, 2, 3]);
    }
}
