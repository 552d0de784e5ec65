use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use seqkit_arr::{
    at, group_by, index_of, join, op, range, scan, slice_clamped, sorted_num_set_difference,
    to_range_filled, to_updated, zip, Error, NonEmpty, Pipe, PositiveSize, Size, Step,
};

#[test]
fn ranges() {
    seqkit_utils::logging::init();

    assert_eq!(range(1, 5), vec![1, 2, 3, 4]);
    assert_eq!(range(5, 1), Vec::<i64>::new());
    assert_eq!(range(3, 3), Vec::<i64>::new());
    assert_eq!(
        seqkit_arr::range_step(10, 0, Step::try_from(-3i64).unwrap()),
        vec![10, 7, 4, 1]
    );
}

#[test]
fn clamped_slices() {
    assert_eq!(slice_clamped(&[0, 1, 2, 3, 4], -1, 6), vec![0, 1, 2, 3, 4]);
    assert_eq!(slice_clamped(&[0, 1, 2, 3, 4], 3, 1), Vec::<i32>::new());
    assert_eq!(slice_clamped(&[0, 1, 2, 3, 4], 1, 3), vec![1, 2]);
}

#[test]
fn sorted_difference() {
    seqkit_utils::logging::init();

    assert_eq!(
        sorted_num_set_difference(&[1, 2, 3, 5], &[2, 4, 5]),
        vec![1, 3]
    );
}

#[test]
fn prefix_sums() {
    let sums = scan(&[1, 2, 3], |acc, x, _| acc + x, 0);
    assert_eq!(sums.as_slice(), &[0, 1, 3, 6]);
    assert_eq!(*sums.max(), 6);
}

#[test]
fn zipped_pairs() {
    assert_eq!(
        zip(&[1, 2, 3], &["a", "b"]),
        vec![(1, "a"), (2, "b")]
    );
}

#[test]
fn update_out_of_range() {
    assert_eq!(to_updated(&[1, 2, 3], 10, |x| x * 2), vec![1, 2, 3]);
}

#[test]
fn invalid_arguments() {
    seqkit_utils::logging::init();

    assert_matches!(
        to_range_filled(&[1, 2, 3], 0, 0.5, 2),
        Err(Error::InvalidArgument { name: "start", .. })
    );
    assert_matches!(
        to_range_filled(&[1, 2, 3], 0, 0, f64::INFINITY),
        Err(Error::InvalidArgument { name: "end", .. })
    );
    assert_matches!(Size::try_from(-1i64), Err(Error::InvalidArgument { .. }));
    assert_matches!(Step::try_from(0i64), Err(Error::InvalidArgument { .. }));
    assert_matches!(
        NonEmpty::<u8>::try_from(Vec::new()),
        Err(Error::InvalidArgument { .. })
    );
}

#[test]
fn absence_is_not_an_error() {
    assert_eq!(at(&[1, 2, 3], 3), None);
    assert_eq!(index_of(&["x"], &"y"), None);
    assert_eq!(seqkit_arr::min::<u8>(&[]), None);
}

#[test]
fn direct_and_piped_calls_agree() {
    let words = vec!["kiwi", "fig", "pear", "plum", "lime"];

    let direct = seqkit_arr::take(&seqkit_arr::skip(&words, 1), 3);
    let piped = words.pipe(op::skip(1)).pipe(op::take(3));
    assert_eq!(direct, piped);
    assert_eq!(piped, vec!["fig", "pear", "plum"]);

    let lengths = words
        .pipe(op::group_by(|w: &&str, _| w.len()))
        .into_inner()
        .into_iter()
        .map(|(len, group)| (len, group.len()))
        .collect::<Vec<_>>();
    assert_eq!(lengths, vec![(4, 4), (3, 1)]);
    assert_eq!(
        group_by(&words, |w, _| w.len()).keys().collect::<Vec<_>>(),
        vec![&4, &3]
    );

    assert_eq!(
        words.pipe(op::join(", ")),
        Ok("kiwi, fig, pear, plum, lime".to_owned())
    );
}

#[test]
fn non_empty_results() {
    let repeated = NonEmpty::repeat(PositiveSize::try_from(3).unwrap(), 'x');
    assert_eq!(join(&repeated, ""), Ok("xxx".to_owned()));
    assert_eq!(repeated.len().get(), 3);
}
