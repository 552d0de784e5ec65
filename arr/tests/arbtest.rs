use arbitrary::Unstructured;
use arbtest::{arbitrary, arbtest};
use seqkit_arr::{
    clamp_range, copy, range_step, scan, set_difference, skip, slice_clamped,
    sorted_num_set_difference, take_last, to_inserted, to_range_filled, to_removed, to_reversed,
    to_unshifted, to_updated, zip, Step,
};
use seqkit_utils::arb::{arb_offset, arb_sorted_vec, arb_vec};

#[derive(arbitrary::Arbitrary, Debug)]
enum EditOp {
    Update(usize, i32),
    Insert(usize, i32),
    Remove(usize),
    Unshift(i32),
    Fill(i8, i8, i32),
    Reverse,
    Skip(u8),
    TakeLast(u8),
}

impl EditOp {
    fn apply_to_vec(&self, vec: &mut Vec<i32>) {
        match self {
            EditOp::Update(i, x) => {
                if let Some(slot) = vec.get_mut(*i) {
                    *slot = *x;
                }
            }
            EditOp::Insert(i, x) => vec.insert((*i).min(vec.len()), *x),
            EditOp::Remove(i) => {
                if *i < vec.len() {
                    vec.remove(*i);
                }
            }
            EditOp::Unshift(x) => vec.insert(0, *x),
            EditOp::Fill(start, end, x) => {
                let resolve = |bound: i8| {
                    if bound < 0 {
                        vec.len().saturating_sub(bound.unsigned_abs() as usize)
                    } else {
                        (bound as usize).min(vec.len())
                    }
                };
                let (start, end) = (resolve(*start), resolve(*end));
                for elt in vec.iter_mut().take(end).skip(start) {
                    *elt = *x;
                }
            }
            EditOp::Reverse => vec.reverse(),
            EditOp::Skip(n) => {
                vec.drain(..(*n as usize).min(vec.len()));
            }
            EditOp::TakeLast(n) => {
                vec.drain(..vec.len().saturating_sub(*n as usize));
            }
        }
    }

    fn apply(&self, seq: &[i32]) -> Vec<i32> {
        match self {
            EditOp::Update(i, x) => to_updated(seq, *i, |_| *x),
            EditOp::Insert(i, x) => to_inserted(seq, *i, *x),
            EditOp::Remove(i) => to_removed(seq, *i),
            EditOp::Unshift(x) => to_unshifted(seq, *x),
            EditOp::Fill(start, end, x) => match to_range_filled(seq, *x, *start, *end) {
                Ok(filled) => filled,
                Err(err) => panic!("integer bounds were rejected: {err}"),
            },
            EditOp::Reverse => to_reversed(seq),
            EditOp::Skip(n) => skip(seq, *n as usize),
            EditOp::TakeLast(n) => take_last(seq, *n as usize),
        }
    }
}

#[test]
fn edits_match_in_place_mutations() {
    arbtest(|u| {
        let mut vec: Vec<i32> = arb_vec(u)?;
        let mut seq = vec.clone();
        let ops: Vec<EditOp> = u.arbitrary()?;

        for op in ops {
            let before = seq.clone();
            op.apply_to_vec(&mut vec);
            let next = op.apply(&seq);
            assert_eq!(seq, before, "{op:?} mutated its input");
            seq = next;

            assert_eq!(vec, seq, "after {op:?}");
        }

        Ok(())
    });
}

#[test]
fn range_matches_naive_loop() {
    arbtest(|u| {
        let start = i64::from(u.arbitrary::<i16>()?);
        let end = i64::from(u.arbitrary::<i16>()?);
        let step: i8 = u.arbitrary()?;
        let Some(step) = Step::new(i64::from(step)) else {
            return Ok(());
        };

        let mut expected = Vec::new();
        let mut current = start;
        while (step.is_ascending() && current < end) || (!step.is_ascending() && current > end) {
            expected.push(current);
            current += step.get();
        }

        let progression = seqkit_arr::Progression::new(start, end, step);
        assert_eq!(
            progression.size_hint(),
            (expected.len(), Some(expected.len()))
        );
        assert_eq!(range_step(start, end, step), expected);

        Ok(())
    });
}

#[test]
fn clamping_is_total() {
    arbtest(|u| {
        let vec: Vec<u32> = arb_vec(u)?;
        let (start, end) = if u.arbitrary()? {
            (u.arbitrary::<i64>()?, u.arbitrary::<i64>()?)
        } else {
            (arb_offset(u, -20, 20)?, arb_offset(u, -20, 20)?)
        };

        let range = clamp_range(vec.len(), start, end);
        assert!(range.start() <= range.end() && range.end() <= vec.len());

        let sliced = slice_clamped(&vec, start, end);
        assert_eq!(sliced.len(), range.len());
        assert_eq!(sliced, vec[range.start()..range.end()]);

        Ok(())
    });
}

#[test]
fn zip_stops_at_the_shorter_side() {
    arbtest(|u| {
        let a: Vec<u8> = arb_vec(u)?;
        let b: Vec<char> = arb_vec(u)?;
        let zipped = zip(&a, &b);

        assert_eq!(zipped.len(), a.len().min(b.len()));
        for (i, (x, y)) in zipped.into_iter().enumerate() {
            assert_eq!((x, y), (a[i], b[i]));
        }

        Ok(())
    });
}

#[test]
fn scan_keeps_every_accumulator() {
    arbtest(|u| {
        let vec: Vec<i32> = arb_vec(u)?;
        let seed: i64 = u.arbitrary::<i32>()?.into();
        let out = scan(&vec, |acc, x, _| acc + i64::from(*x), seed);

        assert_eq!(out.len().get(), vec.len() + 1);
        assert_eq!(*out.head(), seed);
        for (i, x) in vec.iter().enumerate() {
            assert_eq!(out[i + 1], out[i] + i64::from(*x));
        }

        Ok(())
    });
}

#[test]
fn sorted_difference_agrees_with_linear_difference() {
    arbtest(|u| {
        let mut a: Vec<i16> = arb_sorted_vec(u)?;
        let mut b: Vec<i16> = arb_sorted_vec(u)?;
        a.dedup();
        b.dedup();

        let merged = sorted_num_set_difference(&a, &b);
        assert_eq!(merged, set_difference(&a, &b));
        assert!(merged.windows(2).all(|w| w[0] < w[1]));

        Ok(())
    });
}

#[test]
fn copy_is_a_fresh_equal_sequence() {
    fn check(u: &mut Unstructured<'_>) -> arbitrary::Result<()> {
        let vec: Vec<String> = arb_vec(u)?;
        let copied = copy(&vec);

        assert_eq!(copied, vec);
        if !vec.is_empty() {
            assert_ne!(copied.as_ptr(), vec.as_ptr());
        }
        Ok(())
    }

    arbtest(check);
}
