use crate::intersect::binary_search::search;
use crate::intersect::{by_length, Intersect};
use crate::posting_list::PostingList;

/// Outcome of an exponential probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Gallop {
    /// The first id not less than the target lies in `ids[lo..=hi]`.
    Bound { lo: usize, hi: usize },
    /// Every id from the start position on is less than the target.
    Exhausted,
}

/// Probes `ids` at `start`, `start + 1`, `start + 2`, `start + 4`, ... until an
/// id not less than `target` shows up.
///
/// A probe past the end is clamped to the last position. `start` must be in
/// range.
pub(crate) fn gallop(ids: &[i64], target: i64, start: usize) -> Gallop {
    debug_assert!(start < ids.len());

    if ids[start] >= target {
        return Gallop::Bound { lo: start, hi: start };
    }

    let last = ids.len() - 1;
    // ids[below] < target always holds.
    let mut below = start;
    let mut step = 1;
    loop {
        let pos = start.saturating_add(step);
        if pos >= last {
            if ids[last] < target {
                return Gallop::Exhausted;
            }
            return Gallop::Bound { lo: below + 1, hi: last };
        }
        if ids[pos] >= target {
            return Gallop::Bound { lo: below + 1, hi: pos };
        }
        below = pos;
        step *= 2;
    }
}

/// Galloping (exponential) search of each driver id in the longer list.
///
/// The shorter list drives. For each of its ids, the longer list is probed
/// with doubling gaps from the current cursor, which bounds the target within
/// `O(log d)` probes for a distance `d`, and the bounded window is then
/// binary-searched. Once the longer list has no id left that reaches a driver
/// id, no later driver id can match either, and the intersection stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Galloping;

impl Intersect for Galloping {
    fn intersect(&self, l1: &PostingList, l2: &PostingList) -> PostingList {
        let (short, long) = by_length(l1, l2);
        let mut ret = PostingList::with_capacity(short.len());
        let ids = long.ids();

        let (mut i1, mut i2) = (0, 0);
        while i1 < short.len() && i2 < ids.len() {
            let id = short.id(i1);
            let Gallop::Bound { lo, hi } = gallop(ids, id, i2) else {
                log::trace!("galloping stopped at driver position {} of {}", i1, short.len());
                break;
            };
            let probe = search(ids, id, lo, hi + 1);
            i2 = probe.next;
            if probe.found {
                ret.add_posting(id, short.score(i1).wrapping_add(long.score(i2 - 1)));
            }
            i1 += 1;
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::intersect::tests::{example_a, example_b, example_c};

    #[test]
    fn test_gallop_bounds() {
        let ids: Vec<i64> = (0..20).map(|i| i * 10).collect();

        assert_eq!(gallop(&ids, 0, 0), Gallop::Bound { lo: 0, hi: 0 });
        assert_eq!(gallop(&ids, 5, 0), Gallop::Bound { lo: 1, hi: 1 });
        // Probes 1, 2, 4, 8 (id 80 >= 75).
        assert_eq!(gallop(&ids, 75, 0), Gallop::Bound { lo: 5, hi: 8 });
        assert_eq!(gallop(&ids, 80, 0), Gallop::Bound { lo: 5, hi: 8 });
        // Probe 16 falls short, 32 is clamped to the last position.
        assert_eq!(gallop(&ids, 185, 0), Gallop::Bound { lo: 17, hi: 19 });
        assert_eq!(gallop(&ids, 190, 3), Gallop::Bound { lo: 12, hi: 19 });
    }

    #[test]
    fn test_gallop_exhausted() {
        let ids = [1, 2, 3, 4, 5, 6];
        assert_eq!(gallop(&ids, 7, 0), Gallop::Exhausted);
        assert_eq!(gallop(&ids, 100, 5), Gallop::Exhausted);
        assert_eq!(gallop(&ids, 6, 5), Gallop::Bound { lo: 5, hi: 5 });
    }

    #[test]
    fn test_gallop_last_element() {
        // The probe sequence 1, 2, 4, 8 skips position 5; clamping must not.
        let ids = [1, 2, 3, 4, 5, 6];
        assert_eq!(gallop(&ids, 6, 0), Gallop::Bound { lo: 5, hi: 5 });
        let probe = search(&ids, 6, 5, 6);
        assert!(probe.found);
        assert_eq!(probe.next, 6);
    }

    #[test]
    fn test_intersect() {
        let ret = Galloping.intersect(&example_a(), &example_b());
        assert_eq!(ret.to_string(), "[(2, 9), (6, 5)]");
        assert_eq!(Galloping.intersect(&example_a(), &example_c()).to_string(), "[]");
    }

    #[test]
    fn test_short_circuit() {
        let short = PostingList::from_pairs([(3, 1), (50, 1), (60, 1), (70, 1)]);
        let long = PostingList::from_pairs((0..10).map(|i| (i, 1)));
        assert_eq!(gallop(long.ids(), 50, 4), Gallop::Exhausted);
        assert_eq!(Galloping.intersect(&short, &long).to_string(), "[(3, 2)]");
    }

    #[test]
    fn test_match_at_end() {
        let short = PostingList::from_pairs([(6, 1)]);
        let long = PostingList::from_pairs((1..=6).map(|i| (i, 1)));
        assert_eq!(Galloping.intersect(&short, &long).to_string(), "[(6, 2)]");
    }

    #[test]
    fn test_empty() {
        let empty = PostingList::new();
        assert!(Galloping.intersect(&empty, &example_b()).is_empty());
        assert!(Galloping.intersect(&example_b(), &empty).is_empty());
    }
}
