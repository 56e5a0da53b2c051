use crate::intersect::{output_for, Intersect};
use crate::posting_list::PostingList;

/// Catch-up merge that follows precomputed skip pointers.
///
/// Works like [`LessConditional`](crate::intersect::LessConditional), but a
/// catch-up scan jumps straight to the target of the current position's skip
/// pointer whenever the id found there is still below the id being chased.
/// Lists without pointers are scanned one posting at a time, so the pointers
/// affect only the work done, never the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkipPointers;

/// Advances `i` to the first position of `list` whose id is not less than
/// `target`, or to the end of the list.
#[inline(always)]
fn catch_up(list: &PostingList, mut i: usize, target: i64) -> usize {
    let ids = list.ids();
    while i < ids.len() && ids[i] < target {
        match list.skip_pointer(i) {
            Some(next) if ids.get(next).is_some_and(|&id| id < target) => i = next,
            _ => i += 1,
        }
    }
    i
}

impl Intersect for SkipPointers {
    fn intersect(&self, l1: &PostingList, l2: &PostingList) -> PostingList {
        let mut ret = output_for(l1, l2);
        let (n1, n2) = (l1.len(), l2.len());

        let (mut i1, mut i2) = (0, 0);
        while i1 < n1 && i2 < n2 {
            i1 = catch_up(l1, i1, l2.id(i2));
            if i1 == n1 {
                break;
            }

            i2 = catch_up(l2, i2, l1.id(i1));
            if i2 == n2 {
                break;
            }

            if l1.id(i1) == l2.id(i2) {
                ret.add_posting(l1.id(i1), l1.score(i1).wrapping_add(l2.score(i2)));
                i1 += 1;
                i2 += 1;
            }
        }
        ret
    }
}
