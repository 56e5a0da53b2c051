use crate::intersect::{by_length, Intersect};
use crate::posting_list::PostingList;

/// Outcome of a search for one id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Probe {
    /// Whether the id was found.
    pub found: bool,
    /// The matched position plus one, or the first position whose id is
    /// greater than the target. The search for the next, larger id resumes
    /// here.
    pub next: usize,
}

/// Binary-searches `ids[start..end]` for `target`.
#[inline(always)]
pub(crate) fn search(ids: &[i64], target: i64, start: usize, end: usize) -> Probe {
    match ids[start..end].binary_search(&target) {
        Ok(offset) => Probe {
            found: true,
            next: start + offset + 1,
        },
        Err(offset) => Probe {
            found: false,
            next: start + offset,
        },
    }
}

/// Binary search of each driver id in the remainder of the longer list.
///
/// The shorter list drives. For each of its ids, the unconsumed suffix of the
/// longer list is binary-searched and the cursor moves past the probed
/// position, so successive searches never revisit the consumed prefix. Runs
/// in `O(n log m)` for lengths `n <= m`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinarySearch;

impl Intersect for BinarySearch {
    fn intersect(&self, l1: &PostingList, l2: &PostingList) -> PostingList {
        let (short, long) = by_length(l1, l2);
        let mut ret = PostingList::with_capacity(short.len());
        let ids = long.ids();

        let (mut i1, mut i2) = (0, 0);
        while i1 < short.len() && i2 < ids.len() {
            let id = short.id(i1);
            let probe = search(ids, id, i2, ids.len());
            i2 = probe.next;
            if probe.found {
                ret.add_posting(id, short.score(i1).wrapping_add(long.score(i2 - 1)));
            }
            i1 += 1;
        }
        ret
    }
}
