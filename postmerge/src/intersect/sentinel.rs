use crate::common::SENTINEL_ID;
use crate::intersect::{output_for, Intersect};
use crate::posting_list::PostingList;

/// Catch-up merge over sentinel-terminated lists.
///
/// Both inputs must end with a sentinel posting
/// (see [`PostingList::add_sentinel`]). Since no real id exceeds the
/// sentinel, the catch-up loops stop without checking the cursor bounds. The
/// result never holds the sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sentinel;

impl Intersect for Sentinel {
    fn intersect(&self, l1: &PostingList, l2: &PostingList) -> PostingList {
        debug_assert!(
            l1.has_sentinel() && l2.has_sentinel(),
            "both inputs must be terminated with a sentinel"
        );

        let mut ret = output_for(l1, l2);
        let (ids1, ids2) = (l1.ids(), l2.ids());

        let (mut i1, mut i2) = (0, 0);
        while i1 < ids1.len() && i2 < ids2.len() {
            while ids1[i1] < ids2[i2] {
                i1 += 1;
            }
            while ids2[i2] < ids1[i1] {
                i2 += 1;
            }

            if ids1[i1] == ids2[i2] {
                // Both cursors rest on the sentinels.
                if ids1[i1] == SENTINEL_ID {
                    break;
                }
                ret.add_posting(ids1[i1], l1.score(i1).wrapping_add(l2.score(i2)));
                i1 += 1;
                i2 += 1;
            }
        }
        ret
    }
}
