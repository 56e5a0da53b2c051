use crate::intersect::{output_for, Intersect};
use crate::posting_list::PostingList;

/// Two-cursor merge restructured into catch-up loops.
///
/// Each round first advances the left cursor while it is behind, then the
/// right cursor, and only then tests for a match. The inner loops carry a
/// single comparison each, which branch predictors handle better than the
/// three-way comparison of [`Basic`](crate::intersect::Basic).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LessConditional;

impl Intersect for LessConditional {
    fn intersect(&self, l1: &PostingList, l2: &PostingList) -> PostingList {
        let mut ret = output_for(l1, l2);
        let (ids1, ids2) = (l1.ids(), l2.ids());
        let (n1, n2) = (ids1.len(), ids2.len());

        let (mut i1, mut i2) = (0, 0);
        while i1 < n1 && i2 < n2 {
            while i1 < n1 && ids1[i1] < ids2[i2] {
                i1 += 1;
            }
            if i1 == n1 {
                break;
            }

            while i2 < n2 && ids2[i2] < ids1[i1] {
                i2 += 1;
            }
            if i2 == n2 {
                break;
            }

            if ids1[i1] == ids2[i2] {
                ret.add_posting(ids1[i1], l1.score(i1).wrapping_add(l2.score(i2)));
                i1 += 1;
                i2 += 1;
            }
        }
        ret
    }
}
