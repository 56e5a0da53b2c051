use std::cmp::Ordering;

use crate::intersect::{output_for, Intersect};
use crate::posting_list::PostingList;

/// Plain two-cursor merge.
///
/// Compares the current ids, advances the smaller one, and emits a posting on
/// equality. Runs in `O(n + m)` comparisons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Basic;

impl Intersect for Basic {
    fn intersect(&self, l1: &PostingList, l2: &PostingList) -> PostingList {
        let mut ret = output_for(l1, l2);
        let (ids1, ids2) = (l1.ids(), l2.ids());

        let (mut i1, mut i2) = (0, 0);
        while i1 < ids1.len() && i2 < ids2.len() {
            match ids1[i1].cmp(&ids2[i2]) {
                Ordering::Less => i1 += 1,
                Ordering::Greater => i2 += 1,
                Ordering::Equal => {
                    ret.add_posting(ids1[i1], l1.score(i1).wrapping_add(l2.score(i2)));
                    i1 += 1;
                    i2 += 1;
                }
            }
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::intersect::tests::{example_a, example_b, example_c};

    #[test]
    fn test_intersect() {
        assert_eq!(Basic.intersect(&example_a(), &example_b()).to_string(), "[(2, 9), (6, 5)]");
        assert_eq!(Basic.intersect(&example_a(), &example_c()).to_string(), "[]");
    }

    #[test]
    fn test_empty() {
        let empty = PostingList::new();
        assert!(Basic.intersect(&empty, &example_a()).is_empty());
        assert!(Basic.intersect(&example_a(), &empty).is_empty());
        assert!(Basic.intersect(&empty, &empty).is_empty());
    }

    #[test]
    fn test_identical() {
        let a = example_a();
        assert_eq!(Basic.intersect(&a, &a).to_string(), "[(2, 10), (3, 2), (6, 4)]");
    }

    #[test]
    fn test_negative_ids() {
        let l1 = PostingList::from_pairs([(-5, 1), (-1, 1), (0, 1)]);
        let l2 = PostingList::from_pairs([(-5, -3), (0, 2)]);
        assert_eq!(Basic.intersect(&l1, &l2).to_string(), "[(-5, -2), (0, 3)]");
    }
}
