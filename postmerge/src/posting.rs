//! Container of postings.
use std::fmt;

use crate::posting_list::PostingList;

/// A (document id, score) pair contributed by one index term.
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug, Hash)]
pub struct Posting {
    /// Document id, unique within one list.
    pub id: i64,
    /// Opaque score, summed when two lists match on `id`.
    pub score: i64,
}

impl Posting {
    /// Creates a new posting.
    #[inline(always)]
    pub const fn new(id: i64, score: i64) -> Self {
        Self { id, score }
    }
}

impl From<(i64, i64)> for Posting {
    fn from((id, score): (i64, i64)) -> Self {
        Self { id, score }
    }
}

impl fmt::Display for Posting {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.id, self.score)
    }
}

/// Iterator of postings.
pub struct PostingIter<'a> {
    list: &'a PostingList,
    i: usize,
}

impl<'a> PostingIter<'a> {
    #[inline(always)]
    pub(crate) const fn new(list: &'a PostingList) -> Self {
        Self { list, i: 0 }
    }
}

impl Iterator for PostingIter<'_> {
    type Item = Posting;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.i < self.list.len() {
            let p = self.list.posting(self.i);
            self.i += 1;
            Some(p)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.list.len() - self.i;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for PostingIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter() {
        let list = PostingList::from_pairs([(2, 5), (3, 1), (6, 2)]);

        let mut it = list.iter();
        assert_eq!(it.len(), 3);
        for i in 0..list.len() {
            let rhs = it.next().unwrap();
            assert_eq!(list.posting(i), rhs);
        }
        assert!(it.next().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Posting::new(4, -3).to_string(), "(4, -3)");
        assert_eq!(Posting::from((1, 2)), Posting { id: 1, score: 2 });
    }
}
