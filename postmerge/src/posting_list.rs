//! Array-backed posting lists.
pub(crate) mod loader;

use std::fmt;

use crate::common::{SENTINEL_ID, SENTINEL_SCORE};
use crate::errors::{PostmergeError, Result};
use crate::num::SkipTarget;
use crate::posting::{Posting, PostingIter};

/// Layout a posting list is loaded with.
///
/// Some intersection algorithms rely on extra data stored alongside the
/// postings; see [`Algorithm::layout`](crate::intersect::Algorithm::layout).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListLayout {
    /// Postings only.
    #[default]
    Plain,
    /// Postings followed by a sentinel posting `(i64::MAX, 0)`.
    Sentinel,
    /// Postings with a skip-pointer table holding roughly the given number
    /// of pointers.
    SkipPointers(usize),
}

/// An ordered sequence of (document id, score) postings.
///
/// Ids must be strictly increasing. This is a precondition of every
/// intersection algorithm and is only checked in debug builds.
///
/// Postings are stored as parallel arrays, optionally with a trailing sentinel
/// posting and a skip-pointer table with one slot per posting.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct PostingList {
    ids: Vec<i64>,
    scores: Vec<i64>,
    // Empty when the list has no skip pointers.
    skip_pointers: Vec<Option<SkipTarget>>,
}

impl PostingList {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            ids: vec![],
            scores: vec![],
            skip_pointers: vec![],
        }
    }

    /// Creates an empty list with room for `n` postings.
    pub fn with_capacity(n: usize) -> Self {
        let mut list = Self::new();
        list.reserve(n);
        list
    }

    /// Creates a list from `(id, score)` pairs given in ascending id order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        pairs.into_iter().collect()
    }

    /// Preallocates storage for `n` postings and resets the list to be empty.
    pub fn reserve(&mut self, n: usize) {
        self.ids.clear();
        self.scores.clear();
        self.skip_pointers.clear();
        self.ids.reserve_exact(n);
        self.scores.reserve_exact(n);
    }

    /// Appends a posting.
    ///
    /// `id` must be greater than the id of the previously appended posting.
    #[inline(always)]
    pub fn add_posting(&mut self, id: i64, score: i64) {
        debug_assert!(
            self.ids.last().is_none_or(|&last| last < id),
            "posting ids must be strictly increasing: {:?} then {}",
            self.ids.last(),
            id,
        );
        self.ids.push(id);
        self.scores.push(score);
    }

    /// Appends the sentinel posting `(i64::MAX, 0)`.
    ///
    /// The sentinel counts toward [`len`](Self::len); use
    /// [`real_len`](Self::real_len) for the number of real postings.
    pub fn add_sentinel(&mut self) {
        self.ids.push(SENTINEL_ID);
        self.scores.push(SENTINEL_SCORE);
    }

    /// Removes a trailing sentinel posting, returning whether there was one.
    pub fn pop_sentinel(&mut self) -> bool {
        if !self.has_sentinel() {
            return false;
        }
        self.ids.pop();
        self.scores.pop();
        self.skip_pointers.truncate(self.ids.len());
        true
    }

    /// Attaches a skip pointer to the slot of the next posting to be appended.
    ///
    /// `pos == 0` records that the slot has no pointer.
    pub fn add_skip_pointer(&mut self, pos: usize) {
        let slot = self.ids.len();
        debug_assert!(pos == 0 || pos > slot, "skip pointers must jump forward");
        if self.skip_pointers.len() <= slot {
            self.skip_pointers.resize(slot + 1, None);
        }
        self.skip_pointers[slot] = SkipTarget::new(pos);
    }

    /// Attaches a skip pointer to the existing posting at `i`.
    ///
    /// `pos == 0` removes the pointer.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn set_skip_pointer(&mut self, i: usize, pos: usize) {
        assert!(i < self.len(), "skip pointer slot {} out of range", i);
        debug_assert!(pos == 0 || pos > i, "skip pointers must jump forward");
        if self.skip_pointers.len() <= i {
            self.skip_pointers.resize(self.len(), None);
        }
        self.skip_pointers[i] = SkipTarget::new(pos);
    }

    /// Builds a skip-pointer table with roughly `num_pointers` pointers.
    ///
    /// Pointers are placed every `max(1, len / num_pointers)` positions. Any
    /// existing pointers are replaced.
    ///
    /// # Errors
    ///
    /// [`PostmergeError`] is returned when `num_pointers` is zero.
    pub fn build_skip_pointers(&mut self, num_pointers: usize) -> Result<()> {
        if num_pointers == 0 {
            return Err(PostmergeError::invalid_argument(
                "num_pointers",
                "the number of skip pointers must be positive",
            ));
        }
        let len = self.len();
        let gap = (len / num_pointers).max(1);
        self.skip_pointers.clear();
        self.skip_pointers.extend((0..len).map(|i| {
            if i % gap == 0 && i + gap < len {
                SkipTarget::new(i + gap)
            } else {
                None
            }
        }));
        log::debug!("built skip pointers: len={}, gap={}", len, gap);
        Ok(())
    }

    /// Gets the skip-pointer target of the posting at `i`, if any.
    #[inline(always)]
    pub fn skip_pointer(&self, i: usize) -> Option<usize> {
        self.skip_pointers.get(i).copied().flatten().map(SkipTarget::get)
    }

    /// Checks if any posting has a skip pointer.
    pub fn has_skip_pointers(&self) -> bool {
        self.skip_pointers.iter().any(Option::is_some)
    }

    /// Gets the number of postings, including a trailing sentinel.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Checks if the list holds no postings.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Gets the number of postings, excluding a trailing sentinel.
    pub fn real_len(&self) -> usize {
        self.len() - usize::from(self.has_sentinel())
    }

    /// Checks if the last posting is a sentinel.
    pub fn has_sentinel(&self) -> bool {
        self.ids.last() == Some(&SENTINEL_ID)
    }

    /// Gets the document id at `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline(always)]
    pub fn id(&self, i: usize) -> i64 {
        self.ids[i]
    }

    /// Gets the score at `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline(always)]
    pub fn score(&self, i: usize) -> i64 {
        self.scores[i]
    }

    /// Gets the posting at `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline(always)]
    pub fn posting(&self, i: usize) -> Posting {
        Posting::new(self.ids[i], self.scores[i])
    }

    /// Gets all document ids as a slice.
    #[inline(always)]
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    /// Gets all scores as a slice.
    #[inline(always)]
    pub fn scores(&self) -> &[i64] {
        &self.scores
    }

    /// Creates an iterator over the postings.
    pub fn iter(&self) -> PostingIter<'_> {
        PostingIter::new(self)
    }
}

impl<P> FromIterator<P> for PostingList
where
    P: Into<Posting>,
{
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        for p in iter {
            let p = p.into();
            list.add_posting(p.id, p.score);
        }
        list
    }
}

impl<'a> IntoIterator for &'a PostingList {
    type Item = Posting;
    type IntoIter = PostingIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PostingList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (i, p) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", p)?;
        }
        f.write_str("]")
    }
}
