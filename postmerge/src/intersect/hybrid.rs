use crate::common::HYBRID_RATIO_THRESHOLD;
use crate::intersect::{by_length, Galloping, Intersect, LessConditional};
use crate::posting_list::PostingList;

/// Adaptive dispatcher choosing a strategy by the ratio of list lengths.
///
/// With `ratio = len(longer) / len(shorter)`, lists of similar length are
/// merged with [`LessConditional`] and skewed ones with [`Galloping`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hybrid {
    threshold: usize,
}

impl Hybrid {
    /// Creates a dispatcher with the default threshold
    /// [`HYBRID_RATIO_THRESHOLD`].
    pub const fn new() -> Self {
        Self {
            threshold: HYBRID_RATIO_THRESHOLD,
        }
    }

    /// Specifies the length ratio from which galloping search is used.
    pub const fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Gets the length ratio from which galloping search is used.
    pub const fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Default for Hybrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Strategy picked by [`Hybrid`] for one pair of lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Strategy {
    Linear,
    Galloping,
}

impl Hybrid {
    /// Picks the strategy for lists of `short_len <= long_len` postings, or
    /// `None` when the shorter list is empty.
    pub(crate) const fn choose(&self, short_len: usize, long_len: usize) -> Option<Strategy> {
        if short_len == 0 {
            return None;
        }
        if long_len / short_len < self.threshold {
            Some(Strategy::Linear)
        } else {
            Some(Strategy::Galloping)
        }
    }
}

impl Intersect for Hybrid {
    fn intersect(&self, l1: &PostingList, l2: &PostingList) -> PostingList {
        let (short, long) = by_length(l1, l2);
        let Some(strategy) = self.choose(short.len(), long.len()) else {
            return PostingList::new();
        };

        log::trace!(
            "hybrid: {} vs {} postings, threshold {}, {:?}",
            short.len(),
            long.len(),
            self.threshold,
            strategy
        );
        match strategy {
            Strategy::Linear => LessConditional.intersect(short, long),
            Strategy::Galloping => Galloping.intersect(short, long),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::intersect::tests::{example_a, example_b, example_c};

    #[test]
    fn test_intersect() {
        let hybrid = Hybrid::default();
        assert_eq!(hybrid.threshold(), 20);
        assert_eq!(hybrid.intersect(&example_a(), &example_b()).to_string(), "[(2, 9), (6, 5)]");
        assert_eq!(hybrid.intersect(&example_a(), &example_c()).to_string(), "[]");
    }

    #[test]
    fn test_choose() {
        let hybrid = Hybrid::new();
        assert_eq!(hybrid.choose(0, 10), None);
        assert_eq!(hybrid.choose(10, 10), Some(Strategy::Linear));
        assert_eq!(hybrid.choose(10, 199), Some(Strategy::Linear));
        assert_eq!(hybrid.choose(10, 200), Some(Strategy::Galloping));
        assert_eq!(hybrid.choose(2, 1000), Some(Strategy::Galloping));

        let hybrid = Hybrid::new().with_threshold(1000);
        assert_eq!(hybrid.choose(2, 1000), Some(Strategy::Linear));
        let hybrid = Hybrid::new().with_threshold(1);
        assert_eq!(hybrid.choose(10, 10), Some(Strategy::Galloping));
        let hybrid = Hybrid::new().with_threshold(0);
        assert_eq!(hybrid.choose(10, 1), Some(Strategy::Galloping));
    }

    #[test]
    fn test_both_branches() {
        let short = PostingList::from_pairs([(7, 1), (700, 1)]);
        let long = PostingList::from_pairs((0..1000).map(|i| (i * 7, 1)));

        for threshold in [1, 20, 1000] {
            let hybrid = Hybrid::new().with_threshold(threshold);
            assert_eq!(hybrid.intersect(&short, &long).to_string(), "[(7, 2), (700, 2)]");
            assert_eq!(hybrid.intersect(&long, &short).to_string(), "[(7, 2), (700, 2)]");
        }
    }

    #[test]
    fn test_empty() {
        let empty = PostingList::new();
        assert!(Hybrid::new().intersect(&empty, &example_a()).is_empty());
        assert!(Hybrid::new().intersect(&example_a(), &empty).is_empty());
        assert!(Hybrid::new().intersect(&empty, &empty).is_empty());
    }
}
