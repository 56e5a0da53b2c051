//! Intersection of sorted posting lists.
//!
//! Every algorithm in this module implements [`Intersect`] and computes the
//! same result: for each id present in both inputs, one posting whose score is
//! the sum of the two input scores, in ascending id order. They differ only in
//! how the two cursors catch up with each other.
mod basic;
mod binary_search;
mod galloping;
mod hybrid;
mod less_conditional;
mod sentinel;
mod skip_pointer;

use std::fmt;
use std::str::FromStr;

use crate::errors::{PostmergeError, Result};
use crate::posting_list::{ListLayout, PostingList};

pub use crate::intersect::basic::Basic;
pub use crate::intersect::binary_search::BinarySearch;
pub use crate::intersect::galloping::Galloping;
pub use crate::intersect::hybrid::Hybrid;
pub use crate::intersect::less_conditional::LessConditional;
pub use crate::intersect::sentinel::Sentinel;
pub use crate::intersect::skip_pointer::SkipPointers;

/// Intersection of two posting lists.
pub trait Intersect {
    /// Computes the intersection of `l1` and `l2`.
    ///
    /// Both inputs must be sorted by strictly increasing id. The result holds
    /// one posting per common id, scored with the sum of both input scores.
    /// The sum wraps around on overflow.
    fn intersect(&self, l1: &PostingList, l2: &PostingList) -> PostingList;
}

/// Creates the output list, reserving room for the largest possible result.
#[inline(always)]
pub(crate) fn output_for(l1: &PostingList, l2: &PostingList) -> PostingList {
    PostingList::with_capacity(l1.len().min(l2.len()))
}

/// Orders two lists as (shorter, longer).
#[inline(always)]
pub(crate) fn by_length<'a>(
    l1: &'a PostingList,
    l2: &'a PostingList,
) -> (&'a PostingList, &'a PostingList) {
    if l1.len() <= l2.len() {
        (l1, l2)
    } else {
        (l2, l1)
    }
}

/// Intersection algorithm selectable at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// See [`Basic`].
    Basic,
    /// See [`LessConditional`].
    LessConditional,
    /// See [`Sentinel`].
    Sentinel,
    /// See [`BinarySearch`].
    BinarySearch,
    /// See [`Galloping`].
    Galloping,
    /// See [`SkipPointers`].
    SkipPointers,
    /// See [`Hybrid`].
    Hybrid(Hybrid),
}

impl Algorithm {
    /// All algorithms, with the hybrid one using its default threshold.
    pub const ALL: [Self; 7] = [
        Self::Basic,
        Self::LessConditional,
        Self::Sentinel,
        Self::BinarySearch,
        Self::Galloping,
        Self::SkipPointers,
        Self::Hybrid(Hybrid::new()),
    ];

    /// Gets the name used by [`FromStr`] and [`Display`](fmt::Display).
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::LessConditional => "less-conditional",
            Self::Sentinel => "sentinel",
            Self::BinarySearch => "binary-search",
            Self::Galloping => "galloping",
            Self::SkipPointers => "skip-pointers",
            Self::Hybrid(_) => "hybrid",
        }
    }

    /// Gets the layout the inputs of this algorithm must be loaded with.
    ///
    /// `num_skip_pointers` is only used by [`Algorithm::SkipPointers`].
    pub const fn layout(&self, num_skip_pointers: usize) -> ListLayout {
        match self {
            Self::Sentinel => ListLayout::Sentinel,
            Self::SkipPointers => ListLayout::SkipPointers(num_skip_pointers),
            _ => ListLayout::Plain,
        }
    }
}

impl Intersect for Algorithm {
    fn intersect(&self, l1: &PostingList, l2: &PostingList) -> PostingList {
        match self {
            Self::Basic => Basic.intersect(l1, l2),
            Self::LessConditional => LessConditional.intersect(l1, l2),
            Self::Sentinel => Sentinel.intersect(l1, l2),
            Self::BinarySearch => BinarySearch.intersect(l1, l2),
            Self::Galloping => Galloping.intersect(l1, l2),
            Self::SkipPointers => SkipPointers.intersect(l1, l2),
            Self::Hybrid(h) => h.intersect(l1, l2),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PostmergeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(Self::name).collect();
                PostmergeError::invalid_argument(
                    "algorithm",
                    format!("unknown algorithm {:?}, expected one of {}", s, names.join(", ")),
                )
            })
    }
}

/// Intersects all `lists` by chaining pairwise intersections from left to right.
///
/// Returns `None` if `lists` is empty. If the first list ends with a sentinel,
/// intermediate results are re-terminated with one so that the chain keeps
/// the precondition of [`Sentinel`]. The returned list never carries a
/// sentinel.
///
/// # Examples
///
/// ```
/// use postmerge::PostingList;
/// use postmerge::intersect::{intersect_all, Basic};
///
/// let lists = [
///     PostingList::from_pairs([(1, 1), (2, 1), (3, 1)]),
///     PostingList::from_pairs([(2, 10), (3, 10)]),
///     PostingList::from_pairs([(3, 100), (4, 100)]),
/// ];
/// let result = intersect_all(&lists, &Basic).unwrap();
/// assert_eq!(result.to_string(), "[(3, 111)]");
/// ```
pub fn intersect_all<A>(lists: &[PostingList], algorithm: &A) -> Option<PostingList>
where
    A: Intersect + ?Sized,
{
    let (first, rest) = lists.split_first()?;
    let keep_sentinel = first.has_sentinel();

    let mut acc: Option<PostingList> = None;
    for list in rest {
        let lhs = acc.as_ref().unwrap_or(first);
        let mut next = algorithm.intersect(lhs, list);
        let exhausted = next.is_empty();
        if keep_sentinel {
            next.add_sentinel();
        }
        acc = Some(next);
        if exhausted {
            break;
        }
    }

    let mut result = acc.unwrap_or_else(|| first.clone());
    result.pop_sentinel();
    Some(result)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn example_a() -> PostingList {
        PostingList::from_pairs([(2, 5), (3, 1), (6, 2)])
    }

    pub(crate) fn example_b() -> PostingList {
        PostingList::from_pairs([(1, 1), (2, 4), (4, 3), (6, 3)])
    }

    pub(crate) fn example_c() -> PostingList {
        PostingList::from_pairs([(5, 1), (7, 2)])
    }

    /// Copies `list` into the layout `algorithm` expects.
    pub(crate) fn with_layout(list: &PostingList, layout: ListLayout) -> PostingList {
        let mut list = list.clone();
        match layout {
            ListLayout::Plain => {}
            ListLayout::Sentinel => list.add_sentinel(),
            ListLayout::SkipPointers(n) => list.build_skip_pointers(n).unwrap(),
        }
        list
    }

    #[test]
    fn test_examples_all_algorithms() {
        for algorithm in Algorithm::ALL {
            let layout = algorithm.layout(1);
            let a = with_layout(&example_a(), layout);
            let b = with_layout(&example_b(), layout);
            let c = with_layout(&example_c(), layout);

            assert_eq!(
                algorithm.intersect(&a, &b).to_string(),
                "[(2, 9), (6, 5)]",
                "{}",
                algorithm
            );
            assert_eq!(algorithm.intersect(&a, &c).to_string(), "[]", "{}", algorithm);
        }
    }

    #[test]
    fn test_score_sum_wraps() {
        let l1 = PostingList::from_pairs([(1, i64::MAX), (4, i64::MIN)]);
        let l2 = PostingList::from_pairs([(1, 1), (4, -1)]);
        for algorithm in Algorithm::ALL {
            let layout = algorithm.layout(1);
            let ret = algorithm.intersect(&with_layout(&l1, layout), &with_layout(&l2, layout));
            assert_eq!(ret.ids(), &[1, 4], "{}", algorithm);
            assert_eq!(ret.scores(), &[i64::MIN, i64::MAX], "{}", algorithm);
        }
    }

    #[test]
    fn test_algorithm_names() {
        for algorithm in Algorithm::ALL {
            let parsed: Algorithm = algorithm.to_string().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
        assert!("quick".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_layout() {
        assert_eq!(Algorithm::Basic.layout(10), ListLayout::Plain);
        assert_eq!(Algorithm::Sentinel.layout(10), ListLayout::Sentinel);
        assert_eq!(Algorithm::SkipPointers.layout(10), ListLayout::SkipPointers(10));
    }

    #[test]
    fn test_dyn_intersect() {
        let algorithms: Vec<Box<dyn Intersect>> = vec![
            Box::new(Basic),
            Box::new(Galloping),
            Box::new(Hybrid::new().with_threshold(1)),
        ];
        for algorithm in &algorithms {
            let result = algorithm.intersect(&example_a(), &example_b());
            assert_eq!(result.ids(), &[2, 6]);
            assert_eq!(result.scores(), &[9, 5]);
        }
    }

    #[test]
    fn test_intersect_all() {
        let lists = [
            PostingList::from_pairs([(1, 1), (2, 1), (3, 1), (5, 1)]),
            PostingList::from_pairs([(2, 10), (3, 10), (5, 10)]),
            PostingList::from_pairs([(0, 100), (3, 100), (5, 100)]),
        ];
        for algorithm in Algorithm::ALL {
            let lists: Vec<_> = lists
                .iter()
                .map(|l| with_layout(l, algorithm.layout(2)))
                .collect();
            let result = intersect_all(&lists, &algorithm).unwrap();
            assert_eq!(result.to_string(), "[(3, 111), (5, 111)]", "{}", algorithm);
        }
    }

    #[test]
    fn test_intersect_all_degenerate() {
        assert!(intersect_all(&[], &Basic).is_none());

        let mut single = example_a();
        single.add_sentinel();
        let result = intersect_all(&[single], &Sentinel).unwrap();
        assert_eq!(result, example_a());
    }

    #[test]
    fn test_intersect_all_early_exit() {
        let lists = [example_a(), example_c(), example_b()];
        assert!(intersect_all(&lists, &LessConditional).unwrap().is_empty());

        let lists: Vec<_> = lists
            .iter()
            .map(|l| with_layout(l, ListLayout::Sentinel))
            .collect();
        assert!(intersect_all(&lists, &Sentinel).unwrap().is_empty());
    }
}
