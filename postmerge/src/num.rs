use std::num::NonZeroUsize;

/// Represents the target position of a skip pointer.
///
/// A pointer always jumps forward from some position `i >= 0`, so its target is
/// at least 1. This type guarantees that the value is never zero, which makes
/// `Option<SkipTarget>` as small as a plain `usize`.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SkipTarget(NonZeroUsize);

impl SkipTarget {
    #[inline(always)]
    pub const fn new(x: usize) -> Option<Self> {
        match NonZeroUsize::new(x) {
            Some(x) => Some(Self(x)),
            None => None,
        }
    }

    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_absent() {
        assert_eq!(SkipTarget::new(0), None);
        assert_eq!(SkipTarget::new(7).map(SkipTarget::get), Some(7));
    }

    #[test]
    fn test_niche() {
        assert_eq!(
            std::mem::size_of::<Option<SkipTarget>>(),
            std::mem::size_of::<usize>()
        );
    }
}
