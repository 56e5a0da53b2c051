//! Common settings in Postmerge.

/// The document id of a sentinel posting.
///
/// A list terminated with this id lets catch-up scans stop without
/// bounds checks, since no real id compares greater.
pub const SENTINEL_ID: i64 = i64::MAX;

/// The score carried by a sentinel posting.
pub const SENTINEL_SCORE: i64 = 0;

/// Default length ratio at which [`Hybrid`](crate::intersect::Hybrid)
/// switches from the linear merge to galloping search.
///
/// The value is an empirical tuning, not an analytical bound.
pub const HYBRID_RATIO_THRESHOLD: usize = 20;
