//! Compression policies deciding whether a new sample is worth storing
//!
//! A [`Timeline`](super::Timeline) consults its policy before appending a
//! sample: if the candidate is "too similar" to the newest stored sample, the
//! candidate is dropped and the history stays unchanged. Two policies exist:
//!
//! - [`Tolerance`] for scalar payloads, suppressing candidates whose absolute
//!   difference from the last stored sample does not exceed a threshold
//! - [`Exact`] for byte sequences (or any comparable payload), suppressing
//!   only bit-identical repeats
//!
//! Note the policies only gate *storage*. Replay delivery always compares
//! with exact equality against the last *delivered* value, which tracks a
//! different reference point (see [`ReplayCursor`](super::ReplayCursor)).

/// Decides whether a candidate sample is distinguishable from the last stored one
///
/// Returning `true` means "too similar, do not store". The first sample ever
/// recorded into an empty timeline bypasses the policy entirely.
pub trait Similarity<V> {
    /// Compare the newest stored sample against a candidate
    fn is_similar(&self, last: &V, candidate: &V) -> bool;
}

/// Magnitude-tolerance policy for scalar payloads
///
/// A candidate is similar when `abs(candidate - last) <= tolerance`. The
/// comparison is deliberately non-strict: a difference exactly equal to the
/// tolerance is still suppressed, so a new sample is stored only on a
/// strictly greater difference. A tolerance of zero stores on any exact
/// difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T>(pub T);

impl<T: Default> Default for Tolerance<T> {
    fn default() -> Self {
        Tolerance(T::default())
    }
}

impl Similarity<f32> for Tolerance<f32> {
    fn is_similar(&self, last: &f32, candidate: &f32) -> bool {
        (candidate - last).abs() <= self.0
    }
}

impl Similarity<f64> for Tolerance<f64> {
    fn is_similar(&self, last: &f64, candidate: &f64) -> bool {
        (candidate - last).abs() <= self.0
    }
}

impl Similarity<i32> for Tolerance<i32> {
    fn is_similar(&self, last: &i32, candidate: &i32) -> bool {
        // Widen to i64 so the difference cannot overflow
        (*candidate as i64 - *last as i64).abs() <= self.0 as i64
    }
}

/// Exact-equality policy
///
/// A candidate is similar only when it compares equal to the last stored
/// sample. This is the policy for byte-sequence payloads, where there is no
/// tolerance concept: any single differing byte forces a new sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exact;

impl<V: PartialEq> Similarity<V> for Exact {
    fn is_similar(&self, last: &V, candidate: &V) -> bool {
        last == candidate
    }
}
