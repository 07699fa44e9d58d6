//! Capacity-bounded, time-ordered sample store
//!
//! The timeline maps elapsed seconds (the host's monotonic clock, not wall
//! time) to payload values. Inserts are gated by a [`Similarity`] policy,
//! memory is bounded by discarding the oldest samples, and lookups return a
//! previously stored sample verbatim — never an interpolated value.

use std::collections::BTreeMap;

use super::policy::Similarity;

/// Total-order key over elapsed seconds
///
/// `f64` is not `Ord`; `total_cmp` gives the total order we need. Degenerate
/// times (NaN, infinities) are accepted verbatim — validating them is the
/// caller's responsibility — and still order consistently.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TimeKey(f64);

impl Eq for TimeKey {}

impl PartialOrd for TimeKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Ordered elapsed-time → value history with bounded retention
///
/// `V` is the payload type and `S` the compression policy consulted before
/// each append. Capacity `0` means unbounded; otherwise the oldest samples
/// are evicted after each insert until the size fits. Insertion order and
/// time order coincide because the driver's clock is monotonic, so FIFO
/// eviction and oldest-timestamp eviction are the same thing.
#[derive(Debug, Clone)]
pub struct Timeline<V, S> {
    samples: BTreeMap<TimeKey, V>,
    capacity: usize,
    policy: S,
}

impl<V, S: Similarity<V>> Timeline<V, S> {
    /// Create an empty timeline with the given retention capacity and policy
    pub fn new(capacity: usize, policy: S) -> Self {
        Self {
            samples: BTreeMap::new(),
            capacity,
            policy,
        }
    }

    /// Retention capacity (`0` = unbounded)
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples are stored
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Record a value at the given elapsed time
    ///
    /// The first sample into an empty timeline is always kept. Afterwards a
    /// candidate is appended only when the policy finds it distinguishable
    /// from the newest stored sample. Recording at a time equal to an
    /// existing key overwrites that key's payload. Never fails.
    pub fn record(&mut self, time: f64, value: V) {
        match self.samples.iter().next_back() {
            Some((_, last)) if self.policy.is_similar(last, &value) => {}
            _ => {
                self.samples.insert(TimeKey(time), value);
            }
        }

        if self.capacity > 0 {
            while self.samples.len() > self.capacity {
                self.samples.pop_first();
            }
        }
    }

    /// Payload of the newest sample, if any
    pub fn last(&self) -> Option<&V> {
        self.samples.iter().next_back().map(|(_, v)| v)
    }

    /// Payload of the oldest sample, if any
    pub fn first(&self) -> Option<&V> {
        self.samples.iter().next().map(|(_, v)| v)
    }

    /// Resolve the historically correct value for a query time
    ///
    /// Resolution order, first match wins: clamp to the newest sample when
    /// the query is at or past it, clamp to the oldest when at or before it,
    /// otherwise the greatest sample with `time <= query` (predecessor
    /// search). An empty timeline yields `None`.
    pub fn value_at(&self, query: f64) -> Option<&V> {
        let (newest_time, newest) = self.samples.iter().next_back()?;
        if query >= newest_time.0 {
            return Some(newest);
        }

        let (oldest_time, oldest) = self.samples.iter().next()?;
        if query <= oldest_time.0 {
            return Some(oldest);
        }

        self.samples
            .range(..=TimeKey(query))
            .next_back()
            .map(|(_, v)| v)
    }

    /// Discard all samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::policy::{Exact, Tolerance};

    #[test]
    fn test_first_sample_always_kept() {
        let mut timeline = Timeline::new(0, Tolerance(100.0f64));
        timeline.record(0.0, 1.0);
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn test_tolerance_compression() {
        let mut timeline = Timeline::new(0, Tolerance(0.5f64));
        timeline.record(0.0, 1.0);
        timeline.record(1.0, 1.2); // diff 0.2 <= 0.5, suppressed
        assert_eq!(timeline.len(), 1);
        timeline.record(2.0, 1.6); // diff 0.6 > 0.5, stored
        assert_eq!(timeline.len(), 2);
    }

    #[test]
    fn test_exact_compression() {
        let mut timeline = Timeline::new(0, Exact);
        timeline.record(0.0, vec![1u8, 2, 3]);
        timeline.record(1.0, vec![1u8, 2, 3]);
        assert_eq!(timeline.len(), 1);
        timeline.record(2.0, vec![4u8, 5, 6]);
        assert_eq!(timeline.len(), 2);
    }

    #[test]
    fn test_fifo_eviction() {
        let mut timeline = Timeline::new(2, Tolerance(0.0f64));
        timeline.record(0.0, 1.0);
        timeline.record(1.0, 2.0);
        timeline.record(2.0, 3.0);
        assert_eq!(timeline.len(), 2);
        // The t=0 sample is gone; t=1 is now the oldest
        assert_eq!(timeline.first(), Some(&2.0));
        assert_eq!(timeline.last(), Some(&3.0));
    }

    #[test]
    fn test_unbounded_capacity() {
        let mut timeline = Timeline::new(0, Tolerance(0.0f64));
        for i in 0..1000 {
            timeline.record(i as f64, i as f64);
        }
        assert_eq!(timeline.len(), 1000);
    }

    #[test]
    fn test_same_time_overwrites() {
        let mut timeline = Timeline::new(0, Tolerance(0.0f64));
        timeline.record(1.0, 10.0);
        timeline.record(1.0, 20.0);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.last(), Some(&20.0));
    }

    #[test]
    fn test_value_at_clamps_and_predecessor() {
        let mut timeline = Timeline::new(0, Tolerance(0.5f64));
        timeline.record(0.0, 1.0);
        timeline.record(2.0, 1.6);

        // Between recorded times: greatest time <= query
        assert_eq!(timeline.value_at(1.5), Some(&1.0));
        // Clamp to present
        assert_eq!(timeline.value_at(5.0), Some(&1.6));
        // Clamp to past
        assert_eq!(timeline.value_at(-1.0), Some(&1.0));
        // Exact hits
        assert_eq!(timeline.value_at(0.0), Some(&1.0));
        assert_eq!(timeline.value_at(2.0), Some(&1.6));
    }

    #[test]
    fn test_value_at_empty() {
        let timeline: Timeline<f64, _> = Timeline::new(0, Tolerance(0.0f64));
        assert_eq!(timeline.value_at(0.0), None);
        assert_eq!(timeline.last(), None);
        assert_eq!(timeline.first(), None);
    }

    #[test]
    fn test_nan_time_accepted() {
        let mut timeline = Timeline::new(0, Tolerance(0.0f64));
        timeline.record(f64::NAN, 1.0);
        timeline.record(1.0, 2.0);
        assert_eq!(timeline.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut timeline = Timeline::new(0, Exact);
        timeline.record(0.0, vec![1u8]);
        timeline.clear();
        assert!(timeline.is_empty());
        assert_eq!(timeline.value_at(0.0), None);
    }
}
