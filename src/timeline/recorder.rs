//! Recorder: one timeline plus one replay cursor
//!
//! The externally visible unit of the engine. A recorder is created once per
//! observed channel at registration time and owns that channel's compressed
//! history, the change-suppression state for replay delivery, and the
//! configured initial value used to re-seed the history when the tracked
//! subject changes identity.

use super::cursor::ReplayCursor;
use super::policy::Similarity;
use super::store::Timeline;

/// Bounded history recorder with replay change detection
#[derive(Debug, Clone)]
pub struct Recorder<V, S> {
    timeline: Timeline<V, S>,
    cursor: ReplayCursor<V>,
    initial: V,
}

impl<V, S> Recorder<V, S>
where
    V: PartialEq + Clone,
    S: Similarity<V>,
{
    /// Create an empty recorder
    ///
    /// `capacity` bounds the retained sample count (`0` = unbounded);
    /// `initial` seeds the history on [`init`](Self::init).
    pub fn new(capacity: usize, policy: S, initial: V) -> Self {
        Self {
            timeline: Timeline::new(capacity, policy),
            cursor: ReplayCursor::new(),
            initial,
        }
    }

    /// Record a value observed at the given elapsed time
    pub fn record_value(&mut self, time: f64, value: V) {
        self.timeline.record(time, value);
    }

    /// Resolve the value at `time` and report it only if it changed
    ///
    /// `None` means "no change since the last delivery, or the history is
    /// empty" — the caller should not write anything to the live channel.
    pub fn replay_value(&mut self, time: f64) -> Option<V> {
        let candidate = self.timeline.value_at(time)?.clone();
        self.cursor.deliver(&candidate)
    }

    /// Payload of the newest recorded sample, if any
    pub fn last_recorded_value(&self) -> Option<V> {
        self.timeline.last().cloned()
    }

    /// Newest recorded sample, for force-writing on the replay→live edge
    ///
    /// Bypasses change detection: the caller writes it unconditionally to
    /// resynchronize the live channel with "present" state.
    pub fn restore_value(&self) -> Option<V> {
        self.last_recorded_value()
    }

    /// Current sample count
    pub fn num_samples(&self) -> usize {
        self.timeline.len()
    }

    /// Clear the delivery history only; recorded samples are untouched
    ///
    /// Called on every transition between live and replay mode so the next
    /// lookup is guaranteed to report a value.
    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Full wipe: recorded samples and delivery history
    pub fn clear(&mut self) {
        self.timeline.clear();
        self.cursor.reset();
    }

    /// Re-seed as if newly created, with one sample at time zero
    ///
    /// Used when the tracked subject's identity changes and prior history
    /// must not leak into the new context.
    pub fn init(&mut self) {
        self.clear();
        let initial = self.initial.clone();
        self.record_value(0.0, initial);
    }
}
