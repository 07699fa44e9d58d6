//! Change suppression for replay delivery
//!
//! The cursor remembers the last value handed to a replay consumer so that
//! repeated lookups resolving to the same effective value do not re-trigger
//! a write-back to the live channel. It is independent of what the timeline
//! stores: delivery always compares with exact equality, even when the store
//! compressed with a tolerance.

/// Last-delivered value tracker for one recorder
#[derive(Debug, Clone, Default)]
pub struct ReplayCursor<V> {
    last_delivered: Option<V>,
}

impl<V: PartialEq + Clone> ReplayCursor<V> {
    /// Create a cursor with no delivery history
    pub fn new() -> Self {
        Self {
            last_delivered: None,
        }
    }

    /// Offer a resolved candidate to the consumer
    ///
    /// Returns `Some` (and records the delivery) when nothing has been
    /// delivered yet or the candidate differs from the last delivery;
    /// returns `None` when the effective value is unchanged.
    pub fn deliver(&mut self, candidate: &V) -> Option<V> {
        match &self.last_delivered {
            Some(last) if last == candidate => None,
            _ => {
                self.last_delivered = Some(candidate.clone());
                Some(candidate.clone())
            }
        }
    }

    /// Forget the delivery history
    ///
    /// The next `deliver` is then guaranteed to report a change, even if the
    /// candidate equals what was delivered before the reset.
    pub fn reset(&mut self) {
        self.last_delivered = None;
    }
}
