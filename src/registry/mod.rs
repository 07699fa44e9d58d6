//! Registry of bound recorders and pending channel registrations
//!
//! Channels are named in configuration but may not exist in the host until
//! some ticks after startup (hosts create channels lazily, often while a
//! subject is still loading). The registry therefore keeps a queue of
//! pending registrations and retries them once per tick: each pending spec
//! moves to `Resolved` when the catalog can classify and open it, or to
//! `Abandoned` once its retry budget is spent. Channels the host knows but
//! refuses (not writable, unsupported representation, array without an
//! element index) are rejected permanently and logged.
//!
//! Resolved channels are grouped by payload kind — float, int, and byte
//! sequence — mirroring the three compression configurations the engine
//! supports.

use std::collections::VecDeque;

use crate::channel::{ChannelAccessor, ChannelAdapter, ChannelCatalog};
use crate::config::ChannelSpec;
use crate::timeline::{Exact, Recorder, Similarity, Tolerance};

/// Drain attempts before a pending registration is abandoned
///
/// If a channel has not appeared after this many ticks it is almost
/// certainly misspelled or belongs to a host feature that is not loaded.
pub const MAX_RESOLVE_ATTEMPTS: u32 = 200;

/// A recorder bound to the live channel it tracks
pub struct BoundChannel<A: ChannelAdapter, S> {
    name: String,
    adapter: A,
    recorder: Recorder<A::Value, S>,
}

impl<A, S> BoundChannel<A, S>
where
    A: ChannelAdapter,
    A::Value: PartialEq + Clone,
    S: Similarity<A::Value>,
{
    fn new(name: String, adapter: A, recorder: Recorder<A::Value, S>) -> Self {
        Self {
            name,
            adapter,
            recorder,
        }
    }

    /// Display name of the bound channel (`name[index]` for array elements)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of samples currently recorded for this channel
    pub fn num_samples(&self) -> usize {
        self.recorder.num_samples()
    }

    /// Sample the live value into the history
    fn record(&mut self, elapsed: f64) {
        let value = self.adapter.read();
        self.recorder.record_value(elapsed, value);
    }

    /// Resolve the historical value and write it back only on change
    fn replay(&mut self, elapsed: f64) {
        if let Some(value) = self.recorder.replay_value(elapsed) {
            self.adapter.write(&value);
        }
    }

    /// Force-write the newest recorded value to the live channel
    fn restore(&mut self) {
        if let Some(value) = self.recorder.restore_value() {
            self.adapter.write(&value);
        }
    }

    fn reset(&mut self) {
        self.recorder.reset();
    }

    fn init(&mut self) {
        self.recorder.init();
    }
}

type FloatChannel = BoundChannel<Box<dyn ChannelAdapter<Value = f32>>, Tolerance<f32>>;
type IntChannel = BoundChannel<Box<dyn ChannelAdapter<Value = i32>>, Tolerance<i32>>;
type BytesChannel = BoundChannel<Box<dyn ChannelAdapter<Value = Vec<u8>>>, Exact>;

/// A registration waiting for its channel to appear in the host
#[derive(Debug, Clone)]
struct PendingRegistration {
    spec: ChannelSpec,
    attempts: u32,
}

/// Registration bookkeeping counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationStats {
    /// Registrations bound to a recorder
    pub resolved: usize,
    /// Registrations permanently refused by the host
    pub rejected: usize,
    /// Registrations dropped after the retry budget ran out
    pub abandoned: usize,
    /// Registrations still waiting for the channel to appear
    pub pending: usize,
}

/// Owns every bound recorder plus the pending-registration queue
#[derive(Default)]
pub struct Registry {
    floats: Vec<FloatChannel>,
    ints: Vec<IntChannel>,
    bytes: Vec<BytesChannel>,
    pending: VecDeque<PendingRegistration>,
    resolved: usize,
    rejected: usize,
    abandoned: usize,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a channel spec for registration
    pub fn enqueue(&mut self, spec: ChannelSpec) {
        self.pending.push_back(PendingRegistration { spec, attempts: 0 });
    }

    /// Queue several channel specs
    pub fn enqueue_all(&mut self, specs: impl IntoIterator<Item = ChannelSpec>) {
        for spec in specs {
            self.enqueue(spec);
        }
    }

    /// Whether any registrations are still pending
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of bound channels across all payload kinds
    pub fn num_channels(&self) -> usize {
        self.floats.len() + self.ints.len() + self.bytes.len()
    }

    /// Registration counters
    pub fn stats(&self) -> RegistrationStats {
        RegistrationStats {
            resolved: self.resolved,
            rejected: self.rejected,
            abandoned: self.abandoned,
            pending: self.pending.len(),
        }
    }

    /// Attempt every pending registration once
    ///
    /// Called once per tick while the queue is non-empty. Unknown channels
    /// are requeued with their attempt count bumped; a spec that stays
    /// unknown for [`MAX_RESOLVE_ATTEMPTS`] drains is abandoned.
    pub fn drain_pending<C: ChannelCatalog>(&mut self, catalog: &mut C) {
        let waiting = self.pending.len();
        tracing::debug!("Channel registrations waiting: {}", waiting);

        for _ in 0..waiting {
            let Some(mut entry) = self.pending.pop_front() else {
                break;
            };

            let Some(types) = catalog.lookup(&entry.spec.name) else {
                entry.attempts += 1;
                if entry.attempts >= MAX_RESOLVE_ATTEMPTS {
                    tracing::warn!(
                        "Channel not found after {} attempts, giving up: {}",
                        entry.attempts,
                        entry.spec.name
                    );
                    self.abandoned += 1;
                } else {
                    self.pending.push_back(entry);
                }
                continue;
            };

            self.bind(catalog, entry.spec, types);
        }
    }

    /// Bind one classified channel, or reject it permanently
    fn bind<C: ChannelCatalog>(
        &mut self,
        catalog: &mut C,
        spec: ChannelSpec,
        types: crate::channel::ChannelTypes,
    ) {
        if !types.writable {
            tracing::warn!("Channel not writable and will not be used: {}", spec.name);
            self.rejected += 1;
            return;
        }

        let Some(kind) = types.preferred_access() else {
            tracing::warn!(
                "Channel representation not supported, skipping: {}",
                spec.name
            );
            self.rejected += 1;
            return;
        };

        if kind.needs_index() && spec.index.is_none() {
            tracing::warn!(
                "Channel is a {} but no element index was given, skipping: {}",
                kind,
                spec.name
            );
            self.rejected += 1;
            return;
        }

        let index = if kind.needs_index() { spec.index } else { None };
        let display_name = match index {
            Some(i) => format!("{}[{}]", spec.name, i),
            None => spec.name.clone(),
        };

        match catalog.open(&spec.name, kind, index) {
            Some(ChannelAccessor::Float(adapter)) => {
                let recorder = Recorder::new(
                    spec.capacity,
                    Tolerance(spec.tolerance as f32),
                    spec.init as f32,
                );
                tracing::info!("Registered {} channel: {}", kind, display_name);
                self.floats
                    .push(BoundChannel::new(display_name, adapter, recorder));
                self.resolved += 1;
            }
            Some(ChannelAccessor::Int(adapter)) => {
                let recorder = Recorder::new(
                    spec.capacity,
                    Tolerance(spec.tolerance as i32),
                    spec.init as i32,
                );
                tracing::info!("Registered {} channel: {}", kind, display_name);
                self.ints
                    .push(BoundChannel::new(display_name, adapter, recorder));
                self.resolved += 1;
            }
            Some(ChannelAccessor::Bytes(adapter)) => {
                let recorder = Recorder::new(spec.capacity, Exact, Vec::new());
                tracing::info!("Registered {} channel: {}", kind, display_name);
                self.bytes
                    .push(BoundChannel::new(display_name, adapter, recorder));
                self.resolved += 1;
            }
            None => {
                tracing::warn!("Host refused to open channel: {}", display_name);
                self.rejected += 1;
            }
        }
    }

    /// Apply the per-tick protocol to every bound recorder
    ///
    /// On a mode-transition edge every delivery history is reset. While
    /// live, channels are sampled — except on the tick that just left
    /// replay, where the newest recorded value is force-written instead so
    /// the live channel resynchronizes with "present" state. While
    /// replaying, the historical value is looked up and written back only
    /// when it changed.
    pub fn advance(&mut self, elapsed: f64, in_replay: bool, transition: bool) {
        if transition {
            self.reset_all();
        }

        if in_replay {
            for ch in &mut self.floats {
                ch.replay(elapsed);
            }
            for ch in &mut self.ints {
                ch.replay(elapsed);
            }
            for ch in &mut self.bytes {
                ch.replay(elapsed);
            }
        } else if transition {
            for ch in &mut self.floats {
                ch.restore();
            }
            for ch in &mut self.ints {
                ch.restore();
            }
            for ch in &mut self.bytes {
                ch.restore();
            }
        } else {
            for ch in &mut self.floats {
                ch.record(elapsed);
            }
            for ch in &mut self.ints {
                ch.record(elapsed);
            }
            for ch in &mut self.bytes {
                ch.record(elapsed);
            }
        }
    }

    /// Clear delivery history on every bound recorder
    pub fn reset_all(&mut self) {
        for ch in &mut self.floats {
            ch.reset();
        }
        for ch in &mut self.ints {
            ch.reset();
        }
        for ch in &mut self.bytes {
            ch.reset();
        }
    }

    /// Re-seed every bound recorder with its configured initial value
    pub fn init_all(&mut self) {
        for ch in &mut self.floats {
            ch.init();
        }
        for ch in &mut self.ints {
            ch.init();
        }
        for ch in &mut self.bytes {
            ch.init();
        }
    }

    /// Per-channel recorded sample counts, for stats logging
    pub fn sample_counts(&self) -> Vec<(&str, usize)> {
        let mut counts = Vec::with_capacity(self.num_channels());
        counts.extend(self.floats.iter().map(|c| (c.name(), c.num_samples())));
        counts.extend(self.ints.iter().map(|c| (c.name(), c.num_samples())));
        counts.extend(self.bytes.iter().map(|c| (c.name(), c.num_samples())));
        counts
    }
}
