//! Per-tick driver connecting the host clock to the registry
//!
//! The host calls [`ReplayDriver::tick`] once per frame with its elapsed
//! clock and replay flag; the driver resolves pending registrations and
//! fans the record/replay protocol out to every bound channel. The replay
//! flag is edge-detected here so the registry only sees plain
//! `(elapsed, in_replay, transition)` facts.
//!
//! Recording starts disabled; call [`ReplayDriver::set_recording_enabled`]
//! to arm it. The transition edge detector keeps running either way, so
//! enabling mid-session never replays a stale mode change.

use crate::channel::ChannelCatalog;
use crate::config::RecorderConfig;
use crate::registry::Registry;

/// Host clock state handed to the driver each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Elapsed host time in seconds
    pub elapsed_seconds: f64,
    /// Whether the host is currently replaying rather than live
    pub in_replay: bool,
}

/// Drives the record/replay cycle against a channel catalog
pub struct ReplayDriver<C: ChannelCatalog> {
    catalog: C,
    registry: Registry,
    was_in_replay: bool,
    recording_enabled: bool,
}

impl<C: ChannelCatalog> ReplayDriver<C> {
    /// Create a driver with an empty registry
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            registry: Registry::new(),
            was_in_replay: false,
            recording_enabled: false,
        }
    }

    /// Create a driver with every configured channel queued for registration
    pub fn with_config(catalog: C, config: &RecorderConfig) -> Self {
        let mut driver = Self::new(catalog);
        driver.registry.enqueue_all(config.channels.iter().cloned());
        driver
    }

    /// Queue further channels after construction
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Bound channels and registration counters
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The catalog the driver was built over
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut C {
        &mut self.catalog
    }

    /// Arm or disarm recording and replay write-back
    pub fn set_recording_enabled(&mut self, enabled: bool) {
        tracing::info!("Recording enabled: {}", enabled);
        self.recording_enabled = enabled;
    }

    pub fn is_recording_enabled(&self) -> bool {
        self.recording_enabled
    }

    /// Process one host frame
    pub fn tick(&mut self, input: TickInput) {
        if self.registry.has_pending() {
            self.registry.drain_pending(&mut self.catalog);
        }

        // The edge detector runs even while disarmed
        let transition = input.in_replay != self.was_in_replay;
        self.was_in_replay = input.in_replay;

        if self.recording_enabled {
            self.registry
                .advance(input.elapsed_seconds, input.in_replay, transition);
        }
    }

    /// Notify the driver that a new subject was loaded in the host
    ///
    /// Every recorder is cleared and re-seeded with its configured initial
    /// value at time zero, so replay before the first live sample resolves
    /// to a sane state instead of leftovers from the previous subject.
    pub fn subject_loaded(&mut self) {
        tracing::debug!("Subject loaded, re-seeding all recorders");
        self.registry.init_all();
        self.was_in_replay = false;
    }

    /// Log registration counters and per-channel sample counts
    pub fn log_stats(&self) {
        let stats = self.registry.stats();
        tracing::info!(
            "Channels: {} bound, {} rejected, {} abandoned, {} pending",
            stats.resolved,
            stats.rejected,
            stats.abandoned,
            stats.pending
        );
        for (name, count) in self.registry.sample_counts() {
            tracing::info!("  {}: {} samples", name, count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChannelSpec;
    use crate::host::MockHost;

    fn driver_with_channel(host: MockHost) -> ReplayDriver<MockHost> {
        let mut config = RecorderConfig::default();
        config.channels.push(ChannelSpec::new("env/wind_speed"));
        ReplayDriver::with_config(host, &config)
    }

    #[test]
    fn test_disarmed_driver_records_nothing() {
        let mut host = MockHost::new();
        host.add_float_channel("env/wind_speed", 5.0);

        let mut driver = driver_with_channel(host);
        driver.tick(TickInput {
            elapsed_seconds: 0.0,
            in_replay: false,
        });
        driver.tick(TickInput {
            elapsed_seconds: 1.0,
            in_replay: false,
        });

        // Registration still resolves while disarmed
        assert_eq!(driver.registry().num_channels(), 1);
        assert_eq!(driver.registry().sample_counts(), vec![("env/wind_speed", 0)]);
    }

    #[test]
    fn test_armed_driver_records_each_tick() {
        let mut host = MockHost::new();
        host.add_float_channel("env/wind_speed", 5.0);

        let mut driver = driver_with_channel(host);
        driver.set_recording_enabled(true);

        // First tick both registers and records
        driver.tick(TickInput {
            elapsed_seconds: 0.0,
            in_replay: false,
        });
        assert_eq!(driver.registry().sample_counts(), vec![("env/wind_speed", 1)]);
    }

    #[test]
    fn test_edge_detector_runs_while_disarmed() {
        let mut host = MockHost::new();
        host.add_float_channel("env/wind_speed", 5.0);

        let mut driver = driver_with_channel(host);

        // Host enters and leaves replay while the driver is disarmed
        driver.tick(TickInput {
            elapsed_seconds: 0.0,
            in_replay: true,
        });
        driver.tick(TickInput {
            elapsed_seconds: 1.0,
            in_replay: false,
        });
        driver.set_recording_enabled(true);

        // No stale transition fires: this tick records instead of restoring
        driver.tick(TickInput {
            elapsed_seconds: 2.0,
            in_replay: false,
        });
        assert_eq!(driver.registry().sample_counts(), vec![("env/wind_speed", 1)]);
    }
}
