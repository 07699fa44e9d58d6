//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

use rewind_rs::host::MockHost;
use rewind_rs::{ChannelSpec, RecorderConfig};

/// Install a tracing subscriber once for the whole test binary
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Host with one channel of every payload kind
pub fn full_host() -> MockHost {
    let mut host = MockHost::new();
    host.add_float_channel("env/wind_speed", 5.0);
    host.add_int_channel("systems/battery_on", 1);
    host.add_bytes_channel("route/active_plan", b"DIRECT".to_vec());
    host.add_float_array_channel("gear/deploy_ratio", vec![1.0, 1.0, 1.0]);
    host
}

/// Config registering the channels of [`full_host`]
pub fn full_config() -> RecorderConfig {
    let mut config = RecorderConfig::default();
    config.channels = vec![
        ChannelSpec::new("env/wind_speed").with_tolerance(0.001),
        ChannelSpec::new("systems/battery_on"),
        ChannelSpec::new("route/active_plan"),
        ChannelSpec::new("gear/deploy_ratio").with_index(1),
    ];
    config
}

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}
