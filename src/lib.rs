//! # Rewind-RS: Channel Record-and-Replay Engine
//!
//! Records externally observed channel values against a host-supplied
//! elapsed-time clock and plays them back when the host switches into
//! replay mode. The engine never runs its own clock or threads: the host
//! drives it with one [`ReplayDriver::tick`] call per frame and the engine
//! does all its reading and writing through [`ChannelAdapter`] seams.
//!
//! ## Architecture
//!
//! - **Timeline**: Time-keyed sample store with similarity-gated
//!   compression, bounded FIFO-by-time eviction, and clamp/predecessor
//!   replay lookup
//! - **Channel**: Adapter and catalog traits that abstract the host's
//!   channel system behind typed read/write accessors
//! - **Registry**: Bound recorders grouped by payload kind, plus the
//!   pending-registration queue that retries channels until the host
//!   publishes them
//! - **Driver**: Per-tick protocol — sample while live, write historical
//!   values back while replaying, resynchronize on the transition edge
//!
//! ## Configuration
//!
//! Channels are declared in a TOML file (see [`RecorderConfig`]); a legacy
//! line-per-channel list format is also accepted for imported setups.
//!
//! ## Example
//!
//! ```
//! use rewind_rs::{ChannelSpec, RecorderConfig, ReplayDriver, TickInput};
//! use rewind_rs::host::MockHost;
//!
//! let mut host = MockHost::new();
//! host.add_float_channel("env/wind_speed", 5.0);
//!
//! let mut config = RecorderConfig::default();
//! config.channels.push(ChannelSpec::new("env/wind_speed").with_tolerance(0.01));
//!
//! let mut driver = ReplayDriver::with_config(host, &config);
//! driver.set_recording_enabled(true);
//!
//! // The host calls this once per frame with its clock and replay flag
//! driver.tick(TickInput {
//!     elapsed_seconds: 0.0,
//!     in_replay: false,
//! });
//! assert_eq!(driver.registry().num_channels(), 1);
//! ```

pub mod channel;
pub mod config;
pub mod driver;
pub mod error;
pub mod host;
pub mod registry;
pub mod timeline;

// Re-export commonly used types
pub use channel::{AccessKind, ChannelAccessor, ChannelAdapter, ChannelCatalog, ChannelTypes};
pub use config::{ChannelSpec, RecorderConfig};
pub use driver::{ReplayDriver, TickInput};
pub use error::{Result, RewindError};
pub use registry::{Registry, RegistrationStats};
pub use timeline::{Exact, Recorder, ReplayCursor, Similarity, Timeline, Tolerance};
