//! Time-indexed value store and replay logic
//!
//! This is the core of the engine: a compressed, capacity-bounded history of
//! a channel's value over elapsed time, and the lookup that answers "what was
//! the value at time t" while suppressing redundant deliveries.
//!
//! # Main Types
//!
//! - [`Timeline`] - Ordered time→value store with similarity-gated inserts
//!   and FIFO-by-time eviction
//! - [`Similarity`] / [`Tolerance`] / [`Exact`] - Pluggable compression
//!   policies
//! - [`ReplayCursor`] - Last-delivered tracking for change suppression
//! - [`Recorder`] - The per-channel unit: timeline + cursor + lifecycle
//!   operations (`reset`, `clear`, `init`)
//!
//! # Example
//!
//! ```
//! use rewind_rs::timeline::{Recorder, Tolerance};
//!
//! let mut recorder = Recorder::new(1000, Tolerance(0.01f64), 0.0);
//! recorder.record_value(0.0, 1.0);
//! recorder.record_value(1.0, 1.5);
//!
//! // Replay resolves the historically correct value and reports it once
//! assert_eq!(recorder.replay_value(0.5), Some(1.0));
//! assert_eq!(recorder.replay_value(0.6), None); // unchanged
//! ```

mod cursor;
mod policy;
mod recorder;
mod store;

pub use cursor::ReplayCursor;
pub use policy::{Exact, Similarity, Tolerance};
pub use recorder::Recorder;
pub use store::Timeline;
