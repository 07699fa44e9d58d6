//! Host implementations
//!
//! The engine talks to its host exclusively through
//! [`ChannelCatalog`](crate::channel::ChannelCatalog). This module holds
//! the hosts shipped with the crate; today that is the in-memory
//! [`MockHost`] used throughout the test suite and benchmarks.

pub mod mock;

pub use mock::{MockHost, MockPattern};
