//! Boundary contracts between the engine and the host
//!
//! The engine never talks to host data cells directly. Two seams keep it
//! host-agnostic:
//!
//! - [`ChannelAdapter`] - read/write access to one live channel value
//! - [`ChannelCatalog`] - discovery and type classification of channels by
//!   name, including channels that only appear some ticks after startup

mod adapter;
mod catalog;

pub use adapter::ChannelAdapter;
pub use catalog::{AccessKind, ChannelAccessor, ChannelCatalog, ChannelTypes};

#[cfg(test)]
pub use catalog::MockChannelCatalog;
