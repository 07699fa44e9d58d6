//! Channel adapter trait for reading and writing live values
//!
//! An adapter binds one recorder to one externally addressable value in the
//! host: `read` samples the channel's current live state, `write` pushes a
//! replayed or restored value back. Host integrations implement this trait
//! over whatever access API their host exposes; [`crate::host::mock`]
//! provides in-memory implementations for testing.
//!
//! Adapters are not required to be `Send`: every recorder is exclusively
//! owned and driven by one scheduling tick at a time.

/// Read/write access to one live channel value
pub trait ChannelAdapter {
    /// Payload type carried by the channel
    type Value;

    /// Read the channel's current live value
    fn read(&mut self) -> Self::Value;

    /// Write a value to the live channel
    fn write(&mut self, value: &Self::Value);
}

impl<V> ChannelAdapter for Box<dyn ChannelAdapter<Value = V>> {
    type Value = V;

    fn read(&mut self) -> V {
        (**self).read()
    }

    fn write(&mut self, value: &V) {
        (**self).write(value);
    }
}
