//! Channel discovery and type classification
//!
//! The catalog is the host-facing seam through which channels are found and
//! opened. A channel is identified by name; it may not exist yet when the
//! engine starts (hosts create channels lazily), so [`ChannelCatalog::lookup`]
//! returning `None` means "not known *yet*" and the caller retries on later
//! ticks, up to a budget.
//!
//! A named channel may support several representations at once; the engine
//! records through exactly one of them, chosen by
//! [`ChannelTypes::preferred_access`].

use super::adapter::ChannelAdapter;

/// Representations a named channel supports, plus writability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelTypes {
    /// Scalar floating-point representation
    pub float: bool,
    /// Scalar integer representation
    pub int: bool,
    /// Arbitrary-length byte sequence representation
    pub bytes: bool,
    /// Float array (an element is addressed by index)
    pub float_array: bool,
    /// Integer array (an element is addressed by index)
    pub int_array: bool,
    /// Whether the host allows writing this channel
    pub writable: bool,
}

impl ChannelTypes {
    /// Pick the representation to record through
    ///
    /// Priority: scalar float, scalar int, bytes, then the array forms.
    /// Returns `None` when the channel supports nothing we can record.
    pub fn preferred_access(&self) -> Option<AccessKind> {
        if self.float {
            Some(AccessKind::Float)
        } else if self.int {
            Some(AccessKind::Int)
        } else if self.bytes {
            Some(AccessKind::Bytes)
        } else if self.float_array {
            Some(AccessKind::FloatArray)
        } else if self.int_array {
            Some(AccessKind::IntArray)
        } else {
            None
        }
    }
}

/// The concrete representation chosen for recording a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// Scalar float
    Float,
    /// Scalar integer
    Int,
    /// Byte sequence
    Bytes,
    /// One element of a float array (requires an index)
    FloatArray,
    /// One element of an integer array (requires an index)
    IntArray,
}

impl AccessKind {
    /// Whether this representation needs an element index
    pub fn needs_index(&self) -> bool {
        matches!(self, AccessKind::FloatArray | AccessKind::IntArray)
    }
}

impl std::fmt::Display for AccessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessKind::Float => write!(f, "float"),
            AccessKind::Int => write!(f, "int"),
            AccessKind::Bytes => write!(f, "bytes"),
            AccessKind::FloatArray => write!(f, "float array"),
            AccessKind::IntArray => write!(f, "int array"),
        }
    }
}

/// An opened channel, ready for recording
///
/// Array elements surface as scalar adapters already bound to their index,
/// so the engine only ever sees three payload kinds.
pub enum ChannelAccessor {
    /// Scalar float access (including float array elements)
    Float(Box<dyn ChannelAdapter<Value = f32>>),
    /// Scalar integer access (including int array elements)
    Int(Box<dyn ChannelAdapter<Value = i32>>),
    /// Byte-sequence access
    Bytes(Box<dyn ChannelAdapter<Value = Vec<u8>>>),
}

impl std::fmt::Debug for ChannelAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelAccessor::Float(_) => write!(f, "ChannelAccessor::Float"),
            ChannelAccessor::Int(_) => write!(f, "ChannelAccessor::Int"),
            ChannelAccessor::Bytes(_) => write!(f, "ChannelAccessor::Bytes"),
        }
    }
}

/// Host-side channel directory
///
/// Implemented by host integrations (and by [`crate::host::MockHost`] for
/// tests). `lookup` classifies a channel once the host knows it; `open`
/// produces the adapter actually used for recording.
#[cfg_attr(test, mockall::automock)]
pub trait ChannelCatalog {
    /// Classify a channel by name; `None` = not known to the host yet
    fn lookup(&mut self, name: &str) -> Option<ChannelTypes>;

    /// Open a channel through the given representation
    ///
    /// `index` selects the array element for the array kinds and is ignored
    /// otherwise. Returns `None` when the host refuses the combination.
    fn open(
        &mut self,
        name: &str,
        kind: AccessKind,
        index: Option<usize>,
    ) -> Option<ChannelAccessor>;
}
