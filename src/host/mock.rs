//! Mock Host Implementation for Testing
//!
//! This module provides a mock channel host that can be used for testing
//! the record/replay pipeline without a real simulation host. Channels are
//! plain in-memory cells that tests can fill directly or drive with
//! configurable generation patterns.
//!
//! # Features
//!
//! - **Pattern-based data generation**: Drive float channels with a
//!   constant, sine, or counter pattern via [`MockHost::advance_to`]
//! - **Delayed visibility**: Hide a channel from lookup until a test makes
//!   it visible, to exercise registration retries
//! - **Per-channel writability**: Mark channels read-only to exercise
//!   rejection paths
//!
//! # Example
//!
//! ```
//! use rewind_rs::host::{MockHost, MockPattern};
//! use rewind_rs::channel::ChannelCatalog;
//!
//! let mut host = MockHost::new();
//! host.add_float_channel("env/wind_speed", 5.0);
//! host.set_pattern("env/wind_speed", MockPattern::Sine {
//!     frequency: 1.0,
//!     amplitude: 10.0,
//!     offset: 5.0,
//! });
//!
//! host.advance_to(0.25);
//! assert!(host.lookup("env/wind_speed").is_some());
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::channel::{AccessKind, ChannelAccessor, ChannelAdapter, ChannelCatalog, ChannelTypes};

/// Pattern for generating mock channel data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockPattern {
    /// Constant value
    Constant(f64),
    /// Sine wave with frequency and amplitude
    Sine {
        frequency: f64,
        amplitude: f64,
        offset: f64,
    },
    /// Counter that increments by `step` per advance
    Counter { step: f64 },
}

impl MockPattern {
    fn value_at(&self, elapsed_secs: f64, previous: f64) -> f64 {
        match *self {
            MockPattern::Constant(v) => v,
            MockPattern::Sine {
                frequency,
                amplitude,
                offset,
            } => offset + amplitude * (2.0 * std::f64::consts::PI * frequency * elapsed_secs).sin(),
            MockPattern::Counter { step } => previous + step,
        }
    }
}

/// Backing state for one mock channel
#[derive(Debug, Default)]
struct MockCell {
    types: ChannelTypes,
    visible: bool,
    pattern: Option<MockPattern>,
    float: f32,
    int: i32,
    bytes: Vec<u8>,
    float_array: Vec<f32>,
    int_array: Vec<i32>,
}

type SharedCell = Rc<RefCell<MockCell>>;

/// Mock channel host for testing without a real simulation
///
/// Cells are shared between the host and the adapters it hands out, so a
/// test can change a channel's live value mid-run and observe write-backs
/// made during replay.
#[derive(Default)]
pub struct MockHost {
    cells: HashMap<String, SharedCell>,
}

impl MockHost {
    /// Create a host with no channels
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, name: impl Into<String>, cell: MockCell) {
        self.cells.insert(name.into(), Rc::new(RefCell::new(cell)));
    }

    /// Add a visible, writable float channel
    pub fn add_float_channel(&mut self, name: impl Into<String>, initial: f32) {
        self.insert(
            name,
            MockCell {
                types: ChannelTypes {
                    float: true,
                    writable: true,
                    ..Default::default()
                },
                visible: true,
                float: initial,
                ..Default::default()
            },
        );
    }

    /// Add a visible, writable int channel
    pub fn add_int_channel(&mut self, name: impl Into<String>, initial: i32) {
        self.insert(
            name,
            MockCell {
                types: ChannelTypes {
                    int: true,
                    writable: true,
                    ..Default::default()
                },
                visible: true,
                int: initial,
                ..Default::default()
            },
        );
    }

    /// Add a visible, writable byte-sequence channel
    pub fn add_bytes_channel(&mut self, name: impl Into<String>, initial: impl Into<Vec<u8>>) {
        self.insert(
            name,
            MockCell {
                types: ChannelTypes {
                    bytes: true,
                    writable: true,
                    ..Default::default()
                },
                visible: true,
                bytes: initial.into(),
                ..Default::default()
            },
        );
    }

    /// Add a visible, writable float-array channel
    pub fn add_float_array_channel(&mut self, name: impl Into<String>, initial: Vec<f32>) {
        self.insert(
            name,
            MockCell {
                types: ChannelTypes {
                    float_array: true,
                    writable: true,
                    ..Default::default()
                },
                visible: true,
                float_array: initial,
                ..Default::default()
            },
        );
    }

    /// Add a visible, writable int-array channel
    pub fn add_int_array_channel(&mut self, name: impl Into<String>, initial: Vec<i32>) {
        self.insert(
            name,
            MockCell {
                types: ChannelTypes {
                    int_array: true,
                    writable: true,
                    ..Default::default()
                },
                visible: true,
                int_array: initial,
                ..Default::default()
            },
        );
    }

    /// Hide or reveal a channel from [`ChannelCatalog::lookup`]
    pub fn set_visible(&mut self, name: &str, visible: bool) {
        if let Some(cell) = self.cells.get(name) {
            cell.borrow_mut().visible = visible;
        }
    }

    /// Mark a channel read-only (or writable again)
    pub fn set_writable(&mut self, name: &str, writable: bool) {
        if let Some(cell) = self.cells.get(name) {
            cell.borrow_mut().types.writable = writable;
        }
    }

    /// Attach a generation pattern to a float channel
    pub fn set_pattern(&mut self, name: &str, pattern: MockPattern) {
        if let Some(cell) = self.cells.get(name) {
            cell.borrow_mut().pattern = Some(pattern);
        }
    }

    /// Apply every attached pattern at the given elapsed time
    pub fn advance_to(&mut self, elapsed_secs: f64) {
        for cell in self.cells.values() {
            let mut cell = cell.borrow_mut();
            if let Some(pattern) = cell.pattern {
                cell.float = pattern.value_at(elapsed_secs, cell.float as f64) as f32;
            }
        }
    }

    /// Set a float channel's live value
    pub fn set_float(&mut self, name: &str, value: f32) {
        if let Some(cell) = self.cells.get(name) {
            cell.borrow_mut().float = value;
        }
    }

    /// Set an int channel's live value
    pub fn set_int(&mut self, name: &str, value: i32) {
        if let Some(cell) = self.cells.get(name) {
            cell.borrow_mut().int = value;
        }
    }

    /// Set one element of a float-array channel
    pub fn set_float_element(&mut self, name: &str, index: usize, value: f32) {
        if let Some(cell) = self.cells.get(name) {
            if let Some(slot) = cell.borrow_mut().float_array.get_mut(index) {
                *slot = value;
            }
        }
    }

    /// Set one element of an int-array channel
    pub fn set_int_element(&mut self, name: &str, index: usize, value: i32) {
        if let Some(cell) = self.cells.get(name) {
            if let Some(slot) = cell.borrow_mut().int_array.get_mut(index) {
                *slot = value;
            }
        }
    }

    /// Set a byte-sequence channel's live value
    pub fn set_bytes(&mut self, name: &str, value: impl Into<Vec<u8>>) {
        if let Some(cell) = self.cells.get(name) {
            cell.borrow_mut().bytes = value.into();
        }
    }

    /// Current value of a float channel
    pub fn float(&self, name: &str) -> Option<f32> {
        self.cells.get(name).map(|c| c.borrow().float)
    }

    /// Current value of an int channel
    pub fn int(&self, name: &str) -> Option<i32> {
        self.cells.get(name).map(|c| c.borrow().int)
    }

    /// Current value of a byte-sequence channel
    pub fn bytes(&self, name: &str) -> Option<Vec<u8>> {
        self.cells.get(name).map(|c| c.borrow().bytes.clone())
    }

    /// Element of a float-array channel
    pub fn float_element(&self, name: &str, index: usize) -> Option<f32> {
        self.cells
            .get(name)
            .and_then(|c| c.borrow().float_array.get(index).copied())
    }

    /// Element of an int-array channel
    pub fn int_element(&self, name: &str, index: usize) -> Option<i32> {
        self.cells
            .get(name)
            .and_then(|c| c.borrow().int_array.get(index).copied())
    }
}

impl ChannelCatalog for MockHost {
    fn lookup(&mut self, name: &str) -> Option<ChannelTypes> {
        let cell = self.cells.get(name)?;
        let cell = cell.borrow();
        cell.visible.then_some(cell.types)
    }

    fn open(
        &mut self,
        name: &str,
        kind: AccessKind,
        index: Option<usize>,
    ) -> Option<ChannelAccessor> {
        let cell = self.cells.get(name)?.clone();
        match kind {
            AccessKind::Float | AccessKind::FloatArray => Some(ChannelAccessor::Float(Box::new(
                MockFloatAdapter { cell, index },
            ))),
            AccessKind::Int | AccessKind::IntArray => {
                Some(ChannelAccessor::Int(Box::new(MockIntAdapter {
                    cell,
                    index,
                })))
            }
            AccessKind::Bytes => Some(ChannelAccessor::Bytes(Box::new(MockBytesAdapter { cell }))),
        }
    }
}

struct MockFloatAdapter {
    cell: SharedCell,
    index: Option<usize>,
}

impl ChannelAdapter for MockFloatAdapter {
    type Value = f32;

    fn read(&mut self) -> f32 {
        let cell = self.cell.borrow();
        match self.index {
            None => cell.float,
            Some(i) => cell.float_array.get(i).copied().unwrap_or(0.0),
        }
    }

    fn write(&mut self, value: &f32) {
        let mut cell = self.cell.borrow_mut();
        match self.index {
            None => cell.float = *value,
            Some(i) => {
                if let Some(slot) = cell.float_array.get_mut(i) {
                    *slot = *value;
                }
            }
        }
    }
}

struct MockIntAdapter {
    cell: SharedCell,
    index: Option<usize>,
}

impl ChannelAdapter for MockIntAdapter {
    type Value = i32;

    fn read(&mut self) -> i32 {
        let cell = self.cell.borrow();
        match self.index {
            None => cell.int,
            Some(i) => cell.int_array.get(i).copied().unwrap_or(0),
        }
    }

    fn write(&mut self, value: &i32) {
        let mut cell = self.cell.borrow_mut();
        match self.index {
            None => cell.int = *value,
            Some(i) => {
                if let Some(slot) = cell.int_array.get_mut(i) {
                    *slot = *value;
                }
            }
        }
    }
}

struct MockBytesAdapter {
    cell: SharedCell,
}

impl ChannelAdapter for MockBytesAdapter {
    type Value = Vec<u8>;

    fn read(&mut self) -> Vec<u8> {
        self.cell.borrow().bytes.clone()
    }

    fn write(&mut self, value: &Vec<u8>) {
        self.cell.borrow_mut().bytes = value.clone();
    }
}
