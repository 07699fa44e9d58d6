//! Configuration for the record-and-replay engine
//!
//! Two formats are supported:
//!
//! - **TOML** (primary): a `tick_interval` plus `[[channels]]` entries, each
//!   naming a host channel with optional element index, retention capacity,
//!   recording tolerance, and initial value.
//! - **Legacy channel list**: one channel name per line with an optional
//!   `[index]` suffix, `#` comment lines, and a `%<seconds>` line overriding
//!   the tick interval. Kept so existing channel lists import unchanged.
//!
//! # Example
//!
//! ```
//! use rewind_rs::config::RecorderConfig;
//!
//! let config = RecorderConfig::from_toml_str(r#"
//!     tick_interval = 0.05
//!
//!     [[channels]]
//!     name = "env/wind_speed"
//!     tolerance = 0.1
//!
//!     [[channels]]
//!     name = "gear/deploy_ratio"
//!     index = 2
//! "#).unwrap();
//! assert_eq!(config.channels.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, RewindError};

/// Default scheduling interval between driver ticks, in seconds
pub const DEFAULT_TICK_INTERVAL_SECONDS: f64 = 0.01;

/// One channel to record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelSpec {
    /// Host-side channel name
    pub name: String,
    /// Array element index, for channels whose representation is an array
    #[serde(default)]
    pub index: Option<usize>,
    /// Maximum retained sample count (0 = unbounded)
    #[serde(default)]
    pub capacity: usize,
    /// Recording tolerance for scalar channels (0 = store any difference)
    #[serde(default)]
    pub tolerance: f64,
    /// Initial value seeded at time zero when the recorder is re-initialized
    #[serde(default)]
    pub init: f64,
}

impl ChannelSpec {
    /// Create a spec with defaults (unbounded, zero tolerance, zero init)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
            capacity: 0,
            tolerance: 0.0,
            init: 0.0,
        }
    }

    /// Set the array element index
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Set the retention capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the recording tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the initial value
    pub fn with_init(mut self, init: f64) -> Self {
        self.init = init;
        self
    }
}

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecorderConfig {
    /// Seconds between driver ticks
    #[serde(default = "default_tick_interval")]
    pub tick_interval: f64,
    /// Channels to register for recording
    #[serde(default)]
    pub channels: Vec<ChannelSpec>,
}

fn default_tick_interval() -> f64 {
    DEFAULT_TICK_INTERVAL_SECONDS
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL_SECONDS,
            channels: Vec::new(),
        }
    }
}

impl RecorderConfig {
    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a TOML configuration string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RewindError::Config(e.to_string()))
    }

    /// Save as TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| RewindError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load a legacy plain-text channel list
    pub fn load_channel_list(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_channel_list_str(&content)
    }

    /// Parse the legacy line format
    ///
    /// One channel name per line, optional `[index]` suffix for array
    /// elements. `#` starts a comment line, `%<seconds>` overrides the tick
    /// interval. Spaces and carriage returns are stripped so lists written
    /// on any platform parse the same.
    pub fn from_channel_list_str(content: &str) -> Result<Self> {
        let mut config = Self::default();

        for (line_no, raw) in content.lines().enumerate() {
            let line: String = raw.chars().filter(|c| !matches!(c, ' ' | '\r')).collect();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(interval) = line.strip_prefix('%') {
                config.tick_interval =
                    interval.parse::<f64>().map_err(|_| RewindError::Parse {
                        line: line_no + 1,
                        message: format!("invalid interval '{interval}'"),
                    })?;
                continue;
            }

            config.channels.push(parse_channel_line(&line, line_no + 1)?);
        }

        Ok(config)
    }

    /// Interval to hand to the host scheduler
    ///
    /// `0` in the configuration means "every frame", which hosts with an
    /// XPLM-style scheduling convention express as a negative interval.
    pub fn schedule_interval(&self) -> f64 {
        if self.tick_interval == 0.0 {
            -1.0
        } else {
            self.tick_interval
        }
    }
}

/// Parse one `name` or `name[index]` channel line
fn parse_channel_line(line: &str, line_no: usize) -> Result<ChannelSpec> {
    let (Some(open), Some(close)) = (line.find('['), line.find(']')) else {
        return Ok(ChannelSpec::new(line));
    };

    let mut spec = ChannelSpec::new(&line[..open]);
    if close > open + 1 {
        let digits = &line[open + 1..close];
        let index = digits.parse::<usize>().map_err(|_| RewindError::Parse {
            line: line_no,
            message: format!("invalid element index '{digits}'"),
        })?;
        spec.index = Some(index);
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip() {
        let config = RecorderConfig {
            tick_interval: 0.05,
            channels: vec![
                ChannelSpec::new("env/wind_speed").with_tolerance(0.1),
                ChannelSpec::new("gear/deploy_ratio")
                    .with_index(2)
                    .with_capacity(5000),
            ],
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewind.toml");
        config.save(&path).unwrap();

        let loaded = RecorderConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_toml_defaults() {
        let config = RecorderConfig::from_toml_str(
            r#"
            [[channels]]
            name = "env/wind_speed"
            "#,
        )
        .unwrap();
        assert_eq!(config.tick_interval, DEFAULT_TICK_INTERVAL_SECONDS);
        assert_eq!(config.channels[0].capacity, 0);
        assert_eq!(config.channels[0].tolerance, 0.0);
        assert_eq!(config.channels[0].index, None);
    }

    #[test]
    fn test_toml_invalid() {
        assert!(RecorderConfig::from_toml_str("channels = 3").is_err());
    }

    #[test]
    fn test_channel_list_basic() {
        let config = RecorderConfig::from_channel_list_str(
            "# my channels\n\
             %0.02\n\
             env/wind_speed\n\
             \n\
             gear/deploy_ratio[2]\n",
        )
        .unwrap();

        assert_eq!(config.tick_interval, 0.02);
        assert_eq!(config.channels.len(), 2);
        assert_eq!(config.channels[0].name, "env/wind_speed");
        assert_eq!(config.channels[1].name, "gear/deploy_ratio");
        assert_eq!(config.channels[1].index, Some(2));
    }

    #[test]
    fn test_channel_list_strips_spaces_and_cr() {
        let config =
            RecorderConfig::from_channel_list_str("  env/wind_speed \r\n").unwrap();
        assert_eq!(config.channels[0].name, "env/wind_speed");
    }

    #[test]
    fn test_channel_list_empty_index_ignored() {
        // A malformed `[]` suffix keeps the channel, without an index
        let config = RecorderConfig::from_channel_list_str("gear/deploy_ratio[]\n").unwrap();
        assert_eq!(config.channels[0].name, "gear/deploy_ratio");
        assert_eq!(config.channels[0].index, None);
    }

    #[test]
    fn test_channel_list_bad_index() {
        let err = RecorderConfig::from_channel_list_str("gear/deploy_ratio[abc]\n").unwrap_err();
        assert!(err.to_string().contains("invalid element index"));
    }

    #[test]
    fn test_channel_list_bad_interval() {
        assert!(RecorderConfig::from_channel_list_str("%fast\n").is_err());
    }

    #[test]
    fn test_schedule_interval_zero_means_every_frame() {
        let mut config = RecorderConfig::default();
        config.tick_interval = 0.0;
        assert_eq!(config.schedule_interval(), -1.0);

        config.tick_interval = 0.02;
        assert_eq!(config.schedule_interval(), 0.02);
    }
}
