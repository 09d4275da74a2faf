//! Client configuration.
//!
//! Options deserialize from YAML; every field has a default matching the
//! game's out-of-the-box UDP settings, so an empty document is a valid
//! configuration.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;
use std::time::Duration;

use crate::bus::DEFAULT_BUS_CAPACITY;
use crate::{Result, TelemetryError};

/// UDP port the game sends telemetry to by default.
pub const DEFAULT_PORT: u16 = 2077;
/// Default idle timeout per receive attempt, in milliseconds.
pub const DEFAULT_IDLE_TIMEOUT_MS: u64 = 5000;

/// Options for the UDP ingestion loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UdpOptions {
    /// Address to bind the listening socket on.
    pub bind_address: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// How long one receive attempt waits before reporting the stream idle,
    /// in milliseconds. Idle is informational; the loop keeps listening.
    pub idle_timeout_ms: u64,
    /// Packets buffered per lagging bus subscriber.
    pub bus_capacity: usize,
}

impl Default for UdpOptions {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            idle_timeout_ms: DEFAULT_IDLE_TIMEOUT_MS,
            bus_capacity: DEFAULT_BUS_CAPACITY,
        }
    }
}

impl UdpOptions {
    /// Load options from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| TelemetryError::config(path, e))?;
        Self::from_yaml(&raw).map_err(|e| match e {
            TelemetryError::Config { source, .. } => TelemetryError::Config {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse options from a YAML string.
    pub fn from_yaml(raw: &str) -> Result<Self> {
        serde_yaml_ng::from_str(raw).map_err(|e| TelemetryError::config("<inline>", e))
    }

    /// The idle timeout as a [`Duration`].
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }
}
