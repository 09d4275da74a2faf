//! Error types for telemetry decoding and distribution.
//!
//! All decode failures surface as [`TelemetryError`] values. The dispatcher
//! wraps every per-packet failure in [`TelemetryError::Packet`] so the
//! attempted packet type travels with the underlying cause, and nothing a
//! single malformed datagram produces can escape the ingestion loop.
//!
//! ## Error Categories
//!
//! - **Truncated**: the datagram ran out of bytes mid-field
//! - **UnknownEventCode**: an event sub-code outside the known table
//! - **Packet**: a decode failure tagged with the packet type attempted
//! - **Io**: socket bind/receive failures
//! - **Config**: options file problems
//! - **Closed**: the distribution bus has shut down

use std::path::PathBuf;
use thiserror::Error;

use crate::packets::PacketId;

/// Result type alias for telemetry operations.
pub type Result<T, E = TelemetryError> = std::result::Result<T, E>;

/// Main error type for telemetry operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TelemetryError {
    #[error("truncated datagram in {context}: needed {needed} bytes, {remaining} remain")]
    Truncated { context: &'static str, needed: usize, remaining: usize },

    #[error("unknown event code {:?}", String::from_utf8_lossy(code))]
    UnknownEventCode { code: [u8; 4] },

    #[error("could not decode {packet:?} packet")]
    Packet {
        packet: PacketId,
        #[source]
        source: Box<TelemetryError>,
    },

    #[error("socket error during {context}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {path}")]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("telemetry bus is closed")]
    Closed,
}

impl TelemetryError {
    /// Returns whether this error is potentially recoverable through retry.
    ///
    /// Decode failures are deterministic for a given datagram and never
    /// retryable; socket errors may clear on the next receive.
    pub fn is_retryable(&self) -> bool {
        match self {
            TelemetryError::Truncated { .. } => false,
            TelemetryError::UnknownEventCode { .. } => false,
            TelemetryError::Packet { .. } => false,
            TelemetryError::Io { .. } => true,
            TelemetryError::Config { .. } => false,
            TelemetryError::Closed => false,
        }
    }

    /// Helper constructor for truncation errors.
    pub fn truncated(context: &'static str, needed: usize, remaining: usize) -> Self {
        TelemetryError::Truncated { context, needed, remaining }
    }

    /// Tag an error with the packet type whose decode failed.
    pub fn for_packet(packet: PacketId, source: TelemetryError) -> Self {
        TelemetryError::Packet { packet, source: Box::new(source) }
    }

    /// Helper constructor for socket errors with operation context.
    pub fn io(context: &'static str, source: std::io::Error) -> Self {
        TelemetryError::Io { context, source }
    }

    /// Helper constructor for configuration errors.
    pub fn config(
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TelemetryError::Config { path: path.into(), source: Box::new(source) }
    }
}
