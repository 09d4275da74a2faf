//! Datagram sources for the ingestion loop.
//!
//! [`PacketSource`] abstracts over where raw datagrams come from, so the
//! ingestion loop can be exercised against scripted sources in tests and a
//! bound UDP socket in production. Sources handle their own timing: a
//! receive attempt that stays quiet past the idle timeout reports
//! [`SourceEvent::Idle`] instead of blocking forever.

use async_trait::async_trait;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

use crate::config::UdpOptions;
use crate::{Result, TelemetryError};

/// Largest datagram the 2022 protocol produces, with headroom.
const MAX_DATAGRAM: usize = 2048;

/// One observation from a datagram source.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceEvent {
    /// A datagram arrived.
    Datagram(Vec<u8>),
    /// Nothing arrived within the idle timeout. Informational; the loop
    /// keeps receiving.
    Idle,
}

/// A source of raw telemetry datagrams.
#[async_trait]
pub trait PacketSource: Send + 'static {
    /// Wait for the next event.
    ///
    /// Returns:
    /// - `Ok(Some(event))` - A datagram arrived, or the source went idle
    /// - `Ok(None)` - Source exhausted (normal termination)
    /// - `Err(e)` - Receive failure; may clear on retry
    async fn recv(&mut self) -> Result<Option<SourceEvent>>;
}

/// A [`PacketSource`] reading from a bound UDP socket.
///
/// The socket never terminates the stream on its own: it yields datagrams
/// and idle notices until the ingestion loop is cancelled.
pub struct UdpSource {
    socket: UdpSocket,
    idle_timeout: Duration,
    buf: Vec<u8>,
}

impl UdpSource {
    /// Bind a listening socket per the given options.
    pub async fn bind(options: &UdpOptions) -> Result<UdpSource> {
        let socket = UdpSocket::bind((options.bind_address, options.port))
            .await
            .map_err(|e| TelemetryError::io("udp bind", e))?;
        debug!(address = %options.bind_address, port = options.port, "udp socket bound");
        Ok(UdpSource {
            socket,
            idle_timeout: options.idle_timeout(),
            buf: vec![0; MAX_DATAGRAM],
        })
    }

    /// The local address the socket actually bound to.
    pub fn local_addr(&self) -> Result<std::net::SocketAddr> {
        self.socket.local_addr().map_err(|e| TelemetryError::io("udp local addr", e))
    }
}

#[async_trait]
impl PacketSource for UdpSource {
    async fn recv(&mut self) -> Result<Option<SourceEvent>> {
        match tokio::time::timeout(self.idle_timeout, self.socket.recv_from(&mut self.buf)).await {
            Err(_elapsed) => Ok(Some(SourceEvent::Idle)),
            Ok(Ok((len, _peer))) => Ok(Some(SourceEvent::Datagram(self.buf[..len].to_vec()))),
            Ok(Err(e)) => Err(TelemetryError::io("udp receive", e)),
        }
    }
}
