//! The telemetry client: owns the ingestion loop and the bus.
//!
//! [`TelemetryClient::connect`] binds the UDP socket, spawns the ingestion
//! task and returns a handle. Subscriptions are taken from the handle;
//! dropping it (or calling [`TelemetryClient::shutdown`]) cancels the task
//! and releases the socket.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::bus::{FromPacket, PacketBus, Subscription};
use crate::config::UdpOptions;
use crate::dispatch::PacketDispatcher;
use crate::packets::PacketId;
use crate::source::{PacketSource, SourceEvent, UdpSource};
use crate::Result;

/// Consecutive receive failures tolerated before the loop gives up.
const MAX_RECV_ERRORS: u32 = 10;

/// Handle to a running telemetry ingestion loop.
///
/// The loop runs as a spawned task until the source ends, too many
/// consecutive receive errors accumulate, or the handle shuts it down.
pub struct TelemetryClient {
    bus: PacketBus,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl TelemetryClient {
    /// Bind a UDP socket per `options` and start ingesting, decoding every
    /// packet type.
    pub async fn connect(options: UdpOptions) -> Result<TelemetryClient> {
        let source = UdpSource::bind(&options).await?;
        Ok(Self::from_source(source, &options))
    }

    /// Like [`connect`](Self::connect), but decoding only the given packet
    /// types; other recognized types are skipped as unsupported.
    pub async fn connect_with_packets(
        options: UdpOptions,
        packets: &[PacketId],
    ) -> Result<TelemetryClient> {
        let source = UdpSource::bind(&options).await?;
        Ok(Self::from_source_with_packets(source, &options, packets))
    }

    /// Start ingesting from any [`PacketSource`], decoding every packet type.
    pub fn from_source<S: PacketSource>(source: S, options: &UdpOptions) -> TelemetryClient {
        let bus = PacketBus::with_capacity(options.bus_capacity);
        let dispatcher = PacketDispatcher::new(bus.clone());
        Self::spawn(source, bus, dispatcher)
    }

    /// Start ingesting from any [`PacketSource`] with a packet-type subset.
    pub fn from_source_with_packets<S: PacketSource>(
        source: S,
        options: &UdpOptions,
        packets: &[PacketId],
    ) -> TelemetryClient {
        let bus = PacketBus::with_capacity(options.bus_capacity);
        let dispatcher = PacketDispatcher::with_packets(bus.clone(), packets);
        Self::spawn(source, bus, dispatcher)
    }

    fn spawn<S: PacketSource>(
        source: S,
        bus: PacketBus,
        dispatcher: PacketDispatcher,
    ) -> TelemetryClient {
        let cancel = CancellationToken::new();
        let cancel_task = cancel.clone();
        let task = tokio::spawn(async move {
            ingestion_loop(source, dispatcher, cancel_task).await;
        });
        TelemetryClient { bus, cancel, task: Some(task) }
    }

    /// Subscribe to all future records of type `T`.
    pub fn subscribe<T: FromPacket>(&self) -> Subscription<T> {
        self.bus.subscribe()
    }

    /// Stop the ingestion loop and wait for it to finish.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            // The loop only ever exits cleanly; a panic inside it is a bug
            // worth surfacing, not swallowing.
            if let Err(e) = task.await {
                error!(%e, "ingestion task failed");
            }
        }
    }
}

impl Drop for TelemetryClient {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn ingestion_loop<S: PacketSource>(
    mut source: S,
    dispatcher: PacketDispatcher,
    cancel: CancellationToken,
) {
    info!("ingestion loop started");
    let mut datagram_count = 0u64;
    let mut error_count = 0u32;

    loop {
        let result = tokio::select! {
            _ = cancel.cancelled() => {
                info!("ingestion loop cancelled");
                break;
            }
            result = source.recv() => result,
        };

        match result {
            Ok(Some(SourceEvent::Datagram(datagram))) => {
                datagram_count += 1;
                error_count = 0;
                dispatcher.dispatch(&datagram);
            }
            Ok(Some(SourceEvent::Idle)) => {
                info!("no telemetry within the idle timeout, still listening");
            }
            Ok(None) => {
                info!("source ended after {datagram_count} datagrams");
                break;
            }
            Err(e) => {
                error_count += 1;
                error!("receive error ({error_count}/{MAX_RECV_ERRORS}): {e}");
                if error_count >= MAX_RECV_ERRORS {
                    error!("too many receive errors, shutting down ingestion");
                    break;
                }
                // Exponential backoff: 50ms, 100ms, 200ms, ...
                let backoff = std::time::Duration::from_millis(50 * (1 << error_count.min(5)));
                tokio::time::sleep(backoff).await;
            }
        }
    }

    info!("ingestion loop ended (processed {datagram_count} datagrams)");
}
