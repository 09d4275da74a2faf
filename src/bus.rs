//! Typed publish/subscribe distribution of decoded packets.
//!
//! The dispatcher publishes every successfully decoded [`Packet`] once; each
//! subscriber picks one record type and receives, in publish order, only
//! records of that type. Distribution is broadcast with a bounded buffer:
//! a subscriber that falls too far behind loses the oldest records rather
//! than stalling the ingestion loop, and the loss is logged.

use futures::{ready, Stream};
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tracing::warn;

use crate::packets::{
    Packet, PacketCarDamage, PacketCarSetups, PacketCarStatus, PacketCarTelemetry, PacketEvent,
    PacketFinalClassification, PacketLap, PacketLobbyInfo, PacketMotion, PacketParticipants,
    PacketSession, PacketSessionHistory,
};

/// Default capacity of the broadcast buffer behind each subscriber.
pub const DEFAULT_BUS_CAPACITY: usize = 256;

/// A record type that can be extracted from the [`Packet`] sum type.
///
/// Implemented for every `Packet*` record and for [`Packet`] itself, which
/// subscribes to everything.
pub trait FromPacket: Clone + Send + 'static {
    /// Extract this record from a published packet, if it is one.
    fn from_packet(packet: Packet) -> Option<Self>;
}

impl FromPacket for Packet {
    fn from_packet(packet: Packet) -> Option<Self> {
        Some(packet)
    }
}

macro_rules! impl_from_packet {
    ($($variant:ident => $record:ty),+ $(,)?) => {
        $(
            impl FromPacket for $record {
                fn from_packet(packet: Packet) -> Option<Self> {
                    match packet {
                        Packet::$variant(record) => Some(record),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_from_packet! {
    Motion => PacketMotion,
    Session => PacketSession,
    Lap => PacketLap,
    Event => PacketEvent,
    Participants => PacketParticipants,
    CarSetups => PacketCarSetups,
    CarTelemetry => PacketCarTelemetry,
    CarStatus => PacketCarStatus,
    FinalClassification => PacketFinalClassification,
    LobbyInfo => PacketLobbyInfo,
    CarDamage => PacketCarDamage,
    SessionHistory => PacketSessionHistory,
}

/// The distribution bus.
///
/// Cheap to clone; all clones publish into the same broadcast channel.
/// Publishing with no live subscribers is a no-op, not an error.
#[derive(Debug, Clone)]
pub struct PacketBus {
    tx: broadcast::Sender<Packet>,
}

impl PacketBus {
    /// Create a bus with the default buffer capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUS_CAPACITY)
    }

    /// Create a bus buffering up to `capacity` packets per lagging subscriber.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish one decoded packet to all current subscribers.
    pub fn publish(&self, packet: Packet) {
        // Returns Err only when there are no receivers; that is fine.
        let _ = self.tx.send(packet);
    }

    /// Subscribe to all records of type `T`, starting from this call.
    ///
    /// Records published before the subscription are never delivered.
    pub fn subscribe<T: FromPacket>(&self) -> Subscription<T> {
        Subscription {
            inner: BroadcastStream::new(self.tx.subscribe()),
            _marker: std::marker::PhantomData,
        }
    }

    /// Number of live subscribers, typed and untyped alike.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for PacketBus {
    fn default() -> Self {
        Self::new()
    }
}

pin_project! {
    /// A typed subscription stream produced by [`PacketBus::subscribe`].
    ///
    /// Yields records of `T` in publish order. Ends when the bus (and every
    /// clone of it) is dropped.
    pub struct Subscription<T> {
        #[pin]
        inner: BroadcastStream<Packet>,
        _marker: std::marker::PhantomData<T>,
    }
}

impl<T: FromPacket> Stream for Subscription<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            match ready!(this.inner.as_mut().poll_next(cx)) {
                Some(Ok(packet)) => {
                    if let Some(record) = T::from_packet(packet) {
                        return Poll::Ready(Some(record));
                    }
                    // Not our type; keep draining.
                }
                Some(Err(BroadcastStreamRecvError::Lagged(missed))) => {
                    warn!(missed, "subscriber lagging, dropped packets");
                }
                None => return Poll::Ready(None),
            }
        }
    }
}
