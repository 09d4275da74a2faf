//! Per-datagram dispatch: header decode, decoder selection, fault isolation.
//!
//! The dispatcher is the seam between raw datagrams and the typed bus. Every
//! datagram lands in exactly one of three buckets:
//!
//! - recognized and enabled: decode the payload, publish the record;
//! - recognized but not enabled: log at info and drop — protocol types the
//!   caller chose not to consume are expected traffic, not a fault;
//! - unrecognized discriminator: log at warn and drop — the sender speaks a
//!   newer protocol or the datagram is not F1 22 at all.
//!
//! Decode failures never propagate out of [`PacketDispatcher::dispatch`]; one
//! malformed datagram must not terminate the stream.

use tracing::{debug, error, info, warn};

use crate::bus::PacketBus;
use crate::packets::{Packet, PacketHeader, PacketId};
use crate::wire::WireCursor;
use crate::TelemetryError;

/// What became of one datagram. Returned for observability; the ingestion
/// loop treats every outcome the same way and keeps receiving.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The record was decoded and published to the bus.
    Published(PacketId),
    /// Recognized discriminator with no enabled decoder.
    Unsupported(PacketId),
    /// Discriminator outside the known range.
    Unrecognized(i8),
    /// Header or payload decode failed; the datagram was dropped.
    Failed(TelemetryError),
}

/// Decodes datagrams and publishes the results to a [`PacketBus`].
pub struct PacketDispatcher {
    bus: PacketBus,
    enabled: [bool; PacketId::ALL.len()],
}

impl PacketDispatcher {
    /// A dispatcher with every packet type enabled.
    pub fn new(bus: PacketBus) -> Self {
        Self { bus, enabled: [true; PacketId::ALL.len()] }
    }

    /// A dispatcher decoding only the given packet types; everything else
    /// recognized is treated as unsupported.
    pub fn with_packets(bus: PacketBus, packets: &[PacketId]) -> Self {
        let mut enabled = [false; PacketId::ALL.len()];
        for id in packets {
            enabled[*id as i8 as usize] = true;
        }
        Self { bus, enabled }
    }

    /// Decode one datagram and publish the result, if any.
    pub fn dispatch(&self, datagram: &[u8]) -> DispatchOutcome {
        let mut cur = WireCursor::new(datagram);
        let header = match PacketHeader::decode(&mut cur) {
            Ok(header) => header,
            Err(err) => {
                error!(len = datagram.len(), %err, "dropping datagram with undecodable header");
                return DispatchOutcome::Failed(err);
            }
        };

        let Some(id) = header.kind() else {
            warn!(packet_id = header.packet_id, "unrecognized packet discriminator");
            return DispatchOutcome::Unrecognized(header.packet_id);
        };

        if !self.enabled[id as i8 as usize] {
            info!(?id, "unsupported packet type, skipping");
            return DispatchOutcome::Unsupported(id);
        }

        match Packet::decode(&mut cur, id, header) {
            Ok(packet) => {
                debug!(?id, frame = header.frame_identifier, "decoded packet");
                self.bus.publish(packet);
                DispatchOutcome::Published(id)
            }
            Err(source) => {
                let err = TelemetryError::for_packet(id, source);
                error!(%err, "dropping undecodable datagram");
                DispatchOutcome::Failed(err)
            }
        }
    }
}
