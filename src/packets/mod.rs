//! Typed records for the twelve F1 22 packet types.
//!
//! Each submodule owns one wire layout and exposes a `Packet*` record plus
//! its nested per-car or per-entry blocks. Decoding is driven by the
//! dispatcher: it decodes the shared [`PacketHeader`], selects the record
//! decoder by discriminator and hands both the cursor and the header over.

mod classification;
mod damage;
mod event;
mod header;
mod history;
mod ids;
mod lap;
mod lobby;
mod motion;
mod participants;
mod session;
mod setups;
mod status;
mod telemetry;

pub use classification::{FinalClassification, PacketFinalClassification, MAX_TYRE_STINTS};
pub use damage::{CarDamage, PacketCarDamage};
pub use event::{EventDetail, PacketEvent};
pub use header::{PacketHeader, HEADER_SIZE};
pub use history::{
    LapHistory, PacketSessionHistory, TyreStintHistory, LAP_VALID, MAX_LAP_HISTORY,
    MAX_STINT_HISTORY, SECTOR_1_VALID, SECTOR_2_VALID, SECTOR_3_VALID,
};
pub use ids::{buttons, EventCode, InfringementType, PacketId, PenaltyType, SurfaceType, TrackId};
pub use lap::{LapData, PacketLap};
pub use lobby::{LobbyInfo, PacketLobbyInfo};
pub use motion::{CarMotion, PacketMotion};
pub use participants::{PacketParticipants, ParticipantData};
pub use session::{
    MarshalZone, PacketSession, WeatherForecastSample, MAX_MARSHAL_ZONES, MAX_WEATHER_SAMPLES,
};
pub use setups::{CarSetup, PacketCarSetups};
pub use status::{CarStatus, PacketCarStatus};
pub use telemetry::{CarTelemetry, PacketCarTelemetry};

use crate::wire::WireCursor;
use crate::Result;

/// Number of car slots carried by the fixed per-car arrays.
pub const MAX_CARS: usize = 22;

/// A decoded packet of any recognized type.
///
/// This is what flows through the distribution bus; typed subscriptions
/// filter it back down to a single record type.
#[derive(Debug, Clone, PartialEq)]
pub enum Packet {
    Motion(PacketMotion),
    Session(PacketSession),
    Lap(PacketLap),
    Event(PacketEvent),
    Participants(PacketParticipants),
    CarSetups(PacketCarSetups),
    CarTelemetry(PacketCarTelemetry),
    CarStatus(PacketCarStatus),
    FinalClassification(PacketFinalClassification),
    LobbyInfo(PacketLobbyInfo),
    CarDamage(PacketCarDamage),
    SessionHistory(PacketSessionHistory),
}

impl Packet {
    /// Decode the payload for `id`, which must follow the header in `cur`.
    pub(crate) fn decode(
        cur: &mut WireCursor<'_>,
        id: PacketId,
        header: PacketHeader,
    ) -> Result<Packet> {
        Ok(match id {
            PacketId::Motion => Packet::Motion(PacketMotion::decode(cur, header)?),
            PacketId::Session => Packet::Session(PacketSession::decode(cur, header)?),
            PacketId::LapData => Packet::Lap(PacketLap::decode(cur, header)?),
            PacketId::Event => Packet::Event(PacketEvent::decode(cur, header)?),
            PacketId::Participants => {
                Packet::Participants(PacketParticipants::decode(cur, header)?)
            }
            PacketId::CarSetups => Packet::CarSetups(PacketCarSetups::decode(cur, header)?),
            PacketId::CarTelemetry => {
                Packet::CarTelemetry(PacketCarTelemetry::decode(cur, header)?)
            }
            PacketId::CarStatus => Packet::CarStatus(PacketCarStatus::decode(cur, header)?),
            PacketId::FinalClassification => {
                Packet::FinalClassification(PacketFinalClassification::decode(cur, header)?)
            }
            PacketId::LobbyInfo => Packet::LobbyInfo(PacketLobbyInfo::decode(cur, header)?),
            PacketId::CarDamage => Packet::CarDamage(PacketCarDamage::decode(cur, header)?),
            PacketId::SessionHistory => {
                Packet::SessionHistory(PacketSessionHistory::decode(cur, header)?)
            }
        })
    }

    /// The packet type this record decodes from.
    pub fn kind(&self) -> PacketId {
        match self {
            Packet::Motion(_) => PacketId::Motion,
            Packet::Session(_) => PacketId::Session,
            Packet::Lap(_) => PacketId::LapData,
            Packet::Event(_) => PacketId::Event,
            Packet::Participants(_) => PacketId::Participants,
            Packet::CarSetups(_) => PacketId::CarSetups,
            Packet::CarTelemetry(_) => PacketId::CarTelemetry,
            Packet::CarStatus(_) => PacketId::CarStatus,
            Packet::FinalClassification(_) => PacketId::FinalClassification,
            Packet::LobbyInfo(_) => PacketId::LobbyInfo,
            Packet::CarDamage(_) => PacketId::CarDamage,
            Packet::SessionHistory(_) => PacketId::SessionHistory,
        }
    }

    /// The header decoded from the datagram this record came from.
    pub fn header(&self) -> &PacketHeader {
        match self {
            Packet::Motion(p) => &p.header,
            Packet::Session(p) => &p.header,
            Packet::Lap(p) => &p.header,
            Packet::Event(p) => &p.header,
            Packet::Participants(p) => &p.header,
            Packet::CarSetups(p) => &p.header,
            Packet::CarTelemetry(p) => &p.header,
            Packet::CarStatus(p) => &p.header,
            Packet::FinalClassification(p) => &p.header,
            Packet::LobbyInfo(p) => &p.header,
            Packet::CarDamage(p) => &p.header,
            Packet::SessionHistory(p) => &p.header,
        }
    }
}
