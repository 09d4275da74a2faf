//! Participants packet: who is driving each car in the session.
//!
//! Frequency: every 5 seconds. This is the only per-car packet that is
//! count-prefixed on the wire rather than fixed at 22 entries.

use crate::packets::PacketHeader;
use crate::wire::WireCursor;
use crate::Result;

/// One participant in the session.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantData {
    /// 1 if the vehicle is AI controlled, 0 if human.
    pub ai_controlled: u8,
    /// Driver id; 255 for network human players.
    pub driver_id: u8,
    /// Unique network id for multiplayer.
    pub network_id: u8,
    pub team_id: u8,
    /// 1 if the entry is a My Team car.
    pub my_team: u8,
    /// Race number of the car.
    pub race_number: u8,
    pub nationality: u8,
    /// Driver display name, decoded from the fixed 48-byte buffer.
    pub name: String,
    /// Player's UDP visibility setting: 0 = restricted, 1 = public.
    pub your_telemetry: u8,
}

impl ParticipantData {
    fn decode(cur: &mut WireCursor<'_>) -> Result<ParticipantData> {
        Ok(ParticipantData {
            ai_controlled: cur.u8("participant block")?,
            driver_id: cur.u8("participant block")?,
            network_id: cur.u8("participant block")?,
            team_id: cur.u8("participant block")?,
            my_team: cur.u8("participant block")?,
            race_number: cur.u8("participant block")?,
            nationality: cur.u8("participant block")?,
            name: cur.name("participant name")?,
            your_telemetry: cur.u8("participant block")?,
        })
    }
}

/// The participants packet: a count-prefixed list of active entries.
#[derive(Debug, Clone, PartialEq)]
pub struct PacketParticipants {
    pub header: PacketHeader,
    /// Number of active cars in the data; should match the list length.
    pub num_active_cars: u8,
    pub participants: Vec<ParticipantData>,
}

impl PacketParticipants {
    pub(crate) fn decode(
        cur: &mut WireCursor<'_>,
        header: PacketHeader,
    ) -> Result<PacketParticipants> {
        let num_active_cars = cur.u8("participant count")?;
        let mut participants = Vec::with_capacity(num_active_cars as usize);
        for _ in 0..num_active_cars {
            participants.push(ParticipantData::decode(cur)?);
        }
        Ok(PacketParticipants { header, num_active_cars, participants })
    }
}
