//! Shared test fixtures: synthetic datagram builders and scripted sources.
//!
//! The encoders here mirror the wire layouts field for field, with a few
//! recognizable seed values the decoder tests assert against.

use std::collections::VecDeque;

use crate::packets::{
    PacketHeader, PacketLap, PacketMotion, PacketSession, HEADER_SIZE, MAX_CARS,
};
use crate::source::{PacketSource, SourceEvent};
use crate::wire::WireCursor;
use crate::Result;

/// Field-for-field header builder.
#[derive(Debug, Clone, Copy)]
pub struct HeaderSpec {
    pub packet_format: u16,
    pub game_major_version: i8,
    pub game_minor_version: i8,
    pub packet_version: i8,
    pub packet_id: i8,
    pub session_uid: u64,
    pub session_time: f32,
    pub frame_identifier: u32,
    pub player_car_index: i8,
    pub secondary_player_car_index: i8,
}

impl Default for HeaderSpec {
    fn default() -> Self {
        Self {
            packet_format: 2022,
            game_major_version: 1,
            game_minor_version: 18,
            packet_version: 1,
            packet_id: 0,
            session_uid: 0x00C0_FFEE_0000_2022,
            session_time: 123.5,
            frame_identifier: 1000,
            player_car_index: 0,
            secondary_player_car_index: -1,
        }
    }
}

impl HeaderSpec {
    /// Encode the 24 header bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut b = Vec::with_capacity(HEADER_SIZE);
        b.extend_from_slice(&self.packet_format.to_le_bytes());
        b.push(self.game_major_version as u8);
        b.push(self.game_minor_version as u8);
        b.push(self.packet_version as u8);
        b.push(self.packet_id as u8);
        b.extend_from_slice(&self.session_uid.to_le_bytes());
        b.extend_from_slice(&self.session_time.to_le_bytes());
        b.extend_from_slice(&self.frame_identifier.to_le_bytes());
        b.push(self.player_car_index as u8);
        b.push(self.secondary_player_car_index as u8);
        b
    }

    /// The header record these bytes decode to.
    pub fn decoded(&self) -> PacketHeader {
        PacketHeader {
            packet_format: self.packet_format,
            game_major_version: self.game_major_version,
            game_minor_version: self.game_minor_version,
            packet_version: self.packet_version,
            packet_id: self.packet_id,
            session_uid: self.session_uid,
            session_time: self.session_time,
            frame_identifier: self.frame_identifier,
            player_car_index: self.player_car_index,
            secondary_player_car_index: self.secondary_player_car_index,
        }
    }
}

/// Motion payload: car `i` is seeded with `world_position_x = i`, the
/// suspension position array is `[0.25, 0.5, 0.75, 1.0]` and the front
/// wheels angle is `0.125`.
pub fn encode_motion_payload() -> Vec<u8> {
    let mut b = Vec::new();
    for i in 0..MAX_CARS {
        // 60-byte car block.
        for v in [i as f32, 2.0, 3.0, 40.0, 0.5, -1.0] {
            b.extend_from_slice(&v.to_le_bytes());
        }
        for d in [100u16, 200, 300, 400, 500, 600] {
            b.extend_from_slice(&d.to_le_bytes());
        }
        for v in [1.2f32, -0.8, 0.1, 0.4, -0.02, 0.01] {
            b.extend_from_slice(&v.to_le_bytes());
        }
    }
    for arr in [
        [0.25f32, 0.5, 0.75, 1.0], // suspension position
        [0.1, 0.2, 0.3, 0.4],      // suspension velocity
        [1.0, 1.1, 1.2, 1.3],      // suspension acceleration
        [80.0, 80.5, 81.0, 81.5],  // wheel speed
        [0.02, 0.03, 0.01, 0.02],  // wheel slip
    ] {
        for v in arr {
            b.extend_from_slice(&v.to_le_bytes());
        }
    }
    for v in [0.5f32, 0.0, 40.0, 0.1, 0.2, 0.3, 0.01, 0.02, 0.03, 0.125] {
        b.extend_from_slice(&v.to_le_bytes());
    }
    b
}

/// Knobs for the session payload builder.
#[derive(Debug, Clone, Copy)]
pub struct SessionSpec {
    pub num_marshal_zones: u8,
    pub num_weather_samples: u8,
    pub time_of_day: u32,
}

impl Default for SessionSpec {
    fn default() -> Self {
        Self { num_marshal_zones: 2, num_weather_samples: 3, time_of_day: 14 * 60 }
    }
}

/// Session payload: track id 11 (Monza), marshal zone 0 flagged green,
/// weather sample `i` at a 15-minute spacing.
pub fn encode_session_payload(spec: &SessionSpec) -> Vec<u8> {
    let mut b = vec![1u8]; // weather: light cloud
    b.push(30); // track temperature
    b.push(25); // air temperature
    b.push(53); // total laps
    b.extend_from_slice(&5793u16.to_le_bytes()); // track length
    b.push(10); // session type: race
    b.push(11); // track id: Monza
    b.push(0); // formula: F1 modern
    b.extend_from_slice(&3600u16.to_le_bytes());
    b.extend_from_slice(&7200u16.to_le_bytes());
    b.push(80); // pit speed limit
    b.extend_from_slice(&[0, 0, 255, 0]); // paused, spectating, spectator idx, sli pro

    b.push(spec.num_marshal_zones);
    for i in 0..spec.num_marshal_zones {
        b.extend_from_slice(&(i as f32 * 0.05).to_le_bytes());
        b.push(if i == 0 { 1 } else { 0 }); // zone 0 is green
    }

    b.extend_from_slice(&[0, 0]); // safety car status, network game

    b.push(spec.num_weather_samples);
    for i in 0..spec.num_weather_samples {
        b.push(10); // session type
        b.push(i * 15); // time offset
        b.extend_from_slice(&[1, 30, 2, 25, 2, 10]);
    }

    b.push(1); // forecast accuracy
    b.push(90); // ai difficulty
    for link in [2022u32, 7, 99] {
        b.extend_from_slice(&link.to_le_bytes());
    }
    b.extend_from_slice(&[24, 30, 12]); // pit window ideal/latest, rejoin position
    b.extend_from_slice(&[0, 1, 2, 0, 0, 1, 1, 2, 0]); // assists
    b.extend_from_slice(&[3, 0]); // game mode, rule set
    b.extend_from_slice(&spec.time_of_day.to_le_bytes());
    b.push(7); // session length: full
    b
}

/// Lap payload: car `i` is on lap `i + 1`; car 0 carries the recognizable
/// timing values asserted in tests; the time trial indices are 3 and 7.
pub fn encode_lap_payload() -> Vec<u8> {
    let mut b = Vec::new();
    for i in 0..MAX_CARS {
        let last_lap: u32 = if i == 0 { 90_123 } else { 90_000 + i as u32 };
        b.extend_from_slice(&last_lap.to_le_bytes());
        b.extend_from_slice(&45_000u32.to_le_bytes());
        b.extend_from_slice(&28_456u16.to_le_bytes());
        b.extend_from_slice(&31_200u16.to_le_bytes());
        for v in [1_250.5f32, 150_000.0, 0.0] {
            b.extend_from_slice(&v.to_le_bytes());
        }
        b.push(i as u8 + 1); // car position
        b.push(i as u8 + 1); // current lap num
        b.extend_from_slice(&[0, 1, 2, 0, 0, 1, 0, 0, i as u8 + 1, 4, 2, 0]);
        b.extend_from_slice(&0u16.to_le_bytes());
        b.extend_from_slice(&0u16.to_le_bytes());
        b.push(0);
    }
    b.push(3); // time trial pb car
    b.push(7); // time trial rival car
    b
}

/// Event payload: the 4-byte code, the detail bytes, then the code again,
/// matching the double carriage of the code on the wire.
pub fn encode_event_payload(code: &[u8; 4], detail: &[u8]) -> Vec<u8> {
    let mut b = Vec::with_capacity(8 + detail.len());
    b.extend_from_slice(code);
    b.extend_from_slice(detail);
    b.extend_from_slice(code);
    b
}

fn datagram(packet_id: i8, frame: u32, payload: &[u8]) -> Vec<u8> {
    let mut b =
        HeaderSpec { packet_id, frame_identifier: frame, ..HeaderSpec::default() }.encode();
    b.extend_from_slice(payload);
    b
}

/// A complete motion datagram for the given frame identifier.
pub fn encode_motion_datagram(frame: u32) -> Vec<u8> {
    datagram(0, frame, &encode_motion_payload())
}

/// A complete session datagram for the given frame identifier.
pub fn encode_session_datagram(frame: u32) -> Vec<u8> {
    datagram(1, frame, &encode_session_payload(&SessionSpec::default()))
}

/// A complete lap data datagram for the given frame identifier.
pub fn encode_lap_datagram(frame: u32) -> Vec<u8> {
    datagram(2, frame, &encode_lap_payload())
}

/// A complete event datagram.
pub fn encode_event_datagram(code: &[u8; 4], detail: &[u8]) -> Vec<u8> {
    datagram(3, 1, &encode_event_payload(code, detail))
}

fn decode_datagram(bytes: &[u8]) -> (WireCursor<'_>, PacketHeader) {
    let mut cur = WireCursor::new(bytes);
    let header = PacketHeader::decode(&mut cur).expect("fixture header decodes");
    (cur, header)
}

/// A decoded motion record for bus and dispatch tests.
pub fn sample_motion_packet(frame: u32) -> PacketMotion {
    let bytes = encode_motion_datagram(frame);
    let (mut cur, header) = decode_datagram(&bytes);
    PacketMotion::decode(&mut cur, header).expect("fixture motion decodes")
}

/// A decoded session record for bus and dispatch tests.
pub fn sample_session_packet(frame: u32) -> PacketSession {
    let bytes = encode_session_datagram(frame);
    let (mut cur, header) = decode_datagram(&bytes);
    PacketSession::decode(&mut cur, header).expect("fixture session decodes")
}

/// A decoded lap record for bus and dispatch tests.
pub fn sample_lap_packet(frame: u32) -> PacketLap {
    let bytes = encode_lap_datagram(frame);
    let (mut cur, header) = decode_datagram(&bytes);
    PacketLap::decode(&mut cur, header).expect("fixture lap decodes")
}

/// A [`PacketSource`] replaying a fixed script of receive results.
///
/// Once the script runs out, the source reports end of stream. The endless
/// variant idles forever instead, for cancellation tests.
pub struct ScriptedSource {
    events: VecDeque<Result<Option<SourceEvent>>>,
    endless_idle: bool,
}

impl ScriptedSource {
    pub fn new(events: Vec<Result<Option<SourceEvent>>>) -> Self {
        Self { events: events.into(), endless_idle: false }
    }

    /// A source that never yields a datagram and never ends.
    pub fn endless_idle() -> Self {
        Self { events: VecDeque::new(), endless_idle: true }
    }
}

#[async_trait::async_trait]
impl PacketSource for ScriptedSource {
    async fn recv(&mut self) -> Result<Option<SourceEvent>> {
        // Yield so the ingestion loop always has a suspension point, even
        // when the script is entirely ready values.
        tokio::task::yield_now().await;
        match self.events.pop_front() {
            Some(result) => result,
            None if self.endless_idle => Ok(Some(SourceEvent::Idle)),
            None => Ok(None),
        }
    }
}
