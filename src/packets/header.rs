//! The fixed 24-byte packet header common to every datagram.

use crate::packets::PacketId;
use crate::wire::WireCursor;
use crate::Result;

/// Size of the packet header on the wire, in bytes.
pub const HEADER_SIZE: usize = 24;

/// Header prefixed to every F1 22 datagram.
///
/// Decoded once per datagram and attached verbatim to the resulting record.
/// `packet_id` is the dispatch discriminator; the header does not validate
/// it beyond reading the byte, since unrecognized ids are a dispatcher
/// concern, not a decode failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacketHeader {
    /// Protocol format year (2022).
    pub packet_format: u16,
    /// Game major version - "X.00".
    pub game_major_version: i8,
    /// Game minor version - "1.XX".
    pub game_minor_version: i8,
    /// Version of this packet type, all start from 1.
    pub packet_version: i8,
    /// Raw packet-type discriminator.
    pub packet_id: i8,
    /// Unique identifier for the session.
    pub session_uid: u64,
    /// Session timestamp in seconds.
    pub session_time: f32,
    /// Identifier for the frame the data was retrieved on.
    pub frame_identifier: u32,
    /// Index of the player's car in the 22-slot arrays.
    pub player_car_index: i8,
    /// Index of the secondary player's car (split screen); -1 if none.
    pub secondary_player_car_index: i8,
}

impl PacketHeader {
    /// Decode exactly [`HEADER_SIZE`] bytes in fixed field order.
    pub fn decode(cur: &mut WireCursor<'_>) -> Result<PacketHeader> {
        Ok(PacketHeader {
            packet_format: cur.u16("header packet format")?,
            game_major_version: cur.i8("header game major version")?,
            game_minor_version: cur.i8("header game minor version")?,
            packet_version: cur.i8("header packet version")?,
            packet_id: cur.i8("header packet id")?,
            session_uid: cur.u64("header session uid")?,
            session_time: cur.f32("header session time")?,
            frame_identifier: cur.u32("header frame identifier")?,
            player_car_index: cur.i8("header player car index")?,
            secondary_player_car_index: cur.i8("header secondary player car index")?,
        })
    }

    /// The recognized packet type, if the discriminator maps to one.
    pub fn kind(&self) -> Option<PacketId> {
        PacketId::from_raw(self.packet_id)
    }
}
