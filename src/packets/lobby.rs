//! Lobby info packet: players in a multiplayer lobby.
//!
//! Frequency: two every second while in the lobby.

use crate::packets::{PacketHeader, MAX_CARS};
use crate::wire::WireCursor;
use crate::Result;

/// One player in the lobby.
#[derive(Debug, Clone, PartialEq)]
pub struct LobbyInfo {
    /// 1 if the entry is AI controlled, 0 if human.
    pub ai_controlled: u8,
    pub team_id: u8,
    pub nationality: u8,
    /// Player display name, decoded from the fixed 48-byte buffer.
    pub name: String,
    /// Car number of the player.
    pub car_number: u8,
    /// 0 = not ready, 1 = ready, 2 = spectating.
    pub ready_status: u8,
}

impl LobbyInfo {
    fn decode(cur: &mut WireCursor<'_>) -> Result<LobbyInfo> {
        Ok(LobbyInfo {
            ai_controlled: cur.u8("lobby info block")?,
            team_id: cur.u8("lobby info block")?,
            nationality: cur.u8("lobby info block")?,
            name: cur.name("lobby player name")?,
            car_number: cur.u8("lobby info block")?,
            ready_status: cur.u8("lobby info block")?,
        })
    }
}

/// The lobby info packet. Like final classification, the count reports how
/// many slots are occupied while the wire always carries [`MAX_CARS`] blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct PacketLobbyInfo {
    pub header: PacketHeader,
    /// Number of players in the lobby.
    pub num_players: u8,
    /// All lobby slots; always [`MAX_CARS`] entries.
    pub lobby_players: Vec<LobbyInfo>,
}

impl PacketLobbyInfo {
    pub(crate) fn decode(cur: &mut WireCursor<'_>, header: PacketHeader) -> Result<PacketLobbyInfo> {
        let num_players = cur.u8("lobby player count")?;
        let mut lobby_players = Vec::with_capacity(MAX_CARS);
        for _ in 0..MAX_CARS {
            lobby_players.push(LobbyInfo::decode(cur)?);
        }
        Ok(PacketLobbyInfo { header, num_players, lobby_players })
    }
}
