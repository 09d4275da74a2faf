//! Session history packet: lap and tyre stint history for a single car.
//!
//! Frequency: 20 per second, cycling through the cars. Unlike the other
//! per-car packets this one covers one car per datagram, selected by
//! `car_idx`.

use crate::packets::PacketHeader;
use crate::wire::WireCursor;
use crate::Result;

/// Number of lap history slots carried per datagram.
pub const MAX_LAP_HISTORY: usize = 100;
/// Number of tyre stint history slots carried per datagram.
pub const MAX_STINT_HISTORY: usize = 8;

/// Bit set in [`LapHistory::lap_valid_bit_flags`] when the whole lap is valid.
pub const LAP_VALID: u8 = 0x01;
/// Sector validity bits.
pub const SECTOR_1_VALID: u8 = 0x02;
pub const SECTOR_2_VALID: u8 = 0x04;
pub const SECTOR_3_VALID: u8 = 0x08;

/// History for one lap. Unused slots are zero-filled on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct LapHistory {
    /// Lap time in milliseconds.
    pub lap_time_in_ms: u32,
    pub sector1_time_in_ms: u16,
    pub sector2_time_in_ms: u16,
    pub sector3_time_in_ms: u16,
    /// Validity bits; see [`LAP_VALID`] and the sector constants.
    pub lap_valid_bit_flags: u8,
}

impl LapHistory {
    fn decode(cur: &mut WireCursor<'_>) -> Result<LapHistory> {
        Ok(LapHistory {
            lap_time_in_ms: cur.u32("lap history entry")?,
            sector1_time_in_ms: cur.u16("lap history entry")?,
            sector2_time_in_ms: cur.u16("lap history entry")?,
            sector3_time_in_ms: cur.u16("lap history entry")?,
            lap_valid_bit_flags: cur.u8("lap history entry")?,
        })
    }
}

/// History for one tyre stint.
#[derive(Debug, Clone, PartialEq)]
pub struct TyreStintHistory {
    /// Lap the stint ends on; 255 if the stint is current.
    pub end_lap: u8,
    pub tyre_actual_compound: u8,
    pub tyre_visual_compound: u8,
}

impl TyreStintHistory {
    fn decode(cur: &mut WireCursor<'_>) -> Result<TyreStintHistory> {
        Ok(TyreStintHistory {
            end_lap: cur.u8("tyre stint entry")?,
            tyre_actual_compound: cur.u8("tyre stint entry")?,
            tyre_visual_compound: cur.u8("tyre stint entry")?,
        })
    }
}

/// The session history packet for one car.
#[derive(Debug, Clone, PartialEq)]
pub struct PacketSessionHistory {
    pub header: PacketHeader,
    /// Index of the car this history belongs to.
    pub car_idx: u8,
    /// Number of laps in the data, including the current in-progress lap.
    pub num_laps: u8,
    /// Number of tyre stints in the data.
    pub num_tyre_stints: u8,
    /// Lap the best lap time was achieved on.
    pub best_lap_time_lap_num: u8,
    /// Lap the best sector 1 time was achieved on.
    pub best_sector1_lap_num: u8,
    /// Lap the best sector 2 time was achieved on.
    pub best_sector2_lap_num: u8,
    /// Lap the best sector 3 time was achieved on.
    pub best_sector3_lap_num: u8,
    /// Always [`MAX_LAP_HISTORY`] entries; only the first `num_laps` carry data.
    pub lap_history: Vec<LapHistory>,
    /// Always [`MAX_STINT_HISTORY`] entries; only the first `num_tyre_stints`
    /// carry data.
    pub tyre_stint_history: Vec<TyreStintHistory>,
}

impl PacketSessionHistory {
    pub(crate) fn decode(
        cur: &mut WireCursor<'_>,
        header: PacketHeader,
    ) -> Result<PacketSessionHistory> {
        let car_idx = cur.u8("session history")?;
        let num_laps = cur.u8("session history")?;
        let num_tyre_stints = cur.u8("session history")?;
        let best_lap_time_lap_num = cur.u8("session history")?;
        let best_sector1_lap_num = cur.u8("session history")?;
        let best_sector2_lap_num = cur.u8("session history")?;
        let best_sector3_lap_num = cur.u8("session history")?;

        let mut lap_history = Vec::with_capacity(MAX_LAP_HISTORY);
        for _ in 0..MAX_LAP_HISTORY {
            lap_history.push(LapHistory::decode(cur)?);
        }
        let mut tyre_stint_history = Vec::with_capacity(MAX_STINT_HISTORY);
        for _ in 0..MAX_STINT_HISTORY {
            tyre_stint_history.push(TyreStintHistory::decode(cur)?);
        }

        Ok(PacketSessionHistory {
            header,
            car_idx,
            num_laps,
            num_tyre_stints,
            best_lap_time_lap_num,
            best_sector1_lap_num,
            best_sector2_lap_num,
            best_sector3_lap_num,
            lap_history,
            tyre_stint_history,
        })
    }
}
