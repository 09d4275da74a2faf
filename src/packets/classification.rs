//! Final classification packet: race results at the end of a session.
//!
//! Frequency: once at the end of a race. This is the only packet carrying a
//! double-precision field (total race time).

use crate::packets::{PacketHeader, MAX_CARS};
use crate::wire::WireCursor;
use crate::Result;

/// Maximum number of tyre stints recorded per car.
pub const MAX_TYRE_STINTS: usize = 8;

/// Final classification for one car.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalClassification {
    /// Finishing position.
    pub position: u8,
    /// Number of laps completed.
    pub num_laps: u8,
    /// Grid position of the car.
    pub grid_position: u8,
    /// Number of points scored.
    pub points: u8,
    pub num_pit_stops: u8,
    /// See the lap data result status values.
    pub result_status: u8,
    /// Best lap time of the session in milliseconds.
    pub best_lap_time_in_ms: u32,
    /// Total race time in seconds, without penalties.
    pub total_race_time: f64,
    /// Total penalties accumulated in seconds.
    pub penalties_time: u8,
    pub num_penalties: u8,
    /// Number of tyre stints used; the stint arrays are always 8 long.
    pub num_tyre_stints: u8,
    /// Actual tyre compound per stint.
    pub tyre_stints_actual: [u8; MAX_TYRE_STINTS],
    /// Visual tyre compound per stint.
    pub tyre_stints_visual: [u8; MAX_TYRE_STINTS],
    /// Lap each stint ended on.
    pub tyre_stints_end_laps: [u8; MAX_TYRE_STINTS],
}

impl FinalClassification {
    fn decode(cur: &mut WireCursor<'_>) -> Result<FinalClassification> {
        fn stints(cur: &mut WireCursor<'_>) -> Result<[u8; MAX_TYRE_STINTS]> {
            let mut out = [0u8; MAX_TYRE_STINTS];
            for slot in &mut out {
                *slot = cur.u8("tyre stint array")?;
            }
            Ok(out)
        }

        Ok(FinalClassification {
            position: cur.u8("classification block")?,
            num_laps: cur.u8("classification block")?,
            grid_position: cur.u8("classification block")?,
            points: cur.u8("classification block")?,
            num_pit_stops: cur.u8("classification block")?,
            result_status: cur.u8("classification block")?,
            best_lap_time_in_ms: cur.u32("classification block")?,
            total_race_time: cur.f64("classification block")?,
            penalties_time: cur.u8("classification block")?,
            num_penalties: cur.u8("classification block")?,
            num_tyre_stints: cur.u8("classification block")?,
            tyre_stints_actual: stints(cur)?,
            tyre_stints_visual: stints(cur)?,
            tyre_stints_end_laps: stints(cur)?,
        })
    }
}

/// The final classification packet. The count field reports how many cars
/// actually classified, but the wire always carries [`MAX_CARS`] blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct PacketFinalClassification {
    pub header: PacketHeader,
    /// Number of cars in the final classification.
    pub num_cars: u8,
    /// Classification for all car slots; always [`MAX_CARS`] entries.
    pub classification_data: Vec<FinalClassification>,
}

impl PacketFinalClassification {
    pub(crate) fn decode(
        cur: &mut WireCursor<'_>,
        header: PacketHeader,
    ) -> Result<PacketFinalClassification> {
        let num_cars = cur.u8("classification count")?;
        let mut classification_data = Vec::with_capacity(MAX_CARS);
        for _ in 0..MAX_CARS {
            classification_data.push(FinalClassification::decode(cur)?);
        }
        Ok(PacketFinalClassification { header, num_cars, classification_data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::HeaderSpec;
    use crate::TelemetryError;

    // 45 bytes per block.
    fn classification_block(position: u8, total_race_time: f64) -> Vec<u8> {
        let mut b = vec![position, 52, 4, 18, 2, 3];
        b.extend_from_slice(&78_450u32.to_le_bytes());
        b.extend_from_slice(&total_race_time.to_le_bytes());
        b.extend_from_slice(&[5, 1, 3]);
        b.extend_from_slice(&[16, 17, 18, 0, 0, 0, 0, 0]);
        b.extend_from_slice(&[16, 16, 17, 0, 0, 0, 0, 0]);
        b.extend_from_slice(&[20, 39, 52, 0, 0, 0, 0, 0]);
        b
    }

    #[test]
    fn decodes_count_and_fixed_22_blocks() {
        let mut payload = vec![20u8];
        for i in 0..MAX_CARS {
            payload.extend(classification_block(i as u8 + 1, 5_420.375 + i as f64));
        }

        let mut cur = WireCursor::new(&payload);
        let header = HeaderSpec { packet_id: 8, ..HeaderSpec::default() }.decoded();
        let packet = PacketFinalClassification::decode(&mut cur, header).unwrap();

        assert_eq!(packet.num_cars, 20);
        // The count describes the grid, not the wire layout.
        assert_eq!(packet.classification_data.len(), MAX_CARS);
        assert_eq!(cur.remaining(), 0);
        assert_eq!(packet.classification_data[0].position, 1);
        assert_eq!(packet.classification_data[0].total_race_time, 5_420.375);
        assert_eq!(packet.classification_data[3].tyre_stints_end_laps[1], 39);
    }

    #[test]
    fn truncated_stint_array_fails_cleanly() {
        let mut payload = vec![22u8];
        for _ in 0..MAX_CARS {
            payload.extend(classification_block(1, 5_000.0));
        }
        // Cut inside the last block's stint arrays.
        let mut cur = WireCursor::new(&payload[..payload.len() - 10]);
        let header = HeaderSpec { packet_id: 8, ..HeaderSpec::default() }.decoded();
        let err = PacketFinalClassification::decode(&mut cur, header).unwrap_err();
        assert!(matches!(err, TelemetryError::Truncated { context: "tyre stint array", .. }));
    }
}
