//! Lap data packet: lap timing and position for every car in the session.
//!
//! Frequency: rate as specified in the game menus.

use crate::packets::{PacketHeader, MAX_CARS};
use crate::wire::WireCursor;
use crate::Result;

/// Lap data for one car on track.
#[derive(Debug, Clone, PartialEq)]
pub struct LapData {
    /// Last lap time in milliseconds.
    pub last_lap_time_in_ms: u32,
    /// Current time around the lap in milliseconds.
    pub current_lap_time_in_ms: u32,
    /// Sector 1 time in milliseconds.
    pub sector1_time_in_ms: u16,
    /// Sector 2 time in milliseconds.
    pub sector2_time_in_ms: u16,
    /// Distance around the current lap in metres; can be negative before
    /// crossing the line for the first time.
    pub lap_distance: f32,
    /// Total distance travelled in the session in metres.
    pub total_distance: f32,
    /// Delta in seconds for safety car.
    pub safety_car_delta: f32,
    /// Car race position.
    pub car_position: u8,
    /// Current lap number.
    pub current_lap_num: u8,
    /// 0 = none, 1 = pitting, 2 = in pit area.
    pub pit_status: u8,
    /// Number of pit stops taken in this race.
    pub num_pit_stops: u8,
    /// 0 = sector1, 1 = sector2, 2 = sector3.
    pub sector: u8,
    /// 0 = valid, 1 = invalid.
    pub current_lap_invalid: u8,
    /// Accumulated time penalties in seconds to be added.
    pub penalties: u8,
    /// Accumulated number of warnings issued.
    pub warnings: u8,
    /// Drive-through penalties left to serve.
    pub num_unserved_drive_through_pens: u8,
    /// Stop-go penalties left to serve.
    pub num_unserved_stop_go_pens: u8,
    /// Grid position the vehicle started the race in.
    pub grid_position: u8,
    /// 0 = in garage, 1 = flying lap, 2 = in lap, 3 = out lap, 4 = on track.
    pub driver_status: u8,
    /// 0 = invalid, 1 = inactive, 2 = active, 3 = finished, 4 = did not
    /// finish, 5 = disqualified, 6 = not classified, 7 = retired.
    pub result_status: u8,
    /// Pit lane timing, 0 = inactive, 1 = active.
    pub pit_lane_timer_active: u8,
    /// If active, current time spent in the pit lane in milliseconds.
    pub pit_lane_time_in_lane_in_ms: u16,
    /// Time of the actual pit stop in milliseconds.
    pub pit_stop_timer_in_ms: u16,
    /// Whether the car should serve a penalty at this stop.
    pub pit_stop_should_serve_pen: u8,
}

impl LapData {
    fn decode(cur: &mut WireCursor<'_>) -> Result<LapData> {
        Ok(LapData {
            last_lap_time_in_ms: cur.u32("lap data block")?,
            current_lap_time_in_ms: cur.u32("lap data block")?,
            sector1_time_in_ms: cur.u16("lap data block")?,
            sector2_time_in_ms: cur.u16("lap data block")?,
            lap_distance: cur.f32("lap data block")?,
            total_distance: cur.f32("lap data block")?,
            safety_car_delta: cur.f32("lap data block")?,
            car_position: cur.u8("lap data block")?,
            current_lap_num: cur.u8("lap data block")?,
            pit_status: cur.u8("lap data block")?,
            num_pit_stops: cur.u8("lap data block")?,
            sector: cur.u8("lap data block")?,
            current_lap_invalid: cur.u8("lap data block")?,
            penalties: cur.u8("lap data block")?,
            warnings: cur.u8("lap data block")?,
            num_unserved_drive_through_pens: cur.u8("lap data block")?,
            num_unserved_stop_go_pens: cur.u8("lap data block")?,
            grid_position: cur.u8("lap data block")?,
            driver_status: cur.u8("lap data block")?,
            result_status: cur.u8("lap data block")?,
            pit_lane_timer_active: cur.u8("lap data block")?,
            pit_lane_time_in_lane_in_ms: cur.u16("lap data block")?,
            pit_stop_timer_in_ms: cur.u16("lap data block")?,
            pit_stop_should_serve_pen: cur.u8("lap data block")?,
        })
    }
}

/// The lap data packet: one [`LapData`] per possible car slot plus the time
/// trial car indices.
#[derive(Debug, Clone, PartialEq)]
pub struct PacketLap {
    pub header: PacketHeader,
    /// Lap data for all cars on track; always [`MAX_CARS`] entries.
    pub lap_data: Vec<LapData>,
    /// Index of the personal-best car in time trial; 255 if invalid.
    pub time_trial_pb_car_idx: u8,
    /// Index of the rival car in time trial; 255 if invalid.
    pub time_trial_rival_car_idx: u8,
}

impl PacketLap {
    pub(crate) fn decode(cur: &mut WireCursor<'_>, header: PacketHeader) -> Result<PacketLap> {
        let mut lap_data = Vec::with_capacity(MAX_CARS);
        for _ in 0..MAX_CARS {
            lap_data.push(LapData::decode(cur)?);
        }

        Ok(PacketLap {
            header,
            lap_data,
            time_trial_pb_car_idx: cur.u8("time trial pb car idx")?,
            time_trial_rival_car_idx: cur.u8("time trial rival car idx")?,
        })
    }
}
