//! Car status packet: fuel, ERS, tyre and flag state for every car.
//!
//! Frequency: rate as specified in the game menus.

use crate::packets::{PacketHeader, MAX_CARS};
use crate::wire::WireCursor;
use crate::Result;

/// Status data for one car.
#[derive(Debug, Clone, PartialEq)]
pub struct CarStatus {
    /// Traction control: 0 = off, 1 = medium, 2 = full.
    pub traction_control: u8,
    /// 0 = off, 1 = on.
    pub anti_lock_brakes: u8,
    /// Fuel mix: 0 = lean, 1 = standard, 2 = rich, 3 = max.
    pub fuel_mix: u8,
    /// Front brake bias (percentage).
    pub front_brake_bias: u8,
    /// Pit limiter: 0 = off, 1 = on.
    pub pit_limiter_status: u8,
    /// Current fuel mass.
    pub fuel_in_tank: f32,
    /// Fuel capacity.
    pub fuel_capacity: f32,
    /// Fuel remaining in terms of laps.
    pub fuel_remaining_laps: f32,
    /// Car's maximum RPM, the rev limiter point.
    pub max_rpm: u16,
    /// Car's idle RPM.
    pub idle_rpm: u16,
    pub max_gears: u8,
    /// 0 = not allowed, 1 = allowed.
    pub drs_allowed: u8,
    /// Metres before DRS activates; 0 = not available.
    pub drs_activation_distance: u16,
    /// Actual tyre compound fitted.
    pub actual_tyre_compound: u8,
    /// Visual tyre compound shown on the car.
    pub visual_tyre_compound: u8,
    /// Age in laps of the current set of tyres.
    pub tyres_age_laps: u8,
    /// -1 = invalid, 0 = none, 1 = green, 2 = blue, 3 = yellow, 4 = red.
    pub vehicle_fia_flags: i8,
    /// ERS energy store in joules.
    pub ers_store_energy: f32,
    /// 0 = none, 1 = medium, 2 = hotlap, 3 = overtake.
    pub ers_deploy_mode: u8,
    /// ERS energy harvested this lap by the MGU-K.
    pub ers_harvested_this_lap_mguk: f32,
    /// ERS energy harvested this lap by the MGU-H.
    pub ers_harvested_this_lap_mguh: f32,
    /// ERS energy deployed this lap.
    pub ers_deployed_this_lap: f32,
    /// 1 if the car is paused in a network game.
    pub network_paused: u8,
}

impl CarStatus {
    fn decode(cur: &mut WireCursor<'_>) -> Result<CarStatus> {
        Ok(CarStatus {
            traction_control: cur.u8("car status block")?,
            anti_lock_brakes: cur.u8("car status block")?,
            fuel_mix: cur.u8("car status block")?,
            front_brake_bias: cur.u8("car status block")?,
            pit_limiter_status: cur.u8("car status block")?,
            fuel_in_tank: cur.f32("car status block")?,
            fuel_capacity: cur.f32("car status block")?,
            fuel_remaining_laps: cur.f32("car status block")?,
            max_rpm: cur.u16("car status block")?,
            idle_rpm: cur.u16("car status block")?,
            max_gears: cur.u8("car status block")?,
            drs_allowed: cur.u8("car status block")?,
            drs_activation_distance: cur.u16("car status block")?,
            actual_tyre_compound: cur.u8("car status block")?,
            visual_tyre_compound: cur.u8("car status block")?,
            tyres_age_laps: cur.u8("car status block")?,
            vehicle_fia_flags: cur.i8("car status block")?,
            ers_store_energy: cur.f32("car status block")?,
            ers_deploy_mode: cur.u8("car status block")?,
            ers_harvested_this_lap_mguk: cur.f32("car status block")?,
            ers_harvested_this_lap_mguh: cur.f32("car status block")?,
            ers_deployed_this_lap: cur.f32("car status block")?,
            network_paused: cur.u8("car status block")?,
        })
    }
}

/// The car status packet: one [`CarStatus`] per possible car slot.
#[derive(Debug, Clone, PartialEq)]
pub struct PacketCarStatus {
    pub header: PacketHeader,
    /// Status for all cars; always [`MAX_CARS`] entries.
    pub car_status: Vec<CarStatus>,
}

impl PacketCarStatus {
    pub(crate) fn decode(cur: &mut WireCursor<'_>, header: PacketHeader) -> Result<PacketCarStatus> {
        let mut car_status = Vec::with_capacity(MAX_CARS);
        for _ in 0..MAX_CARS {
            car_status.push(CarStatus::decode(cur)?);
        }
        Ok(PacketCarStatus { header, car_status })
    }
}
