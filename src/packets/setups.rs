//! Car setups packet: setup details for every car.
//!
//! Frequency: every 2 seconds. In multiplayer, other players' setups appear
//! zeroed out.

use crate::packets::{PacketHeader, MAX_CARS};
use crate::wire::WireCursor;
use crate::Result;

/// Setup data for one car.
#[derive(Debug, Clone, PartialEq)]
pub struct CarSetup {
    /// Front wing aero.
    pub front_wing: u8,
    /// Rear wing aero.
    pub rear_wing: u8,
    /// Differential adjustment on throttle (percentage).
    pub on_throttle: u8,
    /// Differential adjustment off throttle (percentage).
    pub off_throttle: u8,
    /// Front camber angle (suspension geometry).
    pub front_camber: f32,
    /// Rear camber angle.
    pub rear_camber: f32,
    /// Front toe angle.
    pub front_toe: f32,
    /// Rear toe angle.
    pub rear_toe: f32,
    pub front_suspension: u8,
    pub rear_suspension: u8,
    pub front_anti_roll_bar: u8,
    pub rear_anti_roll_bar: u8,
    pub front_suspension_height: u8,
    pub rear_suspension_height: u8,
    /// Brake pressure (percentage).
    pub brake_pressure: u8,
    /// Brake bias (percentage).
    pub brake_bias: u8,
    pub rear_left_tyre_pressure: f32,
    pub rear_right_tyre_pressure: f32,
    pub front_left_tyre_pressure: f32,
    pub front_right_tyre_pressure: f32,
    pub ballast: u8,
    /// Fuel load in kilograms.
    pub fuel_load: f32,
}

impl CarSetup {
    fn decode(cur: &mut WireCursor<'_>) -> Result<CarSetup> {
        Ok(CarSetup {
            front_wing: cur.u8("car setup block")?,
            rear_wing: cur.u8("car setup block")?,
            on_throttle: cur.u8("car setup block")?,
            off_throttle: cur.u8("car setup block")?,
            front_camber: cur.f32("car setup block")?,
            rear_camber: cur.f32("car setup block")?,
            front_toe: cur.f32("car setup block")?,
            rear_toe: cur.f32("car setup block")?,
            front_suspension: cur.u8("car setup block")?,
            rear_suspension: cur.u8("car setup block")?,
            front_anti_roll_bar: cur.u8("car setup block")?,
            rear_anti_roll_bar: cur.u8("car setup block")?,
            front_suspension_height: cur.u8("car setup block")?,
            rear_suspension_height: cur.u8("car setup block")?,
            brake_pressure: cur.u8("car setup block")?,
            brake_bias: cur.u8("car setup block")?,
            rear_left_tyre_pressure: cur.f32("car setup block")?,
            rear_right_tyre_pressure: cur.f32("car setup block")?,
            front_left_tyre_pressure: cur.f32("car setup block")?,
            front_right_tyre_pressure: cur.f32("car setup block")?,
            ballast: cur.u8("car setup block")?,
            fuel_load: cur.f32("car setup block")?,
        })
    }
}

/// The car setups packet: one [`CarSetup`] per possible car slot.
#[derive(Debug, Clone, PartialEq)]
pub struct PacketCarSetups {
    pub header: PacketHeader,
    /// Setups for all cars; always [`MAX_CARS`] entries.
    pub car_setups: Vec<CarSetup>,
}

impl PacketCarSetups {
    pub(crate) fn decode(cur: &mut WireCursor<'_>, header: PacketHeader) -> Result<PacketCarSetups> {
        let mut car_setups = Vec::with_capacity(MAX_CARS);
        for _ in 0..MAX_CARS {
            car_setups.push(CarSetup::decode(cur)?);
        }
        Ok(PacketCarSetups { header, car_setups })
    }
}
