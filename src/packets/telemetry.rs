//! Car telemetry packet: live instrument data for every car.
//!
//! Frequency: rate as specified in the game menus (up to 60 Hz).

use crate::packets::{PacketHeader, SurfaceType, MAX_CARS};
use crate::wire::WireCursor;
use crate::Result;

/// Telemetry for one car. Wheel arrays are ordered RL, RR, FL, FR.
#[derive(Debug, Clone, PartialEq)]
pub struct CarTelemetry {
    /// Speed of the car in km/h.
    pub speed: u16,
    /// Applied throttle, 0.0 to 1.0.
    pub throttle: f32,
    /// Steering, -1.0 (full left) to 1.0 (full right).
    pub steer: f32,
    /// Applied brake, 0.0 to 1.0.
    pub brake: f32,
    /// Applied clutch, 0 to 100.
    pub clutch: u8,
    /// Selected gear: 1-8, 0 = neutral, -1 = reverse.
    pub gear: i8,
    pub engine_rpm: u16,
    /// 0 = off, 1 = on.
    pub drs: u8,
    pub rev_lights_percent: u8,
    /// Rev lights as a bit value; bit 0 is the leftmost LED.
    pub rev_lights_bit_value: u16,
    /// Brake temperature in celsius, per wheel.
    pub brakes_temperature: [u16; 4],
    /// Tyre surface temperature in celsius, per wheel.
    pub tyres_surface_temperature: [u8; 4],
    /// Tyre inner temperature in celsius, per wheel.
    pub tyres_inner_temperature: [u8; 4],
    /// Engine temperature in celsius.
    pub engine_temperature: u16,
    /// Tyre pressure in PSI, per wheel.
    pub tyres_pressure: [f32; 4],
    /// Raw driving surface id, per wheel.
    pub surface_type: [u8; 4],
}

impl CarTelemetry {
    fn decode(cur: &mut WireCursor<'_>) -> Result<CarTelemetry> {
        Ok(CarTelemetry {
            speed: cur.u16("car telemetry block")?,
            throttle: cur.f32("car telemetry block")?,
            steer: cur.f32("car telemetry block")?,
            brake: cur.f32("car telemetry block")?,
            clutch: cur.u8("car telemetry block")?,
            gear: cur.i8("car telemetry block")?,
            engine_rpm: cur.u16("car telemetry block")?,
            drs: cur.u8("car telemetry block")?,
            rev_lights_percent: cur.u8("car telemetry block")?,
            rev_lights_bit_value: cur.u16("car telemetry block")?,
            brakes_temperature: cur.wheel_u16("brakes temperature")?,
            tyres_surface_temperature: cur.wheel_u8("tyre surface temperature")?,
            tyres_inner_temperature: cur.wheel_u8("tyre inner temperature")?,
            engine_temperature: cur.u16("car telemetry block")?,
            tyres_pressure: cur.wheel_f32("tyre pressure")?,
            surface_type: cur.wheel_u8("surface type")?,
        })
    }

    /// The recognized surface under each wheel, where the raw id maps to one.
    pub fn surfaces(&self) -> [Option<SurfaceType>; 4] {
        self.surface_type.map(SurfaceType::from_raw)
    }
}

/// The car telemetry packet: one [`CarTelemetry`] per possible car slot plus
/// the player's MFD state.
#[derive(Debug, Clone, PartialEq)]
pub struct PacketCarTelemetry {
    pub header: PacketHeader,
    /// Telemetry for all cars; always [`MAX_CARS`] entries.
    pub car_telemetry: Vec<CarTelemetry>,
    /// Index of the open MFD panel; 255 = closed.
    pub mfd_panel_index: u8,
    /// MFD panel for the secondary player; 255 = closed.
    pub mfd_panel_index_secondary_player: u8,
    /// Suggested gear; 0 if no gear is suggested.
    pub suggested_gear: i8,
}

impl PacketCarTelemetry {
    pub(crate) fn decode(
        cur: &mut WireCursor<'_>,
        header: PacketHeader,
    ) -> Result<PacketCarTelemetry> {
        let mut car_telemetry = Vec::with_capacity(MAX_CARS);
        for _ in 0..MAX_CARS {
            car_telemetry.push(CarTelemetry::decode(cur)?);
        }
        Ok(PacketCarTelemetry {
            header,
            car_telemetry,
            mfd_panel_index: cur.u8("mfd panel index")?,
            mfd_panel_index_secondary_player: cur.u8("mfd panel index")?,
            suggested_gear: cur.i8("suggested gear")?,
        })
    }
}
