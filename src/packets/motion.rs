//! Motion packet: physics data for every car on track.
//!
//! Frequency: rate as specified in the game menus (up to 60 Hz). The player
//! car additionally gets the wheel/suspension detail arrays at the tail of
//! the packet.

use crate::packets::{PacketHeader, MAX_CARS};
use crate::wire::WireCursor;
use crate::Result;

/// Motion data for one car. All wheel arrays are ordered RL, RR, FL, FR.
#[derive(Debug, Clone, PartialEq)]
pub struct CarMotion {
    /// World space X position.
    pub world_position_x: f32,
    /// World space Y position.
    pub world_position_y: f32,
    /// World space Z position.
    pub world_position_z: f32,
    /// Velocity in world space X.
    pub world_velocity_x: f32,
    /// Velocity in world space Y.
    pub world_velocity_y: f32,
    /// Velocity in world space Z.
    pub world_velocity_z: f32,
    /// World space forward X direction (normalised).
    pub world_forward_dir_x: u16,
    /// World space forward Y direction (normalised).
    pub world_forward_dir_y: u16,
    /// World space forward Z direction (normalised).
    pub world_forward_dir_z: u16,
    /// World space right X direction (normalised).
    pub world_right_dir_x: u16,
    /// World space right Y direction (normalised).
    pub world_right_dir_y: u16,
    /// World space right Z direction (normalised).
    pub world_right_dir_z: u16,
    /// Lateral G-force component.
    pub g_force_lateral: f32,
    /// Longitudinal G-force component.
    pub g_force_longitudinal: f32,
    /// Vertical G-force component.
    pub g_force_vertical: f32,
    /// Yaw angle in radians.
    pub yaw: f32,
    /// Pitch angle in radians.
    pub pitch: f32,
    /// Roll angle in radians.
    pub roll: f32,
}

impl CarMotion {
    fn decode(cur: &mut WireCursor<'_>) -> Result<CarMotion> {
        Ok(CarMotion {
            world_position_x: cur.f32("car motion block")?,
            world_position_y: cur.f32("car motion block")?,
            world_position_z: cur.f32("car motion block")?,
            world_velocity_x: cur.f32("car motion block")?,
            world_velocity_y: cur.f32("car motion block")?,
            world_velocity_z: cur.f32("car motion block")?,
            world_forward_dir_x: cur.u16("car motion block")?,
            world_forward_dir_y: cur.u16("car motion block")?,
            world_forward_dir_z: cur.u16("car motion block")?,
            world_right_dir_x: cur.u16("car motion block")?,
            world_right_dir_y: cur.u16("car motion block")?,
            world_right_dir_z: cur.u16("car motion block")?,
            g_force_lateral: cur.f32("car motion block")?,
            g_force_longitudinal: cur.f32("car motion block")?,
            g_force_vertical: cur.f32("car motion block")?,
            yaw: cur.f32("car motion block")?,
            pitch: cur.f32("car motion block")?,
            roll: cur.f32("car motion block")?,
        })
    }
}

/// The motion packet: one [`CarMotion`] per possible car slot plus the
/// player-car wheel and angular detail.
#[derive(Debug, Clone, PartialEq)]
pub struct PacketMotion {
    pub header: PacketHeader,
    /// Data for all cars on track; always [`MAX_CARS`] entries.
    pub car_motion: Vec<CarMotion>,
    /// Suspension position per wheel (RL, RR, FL, FR).
    pub suspension_position: [f32; 4],
    /// Suspension velocity per wheel.
    pub suspension_velocity: [f32; 4],
    /// Suspension acceleration per wheel.
    pub suspension_acceleration: [f32; 4],
    /// Speed of each wheel.
    pub wheel_speed: [f32; 4],
    /// Slip ratio for each wheel.
    pub wheel_slip: [f32; 4],
    /// Velocity in local space, X.
    pub local_velocity_x: f32,
    /// Velocity in local space, Y.
    pub local_velocity_y: f32,
    /// Velocity in local space, Z.
    pub local_velocity_z: f32,
    /// Angular velocity X component.
    pub angular_velocity_x: f32,
    /// Angular velocity Y component.
    pub angular_velocity_y: f32,
    /// Angular velocity Z component.
    pub angular_velocity_z: f32,
    /// Angular acceleration X component.
    pub angular_acceleration_x: f32,
    /// Angular acceleration Y component.
    pub angular_acceleration_y: f32,
    /// Angular acceleration Z component.
    pub angular_acceleration_z: f32,
    /// Current front wheels angle in radians.
    pub front_wheels_angle: f32,
}

impl PacketMotion {
    pub(crate) fn decode(cur: &mut WireCursor<'_>, header: PacketHeader) -> Result<PacketMotion> {
        let mut car_motion = Vec::with_capacity(MAX_CARS);
        for _ in 0..MAX_CARS {
            car_motion.push(CarMotion::decode(cur)?);
        }

        Ok(PacketMotion {
            header,
            car_motion,
            suspension_position: cur.wheel_f32("suspension position")?,
            suspension_velocity: cur.wheel_f32("suspension velocity")?,
            suspension_acceleration: cur.wheel_f32("suspension acceleration")?,
            wheel_speed: cur.wheel_f32("wheel speed")?,
            wheel_slip: cur.wheel_f32("wheel slip")?,
            local_velocity_x: cur.f32("motion trailer")?,
            local_velocity_y: cur.f32("motion trailer")?,
            local_velocity_z: cur.f32("motion trailer")?,
            angular_velocity_x: cur.f32("motion trailer")?,
            angular_velocity_y: cur.f32("motion trailer")?,
            angular_velocity_z: cur.f32("motion trailer")?,
            angular_acceleration_x: cur.f32("motion trailer")?,
            angular_acceleration_y: cur.f32("motion trailer")?,
            angular_acceleration_z: cur.f32("motion trailer")?,
            front_wheels_angle: cur.f32("motion trailer")?,
        })
    }
}
