//! Car damage packet: wear and damage levels for every car.
//!
//! Frequency: every 2 seconds.

use crate::packets::{PacketHeader, MAX_CARS};
use crate::wire::WireCursor;
use crate::Result;

/// Damage data for one car. Wheel arrays are ordered RL, RR, FL, FR;
/// damage and wear values are percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct CarDamage {
    /// Tyre wear percentage per wheel.
    pub tyres_wear: [f32; 4],
    /// Tyre damage percentage per wheel.
    pub tyres_damage: [u8; 4],
    /// Brake damage percentage per wheel.
    pub brakes_damage: [u8; 4],
    pub front_left_wing_damage: u8,
    pub front_right_wing_damage: u8,
    pub rear_wing_damage: u8,
    pub floor_damage: u8,
    pub diffuser_damage: u8,
    pub sidepod_damage: u8,
    /// 0 = OK, 1 = fault.
    pub drs_fault: u8,
    /// 0 = OK, 1 = fault.
    pub ers_fault: u8,
    pub gear_box_damage: u8,
    pub engine_damage: u8,
    pub engine_mguh_wear: u8,
    pub engine_es_wear: u8,
    pub engine_ce_wear: u8,
    pub engine_ice_wear: u8,
    pub engine_mguk_wear: u8,
    pub engine_tc_wear: u8,
    /// 0 = OK, 1 = blown.
    pub engine_blown: u8,
    /// 0 = OK, 1 = seized.
    pub engine_seized: u8,
}

impl CarDamage {
    fn decode(cur: &mut WireCursor<'_>) -> Result<CarDamage> {
        Ok(CarDamage {
            tyres_wear: cur.wheel_f32("tyre wear")?,
            tyres_damage: cur.wheel_u8("tyre damage")?,
            brakes_damage: cur.wheel_u8("brake damage")?,
            front_left_wing_damage: cur.u8("car damage block")?,
            front_right_wing_damage: cur.u8("car damage block")?,
            rear_wing_damage: cur.u8("car damage block")?,
            floor_damage: cur.u8("car damage block")?,
            diffuser_damage: cur.u8("car damage block")?,
            sidepod_damage: cur.u8("car damage block")?,
            drs_fault: cur.u8("car damage block")?,
            ers_fault: cur.u8("car damage block")?,
            gear_box_damage: cur.u8("car damage block")?,
            engine_damage: cur.u8("car damage block")?,
            engine_mguh_wear: cur.u8("car damage block")?,
            engine_es_wear: cur.u8("car damage block")?,
            engine_ce_wear: cur.u8("car damage block")?,
            engine_ice_wear: cur.u8("car damage block")?,
            engine_mguk_wear: cur.u8("car damage block")?,
            engine_tc_wear: cur.u8("car damage block")?,
            engine_blown: cur.u8("car damage block")?,
            engine_seized: cur.u8("car damage block")?,
        })
    }
}

/// The car damage packet: one [`CarDamage`] per possible car slot.
#[derive(Debug, Clone, PartialEq)]
pub struct PacketCarDamage {
    pub header: PacketHeader,
    /// Damage for all cars; always [`MAX_CARS`] entries.
    pub car_damage: Vec<CarDamage>,
}

impl PacketCarDamage {
    pub(crate) fn decode(cur: &mut WireCursor<'_>, header: PacketHeader) -> Result<PacketCarDamage> {
        let mut car_damage = Vec::with_capacity(MAX_CARS);
        for _ in 0..MAX_CARS {
            car_damage.push(CarDamage::decode(cur)?);
        }
        Ok(PacketCarDamage { header, car_damage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::HeaderSpec;
    use crate::TelemetryError;

    // 42 bytes per block.
    fn damage_block(wear: f32, gear_box_damage: u8) -> Vec<u8> {
        let mut b = Vec::new();
        for v in [wear, wear + 1.0, wear + 2.0, wear + 3.0] {
            b.extend_from_slice(&v.to_le_bytes());
        }
        b.extend_from_slice(&[10, 11, 8, 9]);
        b.extend_from_slice(&[0, 0, 1, 0]);
        b.extend_from_slice(&[5, 0, 12, 0, 0, 3, 0, 0]);
        b.push(gear_box_damage);
        b.extend_from_slice(&[2, 30, 25, 18, 40, 33, 28, 0, 0]);
        b
    }

    #[test]
    fn decodes_22_damage_blocks() {
        let mut payload = Vec::new();
        for i in 0..MAX_CARS {
            payload.extend(damage_block(i as f32, i as u8));
        }

        let mut cur = WireCursor::new(&payload);
        let header = HeaderSpec { packet_id: 10, ..HeaderSpec::default() }.decoded();
        let packet = PacketCarDamage::decode(&mut cur, header).unwrap();

        assert_eq!(packet.car_damage.len(), MAX_CARS);
        assert_eq!(cur.remaining(), 0);
        assert_eq!(packet.car_damage[4].tyres_wear, [4.0, 5.0, 6.0, 7.0]);
        assert_eq!(packet.car_damage[4].brakes_damage, [0, 0, 1, 0]);
        assert_eq!(packet.car_damage[4].gear_box_damage, 4);
        assert_eq!(packet.car_damage[21].engine_seized, 0);
    }

    #[test]
    fn truncated_wear_array_fails_cleanly() {
        let payload = damage_block(12.5, 0);
        // Cut inside the tyre wear floats of the first block.
        let mut cur = WireCursor::new(&payload[..6]);
        let header = HeaderSpec { packet_id: 10, ..HeaderSpec::default() }.decoded();
        let err = PacketCarDamage::decode(&mut cur, header).unwrap_err();
        assert!(matches!(err, TelemetryError::Truncated { context: "tyre wear", .. }));
    }
}
