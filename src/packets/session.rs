//! Session packet: details about the session in progress.
//!
//! Frequency: 2 per second. Contains the two count-prefixed arrays of the
//! protocol (marshal zones and weather forecast samples); the count byte is
//! authoritative and only that many elements are read.

use crate::packets::ids::TrackId;
use crate::packets::PacketHeader;
use crate::wire::WireCursor;
use crate::Result;

/// Maximum marshal zones a session packet can carry.
pub const MAX_MARSHAL_ZONES: usize = 21;

/// Maximum weather forecast samples a session packet can carry.
pub const MAX_WEATHER_SAMPLES: usize = 51;

/// One marshal zone along the lap.
#[derive(Debug, Clone, PartialEq)]
pub struct MarshalZone {
    /// Fraction (0..1) of the way through the lap the zone starts.
    pub zone_start: f32,
    /// -1 = invalid/unknown, 0 = none, 1 = green, 2 = blue, 3 = yellow, 4 = red.
    pub zone_flag: i8,
}

/// One weather forecast sample.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherForecastSample {
    /// Session the forecast is for (0 = unknown, 1 = P1, ... 13 = Time Trial).
    pub session_type: u8,
    /// Time in minutes the forecast is for.
    pub time_offset: u8,
    /// 0 = clear, 1 = light cloud, 2 = overcast, 3 = light rain, 4 = heavy rain, 5 = storm.
    pub weather: u8,
    /// Track temperature in degrees Celsius.
    pub track_temperature: i8,
    /// Track temperature change: 0 = up, 1 = down, 2 = no change.
    pub track_temperature_change: i8,
    /// Air temperature in degrees Celsius.
    pub air_temperature: i8,
    /// Air temperature change: 0 = up, 1 = down, 2 = no change.
    pub air_temperature_change: i8,
    /// Rain percentage (0-100).
    pub rain_percentage: u8,
}

/// The session packet.
#[derive(Debug, Clone, PartialEq)]
pub struct PacketSession {
    pub header: PacketHeader,
    /// 0 = clear, 1 = light cloud, 2 = overcast, 3 = light rain, 4 = heavy rain, 5 = storm.
    pub weather: u8,
    /// Track temperature in degrees Celsius.
    pub track_temperature: i8,
    /// Air temperature in degrees Celsius.
    pub air_temperature: i8,
    /// Total number of laps in this race.
    pub total_laps: u8,
    /// Track length in metres.
    pub track_length: u16,
    /// 0 = unknown, 1 = P1, 2 = P2, 3 = P3, 4 = Short P, 5 = Q1, 6 = Q2,
    /// 7 = Q3, 8 = Short Q, 9 = OSQ, 10 = R, 11 = R2, 12 = R3, 13 = Time Trial.
    pub session_type: u8,
    /// Raw track id; -1 for unknown. See [`PacketSession::track`].
    pub track_id: i8,
    /// 0 = F1 Modern, 1 = F1 Classic, 2 = F2, 3 = F1 Generic, 4 = Beta,
    /// 5 = Supercars, 6 = Esports, 7 = F2 2021.
    pub formula: u8,
    /// Time left in session in seconds.
    pub session_time_left: u16,
    /// Session duration in seconds.
    pub session_duration: u16,
    /// Pit speed limit in kilometres per hour.
    pub pit_speed_limit: u8,
    /// Whether the game is paused (network game only).
    pub game_paused: u8,
    /// Whether the player is spectating.
    pub is_spectating: u8,
    /// Index of the car being spectated.
    pub spectator_car_index: u8,
    /// SLI Pro support: 0 = inactive, 1 = active.
    pub sli_pro_native_support: u8,
    /// Number of marshal zones that followed on the wire.
    pub num_marshal_zones: u8,
    /// Marshal zones; exactly `num_marshal_zones` entries.
    pub marshal_zones: Vec<MarshalZone>,
    /// 0 = no safety car, 1 = full, 2 = virtual, 3 = formation lap.
    pub safety_car_status: u8,
    /// 0 = offline, 1 = online.
    pub network_game: u8,
    /// Number of weather samples that followed on the wire.
    pub num_weather_forecast_samples: u8,
    /// Weather samples; exactly `num_weather_forecast_samples` entries.
    pub weather_forecast_samples: Vec<WeatherForecastSample>,
    /// 0 = perfect, 1 = approximate.
    pub forecast_accuracy: u8,
    /// AI difficulty rating, 0-110.
    pub ai_difficulty: u8,
    /// Identifier for season - persists across saves.
    pub season_link_identifier: u32,
    /// Identifier for weekend - persists across saves.
    pub weekend_link_identifier: u32,
    /// Identifier for session - persists across saves.
    pub session_link_identifier: u32,
    /// Ideal lap for the player to pit on for the current strategy.
    pub pit_stop_window_ideal_lap: u8,
    /// Latest lap for the player to pit on for the current strategy.
    pub pit_stop_window_latest_lap: u8,
    /// Predicted position for the player to rejoin at.
    pub pit_stop_rejoin_position: u8,
    /// 0 = off, 1 = on.
    pub steering_assist: u8,
    /// 0 = off, 1 = low, 2 = medium, 3 = high.
    pub braking_assist: u8,
    /// 1 = manual, 2 = manual and suggested gear, 3 = auto.
    pub gearbox_assist: u8,
    /// 0 = off, 1 = on.
    pub pit_assist: u8,
    /// 0 = off, 1 = on.
    pub pit_release_assist: u8,
    /// 0 = off, 1 = on.
    pub ers_assist: u8,
    /// 0 = off, 1 = on.
    pub drs_assist: u8,
    /// 0 = off, 1 = corners only, 2 = full.
    pub dynamic_racing_line: u8,
    /// 0 = 2D, 1 = 3D.
    pub dynamic_racing_line_type: u8,
    /// Game mode id - see appendix.
    pub game_mode: u8,
    /// Ruleset id - see appendix.
    pub rule_set: u8,
    /// Local time of day, minutes since midnight.
    pub time_of_day: u32,
    /// 0 = none, 2 = very short, 3 = short, 4 = medium, 5 = medium long, 6 = long, 7 = full.
    pub session_length: u8,
}

impl PacketSession {
    pub(crate) fn decode(cur: &mut WireCursor<'_>, header: PacketHeader) -> Result<PacketSession> {
        let weather = cur.u8("session weather")?;
        let track_temperature = cur.i8("session track temperature")?;
        let air_temperature = cur.i8("session air temperature")?;
        let total_laps = cur.u8("session total laps")?;
        let track_length = cur.u16("session track length")?;
        let session_type = cur.u8("session type")?;
        let track_id = cur.i8("session track id")?;
        let formula = cur.u8("session formula")?;
        let session_time_left = cur.u16("session time left")?;
        let session_duration = cur.u16("session duration")?;
        let pit_speed_limit = cur.u8("session pit speed limit")?;
        let game_paused = cur.u8("session game paused")?;
        let is_spectating = cur.u8("session is spectating")?;
        let spectator_car_index = cur.u8("session spectator car index")?;
        let sli_pro_native_support = cur.u8("session sli pro support")?;

        let num_marshal_zones = cur.u8("marshal zone count")?;
        let mut marshal_zones = Vec::with_capacity(num_marshal_zones as usize);
        for _ in 0..num_marshal_zones {
            marshal_zones.push(MarshalZone {
                zone_start: cur.f32("marshal zone")?,
                zone_flag: cur.i8("marshal zone")?,
            });
        }

        let safety_car_status = cur.u8("session safety car status")?;
        let network_game = cur.u8("session network game")?;

        let num_weather_forecast_samples = cur.u8("weather sample count")?;
        let mut weather_forecast_samples =
            Vec::with_capacity(num_weather_forecast_samples as usize);
        for _ in 0..num_weather_forecast_samples {
            weather_forecast_samples.push(WeatherForecastSample {
                session_type: cur.u8("weather sample")?,
                time_offset: cur.u8("weather sample")?,
                weather: cur.u8("weather sample")?,
                track_temperature: cur.i8("weather sample")?,
                track_temperature_change: cur.i8("weather sample")?,
                air_temperature: cur.i8("weather sample")?,
                air_temperature_change: cur.i8("weather sample")?,
                rain_percentage: cur.u8("weather sample")?,
            });
        }

        Ok(PacketSession {
            header,
            weather,
            track_temperature,
            air_temperature,
            total_laps,
            track_length,
            session_type,
            track_id,
            formula,
            session_time_left,
            session_duration,
            pit_speed_limit,
            game_paused,
            is_spectating,
            spectator_car_index,
            sli_pro_native_support,
            num_marshal_zones,
            marshal_zones,
            safety_car_status,
            network_game,
            num_weather_forecast_samples,
            weather_forecast_samples,
            forecast_accuracy: cur.u8("session forecast accuracy")?,
            ai_difficulty: cur.u8("session ai difficulty")?,
            season_link_identifier: cur.u32("session season link")?,
            weekend_link_identifier: cur.u32("session weekend link")?,
            session_link_identifier: cur.u32("session session link")?,
            pit_stop_window_ideal_lap: cur.u8("session pit window ideal lap")?,
            pit_stop_window_latest_lap: cur.u8("session pit window latest lap")?,
            pit_stop_rejoin_position: cur.u8("session pit rejoin position")?,
            steering_assist: cur.u8("session steering assist")?,
            braking_assist: cur.u8("session braking assist")?,
            gearbox_assist: cur.u8("session gearbox assist")?,
            pit_assist: cur.u8("session pit assist")?,
            pit_release_assist: cur.u8("session pit release assist")?,
            ers_assist: cur.u8("session ers assist")?,
            drs_assist: cur.u8("session drs assist")?,
            dynamic_racing_line: cur.u8("session dynamic racing line")?,
            dynamic_racing_line_type: cur.u8("session racing line type")?,
            game_mode: cur.u8("session game mode")?,
            rule_set: cur.u8("session rule set")?,
            time_of_day: cur.u32("session time of day")?,
            session_length: cur.u8("session length")?,
        })
    }

    /// The decoded track, when the raw id is recognized.
    pub fn track(&self) -> Option<TrackId> {
        TrackId::from_raw(self.track_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{encode_session_payload, HeaderSpec, SessionSpec};
    use crate::TelemetryError;

    #[test]
    fn count_prefixed_arrays_read_exactly_count_elements() {
        let spec = SessionSpec { num_marshal_zones: 3, num_weather_samples: 2, ..SessionSpec::default() };
        let payload = encode_session_payload(&spec);

        let mut cur = WireCursor::new(&payload);
        let header = HeaderSpec { packet_id: 1, ..HeaderSpec::default() }.decoded();
        let session = PacketSession::decode(&mut cur, header).unwrap();

        assert_eq!(session.num_marshal_zones, 3);
        assert_eq!(session.marshal_zones.len(), 3);
        assert_eq!(session.num_weather_forecast_samples, 2);
        assert_eq!(session.weather_forecast_samples.len(), 2);
        assert_eq!(cur.remaining(), 0);

        assert_eq!(session.marshal_zones[0].zone_flag, 1);
        assert_eq!(session.weather_forecast_samples[1].time_offset, 15);
        assert_eq!(session.time_of_day, spec.time_of_day);
        assert_eq!(session.track(), Some(TrackId::Monza));
    }

    #[test]
    fn zero_counts_are_valid() {
        let spec = SessionSpec { num_marshal_zones: 0, num_weather_samples: 0, ..SessionSpec::default() };
        let payload = encode_session_payload(&spec);

        let mut cur = WireCursor::new(&payload);
        let header = HeaderSpec { packet_id: 1, ..HeaderSpec::default() }.decoded();
        let session = PacketSession::decode(&mut cur, header).unwrap();
        assert!(session.marshal_zones.is_empty());
        assert!(session.weather_forecast_samples.is_empty());
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn truncation_inside_a_weather_sample_is_reported() {
        let spec = SessionSpec { num_marshal_zones: 1, num_weather_samples: 4, ..SessionSpec::default() };
        let payload = encode_session_payload(&spec);
        // Drop the 33 trailing scalar bytes plus 1 byte of the last sample.
        let cut = payload.len() - 34;
        let mut cur = WireCursor::new(&payload[..cut]);
        let header = HeaderSpec { packet_id: 1, ..HeaderSpec::default() }.decoded();
        let err = PacketSession::decode(&mut cur, header).unwrap_err();
        assert!(matches!(err, TelemetryError::Truncated { context: "weather sample", .. }));
    }
}
