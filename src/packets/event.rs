//! Event packet: session events with per-code detail payloads.
//!
//! Frequency: when the event occurs. The 4-byte ASCII code selects which
//! detail variant (if any) follows; unknown codes fail the decode of that
//! single datagram.

use crate::packets::{EventCode, PacketHeader};
use crate::wire::WireCursor;
use crate::Result;

/// Detail payload for events that carry one. Codes such as session
/// started/ended, DRS toggles, chequered flag and lights out have no
/// detail and decode to no variant at all.
#[derive(Debug, Clone, PartialEq)]
pub enum EventDetail {
    /// A driver has achieved the fastest lap.
    FastestLap {
        /// Vehicle index of the car achieving the fastest lap.
        vehicle_idx: u8,
        /// Lap time in seconds.
        lap_time: f32,
    },
    /// A driver has retired.
    Retirement { vehicle_idx: u8 },
    /// The player's team mate has entered the pits.
    TeamMateInPits { vehicle_idx: u8 },
    /// The race winner is announced.
    RaceWinner { vehicle_idx: u8 },
    /// A penalty has been issued.
    Penalty {
        penalty_type: u8,
        infringement_type: u8,
        /// Vehicle index of the car the penalty is applied to.
        vehicle_idx: u8,
        /// Vehicle index of the other car involved.
        other_vehicle_idx: u8,
        /// Time gained, or time spent doing the action, in seconds.
        time: u8,
        /// Lap the penalty occurred on.
        lap_num: u8,
        /// Number of places gained by this.
        places_gained: u8,
    },
    /// A speed trap has been triggered.
    SpeedTrap {
        vehicle_idx: u8,
        /// Top speed achieved in km/h.
        speed: f32,
        /// 1 if this is the overall fastest speed in the session.
        is_overall_fastest_in_session: u8,
        /// 1 if this is the driver's fastest speed in the session.
        is_driver_fastest_in_session: u8,
        /// Vehicle index of the fastest vehicle in the session.
        fastest_vehicle_idx_in_session: u8,
        /// Speed of the fastest vehicle in the session.
        fastest_speed_in_session: u8,
    },
    /// Start lights showing.
    StartLights { num_lights: u8 },
    /// A drive-through penalty has been served.
    DriveThroughPenaltyServed { vehicle_idx: u8 },
    /// A stop-go penalty has been served.
    StopGoPenaltyServed { vehicle_idx: u8 },
    /// Flashback activated.
    Flashback {
        /// Frame identifier flashed back to.
        flashback_frame_identifier: u32,
        /// Session time flashed back to.
        flashback_session_time: f32,
    },
    /// Button status changed; see [`crate::packets::buttons`] for the flags.
    Buttons { button_status: u32 },
}

impl EventDetail {
    fn decode(cur: &mut WireCursor<'_>, code: EventCode) -> Result<Option<EventDetail>> {
        let detail = match code {
            EventCode::SessionStarted
            | EventCode::SessionEnded
            | EventCode::DrsEnabled
            | EventCode::DrsDisabled
            | EventCode::ChequeredFlag
            | EventCode::LightsOut => return Ok(None),
            EventCode::FastestLap => EventDetail::FastestLap {
                vehicle_idx: cur.u8("fastest lap detail")?,
                lap_time: cur.f32("fastest lap detail")?,
            },
            EventCode::Retirement => EventDetail::Retirement {
                vehicle_idx: cur.u8("retirement detail")?,
            },
            EventCode::TeamMateInPits => EventDetail::TeamMateInPits {
                vehicle_idx: cur.u8("team mate in pits detail")?,
            },
            EventCode::RaceWinner => EventDetail::RaceWinner {
                vehicle_idx: cur.u8("race winner detail")?,
            },
            EventCode::PenaltyIssued => EventDetail::Penalty {
                penalty_type: cur.u8("penalty detail")?,
                infringement_type: cur.u8("penalty detail")?,
                vehicle_idx: cur.u8("penalty detail")?,
                other_vehicle_idx: cur.u8("penalty detail")?,
                time: cur.u8("penalty detail")?,
                lap_num: cur.u8("penalty detail")?,
                places_gained: cur.u8("penalty detail")?,
            },
            EventCode::SpeedTrapTriggered => EventDetail::SpeedTrap {
                vehicle_idx: cur.u8("speed trap detail")?,
                speed: cur.f32("speed trap detail")?,
                is_overall_fastest_in_session: cur.u8("speed trap detail")?,
                is_driver_fastest_in_session: cur.u8("speed trap detail")?,
                fastest_vehicle_idx_in_session: cur.u8("speed trap detail")?,
                fastest_speed_in_session: cur.u8("speed trap detail")?,
            },
            EventCode::StartLights => EventDetail::StartLights {
                num_lights: cur.u8("start lights detail")?,
            },
            EventCode::DriveThroughServed => EventDetail::DriveThroughPenaltyServed {
                vehicle_idx: cur.u8("drive through served detail")?,
            },
            EventCode::StopGoServed => EventDetail::StopGoPenaltyServed {
                vehicle_idx: cur.u8("stop go served detail")?,
            },
            EventCode::Flashback => EventDetail::Flashback {
                flashback_frame_identifier: cur.u32("flashback detail")?,
                flashback_session_time: cur.f32("flashback detail")?,
            },
            EventCode::ButtonStatus => EventDetail::Buttons {
                button_status: cur.u32("button status detail")?,
            },
        };
        Ok(Some(detail))
    }
}

/// The event packet: a 4-byte ASCII code plus zero or one detail variant.
#[derive(Debug, Clone, PartialEq)]
pub struct PacketEvent {
    pub header: PacketHeader,
    /// The event type, decoded from the leading 4-byte code.
    pub code: EventCode,
    /// Detail payload; `None` for codes that carry no extra fields.
    pub detail: Option<EventDetail>,
    /// Raw code bytes as they appear after the detail payload.
    ///
    /// The wire framing carries the 4-byte code a second time, following the
    /// detail fields. Both reads are performed; this field holds the second.
    pub event_string_code: [u8; 4],
}

impl PacketEvent {
    pub(crate) fn decode(cur: &mut WireCursor<'_>, header: PacketHeader) -> Result<PacketEvent> {
        let code = EventCode::from_bytes(cur.code("event code")?)?;
        let detail = EventDetail::decode(cur, code)?;
        let event_string_code = cur.code("event string code")?;
        Ok(PacketEvent { header, code, detail, event_string_code })
    }
}
