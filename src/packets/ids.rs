//! Protocol identifier enums from the F1 22 appendices.
//!
//! Only the identifiers the decoded records actually reference are modelled
//! as enums; appendix tables that consumers rarely interpret (nationality,
//! game mode, ruleset) stay as raw integers on the records.

use crate::{Result, TelemetryError};

/// Packet-type discriminator carried in the header.
///
/// Discriminator values 0..=11 map in order to the twelve packet types of
/// the 2022 protocol. Anything outside that range is unrecognized and is
/// handled by the dispatcher as a warning, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum PacketId {
    Motion = 0,
    Session = 1,
    LapData = 2,
    Event = 3,
    Participants = 4,
    CarSetups = 5,
    CarTelemetry = 6,
    CarStatus = 7,
    FinalClassification = 8,
    LobbyInfo = 9,
    CarDamage = 10,
    SessionHistory = 11,
}

impl PacketId {
    /// All packet types, in discriminator order.
    pub const ALL: [PacketId; 12] = [
        PacketId::Motion,
        PacketId::Session,
        PacketId::LapData,
        PacketId::Event,
        PacketId::Participants,
        PacketId::CarSetups,
        PacketId::CarTelemetry,
        PacketId::CarStatus,
        PacketId::FinalClassification,
        PacketId::LobbyInfo,
        PacketId::CarDamage,
        PacketId::SessionHistory,
    ];

    /// Map a raw header discriminator to a packet type, if recognized.
    pub fn from_raw(raw: i8) -> Option<PacketId> {
        match raw {
            0 => Some(PacketId::Motion),
            1 => Some(PacketId::Session),
            2 => Some(PacketId::LapData),
            3 => Some(PacketId::Event),
            4 => Some(PacketId::Participants),
            5 => Some(PacketId::CarSetups),
            6 => Some(PacketId::CarTelemetry),
            7 => Some(PacketId::CarStatus),
            8 => Some(PacketId::FinalClassification),
            9 => Some(PacketId::LobbyInfo),
            10 => Some(PacketId::CarDamage),
            11 => Some(PacketId::SessionHistory),
            _ => None,
        }
    }
}

/// The closed table of 4-byte event discriminator codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCode {
    SessionStarted,
    SessionEnded,
    FastestLap,
    Retirement,
    DrsEnabled,
    DrsDisabled,
    TeamMateInPits,
    ChequeredFlag,
    RaceWinner,
    PenaltyIssued,
    SpeedTrapTriggered,
    StartLights,
    LightsOut,
    DriveThroughServed,
    StopGoServed,
    Flashback,
    ButtonStatus,
}

impl EventCode {
    /// Match the exact 4-byte ASCII sequence against the known table.
    pub fn from_bytes(code: [u8; 4]) -> Result<EventCode> {
        match &code {
            b"SSTA" => Ok(EventCode::SessionStarted),
            b"SEND" => Ok(EventCode::SessionEnded),
            b"FTLP" => Ok(EventCode::FastestLap),
            b"RTMT" => Ok(EventCode::Retirement),
            b"DRSE" => Ok(EventCode::DrsEnabled),
            b"DRSD" => Ok(EventCode::DrsDisabled),
            b"TMPT" => Ok(EventCode::TeamMateInPits),
            b"CHQF" => Ok(EventCode::ChequeredFlag),
            b"RCWN" => Ok(EventCode::RaceWinner),
            b"PENA" => Ok(EventCode::PenaltyIssued),
            b"SPTP" => Ok(EventCode::SpeedTrapTriggered),
            b"STLG" => Ok(EventCode::StartLights),
            b"LGOT" => Ok(EventCode::LightsOut),
            b"DTSV" => Ok(EventCode::DriveThroughServed),
            b"SGSV" => Ok(EventCode::StopGoServed),
            b"FLBK" => Ok(EventCode::Flashback),
            b"BUTN" => Ok(EventCode::ButtonStatus),
            _ => Err(TelemetryError::UnknownEventCode { code }),
        }
    }

    /// The 4-byte ASCII form of this code.
    pub fn as_bytes(self) -> [u8; 4] {
        match self {
            EventCode::SessionStarted => *b"SSTA",
            EventCode::SessionEnded => *b"SEND",
            EventCode::FastestLap => *b"FTLP",
            EventCode::Retirement => *b"RTMT",
            EventCode::DrsEnabled => *b"DRSE",
            EventCode::DrsDisabled => *b"DRSD",
            EventCode::TeamMateInPits => *b"TMPT",
            EventCode::ChequeredFlag => *b"CHQF",
            EventCode::RaceWinner => *b"RCWN",
            EventCode::PenaltyIssued => *b"PENA",
            EventCode::SpeedTrapTriggered => *b"SPTP",
            EventCode::StartLights => *b"STLG",
            EventCode::LightsOut => *b"LGOT",
            EventCode::DriveThroughServed => *b"DTSV",
            EventCode::StopGoServed => *b"SGSV",
            EventCode::Flashback => *b"FLBK",
            EventCode::ButtonStatus => *b"BUTN",
        }
    }
}

/// Track identifier from the session packet (`-1` = unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i8)]
pub enum TrackId {
    Melbourne = 0,
    PaulRicard = 1,
    Shanghai = 2,
    Sakhir = 3,
    Catalunya = 4,
    Monaco = 5,
    Montreal = 6,
    Silverstone = 7,
    Hockenheim = 8,
    Hungaroring = 9,
    Spa = 10,
    Monza = 11,
    Singapore = 12,
    Suzuka = 13,
    AbuDhabi = 14,
    Texas = 15,
    Brazil = 16,
    Austria = 17,
    Sochi = 18,
    Mexico = 19,
    Baku = 20,
    SakhirShort = 21,
    SilverstoneShort = 22,
    TexasShort = 23,
    SuzukaShort = 24,
    Hanoi = 25,
    Zandvoort = 26,
    Imola = 27,
    Portimao = 28,
    Jeddah = 29,
    Miami = 30,
}

impl TrackId {
    const ALL: [TrackId; 31] = [
        TrackId::Melbourne,
        TrackId::PaulRicard,
        TrackId::Shanghai,
        TrackId::Sakhir,
        TrackId::Catalunya,
        TrackId::Monaco,
        TrackId::Montreal,
        TrackId::Silverstone,
        TrackId::Hockenheim,
        TrackId::Hungaroring,
        TrackId::Spa,
        TrackId::Monza,
        TrackId::Singapore,
        TrackId::Suzuka,
        TrackId::AbuDhabi,
        TrackId::Texas,
        TrackId::Brazil,
        TrackId::Austria,
        TrackId::Sochi,
        TrackId::Mexico,
        TrackId::Baku,
        TrackId::SakhirShort,
        TrackId::SilverstoneShort,
        TrackId::TexasShort,
        TrackId::SuzukaShort,
        TrackId::Hanoi,
        TrackId::Zandvoort,
        TrackId::Imola,
        TrackId::Portimao,
        TrackId::Jeddah,
        TrackId::Miami,
    ];

    pub fn from_raw(raw: i8) -> Option<TrackId> {
        usize::try_from(raw).ok().and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Penalty type carried by a `PENA` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PenaltyType {
    DriveThrough = 0,
    StopGo = 1,
    GridPenalty = 2,
    PenaltyReminder = 3,
    TimePenalty = 4,
    Warning = 5,
    Disqualified = 6,
    RemovedFromFormationLap = 7,
    ParkedTooLongTimer = 8,
    TyreRegulations = 9,
    ThisLapInvalidated = 10,
    ThisAndNextLapInvalidated = 11,
    ThisLapInvalidatedWithoutReason = 12,
    ThisAndNextLapInvalidatedWithoutReason = 13,
    ThisAndPreviousLapInvalidated = 14,
    ThisAndPreviousLapInvalidatedWithoutReason = 15,
    Retired = 16,
    BlackFlagTimer = 17,
}

impl PenaltyType {
    const ALL: [PenaltyType; 18] = [
        PenaltyType::DriveThrough,
        PenaltyType::StopGo,
        PenaltyType::GridPenalty,
        PenaltyType::PenaltyReminder,
        PenaltyType::TimePenalty,
        PenaltyType::Warning,
        PenaltyType::Disqualified,
        PenaltyType::RemovedFromFormationLap,
        PenaltyType::ParkedTooLongTimer,
        PenaltyType::TyreRegulations,
        PenaltyType::ThisLapInvalidated,
        PenaltyType::ThisAndNextLapInvalidated,
        PenaltyType::ThisLapInvalidatedWithoutReason,
        PenaltyType::ThisAndNextLapInvalidatedWithoutReason,
        PenaltyType::ThisAndPreviousLapInvalidated,
        PenaltyType::ThisAndPreviousLapInvalidatedWithoutReason,
        PenaltyType::Retired,
        PenaltyType::BlackFlagTimer,
    ];

    pub fn from_raw(raw: u8) -> Option<PenaltyType> {
        Self::ALL.get(raw as usize).copied()
    }
}

/// Infringement type carried by a `PENA` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InfringementType {
    BlockingBySlowDriving = 0,
    BlockingByWrongWayDriving = 1,
    ReversingOffTheStartLine = 2,
    BigCollision = 3,
    SmallCollision = 4,
    CollisionFailedToHandBackPositionSingle = 5,
    CollisionFailedToHandBackPositionMultiple = 6,
    CornerCuttingGainedTime = 7,
    CornerCuttingOvertakeSingle = 8,
    CornerCuttingOvertakeMultiple = 9,
    CrossedPitExitLane = 10,
    IgnoringBlueFlags = 11,
    IgnoringYellowFlags = 12,
    IgnoringDriveThrough = 13,
    TooManyDriveThroughs = 14,
    DriveThroughReminderServeWithinNLaps = 15,
    DriveThroughReminderServeThisLap = 16,
    PitLaneSpeeding = 17,
    ParkedForTooLong = 18,
    IgnoringTyreRegulations = 19,
    TooManyPenalties = 20,
    MultipleWarnings = 21,
    ApproachingDisqualification = 22,
    TyreRegulationsSelectSingle = 23,
    TyreRegulationsSelectMultiple = 24,
    LapInvalidatedCornerCutting = 25,
    LapInvalidatedRunningWide = 26,
    CornerCuttingRanWideGainedTimeMinor = 27,
    CornerCuttingRanWideGainedTimeSignificant = 28,
    CornerCuttingRanWideGainedTimeExtreme = 29,
    LapInvalidatedWallRiding = 30,
    LapInvalidatedFlashbackUsed = 31,
    LapInvalidatedResetToTrack = 32,
    BlockingThePitLane = 33,
    JumpStart = 34,
    SafetyCarToCarCollision = 35,
    SafetyCarIllegalOvertake = 36,
    SafetyCarExceedingAllowedPace = 37,
    VirtualSafetyCarExceedingAllowedPace = 38,
    FormationLapBelowAllowedSpeed = 39,
    RetiredMechanicalFailure = 40,
    RetiredTerminallyDamaged = 41,
    SafetyCarFallingTooFarBack = 42,
    BlackFlagTimer = 43,
    UnservedStopGoPenalty = 44,
    UnservedDriveThroughPenalty = 45,
    EngineComponentChange = 46,
    GearBoxChange = 47,
    LeagueGridPenalty = 48,
    RetryPenalty = 49,
    IllegalTimeGain = 50,
    MandatoryPitStop = 51,
}

impl InfringementType {
    const ALL: [InfringementType; 52] = [
        InfringementType::BlockingBySlowDriving,
        InfringementType::BlockingByWrongWayDriving,
        InfringementType::ReversingOffTheStartLine,
        InfringementType::BigCollision,
        InfringementType::SmallCollision,
        InfringementType::CollisionFailedToHandBackPositionSingle,
        InfringementType::CollisionFailedToHandBackPositionMultiple,
        InfringementType::CornerCuttingGainedTime,
        InfringementType::CornerCuttingOvertakeSingle,
        InfringementType::CornerCuttingOvertakeMultiple,
        InfringementType::CrossedPitExitLane,
        InfringementType::IgnoringBlueFlags,
        InfringementType::IgnoringYellowFlags,
        InfringementType::IgnoringDriveThrough,
        InfringementType::TooManyDriveThroughs,
        InfringementType::DriveThroughReminderServeWithinNLaps,
        InfringementType::DriveThroughReminderServeThisLap,
        InfringementType::PitLaneSpeeding,
        InfringementType::ParkedForTooLong,
        InfringementType::IgnoringTyreRegulations,
        InfringementType::TooManyPenalties,
        InfringementType::MultipleWarnings,
        InfringementType::ApproachingDisqualification,
        InfringementType::TyreRegulationsSelectSingle,
        InfringementType::TyreRegulationsSelectMultiple,
        InfringementType::LapInvalidatedCornerCutting,
        InfringementType::LapInvalidatedRunningWide,
        InfringementType::CornerCuttingRanWideGainedTimeMinor,
        InfringementType::CornerCuttingRanWideGainedTimeSignificant,
        InfringementType::CornerCuttingRanWideGainedTimeExtreme,
        InfringementType::LapInvalidatedWallRiding,
        InfringementType::LapInvalidatedFlashbackUsed,
        InfringementType::LapInvalidatedResetToTrack,
        InfringementType::BlockingThePitLane,
        InfringementType::JumpStart,
        InfringementType::SafetyCarToCarCollision,
        InfringementType::SafetyCarIllegalOvertake,
        InfringementType::SafetyCarExceedingAllowedPace,
        InfringementType::VirtualSafetyCarExceedingAllowedPace,
        InfringementType::FormationLapBelowAllowedSpeed,
        InfringementType::RetiredMechanicalFailure,
        InfringementType::RetiredTerminallyDamaged,
        InfringementType::SafetyCarFallingTooFarBack,
        InfringementType::BlackFlagTimer,
        InfringementType::UnservedStopGoPenalty,
        InfringementType::UnservedDriveThroughPenalty,
        InfringementType::EngineComponentChange,
        InfringementType::GearBoxChange,
        InfringementType::LeagueGridPenalty,
        InfringementType::RetryPenalty,
        InfringementType::IllegalTimeGain,
        InfringementType::MandatoryPitStop,
    ];

    pub fn from_raw(raw: u8) -> Option<InfringementType> {
        Self::ALL.get(raw as usize).copied()
    }
}

/// Surface type reported per wheel in the car telemetry packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SurfaceType {
    Tarmac = 0,
    RumbleStrip = 1,
    Concrete = 2,
    Rock = 3,
    Gravel = 4,
    Mud = 5,
    Sand = 6,
    Grass = 7,
    Water = 8,
    Cobblestone = 9,
    Metal = 10,
    Ridged = 11,
}

impl SurfaceType {
    const ALL: [SurfaceType; 12] = [
        SurfaceType::Tarmac,
        SurfaceType::RumbleStrip,
        SurfaceType::Concrete,
        SurfaceType::Rock,
        SurfaceType::Gravel,
        SurfaceType::Mud,
        SurfaceType::Sand,
        SurfaceType::Grass,
        SurfaceType::Water,
        SurfaceType::Cobblestone,
        SurfaceType::Metal,
        SurfaceType::Ridged,
    ];

    pub fn from_raw(raw: u8) -> Option<SurfaceType> {
        Self::ALL.get(raw as usize).copied()
    }
}

/// Button bit flags carried by a `BUTN` event.
pub mod buttons {
    pub const CROSS_OR_A: u32 = 0x0000_0001;
    pub const TRIANGLE_OR_Y: u32 = 0x0000_0002;
    pub const CIRCLE_OR_B: u32 = 0x0000_0004;
    pub const SQUARE_OR_X: u32 = 0x0000_0008;
    pub const DPAD_LEFT: u32 = 0x0000_0010;
    pub const DPAD_RIGHT: u32 = 0x0000_0020;
    pub const DPAD_UP: u32 = 0x0000_0040;
    pub const DPAD_DOWN: u32 = 0x0000_0080;
    pub const OPTIONS_OR_MENU: u32 = 0x0000_0100;
    pub const L1_OR_LB: u32 = 0x0000_0200;
    pub const R1_OR_RB: u32 = 0x0000_0400;
    pub const L2_OR_LT: u32 = 0x0000_0800;
    pub const R2_OR_RT: u32 = 0x0000_1000;
    pub const LEFT_STICK_CLICK: u32 = 0x0000_2000;
    pub const RIGHT_STICK_CLICK: u32 = 0x0000_4000;
    pub const RIGHT_STICK_LEFT: u32 = 0x0000_8000;
    pub const RIGHT_STICK_RIGHT: u32 = 0x0001_0000;
    pub const RIGHT_STICK_UP: u32 = 0x0002_0000;
    pub const RIGHT_STICK_DOWN: u32 = 0x0004_0000;
    pub const SPECIAL: u32 = 0x0008_0000;
    pub const UDP_ACTION_1: u32 = 0x0010_0000;
    pub const UDP_ACTION_2: u32 = 0x0020_0000;
    pub const UDP_ACTION_3: u32 = 0x0040_0000;
    pub const UDP_ACTION_4: u32 = 0x0080_0000;
    pub const UDP_ACTION_5: u32 = 0x0100_0000;
    pub const UDP_ACTION_6: u32 = 0x0200_0000;
    pub const UDP_ACTION_7: u32 = 0x0400_0000;
    pub const UDP_ACTION_8: u32 = 0x0800_0000;
    pub const UDP_ACTION_9: u32 = 0x1000_0000;
    pub const UDP_ACTION_10: u32 = 0x2000_0000;
    pub const UDP_ACTION_11: u32 = 0x4000_0000;
    pub const UDP_ACTION_12: u32 = 0x8000_0000;

    /// Whether `status` has every bit of `flag` set.
    pub fn pressed(status: u32, flag: u32) -> bool {
        status & flag == flag
    }
}
