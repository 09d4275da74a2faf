//! Async Rust library for decoding and distributing F1 22 UDP telemetry.
//!
//! Paddock listens on the game's UDP telemetry feed, decodes the twelve
//! fixed-layout packet types of the 2022 protocol into typed records and
//! distributes them over a typed publish/subscribe bus.
//!
//! # Features
//!
//! - **Complete protocol coverage**: all twelve 2022 packet types, including
//!   the event sub-variants
//! - **Fault isolation**: one malformed datagram is logged and dropped, the
//!   stream keeps flowing
//! - **Typed subscriptions**: each consumer subscribes to one record type
//!   and receives records in publish order
//! - **Graceful lifecycle**: idle timeouts are informational, shutdown is a
//!   cancellation away
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use paddock::{PacketLap, TelemetryClient, UdpOptions};
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TelemetryClient::connect(UdpOptions::default()).await?;
//!     let mut laps = client.subscribe::<PacketLap>();
//!
//!     while let Some(lap) = laps.next().await {
//!         let player = &lap.lap_data[lap.header.player_car_index as usize];
//!         println!("lap {} position {}", player.current_lap_num, player.car_position);
//!     }
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
pub mod packets;
mod wire;
#[cfg(test)]
mod test_utils;

// Decode and distribution pipeline
pub mod bus;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod source;

// Core exports
pub use error::{Result, TelemetryError};
pub use packets::*;
pub use wire::WireCursor;

// Pipeline exports
pub use bus::{FromPacket, PacketBus, Subscription};
pub use client::TelemetryClient;
pub use config::UdpOptions;
pub use dispatch::{DispatchOutcome, PacketDispatcher};
pub use source::{PacketSource, SourceEvent, UdpSource};
