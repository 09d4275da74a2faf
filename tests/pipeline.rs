//! End-to-end pipeline tests: real UDP socket in, typed subscription out.

use anyhow::{Context, Result};
use futures::StreamExt;
use paddock::{
    Packet, PacketId, PacketLap, PacketMotion, SourceEvent, TelemetryClient, UdpOptions,
    UdpSource, MAX_CARS,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;

fn loopback_options(idle_timeout_ms: u64) -> UdpOptions {
    UdpOptions {
        bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        idle_timeout_ms,
        ..UdpOptions::default()
    }
}

fn header(packet_id: i8, frame: u32) -> Vec<u8> {
    let mut b = Vec::with_capacity(24);
    b.extend_from_slice(&2022u16.to_le_bytes());
    b.extend_from_slice(&[1, 18, 1, packet_id as u8]);
    b.extend_from_slice(&0xF1_2022u64.to_le_bytes());
    b.extend_from_slice(&90.25f32.to_le_bytes());
    b.extend_from_slice(&frame.to_le_bytes());
    b.push(0);
    b.push(255);
    b
}

fn motion_datagram(frame: u32) -> Vec<u8> {
    let mut b = header(0, frame);
    for i in 0..MAX_CARS {
        for v in [i as f32, 0.0, 0.0, 10.0, 0.0, 0.0] {
            b.extend_from_slice(&v.to_le_bytes());
        }
        for d in [0u16; 6] {
            b.extend_from_slice(&d.to_le_bytes());
        }
        for v in [0.0f32; 6] {
            b.extend_from_slice(&v.to_le_bytes());
        }
    }
    for v in [0.0f32; 30] {
        b.extend_from_slice(&v.to_le_bytes());
    }
    b
}

fn lap_datagram(frame: u32) -> Vec<u8> {
    let mut b = header(2, frame);
    for i in 0..MAX_CARS {
        b.extend_from_slice(&88_000u32.to_le_bytes());
        b.extend_from_slice(&44_000u32.to_le_bytes());
        b.extend_from_slice(&28_000u16.to_le_bytes());
        b.extend_from_slice(&30_000u16.to_le_bytes());
        for v in [100.0f32, 5_000.0, 0.0] {
            b.extend_from_slice(&v.to_le_bytes());
        }
        b.extend_from_slice(&[i as u8 + 1, 12, 0, 1, 2, 0, 0, 0, 0, 0, i as u8 + 1, 4, 2, 0]);
        b.extend_from_slice(&0u16.to_le_bytes());
        b.extend_from_slice(&0u16.to_le_bytes());
        b.push(0);
    }
    b.extend_from_slice(&[255, 255]);
    b
}

async fn bound_client(idle_timeout_ms: u64) -> Result<(TelemetryClient, SocketAddr, UdpSocket)> {
    let _ = tracing_subscriber::fmt::try_init();
    let options = loopback_options(idle_timeout_ms);
    let source = UdpSource::bind(&options).await.context("bind loopback")?;
    let addr = source.local_addr().context("local addr")?;
    let client = TelemetryClient::from_source(source, &options);
    let sender = UdpSocket::bind("127.0.0.1:0").await.context("bind sender")?;
    Ok((client, addr, sender))
}

#[tokio::test(flavor = "multi_thread")]
async fn datagrams_reach_typed_subscribers_in_order() -> Result<()> {
    let (client, addr, sender) = bound_client(1000).await?;
    let mut motions = client.subscribe::<PacketMotion>();
    let mut laps = client.subscribe::<PacketLap>();

    for frame in 1..=3u32 {
        sender.send_to(&motion_datagram(frame), addr).await?;
    }
    sender.send_to(&lap_datagram(4), addr).await?;

    for expected in 1..=3u32 {
        let motion = motions.next().await.context("motion record")?;
        assert_eq!(motion.header.frame_identifier, expected);
        assert_eq!(motion.car_motion.len(), MAX_CARS);
    }
    let lap = laps.next().await.context("lap record")?;
    assert_eq!(lap.header.frame_identifier, 4);
    assert_eq!(lap.lap_data[0].car_position, 1);

    client.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_and_unknown_datagrams_do_not_break_the_stream() -> Result<()> {
    let (client, addr, sender) = bound_client(1000).await?;
    let mut motions = client.subscribe::<PacketMotion>();

    sender.send_to(&motion_datagram(1), addr).await?;
    // Truncated mid-payload.
    sender.send_to(&motion_datagram(99)[..200], addr).await?;
    // Unrecognized discriminator.
    sender.send_to(&header(42, 100), addr).await?;
    // Not even a full header.
    sender.send_to(&[0x06, 0x22], addr).await?;
    sender.send_to(&motion_datagram(2), addr).await?;

    assert_eq!(motions.next().await.context("first")?.header.frame_identifier, 1);
    assert_eq!(motions.next().await.context("second")?.header.frame_identifier, 2);

    client.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn ingestion_survives_idle_periods() -> Result<()> {
    // Idle timeout far shorter than the quiet period.
    let (client, addr, sender) = bound_client(10).await?;
    let mut motions = client.subscribe::<PacketMotion>();

    tokio::time::sleep(std::time::Duration::from_millis(60)).await;
    sender.send_to(&motion_datagram(5), addr).await?;

    assert_eq!(motions.next().await.context("after idle")?.header.frame_identifier, 5);
    client.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn untyped_subscription_observes_publish_order_across_types() -> Result<()> {
    let (client, addr, sender) = bound_client(1000).await?;
    let mut all = client.subscribe::<Packet>();

    sender.send_to(&lap_datagram(1), addr).await?;
    sender.send_to(&motion_datagram(2), addr).await?;
    sender.send_to(&lap_datagram(3), addr).await?;

    let mut kinds = Vec::new();
    for _ in 0..3 {
        kinds.push(all.next().await.context("published record")?.kind());
    }
    assert_eq!(kinds, vec![PacketId::LapData, PacketId::Motion, PacketId::LapData]);

    client.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn shutdown_releases_the_socket() -> Result<()> {
    let options = loopback_options(1000);
    let source = UdpSource::bind(&options).await?;
    let addr = source.local_addr()?;
    let client = TelemetryClient::from_source(source, &options);
    client.shutdown().await;

    // The port is free again once the loop has stopped.
    UdpSocket::bind(addr).await.context("socket should be released after shutdown")?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn udp_source_reports_idle_then_datagrams() -> Result<()> {
    let options = loopback_options(10);
    let mut source = UdpSource::bind(&options).await?;
    let addr = source.local_addr()?;

    use paddock::PacketSource;
    assert_eq!(source.recv().await?, Some(SourceEvent::Idle));

    let sender = UdpSocket::bind("127.0.0.1:0").await?;
    sender.send_to(&motion_datagram(1), addr).await?;
    match source.recv().await? {
        Some(SourceEvent::Datagram(bytes)) => assert_eq!(bytes, motion_datagram(1)),
        other => panic!("expected datagram, got {other:?}"),
    }
    Ok(())
}
