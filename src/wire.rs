//! Little-endian wire cursor shared by every packet decoder.
//!
//! The F1 22 wire format is a fixed-layout binary protocol: all integers are
//! little-endian, floats are IEEE-754 single precision (doubles appear only
//! in the final classification packet). Decoders read fields strictly in
//! protocol order through a [`WireCursor`], which tracks a shared position
//! and fails with [`TelemetryError::Truncated`] the moment a field would
//! read past the end of the datagram. Nothing is guessed or zero-filled.

use crate::{Result, TelemetryError};

/// Maximum length of a driver name buffer on the wire, in bytes.
pub const NAME_LEN: usize = 48;

/// A bounds-checked little-endian reader over one datagram.
///
/// The cursor is deliberately cheap: it borrows the datagram and keeps a
/// single position counter, so a failed decode leaves nothing to clean up.
#[derive(Debug)]
pub struct WireCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireCursor<'a> {
    /// Wrap a datagram, positioned at its first byte.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Current read position from the start of the datagram.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn take(&mut self, n: usize, context: &'static str) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(TelemetryError::truncated(context, n, self.remaining()));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn u8(&mut self, context: &'static str) -> Result<u8> {
        Ok(self.take(1, context)?[0])
    }

    pub fn i8(&mut self, context: &'static str) -> Result<i8> {
        Ok(self.take(1, context)?[0] as i8)
    }

    pub fn u16(&mut self, context: &'static str) -> Result<u16> {
        let b = self.take(2, context)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn i16(&mut self, context: &'static str) -> Result<i16> {
        let b = self.take(2, context)?;
        Ok(i16::from_le_bytes([b[0], b[1]]))
    }

    pub fn u32(&mut self, context: &'static str) -> Result<u32> {
        let b = self.take(4, context)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn u64(&mut self, context: &'static str) -> Result<u64> {
        let b = self.take(8, context)?;
        Ok(u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
    }

    pub fn f32(&mut self, context: &'static str) -> Result<f32> {
        let b = self.take(4, context)?;
        Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn f64(&mut self, context: &'static str) -> Result<f64> {
        let b = self.take(8, context)?;
        Ok(f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
    }

    /// Read a fixed 4-byte ASCII code (event discriminators).
    pub fn code(&mut self, context: &'static str) -> Result<[u8; 4]> {
        let b = self.take(4, context)?;
        Ok([b[0], b[1], b[2], b[3]])
    }

    /// Read an `[f32; 4]` wheel array (order on the wire: RL, RR, FL, FR).
    pub fn wheel_f32(&mut self, context: &'static str) -> Result<[f32; 4]> {
        Ok([
            self.f32(context)?,
            self.f32(context)?,
            self.f32(context)?,
            self.f32(context)?,
        ])
    }

    /// Read a `[u8; 4]` wheel array.
    pub fn wheel_u8(&mut self, context: &'static str) -> Result<[u8; 4]> {
        let b = self.take(4, context)?;
        Ok([b[0], b[1], b[2], b[3]])
    }

    /// Read a `[u16; 4]` wheel array.
    pub fn wheel_u16(&mut self, context: &'static str) -> Result<[u16; 4]> {
        Ok([
            self.u16(context)?,
            self.u16(context)?,
            self.u16(context)?,
            self.u16(context)?,
        ])
    }

    /// Read a fixed 48-byte display-name buffer.
    ///
    /// Names are UTF-8 and usually null-terminated, but the full buffer is
    /// always consumed; bytes past the first NUL are not meaningful. Invalid
    /// UTF-8 is replaced rather than rejected since the name is display-only.
    pub fn name(&mut self, context: &'static str) -> Result<String> {
        let raw = self.take(NAME_LEN, context)?;
        let logical = match raw.iter().position(|&b| b == 0) {
            Some(nul) => &raw[..nul],
            None => raw,
        };
        Ok(String::from_utf8_lossy(logical).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reads_advance_in_field_order() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0x2206u16.to_le_bytes());
        bytes.push(0xFF); // -1 as i8
        bytes.extend_from_slice(&3.5f32.to_le_bytes());
        bytes.extend_from_slice(&0xDEADBEEFu32.to_le_bytes());

        let mut cur = WireCursor::new(&bytes);
        assert_eq!(cur.u16("a").unwrap(), 0x2206);
        assert_eq!(cur.i8("b").unwrap(), -1);
        assert_eq!(cur.f32("c").unwrap(), 3.5);
        assert_eq!(cur.u32("d").unwrap(), 0xDEADBEEF);
        assert_eq!(cur.remaining(), 0);
        assert_eq!(cur.position(), bytes.len());
    }

    #[test]
    fn truncated_read_reports_needed_and_remaining() {
        let mut cur = WireCursor::new(&[1, 2]);
        let err = cur.u32("frame identifier").unwrap_err();
        match err {
            TelemetryError::Truncated { context, needed, remaining } => {
                assert_eq!(context, "frame identifier");
                assert_eq!(needed, 4);
                assert_eq!(remaining, 2);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn failed_read_does_not_advance() {
        let mut cur = WireCursor::new(&[1, 2, 3]);
        assert!(cur.u64("x").is_err());
        assert_eq!(cur.position(), 0);
        assert_eq!(cur.u16("y").unwrap(), 0x0201);
    }

    #[test]
    fn name_stops_at_first_nul() {
        let mut raw = vec![0u8; NAME_LEN];
        raw[..5].copy_from_slice(b"SAINZ");
        // Garbage after the terminator must be consumed but ignored.
        raw[6] = 0xC3;
        let mut cur = WireCursor::new(&raw);
        assert_eq!(cur.name("driver name").unwrap(), "SAINZ");
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn name_without_terminator_uses_whole_buffer() {
        let raw = [b'A'; NAME_LEN];
        let mut cur = WireCursor::new(&raw);
        assert_eq!(cur.name("driver name").unwrap().len(), NAME_LEN);
    }

    proptest! {
        #[test]
        fn primitive_roundtrips(v_u16 in any::<u16>(), v_u64 in any::<u64>(), v_f32 in any::<f32>(), v_i8 in any::<i8>()) {
            let mut bytes = Vec::new();
            bytes.extend_from_slice(&v_u16.to_le_bytes());
            bytes.extend_from_slice(&v_u64.to_le_bytes());
            bytes.extend_from_slice(&v_f32.to_le_bytes());
            bytes.push(v_i8 as u8);

            let mut cur = WireCursor::new(&bytes);
            prop_assert_eq!(cur.u16("u16")?, v_u16);
            prop_assert_eq!(cur.u64("u64")?, v_u64);
            let f = cur.f32("f32")?;
            if v_f32.is_nan() {
                prop_assert!(f.is_nan());
            } else {
                prop_assert_eq!(f, v_f32);
            }
            prop_assert_eq!(cur.i8("i8")?, v_i8);
        }

        #[test]
        fn any_short_buffer_fails_u64(len in 0usize..8) {
            let bytes = vec![0u8; len];
            let mut cur = WireCursor::new(&bytes);
            prop_assert!(cur.u64("x").is_err());
        }
    }
}
