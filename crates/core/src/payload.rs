//! Field payload codec.
//!
//! A record field is a name plus a raw byte payload; the type tag lives
//! only in the accessor used, never in the stored bytes. Fixed-width
//! numbers encode as exactly 8 little-endian bytes, strings as their
//! UTF-8 bytes, binary verbatim.
//!
//! Typed decoders are total: a payload of the wrong shape decodes to
//! `None`, which the engine surfaces as NotFound for that accessor. This
//! is what keeps a string field from being misread as a number.

use byteorder::{ByteOrder, LittleEndian};

/// Exact payload length required by the u64/i64 accessors.
pub const FIXED_WIDTH: usize = 8;

/// Payload length used for f32 values stored by the facades.
pub const F32_WIDTH: usize = 4;

/// Encode a u64 as its 8-byte little-endian payload.
pub fn encode_u64(value: u64) -> [u8; FIXED_WIDTH] {
    let mut buf = [0u8; FIXED_WIDTH];
    LittleEndian::write_u64(&mut buf, value);
    buf
}

/// Decode a u64 payload. `None` unless the payload is exactly 8 bytes.
pub fn decode_u64(payload: &[u8]) -> Option<u64> {
    if payload.len() != FIXED_WIDTH {
        return None;
    }
    Some(LittleEndian::read_u64(payload))
}

/// Encode an i64 as its 8-byte little-endian payload.
pub fn encode_i64(value: i64) -> [u8; FIXED_WIDTH] {
    let mut buf = [0u8; FIXED_WIDTH];
    LittleEndian::write_i64(&mut buf, value);
    buf
}

/// Decode an i64 payload. `None` unless the payload is exactly 8 bytes.
pub fn decode_i64(payload: &[u8]) -> Option<i64> {
    if payload.len() != FIXED_WIDTH {
        return None;
    }
    Some(LittleEndian::read_i64(payload))
}

/// Encode an f32 as its 4-byte little-endian payload.
pub fn encode_f32(value: f32) -> [u8; F32_WIDTH] {
    let mut buf = [0u8; F32_WIDTH];
    LittleEndian::write_f32(&mut buf, value);
    buf
}

/// Decode an f32 payload. `None` unless the payload is exactly 4 bytes.
pub fn decode_f32(payload: &[u8]) -> Option<f32> {
    if payload.len() != F32_WIDTH {
        return None;
    }
    Some(LittleEndian::read_f32(payload))
}

/// Decode a string payload. `None` unless the bytes are valid UTF-8.
pub fn decode_str(payload: &[u8]) -> Option<&str> {
    std::str::from_utf8(payload).ok()
}
