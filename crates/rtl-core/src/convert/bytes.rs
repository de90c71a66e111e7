//! Little-endian encoding of fixed-width integers.
//!
//! Decoders read from the start of the slice and ignore trailing bytes; a
//! slice that is too short is an error rather than a panic.

use super::ConvertError;

/// Copies the first `N` bytes of `bs` into an array.
fn leading<const N: usize>(bs: &[u8]) -> Result<[u8; N], ConvertError> {
    bs.get(..N)
        .and_then(|head| <[u8; N]>::try_from(head).ok())
        .ok_or(ConvertError::InsufficientData {
            needed: N,
            available: bs.len(),
        })
}

/// Reads one byte.
///
/// # Errors
///
/// Returns [`ConvertError::InsufficientData`] if `bs` is empty.
pub fn bytes_to_u8(bs: &[u8]) -> Result<u8, ConvertError> {
    leading::<1>(bs).map(|[b]| b)
}

/// Reads a little-endian `u16`.
///
/// # Errors
///
/// Returns [`ConvertError::InsufficientData`] if `bs` has fewer than 2 bytes.
pub fn bytes_to_u16(bs: &[u8]) -> Result<u16, ConvertError> {
    leading(bs).map(u16::from_le_bytes)
}

/// Reads a little-endian `u32`.
///
/// # Errors
///
/// Returns [`ConvertError::InsufficientData`] if `bs` has fewer than 4 bytes.
pub fn bytes_to_u32(bs: &[u8]) -> Result<u32, ConvertError> {
    leading(bs).map(u32::from_le_bytes)
}

/// Reads a little-endian `u64`.
///
/// # Errors
///
/// Returns [`ConvertError::InsufficientData`] if `bs` has fewer than 8 bytes.
pub fn bytes_to_u64(bs: &[u8]) -> Result<u64, ConvertError> {
    leading(bs).map(u64::from_le_bytes)
}

pub fn u16_to_bytes(v: u16) -> [u8; 2] {
    v.to_le_bytes()
}

pub fn i16_to_bytes(v: i16) -> [u8; 2] {
    v.to_le_bytes()
}

pub fn u32_to_bytes(v: u32) -> [u8; 4] {
    v.to_le_bytes()
}

pub fn i32_to_bytes(v: i32) -> [u8; 4] {
    v.to_le_bytes()
}

pub fn u64_to_bytes(v: u64) -> [u8; 8] {
    v.to_le_bytes()
}

pub fn i64_to_bytes(v: i64) -> [u8; 8] {
    v.to_le_bytes()
}
