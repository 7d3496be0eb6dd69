//! Fixed-width decode of logged write buffers.

use thiserror::Error;

/// The buffer length is not one of the supported widths (1, 2, 4 or 8 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported logger length {0}")]
pub struct UnsupportedWidth(pub usize);

/// Decodes `bytes` as a little-endian unsigned integer of exactly
/// `bytes.len()` bytes.
pub fn decode_unsigned(bytes: &[u8]) -> Result<u64, UnsupportedWidth> {
    let value = match *bytes {
        [b0] => u64::from(b0),
        [b0, b1] => u64::from(u16::from_le_bytes([b0, b1])),
        [b0, b1, b2, b3] => u64::from(u32::from_le_bytes([b0, b1, b2, b3])),
        [b0, b1, b2, b3, b4, b5, b6, b7] => u64::from_le_bytes([b0, b1, b2, b3, b4, b5, b6, b7]),
        _ => return Err(UnsupportedWidth(bytes.len())),
    };
    Ok(value)
}
