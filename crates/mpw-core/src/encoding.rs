//! Byte-level helpers for assembling salts and seed messages.
//!
//! Every variable-length field is prefixed by its length as a big-endian
//! `u32`. How that length is counted depends on the algorithm version; see
//! [`LengthRule`].

use crate::error::MpwError;

/// How a string's length is counted before being written as a prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthRule {
    /// Number of UTF-8 bytes.
    Utf8Bytes,
    /// Number of UTF-16 code units (what older clients wrote).
    Utf16Units,
}

impl LengthRule {
    /// Count `value` under this rule.
    ///
    /// # Errors
    ///
    /// Returns [`MpwError::InvalidArgument`] if the count does not fit in a `u32`.
    pub fn count(self, value: &str) -> Result<u32, MpwError> {
        let count = match self {
            Self::Utf8Bytes => value.len(),
            Self::Utf16Units => value.encode_utf16().count(),
        };
        u32::try_from(count).map_err(|_| {
            MpwError::InvalidArgument(format!("string too long for a length prefix: {count}"))
        })
    }
}

/// Append a big-endian `u32`.
pub fn push_be32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_be_bytes());
}

/// Append `be32(length) || utf8(value)`, counting the length with `rule`.
///
/// # Errors
///
/// Propagates the overflow error from [`LengthRule::count`].
pub fn push_prefixed(buf: &mut Vec<u8>, rule: LengthRule, value: &str) -> Result<(), MpwError> {
    push_be32(buf, rule.count(value)?);
    buf.extend_from_slice(value.as_bytes());
    Ok(())
}
