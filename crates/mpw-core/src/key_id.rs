//! Master key fingerprints.

use std::fmt;

use data_encoding::{HEXUPPER, HEXUPPER_PERMISSIVE};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MpwError;

/// SHA-256 of a master key.
///
/// Lets a persistence layer recognise the right master password without
/// storing anything that helps recover it. Displays as uppercase hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyId([u8; 32]);

impl KeyId {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a 64-character hex string, in either case.
    ///
    /// # Errors
    ///
    /// Returns [`MpwError::InvalidArgument`] if `hex` is not 32 hex-encoded bytes.
    pub fn from_hex(hex: &str) -> Result<Self, MpwError> {
        let decoded = HEXUPPER_PERMISSIVE
            .decode(hex.as_bytes())
            .map_err(|e| MpwError::InvalidArgument(format!("key id is not hex: {e}")))?;
        let bytes: [u8; 32] = decoded.try_into().map_err(|v: Vec<u8>| {
            MpwError::InvalidArgument(format!("key id must be 32 bytes, got {}", v.len()))
        })?;
        Ok(Self(bytes))
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Uppercase hex encoding.
    #[must_use]
    pub fn to_hex(&self) -> String {
        HEXUPPER.encode(&self.0)
    }

    /// Compare against a stored hex string, ignoring case.
    #[must_use]
    pub fn matches_hex(&self, hex: &str) -> bool {
        self.to_hex().eq_ignore_ascii_case(hex)
    }
}

impl fmt::Debug for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyId({})", self.to_hex())
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for KeyId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for KeyId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}
