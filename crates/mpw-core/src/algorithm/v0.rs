//! Version 0: the original release.
//!
//! Lengths are counted in UTF-16 code units, and seed bytes went through a
//! platform `char`, which is signed on the reference builds. Each byte was
//! widened as a signed value, stored big-endian and read back in host
//! (little-endian) order. [`seed_index`] reproduces that exactly.

use super::{Algorithm, AlgorithmVersion};
use crate::encoding::LengthRule;

pub(super) struct AlgorithmV0;

/// The index a V0 client derived from `byte`.
///
/// `0x05` becomes `0x0500`, `0x80` becomes `0x80FF`.
pub(super) fn seed_index(byte: u8) -> u16 {
    let widened = if byte & 0x80 == 0 {
        u16::from(byte)
    } else {
        0xFF00 | u16::from(byte)
    };
    u16::from_le_bytes(widened.to_be_bytes())
}

impl Algorithm for AlgorithmV0 {
    fn version(&self) -> AlgorithmVersion {
        AlgorithmVersion::V0
    }

    fn full_name_rule(&self) -> LengthRule {
        LengthRule::Utf16Units
    }

    fn site_name_rule(&self) -> LengthRule {
        LengthRule::Utf16Units
    }

    fn seed_index(&self, byte: u8) -> u16 {
        seed_index(byte)
    }
}
