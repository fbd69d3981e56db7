//! Version 2: site names and contexts are counted in UTF-8 bytes.

use super::{Algorithm, AlgorithmVersion};
use crate::encoding::LengthRule;

pub(super) struct AlgorithmV2;

impl Algorithm for AlgorithmV2 {
    fn version(&self) -> AlgorithmVersion {
        AlgorithmVersion::V2
    }

    fn full_name_rule(&self) -> LengthRule {
        LengthRule::Utf16Units
    }

    fn site_name_rule(&self) -> LengthRule {
        LengthRule::Utf8Bytes
    }
}
