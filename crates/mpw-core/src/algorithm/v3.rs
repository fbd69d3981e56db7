//! Version 3: every length is counted in UTF-8 bytes.

use super::{Algorithm, AlgorithmVersion};
use crate::encoding::LengthRule;

pub(super) struct AlgorithmV3;

impl Algorithm for AlgorithmV3 {
    fn version(&self) -> AlgorithmVersion {
        AlgorithmVersion::V3
    }

    fn full_name_rule(&self) -> LengthRule {
        LengthRule::Utf8Bytes
    }

    fn site_name_rule(&self) -> LengthRule {
        LengthRule::Utf8Bytes
    }
}
