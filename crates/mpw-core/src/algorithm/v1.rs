//! Version 1: seed bytes are read unsigned. Lengths are still counted in
//! UTF-16 code units.

use super::{Algorithm, AlgorithmVersion};
use crate::encoding::LengthRule;

pub(super) struct AlgorithmV1;

impl Algorithm for AlgorithmV1 {
    fn version(&self) -> AlgorithmVersion {
        AlgorithmVersion::V1
    }

    fn full_name_rule(&self) -> LengthRule {
        LengthRule::Utf16Units
    }

    fn site_name_rule(&self) -> LengthRule {
        LengthRule::Utf16Units
    }
}
