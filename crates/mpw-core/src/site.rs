//! Persistable site parameters.

use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmVersion;
use crate::counter::SiteCounter;
use crate::purpose::KeyPurpose;
use crate::result_type::ResultType;

/// Everything besides the master key that determines one site result.
///
/// Serializes versions as integers, result types as their numeric type ID
/// and purposes as their short name, so records stay stable across releases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSpec {
    pub site_name: String,
    pub result_type: ResultType,
    #[serde(default)]
    pub counter: SiteCounter,
    #[serde(default)]
    pub purpose: KeyPurpose,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default)]
    pub algorithm_version: AlgorithmVersion,
}

impl SiteSpec {
    /// A new site with the defaults for `purpose`: its default result type,
    /// counter 1, no context, current algorithm version.
    #[must_use]
    pub fn new(site_name: impl Into<String>, purpose: KeyPurpose) -> Self {
        Self {
            site_name: site_name.into(),
            result_type: purpose.default_result_type(),
            counter: SiteCounter::DEFAULT,
            purpose,
            context: None,
            algorithm_version: AlgorithmVersion::CURRENT,
        }
    }

    #[must_use]
    pub fn with_result_type(mut self, result_type: ResultType) -> Self {
        self.result_type = result_type;
        self
    }

    #[must_use]
    pub fn with_counter(mut self, counter: SiteCounter) -> Self {
        self.counter = counter;
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_algorithm_version(mut self, version: AlgorithmVersion) -> Self {
        self.algorithm_version = version;
        self
    }
}
