//! Versioned derivation algorithms.
//!
//! Each [`AlgorithmVersion`] freezes one encoding policy: how name lengths
//! are counted and how seed bytes become indices. Later versions fix
//! counting bugs in earlier ones, but every version must keep reproducing
//! the results it always produced, so each lives in its own module and
//! none is ever patched.
//!
//! The shared pipeline (salt layout, seed message layout, template
//! rendering) is provided by the [`Algorithm`] trait; versions only
//! override the policy hooks.

mod v0;
mod v1;
mod v2;
mod v3;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

use crate::encoding::{push_be32, push_prefixed, LengthRule};
use crate::error::MpwError;
use crate::kdf::SITE_KEY_LEN;
use crate::purpose::KeyPurpose;
use crate::result_type::ResultType;

// ---------------------------------------------------------------------------
// AlgorithmVersion
// ---------------------------------------------------------------------------

/// Algorithm version tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlgorithmVersion {
    /// Signed seed bytes, UTF-16 lengths everywhere.
    V0,
    /// Unsigned seed bytes, UTF-16 lengths everywhere.
    V1,
    /// Site names and contexts counted in UTF-8 bytes.
    V2,
    /// Full names counted in UTF-8 bytes as well.
    V3,
}

impl AlgorithmVersion {
    /// Oldest supported version.
    pub const FIRST: Self = Self::V0;
    /// Newest supported version.
    pub const LAST: Self = Self::V3;
    /// Version new users are created with.
    pub const CURRENT: Self = Self::V3;

    /// Every version, oldest first.
    pub const ALL: [Self; 4] = [Self::V0, Self::V1, Self::V2, Self::V3];

    /// Map a persisted version number back to a version.
    ///
    /// # Errors
    ///
    /// Returns [`MpwError::NotFound`] for numbers above [`AlgorithmVersion::LAST`].
    pub fn from_u32(version: u32) -> Result<Self, MpwError> {
        match version {
            0 => Ok(Self::V0),
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            3 => Ok(Self::V3),
            other => Err(MpwError::NotFound(format!("algorithm version: {other}"))),
        }
    }

    #[must_use]
    pub const fn as_u32(self) -> u32 {
        match self {
            Self::V0 => 0,
            Self::V1 => 1,
            Self::V2 => 2,
            Self::V3 => 3,
        }
    }

    /// The encoding policy for this version.
    pub(crate) fn algorithm(self) -> &'static dyn Algorithm {
        match self {
            Self::V0 => &v0::AlgorithmV0,
            Self::V1 => &v1::AlgorithmV1,
            Self::V2 => &v2::AlgorithmV2,
            Self::V3 => &v3::AlgorithmV3,
        }
    }
}

impl Default for AlgorithmVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for AlgorithmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

impl Serialize for AlgorithmVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.as_u32())
    }
}

impl<'de> Deserialize<'de> for AlgorithmVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let version = u32::deserialize(deserializer)?;
        Self::from_u32(version).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// One version's encoding policy plus the pipeline built on it.
pub(crate) trait Algorithm: Sync {
    fn version(&self) -> AlgorithmVersion;

    /// How the full name is counted in the master key salt.
    fn full_name_rule(&self) -> LengthRule;

    /// How the site name and context are counted in the seed message.
    fn site_name_rule(&self) -> LengthRule;

    /// Turn a seed byte into a template or alphabet index.
    fn seed_index(&self, byte: u8) -> u16 {
        u16::from(byte)
    }

    /// `scope(Authentication) || be32(len(full_name)) || full_name`.
    fn master_key_salt(&self, full_name: &str) -> Result<Zeroizing<Vec<u8>>, MpwError> {
        let scope = KeyPurpose::Authentication.scope();
        let mut salt = Zeroizing::new(Vec::with_capacity(
            scope.len().saturating_add(4).saturating_add(full_name.len()),
        ));
        salt.extend_from_slice(scope.as_bytes());
        push_prefixed(&mut salt, self.full_name_rule(), full_name)?;
        Ok(salt)
    }

    /// `scope(purpose) || be32(len(site)) || site || be32(counter) [|| be32(len(ctx)) || ctx]`.
    ///
    /// An empty context is treated as absent.
    fn site_seed_message(
        &self,
        site_name: &str,
        counter: u32,
        purpose: KeyPurpose,
        context: Option<&str>,
    ) -> Result<Zeroizing<Vec<u8>>, MpwError> {
        let rule = self.site_name_rule();
        let mut message = Zeroizing::new(Vec::with_capacity(64));
        message.extend_from_slice(purpose.scope().as_bytes());
        push_prefixed(&mut message, rule, site_name)?;
        push_be32(&mut message, counter);
        if let Some(context) = context.filter(|c| !c.is_empty()) {
            push_prefixed(&mut message, rule, context)?;
        }
        Ok(message)
    }

    /// Render a generated result from a site seed.
    ///
    /// Byte 0 picks the template; byte `i + 1` picks the character at
    /// position `i`.
    fn render(&self, seed: &[u8; SITE_KEY_LEN], result_type: ResultType) -> Result<String, MpwError> {
        let template = result_type.template_at(self.seed_index(seed[0]))?;
        if template.len() >= seed.len() {
            return Err(MpwError::AlgorithmFailure(format!(
                "template too long for seed: {} characters",
                template.len()
            )));
        }
        tracing::trace!(
            version = %self.version(),
            result_type = %result_type,
            length = template.len(),
            "rendering site result"
        );

        Ok(template
            .classes()
            .zip(seed.iter().skip(1))
            .map(|(class, byte)| class.char_at(self.seed_index(*byte)))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
