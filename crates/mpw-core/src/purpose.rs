//! Key purposes.
//!
//! The purpose selects the scope string that prefixes every seed message,
//! so the same site yields unrelated results for its password, its login
//! name and its security answers.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MpwError;
use crate::result_type::ResultType;

/// What a site result is used for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyPurpose {
    /// A password.
    #[default]
    Authentication,
    /// A login name.
    Identification,
    /// An answer to a security question.
    Recovery,
}

impl KeyPurpose {
    /// Every purpose, in registry order.
    pub const ALL: [Self; 3] = [Self::Authentication, Self::Identification, Self::Recovery];

    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::Identification => "identification",
            Self::Recovery => "recovery",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Authentication => "Generate a key for authentication.",
            Self::Identification => "Generate a name for identification.",
            Self::Recovery => "Generate an answer to a security question.",
        }
    }

    /// What the optional context string means for this purpose, if anything.
    #[must_use]
    pub const fn context_description(self) -> Option<&'static str> {
        match self {
            Self::Recovery => Some(
                "Empty for a universal site answer or the most significant word(s) of the question.",
            ),
            Self::Authentication | Self::Identification => None,
        }
    }

    /// Command-line style aliases accepted by [`KeyPurpose::for_option`].
    #[must_use]
    pub const fn options(self) -> &'static [&'static str] {
        match self {
            Self::Authentication => &["p", "password"],
            Self::Identification => &["l", "login"],
            Self::Recovery => &["a", "answer"],
        }
    }

    /// ASCII scope string prefixed to every seed message.
    #[must_use]
    pub const fn scope(self) -> &'static str {
        match self {
            Self::Authentication => "com.lyndir.masterpassword",
            Self::Identification => "com.lyndir.masterpassword.login",
            Self::Recovery => "com.lyndir.masterpassword.answer",
        }
    }

    /// Result type a new site uses for this purpose.
    #[must_use]
    pub const fn default_result_type(self) -> ResultType {
        match self {
            Self::Authentication => ResultType::Long,
            Self::Identification => ResultType::Name,
            Self::Recovery => ResultType::Phrase,
        }
    }

    /// Look up a purpose by its short name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`MpwError::NotFound`] for an unknown name.
    pub fn for_name(name: &str) -> Result<Self, MpwError> {
        Self::ALL
            .into_iter()
            .find(|p| p.short_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| MpwError::NotFound(format!("key purpose for name: {name}")))
    }

    /// Look up a purpose by one of its option aliases, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`MpwError::NotFound`] for an unknown alias.
    pub fn for_option(option: &str) -> Result<Self, MpwError> {
        Self::ALL
            .into_iter()
            .find(|p| p.options().iter().any(|o| o.eq_ignore_ascii_case(option)))
            .ok_or_else(|| MpwError::NotFound(format!("key purpose for option: {option}")))
    }

    /// First purpose whose short name starts with `prefix` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`MpwError::NotFound`] if nothing matches.
    pub fn for_short_name_prefix(prefix: &str) -> Result<Self, MpwError> {
        let prefix = prefix.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.short_name().starts_with(&prefix))
            .ok_or_else(|| MpwError::NotFound(format!("key purpose for name prefix: {prefix}")))
    }
}

impl fmt::Display for KeyPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl Serialize for KeyPurpose {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.short_name())
    }
}

impl<'de> Deserialize<'de> for KeyPurpose {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::for_name(&name).map_err(serde::de::Error::custom)
    }
}
