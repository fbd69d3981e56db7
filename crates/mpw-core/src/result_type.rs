//! Result type registry.
//!
//! Every [`ResultType`] carries constant metadata: a display name, a short
//! name, option aliases, a [`TypeClass`], [`Feature`] flags and, for
//! generated types, an ordered list of [`Template`]s. Lookups are free
//! functions over the closed set of variants.
//!
//! # Type IDs
//!
//! Each type has a stable numeric ID, `index | class mask | feature masks`,
//! used when result types are persisted:
//!
//! | Type     | ID   |
//! |----------|------|
//! | maximum  | 16   |
//! | long     | 17   |
//! | medium   | 18   |
//! | short    | 19   |
//! | basic    | 20   |
//! | pin      | 21   |
//! | name     | 30   |
//! | phrase   | 31   |
//! | personal | 1056 |
//! | device   | 2081 |

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MpwError;
use crate::template::{Template, MAX_TEMPLATE_LEN};

// ---------------------------------------------------------------------------
// Type classes and features
// ---------------------------------------------------------------------------

/// How a result type produces its content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeClass {
    /// Rendered from the site seed through a template.
    Generated,
    /// Content supplied by the user and kept by a persistence layer.
    Stored,
}

impl TypeClass {
    /// Bit identifying the class inside a type ID.
    #[must_use]
    pub const fn mask(self) -> u32 {
        match self {
            Self::Generated => 1 << 4,
            Self::Stored => 1 << 5,
        }
    }
}

/// Optional behavior flags on a result type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Content is included in exports.
    ExportContent,
    /// Content never leaves the device.
    DevicePrivate,
}

impl Feature {
    /// Bit identifying the feature inside a type ID.
    #[must_use]
    pub const fn mask(self) -> u32 {
        match self {
            Self::ExportContent => 1 << 10,
            Self::DevicePrivate => 1 << 11,
        }
    }
}

// ---------------------------------------------------------------------------
// Template catalog
// ---------------------------------------------------------------------------

const MAXIMUM: &[Template] = &[
    Template::new("anoxxxxxxxxxxxxxxxxx"),
    Template::new("axxxxxxxxxxxxxxxxxno"),
];

const LONG: &[Template] = &[
    Template::new("CvcvnoCvcvCvcv"),
    Template::new("CvcvCvcvnoCvcv"),
    Template::new("CvcvCvcvCvcvno"),
    Template::new("CvccnoCvcvCvcv"),
    Template::new("CvccCvcvnoCvcv"),
    Template::new("CvccCvcvCvcvno"),
    Template::new("CvcvnoCvccCvcv"),
    Template::new("CvcvCvccnoCvcv"),
    Template::new("CvcvCvccCvcvno"),
    Template::new("CvcvnoCvcvCvcc"),
    Template::new("CvcvCvcvnoCvcc"),
    Template::new("CvcvCvcvCvccno"),
    Template::new("CvccnoCvccCvcv"),
    Template::new("CvccCvccnoCvcv"),
    Template::new("CvccCvccCvcvno"),
    Template::new("CvcvnoCvccCvcc"),
    Template::new("CvcvCvccnoCvcc"),
    Template::new("CvcvCvccCvccno"),
    Template::new("CvccnoCvcvCvcc"),
    Template::new("CvccCvcvnoCvcc"),
    Template::new("CvccCvcvCvccno"),
];

const MEDIUM: &[Template] = &[Template::new("CvcnoCvc"), Template::new("CvcCvcno")];

const SHORT: &[Template] = &[Template::new("Cvcn")];

const BASIC: &[Template] = &[
    Template::new("aaanaaan"),
    Template::new("aannaaan"),
    Template::new("aaannaaa"),
];

const PIN: &[Template] = &[Template::new("nnnn")];

const NAME: &[Template] = &[Template::new("cvccvcvcv")];

const PHRASE: &[Template] = &[
    Template::new("cvcc cvc cvccvcv cvc"),
    Template::new("cvc cvccvcvcv cvcv"),
    Template::new("cv cvccv cvc cvcvccv"),
];

// Every generated type renders from a non-empty list of templates that fit the seed.
#[allow(clippy::arithmetic_side_effects)]
const _: () = {
    let mut i = 0;
    while i < ResultType::ALL.len() {
        let ty = ResultType::ALL[i];
        let templates = ty.templates();
        match ty.type_class() {
            TypeClass::Generated => assert!(!templates.is_empty(), "generated type without templates"),
            TypeClass::Stored => assert!(templates.is_empty(), "stored type with templates"),
        }
        let mut t = 0;
        while t < templates.len() {
            assert!(templates[t].len() <= MAX_TEMPLATE_LEN);
            t += 1;
        }
        i += 1;
    }
};

// ---------------------------------------------------------------------------
// ResultType
// ---------------------------------------------------------------------------

/// The kind of result a site produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultType {
    /// 20 characters, contains symbols.
    Maximum,
    /// Copy-friendly, 14 characters, contains symbols.
    Long,
    /// Copy-friendly, 8 characters, contains symbols.
    Medium,
    /// Copy-friendly, 4 characters, no symbols.
    Short,
    /// 8 characters, no symbols.
    Basic,
    /// 4 numbers.
    Pin,
    /// 9 letter name.
    Name,
    /// 20 character sentence.
    Phrase,
    /// User-supplied content that is exported.
    Personal,
    /// User-supplied content that stays on the device.
    Device,
}

impl ResultType {
    /// Every result type, in registry order.
    pub const ALL: [Self; 10] = [
        Self::Maximum,
        Self::Long,
        Self::Medium,
        Self::Short,
        Self::Basic,
        Self::Pin,
        Self::Name,
        Self::Phrase,
        Self::Personal,
        Self::Device,
    ];

    /// Human-readable name, e.g. `"Long Password"`.
    #[must_use]
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::Maximum => "Maximum Security Password",
            Self::Long => "Long Password",
            Self::Medium => "Medium Password",
            Self::Short => "Short Password",
            Self::Basic => "Basic Password",
            Self::Pin => "PIN",
            Self::Name => "Name",
            Self::Phrase => "Phrase",
            Self::Personal => "Personal Password",
            Self::Device => "Device Private Password",
        }
    }

    /// Registry key, e.g. `"long"`.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Maximum => "maximum",
            Self::Long => "long",
            Self::Medium => "medium",
            Self::Short => "short",
            Self::Basic => "basic",
            Self::Pin => "pin",
            Self::Name => "name",
            Self::Phrase => "phrase",
            Self::Personal => "personal",
            Self::Device => "device",
        }
    }

    /// One-line description for pickers and help output.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Maximum => "20 characters, contains symbols.",
            Self::Long => "Copy-friendly, 14 characters, contains symbols.",
            Self::Medium => "Copy-friendly, 8 characters, contains symbols.",
            Self::Short => "Copy-friendly, 4 characters, no symbols.",
            Self::Basic => "8 characters, no symbols.",
            Self::Pin => "4 numbers.",
            Self::Name => "9 letter name.",
            Self::Phrase => "20 character sentence.",
            Self::Personal => "AES-encrypted, exportable.",
            Self::Device => "AES-encrypted, not exported.",
        }
    }

    /// Command-line style aliases accepted by [`ResultType::for_option`].
    #[must_use]
    pub const fn options(self) -> &'static [&'static str] {
        match self {
            Self::Maximum => &["x", "max", "maximum"],
            Self::Long => &["l", "long"],
            Self::Medium => &["m", "med", "medium"],
            Self::Short => &["s", "short"],
            Self::Basic => &["b", "basic"],
            Self::Pin => &["i", "pin"],
            Self::Name => &["n", "name"],
            Self::Phrase => &["p", "phrase"],
            Self::Personal => &["personal"],
            Self::Device => &["device"],
        }
    }

    #[must_use]
    pub const fn type_class(self) -> TypeClass {
        match self {
            Self::Personal | Self::Device => TypeClass::Stored,
            _ => TypeClass::Generated,
        }
    }

    #[must_use]
    pub const fn features(self) -> &'static [Feature] {
        match self {
            Self::Personal => &[Feature::ExportContent],
            Self::Device => &[Feature::DevicePrivate],
            _ => &[],
        }
    }

    /// `true` if this type carries `feature`.
    #[must_use]
    pub fn has_feature(self, feature: Feature) -> bool {
        self.features().contains(&feature)
    }

    /// Ordered templates. Empty for stored types.
    #[must_use]
    pub const fn templates(self) -> &'static [Template] {
        match self {
            Self::Maximum => MAXIMUM,
            Self::Long => LONG,
            Self::Medium => MEDIUM,
            Self::Short => SHORT,
            Self::Basic => BASIC,
            Self::Pin => PIN,
            Self::Name => NAME,
            Self::Phrase => PHRASE,
            Self::Personal | Self::Device => &[],
        }
    }

    /// Low bits distinguishing types within a class.
    const fn index(self) -> u32 {
        match self {
            Self::Maximum | Self::Personal => 0x0,
            Self::Long | Self::Device => 0x1,
            Self::Medium => 0x2,
            Self::Short => 0x3,
            Self::Basic => 0x4,
            Self::Pin => 0x5,
            Self::Name => 0xE,
            Self::Phrase => 0xF,
        }
    }

    /// Stable numeric ID: index, class mask and feature masks OR-ed together.
    #[must_use]
    pub fn type_id(self) -> u32 {
        self.features()
            .iter()
            .fold(self.index() | self.type_class().mask(), |id, f| id | f.mask())
    }

    /// Pick the template at a rolling index.
    ///
    /// # Errors
    ///
    /// Returns [`MpwError::InvalidArgument`] for stored types, which have no
    /// templates.
    pub fn template_at(self, index: u16) -> Result<Template, MpwError> {
        let templates = self.templates();
        if templates.is_empty() {
            return Err(MpwError::InvalidArgument(format!(
                "result type {} is not generated",
                self.short_name()
            )));
        }
        // Checked non-empty above.
        #[allow(clippy::arithmetic_side_effects)]
        let position = usize::from(index) % templates.len();
        Ok(templates[position])
    }

    // -- lookups ------------------------------------------------------------

    /// Look up a type by its short name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`MpwError::NotFound`] if no type has that short name.
    pub fn for_name(name: &str) -> Result<Self, MpwError> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.short_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| MpwError::NotFound(format!("result type for name: {name}")))
    }

    /// Look up a type by one of its option aliases, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`MpwError::NotFound`] if no type has that alias.
    pub fn for_option(option: &str) -> Result<Self, MpwError> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.options().iter().any(|o| o.eq_ignore_ascii_case(option)))
            .ok_or_else(|| MpwError::NotFound(format!("result type for option: {option}")))
    }

    /// First type, in registry order, whose short name starts with `prefix`
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`MpwError::NotFound`] if no short name matches.
    pub fn for_short_name_prefix(prefix: &str) -> Result<Self, MpwError> {
        let prefix = prefix.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|ty| ty.short_name().starts_with(&prefix))
            .ok_or_else(|| MpwError::NotFound(format!("result type for name prefix: {prefix}")))
    }

    /// Look up a type by its numeric ID.
    ///
    /// # Errors
    ///
    /// Returns [`MpwError::NotFound`] for an unknown ID.
    pub fn for_type_id(type_id: u32) -> Result<Self, MpwError> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.type_id() == type_id)
            .ok_or_else(|| MpwError::NotFound(format!("result type for id: {type_id}")))
    }

    /// All types sharing a class or feature bit with `mask`.
    ///
    /// The low four index bits of `mask` are ignored.
    #[must_use]
    pub fn for_mask(mask: u32) -> Vec<Self> {
        let type_mask = mask & !0xF;
        Self::ALL
            .into_iter()
            .filter(|ty| (ty.type_id() & !0xF) & type_mask != 0)
            .collect()
    }

    /// All types of the given class, in registry order.
    #[must_use]
    pub fn all_of_class(class: TypeClass) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|ty| ty.type_class() == class)
            .collect()
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl Serialize for ResultType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.type_id())
    }
}

impl<'de> Deserialize<'de> for ResultType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = u32::deserialize(deserializer)?;
        Self::for_type_id(id).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
