//! Templates and the character classes they are built from.
//!
//! A [`Template`] is a short pattern such as `"CvcvnoCvcvCvcv"`: every
//! character names a [`CharacterClass`], and every class owns a fixed
//! alphabet. Rendering picks one alphabet entry per position using a
//! rolling (modulo) index, so any seed value maps into range.

use std::fmt;

// ---------------------------------------------------------------------------
// Character classes
// ---------------------------------------------------------------------------

/// A template letter and the characters it may produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// `V`: upper-case vowels.
    UpperVowel,
    /// `C`: upper-case consonants.
    UpperConsonant,
    /// `v`: lower-case vowels.
    LowerVowel,
    /// `c`: lower-case consonants.
    LowerConsonant,
    /// `A`: upper-case letters.
    UpperAlphanumeric,
    /// `a`: letters of either case.
    Alphanumeric,
    /// `n`: digits.
    Numeric,
    /// `o`: symbols.
    Other,
    /// `x`: letters, digits and a smaller symbol set.
    Any,
    /// ` `: a literal space.
    Space,
}

impl CharacterClass {
    /// Every class, in identifier order `V C v c A a n o x ' '`.
    pub const ALL: [Self; 10] = [
        Self::UpperVowel,
        Self::UpperConsonant,
        Self::LowerVowel,
        Self::LowerConsonant,
        Self::UpperAlphanumeric,
        Self::Alphanumeric,
        Self::Numeric,
        Self::Other,
        Self::Any,
        Self::Space,
    ];

    /// Look up the class for a template identifier byte.
    #[must_use]
    pub const fn from_identifier(identifier: u8) -> Option<Self> {
        match identifier {
            b'V' => Some(Self::UpperVowel),
            b'C' => Some(Self::UpperConsonant),
            b'v' => Some(Self::LowerVowel),
            b'c' => Some(Self::LowerConsonant),
            b'A' => Some(Self::UpperAlphanumeric),
            b'a' => Some(Self::Alphanumeric),
            b'n' => Some(Self::Numeric),
            b'o' => Some(Self::Other),
            b'x' => Some(Self::Any),
            b' ' => Some(Self::Space),
            _ => None,
        }
    }

    /// The template letter naming this class.
    #[must_use]
    pub const fn identifier(self) -> char {
        match self {
            Self::UpperVowel => 'V',
            Self::UpperConsonant => 'C',
            Self::LowerVowel => 'v',
            Self::LowerConsonant => 'c',
            Self::UpperAlphanumeric => 'A',
            Self::Alphanumeric => 'a',
            Self::Numeric => 'n',
            Self::Other => 'o',
            Self::Any => 'x',
            Self::Space => ' ',
        }
    }

    /// The ordered alphabet of this class. Always non-empty ASCII.
    #[must_use]
    pub const fn characters(self) -> &'static str {
        match self {
            Self::UpperVowel => "AEIOU",
            Self::UpperConsonant => "BCDFGHJKLMNPQRSTVWXYZ",
            Self::LowerVowel => "aeiou",
            Self::LowerConsonant => "bcdfghjklmnpqrstvwxyz",
            Self::UpperAlphanumeric => "AEIOUBCDFGHJKLMNPQRSTVWXYZ",
            Self::Alphanumeric => "AEIOUaeiouBCDFGHJKLMNPQRSTVWXYZbcdfghjklmnpqrstvwxyz",
            Self::Numeric => "0123456789",
            Self::Other => "@&%?,=[]_:-+*$#!'^~;()/.",
            Self::Any => "AEIOUaeiouBCDFGHJKLMNPQRSTVWXYZbcdfghjklmnpqrstvwxyz0123456789!@#$%^&*()",
            Self::Space => " ",
        }
    }

    /// Pick the character at `index`, wrapping around the alphabet.
    ///
    /// Total for every `index`: the alphabet is never empty.
    #[must_use]
    pub fn char_at(self, index: u16) -> char {
        let alphabet = self.characters().as_bytes();
        // Alphabets are non-empty constants, so the modulus is never zero.
        #[allow(clippy::arithmetic_side_effects)]
        let position = usize::from(index) % alphabet.len();
        char::from(alphabet[position])
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

/// Longest template the 32-byte seed can drive (byte 0 picks the template).
pub const MAX_TEMPLATE_LEN: usize = 31;

/// A fixed sequence of character classes, parsed from its pattern string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Template {
    pattern: &'static str,
}

impl Template {
    /// Build a template from a pattern, validating every identifier.
    ///
    /// Intended for `const` catalogs: an invalid pattern stops compilation.
    ///
    /// # Panics
    ///
    /// Panics if the pattern is empty, longer than [`MAX_TEMPLATE_LEN`], or
    /// contains a byte that names no [`CharacterClass`].
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn new(pattern: &'static str) -> Self {
        let bytes = pattern.as_bytes();
        assert!(!bytes.is_empty(), "template pattern is empty");
        assert!(bytes.len() <= MAX_TEMPLATE_LEN, "template pattern too long");
        let mut i = 0;
        while i < bytes.len() {
            assert!(
                CharacterClass::from_identifier(bytes[i]).is_some(),
                "unknown character class in template pattern"
            );
            i += 1;
        }
        Self { pattern }
    }

    /// The pattern this template was built from.
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Number of characters the template renders.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Always `false`: empty templates are rejected at construction.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// The character class at `position`, if in range.
    #[must_use]
    pub fn class_at(&self, position: usize) -> Option<CharacterClass> {
        self.pattern
            .as_bytes()
            .get(position)
            .and_then(|b| CharacterClass::from_identifier(*b))
    }

    /// Iterate the template's classes in order.
    pub fn classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        self.pattern
            .bytes()
            .filter_map(CharacterClass::from_identifier)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Template({:?})", self.pattern)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
