//! The master key and the site operations built on it.
//!
//! This module provides:
//! - [`MasterKey::derive`] — scrypt the master password into a 64-byte key
//! - [`MasterKey::key_id`] — fingerprint for recognising the key later
//! - [`MasterKey::site_key`] — the 32-byte HMAC seed for one site
//! - [`MasterKey::site_result`] — the rendered password, login or answer
//! - [`MasterKey::invalidate`] — zero the key; every later call fails
//!
//! # Lifecycle
//!
//! The key bytes sit behind a reader/writer lock. Site operations hold the
//! read side only while computing the seed, so they run concurrently.
//! [`MasterKey::invalidate`] takes the write side, so each in-flight call
//! either finishes with the intact key or fails with
//! [`MpwError::KeyUnavailable`]. An invalidated key is never re-derived
//! behind the caller's back.

use std::fmt;
use std::sync::{PoisonError, RwLock};
use std::time::Instant;

use secrecy::{ExposeSecret, SecretString};

use crate::algorithm::AlgorithmVersion;
use crate::counter::{Clock, SiteCounter, SystemClock};
use crate::error::MpwError;
use crate::kdf::{self, MASTER_KEY_LEN, SITE_KEY_LEN};
use crate::key_id::KeyId;
use crate::memory::SecretBytes;
use crate::purpose::KeyPurpose;
use crate::result_type::{ResultType, TypeClass};
use crate::site::SiteSpec;

/// A user's master key, bound to one full name and algorithm version.
pub struct MasterKey {
    version: AlgorithmVersion,
    full_name: String,
    key: RwLock<Option<SecretBytes<MASTER_KEY_LEN>>>,
}

impl MasterKey {
    /// Derive the master key for `full_name` from `master_password`.
    ///
    /// This is the slow step (scrypt, N = 32768); derive once and reuse the
    /// key for every site.
    ///
    /// # Errors
    ///
    /// - `MpwError::InvalidArgument` if `full_name` is empty or too long
    /// - `MpwError::AlgorithmFailure` if scrypt fails
    pub fn derive(
        version: AlgorithmVersion,
        full_name: &str,
        master_password: &SecretString,
    ) -> Result<Self, MpwError> {
        if full_name.is_empty() {
            return Err(MpwError::InvalidArgument("full name is empty".into()));
        }

        let started = Instant::now();
        let salt = version.algorithm().master_key_salt(full_name)?;
        tracing::trace!(
            version = %version,
            salt_id = %short_fingerprint(&salt),
            "master key salt assembled"
        );

        let key = kdf::scrypt_master_key(master_password.expose_secret().as_bytes(), &salt)?;
        tracing::debug!(
            version = %version,
            elapsed = ?started.elapsed(),
            "master key derived"
        );

        Ok(Self {
            version,
            full_name: full_name.to_owned(),
            key: RwLock::new(Some(key)),
        })
    }

    /// Wrap raw key bytes, skipping scrypt.
    #[cfg(test)]
    pub(crate) fn from_key_bytes(
        version: AlgorithmVersion,
        full_name: &str,
        bytes: [u8; MASTER_KEY_LEN],
    ) -> Self {
        Self {
            version,
            full_name: full_name.to_owned(),
            key: RwLock::new(Some(SecretBytes::new(&bytes))),
        }
    }

    #[must_use]
    pub const fn version(&self) -> AlgorithmVersion {
        self.version
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// `true` until [`MasterKey::invalidate`] is called.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.key
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Zero the key bytes. Idempotent.
    ///
    /// Waits for in-flight site operations to release the key first.
    pub fn invalidate(&self) {
        let mut guard = self.key.write().unwrap_or_else(PoisonError::into_inner);
        if guard.take().is_some() {
            tracing::debug!(version = %self.version, "master key invalidated");
        }
    }

    /// SHA-256 of the key bytes.
    ///
    /// # Errors
    ///
    /// Returns `MpwError::KeyUnavailable` after [`MasterKey::invalidate`].
    pub fn key_id(&self) -> Result<KeyId, MpwError> {
        self.with_key(|key| Ok(KeyId::from_bytes(kdf::sha256(key.expose()))))
    }

    /// The 32-byte seed for a site, using the system clock for counter 0.
    ///
    /// # Errors
    ///
    /// See [`MasterKey::site_key_with_clock`].
    pub fn site_key(
        &self,
        site_name: &str,
        counter: SiteCounter,
        purpose: KeyPurpose,
        context: Option<&str>,
    ) -> Result<SecretBytes<SITE_KEY_LEN>, MpwError> {
        self.site_key_with_clock(site_name, counter, purpose, context, &SystemClock)
    }

    /// The 32-byte seed for a site: HMAC-SHA-256 of the site message under
    /// the master key.
    ///
    /// # Errors
    ///
    /// - `MpwError::InvalidArgument` if `site_name` is empty or too long
    /// - `MpwError::KeyUnavailable` after [`MasterKey::invalidate`]
    pub fn site_key_with_clock(
        &self,
        site_name: &str,
        counter: SiteCounter,
        purpose: KeyPurpose,
        context: Option<&str>,
        clock: &impl Clock,
    ) -> Result<SecretBytes<SITE_KEY_LEN>, MpwError> {
        if site_name.is_empty() {
            return Err(MpwError::InvalidArgument("site name is empty".into()));
        }
        let message = self.version.algorithm().site_seed_message(
            site_name,
            counter.resolve(clock),
            purpose,
            context,
        )?;
        tracing::trace!(
            version = %self.version,
            purpose = %purpose,
            message_id = %short_fingerprint(&message),
            "site seed message assembled"
        );

        self.with_key(|key| Ok(kdf::hmac_sha256(key.expose(), &message)))
    }

    /// Render a site result, using the system clock for counter 0.
    ///
    /// # Errors
    ///
    /// See [`MasterKey::site_result_with_clock`].
    pub fn site_result(
        &self,
        site_name: &str,
        counter: SiteCounter,
        purpose: KeyPurpose,
        context: Option<&str>,
        result_type: ResultType,
    ) -> Result<String, MpwError> {
        self.site_result_with_clock(site_name, counter, purpose, context, result_type, &SystemClock)
    }

    /// Render a site result with an explicit clock.
    ///
    /// # Errors
    ///
    /// - `MpwError::InvalidArgument` for a stored `result_type` or an empty
    ///   `site_name`
    /// - `MpwError::KeyUnavailable` after [`MasterKey::invalidate`]
    /// - `MpwError::AlgorithmFailure` if the template cannot be rendered
    pub fn site_result_with_clock(
        &self,
        site_name: &str,
        counter: SiteCounter,
        purpose: KeyPurpose,
        context: Option<&str>,
        result_type: ResultType,
        clock: &impl Clock,
    ) -> Result<String, MpwError> {
        if result_type.type_class() != TypeClass::Generated {
            return Err(MpwError::InvalidArgument(format!(
                "result type {result_type} is not generated"
            )));
        }
        let seed = self.site_key_with_clock(site_name, counter, purpose, context, clock)?;
        self.version.algorithm().render(seed.expose(), result_type)
    }

    /// Render the result a stored [`SiteSpec`] describes.
    ///
    /// # Errors
    ///
    /// `MpwError::InvalidArgument` if the site's algorithm version differs
    /// from this key's; otherwise as [`MasterKey::site_result`].
    pub fn site_result_for(&self, spec: &SiteSpec) -> Result<String, MpwError> {
        if spec.algorithm_version != self.version {
            return Err(MpwError::InvalidArgument(format!(
                "site uses algorithm version {} but the master key is version {}",
                spec.algorithm_version, self.version
            )));
        }
        self.site_result(
            &spec.site_name,
            spec.counter,
            spec.purpose,
            spec.context.as_deref(),
            spec.result_type,
        )
    }

    fn with_key<T>(
        &self,
        f: impl FnOnce(&SecretBytes<MASTER_KEY_LEN>) -> Result<T, MpwError>,
    ) -> Result<T, MpwError> {
        let guard = self.key.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().map_or(Err(MpwError::KeyUnavailable), f)
    }
}

impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MasterKey")
            .field("version", &self.version)
            .field("full_name", &self.full_name)
            .field("valid", &self.is_valid())
            .finish_non_exhaustive()
    }
}

/// First four bytes of a SHA-256, for correlating log lines without
/// logging the input.
fn short_fingerprint(data: &[u8]) -> String {
    data_encoding::HEXUPPER.encode(&kdf::sha256(data)[..4])
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
