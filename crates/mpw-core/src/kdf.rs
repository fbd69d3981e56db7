//! Cryptographic primitives behind the master key and site seeds.
//!
//! This module provides:
//! - [`scrypt_master_key`] — stretch a master password into the 64-byte master key
//! - [`hmac_sha256`] — keyed digest used for site seeds
//! - [`sha256`] — plain digest used for key IDs and log fingerprints
//! - [`ScryptParams`] / [`SCRYPT_PARAMS`] — the frozen scrypt cost parameters
//!
//! The parameters are part of the scheme: changing them changes every
//! password ever derived, so they are constants rather than tunables.

use ring::{digest, hmac};
use serde::{Deserialize, Serialize};

use crate::error::MpwError;
use crate::memory::SecretBytes;

/// Master key length in bytes.
pub const MASTER_KEY_LEN: usize = 64;

/// Site seed (HMAC-SHA-256 output) length in bytes.
pub const SITE_KEY_LEN: usize = 32;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// scrypt cost parameters.
///
/// `log_n` is the base-2 logarithm of the CPU/memory cost `N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScryptParams {
    /// `log2(N)`; `N = 32768`.
    pub log_n: u8,
    /// Block size.
    pub r: u32,
    /// Parallelism.
    pub p: u32,
    /// Output length in bytes.
    pub dk_len: usize,
}

impl ScryptParams {
    /// The cost `N` itself, or 0 if `log_n` is out of range.
    #[must_use]
    pub const fn n(&self) -> u64 {
        match 1_u64.checked_shl(self.log_n as u32) {
            Some(n) => n,
            None => 0,
        }
    }
}

/// Parameters every algorithm version derives its master key with.
pub const SCRYPT_PARAMS: ScryptParams = ScryptParams {
    log_n: 15,
    r: 8,
    p: 2,
    dk_len: MASTER_KEY_LEN,
};

// ---------------------------------------------------------------------------
// Core KDF
// ---------------------------------------------------------------------------

/// Derive the 64-byte master key from password bytes and a salt.
///
/// scrypt writes straight into the returned [`SecretBytes`] allocation.
///
/// # Errors
///
/// Returns `MpwError::AlgorithmFailure` if scrypt rejects the parameters or
/// the output length.
pub fn scrypt_master_key(
    password: &[u8],
    salt: &[u8],
) -> Result<SecretBytes<MASTER_KEY_LEN>, MpwError> {
    let params = scrypt::Params::new(
        SCRYPT_PARAMS.log_n,
        SCRYPT_PARAMS.r,
        SCRYPT_PARAMS.p,
        SCRYPT_PARAMS.dk_len,
    )
    .map_err(|e| MpwError::AlgorithmFailure(format!("invalid scrypt params: {e}")))?;

    SecretBytes::try_fill(|output| {
        scrypt::scrypt(password, salt, &params, output)
            .map_err(|e| MpwError::AlgorithmFailure(format!("scrypt derivation failed: {e}")))
    })
}

/// HMAC-SHA-256 of `message` under `key`.
///
/// The returned tag is wrapped in [`SecretBytes`]: site seeds are as
/// sensitive as the results rendered from them.
#[must_use]
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> SecretBytes<SITE_KEY_LEN> {
    let key = hmac::Key::new(hmac::HMAC_SHA256, key);
    let tag = hmac::sign(&key, message);
    SecretBytes::fill_with(|seed| seed.copy_from_slice(tag.as_ref()))
}

/// SHA-256 of `data`.
#[must_use]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(digest::digest(&digest::SHA256, data).as_ref());
    out
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
