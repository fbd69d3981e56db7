//! Heap-pinned storage for master keys and site seeds.
//!
//! [`SecretBytes`] keeps its bytes in a single heap allocation that is
//! filled in place, so moving the handle around never copies key material.
//! The allocation is zeroed on drop, `mlock`ed where the platform allows,
//! and hidden from `Debug`/`Display`.

use std::convert::Infallible;
use std::fmt;

use secrecy::{ExposeSecret, ExposeSecretMut, SecretBox};
use zeroize::{Zeroize, ZeroizeOnDrop};

// ---------------------------------------------------------------------------
// Page locking
// ---------------------------------------------------------------------------

/// `mlock` guard over one [`SecretBytes`] allocation; `munlock`s on drop.
pub(crate) struct LockedRegion {
    ptr: *const u8,
    len: usize,
    locked: bool,
}

// SAFETY: the pointer is only handed to mlock/munlock. The bytes behind it
// belong to the owning SecretBytes and are never read through this guard.
unsafe impl Send for LockedRegion {}
unsafe impl Sync for LockedRegion {}

impl LockedRegion {
    /// Lock `len` bytes at `ptr`, warning once per process if that fails.
    fn try_lock(ptr: *const u8, len: usize) -> Self {
        let locked = platform::try_mlock(ptr, len);
        if !locked && len > 0 {
            static WARNED: std::sync::Once = std::sync::Once::new();
            WARNED.call_once(|| {
                tracing::warn!("mlock failed; master keys may be swapped to disk");
            });
        }
        Self { ptr, len, locked }
    }

    pub(crate) const fn is_locked(&self) -> bool {
        self.locked
    }
}

impl Drop for LockedRegion {
    fn drop(&mut self) {
        if self.locked {
            platform::try_munlock(self.ptr, self.len);
        }
    }
}

// ---------------------------------------------------------------------------
// SecretBytes<N>
// ---------------------------------------------------------------------------

/// Fixed-size key material behind a stable heap address.
///
/// Drop zeroes the bytes first, then `munlock`s, then frees the allocation,
/// so `lock` must stay declared before `bytes`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    #[zeroize(skip)]
    lock: LockedRegion,
    bytes: SecretBox<[u8; N]>,
}

impl<const N: usize> SecretBytes<N> {
    /// Allocate `N` zero bytes, lock them, then let `fill` write the secret
    /// directly into the allocation.
    ///
    /// # Errors
    ///
    /// Returns whatever `fill` returns; the partly written bytes are zeroed.
    pub(crate) fn try_fill<E>(fill: impl FnOnce(&mut [u8; N]) -> Result<(), E>) -> Result<Self, E> {
        let bytes = SecretBox::new(Box::new([0u8; N]));
        let lock = LockedRegion::try_lock(bytes.expose_secret().as_ptr(), N);
        let mut secret = Self { bytes, lock };
        fill(secret.bytes.expose_secret_mut())?;
        Ok(secret)
    }

    /// Infallible [`SecretBytes::try_fill`].
    pub(crate) fn fill_with(fill: impl FnOnce(&mut [u8; N])) -> Self {
        let filled = Self::try_fill(|bytes| {
            fill(bytes);
            Ok::<(), Infallible>(())
        });
        match filled {
            Ok(secret) => secret,
            Err(never) => match never {},
        }
    }

    /// Copy `data` into a new locked allocation.
    ///
    /// `data` itself is borrowed and stays the caller's to erase.
    #[must_use]
    pub fn new(data: &[u8; N]) -> Self {
        Self::fill_with(|bytes| bytes.copy_from_slice(data))
    }

    #[must_use]
    pub fn expose(&self) -> &[u8; N] {
        self.bytes.expose_secret()
    }

    /// Whether the allocation is currently `mlock`ed.
    #[must_use]
    pub const fn is_mlocked(&self) -> bool {
        self.lock.is_locked()
    }
}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{N}>(***)")
    }
}

impl<const N: usize> fmt::Display for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{N}>(***)")
    }
}

// ---------------------------------------------------------------------------
// Platform-specific implementations
// ---------------------------------------------------------------------------

#[cfg(unix)]
mod platform {
    pub(super) fn try_mlock(ptr: *const u8, len: usize) -> bool {
        if len == 0 {
            return true;
        }
        // SAFETY: ptr/len describe one live heap allocation; mlock reports
        // failure through its return value.
        unsafe { libc::mlock(ptr.cast(), len) == 0 }
    }

    pub(super) fn try_munlock(ptr: *const u8, len: usize) {
        if len == 0 {
            return;
        }
        // SAFETY: same region that was locked; failure only leaves it pinned.
        unsafe {
            libc::munlock(ptr.cast(), len);
        }
    }
}

#[cfg(not(unix))]
mod platform {
    pub(super) fn try_mlock(_ptr: *const u8, _len: usize) -> bool {
        false
    }

    pub(super) fn try_munlock(_ptr: *const u8, _len: usize) {}
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
