//! Site counters and the clock behind time-based (counter 0) results.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Length of one time-based window, in seconds.
pub const OTP_WINDOW_SECS: u32 = 300;

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Source of the current Unix time.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch.
    fn unix_seconds(&self) -> u64;
}

/// Wall-clock time from [`SystemTime`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> u64 {
        // A clock set before 1970 counts as the epoch.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }
}

/// A clock frozen at a given instant, for reproducible counter-0 results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn unix_seconds(&self) -> u64 {
        self.0
    }
}

// ---------------------------------------------------------------------------
// SiteCounter
// ---------------------------------------------------------------------------

/// Per-site counter. Bumping it rotates the site's result.
///
/// The value `0` is special: it resolves to the start of the current
/// [`OTP_WINDOW_SECS`] window, producing a one-time result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteCounter(pub u32);

impl SiteCounter {
    /// Time-based counter.
    pub const TOTP: Self = Self(0);
    /// Counter a new site starts with.
    pub const DEFAULT: Self = Self(1);
    /// Largest counter value.
    pub const LAST: Self = Self(u32::MAX);

    /// Raw counter value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// `true` for the time-based counter.
    #[must_use]
    pub const fn is_totp(self) -> bool {
        self.0 == 0
    }

    /// The counter value actually fed into the seed.
    ///
    /// Non-zero counters are returned unchanged. Counter 0 becomes the Unix
    /// time truncated to 32 bits and rounded down to the window start.
    #[must_use]
    // The window length is a non-zero constant; the product never exceeds `now`.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    pub fn resolve(self, clock: &impl Clock) -> u32 {
        if !self.is_totp() {
            return self.0;
        }
        let now = clock.unix_seconds() as u32;
        (now / OTP_WINDOW_SECS) * OTP_WINDOW_SECS
    }
}

impl Default for SiteCounter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for SiteCounter {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for SiteCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
