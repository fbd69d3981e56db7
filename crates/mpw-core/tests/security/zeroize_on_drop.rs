//! `SecretBytes` keeps one heap copy of its bytes and erases it in place.
//!
//! Freed memory is never read back; instead these tests pin the two facts
//! the drop-time erase relies on: moves never relocate the bytes, and
//! zeroizing clears them at that one address.

use mpw_core::{KeyPurpose, SecretBytes, SiteCounter};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{shared_key, SITE};

/// Sentinel pattern used to verify zeroization, easily identifiable in memory.
const SENTINEL: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

const fn assert_zeroize_on_drop<T: ZeroizeOnDrop>() {}

#[test]
fn secret_bytes_are_zeroize_on_drop() {
    assert_zeroize_on_drop::<SecretBytes<32>>();
    assert_zeroize_on_drop::<SecretBytes<64>>();
}

#[test]
fn zeroize_clears_the_only_copy() {
    let mut data = [0u8; 64];
    for chunk in data.chunks_mut(4) {
        chunk.copy_from_slice(&SENTINEL);
    }
    let secret = SecretBytes::new(&data);
    data.zeroize();

    let address = secret.expose().as_ptr();
    let mut moved = Some(secret).into_iter().collect::<Vec<_>>();
    let secret = &mut moved[0];
    assert_eq!(secret.expose().as_ptr(), address);
    assert_eq!(&secret.expose()[..4], &SENTINEL);

    secret.zeroize();
    assert_eq!(secret.expose().as_ptr(), address);
    assert!(
        secret.expose().iter().all(|&b| b == 0),
        "SecretBytes<64> not zeroed in place"
    );
}

#[test]
fn site_key_is_not_copied_on_return() {
    let mut seeds = Vec::new();
    let seed = shared_key()
        .site_key(SITE, SiteCounter::DEFAULT, KeyPurpose::Authentication, None)
        .expect("site key should succeed");
    let address = seed.expose().as_ptr();
    assert!(seed.expose().iter().any(|&b| b != 0));

    seeds.push(seed);
    let mut seed = seeds.pop().expect("seed was pushed");
    assert_eq!(seed.expose().as_ptr(), address);

    seed.zeroize();
    assert!(seed.expose().iter().all(|&b| b == 0), "site key not zeroed in place");
}
