//! Invalidate-then-use must fail with `KeyUnavailable`, never re-derive.

use mpw_core::{ErrorKind, KeyPurpose, MpwError, ResultType, SiteCounter};

use super::{fresh_key, SITE};

#[test]
fn every_operation_fails_after_invalidate() {
    let key = fresh_key();
    assert!(key.is_valid());
    key.site_result(SITE, SiteCounter::DEFAULT, KeyPurpose::Authentication, None, ResultType::Long)
        .expect("valid key should produce a result");

    key.invalidate();

    assert!(!key.is_valid());
    assert_eq!(key.key_id().unwrap_err(), MpwError::KeyUnavailable);
    assert_eq!(
        key.site_key(SITE, SiteCounter::DEFAULT, KeyPurpose::Authentication, None)
            .unwrap_err(),
        MpwError::KeyUnavailable
    );
    for purpose in KeyPurpose::ALL {
        let err = key
            .site_result(SITE, SiteCounter::DEFAULT, purpose, None, purpose.default_result_type())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyUnavailable);
    }
}

#[test]
fn invalidate_is_idempotent() {
    let key = fresh_key();
    key.invalidate();
    key.invalidate();
    assert!(!key.is_valid());
    assert_eq!(key.key_id().unwrap_err(), MpwError::KeyUnavailable);
}

#[test]
fn argument_errors_win_over_key_state() {
    // A stored type is rejected before the key is even consulted.
    let key = fresh_key();
    key.invalidate();
    let err = key
        .site_result(SITE, SiteCounter::DEFAULT, KeyPurpose::Authentication, None, ResultType::Personal)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
