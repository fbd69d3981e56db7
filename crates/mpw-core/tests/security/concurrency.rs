//! Concurrent readers against a concurrent `invalidate`.

use std::thread;

use mpw_core::{KeyPurpose, MpwError, ResultType, SiteCounter};

use super::{fresh_key, shared_key, SITE};

const READERS: usize = 4;
const ROUNDS: usize = 200;

#[test]
fn concurrent_reads_agree() {
    let key = shared_key();
    let expected = key
        .site_result(SITE, SiteCounter::DEFAULT, KeyPurpose::Authentication, None, ResultType::Long)
        .expect("site result should succeed");

    thread::scope(|s| {
        for _ in 0..READERS {
            s.spawn(|| {
                for _ in 0..ROUNDS {
                    let got = key
                        .site_result(SITE, SiteCounter::DEFAULT, KeyPurpose::Authentication, None, ResultType::Long)
                        .expect("site result should succeed");
                    assert_eq!(got, expected);
                }
            });
        }
    });
}

#[test]
fn invalidate_during_reads_never_yields_garbage() {
    let key = fresh_key();
    let expected = key
        .site_result(SITE, SiteCounter::DEFAULT, KeyPurpose::Authentication, None, ResultType::Long)
        .expect("site result should succeed");

    thread::scope(|s| {
        for _ in 0..READERS {
            s.spawn(|| {
                for _ in 0..ROUNDS {
                    match key.site_result(
                        SITE,
                        SiteCounter::DEFAULT,
                        KeyPurpose::Authentication,
                        None,
                        ResultType::Long,
                    ) {
                        Ok(got) => assert_eq!(got, expected),
                        Err(err) => assert_eq!(err, MpwError::KeyUnavailable),
                    }
                }
            });
        }
        s.spawn(|| {
            thread::yield_now();
            key.invalidate();
        });
    });

    // Once invalidated, it stays invalidated.
    assert!(!key.is_valid());
    assert_eq!(key.key_id().unwrap_err(), MpwError::KeyUnavailable);
}
