//! Version 3 vectors for `Robert Lee Mitchell` / `banana colored duckling`.

use mpw_core::{AlgorithmVersion, FixedClock, KeyPurpose, ResultType, SiteCounter};

use super::{robert, snowman, KEY_ID, SITE, SNOWMAN};

const V3: AlgorithmVersion = AlgorithmVersion::V3;

fn password(site: &str, counter: SiteCounter, result_type: ResultType) -> String {
    robert(V3)
        .site_result(site, counter, KeyPurpose::Authentication, None, result_type)
        .expect("site result should succeed")
}

#[test]
fn key_id() {
    let id = robert(V3).key_id().expect("key id should succeed");
    assert_eq!(id.to_hex(), KEY_ID);
    assert!(id.matches_hex(&KEY_ID.to_ascii_lowercase()));
}

#[test]
fn every_generated_type() {
    let expected = [
        (ResultType::Maximum, "W6@692^B1#&@gVdSdLZ@"),
        (ResultType::Long, "Jejr5[RepuSosp"),
        (ResultType::Medium, "Jej2$Quv"),
        (ResultType::Short, "Jej2"),
        (ResultType::Basic, "WAo2xIg6"),
        (ResultType::Pin, "7662"),
        (ResultType::Name, "jejraquvo"),
        (ResultType::Phrase, "jejr quv cabsibu tam"),
    ];
    for (result_type, want) in expected {
        assert_eq!(
            password(SITE, SiteCounter::DEFAULT, result_type),
            want,
            "mismatch for {result_type}"
        );
    }
}

#[test]
fn largest_counter() {
    assert_eq!(
        password(SITE, SiteCounter::LAST, ResultType::Long),
        "XambHoqo6[Peni"
    );
}

#[test]
fn identification_name() {
    let login = robert(V3)
        .site_result(SITE, SiteCounter::DEFAULT, KeyPurpose::Identification, None, ResultType::Name)
        .expect("site result should succeed");
    assert_eq!(login, "wohzaqage");
}

#[test]
fn recovery_answers() {
    let key = robert(V3);
    let universal = key
        .site_result(SITE, SiteCounter::DEFAULT, KeyPurpose::Recovery, None, ResultType::Phrase)
        .expect("site result should succeed");
    assert_eq!(universal, "xin diyjiqoja hubu");

    let question = key
        .site_result(
            SITE,
            SiteCounter::DEFAULT,
            KeyPurpose::Recovery,
            Some("question"),
            ResultType::Phrase,
        )
        .expect("site result should succeed");
    assert_eq!(question, "xogx tem cegyiva jab");
}

#[test]
fn multibyte_site_name() {
    assert_eq!(
        password(SNOWMAN, SiteCounter::DEFAULT, ResultType::Long),
        "LiheCuwhSerz6)"
    );
}

#[test]
fn multibyte_full_name() {
    let result = snowman(V3)
        .site_result(SITE, SiteCounter::DEFAULT, KeyPurpose::Authentication, None, ResultType::Long)
        .expect("site result should succeed");
    assert_eq!(result, "NopaDajh8=Fene");
}

#[test]
fn time_based_counter() {
    let result = robert(V3)
        .site_result_with_clock(
            SITE,
            SiteCounter::TOTP,
            KeyPurpose::Authentication,
            None,
            ResultType::Long,
            &FixedClock(1_700_000_250),
        )
        .expect("site result should succeed");
    assert_eq!(result, "LojiXewe9~Soje");
    assert_eq!(
        password(SITE, SiteCounter(1_700_000_100), ResultType::Long),
        result
    );
}
