//! The same inputs across versions V0-V3.
//!
//! ASCII inputs agree from V1 on; V0 differs through its signed seed
//! bytes. Multi-byte site names split V0/V1 from V2/V3, and multi-byte full
//! names split V0-V2 from V3. A multi-byte context is counted like the
//! site name, so it also splits V0/V1 from V2/V3.

use mpw_core::{AlgorithmVersion, KeyPurpose, MasterKey, ResultType, SiteCounter};

use super::{robert, snowman, KEY_ID, SITE, SNOWMAN};

fn long_password(key: &MasterKey, site: &str) -> String {
    key.site_result(site, SiteCounter::DEFAULT, KeyPurpose::Authentication, None, ResultType::Long)
        .expect("site result should succeed")
}

fn answer(key: &MasterKey, context: Option<&str>) -> String {
    key.site_result(SITE, SiteCounter::DEFAULT, KeyPurpose::Recovery, context, ResultType::Phrase)
        .expect("site result should succeed")
}

fn assert_per_version(expected: [&str; 4], actual: impl Fn(AlgorithmVersion) -> String) {
    for (version, want) in AlgorithmVersion::ALL.into_iter().zip(expected) {
        assert_eq!(actual(version), want, "mismatch for version {version}");
    }
}

#[test]
fn ascii_full_name_key_id_is_version_independent() {
    for version in AlgorithmVersion::ALL {
        let id = robert(version).key_id().expect("key id should succeed");
        assert_eq!(id.to_hex(), KEY_ID, "version {version}");
    }
}

#[test]
fn ascii_inputs() {
    assert_per_version(
        ["Feji5@ReduWosh", "Jejr5[RepuSosp", "Jejr5[RepuSosp", "Jejr5[RepuSosp"],
        |v| long_password(robert(v), SITE),
    );
}

#[test]
fn ascii_inputs_maximum() {
    assert_per_version(
        [
            "w1!3bA3icmRAc)SS@lwl",
            "W6@692^B1#&@gVdSdLZ@",
            "W6@692^B1#&@gVdSdLZ@",
            "W6@692^B1#&@gVdSdLZ@",
        ],
        |v| {
            robert(v)
                .site_result(SITE, SiteCounter::DEFAULT, KeyPurpose::Authentication, None, ResultType::Maximum)
                .expect("site result should succeed")
        },
    );
}

#[test]
fn recovery_context() {
    assert_per_version(
        [
            "movm bex gevrica jaf",
            "xogx tem cegyiva jab",
            "xogx tem cegyiva jab",
            "xogx tem cegyiva jab",
        ],
        |v| answer(robert(v), Some("question")),
    );
}

#[test]
fn recovery_without_context() {
    assert_per_version(
        [
            "miy lirfijoja dubu",
            "xin diyjiqoja hubu",
            "xin diyjiqoja hubu",
            "xin diyjiqoja hubu",
        ],
        |v| answer(robert(v), None),
    );
}

#[test]
fn empty_context_matches_absent_context() {
    for version in AlgorithmVersion::ALL {
        let key = robert(version);
        assert_eq!(answer(key, Some("")), answer(key, None), "version {version}");
    }
}

#[test]
fn multibyte_context() {
    // V0/V1 count the context in UTF-16 units; V2/V3 in UTF-8 bytes.
    assert_per_version(
        [
            "xamj foy jallelo kix",
            "taqj bog qadwedo cim",
            "ta mazgu xax gidegka",
            "ta mazgu xax gidegka",
        ],
        |v| answer(robert(v), Some(SNOWMAN)),
    );
}

#[test]
fn multibyte_site_name() {
    assert_per_version(
        ["HahiVana2@Nole", "WawiYarp2@Kodh", "LiheCuwhSerz6)", "LiheCuwhSerz6)"],
        |v| long_password(robert(v), SNOWMAN),
    );
}

#[test]
fn multibyte_site_name_maximum() {
    assert_per_version(
        [
            "U0_Hi3#44wbb4Rw)iA@3",
            "koKw#UfRyw9iR7%)XL8]",
            "bp7rJKc7kaXc4sxOwG0*",
            "bp7rJKc7kaXc4sxOwG0*",
        ],
        |v| {
            robert(v)
                .site_result(SNOWMAN, SiteCounter::DEFAULT, KeyPurpose::Authentication, None, ResultType::Maximum)
                .expect("site result should succeed")
        },
    );
}

#[test]
fn multibyte_full_name() {
    assert_per_version(
        ["HajrYudo7@Mamh", "WaqoGuho2[Xaxw", "WaqoGuho2[Xaxw", "NopaDajh8=Fene"],
        |v| long_password(snowman(v), SITE),
    );
}
