//! `mpw-core` — stateless site password derivation.
//!
//! From a full name and master password, plus a site name, counter,
//! purpose and optional context, this crate reproducibly derives a site
//! password, login name or security answer. Nothing derived is stored.
//!
//! Pure computation: zero I/O, zero async. Four algorithm versions are
//! supported and each keeps producing exactly what it always produced.
//!
//! ```no_run
//! use mpw_core::{AlgorithmVersion, KeyPurpose, MasterKey, ResultType, SiteCounter};
//! use secrecy::SecretString;
//!
//! let password = SecretString::from("banana colored duckling".to_owned());
//! let key = MasterKey::derive(AlgorithmVersion::CURRENT, "Robert Lee Mitchell", &password)?;
//! let site_password = key.site_result(
//!     "masterpasswordapp.com",
//!     SiteCounter::DEFAULT,
//!     KeyPurpose::Authentication,
//!     None,
//!     ResultType::Long,
//! )?;
//! assert_eq!(site_password, "Jejr5[RepuSosp");
//! # Ok::<(), mpw_core::MpwError>(())
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod memory;

pub mod encoding;
pub mod kdf;

pub mod counter;
pub mod template;

pub mod purpose;
pub mod result_type;

pub mod algorithm;

pub mod key_id;
pub mod master_key;
pub mod site;

pub use algorithm::AlgorithmVersion;
pub use counter::{Clock, FixedClock, SiteCounter, SystemClock, OTP_WINDOW_SECS};
pub use encoding::LengthRule;
pub use error::{ErrorKind, MpwError};
pub use kdf::{ScryptParams, MASTER_KEY_LEN, SCRYPT_PARAMS, SITE_KEY_LEN};
pub use key_id::KeyId;
pub use master_key::MasterKey;
pub use memory::SecretBytes;
pub use purpose::KeyPurpose;
pub use result_type::{Feature, ResultType, TypeClass};
pub use site::SiteSpec;
pub use template::{CharacterClass, Template, MAX_TEMPLATE_LEN};
