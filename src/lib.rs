// SPDX-License-Identifier: PMPL-1.0-or-later

//! subtag-registry: BCP-47 tag description and normalization.
//!
//! Loads the IANA Language Subtag Registry once into an immutable
//! [`RegistryIndex`] and answers two questions about a tag such as
//! `zh-Hant-TW`: what it means ("Chinese (Han [Traditional variant],
//! Taiwan, Province of China)") and how it is canonically written.
//!
//! PILLARS:
//! 1. **Registry**: flat-text record parser, typed subtag tables and the
//!    private-use ranges (`qaa..qtz`, `Qaaa..Qabx`, `QM..QZ`, `XA..XZ`).
//! 2. **Resolver**: one branch-selection pass shared by [`describe`] and
//!    [`normalize`], so the two never disagree on whether a tag matched.
//! 3. **Lookup**: curated display names first, registry second.
//!
//! ```no_run
//! use subtag_registry::{describe, normalize, RegistryIndex};
//! use std::path::Path;
//!
//! let index = RegistryIndex::from_path(Path::new("language-subtag-registry.txt"))?;
//! assert_eq!(describe(&index, "en-US"), "English (United States)");
//! assert_eq!(normalize(&index, "ZH-hant-tw"), "zh-Hant-TW");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod diagnostics;
pub mod i18n;
pub mod lookup;
pub mod registry;
pub mod report;
pub mod resolver;
pub mod subtag;
pub mod types;

pub use registry::RegistryIndex;
pub use resolver::{describe, describe_with, normalize, Resolver};
