// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for subtag-registry.
//!
//! Two small static data sets:
//!
//! - [`catalog`]: the localized "Private use" placeholder that stands in
//!   for private-use subtags in descriptions, and the CLI's summary labels.
//! - [`iso639`]: curated everyday language names (a picker list and an
//!   extended lookup list) with right-to-left and CJK classification, which
//!   the lookup facade consults before falling back to the registry.
//!
//! ## Supported UI languages
//!
//! | Code | Language | Placeholder     |
//! |------|----------|-----------------|
//! | en   | English  | Private use     |
//! | es   | Spanish  | Uso privado     |
//! | fr   | French   | Usage privé     |
//! | de   | German   | Privatnutzung   |
//! | ja   | Japanese | 私用            |
//!
//! Lookups fall back to English when a key is missing in the requested
//! language.

mod catalog;
pub mod iso639;

pub use catalog::{t, Lang};
