// SPDX-License-Identifier: PMPL-1.0-or-later

//! Result records and their printed/exported forms

pub mod formatter;
pub mod output;

use crate::registry::{PrivateUseRanges, RegistryIndex};
use crate::resolver::Resolver;
use serde::Serialize;

pub use formatter::ReportFormatter;
pub use output::OutputFormat;

/// Outcome of resolving one tag. Empty strings mean no match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagResult {
    pub tag: String,
    pub description: String,
    pub canonical: String,
}

impl TagResult {
    pub fn resolve(resolver: &Resolver, tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            description: resolver.describe(tag),
            canonical: resolver.normalize(tag),
        }
    }

    pub fn matched(&self) -> bool {
        !self.canonical.is_empty()
    }
}

/// Table sizes and metadata of a loaded registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySummary {
    pub file_date: Option<String>,
    pub languages: usize,
    pub regions: usize,
    pub scripts: usize,
    pub variants: usize,
    pub private_ranges: PrivateUseRanges,
}

impl RegistrySummary {
    pub fn from_index(index: &RegistryIndex) -> Self {
        Self {
            file_date: index.file_date().map(str::to_string),
            languages: index.language_count(),
            regions: index.region_count(),
            scripts: index.script_count(),
            variants: index.variant_count(),
            private_ranges: index.private_ranges().clone(),
        }
    }
}
