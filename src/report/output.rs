// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported results

use crate::i18n::Lang;
use crate::report::formatter::ReportFormatter;
use crate::report::{RegistrySummary, TagResult};
use crate::types::Language;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn render_results(&self, results: &[TagResult], lang: Lang) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(ReportFormatter::new(lang).results(results)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(results)?),
        }
    }

    pub fn render_languages(&self, languages: &[Language], lang: Lang) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(ReportFormatter::new(lang).languages(languages)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(languages)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(languages)?),
        }
    }

    pub fn render_summary(&self, summary: &RegistrySummary, lang: Lang) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(ReportFormatter::new(lang).summary(summary)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(summary)?),
        }
    }
}
