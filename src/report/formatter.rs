// SPDX-License-Identifier: PMPL-1.0-or-later

//! Human-readable text rendering

use crate::i18n::{t, Lang};
use crate::report::{RegistrySummary, TagResult};
use crate::types::Language;
use colored::*;

pub struct ReportFormatter {
    lang: Lang,
}

impl ReportFormatter {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    /// One line per tag: input, canonical form, description.
    pub fn results(&self, results: &[TagResult]) -> String {
        let width = results
            .iter()
            .map(|result| result.tag.chars().count())
            .max()
            .unwrap_or(0);
        let mut lines = Vec::with_capacity(results.len());
        for result in results {
            let tag = format!("{:width$}", result.tag, width = width);
            if result.matched() {
                lines.push(format!(
                    "{}  {}  {}",
                    tag.bold(),
                    result.canonical.cyan(),
                    result.description
                ));
            } else {
                lines.push(format!(
                    "{}  {}",
                    tag.bold(),
                    t(self.lang, "result.no_match").red()
                ));
            }
        }
        lines.join("\n")
    }

    /// `code  name` per line, codes padded to a common width.
    pub fn languages(&self, languages: &[Language]) -> String {
        let width = languages
            .iter()
            .map(|language| language.code.chars().count())
            .max()
            .unwrap_or(0);
        languages
            .iter()
            .map(|language| {
                let code = format!("{:width$}", language.code, width = width);
                format!("{}  {}", code.cyan(), language.description)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn summary(&self, summary: &RegistrySummary) -> String {
        let none = t(self.lang, "info.none");
        let mut lines = vec![format!("{}", t(self.lang, "info.title").bold().cyan())];
        lines.push(format!(
            "  {}: {}",
            t(self.lang, "info.file_date"),
            summary.file_date.as_deref().unwrap_or(none)
        ));
        for (key, count) in [
            ("info.languages", summary.languages),
            ("info.regions", summary.regions),
            ("info.scripts", summary.scripts),
            ("info.variants", summary.variants),
        ] {
            lines.push(format!("  {}: {}", t(self.lang, key), count));
        }

        let ranges = &summary.private_ranges;
        let regions: Vec<String> = ranges.regions.iter().map(ToString::to_string).collect();
        lines.push(format!("  {}:", t(self.lang, "info.private_ranges").yellow()));
        lines.push(format!(
            "    {}: {}",
            t(self.lang, "info.languages"),
            ranges
                .language
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| none.to_string())
        ));
        lines.push(format!(
            "    {}: {}",
            t(self.lang, "info.scripts"),
            ranges
                .script
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| none.to_string())
        ));
        lines.push(format!(
            "    {}: {}",
            t(self.lang, "info.regions"),
            if regions.is_empty() {
                none.to_string()
            } else {
                regions.join(", ")
            }
        ));
        lines.join("\n")
    }
}
