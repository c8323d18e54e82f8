// SPDX-License-Identifier: PMPL-1.0-or-later

//! Self-diagnostics for a configured registry.

use crate::config::{Config, REGISTRY_LANG_ENV, REGISTRY_PATH_ENV};
use crate::registry::RegistryIndex;
use anyhow::{anyhow, Result};
use std::env;
use std::path::Path;

pub fn run_self_diagnostics(config: &Config) -> Result<()> {
    println!("subtag-registry self-diagnostics");

    let checks = collect(config, |key| env::var(key).ok());

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

fn collect(config: &Config, var: impl Fn(&str) -> Option<String>) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("subtag-registry {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.push(match config.ui_lang() {
        Ok(lang) => Diagnostic::ok("UI language", lang.to_string()),
        Err(err) => Diagnostic::error("UI language", err.to_string()),
    });
    checks.push(check_env("registry override", REGISTRY_PATH_ENV, &var));
    checks.push(check_env("language override", REGISTRY_LANG_ENV, &var));

    let path = config.registry_path();
    let file = check_file("registry file", &path);
    let readable = file.level != Level::Error;
    checks.push(file);
    if !readable {
        return checks;
    }

    match RegistryIndex::from_path(&path) {
        Ok(index) => {
            checks.push(Diagnostic::ok(
                "registry tables",
                format!(
                    "{} languages, {} regions, {} scripts, {} variants",
                    index.language_count(),
                    index.region_count(),
                    index.script_count(),
                    index.variant_count()
                ),
            ));
            checks.extend(check_index(&index));
        }
        Err(err) => checks.push(Diagnostic::error("registry tables", format!("{:#}", err))),
    }
    checks
}

fn check_index(index: &RegistryIndex) -> Vec<Diagnostic> {
    let mut checks = Vec::new();

    checks.push(match (index.file_date(), index.file_date_parsed()) {
        (Some(_), Some(date)) => Diagnostic::ok("file date", date.to_string()),
        (Some(raw), None) => Diagnostic::warning("file date", format!("unparsable: {}", raw)),
        (None, _) => Diagnostic::warning("file date", "missing File-Date record".to_string()),
    });

    let ranges = index.private_ranges();
    let mut missing = Vec::new();
    if ranges.language.is_none() {
        missing.push("language");
    }
    if ranges.script.is_none() {
        missing.push("script");
    }
    if ranges.regions.is_empty() {
        missing.push("region");
    }
    checks.push(if missing.is_empty() {
        Diagnostic::ok("private-use ranges", "language, script, region".to_string())
    } else {
        Diagnostic::warning(
            "private-use ranges",
            format!("missing: {}", missing.join(", ")),
        )
    });

    let mut dangling: Vec<String> = index
        .languages()
        .filter_map(|language| {
            let script = language.suppress_script.as_deref()?;
            (index.script(script).is_none()).then(|| format!("{}/{}", language.subtag, script))
        })
        .collect();
    dangling.sort();
    checks.push(if dangling.is_empty() {
        Diagnostic::ok("suppressed scripts", "all registered".to_string())
    } else {
        Diagnostic::warning(
            "suppressed scripts",
            format!("unregistered: {}", dangling.join(", ")),
        )
    });

    let mut orphans: Vec<String> = index
        .variants()
        .filter_map(|variant| {
            let prefix = variant.prefix.as_deref()?;
            let primary = prefix.split('-').next().unwrap_or(prefix);
            (index.language(primary).is_none()).then(|| format!("{}/{}", variant.subtag, prefix))
        })
        .collect();
    orphans.sort();
    checks.push(if orphans.is_empty() {
        Diagnostic::ok("variant prefixes", "all registered".to_string())
    } else {
        Diagnostic::warning(
            "variant prefixes",
            format!("unknown language: {}", orphans.join(", ")),
        )
    });

    checks
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

struct Diagnostic {
    label: &'static str,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

fn check_file(label: &'static str, path: &Path) -> Diagnostic {
    if path.is_file() {
        Diagnostic::ok(label, format!("{} exists", path.display()))
    } else if path.exists() {
        Diagnostic::error(
            label,
            format!("{} exists but is not a regular file", path.display()),
        )
    } else {
        Diagnostic::error(label, format!("{} missing", path.display()))
    }
}

fn check_env(
    label: &'static str,
    env_key: &str,
    var: &impl Fn(&str) -> Option<String>,
) -> Diagnostic {
    match var(env_key) {
        Some(value) if !value.trim().is_empty() => {
            Diagnostic::ok(label, format!("{}={}", env_key, value))
        }
        _ => Diagnostic::ok(label, format!("not set ({})", env_key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    const FIXTURE: &str = include_str!("../tests/fixtures/registry-sample.txt");

    fn find<'a>(checks: &'a [Diagnostic], label: &str) -> &'a Diagnostic {
        checks
            .iter()
            .find(|check| check.label == label)
            .unwrap_or_else(|| panic!("no {label} check"))
    }

    #[test]
    fn fixture_registry_is_healthy_apart_from_orphan_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.txt");
        fs::write(&path, FIXTURE).unwrap();
        let config = Config {
            registry: Some(path),
            lang: None,
        };
        let checks = collect(&config, |_| None);
        assert!(checks.iter().all(|check| check.level != Level::Error));
        assert_eq!(find(&checks, "file date").detail, "2024-03-07");
        assert_eq!(find(&checks, "private-use ranges").level, Level::Ok);
        // `valencia` is bound to `ca`, which the fixture does not register.
        let prefixes = find(&checks, "variant prefixes");
        assert_eq!(prefixes.level, Level::Warn);
        assert_eq!(prefixes.detail, "unknown language: valencia/ca");
    }

    #[test]
    fn missing_registry_is_an_error() {
        let config = Config {
            registry: Some(PathBuf::from("/nonexistent/registry.txt")),
            lang: None,
        };
        let checks = collect(&config, |_| None);
        assert_eq!(find(&checks, "registry file").level, Level::Error);
        assert!(checks.iter().all(|check| check.label != "registry tables"));
    }

    #[test]
    fn bad_ui_language_is_an_error() {
        let config = Config {
            registry: Some(PathBuf::from("/nonexistent/registry.txt")),
            lang: Some("xx".to_string()),
        };
        let checks = collect(&config, |_| None);
        assert_eq!(find(&checks, "UI language").level, Level::Error);
    }

    #[test]
    fn sparse_registry_warns() {
        let index = RegistryIndex::from_bytes(
            b"Type: language\nSubtag: en\nDescription: English\nSuppress-Script: Latn\n",
        )
        .unwrap();
        let checks = check_index(&index);
        assert_eq!(find(&checks, "file date").level, Level::Warn);
        assert_eq!(
            find(&checks, "private-use ranges").detail,
            "missing: language, script, region"
        );
        assert_eq!(
            find(&checks, "suppressed scripts").detail,
            "unregistered: en/Latn"
        );
    }

    #[test]
    fn env_overrides_are_reported() {
        let check = check_env("registry override", REGISTRY_PATH_ENV, &|_: &str| {
            Some("/srv/registry.txt".to_string())
        });
        assert_eq!(check.level, Level::Ok);
        assert!(check.detail.ends_with("=/srv/registry.txt"));
    }
}
