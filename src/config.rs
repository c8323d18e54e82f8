// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration: where the registry lives and which UI language
//! describes private-use subtags.
//!
//! Precedence, highest first: CLI flags, environment, config file, defaults.

use crate::i18n::Lang;
use crate::registry::DEFAULT_REGISTRY_FILE;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the registry path.
pub const REGISTRY_PATH_ENV: &str = "SUBTAG_REGISTRY_PATH";
/// Overrides the UI language.
pub const REGISTRY_LANG_ENV: &str = "SUBTAG_REGISTRY_LANG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to `language-subtag-registry.txt`.
    pub registry: Option<PathBuf>,
    /// UI language code for the private-use placeholder.
    pub lang: Option<String>,
}

impl Config {
    /// Read a JSON or YAML config file, chosen by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "config {} must be json/yaml/yml",
                    path.to_string_lossy()
                ));
            }
        };
        Ok(config)
    }

    /// Apply environment overrides from the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides from an arbitrary source.
    pub fn with_env_from(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = var(REGISTRY_PATH_ENV).filter(|value| !value.is_empty()) {
            self.registry = Some(PathBuf::from(path));
        }
        if let Some(lang) = var(REGISTRY_LANG_ENV).filter(|value| !value.is_empty()) {
            self.lang = Some(lang);
        }
        self
    }

    /// Apply explicit overrides, typically from CLI flags.
    pub fn with_overrides(mut self, registry: Option<PathBuf>, lang: Option<String>) -> Self {
        if registry.is_some() {
            self.registry = registry;
        }
        if lang.is_some() {
            self.lang = lang;
        }
        self
    }

    pub fn registry_path(&self) -> PathBuf {
        self.registry
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REGISTRY_FILE))
    }

    /// The configured UI language; an unsupported code is an error.
    pub fn ui_lang(&self) -> Result<Lang> {
        match self.lang.as_deref() {
            None => Ok(Lang::default()),
            Some(code) => Lang::from_code(code).ok_or_else(|| {
                let supported: Vec<&str> = Lang::all().iter().map(Lang::code).collect();
                anyhow!(
                    "unsupported language '{}' (supported: {})",
                    code,
                    supported.join(", ")
                )
            }),
        }
    }
}
