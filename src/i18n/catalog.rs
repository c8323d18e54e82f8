// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for subtag-registry.
//!
//! Holds the private-use placeholder substituted into tag descriptions and
//! the labels the CLI prints around registry summaries. Lookup is a linear
//! scan per language; the tables are a few dozen entries and are consulted
//! once per resolver or per printed summary.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add a `Lang::Xx => "xx"` arm to `Lang::code()`
//! 3. Add a `"xx" => Some(Lang::Xx)` arm to `Lang::from_code()`
//! 4. Create a `const XX: &[(&str, &str)]` table below
//! 5. Add `Lang::Xx => XX` to the match in `catalog_for()`

/// Languages the placeholder and CLI labels are available in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    En,
    Es,
    Fr,
    De,
    Ja,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
            Lang::Fr => "fr",
            Lang::De => "de",
            Lang::Ja => "ja",
        }
    }

    /// Parse a UI language code.
    ///
    /// Accepts any case and a region or script suffix (`es-419`, `de_AT`);
    /// only the primary subtag is considered.
    pub fn from_code(code: &str) -> Option<Lang> {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            "fr" => Some(Lang::Fr),
            "de" => Some(Lang::De),
            "ja" => Some(Lang::Ja),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Es, Lang::Fr, Lang::De, Lang::Ja]
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a translation key in the specified language.
///
/// Falls back to English if the key is not found in the requested language,
/// and to the empty string if English lacks it too.
///
/// # Examples
///
/// ```
/// use subtag_registry::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "registry.private_use"), "Private use");
/// assert_eq!(t(Lang::Fr, "registry.private_use"), "Usage privé");
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::En {
        if let Some(value) = lookup(EN, key) {
            return value;
        }
    }
    ""
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Es => ES,
        Lang::Fr => FR,
        Lang::De => DE,
        Lang::Ja => JA,
    }
}

// ─── English (source language, all keys defined here) ──────────────

const EN: &[(&str, &str)] = &[
    ("registry.private_use", "Private use"),
    // Registry summary
    ("info.title", "Language Subtag Registry"),
    ("info.file_date", "File date"),
    ("info.languages", "Languages"),
    ("info.regions", "Regions"),
    ("info.scripts", "Scripts"),
    ("info.variants", "Variants"),
    ("info.private_ranges", "Private-use ranges"),
    ("info.none", "none"),
    // Tag results
    ("result.no_match", "no match"),
];

// ─── Spanish ────────────────────────────────────────────────────────

const ES: &[(&str, &str)] = &[
    ("registry.private_use", "Uso privado"),
    ("info.title", "Registro de subetiquetas de idioma"),
    ("info.file_date", "Fecha del archivo"),
    ("info.languages", "Idiomas"),
    ("info.regions", "Regiones"),
    ("info.scripts", "Escrituras"),
    ("info.variants", "Variantes"),
    ("info.private_ranges", "Rangos de uso privado"),
    ("info.none", "ninguno"),
    ("result.no_match", "sin coincidencia"),
];

// ─── French ─────────────────────────────────────────────────────────

const FR: &[(&str, &str)] = &[
    ("registry.private_use", "Usage privé"),
    ("info.title", "Registre des sous-étiquettes de langue"),
    ("info.file_date", "Date du fichier"),
    ("info.languages", "Langues"),
    ("info.regions", "Régions"),
    ("info.scripts", "Écritures"),
    ("info.variants", "Variantes"),
    ("info.private_ranges", "Plages à usage privé"),
    ("info.none", "aucune"),
    ("result.no_match", "aucune correspondance"),
];

// ─── German ─────────────────────────────────────────────────────────

const DE: &[(&str, &str)] = &[
    ("registry.private_use", "Privatnutzung"),
    ("info.title", "Sprach-Subtag-Registrierung"),
    ("info.file_date", "Dateidatum"),
    ("info.languages", "Sprachen"),
    ("info.regions", "Regionen"),
    ("info.scripts", "Schriften"),
    ("info.variants", "Varianten"),
    ("info.private_ranges", "Bereiche für Privatnutzung"),
    ("info.none", "keine"),
    ("result.no_match", "keine Übereinstimmung"),
];

// ─── Japanese ───────────────────────────────────────────────────────

const JA: &[(&str, &str)] = &[
    ("registry.private_use", "私用"),
    ("info.title", "言語サブタグレジストリ"),
    ("info.file_date", "ファイル日付"),
    ("info.languages", "言語"),
    ("info.regions", "地域"),
    ("info.scripts", "文字"),
    ("info.variants", "バリアント"),
    ("info.private_ranges", "私用範囲"),
    ("info.none", "なし"),
    ("result.no_match", "一致なし"),
];
