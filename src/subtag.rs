// SPDX-License-Identifier: PMPL-1.0-or-later

//! Subtag case conventions and shape classification.
//!
//! BCP-47 distinguishes subtag roles mostly by length: two letters or three
//! digits for a region, four characters for a script, anything else is a
//! variant candidate. A four-character subtag may still turn out to be a
//! variant (`1996`), so [`SubtagShape`] is only the first guess; the
//! resolver falls through to variant lookup when the script guess fails.

/// Lower-case form used for language and variant keys.
pub fn lower(subtag: &str) -> String {
    subtag.to_lowercase()
}

/// Upper-case form used for region keys.
pub fn upper(subtag: &str) -> String {
    subtag.to_uppercase()
}

/// Title-case form used for script keys (`hANT` -> `Hant`).
pub fn title(subtag: &str) -> String {
    let mut chars = subtag.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Shape of a non-initial subtag, derived from its length alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtagShape {
    /// Two characters: ISO 3166 region.
    Region2,
    /// Three characters: UN M.49 region.
    Region3,
    /// Four characters: script, or a short variant such as `1996`.
    Script,
    /// Any other length: only a variant can match.
    Other,
}

impl SubtagShape {
    pub fn classify(subtag: &str) -> Self {
        match subtag.chars().count() {
            2 => Self::Region2,
            3 => Self::Region3,
            4 => Self::Script,
            _ => Self::Other,
        }
    }

    pub fn is_region(self) -> bool {
        matches!(self, Self::Region2 | Self::Region3)
    }
}
