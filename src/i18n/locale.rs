//! Locale type: Normalised, comparable locale identifiers.
//!
//! This module provides the `LocaleId` type used to key provider bindings and
//! resource tables. Arbitrary locales are accepted; lookups for locales that
//! have nothing registered walk up the parent chain and end at the defaults.

use crate::error::{HumanizeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A linguistic/cultural locale identifier (e.g. "en", "fr-FR").
///
/// The identifier is normalised on construction: the language subtag is
/// lowercased, two-letter region subtags are uppercased and `_` separators
/// become `-`. The empty identifier is the invariant (neutral) locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LocaleId {
    code: String,
}

/// Decimal and group separators used when rendering numbers for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    pub decimal: char,
    pub group: char,
}

impl LocaleId {
    /// Create a locale from a code, normalising its casing and separators.
    ///
    /// No validation is performed; use [`LocaleId::parse`] for user input.
    pub fn new(code: &str) -> Self {
        let normalised = code
            .trim()
            .split(['-', '_'])
            .filter(|part| !part.is_empty())
            .enumerate()
            .map(|(index, part)| match (index, part.len()) {
                (0, _) => part.to_ascii_lowercase(),
                (_, 2) => part.to_ascii_uppercase(),
                (_, 4) => title_case(part),
                _ => part.to_string(),
            })
            .collect::<Vec<_>>()
            .join("-");

        Self { code: normalised }
    }

    /// Parse a locale code, rejecting anything that is not made of
    /// alphanumeric subtags separated by `-` or `_`.
    ///
    /// # Returns
    /// * `Ok(LocaleId)` for well-formed codes
    /// * `Err(HumanizeError::InvalidLocale)` otherwise
    pub fn parse(code: &str) -> Result<Self> {
        let trimmed = code.trim();
        let well_formed = !trimmed.is_empty()
            && trimmed.split(['-', '_']).all(|part| {
                !part.is_empty()
                    && part.len() <= 8
                    && part.chars().all(|c| c.is_ascii_alphanumeric())
            });

        if !well_formed {
            return Err(HumanizeError::InvalidLocale(code.to_string()));
        }

        Ok(Self::new(trimmed))
    }

    /// The invariant locale, which holds neutral (English) resources.
    pub fn invariant() -> Self {
        Self {
            code: String::new(),
        }
    }

    pub fn english() -> Self {
        Self::new("en")
    }

    pub fn french() -> Self {
        Self::new("fr")
    }

    /// Get the normalised code (empty for the invariant locale).
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Get the language subtag (e.g. "fr" for "fr-FR").
    pub fn language(&self) -> &str {
        self.code.split('-').next().unwrap_or_default()
    }

    pub fn is_invariant(&self) -> bool {
        self.code.is_empty()
    }

    /// Get the parent locale by dropping the last subtag.
    ///
    /// # Returns
    /// * `Some(parent)` for regional or scripted locales ("fr-FR" -> "fr")
    /// * `Some(invariant)` for a bare language ("fr" -> "")
    /// * `None` for the invariant locale itself
    pub fn parent(&self) -> Option<LocaleId> {
        if self.is_invariant() {
            return None;
        }

        match self.code.rfind('-') {
            Some(index) => Some(Self {
                code: self.code[..index].to_string(),
            }),
            None => Some(Self::invariant()),
        }
    }

    /// The locale followed by each of its ancestors, ending at the invariant
    /// locale.
    pub fn fallback_chain(&self) -> Vec<LocaleId> {
        let mut chain = vec![self.clone()];
        let mut current = self.parent();
        while let Some(locale) = current {
            current = locale.parent();
            chain.push(locale);
        }
        chain
    }

    /// Separators used when formatting numbers in this locale.
    pub fn number_symbols(&self) -> NumberSymbols {
        match self.language() {
            "fr" => NumberSymbols {
                decimal: ',',
                group: '\u{202f}',
            },
            "de" | "es" | "it" | "pt" | "nl" | "da" | "id" | "tr" => NumberSymbols {
                decimal: ',',
                group: '.',
            },
            "ru" | "pl" | "cs" | "sv" | "fi" | "nb" | "uk" => NumberSymbols {
                decimal: ',',
                group: '\u{a0}',
            },
            _ => NumberSymbols {
                decimal: '.',
                group: ',',
            },
        }
    }
}

/// Script subtags read "Hant", "Latn": first letter upper, the rest lower.
fn title_case(part: &str) -> String {
    let mut chars = part.chars();
    chars
        .next()
        .map(|first| {
            first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect()
        })
        .unwrap_or_default()
}

impl Default for LocaleId {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invariant() {
            f.write_str("invariant")
        } else {
            f.write_str(&self.code)
        }
    }
}

impl FromStr for LocaleId {
    type Err = HumanizeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&str> for LocaleId {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LocaleId {
    fn from(code: String) -> Self {
        Self::new(&code)
    }
}

impl From<LocaleId> for String {
    fn from(locale: LocaleId) -> Self {
        locale.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Normalisation Tests ====================

    #[test]
    fn test_new_normalises_case_and_separator() {
        assert_eq!(LocaleId::new("FR_fr").code(), "fr-FR");
        assert_eq!(LocaleId::new("en-us").code(), "en-US");
        assert_eq!(LocaleId::new("zh-hant-tw").code(), "zh-Hant-TW");
    }

    #[test]
    fn test_new_handles_non_ascii_subtags() {
        assert_eq!(LocaleId::new("sr-éab").code(), "sr-Éab");
        assert_eq!(LocaleId::new("x-ÉBC").code(), "x-Ébc");
        assert_eq!(LocaleId::new("zz-éxyz").code(), "zz-éxyz");
        assert_eq!(LocaleId::new("sr-éab").parent(), Some(LocaleId::new("sr")));
    }

    #[test]
    fn test_new_trims_whitespace() {
        assert_eq!(LocaleId::new("  de-DE ").code(), "de-DE");
    }

    #[test]
    fn test_equality_after_normalisation() {
        assert_eq!(LocaleId::new("fr_FR"), LocaleId::new("fr-fr"));
        assert_ne!(LocaleId::new("fr"), LocaleId::new("fr-FR"));
    }

    // ==================== parse Tests ====================

    #[test]
    fn test_parse_valid() {
        let locale = LocaleId::parse("pt-BR").expect("Should parse");
        assert_eq!(locale.code(), "pt-BR");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(LocaleId::parse("").is_err());
        assert!(LocaleId::parse("   ").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = LocaleId::parse("en US!");
        assert!(matches!(result, Err(HumanizeError::InvalidLocale(_))));
        assert!(LocaleId::parse("en--US").is_err());
    }

    #[test]
    fn test_from_str_delegates_to_parse() {
        let locale: LocaleId = "es".parse().expect("Should parse");
        assert_eq!(locale, LocaleId::new("es"));
    }

    // ==================== Parent Chain Tests ====================

    #[test]
    fn test_parent_of_regional_locale() {
        assert_eq!(LocaleId::new("fr-FR").parent(), Some(LocaleId::french()));
    }

    #[test]
    fn test_parent_of_language_is_invariant() {
        assert_eq!(LocaleId::french().parent(), Some(LocaleId::invariant()));
        assert_eq!(LocaleId::invariant().parent(), None);
    }

    #[test]
    fn test_fallback_chain_order() {
        let chain = LocaleId::new("zh-Hant-TW").fallback_chain();
        let codes: Vec<&str> = chain.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["zh-Hant-TW", "zh-Hant", "zh", ""]);
    }

    #[test]
    fn test_language_subtag() {
        assert_eq!(LocaleId::new("fr-CA").language(), "fr");
        assert_eq!(LocaleId::invariant().language(), "");
    }

    // ==================== Number Symbol Tests ====================

    #[test]
    fn test_number_symbols_english() {
        let symbols = LocaleId::english().number_symbols();
        assert_eq!(symbols.decimal, '.');
        assert_eq!(symbols.group, ',');
    }

    #[test]
    fn test_number_symbols_follow_language() {
        assert_eq!(LocaleId::new("fr-BE").number_symbols().decimal, ',');
        assert_eq!(LocaleId::new("de-AT").number_symbols().group, '.');
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display() {
        assert_eq!(LocaleId::new("fr-FR").to_string(), "fr-FR");
        assert_eq!(LocaleId::invariant().to_string(), "invariant");
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(LocaleId::default(), LocaleId::english());
    }

    #[test]
    fn test_serde_roundtrip_normalises() {
        let locale: LocaleId = serde_json::from_str("\"fr_fr\"").expect("Should deserialize");
        assert_eq!(locale.code(), "fr-FR");
        assert_eq!(serde_json::to_string(&locale).expect("Should serialize"), "\"fr-FR\"");
    }
}
