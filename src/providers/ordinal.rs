//! Ordinal providers: 1 → "1st", "1er", ...

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammatical gender used by languages whose ordinal suffix agrees with
/// the noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GrammaticalGender {
    #[default]
    Masculine,
    Feminine,
    Neuter,
}

impl GrammaticalGender {
    pub const ALL: [GrammaticalGender; 3] = [
        GrammaticalGender::Masculine,
        GrammaticalGender::Feminine,
        GrammaticalGender::Neuter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GrammaticalGender::Masculine => "Masculine",
            GrammaticalGender::Feminine => "Feminine",
            GrammaticalGender::Neuter => "Neuter",
        }
    }
}

impl fmt::Display for GrammaticalGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Locale-specific ordinal rendering.
pub trait Ordinalizer: Send + Sync {
    /// Render `number` as an ordinal. `number_text` is the already formatted
    /// number the suffix attaches to.
    fn convert(&self, number: i64, number_text: &str) -> String;

    /// Gender-aware variant. Languages without gender agreement ignore it.
    fn convert_with_gender(
        &self,
        number: i64,
        number_text: &str,
        _gender: GrammaticalGender,
    ) -> String {
        self.convert(number, number_text)
    }
}

/// Fallback ordinalizer: returns the number text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOrdinalizer;

impl Ordinalizer for DefaultOrdinalizer {
    fn convert(&self, _number: i64, number_text: &str) -> String {
        number_text.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishOrdinalizer;

impl Ordinalizer for EnglishOrdinalizer {
    fn convert(&self, number: i64, number_text: &str) -> String {
        let n = number.unsigned_abs();
        let suffix = if (11..=13).contains(&(n % 100)) {
            "th"
        } else {
            match n % 10 {
                1 => "st",
                2 => "nd",
                3 => "rd",
                _ => "th",
            }
        };
        format!("{}{}", number_text, suffix)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchOrdinalizer;

impl Ordinalizer for FrenchOrdinalizer {
    fn convert(&self, number: i64, number_text: &str) -> String {
        self.convert_with_gender(number, number_text, GrammaticalGender::Masculine)
    }

    fn convert_with_gender(
        &self,
        number: i64,
        number_text: &str,
        gender: GrammaticalGender,
    ) -> String {
        let suffix = match (number, gender) {
            (1, GrammaticalGender::Feminine) => "ère",
            (1, _) => "er",
            _ => "ème",
        };
        format!("{}{}", number_text, suffix)
    }
}
