//! Phrase formatting: count-aware resource lookup, numeric formats and
//! word quantities.

use crate::error::{HumanizeError, Result};
use crate::i18n::{LocaleId, NumberSymbols, TextLookup};
use crate::quantity::QuantityResolver;
use crate::registry::StrategyRegistry;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Placeholder replaced by the count in resource templates.
pub const PLACEHOLDER: &str = "{0}";

/// Substitute `value` for every `{0}` in `template`.
pub fn interpolate(template: &str, value: &str) -> String {
    template.replace(PLACEHOLDER, value)
}

// ==================== Number Format ====================

/// Numeric format applied to counts before they are placed into text.
///
/// Parsed from the short format strings `G`, `F<n>` and `N<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// Shortest representation; integral values print without decimals.
    #[default]
    General,
    /// Fixed number of decimals.
    Fixed(usize),
    /// Fixed number of decimals with group separators.
    Number(usize),
}

impl NumberFormat {
    /// Precision used by `F` and `N` without an explicit digit count.
    pub const DEFAULT_PRECISION: usize = 2;

    /// Render `value` with the separators of `locale`.
    pub fn format(&self, value: f64, locale: &LocaleId) -> String {
        let symbols = locale.number_symbols();
        match self {
            NumberFormat::General => general(value, &symbols),
            NumberFormat::Fixed(precision) => fixed(value, *precision, &symbols, false),
            NumberFormat::Number(precision) => fixed(value, *precision, &symbols, true),
        }
    }
}

impl FromStr for NumberFormat {
    type Err = HumanizeError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let specifier = chars
            .next()
            .ok_or_else(|| HumanizeError::InvalidNumberFormat(s.to_string()))?;
        let digits = chars.as_str();

        let precision = || -> Result<usize> {
            if digits.is_empty() {
                Ok(Self::DEFAULT_PRECISION)
            } else {
                digits
                    .parse::<usize>()
                    .map_err(|_| HumanizeError::InvalidNumberFormat(s.to_string()))
            }
        };

        match specifier.to_ascii_uppercase() {
            'G' if digits.is_empty() => Ok(NumberFormat::General),
            'F' => Ok(NumberFormat::Fixed(precision()?)),
            'N' => Ok(NumberFormat::Number(precision()?)),
            _ => Err(HumanizeError::InvalidNumberFormat(s.to_string())),
        }
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberFormat::General => write!(f, "G"),
            NumberFormat::Fixed(precision) => write!(f, "F{}", precision),
            NumberFormat::Number(precision) => write!(f, "N{}", precision),
        }
    }
}

fn general(value: f64, symbols: &NumberSymbols) -> String {
    let text = if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    };
    text.replace('.', &symbols.decimal.to_string())
}

fn fixed(value: f64, precision: usize, symbols: &NumberSymbols, grouped: bool) -> String {
    let text = format!("{:.*}", precision, value.abs());
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), Some(fraction.to_string())),
        None => (text.clone(), None),
    };

    let integer = if grouped {
        group_digits(&integer, symbols.group)
    } else {
        integer
    };

    let mut out = String::new();
    let is_zero = text_is_zero(&integer, fraction.as_deref());
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&integer);
    if let Some(fraction) = fraction {
        out.push(symbols.decimal);
        out.push_str(&fraction);
    }
    out
}

fn text_is_zero(integer: &str, fraction: Option<&str>) -> bool {
    integer.chars().all(|c| !c.is_ascii_digit() || c == '0')
        && fraction.map_or(true, |f| f.chars().all(|c| c == '0'))
}

fn group_digits(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

// ==================== Phrase Formatter ====================

/// How `to_quantity` shows the number next to the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowQuantityAs {
    /// Only the inflected word.
    None,
    /// The formatted number, a space, then the word.
    #[default]
    Numeric,
}

/// Count-aware text assembly for one locale.
pub struct PhraseFormatter<'a> {
    lookup: &'a dyn TextLookup,
    registry: &'a StrategyRegistry,
    locale: &'a LocaleId,
}

impl<'a> PhraseFormatter<'a> {
    pub fn new(
        lookup: &'a dyn TextLookup,
        registry: &'a StrategyRegistry,
        locale: &'a LocaleId,
    ) -> Self {
        Self {
            lookup,
            registry,
            locale,
        }
    }

    fn resolver(&self) -> QuantityResolver<'a> {
        QuantityResolver::new(self.registry, self.locale)
    }

    /// Look up the template for `base_key` in the form `count` selects.
    ///
    /// The template is returned uninterpolated.
    pub fn translate_with_count(&self, base_key: &str, count: f64) -> String {
        self.resolver().template(self.lookup, base_key, count)
    }

    /// Look up the template for `base_key` and place the formatted count
    /// into it.
    ///
    /// # Arguments
    /// * `base_key` - Resource key without a quantity suffix
    /// * `count` - The magnitude that selects the form
    /// * `format` - Numeric format for the count, `General` when absent
    pub fn translate_and_format_with_count(
        &self,
        base_key: &str,
        count: f64,
        format: Option<NumberFormat>,
    ) -> String {
        let template = self.translate_with_count(base_key, count);
        let number = format.unwrap_or_default().format(count, self.locale);
        interpolate(&template, &number)
    }

    /// Inflect `word` to agree with `quantity`, optionally prefixed by the
    /// formatted quantity ("2 requests").
    ///
    /// Without an inflection provider the word is used as given.
    pub fn to_quantity(
        &self,
        word: &str,
        quantity: f64,
        show: ShowQuantityAs,
        format: Option<NumberFormat>,
    ) -> String {
        let inflected = match self.registry.inflector(self.locale) {
            Some(inflector) => {
                if inflector.is_plural(quantity) {
                    inflector.pluralize(word, false)
                } else {
                    inflector.singularize(word, false, false)
                }
            }
            None => {
                debug!("No inflection provider for {}, leaving '{}' as is", self.locale, word);
                word.to_string()
            }
        };

        match show {
            ShowQuantityAs::None => inflected,
            ShowQuantityAs::Numeric => {
                let number = format.unwrap_or_default().format(quantity, self.locale);
                format!("{} {}", number, inflected)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::ResourceCatalog;
    use std::sync::Arc;

    // ==================== Number Format Tests ====================

    #[test]
    fn test_parse_number_formats() {
        assert_eq!("G".parse::<NumberFormat>().unwrap(), NumberFormat::General);
        assert_eq!("f3".parse::<NumberFormat>().unwrap(), NumberFormat::Fixed(3));
        assert_eq!("N0".parse::<NumberFormat>().unwrap(), NumberFormat::Number(0));
        assert_eq!("N".parse::<NumberFormat>().unwrap(), NumberFormat::Number(2));
    }

    #[test]
    fn test_parse_invalid_number_formats() {
        for input in ["", "X2", "Fx", "G2"] {
            assert!(matches!(
                input.parse::<NumberFormat>(),
                Err(HumanizeError::InvalidNumberFormat(_))
            ));
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for format in [NumberFormat::General, NumberFormat::Fixed(1), NumberFormat::Number(4)] {
            assert_eq!(format.to_string().parse::<NumberFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_general_format() {
        let en = LocaleId::english();
        assert_eq!(NumberFormat::General.format(2.0, &en), "2");
        assert_eq!(NumberFormat::General.format(0.2, &en), "0.2");
        assert_eq!(NumberFormat::General.format(-3.0, &en), "-3");
        assert_eq!(NumberFormat::General.format(1.5, &LocaleId::french()), "1,5");
    }

    #[test]
    fn test_fixed_format() {
        let en = LocaleId::english();
        assert_eq!(NumberFormat::Fixed(2).format(1.0, &en), "1.00");
        assert_eq!(NumberFormat::Fixed(0).format(10.6, &en), "11");
        assert_eq!(NumberFormat::Fixed(1).format(-2.26, &en), "-2.3");
        assert_eq!(NumberFormat::Fixed(1).format(-0.01, &en), "0.0");
    }

    #[test]
    fn test_number_format_groups_digits() {
        let en = LocaleId::english();
        assert_eq!(NumberFormat::Number(0).format(10_000.0, &en), "10,000");
        assert_eq!(NumberFormat::Number(2).format(1_234_567.891, &en), "1,234,567.89");
        assert_eq!(NumberFormat::Number(0).format(999.0, &en), "999");
        assert_eq!(NumberFormat::Number(0).format(-1_000.0, &en), "-1,000");
        assert_eq!(NumberFormat::Number(1).format(1_000.5, &LocaleId::new("de-DE")), "1.000,5");
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(interpolate("{0} days ago", "3"), "3 days ago");
        assert_eq!(interpolate("yesterday", "1"), "yesterday");
    }

    // ==================== Phrase Formatter Tests ====================

    fn catalog() -> ResourceCatalog {
        let catalog = ResourceCatalog::builtin();
        let en = LocaleId::english();
        catalog.insert(&en, "Files", "{0} file");
        catalog.insert(&en, "FilesPlural", "{0} files");
        catalog.insert(&en, "FilesZero", "no files");
        catalog
    }

    fn registry() -> StrategyRegistry {
        StrategyRegistry::with_builtins(Arc::new(ResourceCatalog::builtin()))
    }

    #[test]
    fn test_translate_with_count() {
        let catalog = catalog();
        let registry = registry();
        let en = LocaleId::english();
        let phrases = PhraseFormatter::new(&catalog, &registry, &en);

        assert_eq!(phrases.translate_with_count("Files", 0.0), "no files");
        assert_eq!(phrases.translate_with_count("Files", 1.0), "{0} file");
        assert_eq!(phrases.translate_with_count("Files", 3.0), "{0} files");
    }

    #[test]
    fn test_translate_and_format_with_count() {
        let catalog = catalog();
        let registry = registry();
        let en = LocaleId::english();
        let phrases = PhraseFormatter::new(&catalog, &registry, &en);

        assert_eq!(phrases.translate_and_format_with_count("Files", 1.0, None), "1 file");
        assert_eq!(
            phrases.translate_and_format_with_count(
                "Files",
                12_500.0,
                Some(NumberFormat::Number(0))
            ),
            "12,500 files"
        );
    }

    #[test]
    fn test_translate_missing_key_returns_suffixed_key() {
        let catalog = catalog();
        let registry = registry();
        let en = LocaleId::english();
        let phrases = PhraseFormatter::new(&catalog, &registry, &en);

        assert_eq!(phrases.translate_with_count("Unknown", 2.0), "UnknownPlural");
    }

    #[test]
    fn test_to_quantity_english() {
        let catalog = catalog();
        let registry = registry();
        let en = LocaleId::english();
        let phrases = PhraseFormatter::new(&catalog, &registry, &en);

        let numeric = |word, quantity| {
            phrases.to_quantity(word, quantity, ShowQuantityAs::Numeric, None)
        };

        assert_eq!(numeric("request", 0.0), "0 requests");
        assert_eq!(numeric("request", 1.0), "1 request");
        assert_eq!(numeric("requests", 1.0), "1 request");
        assert_eq!(numeric("men", 2.0), "2 men");
        assert_eq!(phrases.to_quantity("request", 2.0, ShowQuantityAs::None, None), "requests");
        assert_eq!(
            phrases.to_quantity(
                "request",
                10_000.0,
                ShowQuantityAs::Numeric,
                Some(NumberFormat::Number(0))
            ),
            "10,000 requests"
        );
    }

    #[test]
    fn test_to_quantity_french() {
        let catalog = catalog();
        let registry = registry();
        let fr = LocaleId::french();
        let phrases = PhraseFormatter::new(&catalog, &registry, &fr);

        assert_eq!(phrases.to_quantity("cheval", 2.0, ShowQuantityAs::Numeric, None), "2 chevaux");
        assert_eq!(phrases.to_quantity("cheval", 1.5, ShowQuantityAs::Numeric, None), "1,5 cheval");
    }

    #[test]
    fn test_to_quantity_without_provider_keeps_word() {
        let catalog = catalog();
        let registry = StrategyRegistry::new();
        let en = LocaleId::english();
        let phrases = PhraseFormatter::new(&catalog, &registry, &en);

        assert_eq!(phrases.to_quantity("request", 5.0, ShowQuantityAs::Numeric, None), "5 request");
    }
}
