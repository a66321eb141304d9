//! Date-time phrasing providers.

use super::inflection::Inflector;
use crate::i18n::{LocaleId, TextLookup};
use crate::phrase::interpolate;
use crate::quantity::QuantityForm;
use crate::relative_time::{Tense, TimeUnit};
use std::fmt;
use std::sync::Arc;

/// Renders bucketed moments and durations as locale text.
pub trait DateTimeFormatter: Send + Sync {
    /// Phrase for a zero-distance moment ("now").
    fn now(&self) -> String;

    /// Phrase for an absent moment ("never").
    fn never(&self) -> String;

    /// Phrase for a zero-length duration ("no time").
    fn zero(&self) -> String;

    /// Phrase for `count` units in the past or future.
    fn date_humanize(&self, tense: Tense, unit: TimeUnit, count: u64) -> String;

    /// Phrase for a duration of `count` units.
    fn time_span_humanize(&self, unit: TimeUnit, count: u64) -> String;
}

/// Formatter backed by resource templates.
///
/// Keys are `DateTime{Tense}{Unit}` and `TimeSpan{Unit}`, suffixed by the
/// count's quantity form and interpolated with the count.
pub struct ResourceDateTimeFormatter {
    locale: LocaleId,
    lookup: Arc<dyn TextLookup>,
    inflector: Arc<dyn Inflector>,
}

impl ResourceDateTimeFormatter {
    pub fn new(
        locale: LocaleId,
        lookup: Arc<dyn TextLookup>,
        inflector: Arc<dyn Inflector>,
    ) -> Self {
        Self {
            locale,
            lookup,
            inflector,
        }
    }

    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    fn counted(&self, base_key: &str, count: u64) -> String {
        let template = QuantityForm::resolve_template(
            self.lookup.as_ref(),
            &self.locale,
            base_key,
            count as f64,
            Some(self.inflector.as_ref()),
        );
        interpolate(&template, &count.to_string())
    }
}

impl fmt::Debug for ResourceDateTimeFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceDateTimeFormatter")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl DateTimeFormatter for ResourceDateTimeFormatter {
    fn now(&self) -> String {
        self.lookup.lookup("DateTimeNow", &self.locale)
    }

    fn never(&self) -> String {
        self.lookup.lookup("DateTimeNever", &self.locale)
    }

    fn zero(&self) -> String {
        self.lookup.lookup("DateTimeZero", &self.locale)
    }

    fn date_humanize(&self, tense: Tense, unit: TimeUnit, count: u64) -> String {
        if count == 1 && unit == TimeUnit::Day {
            let key = match tense {
                Tense::Future => "DateTimeTomorrow",
                Tense::Past => "DateTimeYesterday",
            };
            return self.lookup.lookup(key, &self.locale);
        }

        self.counted(&format!("DateTime{}{}", tense.name(), unit.name()), count)
    }

    fn time_span_humanize(&self, unit: TimeUnit, count: u64) -> String {
        if count == 0 {
            return self.zero();
        }
        self.counted(&format!("TimeSpan{}", unit.name()), count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::ResourceCatalog;
    use crate::providers::VocabularyInflector;

    fn formatter(locale: LocaleId) -> ResourceDateTimeFormatter {
        let inflector: Arc<dyn Inflector> = if locale == LocaleId::french() {
            Arc::new(VocabularyInflector::french())
        } else {
            Arc::new(VocabularyInflector::english())
        };
        ResourceDateTimeFormatter::new(locale, Arc::new(ResourceCatalog::builtin()), inflector)
    }

    // ==================== Sentinel Tests ====================

    #[test]
    fn test_sentinels_english() {
        let f = formatter(LocaleId::english());
        assert_eq!(f.now(), "now");
        assert_eq!(f.never(), "never");
        assert_eq!(f.zero(), "no time");
    }

    #[test]
    fn test_sentinels_french() {
        let f = formatter(LocaleId::french());
        assert_eq!(f.now(), "maintenant");
        assert_eq!(f.never(), "jamais");
    }

    // ==================== Date Phrase Tests ====================

    #[test]
    fn test_english_singular_and_plural() {
        let f = formatter(LocaleId::english());
        assert_eq!(f.date_humanize(Tense::Past, TimeUnit::Hour, 1), "an hour ago");
        assert_eq!(f.date_humanize(Tense::Past, TimeUnit::Second, 10), "10 seconds ago");
        assert_eq!(f.date_humanize(Tense::Future, TimeUnit::Hour, 1), "in an hour");
        assert_eq!(f.date_humanize(Tense::Future, TimeUnit::Year, 3), "in 3 years");
    }

    #[test]
    fn test_single_day_uses_dedicated_phrase() {
        let f = formatter(LocaleId::english());
        assert_eq!(f.date_humanize(Tense::Past, TimeUnit::Day, 1), "yesterday");
        assert_eq!(f.date_humanize(Tense::Future, TimeUnit::Day, 1), "tomorrow");
        assert_eq!(f.date_humanize(Tense::Past, TimeUnit::Day, 2), "2 days ago");
    }

    #[test]
    fn test_french_phrases() {
        let f = formatter(LocaleId::french());
        assert_eq!(f.date_humanize(Tense::Past, TimeUnit::Second, 2), "il y a 2 secondes");
        assert_eq!(f.date_humanize(Tense::Past, TimeUnit::Second, 1), "il y a 1 seconde");
        assert_eq!(f.date_humanize(Tense::Past, TimeUnit::Day, 1), "hier");
        assert_eq!(f.date_humanize(Tense::Future, TimeUnit::Day, 1), "demain");
    }

    // ==================== Time Span Tests ====================

    #[test]
    fn test_time_span() {
        let f = formatter(LocaleId::english());
        assert_eq!(f.time_span_humanize(TimeUnit::Day, 1), "1 day");
        assert_eq!(f.time_span_humanize(TimeUnit::Week, 2), "2 weeks");
        assert_eq!(f.time_span_humanize(TimeUnit::Minute, 0), "no time");
    }

    #[test]
    fn test_time_span_french() {
        let f = formatter(LocaleId::french());
        assert_eq!(f.time_span_humanize(TimeUnit::Hour, 3), "3 heures");
        assert_eq!(f.time_span_humanize(TimeUnit::Month, 4), "4 mois");
    }
}
