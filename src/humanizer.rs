//! The composition root: one catalog, one registry, one locale.
//!
//! Every entry point resolves its provider through the registry for the
//! humanizer's locale. A missing provider never fails: the call returns an
//! empty string (relative time) or the untransformed input (words, numbers).

use crate::config::HumanizerConfig;
use crate::enums::{dehumanize_enum, humanize_enum, HumanizeEnum, OnNoMatch};
use crate::error::{HumanizeError, Result};
use crate::i18n::{LocaleId, MetricsReport, ResourceCatalog, TextLookup};
use crate::phrase::{NumberFormat, PhraseFormatter, ShowQuantityAs};
use crate::providers::{DateTimeFormatter, GrammaticalGender};
use crate::quantity::QuantityResolver;
use crate::registry::StrategyRegistry;
use crate::relative_time::{largest_whole_unit, Elapsed, HumanizedMoment, TimeUnit, UnitBounds};
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

static GLOBAL: OnceLock<Humanizer> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Humanizer {
    catalog: Arc<ResourceCatalog>,
    registry: Arc<StrategyRegistry>,
    locale: LocaleId,
    bounds: UnitBounds,
}

impl Humanizer {
    /// Assemble a humanizer from explicit parts.
    pub fn new(
        catalog: Arc<ResourceCatalog>,
        registry: Arc<StrategyRegistry>,
        locale: LocaleId,
        bounds: UnitBounds,
    ) -> Self {
        Self {
            catalog,
            registry,
            locale,
            bounds,
        }
    }

    /// Built-in resources and providers, English, default bounds.
    pub fn builtin() -> Self {
        let catalog = Arc::new(ResourceCatalog::builtin());
        let lookup: Arc<dyn TextLookup> = catalog.clone();
        let registry = Arc::new(StrategyRegistry::with_builtins(lookup));
        Self::new(catalog, registry, LocaleId::english(), UnitBounds::default())
    }

    /// Built-in setup adjusted by a configuration, including an optional
    /// resource overlay file.
    pub fn from_config(config: &HumanizerConfig) -> Result<Self> {
        let catalog = Arc::new(ResourceCatalog::builtin());
        if let Some(path) = &config.catalog_path {
            catalog.load_json_file(path)?;
        }

        let lookup: Arc<dyn TextLookup> = catalog.clone();
        let registry = Arc::new(StrategyRegistry::with_builtins(lookup));
        info!(
            "Humanizer ready for locale {} ({}..{})",
            config.locale,
            config.bounds.min(),
            config.bounds.max()
        );
        Ok(Self::new(catalog, registry, config.locale.clone(), config.bounds))
    }

    /// The process-wide humanizer, built on first use.
    pub fn global() -> &'static Humanizer {
        GLOBAL.get_or_init(Self::builtin)
    }

    /// A humanizer sharing this one's catalog and registry, for another locale.
    pub fn with_locale(&self, locale: impl Into<LocaleId>) -> Self {
        Self {
            locale: locale.into(),
            ..self.clone()
        }
    }

    /// A humanizer sharing this one's catalog and registry, with other
    /// default bounds.
    pub fn with_bounds(&self, bounds: UnitBounds) -> Self {
        Self {
            bounds,
            ..self.clone()
        }
    }

    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    pub fn bounds(&self) -> UnitBounds {
        self.bounds
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    pub fn metrics(&self) -> MetricsReport {
        self.catalog.metrics().report()
    }

    fn date_time_formatter(&self) -> Option<Arc<dyn DateTimeFormatter>> {
        let formatter = self.registry.date_time_formatter(&self.locale);
        if formatter.is_none() {
            debug!("No date-time phrasing for {}, rendering nothing", self.locale);
        }
        formatter
    }

    fn phrases(&self) -> PhraseFormatter<'_> {
        PhraseFormatter::new(self.catalog.as_ref(), &self.registry, &self.locale)
    }

    // ==================== Relative Time ====================

    /// Describe `input` relative to `reference` with the default bounds.
    ///
    /// # Arguments
    /// * `input` - The moment to describe; `None` renders "never"
    /// * `reference` - The moment to compare against; `None` means now
    pub fn humanize_date(
        &self,
        input: Option<DateTime<Utc>>,
        reference: Option<DateTime<Utc>>,
    ) -> String {
        self.render_date(input, reference, &self.bounds)
    }

    /// Describe `input` relative to `reference` using units in `[min, max]`.
    ///
    /// An absent `input` renders "never" without looking at the bounds.
    ///
    /// # Returns
    /// `Err(HumanizeError::InvalidUnitBounds)` when `min` is larger than `max`.
    pub fn humanize_date_within(
        &self,
        input: Option<DateTime<Utc>>,
        reference: Option<DateTime<Utc>>,
        min: TimeUnit,
        max: TimeUnit,
    ) -> Result<String> {
        if input.is_none() {
            return Ok(self.render_date(None, reference, &self.bounds));
        }

        let bounds = UnitBounds::new(min, max)?;
        Ok(self.render_date(input, reference, &bounds))
    }

    /// Describe a signed offset (`input - reference`) with the default bounds.
    pub fn humanize_delta(&self, delta: Duration) -> String {
        match self.date_time_formatter() {
            Some(formatter) => {
                HumanizedMoment::from_delta(delta, &self.bounds).render(formatter.as_ref())
            }
            None => String::new(),
        }
    }

    fn render_date(
        &self,
        input: Option<DateTime<Utc>>,
        reference: Option<DateTime<Utc>>,
        bounds: &UnitBounds,
    ) -> String {
        let Some(formatter) = self.date_time_formatter() else {
            return String::new();
        };

        match input {
            None => formatter.never(),
            Some(input) => {
                let reference = reference.unwrap_or_else(Utc::now);
                HumanizedMoment::between(input, reference, bounds).render(formatter.as_ref())
            }
        }
    }

    /// Describe a duration in the largest unit within `[min, max]` that
    /// holds at least one whole count ("2 weeks").
    pub fn humanize_time_span(
        &self,
        duration: Duration,
        min: TimeUnit,
        max: TimeUnit,
    ) -> Result<String> {
        let bounds = UnitBounds::new(min, max)?;
        let Some(formatter) = self.date_time_formatter() else {
            return Ok(String::new());
        };

        let elapsed = Elapsed::from_duration(duration);
        let (unit, count) = largest_whole_unit(&elapsed, bounds.min(), bounds.max());
        Ok(formatter.time_span_humanize(unit, count))
    }

    // ==================== Quantities ====================

    pub fn is_plural(&self, count: f64) -> bool {
        QuantityResolver::new(&self.registry, &self.locale).is_plural(count)
    }

    /// The resource key `count` selects for `base_key`.
    pub fn count_key(&self, base_key: &str, count: f64) -> String {
        QuantityResolver::new(&self.registry, &self.locale).count_key(base_key, count)
    }

    pub fn translate_with_count(&self, base_key: &str, count: f64) -> String {
        self.phrases().translate_with_count(base_key, count)
    }

    pub fn translate_and_format_with_count(
        &self,
        base_key: &str,
        count: f64,
        format: Option<NumberFormat>,
    ) -> String {
        self.phrases()
            .translate_and_format_with_count(base_key, count, format)
    }

    /// "request" with 2 → "2 requests".
    pub fn to_quantity(
        &self,
        word: &str,
        quantity: f64,
        show: ShowQuantityAs,
        format: Option<NumberFormat>,
    ) -> String {
        self.phrases().to_quantity(word, quantity, show, format)
    }

    /// A number followed by a unit member's name: "3 h", "2.50 hours".
    ///
    /// The unit reads from its `<Type><Member>` resource. The abbreviated
    /// form is used as is; the full name is inflected for `value`. Without
    /// a `format`, integral values print with no decimals and the others
    /// with two, both with group separators.
    pub fn humanize_number_with_unit<T: HumanizeEnum>(
        &self,
        value: f64,
        unit: T,
        abbreviation: bool,
        format: Option<NumberFormat>,
    ) -> String {
        let name = humanize_enum(unit, self.catalog.as_ref(), &self.locale, abbreviation);
        let format = format.unwrap_or(if value.fract() == 0.0 {
            NumberFormat::Number(0)
        } else {
            NumberFormat::Number(2)
        });

        if abbreviation {
            format!("{} {}", format.format(value, &self.locale), name)
        } else {
            self.phrases()
                .to_quantity(&name, value, ShowQuantityAs::Numeric, Some(format))
        }
    }

    pub fn pluralize(&self, word: &str) -> String {
        match self.registry.inflector(&self.locale) {
            Some(inflector) => inflector.pluralize(word, false),
            None => word.to_string(),
        }
    }

    pub fn singularize(&self, word: &str) -> String {
        match self.registry.inflector(&self.locale) {
            Some(inflector) => inflector.singularize(word, false, false),
            None => word.to_string(),
        }
    }

    // ==================== Ordinals ====================

    pub fn ordinalize(&self, number: i64, gender: GrammaticalGender) -> String {
        let text = number.to_string();
        match self.registry.ordinalizer(&self.locale) {
            Some(ordinalizer) => ordinalizer.convert_with_gender(number, &text, gender),
            None => text,
        }
    }

    /// Ordinalize a number given as text, keeping the text as written.
    pub fn ordinalize_str(&self, number_text: &str, gender: GrammaticalGender) -> Result<String> {
        let number: i64 = number_text
            .trim()
            .parse()
            .map_err(|_| HumanizeError::InvalidNumber(number_text.to_string()))?;
        Ok(match self.registry.ordinalizer(&self.locale) {
            Some(ordinalizer) => ordinalizer.convert_with_gender(number, number_text, gender),
            None => number_text.to_string(),
        })
    }

    // ==================== Enums ====================

    pub fn humanize_enum<T: HumanizeEnum>(&self, value: T, abbreviation: bool) -> String {
        humanize_enum(value, self.catalog.as_ref(), &self.locale, abbreviation)
    }

    pub fn dehumanize_to<T: HumanizeEnum>(
        &self,
        text: &str,
        on_no_match: OnNoMatch,
    ) -> Result<Option<T>> {
        dehumanize_enum(text, self.catalog.as_ref(), &self.locale, on_no_match)
    }
}

impl Default for Humanizer {
    fn default() -> Self {
        Self::builtin()
    }
}
