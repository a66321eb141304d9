//! Quantity resolution: which form of a count-dependent phrase applies.
//!
//! Keys branch three ways. A count indistinguishable from zero selects
//! `<key>Zero`; otherwise the locale's inflection provider decides between
//! `<key>Plural` and the bare (singular) key.

use crate::i18n::{LocaleId, TextLookup};
use crate::providers::Inflector;
use crate::registry::StrategyRegistry;
use tracing::trace;

pub const ZERO_SUFFIX: &str = "Zero";
pub const PLURAL_SUFFIX: &str = "Plural";

/// Counts closer to zero than this select the zero form.
pub const ZERO_EPSILON: f64 = 1e-9;

/// Plural rule used when no inflection provider is bound.
pub fn default_is_plural(count: f64) -> bool {
    count > 1.0
}

/// The form a count selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityForm {
    Zero,
    Singular,
    Plural,
}

impl QuantityForm {
    /// Classify `count`, deferring the plural decision to `inflector` when
    /// one is given.
    pub fn classify(count: f64, inflector: Option<&dyn Inflector>) -> Self {
        if count.abs() < ZERO_EPSILON {
            return QuantityForm::Zero;
        }
        Self::non_zero(count, inflector)
    }

    fn non_zero(count: f64, inflector: Option<&dyn Inflector>) -> Self {
        let plural = match inflector {
            Some(inflector) => inflector.is_plural(count),
            None => default_is_plural(count),
        };
        if plural {
            QuantityForm::Plural
        } else {
            QuantityForm::Singular
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            QuantityForm::Zero => ZERO_SUFFIX,
            QuantityForm::Singular => "",
            QuantityForm::Plural => PLURAL_SUFFIX,
        }
    }

    /// Compose the resource key for this form.
    pub fn key(&self, base_key: &str) -> String {
        format!("{}{}", base_key, self.suffix())
    }

    /// Look up the template for `count`.
    ///
    /// A zero key with no translation falls back to the key the inflection
    /// rule picks for the same count, so locales need not define zero forms.
    pub fn resolve_template(
        lookup: &dyn TextLookup,
        locale: &LocaleId,
        base_key: &str,
        count: f64,
        inflector: Option<&dyn Inflector>,
    ) -> String {
        let form = Self::classify(count, inflector);
        let key = form.key(base_key);
        let text = lookup.lookup(&key, locale);
        if form != QuantityForm::Zero || text != key {
            return text;
        }

        let fallback = Self::non_zero(count, inflector).key(base_key);
        trace!("No zero form for '{}' in {}, using '{}'", base_key, locale, fallback);
        lookup.lookup(&fallback, locale)
    }
}

/// Resolves plural decisions through a registry for one locale.
#[derive(Debug, Clone, Copy)]
pub struct QuantityResolver<'a> {
    registry: &'a StrategyRegistry,
    locale: &'a LocaleId,
}

impl<'a> QuantityResolver<'a> {
    pub fn new(registry: &'a StrategyRegistry, locale: &'a LocaleId) -> Self {
        Self { registry, locale }
    }

    /// Whether `count` takes the plural form in this locale.
    ///
    /// Uses the bound inflection provider, or `count > 1` without one.
    pub fn is_plural(&self, count: f64) -> bool {
        match self.registry.inflector(self.locale) {
            Some(inflector) => inflector.is_plural(count),
            None => default_is_plural(count),
        }
    }

    pub fn form(&self, count: f64) -> QuantityForm {
        let inflector = self.registry.inflector(self.locale);
        QuantityForm::classify(count, inflector.as_deref())
    }

    /// Compose `base_key` with the suffix `count` selects.
    pub fn count_key(&self, base_key: &str, count: f64) -> String {
        self.form(count).key(base_key)
    }

    /// Look up the template for `count`, with the zero-form fallback.
    pub fn template(&self, lookup: &dyn TextLookup, base_key: &str, count: f64) -> String {
        let inflector = self.registry.inflector(self.locale);
        QuantityForm::resolve_template(lookup, self.locale, base_key, count, inflector.as_deref())
    }
}
