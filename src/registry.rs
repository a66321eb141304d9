//! Strategy registry: per-locale capability providers with default fallback.
//!
//! Bindings live in an immutable `BindingTable` behind `RwLock<Arc<_>>`.
//! Writers clone the table, modify the copy and swap it in, so a reader
//! holding a snapshot never observes a partial update.

use crate::i18n::{LocaleId, TextLookup};
use crate::providers::{
    DateTimeFormatter, DefaultOrdinalizer, EnglishOrdinalizer, FrenchOrdinalizer, Inflector,
    Ordinalizer, ResourceDateTimeFormatter, VocabularyInflector,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::{debug, info};

/// The formatting concerns a locale can bind a provider for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CapabilityKind {
    Inflection,
    Ordinal,
    DateTimePhrasing,
}

impl CapabilityKind {
    pub const ALL: [CapabilityKind; 3] = [
        CapabilityKind::Inflection,
        CapabilityKind::Ordinal,
        CapabilityKind::DateTimePhrasing,
    ];
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CapabilityKind::Inflection => "Inflection",
            CapabilityKind::Ordinal => "Ordinal",
            CapabilityKind::DateTimePhrasing => "DateTimePhrasing",
        };
        write!(f, "{}", name)
    }
}

/// A provider for exactly one capability kind.
#[derive(Clone)]
pub enum Provider {
    Inflection(Arc<dyn Inflector>),
    Ordinal(Arc<dyn Ordinalizer>),
    DateTimePhrasing(Arc<dyn DateTimeFormatter>),
}

impl Provider {
    pub fn kind(&self) -> CapabilityKind {
        match self {
            Provider::Inflection(_) => CapabilityKind::Inflection,
            Provider::Ordinal(_) => CapabilityKind::Ordinal,
            Provider::DateTimePhrasing(_) => CapabilityKind::DateTimePhrasing,
        }
    }

    pub fn as_inflector(&self) -> Option<Arc<dyn Inflector>> {
        match self {
            Provider::Inflection(inflector) => Some(Arc::clone(inflector)),
            _ => None,
        }
    }

    pub fn as_ordinalizer(&self) -> Option<Arc<dyn Ordinalizer>> {
        match self {
            Provider::Ordinal(ordinalizer) => Some(Arc::clone(ordinalizer)),
            _ => None,
        }
    }

    pub fn as_date_time_formatter(&self) -> Option<Arc<dyn DateTimeFormatter>> {
        match self {
            Provider::DateTimePhrasing(formatter) => Some(Arc::clone(formatter)),
            _ => None,
        }
    }

    /// Whether both values hold the same provider instance.
    pub fn same_instance(&self, other: &Provider) -> bool {
        match (self, other) {
            (Provider::Inflection(a), Provider::Inflection(b)) => Arc::ptr_eq(a, b),
            (Provider::Ordinal(a), Provider::Ordinal(b)) => Arc::ptr_eq(a, b),
            (Provider::DateTimePhrasing(a), Provider::DateTimePhrasing(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Provider({})", self.kind())
    }
}

impl From<Arc<dyn Inflector>> for Provider {
    fn from(inflector: Arc<dyn Inflector>) -> Self {
        Provider::Inflection(inflector)
    }
}

impl From<Arc<dyn Ordinalizer>> for Provider {
    fn from(ordinalizer: Arc<dyn Ordinalizer>) -> Self {
        Provider::Ordinal(ordinalizer)
    }
}

impl From<Arc<dyn DateTimeFormatter>> for Provider {
    fn from(formatter: Arc<dyn DateTimeFormatter>) -> Self {
        Provider::DateTimePhrasing(formatter)
    }
}

/// One immutable snapshot of all bindings.
#[derive(Debug, Clone, Default)]
struct BindingTable {
    defaults: HashMap<CapabilityKind, Provider>,
    locales: HashMap<(LocaleId, CapabilityKind), Provider>,
}

/// Registry of capability providers keyed by (locale, kind).
///
/// Resolution walks the locale's fallback chain ("fr-FR" → "fr"), then the
/// default for the kind. With neither bound, resolution yields `None` and
/// callers degrade to an empty or untransformed result.
pub struct StrategyRegistry {
    table: RwLock<Arc<BindingTable>>,
    initialized: OnceLock<()>,
}

impl StrategyRegistry {
    /// Create a registry with no bindings at all.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Arc::new(BindingTable::default())),
            initialized: OnceLock::new(),
        }
    }

    /// Create a registry holding the built-in providers.
    pub fn with_builtins(lookup: Arc<dyn TextLookup>) -> Self {
        let registry = Self::new();
        registry.initialize(lookup);
        registry
    }

    /// Install the built-in defaults plus English and French bindings.
    ///
    /// Runs at most once per registry; later calls (concurrent ones
    /// included) return without touching the table.
    ///
    /// # Returns
    /// `true` if this call performed the initialization.
    pub fn initialize(&self, lookup: Arc<dyn TextLookup>) -> bool {
        let mut ran = false;
        self.initialized.get_or_init(|| {
            install_builtins(self, lookup);
            ran = true;
        });
        ran
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get().is_some()
    }

    /// Install the fallback provider for the provider's kind. Last write wins.
    pub fn register_default(&self, provider: impl Into<Provider>) {
        let provider = provider.into();
        let kind = provider.kind();
        self.update(|table| {
            table.defaults.insert(kind, provider);
        });
        debug!("Registered default {} provider", kind);
    }

    /// Bind a provider for one locale, replacing any prior binding of the
    /// same kind.
    ///
    /// # Returns
    /// A handle for chaining further bindings for the same locale.
    pub fn register_for_locale(
        &self,
        locale: impl Into<LocaleId>,
        provider: impl Into<Provider>,
    ) -> LocaleBindings<'_> {
        let bindings = LocaleBindings {
            registry: self,
            locale: locale.into(),
        };
        bindings.with(provider)
    }

    /// Find the provider for `locale` and `kind`.
    ///
    /// # Returns
    /// * The provider bound to the locale or its nearest ancestor
    /// * Otherwise the default for `kind`
    /// * `None` when neither exists
    pub fn resolve(&self, locale: &LocaleId, kind: CapabilityKind) -> Option<Provider> {
        let table = self.snapshot();

        let bound = locale
            .fallback_chain()
            .into_iter()
            .find_map(|candidate| table.locales.get(&(candidate, kind)).cloned());
        if bound.is_some() {
            return bound;
        }

        let default = table.defaults.get(&kind).cloned();
        if default.is_none() {
            debug!("No {} provider for locale {} and no default", kind, locale);
        }
        default
    }

    pub fn inflector(&self, locale: &LocaleId) -> Option<Arc<dyn Inflector>> {
        self.resolve(locale, CapabilityKind::Inflection)
            .and_then(|provider| provider.as_inflector())
    }

    pub fn ordinalizer(&self, locale: &LocaleId) -> Option<Arc<dyn Ordinalizer>> {
        self.resolve(locale, CapabilityKind::Ordinal)
            .and_then(|provider| provider.as_ordinalizer())
    }

    pub fn date_time_formatter(&self, locale: &LocaleId) -> Option<Arc<dyn DateTimeFormatter>> {
        self.resolve(locale, CapabilityKind::DateTimePhrasing)
            .and_then(|provider| provider.as_date_time_formatter())
    }

    /// Locales with at least one binding, sorted.
    pub fn bound_locales(&self) -> Vec<LocaleId> {
        let table = self.snapshot();
        let mut locales: Vec<LocaleId> = table
            .locales
            .keys()
            .map(|(locale, _)| locale.clone())
            .collect();
        locales.sort();
        locales.dedup();
        locales
    }

    fn snapshot(&self) -> Arc<BindingTable> {
        let guard = self.table.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    fn update(&self, change: impl FnOnce(&mut BindingTable)) {
        let mut guard = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = BindingTable::clone(&guard);
        change(&mut next);
        *guard = Arc::new(next);
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.snapshot();
        f.debug_struct("StrategyRegistry")
            .field("defaults", &table.defaults.len())
            .field("bindings", &table.locales.len())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

/// Chaining handle returned by [`StrategyRegistry::register_for_locale`].
pub struct LocaleBindings<'a> {
    registry: &'a StrategyRegistry,
    locale: LocaleId,
}

impl<'a> LocaleBindings<'a> {
    /// Bind another provider for the same locale.
    pub fn with(self, provider: impl Into<Provider>) -> Self {
        let provider = provider.into();
        let kind = provider.kind();
        let key = (self.locale.clone(), kind);
        self.registry.update(|table| {
            table.locales.insert(key, provider);
        });
        debug!("Registered {} provider for locale {}", kind, self.locale);
        self
    }

    pub fn inflector(self, inflector: impl Inflector + 'static) -> Self {
        let inflector: Arc<dyn Inflector> = Arc::new(inflector);
        self.with(inflector)
    }

    pub fn ordinalizer(self, ordinalizer: impl Ordinalizer + 'static) -> Self {
        let ordinalizer: Arc<dyn Ordinalizer> = Arc::new(ordinalizer);
        self.with(ordinalizer)
    }

    pub fn date_time_formatter(self, formatter: impl DateTimeFormatter + 'static) -> Self {
        let formatter: Arc<dyn DateTimeFormatter> = Arc::new(formatter);
        self.with(formatter)
    }

    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }
}

fn install_builtins(registry: &StrategyRegistry, lookup: Arc<dyn TextLookup>) {
    let neutral: Arc<dyn Inflector> = Arc::new(VocabularyInflector::neutral());
    let english: Arc<dyn Inflector> = Arc::new(VocabularyInflector::english());
    let french: Arc<dyn Inflector> = Arc::new(VocabularyInflector::french());

    let formatter =
        |locale: LocaleId, inflector: &Arc<dyn Inflector>| -> Arc<dyn DateTimeFormatter> {
            Arc::new(ResourceDateTimeFormatter::new(
                locale,
                Arc::clone(&lookup),
                Arc::clone(inflector),
            ))
        };

    let default_ordinalizer: Arc<dyn Ordinalizer> = Arc::new(DefaultOrdinalizer);
    registry.register_default(Arc::clone(&neutral));
    registry.register_default(default_ordinalizer);
    registry.register_default(formatter(LocaleId::invariant(), &neutral));

    let english_formatter = formatter(LocaleId::english(), &english);
    registry
        .register_for_locale(LocaleId::english(), Arc::clone(&english))
        .ordinalizer(EnglishOrdinalizer)
        .with(english_formatter);

    let french_formatter = formatter(LocaleId::french(), &french);
    registry
        .register_for_locale(LocaleId::french(), Arc::clone(&french))
        .ordinalizer(FrenchOrdinalizer)
        .with(french_formatter);

    info!(
        "Strategy registry initialized: {} locale(s) bound",
        registry.bound_locales().len()
    );
}
