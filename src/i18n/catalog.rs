//! Text lookup: resolves resource keys to localized templates.
//!
//! `TextLookup` is the seam the rest of the crate reads phrases through.
//! `ResourceCatalog` is the in-memory implementation, seeded with the
//! built-in tables and extendable with JSON overlays.

use super::metrics::LookupMetrics;
use super::strings::{ResourceTable, ENGLISH_RESOURCES, FRENCH_RESOURCES};
use super::LocaleId;
use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info, trace};

/// Suffix appended to a key to find its abbreviated form.
pub const ABBREVIATION_SUFFIX: &str = "Abbreviation";

/// Key → localized text lookup service.
pub trait TextLookup: Send + Sync {
    /// Resolve `key` for `locale`.
    ///
    /// # Returns
    /// The localized template, or `key` itself (unchanged) when no
    /// translation exists. Callers compare against the key to detect a miss.
    fn lookup(&self, key: &str, locale: &LocaleId) -> String;

    /// Resolve the abbreviated form of `key`, falling back to the full form.
    fn lookup_abbreviated(&self, key: &str, locale: &LocaleId) -> String {
        let abbreviated_key = format!("{}{}", key, ABBREVIATION_SUFFIX);
        let text = self.lookup(&abbreviated_key, locale);
        if text == abbreviated_key {
            self.lookup(key, locale)
        } else {
            text
        }
    }
}

type LocaleTables = HashMap<LocaleId, HashMap<String, String>>;

/// In-memory resource tables keyed by locale.
///
/// Lookups walk the locale's fallback chain ("fr-CA" → "fr" → invariant) and
/// return the first table entry found.
#[derive(Debug)]
pub struct ResourceCatalog {
    tables: RwLock<LocaleTables>,
    metrics: LookupMetrics,
}

impl ResourceCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            metrics: LookupMetrics::new(),
        }
    }

    /// Create a catalog holding the built-in English (also neutral) and
    /// French tables.
    pub fn builtin() -> Self {
        let catalog = Self::new();
        catalog.insert_table(&LocaleId::invariant(), ENGLISH_RESOURCES);
        catalog.insert_table(&LocaleId::english(), ENGLISH_RESOURCES);
        catalog.insert_table(&LocaleId::french(), FRENCH_RESOURCES);
        catalog
    }

    /// Add or overwrite a single entry.
    pub fn insert(&self, locale: &LocaleId, key: &str, text: &str) {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        tables
            .entry(locale.clone())
            .or_default()
            .insert(key.to_string(), text.to_string());
    }

    /// Add or overwrite every entry of a static table.
    pub fn insert_table(&self, locale: &LocaleId, table: ResourceTable) {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        let entries = tables.entry(locale.clone()).or_default();
        for (key, text) in table {
            entries.insert((*key).to_string(), (*text).to_string());
        }
    }

    /// Merge a JSON overlay of the shape `{ "<locale>": { "<key>": "<text>" } }`.
    ///
    /// An empty locale name addresses the neutral table.
    ///
    /// # Returns
    /// The number of entries merged.
    pub fn extend_from_json(&self, json: &str) -> Result<usize> {
        let overlay: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;
        let overlay: Vec<(LocaleId, HashMap<String, String>)> = overlay
            .into_iter()
            .map(|(code, entries)| (LocaleId::new(&code), entries))
            .collect();

        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        let mut merged = 0;
        for (locale, entries) in overlay {
            debug!("Merging {} resource entries for locale {}", entries.len(), locale);
            merged += entries.len();
            tables.entry(locale).or_default().extend(entries);
        }

        Ok(merged)
    }

    /// Read a JSON overlay from disk and merge it.
    pub fn load_json_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let merged = self.extend_from_json(&contents)?;
        info!("Loaded {} resource entries from {}", merged, path.display());
        Ok(merged)
    }

    /// Find a translation, walking the locale's fallback chain.
    ///
    /// # Returns
    /// * `Some(text)` from the first table in the chain that has the key
    /// * `None` when no table has it
    pub fn get(&self, key: &str, locale: &LocaleId) -> Option<String> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);

        for (depth, candidate) in locale.fallback_chain().iter().enumerate() {
            if let Some(text) = tables.get(candidate).and_then(|entries| entries.get(key)) {
                if depth == 0 {
                    self.metrics.record_hit();
                } else {
                    trace!("Resource '{}' for {} resolved from {}", key, locale, candidate);
                    self.metrics.record_fallback();
                }
                return Some(text.clone());
            }
        }

        self.metrics.record_miss();
        None
    }

    /// Locales that currently have a table.
    pub fn locales(&self) -> Vec<LocaleId> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        let mut locales: Vec<LocaleId> = tables.keys().cloned().collect();
        locales.sort();
        locales
    }

    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TextLookup for ResourceCatalog {
    fn lookup(&self, key: &str, locale: &LocaleId) -> String {
        match self.get(key, locale) {
            Some(text) => text,
            None => {
                trace!("No translation for '{}' in {}", key, locale);
                key.to_string()
            }
        }
    }
}
