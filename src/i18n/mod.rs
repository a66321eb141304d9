//! Internationalization (i18n) module: locales and localized resources.
//!
//! # Architecture
//!
//! - `locale`: Normalised locale identifiers, their fallback chain and number symbols
//! - `strings`: Built-in resource tables (English as neutral, French)
//! - `catalog`: The `TextLookup` seam and the in-memory `ResourceCatalog`
//! - `metrics`: Lookup hit/fallback/miss counters
//!
//! # Example
//!
//! ```rust
//! use locale_humanizer::i18n::{LocaleId, ResourceCatalog, TextLookup};
//!
//! let catalog = ResourceCatalog::builtin();
//! let french = LocaleId::new("fr_FR");
//!
//! assert_eq!(french.code(), "fr-FR");
//! assert_eq!(catalog.lookup("DateTimeNever", &french), "jamais");
//! ```

mod catalog;
mod locale;
mod metrics;
mod strings;

pub use catalog::{ResourceCatalog, TextLookup, ABBREVIATION_SUFFIX};
pub use locale::{LocaleId, NumberSymbols};
pub use metrics::{LookupMetrics, MetricsReport};
pub use strings::{ResourceTable, ENGLISH_RESOURCES, FRENCH_RESOURCES};
