//! Locale-aware humanization of relative times, quantities, ordinals and
//! enum members.
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use locale_humanizer::Humanizer;
//!
//! let humanizer = Humanizer::builtin();
//! let reference = Utc.with_ymd_and_hms(2013, 6, 20, 9, 58, 22).unwrap();
//!
//! let past = reference - Duration::seconds(10);
//! assert_eq!(humanizer.humanize_date(Some(past), Some(reference)), "10 seconds ago");
//!
//! let french = humanizer.with_locale("fr");
//! assert_eq!(french.humanize_date(Some(reference - Duration::days(1)), Some(reference)), "hier");
//! ```

pub mod config;
pub mod enums;
pub mod error;
pub mod humanizer;
pub mod i18n;
pub mod phrase;
pub mod providers;
pub mod quantity;
pub mod registry;
pub mod relative_time;
pub mod text;

pub use config::HumanizerConfig;
pub use enums::{HumanizeEnum, OnNoMatch};
pub use error::{HumanizeError, Result};
pub use humanizer::Humanizer;
pub use i18n::{LocaleId, ResourceCatalog, TextLookup};
pub use phrase::{NumberFormat, ShowQuantityAs};
pub use providers::GrammaticalGender;
pub use registry::{CapabilityKind, Provider, StrategyRegistry};
pub use relative_time::{HumanizedMoment, Tense, TimeUnit, UnitBounds};
