use crate::i18n::LocaleId;
use crate::relative_time::{TimeUnit, UnitBounds};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct HumanizerConfig {
    // Locale
    pub locale: LocaleId,

    // Relative time
    pub bounds: UnitBounds,

    // Resources
    pub catalog_path: Option<PathBuf>,
}

impl HumanizerConfig {
    /// Load configuration from `HUMANIZER_*` environment variables.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from any variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Locale
        let locale = match var("HUMANIZER_LOCALE") {
            Some(code) => LocaleId::parse(&code).context("HUMANIZER_LOCALE is not a valid locale")?,
            None => LocaleId::english(),
        };

        // Relative time
        let min_unit: TimeUnit = var("HUMANIZER_MIN_UNIT")
            .map(|v| v.parse::<TimeUnit>())
            .transpose()
            .context("HUMANIZER_MIN_UNIT is not a time unit")?
            .unwrap_or(TimeUnit::Second);
        let max_unit: TimeUnit = var("HUMANIZER_MAX_UNIT")
            .map(|v| v.parse::<TimeUnit>())
            .transpose()
            .context("HUMANIZER_MAX_UNIT is not a time unit")?
            .unwrap_or(TimeUnit::Year);
        let bounds = UnitBounds::new(min_unit, max_unit)
            .context("HUMANIZER_MIN_UNIT must not be larger than HUMANIZER_MAX_UNIT")?;

        // Resources
        let catalog_path = var("HUMANIZER_CATALOG")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            locale,
            bounds,
            catalog_path,
        })
    }
}

impl Default for HumanizerConfig {
    fn default() -> Self {
        Self {
            locale: LocaleId::english(),
            bounds: UnitBounds::default(),
            catalog_path: None,
        }
    }
}
