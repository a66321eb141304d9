//! Error types for the humanization library.
//!
//! Only hard failures live here. A missing capability provider is not an
//! error: callers get an empty string or the untransformed input back.

use crate::relative_time::TimeUnit;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, HumanizeError>;

#[derive(Debug, Error)]
pub enum HumanizeError {
    /// `min` is ordered after `max` in the `TimeUnit` ordering.
    #[error("invalid unit bounds: minimum {min:?} is larger than maximum {max:?}")]
    InvalidUnitBounds { min: TimeUnit, max: TimeUnit },

    /// Dehumanization found no symbol matching the input.
    #[error("couldn't find any {target} member that matches the string '{input}'")]
    NoMatch { input: String, target: &'static str },

    #[error("invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("invalid numeric format string: '{0}'")]
    InvalidNumberFormat(String),

    #[error("invalid locale identifier: '{0}'")]
    InvalidLocale(String),

    #[error("unknown time unit: '{0}'")]
    UnknownTimeUnit(String),

    #[error("invalid inflection rule: {0}")]
    InvalidInflectionRule(#[from] regex::Error),

    #[error("failed to parse resource catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("failed to read resource catalog: {0}")]
    Io(#[from] std::io::Error),
}
