//! Enum humanization and dehumanization.

use crate::error::{HumanizeError, Result};
use crate::i18n::{LocaleId, TextLookup};
use crate::providers::GrammaticalGender;
use crate::relative_time::{Tense, TimeUnit};
use crate::text::humanize_identifier;
use tracing::trace;

/// An enum whose members can be rendered as text and recovered from it.
pub trait HumanizeEnum: Sized + Copy + 'static {
    /// Type name, the prefix of the members' resource keys.
    const TYPE_NAME: &'static str;

    /// Every member, in declaration order.
    fn variants() -> &'static [Self];

    /// The member's identifier ("DateTimePhrasing").
    fn variant_name(&self) -> &'static str;

    /// Fixed text that overrides translation, if any.
    fn description(&self) -> Option<&'static str> {
        None
    }

    /// Resource key of the member: type name followed by member name.
    fn resource_key(&self) -> String {
        format!("{}{}", Self::TYPE_NAME, self.variant_name())
    }
}

/// What dehumanization does when no member matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnNoMatch {
    /// Return `HumanizeError::NoMatch`.
    ReturnsError,
    /// Return `Ok(None)`.
    #[default]
    ReturnsNone,
}

/// Render an enum member.
///
/// Resolution order: the member's description, then its translated
/// `<Type><Member>` resource (abbreviated form first when asked), then the
/// humanized identifier.
pub fn humanize_enum<T: HumanizeEnum>(
    value: T,
    lookup: &dyn TextLookup,
    locale: &LocaleId,
    abbreviation: bool,
) -> String {
    if let Some(description) = value.description() {
        return description.to_string();
    }

    let key = value.resource_key();
    let text = if abbreviation {
        lookup.lookup_abbreviated(&key, locale)
    } else {
        lookup.lookup(&key, locale)
    };

    if text == key {
        humanize_identifier(value.variant_name())
    } else {
        text
    }
}

/// Recover the enum member whose identifier or humanized text equals
/// `input`, ignoring case.
///
/// # Returns
/// * `Ok(Some(member))` on a match
/// * `Ok(None)` without a match under `OnNoMatch::ReturnsNone`
/// * `Err(HumanizeError::NoMatch)` without a match under `OnNoMatch::ReturnsError`
pub fn dehumanize_enum<T: HumanizeEnum>(
    input: &str,
    lookup: &dyn TextLookup,
    locale: &LocaleId,
    on_no_match: OnNoMatch,
) -> Result<Option<T>> {
    let needle = input.trim().to_lowercase();
    let found = T::variants().iter().copied().find(|value| {
        value.variant_name().to_lowercase() == needle
            || humanize_enum(*value, lookup, locale, false).to_lowercase() == needle
    });

    match (found, on_no_match) {
        (Some(value), _) => Ok(Some(value)),
        (None, OnNoMatch::ReturnsNone) => {
            trace!("No {} member matches '{}'", T::TYPE_NAME, input);
            Ok(None)
        }
        (None, OnNoMatch::ReturnsError) => Err(HumanizeError::NoMatch {
            input: input.to_string(),
            target: T::TYPE_NAME,
        }),
    }
}

// ==================== Built-in Enums ====================

impl HumanizeEnum for TimeUnit {
    const TYPE_NAME: &'static str = "TimeUnit";

    fn variants() -> &'static [Self] {
        &TimeUnit::ALL
    }

    fn variant_name(&self) -> &'static str {
        self.name()
    }
}

impl HumanizeEnum for Tense {
    const TYPE_NAME: &'static str = "Tense";

    fn variants() -> &'static [Self] {
        &[Tense::Future, Tense::Past]
    }

    fn variant_name(&self) -> &'static str {
        self.name()
    }
}

impl HumanizeEnum for GrammaticalGender {
    const TYPE_NAME: &'static str = "GrammaticalGender";

    fn variants() -> &'static [Self] {
        &GrammaticalGender::ALL
    }

    fn variant_name(&self) -> &'static str {
        self.name()
    }
}
