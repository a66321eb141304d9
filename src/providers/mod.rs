//! Capability providers: the strategies a locale can bind.
//!
//! - `inflection`: plural rules and word forms
//! - `ordinal`: ordinal suffixes
//! - `datetime`: relative-time and duration phrasing

mod datetime;
mod inflection;
mod ordinal;

pub use datetime::{DateTimeFormatter, ResourceDateTimeFormatter};
pub use inflection::{
    english_vocabulary, french_vocabulary, Inflector, Vocabulary, VocabularyInflector,
};
pub use ordinal::{
    DefaultOrdinalizer, EnglishOrdinalizer, FrenchOrdinalizer, GrammaticalGender, Ordinalizer,
};
