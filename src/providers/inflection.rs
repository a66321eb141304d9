//! Inflection providers: plural rules and singular/plural word forms.

use crate::error::Result;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::{PoisonError, RwLock};
use tracing::warn;

/// Locale-specific pluralization strategy.
///
/// Implementations decide which counts take the plural form (dual or
/// "few/many" classes included) and how words change between forms.
pub trait Inflector: Send + Sync {
    /// Whether `count` takes the plural form.
    fn is_plural(&self, count: f64) -> bool;

    /// Pluralize `word`. When the input may already be plural, pass `false`
    /// for `input_is_known_to_be_singular` and plural input comes back as is.
    fn pluralize(&self, word: &str, input_is_known_to_be_singular: bool) -> String;

    /// Singularize `word`. `skip_simple_words` leaves words whose only plural
    /// marker would be a trailing "s" untouched.
    fn singularize(&self, word: &str, input_is_known_to_be_plural: bool, skip_simple_words: bool)
        -> String;

    /// Register an irregular singular/plural pair.
    ///
    /// With `match_ending` the pair also applies as a word ending
    /// ("person" → "salespeople" for "salesperson").
    fn add_irregular(&self, singular: &str, plural: &str, match_ending: bool);

    /// Register a word that has a single form.
    fn add_uncountable(&self, word: &str);

    /// Register a case-insensitive regex pluralization rule. Later rules win.
    fn add_plural(&self, rule: &str, replacement: &str) -> Result<()>;

    /// Register a case-insensitive regex singularization rule. Later rules win.
    fn add_singular(&self, rule: &str, replacement: &str) -> Result<()>;
}

// ==================== Vocabulary ====================

#[derive(Debug, Clone)]
struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    fn new(rule: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(&format!("(?i){}", rule))?,
            replacement: replacement.to_string(),
        })
    }

    fn apply(&self, word: &str) -> Option<String> {
        if !self.pattern.is_match(word) {
            return None;
        }
        Some(
            self.pattern
                .replace(word, self.replacement.as_str())
                .into_owned(),
        )
    }
}

/// Ordered plural/singular rewrite rules plus uncountable words.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    plurals: Vec<Rule>,
    singulars: Vec<Rule>,
    uncountables: HashSet<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_plural(&mut self, rule: &str, replacement: &str) -> Result<()> {
        self.plurals.push(Rule::new(rule, replacement)?);
        Ok(())
    }

    pub fn add_singular(&mut self, rule: &str, replacement: &str) -> Result<()> {
        self.singulars.push(Rule::new(rule, replacement)?);
        Ok(())
    }

    pub fn add_uncountable(&mut self, word: &str) {
        self.uncountables.insert(word.to_lowercase());
    }

    pub fn add_irregular(&mut self, singular: &str, plural: &str, match_ending: bool) {
        let rules = if match_ending {
            ending_rules(singular, plural)
        } else {
            (
                Rule::new(&format!("^{}$", regex::escape(singular)), plural),
                Rule::new(&format!("^{}$", regex::escape(plural)), singular),
            )
        };

        match rules {
            (Ok(plural_rule), Ok(singular_rule)) => {
                self.plurals.push(plural_rule);
                self.singulars.push(singular_rule);
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!("Skipping irregular pair {}/{}: {}", singular, plural, e);
            }
        }
    }

    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.contains(&word.to_lowercase())
    }

    pub fn pluralize(&self, word: &str, input_is_known_to_be_singular: bool) -> String {
        let result = self.apply_rules(&self.plurals, word, false);
        if input_is_known_to_be_singular {
            return result.unwrap_or_else(|| word.to_string());
        }

        let as_singular = self.apply_rules(&self.singulars, word, false);
        if let Some(singular) = &as_singular {
            let round_trip = self.apply_rules(&self.plurals, singular, false);
            if singular != word
                && format!("{}s", singular) != word
                && round_trip.as_deref() == Some(word)
                && result.as_deref() != Some(word)
            {
                return word.to_string();
            }
        }

        result.unwrap_or_else(|| word.to_string())
    }

    pub fn singularize(
        &self,
        word: &str,
        input_is_known_to_be_plural: bool,
        skip_simple_words: bool,
    ) -> String {
        let result = self.apply_rules(&self.singulars, word, skip_simple_words);
        if input_is_known_to_be_plural {
            return result.unwrap_or_else(|| word.to_string());
        }

        let as_plural = self.apply_rules(&self.plurals, word, false);
        if let Some(plural) = &as_plural {
            let round_trip = self.apply_rules(&self.singulars, plural, false);
            if plural != word
                && format!("{}s", word) != *plural
                && round_trip.as_deref() == Some(word)
                && result.as_deref() != Some(word)
            {
                return word.to_string();
            }
        }

        result.unwrap_or_else(|| word.to_string())
    }

    /// Apply the most recently added matching rule.
    fn apply_rules(&self, rules: &[Rule], word: &str, skip_first_rule: bool) -> Option<String> {
        if word.is_empty() || self.is_uncountable(word) {
            return Some(word.to_string());
        }

        let skip = usize::from(skip_first_rule);
        rules
            .iter()
            .skip(skip)
            .rev()
            .find_map(|rule| rule.apply(word))
            .map(|result| match_upper_case(word, result))
    }
}

/// Keep the original's first letter and rewrite only the rest, so the rule
/// works as a word ending and preserves casing.
fn ending_rules(singular: &str, plural: &str) -> (Result<Rule>, Result<Rule>) {
    let split = |word: &str| -> (String, String) {
        let mut chars = word.chars();
        let first = chars.next().map(String::from).unwrap_or_default();
        (first, chars.collect())
    };
    let (singular_head, singular_tail) = split(singular);
    let (plural_head, plural_tail) = split(plural);

    (
        Rule::new(
            &format!("({}){}$", regex::escape(&singular_head), regex::escape(&singular_tail)),
            &format!("${{1}}{}", plural_tail),
        ),
        Rule::new(
            &format!("({}){}$", regex::escape(&plural_head), regex::escape(&plural_tail)),
            &format!("${{1}}{}", singular_tail),
        ),
    )
}

fn match_upper_case(word: &str, result: String) -> String {
    let all_upper = word.chars().any(char::is_alphabetic)
        && word.chars().all(|c| !c.is_lowercase());
    if all_upper && word.chars().count() > 1 {
        result.to_uppercase()
    } else {
        result
    }
}

// ==================== Vocabulary Inflector ====================

/// An inflector driven by a [`Vocabulary`] and a plural rule.
pub struct VocabularyInflector {
    name: &'static str,
    vocabulary: RwLock<Vocabulary>,
    plural_rule: fn(f64) -> bool,
}

impl VocabularyInflector {
    pub fn new(name: &'static str, vocabulary: Vocabulary, plural_rule: fn(f64) -> bool) -> Self {
        Self {
            name,
            vocabulary: RwLock::new(vocabulary),
            plural_rule,
        }
    }

    /// Locale-agnostic fallback: plural when `count > 1`, words unchanged.
    pub fn neutral() -> Self {
        Self::new("neutral", Vocabulary::new(), |count| count > 1.0)
    }

    /// English: singular only for exactly one.
    pub fn english() -> Self {
        Self::new("english", english_vocabulary(), |count| {
            (count.abs() - 1.0).abs() > f64::EPSILON
        })
    }

    /// French: plural from two upwards, so 0 and 1.5 are singular.
    pub fn french() -> Self {
        Self::new("french", french_vocabulary(), |count| count.abs() >= 2.0)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for VocabularyInflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VocabularyInflector")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Inflector for VocabularyInflector {
    fn is_plural(&self, count: f64) -> bool {
        (self.plural_rule)(count)
    }

    fn pluralize(&self, word: &str, input_is_known_to_be_singular: bool) -> String {
        self.vocabulary
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .pluralize(word, input_is_known_to_be_singular)
    }

    fn singularize(
        &self,
        word: &str,
        input_is_known_to_be_plural: bool,
        skip_simple_words: bool,
    ) -> String {
        self.vocabulary
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .singularize(word, input_is_known_to_be_plural, skip_simple_words)
    }

    fn add_irregular(&self, singular: &str, plural: &str, match_ending: bool) {
        self.vocabulary
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .add_irregular(singular, plural, match_ending);
    }

    fn add_uncountable(&self, word: &str) {
        self.vocabulary
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .add_uncountable(word);
    }

    fn add_plural(&self, rule: &str, replacement: &str) -> Result<()> {
        self.vocabulary
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .add_plural(rule, replacement)
    }

    fn add_singular(&self, rule: &str, replacement: &str) -> Result<()> {
        self.vocabulary
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .add_singular(rule, replacement)
    }
}

// ==================== Built-in Vocabularies ====================

const ENGLISH_PLURALS: &[(&str, &str)] = &[
    ("$", "s"),
    ("s$", "s"),
    ("(ax|test)is$", "${1}es"),
    ("(octop|vir|alumn|fung|cact|foc|hippopotam|radi|stimul|syllab|nucle)us$", "${1}i"),
    ("(alias|bias|iris|status|campus|apparatus|virus|walrus|trellis)$", "${1}es"),
    ("(buffal|tomat|volcan|ech|embarg|her|mosquit|potat|torped|vet)o$", "${1}oes"),
    ("([dti])um$", "${1}a"),
    ("sis$", "ses"),
    ("(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    ("(hive)$", "${1}s"),
    ("([^aeiouy]|qu)y$", "${1}ies"),
    ("(x|ch|ss|sh)$", "${1}es"),
    ("(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    ("^([ml])ouse$", "${1}ice"),
    ("^(ox)$", "${1}en"),
    ("(quiz)$", "${1}zes"),
    ("(buz|blit|walt)z$", "${1}zes"),
    ("(hoo|lea|loa|thie)f$", "${1}ves"),
    ("(alumn|alg|larv|vertebr)a$", "${1}ae"),
    ("(criteri|phenomen)on$", "${1}a"),
    ("(bu)s$", "${1}ses"),
];

const ENGLISH_SINGULARS: &[(&str, &str)] = &[
    ("s$", ""),
    ("(n)ews$", "${1}ews"),
    ("([dti])a$", "${1}um"),
    (
        "(analy|ba|diagno|parenthe|progno|synop|the|ellip|empha|neuro|oa|paraly)ses$",
        "${1}sis",
    ),
    ("([^f])ves$", "${1}fe"),
    ("(hive)s$", "${1}"),
    ("(tive)s$", "${1}"),
    ("([lr]|hoo|lea|loa|thie)ves$", "${1}f"),
    ("([^aeiouy]|qu)ies$", "${1}y"),
    ("(s)eries$", "${1}eries"),
    ("(m)ovies$", "${1}ovie"),
    ("(x|ch|ss|sh)es$", "${1}"),
    ("^([ml])ice$", "${1}ouse"),
    ("(o)es$", "${1}"),
    ("(shoe)s$", "${1}"),
    ("(cris|ax|test)es$", "${1}is"),
    ("(octop|vir|alumn|fung|cact|foc|hippopotam|radi|stimul|syllab|nucle)i$", "${1}us"),
    ("(alias|bias|iris|status|campus|apparatus|virus|walrus|trellis)es$", "${1}"),
    ("^(ox)en", "${1}"),
    ("(matr)ices$", "${1}ix"),
    ("(vert|ind)ices$", "${1}ex"),
    ("(quiz)zes$", "${1}"),
    ("(buz|blit|walt)zes$", "${1}z"),
    ("(alumn|alg|larv|vertebr)ae$", "${1}a"),
    ("(criteri|phenomen)a$", "${1}on"),
    ("([bcr]ook|room|smooth)ies$", "${1}ie"),
    ("(bus)es$", "${1}"),
];

const ENGLISH_IRREGULARS: &[(&str, &str, bool)] = &[
    ("person", "people", true),
    ("man", "men", true),
    ("human", "humans", true),
    ("child", "children", true),
    ("sex", "sexes", true),
    ("glove", "gloves", true),
    ("move", "moves", true),
    ("goose", "geese", true),
    ("wave", "waves", true),
    ("foot", "feet", true),
    ("tooth", "teeth", true),
    ("curriculum", "curricula", true),
    ("database", "databases", true),
    ("zombie", "zombies", true),
    ("is", "are", false),
    ("that", "those", false),
    ("this", "these", false),
    ("die", "dice", false),
];

const ENGLISH_UNCOUNTABLES: &[&str] = &[
    "aircraft", "bison", "corps", "deer", "elk", "equipment", "fish", "grass", "hair",
    "information", "luggage", "mail", "means", "money", "moose", "mud", "offspring", "rice",
    "salmon", "scissors", "series", "sheep", "shrimp", "species", "swine", "trout", "tuna",
    "water",
];

const FRENCH_PLURALS: &[(&str, &str)] = &[
    ("$", "s"),
    ("(s|x|z)$", "${1}"),
    ("al$", "aux"),
    ("(eau|eu)$", "${1}x"),
];

const FRENCH_SINGULARS: &[(&str, &str)] = &[
    ("s$", ""),
    ("aux$", "al"),
    ("(eau|eu)x$", "${1}"),
];

const FRENCH_IRREGULARS: &[(&str, &str, bool)] = &[
    ("œil", "yeux", false),
    ("ciel", "cieux", false),
    ("bal", "bals", true),
    ("carnaval", "carnavals", true),
    ("festival", "festivals", true),
    ("pneu", "pneus", true),
    ("bleu", "bleus", true),
    ("bijou", "bijoux", true),
    ("caillou", "cailloux", true),
    ("chou", "choux", true),
    ("genou", "genoux", true),
    ("hibou", "hiboux", true),
    ("pou", "poux", false),
    ("travail", "travaux", true),
    ("vitrail", "vitraux", true),
    ("corail", "coraux", true),
    ("tuyau", "tuyaux", true),
    ("noyau", "noyaux", true),
    ("joyau", "joyaux", true),
];

const FRENCH_UNCOUNTABLES: &[&str] = &[
    "bras", "choix", "corps", "dos", "fils", "fois", "mois", "nez", "os", "pays", "poids",
    "prix", "repas", "souris", "temps", "voix",
];

fn build_vocabulary(
    plurals: &[(&str, &str)],
    singulars: &[(&str, &str)],
    irregulars: &[(&str, &str, bool)],
    uncountables: &[&str],
) -> Vocabulary {
    let mut vocabulary = Vocabulary::new();
    for (rule, replacement) in plurals {
        if let Err(e) = vocabulary.add_plural(rule, replacement) {
            warn!("Skipping built-in plural rule {}: {}", rule, e);
        }
    }
    for (rule, replacement) in singulars {
        if let Err(e) = vocabulary.add_singular(rule, replacement) {
            warn!("Skipping built-in singular rule {}: {}", rule, e);
        }
    }
    for (singular, plural, match_ending) in irregulars {
        vocabulary.add_irregular(singular, plural, *match_ending);
    }
    for word in uncountables {
        vocabulary.add_uncountable(word);
    }
    vocabulary
}

pub fn english_vocabulary() -> Vocabulary {
    build_vocabulary(
        ENGLISH_PLURALS,
        ENGLISH_SINGULARS,
        ENGLISH_IRREGULARS,
        ENGLISH_UNCOUNTABLES,
    )
}

pub fn french_vocabulary() -> Vocabulary {
    build_vocabulary(
        FRENCH_PLURALS,
        FRENCH_SINGULARS,
        FRENCH_IRREGULARS,
        FRENCH_UNCOUNTABLES,
    )
}
