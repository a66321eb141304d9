//! Identifier humanization: "PascalCaseName" → "Pascal case name".
//!
//! Used as the last resort when an enum member has neither a description
//! nor a translated name.

/// Turn an identifier into a sentence.
///
/// - All-capital input (an acronym) is returned unchanged
/// - `snake_case` and `kebab-case` become space separated words, casing kept
/// - PascalCase is split into words, lowercased except for acronyms, and
///   the first letter capitalized
pub fn humanize_identifier(input: &str) -> String {
    if input.chars().all(char::is_uppercase) {
        return input.to_string();
    }

    if has_freestanding_separator(input) {
        return from_pascal_case(&from_separated_words(input));
    }

    if input.contains('_') || input.contains('-') {
        from_separated_words(input)
    } else {
        from_pascal_case(input)
    }
}

/// A dash or underscore touching whitespace ("a - b", "x_ y").
fn has_freestanding_separator(input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    chars.windows(2).any(|pair| {
        let (a, b) = (pair[0], pair[1]);
        (a.is_whitespace() && is_separator(b)) || (is_separator(a) && b.is_whitespace())
    })
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-'
}

fn from_separated_words(input: &str) -> String {
    input.split(is_separator).collect::<Vec<_>>().join(" ")
}

fn from_pascal_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let words: Vec<String> = word_parts(&chars)
        .into_iter()
        .map(|(start, end)| {
            let word: String = chars[start..end].iter().collect();
            let all_upper = word.chars().all(char::is_uppercase);
            let after_space = start > 0 && chars[start - 1] == ' ';
            if all_upper && (end - start > 1 || after_space || word == "I") {
                word
            } else {
                word.to_lowercase()
            }
        })
        .collect();

    let sentence = words.join(" ");
    let mut letters = sentence.chars();
    match letters.next() {
        Some(first) => first.to_uppercase().chain(letters).collect(),
        None => sentence,
    }
}

/// Char ranges of the words in a PascalCase identifier.
fn word_parts(chars: &[char]) -> Vec<(usize, usize)> {
    let take_while = |mut i: usize, pred: fn(char) -> bool| {
        while i < chars.len() && pred(chars[i]) {
            i += 1;
        }
        i
    };

    let mut parts = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let start = i;

        let end = if c.is_uppercase() {
            let run_end = take_while(i, char::is_uppercase);
            if run_end - start == 1 {
                take_while(run_end, char::is_lowercase)
            } else if run_end < chars.len() && chars[run_end].is_lowercase() {
                // "HTMLParser": the last capital starts the next word
                run_end - 1
            } else {
                run_end
            }
        } else if c.is_lowercase() {
            take_while(i, char::is_lowercase)
        } else if c.is_ascii_digit() {
            let digits_end = take_while(i, |c: char| c.is_ascii_digit());
            take_while(digits_end, char::is_lowercase)
        } else if c.is_alphabetic() {
            take_while(i, |c: char| c.is_alphabetic() && !c.is_uppercase() && !c.is_lowercase())
        } else {
            i += 1;
            continue;
        };

        parts.push((start, end));
        i = end;
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(
            humanize_identifier("PascalCaseInputStringIsTurnedIntoSentence"),
            "Pascal case input string is turned into sentence"
        );
        assert_eq!(humanize_identifier("DateTimePhrasing"), "Date time phrasing");
        assert_eq!(humanize_identifier("Millisecond"), "Millisecond");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(humanize_identifier("camelCaseValue"), "Camel case value");
    }

    #[test]
    fn test_acronyms() {
        assert_eq!(humanize_identifier("HTML"), "HTML");
        assert_eq!(humanize_identifier("HTMLParser"), "HTML parser");
        assert_eq!(humanize_identifier("WhenIWasYoung"), "When I was young");
    }

    #[test]
    fn test_digits() {
        assert_eq!(humanize_identifier("Version2Release"), "Version 2 release");
        assert_eq!(humanize_identifier("Top10th"), "Top 10th");
    }

    #[test]
    fn test_underscore_and_dash() {
        assert_eq!(
            humanize_identifier("Underscored_input_String_is_turned_INTO_sentence"),
            "Underscored input String is turned INTO sentence"
        );
        assert_eq!(humanize_identifier("dash-separated-words"), "dash separated words");
    }

    #[test]
    fn test_freestanding_separator() {
        assert_eq!(humanize_identifier("Now - Then"), "Now then");
    }

    #[test]
    fn test_empty() {
        assert_eq!(humanize_identifier(""), "");
    }
}
