//! Column label derivation from data keys.

/// Upper-cases the first character of `word` and leaves the rest untouched.
///
/// Uses Unicode case mapping, so a single character may expand (`ß` becomes `SS`).
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Splits a column key into words.
///
/// Words are separated by literal dots, whitespace, and internal upper-case transitions. An
/// upper-case letter starts a new word when it follows a lower-case letter or a digit, or when it
/// follows an upper-case letter and is itself followed by a lower-case one. Acronyms therefore
/// stay together: `userID` yields `["user", "ID"]`, `URLValue` yields `["URL", "Value"]`.
///
/// Empty words are dropped.
pub fn split_words(key: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = key.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(pos, ch)) in chars.iter().enumerate() {
        if ch == '.' || ch.is_whitespace() {
            if let Some(s) = start.take() {
                words.push(&key[s..pos]);
            }
            continue;
        }

        let Some(s) = start else {
            start = Some(pos);
            continue;
        };

        if !ch.is_uppercase() {
            continue;
        }
        // `start` is only set while inside a word, so the previous char belongs to it.
        let prev = chars[i - 1].1;
        let next_is_lower = chars.get(i + 1).is_some_and(|&(_, c)| c.is_lowercase());
        if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
            words.push(&key[s..pos]);
            start = Some(pos);
        }
    }

    if let Some(s) = start {
        words.push(&key[s..]);
    }
    words
}

/// Derives a human-readable column label from a data key.
///
/// `userName` becomes `User Name`, `a.b` becomes `A B`.
pub fn derive_label(key: &str) -> String {
    split_words(key)
        .into_iter()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_camel_case_and_dots() {
        assert_eq!(derive_label("userName"), "User Name");
        assert_eq!(derive_label("firstName"), "First Name");
        assert_eq!(derive_label("a.b"), "A B");
        assert_eq!(derive_label("a.bC"), "A B C");
        assert_eq!(derive_label("address.streetName"), "Address Street Name");
    }

    #[test]
    fn keeps_acronyms_together() {
        assert_eq!(derive_label("userID"), "User ID");
        assert_eq!(derive_label("URLValue"), "URL Value");
        assert_eq!(derive_label("item2Name"), "Item2 Name");
    }

    #[test]
    fn drops_empty_words() {
        assert_eq!(derive_label(".a..b."), "A B");
        assert_eq!(derive_label("  spaced   out "), "Spaced Out");
        assert_eq!(derive_label(""), "");
        assert_eq!(derive_label("..."), "");
    }

    #[test]
    fn single_word_is_capitalized() {
        assert_eq!(derive_label("age"), "Age");
        assert_eq!(derive_label("Age"), "Age");
        assert_eq!(derive_label("snake_case"), "Snake_case");
    }

    #[test]
    fn capitalize_first_handles_unicode() {
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first("ßtraße"), "SStraße");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn split_words_returns_slices() {
        assert_eq!(split_words("createdAt.utcTime"), vec!["created", "At", "utc", "Time"]);
    }
}
