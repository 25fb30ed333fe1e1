//! Text tokenization and word-frequency helpers
//!
//! A token is a maximal run of ASCII letters and digits, case-folded to
//! lowercase. Everything else (punctuation, whitespace, non-ASCII) is a
//! separator.

use std::collections::HashMap;

/// English stop words excluded from content word-frequency statistics.
///
/// Sorted by byte value so membership can be checked with a binary search.
/// Contracted forms can never match a token (tokens carry no apostrophes)
/// but are kept so the list stays a recognizable standard set.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "hadn't",
    "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "let's",
    "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on",
    "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some",
    "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves", "then",
    "there", "there's", "these", "they", "they'd", "they'll", "they're", "they've", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we",
    "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's",
    "where", "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with",
    "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

/// Splits text into lowercase ASCII-alphanumeric tokens
///
/// # Examples
///
/// ```
/// use lexicrawl::analysis::tokenize;
///
/// assert_eq!(tokenize("Hello, World-2024!"), vec!["hello", "world", "2024"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            current.push(ch.to_ascii_lowercase());
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Counts occurrences of each token
pub fn word_frequencies(tokens: &[String]) -> HashMap<String, u64> {
    let mut frequencies = HashMap::new();

    for token in tokens {
        *frequencies.entry(token.clone()).or_insert(0) += 1;
    }

    frequencies
}

/// Orders a frequency map by descending count, ties broken alphabetically
pub fn sorted_frequencies(frequencies: &HashMap<String, u64>) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = frequencies
        .iter()
        .map(|(token, count)| (token.clone(), *count))
        .collect();

    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    entries
}

/// Checks whether a token is in the built-in stop-word list
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(tokenize("the cat sat"), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("The CAT Sat"), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        assert_eq!(
            tokenize("don't-stop; now!"),
            vec!["don", "t", "stop", "now"]
        );
    }

    #[test]
    fn test_tokenize_keeps_digits() {
        assert_eq!(tokenize("cs121 in 2024"), vec!["cs121", "in", "2024"]);
    }

    #[test]
    fn test_tokenize_non_ascii_is_a_separator() {
        assert_eq!(tokenize("naïve café"), vec!["na", "ve", "caf"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n ... ").is_empty());
    }

    #[test]
    fn test_word_frequencies() {
        let tokens = tokenize("mat cat mat mat");
        let freq = word_frequencies(&tokens);
        assert_eq!(freq["mat"], 3);
        assert_eq!(freq["cat"], 1);
        assert_eq!(freq.len(), 2);
    }

    #[test]
    fn test_sorted_frequencies_descending_with_alpha_ties() {
        let tokens = tokenize("b b a a c");
        let freq = word_frequencies(&tokens);
        let sorted = sorted_frequencies(&freq);
        assert_eq!(
            sorted,
            vec![
                ("a".to_string(), 2),
                ("b".to_string(), 2),
                ("c".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_stop_words_sorted_for_binary_search() {
        for pair in STOP_WORDS.windows(2) {
            assert!(pair[0] < pair[1], "{:?} out of order", pair);
        }
    }

    #[test]
    fn test_is_stop_word() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("yourselves"));
        assert!(is_stop_word("a"));
        assert!(!is_stop_word("mat"));
        assert!(!is_stop_word("crawler"));
    }
}
