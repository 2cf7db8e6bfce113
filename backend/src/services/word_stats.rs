use crate::models::WordFrequency;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    // Anything that is neither an ASCII letter nor ASCII whitespace is dropped,
    // including no-break and other Unicode spaces.
    static ref NON_WORD_CHARS: Regex = Regex::new(r"[^a-zA-Z \t\n\x0B\x0C\r]+").unwrap();
}

// Unlike `char::is_ascii_whitespace`, this includes the vertical tab.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Splits a description into lowercase alphabetic tokens.
///
/// Punctuation and digits are deleted rather than treated as separators, so
/// `"don't"` yields `"dont"` and `"mp3s"` yields `"mps"`. Only ASCII whitespace
/// separates words; a no-break space is deleted like any other symbol.
pub fn tokenize(description: &str) -> Vec<String> {
    let lowered = description.to_lowercase();
    NON_WORD_CHARS
        .replace_all(&lowered, "")
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Counts tokens across all descriptions, ranked by descending count.
/// Equal counts keep the order in which the words were first seen.
pub fn word_frequency<S: AsRef<str>>(descriptions: &[S]) -> WordFrequency {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for description in descriptions {
        for token in tokenize(description.as_ref()) {
            match index.get(&token) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(token.clone(), counts.len());
                    counts.push((token, 1));
                }
            }
        }
    }

    // sort_by is stable, which keeps first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    WordFrequency::from_ranked(counts)
}
