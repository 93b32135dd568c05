use crate::stopwords::StopWords;
use crate::tables::{
    char_variant, digit_value, punctuation, ARABIC_INDIC_DIGITS, ASCII_DIGITS, PERSIAN_DIGITS,
};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static::lazy_static! {
    static ref RE_MULTI_SPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref RE_MULTI_NEWLINE: Regex = Regex::new(r"\n+").unwrap();
    static ref RE_MULTI_TAB: Regex = Regex::new(r"\t+").unwrap();
}

/// Normalizes Persian text, optionally dropping the given stop words.
///
/// Stages run in a fixed order: NFC, script folding, digit transliteration,
/// punctuation folding, control stripping, whitespace collapsing, stop-word
/// filtering and a final NFC pass.
///
/// A bare `None` cannot infer `S`; use `normalize_with(text, None)` when no
/// stop words apply.
pub fn normalize<S: AsRef<str>>(text: &str, stop_words: Option<&[S]>) -> String {
    let stop_words = stop_words.map(|words| StopWords::from_list(words.iter()));
    normalize_with(text, stop_words.as_ref())
}

/// Same as [`normalize`] with a prepared stop-word set.
pub fn normalize_with(text: &str, stop_words: Option<&StopWords>) -> String {
    let s = canonicalize(text);
    let s = fold_script(&s);
    let s = transliterate_digits(&s);
    let s = fold_punctuation(&s);
    let s = strip_control(&s);
    let s = collapse_whitespace(&s);

    if s.is_empty() {
        return String::new();
    }

    let s = match stop_words {
        Some(sw) => sw.filter(&s),
        None => s,
    };

    canonicalize(&s)
}

/// Normalizes a JSON value. Anything but a string yields an empty string.
pub fn normalize_value(value: &serde_json::Value, stop_words: Option<&StopWords>) -> String {
    match value.as_str() {
        Some(text) => normalize_with(text, stop_words),
        None => String::new(),
    }
}

pub fn canonicalize(input: &str) -> String {
    input.nfc().collect()
}

pub fn fold_script(input: &str) -> String {
    let mut s = String::with_capacity(input.len());
    for c in input.chars() {
        match char_variant(c) {
            Some(Some(folded)) => s.push(folded),
            Some(None) => {}
            None => s.push(c),
        }
    }
    s
}

pub fn transliterate_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            digit_value(c, &PERSIAN_DIGITS)
                .or_else(|| digit_value(c, &ARABIC_INDIC_DIGITS))
                .map_or(c, |d| ASCII_DIGITS[d])
        })
        .collect()
}

pub fn fold_punctuation(input: &str) -> String {
    input.chars().map(|c| punctuation(c).unwrap_or(c)).collect()
}

/// Removes Unicode control characters (category Cc) other than `\n` and `\t`.
pub fn strip_control(input: &str) -> String {
    input
        .chars()
        .filter(|&c| !c.is_control() || c == '\n' || c == '\t')
        .collect()
}

/// Collapses whitespace runs into one ASCII space and trims both ends.
pub fn collapse_whitespace(input: &str) -> String {
    let s = RE_MULTI_SPACE.replace_all(input, " ");
    let s = RE_MULTI_NEWLINE.replace_all(&s, " ");
    let s = RE_MULTI_TAB.replace_all(&s, " ");
    s.trim().to_string()
}
