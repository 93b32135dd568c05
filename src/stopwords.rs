use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Caller-supplied set of words removed from normalized text.
///
/// Stop words are lower-cased when inserted; candidate words are compared
/// as they appear in the text. "Hello" is therefore kept even when "hello"
/// is a stop word, while "hello" is dropped for a stop word "HELLO".
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StopWords {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Loads one word per line. Blank lines and lines starting with `#` are skipped.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let words = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'));
        let set = Self::from_list(words);
        log::info!("Loaded {} stop words from {:?}", set.len(), path.display());
        Ok(set)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drops every space-separated word found in the set and rejoins the rest
    /// with single spaces, keeping their order.
    pub fn filter(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|w| !self.contains(w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
