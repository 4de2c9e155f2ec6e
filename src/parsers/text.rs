use regex::Regex;
use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Common words that say nothing about what a page is about
const STOP_WORDS: &[&str] = &[
    "this", "that", "with", "have", "will", "from", "they", "know", "want", "been", "good",
    "much", "some", "time", "very", "when", "come", "here", "just", "like", "long", "make",
    "many", "over", "such", "take", "than", "them", "well", "were", "what", "your", "page",
    "website", "site",
];

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"));

/// Bounds for keyword extraction
#[derive(Debug, Clone, Copy)]
pub struct KeywordOptions {
    /// Shortest alphabetic run counted as a keyword
    pub min_length: usize,
    /// Longest alphabetic run counted as a keyword
    pub max_length: usize,
}

impl Default for KeywordOptions {
    fn default() -> Self {
        Self {
            min_length: 4,
            max_length: 20,
        }
    }
}

/// Keyword occurrence counts, kept in first-encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordCounts {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl KeywordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of `word`
    pub fn add(&mut self, word: &str, count: usize) {
        match self.index.get(word) {
            Some(&pos) => self.entries[pos].1 += count,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), count));
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest single count, if any
    pub fn max_count(&self) -> Option<usize> {
        self.entries.iter().map(|(_, count)| *count).max()
    }

    /// Iterate in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// The `n` most frequent words; equal counts keep first-encounter order
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl Serialize for KeywordCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Count candidate keywords in page text
///
/// Lower-cases the text, keeps whole alphabetic words whose length falls inside
/// the configured bounds, and drops stop words.
pub fn extract_keywords(text: &str, options: &KeywordOptions) -> KeywordCounts {
    let mut counts = KeywordCounts::new();
    let pattern = format!(
        r"\b[a-zA-Z]{{{},{}}}\b",
        options.min_length, options.max_length
    );
    let Ok(word_re) = Regex::new(&pattern) else {
        ::log::warn!("Invalid keyword bounds {:?}", options);
        return counts;
    };

    let lowered = text.to_lowercase();
    for word in word_re.find_iter(&lowered).map(|m| m.as_str()) {
        if STOP_WORDS.contains(&word) || word.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        counts.add(word, 1);
    }

    counts
}

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of segments produced by splitting on runs of `.`, `!` and `?`
///
/// A trailing terminator produces a trailing empty segment, so any text
/// (even empty) has at least one.
pub fn sentence_count(text: &str) -> usize {
    SENTENCE_BREAK.split(text).count()
}

/// Collapse all whitespace runs into single spaces
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `sentences` sentences of `words_each` unique alphabetic words
#[cfg(test)]
pub(crate) fn sample_prose(sentences: usize, words_each: usize) -> String {
    let mut n = 0usize;
    let mut out = Vec::with_capacity(sentences);
    for _ in 0..sentences {
        let words: Vec<String> = (0..words_each)
            .map(|_| {
                let mut word = String::from("term");
                let mut k = n;
                loop {
                    word.push((b'a' + (k % 26) as u8) as char);
                    k /= 26;
                    if k == 0 {
                        break;
                    }
                }
                n += 1;
                word
            })
            .collect();
        out.push(format!("{}.", words.join(" ")));
    }
    out.join(" ")
}
