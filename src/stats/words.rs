//! Word-frequency ranking over free-text answers.
//!
//! Text is lower-cased, split on whitespace and sentence punctuation,
//! stripped of residual punctuation, and filtered against a fixed
//! stop-word list. Surviving tokens are counted across all answers and
//! ranked by count, ties kept in first-seen order.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Characters that separate tokens in addition to whitespace.
const SPLIT_CHARS: &[char] = &['.', ',', '!', '?', ';', ':', '*', '(', ')', '"'];

/// Characters removed from inside each token after splitting.
const STRIP_CHARS: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Tokens this short carry no signal.
const MIN_TOKEN_CHARS: usize = 3;

/// English function words plus filler that dominates every hackathon answer.
const STOP_WORDS: &[&str] = &[
    // articles, conjunctions, prepositions
    "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "in", "on", "at", "to", "for",
    "with", "by", "about", "as", "of", "from", "into", "onto", "than", "then", "over", "also",
    // pronouns
    "i", "my", "me", "mine", "myself", "you", "your", "yours", "yourself", "he", "him", "his",
    "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us", "our", "ours",
    "ourselves", "they", "them", "their", "theirs", "themselves", "this", "that", "these",
    "those", "who", "whom", "what", "which", "when", "where", "why", "how",
    // auxiliaries
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "will", "would", "can", "could", "should", "shall", "may", "might",
    "must", "not", "i'm", "i've", "i'd", "i'll", "don't", "it's",
    // quantifiers and intensifiers
    "all", "any", "some", "each", "every", "more", "most", "very", "really", "just", "too",
    "there", "here", "like",
    // domain filler
    "want", "build", "help", "hope", "learn", "make", "get", "new", "people", "things",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Ranked `(label, count)` pairs that serialize as an ordered JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedCounts(Vec<(String, u64)>);

impl RankedCounts {
    /// Returns the count for `label`, if ranked.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|(word, _)| word == label)
            .map(|(_, count)| *count)
    }

    /// Number of ranked entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing was ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Labels in rank order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.0.iter().map(|(word, _)| word.as_str()).collect()
    }
}

impl Serialize for RankedCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (word, count) in &self.0 {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

/// Returns `true` if `token` is in the stop-word list.
#[must_use]
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORD_SET.contains(token)
}

/// Splits `text` into normalized, filtered tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| c.is_whitespace() || SPLIT_CHARS.contains(&c))
        .map(|raw| {
            raw.chars()
                .filter(|c| !STRIP_CHARS.contains(c))
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS && !is_stop_word(token))
}

/// Ranks the `limit` most frequent words across `texts`.
///
/// Missing or empty texts contribute nothing. Ties keep the order in
/// which words were first encountered.
pub fn word_frequency<'a, I>(texts: I, limit: usize) -> RankedCounts
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut ranked: Vec<(String, u64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for text in texts.into_iter().flatten() {
        for token in tokenize(text) {
            if let Some(slot) = index.get(&token).and_then(|&i| ranked.get_mut(i)) {
                slot.1 += 1;
            } else {
                index.insert(token.clone(), ranked.len());
                ranked.push((token, 1));
            }
        }
    }

    // stable: equal counts stay in first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    RankedCounts(ranked)
}
