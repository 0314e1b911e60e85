//! Lexicon store: the authoritative set of valid words.
//!
//! Loaded once at startup from a newline-delimited word list and never
//! mutated afterwards, so handlers can share it behind an `Arc` without
//! locking.

use crate::error::AppError;
use std::collections::HashSet;
use std::path::Path;

/// Canonical form used for every lookup: surrounding whitespace stripped,
/// ASCII letters upper-cased.
pub fn normalize(word: &str) -> String {
    word.trim().to_ascii_uppercase()
}

pub struct Lexicon {
    words: HashSet<String>,
    source: String,
}

impl Lexicon {
    /// Read the word list at `path`: one word per line, blank lines skipped,
    /// words stored upper-cased. Fails when the file is missing or unreadable.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::LexiconError(anyhow::anyhow!(
                "failed to read word list {}: {}",
                path.display(),
                e
            ))
        })?;

        let words: HashSet<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.to_ascii_uppercase())
            .collect();

        Ok(Self {
            words,
            source: path.display().to_string(),
        })
    }

    /// Build a lexicon from an in-memory word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        Self {
            words,
            source: "inline".to_string(),
        }
    }

    /// Membership test on the normalized form of `word`.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}
