use std::{fs, path::Path};

use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::Error;

#[derive(Debug, Deserialize)]
struct WordsFile {
    words: Vec<String>,
}

/// The fixed vocabulary: an ordered list of accepted words, loaded once at
/// startup and never mutated afterwards.
///
/// Order is load-bearing. The daily selector turns a date into an index into
/// this exact sequence, so two instances agree on the word of the day only
/// if their lists match element for element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordsList {
    words: Vec<String>,
}

impl WordsList {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Reads a `{"words": [...]}` document from disk.
    ///
    /// Fields other than `words` are ignored, so files written by the
    /// `fetch-words` subcommand (which adds some bookkeeping) load as-is.
    /// Entries whose length differs from `expected_length` are kept, to
    /// preserve indexing, but counted and warned about.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>, expected_length: usize) -> Result<Self, Error> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|source| Error::ResourceMissing {
            path: path.to_owned(),
            source,
        })?;

        let file: WordsFile =
            serde_json::from_str(&text).map_err(|source| Error::MalformedData {
                path: path.to_owned(),
                source,
            })?;

        if file.words.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        let list = Self::new(file.words);

        let misfits = list
            .iter()
            .filter(|word| word.chars().count() != expected_length)
            .count();

        if misfits > 0 {
            warn!(
                misfits,
                expected_length, "vocabulary has entries of unexpected length, keeping them"
            );
        }

        info!(words = list.len(), "vocabulary loaded");

        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Linear scan for an exact match. The list is small enough that a
    /// lookup structure would buy nothing.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|entry| entry == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
