//! The game itself: the vocabulary, the word of the day, and guess
//! checking.

pub mod check;

mod daily;
pub use daily::{daily_word, date_seed};

mod lcg;
pub use lcg::Lcg48;

mod words;
pub use words::WordsList;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("word list not readable at `{path}`: {source}")]
    ResourceMissing {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("word list at `{path}` is malformed: {source}")]
    MalformedData {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("word list has no words")]
    EmptyVocabulary,
}
