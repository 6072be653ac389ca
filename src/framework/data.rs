use std::sync::Arc;

use tracing::{info, instrument};

use crate::wordle::{
    check::{Checker, HttpTranslator, MembershipChecker, TranslationChecker},
    WordsList,
};

use super::config::{Config, Strategy};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Words(#[from] crate::wordle::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything a request handler needs, built once at startup and shared by
/// clone. Nothing in here is mutable except the checker's internal memo.
#[derive(Debug, Clone)]
pub struct AppData {
    config: Config,
    words: Arc<WordsList>,
    checker: Checker,
}

impl AppData {
    /// Loads the vocabulary and wires up the configured checker. A bad word
    /// list (missing, malformed or empty) fails here, before the service
    /// ever accepts a request.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Result<Self> {
        let length = config.words.length();
        let words = Arc::new(WordsList::load(config.words.file(), length)?);

        let checker = match config.checker.strategy() {
            Strategy::Membership => {
                Checker::Membership(MembershipChecker::new(Arc::clone(&words), length))
            }
            Strategy::Translation => {
                let translation = &config.checker.translation;

                let translator = HttpTranslator::new(
                    translation.endpoint().clone(),
                    translation.source(),
                    translation.target(),
                    translation.timeout(),
                );

                Checker::Translation(TranslationChecker::new(
                    translator,
                    length,
                    translation.cache_size(),
                ))
            }
        };

        info!(strategy = checker.strategy(), "guess checker ready");

        Ok(Self {
            config,
            words,
            checker,
        })
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn words(&self) -> &Arc<WordsList> {
        &self.words
    }

    pub const fn checker(&self) -> &Checker {
        &self.checker
    }
}

#[cfg(test)]
mod tests {
    use super::{AppData, Error};
    use crate::wordle;

    fn config_for(words_file: &std::path::Path) -> super::Config {
        let toml = format!(
            r#"
            [words]
            file = "{}"
            length = 5
            "#,
            words_file.display()
        );

        config::Config::builder()
            .add_source(config::File::from_str(&toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn refuses_to_start_without_a_word_list() {
        let config = config_for(std::path::Path::new("definitely/not/here.json"));

        let err = AppData::new(config).unwrap_err();

        assert!(matches!(
            err,
            Error::Words(wordle::Error::ResourceMissing { .. })
        ));
    }

    #[test]
    fn builds_a_membership_checker_by_default() {
        let path = std::env::temp_dir().join(format!("urdle-data-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "words": ["ABCDE"] }"#).unwrap();

        let data = AppData::new(config_for(&path)).unwrap();

        assert_eq!(data.checker().strategy(), "membership");
        assert_eq!(data.words().len(), 1);
    }
}
