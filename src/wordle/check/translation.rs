use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, instrument, warn};
use url::Url;

use super::cache::CheckCache;

/// Source of translations for candidate guesses.
///
/// Abstracted so the checker can be driven by a scripted stand-in under
/// test; the real implementation is [`HttpTranslator`].
#[allow(async_fn_in_trait)]
pub trait Translate {
    type Error: std::error::Error;

    async fn translate(&self, text: &str) -> Result<String, Self::Error>;
}

/// Client for a LibreTranslate-style endpoint: form-encoded request in,
/// JSON `translatedText` out.
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    client: reqwest::Client,
    endpoint: Url,
    source: String,
    target: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl HttpTranslator {
    /// The timeout covers the whole request. A slow service turns into an
    /// `Err` here, which the checker downgrades to a rejection.
    pub fn new(
        endpoint: Url,
        source: impl Into<String>,
        target: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            source: source.into(),
            target: target.into(),
            timeout,
        }
    }
}

impl Translate for HttpTranslator {
    type Error = reqwest::Error;

    async fn translate(&self, text: &str) -> Result<String, Self::Error> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .timeout(self.timeout)
            .form(&[
                ("q", text),
                ("source", self.source.as_str()),
                ("target", self.target.as_str()),
                ("format", "text"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: TranslateResponse = response.json().await?;

        Ok(body.translated_text)
    }
}

/// Validates guesses by asking a translation service whether the guess
/// means anything.
///
/// The heuristic: a real word comes back as different text in the target
/// language, while gibberish comes back empty or echoed unchanged. Cheap to
/// run and wrong at the edges, which is why it is one strategy among two
/// rather than the rule.
#[derive(Debug, Clone)]
pub struct TranslationChecker<T> {
    translator: T,
    cache: CheckCache,
    length: usize,
}

impl<T: Translate> TranslationChecker<T> {
    pub fn new(translator: T, length: usize, cache_capacity: usize) -> Self {
        Self {
            translator,
            cache: CheckCache::new(cache_capacity),
            length,
        }
    }

    /// Always resolves to a boolean. A wrong length or any service fault
    /// (timeouts included) comes back `false` rather than as an error.
    #[instrument(skip(self))]
    pub async fn check(&self, guess: &str) -> bool {
        let trimmed = guess.trim();

        if trimmed.chars().count() != self.length {
            return false;
        }

        if let Some(valid) = self.cache.get(guess).await {
            debug!(valid, "answering from memo");
            return valid;
        }

        match self.translator.translate(guess).await {
            Ok(translated) => {
                let translated = translated.trim();
                let valid = !translated.is_empty()
                    && translated.to_lowercase() != trimmed.to_lowercase();

                debug!(translated, valid, "translation received");
                self.cache.put(guess, valid).await;

                valid
            }
            Err(err) => {
                // deliberately not memoized, so the next attempt at this
                // guess gets a fresh call once the service recovers
                warn!(%err, "translation failed, rejecting guess");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Translate, TranslationChecker};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    #[derive(Debug, thiserror::Error)]
    #[error("translator is down")]
    struct StubError;

    #[derive(Debug, Clone)]
    enum Reply {
        Text(&'static str),
        Echo,
        Fail,
    }

    #[derive(Debug, Clone)]
    struct StubTranslator {
        calls: Arc<AtomicUsize>,
        reply: Reply,
    }

    impl StubTranslator {
        fn new(reply: Reply) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                reply,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Translate for StubTranslator {
        type Error = StubError;

        async fn translate(&self, text: &str) -> Result<String, StubError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            match self.reply {
                Reply::Text(reply) => Ok(reply.to_owned()),
                Reply::Echo => Ok(text.to_owned()),
                Reply::Fail => Err(StubError),
            }
        }
    }

    fn checker(stub: &StubTranslator) -> TranslationChecker<StubTranslator> {
        TranslationChecker::new(stub.clone(), 5, 16)
    }

    #[tokio::test]
    async fn translated_word_is_valid() {
        let stub = StubTranslator::new(Reply::Text("a bird"));
        let checker = checker(&stub);

        assert!(checker.check("پرندہ").await);
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn verdicts_are_memoized() {
        let stub = StubTranslator::new(Reply::Text("a bird"));
        let checker = checker(&stub);

        assert!(checker.check("پرندہ").await);
        assert!(checker.check("پرندہ").await);
        assert!(checker.check("پرندہ").await);

        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn echoed_guess_is_invalid() {
        let stub = StubTranslator::new(Reply::Echo);
        let checker = checker(&stub);

        assert!(!checker.check("اااای").await);

        // rejections are memoized too
        assert!(!checker.check("اااای").await);
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn echo_comparison_ignores_case() {
        let stub = StubTranslator::new(Reply::Text("aabbc"));
        let checker = checker(&stub);

        assert!(!checker.check("AABBC").await);
    }

    #[tokio::test]
    async fn blank_translation_is_invalid() {
        let stub = StubTranslator::new(Reply::Text("   "));
        let checker = checker(&stub);

        assert!(!checker.check("اااای").await);
    }

    #[tokio::test]
    async fn wrong_length_never_reaches_the_translator() {
        let stub = StubTranslator::new(Reply::Text("a bird"));
        let checker = checker(&stub);

        assert!(!checker.check("اب").await);
        assert!(!checker.check("").await);
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn failures_are_false_but_not_memoized() {
        let stub = StubTranslator::new(Reply::Fail);
        let checker = checker(&stub);

        assert!(!checker.check("پرندہ").await);
        assert!(!checker.check("پرندہ").await);

        // both attempts hit the translator, nothing was cached
        assert_eq!(stub.calls(), 2);
    }

    #[tokio::test]
    async fn guess_is_trimmed_before_length_check() {
        let stub = StubTranslator::new(Reply::Text("a bird"));
        let checker = checker(&stub);

        assert!(checker.check("  پرندہ ").await);
        assert_eq!(stub.calls(), 1);
    }
}
