use std::{
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
    time::Duration,
};

use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file read error: {0}")]
    Read(config::ConfigError),

    #[error("parsing error: {0}")]
    Parse(config::ConfigError),
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub words: WordsConfig,
    pub checker: CheckerConfig,
    pub logs: LogsConfig,
}

impl Config {
    /// Resolves the config file and deserializes it.
    ///
    /// An explicit `--config` path wins; otherwise the `URDLE_TOML` env var
    /// is consulted, falling back to `./urdle.toml`. Every field carries a
    /// default, so an empty file is a valid config.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        dotenvy::dotenv().ok();

        let config_file = if let Some(path) = path {
            path.display().to_string()
        } else if let Ok(path) = std::env::var("URDLE_TOML") {
            info!(path, "looking for config file with URDLE_TOML...");
            path
        } else {
            let path = "./urdle.toml".to_owned();
            warn!(path, "URDLE_TOML env unset, using default path");
            path
        };

        let config = config::Config::builder()
            .add_source(config::File::new(&config_file, config::FileFormat::Toml))
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)?;

        info!("config loaded");

        Ok(config)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct HttpConfig {
    host: IpAddr,
    port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
        }
    }
}

impl HttpConfig {
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct WordsConfig {
    file: PathBuf,
    length: usize,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("assets/urdu_5_letter_words.json"),
            length: 5,
        }
    }
}

impl WordsConfig {
    pub fn file(&self) -> &Path {
        &self.file
    }

    pub const fn length(&self) -> usize {
        self.length
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CheckerConfig {
    strategy: Strategy,
    pub translation: TranslationConfig,
}

impl CheckerConfig {
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }
}

/// Which guess checker a deployment runs with. Exactly one, chosen at
/// startup; there is no fallback from one to the other.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Membership,
    Translation,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct TranslationConfig {
    endpoint: Url,
    source: String,
    target: String,
    timeout_secs: u64,
    cache_size: usize,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse("https://libretranslate.com/translate")
                .expect("default endpoint should be a valid url"),
            source: "ur".to_owned(),
            target: "en".to_owned(),
            timeout_secs: 5,
            cache_size: 1024,
        }
    }
}

impl TranslationConfig {
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub const fn cache_size(&self) -> usize {
        self.cache_size
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LogsConfig {
    flavor_texts: Vec<String>,
}

impl LogsConfig {
    pub fn flavor_text(&self) -> Option<&str> {
        let flavor_text = self
            .flavor_texts
            .iter()
            .choose(&mut rand::thread_rng())
            .map(|s| s.as_str());

        if flavor_text.is_none() {
            warn!("no flavor texts provided in config :(");
        }

        flavor_text
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, Strategy};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn parse(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config = parse("");

        assert_eq!(config.http.socket_addr().port(), 8080);
        assert_eq!(config.words.length(), 5);
        assert_eq!(config.checker.strategy(), Strategy::Membership);
        assert_eq!(config.checker.translation.timeout(), Duration::from_secs(5));
        assert_eq!(config.checker.translation.cache_size(), 1024);
    }

    #[test]
    fn strategy_names_are_lowercase() {
        let config = parse(
            r#"
            [checker]
            strategy = "translation"
            "#,
        );

        assert_eq!(config.checker.strategy(), Strategy::Translation);
    }

    #[test]
    fn translation_section_overrides() {
        let config = parse(
            r#"
            [checker.translation]
            endpoint = "http://localhost:5000/translate"
            timeout_secs = 1
            cache_size = 16
            "#,
        );

        let translation = &config.checker.translation;

        assert_eq!(
            translation.endpoint().as_str(),
            "http://localhost:5000/translate"
        );
        assert_eq!(translation.timeout(), Duration::from_secs(1));
        assert_eq!(translation.cache_size(), 16);
        assert_eq!(translation.source(), "ur");
        assert_eq!(translation.target(), "en");
    }

    #[test]
    fn http_section_overrides() {
        let config = parse(
            r#"
            [http]
            host = "127.0.0.1"
            port = 3000
            "#,
        );

        assert_eq!(config.http.socket_addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn serializes_back_to_toml() {
        let rendered = toml::to_string_pretty(&Config::default()).unwrap();

        assert!(rendered.contains("strategy = \"membership\""));
        assert!(rendered.contains("port = 8080"));
    }

    #[test]
    fn flavor_text_comes_from_the_pool() {
        let config = parse(
            r#"
            [logs]
            flavor_texts = ["one", "two"]
            "#,
        );

        let picked = config.logs.flavor_text().unwrap();

        assert!(picked == "one" || picked == "two");
    }

    #[test]
    fn no_flavor_texts_is_none() {
        let config = parse("");

        assert_eq!(config.logs.flavor_text(), None);
    }
}
