//! Builds a vocabulary file from the Wiktionary category API.
//!
//! This is an offline tool, not part of the serving path. It walks a fixed
//! set of Urdu word categories, keeps single titles of the requested length
//! in Arabic script, and writes a `{"words": [...]}` document the service
//! can load directly.

use std::{collections::HashSet, path::PathBuf, time::Duration};

use anyhow::Context;
use backoff::ExponentialBackoff;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info};

const API: &str = "https://en.wiktionary.org/w/api.php";

const CATEGORIES: &[&str] = &[
    "Category:Urdu_lemmas",
    "Category:Urdu_nouns",
    "Category:Urdu_adjectives",
    "Category:Urdu_verbs",
    "Category:Urdu_adverbs",
    "Category:Urdu_conjunctions",
    "Category:Urdu_determiners",
    "Category:Urdu_interjections",
    "Category:Urdu_pronouns",
    "Category:Urdu_prepositions",
    "Category:Urdu_numerals",
];

#[derive(Debug, clap::Args)]
pub struct FetchArgs {
    /// Keep words of exactly this many characters
    #[arg(long, default_value_t = 5)]
    length: usize,

    /// Where to write the vocabulary JSON
    #[arg(long, default_value = "words.json")]
    output: PathBuf,

    /// Hard cap on pages fetched per category
    #[arg(long, default_value_t = 100)]
    max_pages: usize,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    query: Option<ApiQuery>,
    #[serde(rename = "continue")]
    continuation: Option<ApiContinue>,
}

#[derive(Debug, Deserialize)]
struct ApiQuery {
    #[serde(default)]
    categorymembers: Vec<ApiMember>,
}

#[derive(Debug, Deserialize)]
struct ApiMember {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ApiContinue {
    cmcontinue: Option<String>,
}

pub async fn run(args: &FetchArgs) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("urdle/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()
        .context("building http client")?;

    let arabic_script =
        Regex::new(r"[\u{0600}-\u{06FF}]").context("compiling script pattern")?;

    let mut words = Vec::new();
    let mut seen = HashSet::new();

    for category in CATEGORIES {
        let before = words.len();

        fetch_category(&client, category, args, &arabic_script, &mut words, &mut seen).await?;

        info!(category, added = words.len() - before, "category done");
    }

    let document = serde_json::json!({
        "words": words,
        "count": words.len(),
        "wordLength": args.length,
        "script": "Urdu (Arabic script)",
    });

    std::fs::write(&args.output, serde_json::to_string_pretty(&document)?)
        .with_context(|| format!("writing {}", args.output.display()))?;

    info!(words = words.len(), output = %args.output.display(), "vocabulary written");

    Ok(())
}

/// Walks one category with `cmcontinue` pagination, pausing briefly between
/// pages to stay polite.
async fn fetch_category(
    client: &reqwest::Client,
    category: &str,
    args: &FetchArgs,
    script: &Regex,
    words: &mut Vec<String>,
    seen: &mut HashSet<String>,
) -> anyhow::Result<()> {
    let mut continuation: Option<String> = None;

    for page in 0..args.max_pages {
        let response = get_page(client, category, continuation.as_deref()).await?;

        if let Some(query) = response.query {
            for member in query.categorymembers {
                if keep(&member.title, args.length, script) && seen.insert(member.title.clone()) {
                    words.push(member.title);
                }
            }
        }

        debug!(category, page, running_total = words.len());

        match response.continuation.and_then(|c| c.cmcontinue) {
            Some(token) => continuation = Some(token),
            None => break,
        }

        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    Ok(())
}

async fn get_page(
    client: &reqwest::Client,
    category: &str,
    continuation: Option<&str>,
) -> anyhow::Result<ApiResponse> {
    let backoff = ExponentialBackoff {
        max_elapsed_time: Some(Duration::from_secs(60)),
        ..ExponentialBackoff::default()
    };

    backoff::future::retry(backoff, || async {
        let mut request = client.get(API).query(&[
            ("action", "query"),
            ("list", "categorymembers"),
            ("cmtitle", category),
            ("cmlimit", "500"),
            ("format", "json"),
        ]);

        if let Some(token) = continuation {
            request = request.query(&[("cmcontinue", token)]);
        }

        let response = request
            .send()
            .await
            .map_err(connection_backoff)?
            .error_for_status()
            .map_err(status_backoff)?;

        response
            .json::<ApiResponse>()
            .await
            .map_err(backoff::Error::permanent)
    })
    .await
    .context("wiktionary request failed")
}

/// Connection troubles and timeouts are worth retrying, anything else is
/// not.
fn connection_backoff(err: reqwest::Error) -> backoff::Error<reqwest::Error> {
    if err.is_connect() || err.is_timeout() {
        backoff::Error::transient(err)
    } else {
        backoff::Error::permanent(err)
    }
}

fn status_backoff(err: reqwest::Error) -> backoff::Error<reqwest::Error> {
    if err.status().is_some_and(|status| status.is_server_error()) {
        backoff::Error::transient(err)
    } else {
        backoff::Error::permanent(err)
    }
}

/// Category listings mix in multi-word phrases and Latin-script redirects;
/// a usable entry is a single title of the right length carrying at least
/// one character from the Arabic block.
fn keep(title: &str, length: usize, script: &Regex) -> bool {
    !title.contains(' ') && title.chars().count() == length && script.is_match(title)
}
