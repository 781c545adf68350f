use crate::directory::facts::fun_fact;
use crate::enrich::cache::{cached_summary, get_cache_db_pool, store_summary};
use crate::service::var_service::{get_cache_db_path, get_wikipedia_enrichment};
use anyhow::Result;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use sqlx::SqlitePool;

const SUMMARY_MAX_LEN: usize = 200;

#[derive(Clone, Debug, Serialize)]
pub struct EnrichedFact {
    pub fact: String,
    pub wikipedia_summary: String,
    pub source: &'static str,
}

/// Wraps the local fact table with Wikipedia intro summaries. Lookup results
/// never depend on this: any fetch or cache failure degrades to an empty
/// summary and is only logged.
#[derive(Clone)]
pub struct Enricher {
    client: Client,
    cache: SqlitePool,
    wikipedia: bool,
}

impl Enricher {
    pub async fn new() -> Result<Enricher> {
        let cache = get_cache_db_pool(&get_cache_db_path().await?).await?;
        Ok(Enricher {
            client: Client::new(),
            cache,
            wikipedia: get_wikipedia_enrichment().await?,
        })
    }

    pub async fn enrich(&self, capital: &str) -> EnrichedFact {
        let summary = match self.wikipedia {
            true => self.summary_for(capital).await,
            false => String::new(),
        };

        EnrichedFact {
            fact: fun_fact(capital),
            source: match summary.is_empty() {
                true => "local",
                false => "wikipedia",
            },
            wikipedia_summary: summary,
        }
    }

    async fn summary_for(&self, capital: &str) -> String {
        match cached_summary(&self.cache, capital).await {
            Ok(Some(summary)) => return summary,
            Ok(None) => (),
            Err(e) => tracing::warn!("Summary cache lookup failed for {}: {}", capital, e),
        }

        let summary = fetch_wikipedia_summary(&self.client, capital).await;
        if !summary.is_empty() {
            if let Err(e) = store_summary(&self.cache, capital, &summary).await {
                tracing::warn!("Failed to cache summary for {}: {}", capital, e);
            }
        }

        summary
    }
}

/// Intro extract from the MediaWiki API, condensed to whole sentences.
/// Returns an empty string on any failure.
async fn fetch_wikipedia_summary(client: &Client, capital: &str) -> String {
    let response = match client
        .get("https://en.wikipedia.org/w/api.php")
        .query(&[
            ("action", "query"),
            ("titles", capital),
            ("prop", "extracts"),
            ("exintro", "true"),
            ("explaintext", "true"),
            ("format", "json"),
        ])
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Wikipedia request failed for {}: {}", capital, e);
            return String::new();
        }
    };

    if !response.status().is_success() {
        tracing::error!("Non-success response from Wikipedia: {}", response.status());
        return String::new();
    }

    let parsed: Value = match response.json().await {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!("Failed to parse Wikipedia response for {}: {}", capital, e);
            return String::new();
        }
    };

    let extract = match parsed["query"]["pages"]
        .as_object()
        .and_then(|pages| pages.values().next())
        .and_then(|page| page["extract"].as_str())
    {
        Some(extract) => extract.trim(),
        None => {
            tracing::info!("No Wikipedia extract for {}", capital);
            return String::new();
        }
    };

    condense_extract(extract, SUMMARY_MAX_LEN)
}

/// Whole leading sentences that fit in `max_len` characters; a lone oversized
/// sentence is cut at a word boundary with an ellipsis.
fn condense_extract(extract: &str, max_len: usize) -> String {
    // The final split element keeps its own period, so sentences are stored
    // bare and rejoined; appending ". " to each would double it up.
    let mut sentences = Vec::new();
    let mut taken = 0;
    for sentence in extract.split(". ") {
        let sentence = sentence.strip_suffix('.').unwrap_or(sentence);
        let count = sentence.chars().count();
        if taken + count > max_len {
            break;
        }
        sentences.push(sentence);
        taken += count + 2;
    }

    let mut summary = match sentences.is_empty() {
        true => String::new(),
        false => format!("{}.", sentences.join(". ")),
    };
    if summary.is_empty() {
        let head: String = extract.chars().take(max_len).collect();
        summary = match head.rsplit_once(' ') {
            Some((words, _)) => format!("{}...", words),
            None => head,
        };
    }

    summary
}
