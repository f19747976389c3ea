//! Batch ingestion of alternative listings from external sources.
//!
//! Each source implements [`AlternativeSource`]; [`collect_all`] runs them in
//! a fixed priority order, tolerates per-source failure, and reports what
//! failed instead of discarding it.

pub mod normalize;
pub mod sources;

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A loosely-structured record as collected from an external site or API,
/// before normalization into the catalog shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectedAlternative {
    pub name: String,
    pub description: String,
    pub website: String,
    pub repository: Option<String>,
    pub license: String,
    pub platforms: Vec<String>,
    pub category: String,
    pub proprietary_alternative: String,
    pub features: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u64>,
    pub stars: Option<u64>,
    pub forks: Option<u64>,
    pub last_updated: DateTime<Utc>,
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Api,
    Scraping,
    Manual,
}

/// Descriptor for one external listing site or API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSource {
    pub name: String,
    pub url: String,
    pub description: String,
    pub kind: SourceKind,
    /// Requests per minute, where the source publishes a limit.
    pub rate_limit: Option<u32>,
}

/// The known external sources, in collection priority order.
pub fn data_sources() -> Vec<DataSource> {
    let source = |name: &str, url: &str, description: &str, kind, rate_limit| DataSource {
        name: name.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        kind,
        rate_limit,
    };
    vec![
        source(
            "OpenAlternative.co",
            "https://openalternative.co",
            "Curated list of open source alternatives",
            SourceKind::Scraping,
            Some(10),
        ),
        source(
            "AlternativeTo",
            "https://alternativeto.net",
            "Comprehensive database of software alternatives",
            SourceKind::Scraping,
            Some(5),
        ),
        source(
            "OSSAlternatives",
            "https://ossalternatives.to",
            "Open source alternatives database",
            SourceKind::Scraping,
            Some(10),
        ),
        source(
            "OpenAltly",
            "https://www.openaltly.com",
            "Curated open source alternatives",
            SourceKind::Scraping,
            Some(10),
        ),
        source(
            "GitHub Awesome Lists",
            "https://github.com/topics/awesome-alternatives",
            "Community-maintained awesome lists",
            SourceKind::Api,
            Some(30),
        ),
    ]
}

/// One external source of alternative listings.
#[async_trait::async_trait]
pub trait AlternativeSource: Send + Sync {
    /// Unique identifier for this source
    fn source_name(&self) -> &'static str;

    /// Fetch all alternative records from this source
    async fn collect(&self) -> Result<Vec<CollectedAlternative>>;
}

/// A source that failed during a collection run.
#[derive(Debug)]
pub struct SourceFailure {
    pub source: &'static str,
    pub error: crate::error::CatalogError,
}

/// Outcome of a full collection run: the merged, deduplicated yield plus an
/// explicit account of which sources failed.
#[derive(Debug)]
pub struct CollectReport {
    pub alternatives: Vec<CollectedAlternative>,
    pub succeeded: usize,
    pub failures: Vec<SourceFailure>,
}

impl CollectReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Runs every source in order, concatenating results. A failing source never
/// aborts the run; its error is recorded in the report. Sources run
/// sequentially so the first-occurrence-wins deduplication stays
/// deterministic.
pub async fn collect_all(sources: &[Box<dyn AlternativeSource>]) -> CollectReport {
    let mut all = Vec::new();
    let mut succeeded = 0;
    let mut failures = Vec::new();

    for source in sources {
        match source.collect().await {
            Ok(records) => {
                info!(
                    source = source.source_name(),
                    records = records.len(),
                    "source collected"
                );
                succeeded += 1;
                all.extend(records);
            }
            Err(error) => {
                warn!(source = source.source_name(), %error, "source failed");
                failures.push(SourceFailure {
                    source: source.source_name(),
                    error,
                });
            }
        }
    }

    CollectReport {
        alternatives: normalize::deduplicate(all),
        succeeded,
        failures,
    }
}

/// Sanitizes, validates, and deduplicates a collection run's raw yield.
/// Invalid records are dropped here so they never reach `transform`.
pub fn clean(collected: Vec<CollectedAlternative>) -> Vec<CollectedAlternative> {
    let sanitized: Vec<CollectedAlternative> =
        collected.iter().map(normalize::sanitize).collect();
    let valid = sanitized
        .into_iter()
        .filter(|alt| {
            let ok = normalize::validate(alt);
            if !ok {
                warn!(name = %alt.name, source = %alt.source, "dropping invalid record");
            }
            ok
        })
        .collect();
    normalize::deduplicate(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_sources_cover_all_known_sites() {
        let sources = data_sources();
        assert_eq!(sources.len(), 5);
        assert_eq!(sources[0].name, "OpenAlternative.co");
        assert!(sources
            .iter()
            .all(|s| s.rate_limit.is_some() && s.url.starts_with("http")));
    }

    #[test]
    fn clean_drops_invalid_and_duplicate_records() {
        let mut valid = sources::sample_record();
        valid.name = " LibreOffice ".to_string();

        let mut invalid = sources::sample_record();
        invalid.website.clear();

        let duplicate = sources::sample_record();

        let cleaned = clean(vec![valid, invalid, duplicate]);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].name, "LibreOffice");
    }
}
