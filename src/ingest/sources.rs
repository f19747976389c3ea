//! Stub collectors for the known listing sites. Live fetches were never
//! built for these sources; each returns canned data so the rest of the
//! pipeline can be exercised end to end.

use super::{AlternativeSource, CollectedAlternative};
use crate::error::Result;
use chrono::Utc;
use tracing::instrument;

pub const OPEN_ALTERNATIVE_SOURCE: &str = "openalternative.co";
pub const ALTERNATIVE_TO_SOURCE: &str = "alternativeto.net";
pub const OSS_ALTERNATIVES_SOURCE: &str = "ossalternatives.to";
pub const OPEN_ALTLY_SOURCE: &str = "openaltly.com";
pub const GITHUB_SOURCE: &str = "github.com";

fn libreoffice_record() -> CollectedAlternative {
    CollectedAlternative {
        name: "LibreOffice".to_string(),
        description: "Free and open source office suite".to_string(),
        website: "https://libreoffice.org".to_string(),
        repository: Some("https://github.com/LibreOffice/core".to_string()),
        license: "MPL-2.0".to_string(),
        platforms: vec![
            "Windows".to_string(),
            "macOS".to_string(),
            "Linux".to_string(),
        ],
        category: "office".to_string(),
        proprietary_alternative: "Microsoft Office".to_string(),
        features: vec![
            "Word Processing".to_string(),
            "Spreadsheets".to_string(),
            "Presentations".to_string(),
            "Database".to_string(),
        ],
        pros: vec![
            "Free".to_string(),
            "Cross-platform".to_string(),
            "Regular updates".to_string(),
        ],
        cons: vec![
            "Interface feels dated".to_string(),
            "Large file size".to_string(),
        ],
        rating: Some(4.2),
        review_count: Some(1250),
        stars: Some(1500),
        forks: Some(300),
        last_updated: Utc::now(),
        source: OPEN_ALTERNATIVE_SOURCE.to_string(),
    }
}

#[cfg(test)]
pub(crate) fn sample_record() -> CollectedAlternative {
    libreoffice_record()
}

/// openalternative.co listing pages.
#[derive(Debug, Default)]
pub struct OpenAlternativeCo;

#[async_trait::async_trait]
impl AlternativeSource for OpenAlternativeCo {
    fn source_name(&self) -> &'static str {
        OPEN_ALTERNATIVE_SOURCE
    }

    #[instrument(skip(self))]
    async fn collect(&self) -> Result<Vec<CollectedAlternative>> {
        // Scraping was never implemented; canned data stands in.
        Ok(vec![libreoffice_record()])
    }
}

/// alternativeto.net software database.
#[derive(Debug, Default)]
pub struct AlternativeTo;

#[async_trait::async_trait]
impl AlternativeSource for AlternativeTo {
    fn source_name(&self) -> &'static str {
        ALTERNATIVE_TO_SOURCE
    }

    #[instrument(skip(self))]
    async fn collect(&self) -> Result<Vec<CollectedAlternative>> {
        Ok(Vec::new())
    }
}

/// ossalternatives.to database.
#[derive(Debug, Default)]
pub struct OssAlternatives;

#[async_trait::async_trait]
impl AlternativeSource for OssAlternatives {
    fn source_name(&self) -> &'static str {
        OSS_ALTERNATIVES_SOURCE
    }

    #[instrument(skip(self))]
    async fn collect(&self) -> Result<Vec<CollectedAlternative>> {
        Ok(Vec::new())
    }
}

/// openaltly.com curated lists.
#[derive(Debug, Default)]
pub struct OpenAltly;

#[async_trait::async_trait]
impl AlternativeSource for OpenAltly {
    fn source_name(&self) -> &'static str {
        OPEN_ALTLY_SOURCE
    }

    #[instrument(skip(self))]
    async fn collect(&self) -> Result<Vec<CollectedAlternative>> {
        Ok(Vec::new())
    }
}

/// GitHub awesome-alternatives topic, via the REST API.
#[derive(Debug, Default)]
pub struct GithubAwesomeLists;

#[async_trait::async_trait]
impl AlternativeSource for GithubAwesomeLists {
    fn source_name(&self) -> &'static str {
        GITHUB_SOURCE
    }

    #[instrument(skip(self))]
    async fn collect(&self) -> Result<Vec<CollectedAlternative>> {
        Ok(Vec::new())
    }
}

/// Every stub source, in the fixed collection priority order.
pub fn all_sources() -> Vec<Box<dyn AlternativeSource>> {
    vec![
        Box::new(OpenAlternativeCo),
        Box::new(AlternativeTo),
        Box::new(OssAlternatives),
        Box::new(OpenAltly),
        Box::new(GithubAwesomeLists),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::collect_all;

    #[tokio::test]
    async fn stub_sources_yield_one_record_total() {
        let report = collect_all(&all_sources()).await;
        assert_eq!(report.succeeded, 5);
        assert_eq!(report.failed(), 0);
        assert_eq!(report.alternatives.len(), 1);
        assert_eq!(report.alternatives[0].name, "LibreOffice");
    }
}
