//! Validation, sanitization, and reshaping of externally-sourced records
//! into catalog-shaped alternatives.

use super::CollectedAlternative;
use crate::domain::{Feature, OpenSourceAlternative, Platform};
use chrono::Utc;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Keyword → category id. Matched case-insensitively; anything unmatched
/// falls back to "other".
static CATEGORY_KEYWORDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("office", "office-suites"),
        ("productivity", "office-suites"),
        ("media", "media-players"),
        ("audio", "media-players"),
        ("video", "media-players"),
        ("graphics", "graphic-design"),
        ("design", "graphic-design"),
        ("development", "development"),
        ("programming", "development"),
        ("communication", "communication"),
        ("messaging", "communication"),
    ])
});

/// Platform name → icon tag. Unknown platforms get the desktop default.
static PLATFORM_ICONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Windows", "Monitor"),
        ("macOS", "Apple"),
        ("Linux", "Tux"),
        ("Web", "Globe"),
        ("Android", "Smartphone"),
        ("iOS", "Smartphone"),
    ])
});

/// True iff every required field is present and non-empty. Pure predicate;
/// callers filter invalid records out before calling [`transform`].
pub fn validate(alt: &CollectedAlternative) -> bool {
    !alt.name.is_empty()
        && !alt.description.is_empty()
        && !alt.website.is_empty()
        && !alt.license.is_empty()
        && !alt.platforms.is_empty()
        && !alt.category.is_empty()
        && !alt.proprietary_alternative.is_empty()
}

/// Trims every free-text field and every element of every string list.
/// Returns a new record; idempotent.
pub fn sanitize(alt: &CollectedAlternative) -> CollectedAlternative {
    let trim_all = |items: &[String]| items.iter().map(|s| s.trim().to_string()).collect();
    CollectedAlternative {
        name: alt.name.trim().to_string(),
        description: alt.description.trim().to_string(),
        website: alt.website.trim().to_string(),
        repository: alt.repository.as_ref().map(|r| r.trim().to_string()),
        license: alt.license.trim().to_string(),
        platforms: trim_all(&alt.platforms),
        category: alt.category.trim().to_string(),
        proprietary_alternative: alt.proprietary_alternative.trim().to_string(),
        features: trim_all(&alt.features),
        pros: trim_all(&alt.pros),
        cons: trim_all(&alt.cons),
        rating: alt.rating,
        review_count: alt.review_count,
        stars: alt.stars,
        forks: alt.forks,
        last_updated: alt.last_updated,
        source: alt.source.clone(),
    }
}

/// Derives a stable identifier from a name: lowercased, with every character
/// outside `[a-z0-9]` replaced by `-`. Distinct names that normalize the
/// same way collide ("Foo!" and "Foo?" both become "foo-").
pub fn generate_id(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// Maps a free-text category string to a known category id.
pub fn map_category(category: &str) -> &'static str {
    CATEGORY_KEYWORDS
        .get(category.to_lowercase().as_str())
        .copied()
        .unwrap_or("other")
}

/// Maps a platform name to its icon tag.
pub fn platform_icon(platform: &str) -> &'static str {
    PLATFORM_ICONS.get(platform).copied().unwrap_or("Monitor")
}

/// Reshapes collected records into catalog alternatives. Deterministic given
/// the lookup tables, apart from the "now" timestamps it stamps.
pub fn transform(collected: &[CollectedAlternative]) -> Vec<OpenSourceAlternative> {
    collected
        .iter()
        .map(|alt| {
            let now = Utc::now();
            OpenSourceAlternative {
                id: generate_id(&alt.name),
                name: alt.name.clone(),
                description: alt.description.clone(),
                website: alt.website.clone(),
                repository: alt.repository.clone(),
                logo: None,
                screenshots: Vec::new(),
                proprietary_software_id: generate_id(&alt.proprietary_alternative),
                category_id: map_category(&alt.category).to_string(),
                license: alt.license.clone(),
                platforms: alt
                    .platforms
                    .iter()
                    .map(|name| Platform {
                        name: name.clone(),
                        icon: platform_icon(name).to_string(),
                        supported: true,
                    })
                    .collect(),
                languages: Vec::new(),
                last_updated: alt.last_updated,
                features: alt
                    .features
                    .iter()
                    .map(|name| Feature {
                        name: name.clone(),
                        description: String::new(),
                        available: true,
                        notes: None,
                    })
                    .collect(),
                pros: alt.pros.clone(),
                cons: alt.cons.clone(),
                stars: alt.stars,
                forks: alt.forks,
                contributors: None,
                rating: alt.rating.unwrap_or(0.0),
                review_count: alt.review_count.unwrap_or(0),
                bookmark_count: 0,
                created_at: now,
                updated_at: now,
            }
        })
        .collect()
}

/// Keeps the first occurrence of each record, keyed by case-insensitive
/// trimmed name. Order-preserving.
pub fn deduplicate(collected: Vec<CollectedAlternative>) -> Vec<CollectedAlternative> {
    let mut seen = HashSet::new();
    collected
        .into_iter()
        .filter(|alt| seen.insert(alt.name.trim().to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(name: &str) -> CollectedAlternative {
        CollectedAlternative {
            name: name.to_string(),
            description: "A tool".to_string(),
            website: "https://example.org".to_string(),
            repository: None,
            license: "MIT".to_string(),
            platforms: vec!["Linux".to_string()],
            category: "development".to_string(),
            proprietary_alternative: "Closed Tool".to_string(),
            features: vec![],
            pros: vec![],
            cons: vec![],
            rating: None,
            review_count: None,
            stars: None,
            forks: None,
            last_updated: Utc::now(),
            source: "test".to_string(),
        }
    }

    #[test]
    fn validate_rejects_missing_required_fields() {
        assert!(validate(&record("Tool")));

        let mut missing_website = record("Tool");
        missing_website.website.clear();
        assert!(!validate(&missing_website));

        let mut no_platforms = record("Tool");
        no_platforms.platforms.clear();
        assert!(!validate(&no_platforms));

        let mut no_proprietary = record("Tool");
        no_proprietary.proprietary_alternative.clear();
        assert!(!validate(&no_proprietary));
    }

    #[test]
    fn sanitize_trims_everything_and_is_idempotent() {
        let mut messy = record("  Tool  ");
        messy.platforms = vec!["  Linux ".to_string()];
        messy.pros = vec![" fast  ".to_string()];
        messy.repository = Some("  https://example.org/repo ".to_string());

        let clean = sanitize(&messy);
        assert_eq!(clean.name, "Tool");
        assert_eq!(clean.platforms, vec!["Linux"]);
        assert_eq!(clean.pros, vec!["fast"]);
        assert_eq!(clean.repository.as_deref(), Some("https://example.org/repo"));

        let twice = sanitize(&clean);
        assert_eq!(twice.name, clean.name);
        assert_eq!(twice.platforms, clean.platforms);
        assert_eq!(twice.pros, clean.pros);
    }

    #[test]
    fn generate_id_normalizes_and_can_collide() {
        assert_eq!(generate_id("LibreOffice"), "libreoffice");
        assert_eq!(generate_id("Visual Studio Code"), "visual-studio-code");
        assert_eq!(generate_id("Foo!"), generate_id("Foo?"));
    }

    #[test]
    fn map_category_matches_keywords_case_insensitively() {
        assert_eq!(map_category("Programming"), "development");
        assert_eq!(map_category("OFFICE"), "office-suites");
        assert_eq!(map_category("messaging"), "communication");
        assert_eq!(map_category("unknown-xyz"), "other");
    }

    #[test]
    fn platform_icon_has_desktop_default() {
        assert_eq!(platform_icon("Linux"), "Tux");
        assert_eq!(platform_icon("Android"), "Smartphone");
        assert_eq!(platform_icon("PlayStation"), "Monitor");
    }

    #[test]
    fn deduplicate_keeps_first_occurrence() {
        let input = vec![record("Foo"), record("bar"), record("FOO ")];
        let deduped = deduplicate(input);
        let names: Vec<&str> = deduped.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Foo", "bar"]);

        let again = deduplicate(deduped.clone());
        assert_eq!(again.len(), deduped.len());
    }

    #[test]
    fn transform_defaults_engagement_counters_to_zero() {
        let out = transform(&[record("Tool")]);
        assert_eq!(out.len(), 1);
        let alt = &out[0];
        assert_eq!(alt.id, "tool");
        assert_eq!(alt.proprietary_software_id, "closed-tool");
        assert_eq!(alt.category_id, "development");
        assert_eq!(alt.rating, 0.0);
        assert_eq!(alt.review_count, 0);
        assert_eq!(alt.bookmark_count, 0);
        assert_eq!(alt.platforms[0].icon, "Tux");
        assert!(alt.platforms[0].supported);
    }

    #[test]
    fn transform_wraps_feature_names() {
        let mut rec = record("Tool");
        rec.features = vec!["Tabs".to_string()];
        let alt = &transform(&[rec])[0];
        assert_eq!(alt.features.len(), 1);
        assert_eq!(alt.features[0].name, "Tabs");
        assert_eq!(alt.features[0].description, "");
        assert!(alt.features[0].available);
    }
}
