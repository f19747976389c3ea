use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A grouping of alternatives, e.g. "Office Suites". Slugs are unique
/// within the catalog; `parent_id` allows nesting but the seed data only
/// uses a single level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub slug: String,
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The closed-source product an alternative is positioned against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProprietarySoftware {
    pub id: String,
    pub name: String,
    pub description: String,
    pub website: String,
    pub logo: Option<String>,
    pub category_id: String,
    pub popularity: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenSourceAlternative {
    pub id: String,
    pub name: String,
    pub description: String,
    pub website: String,
    pub repository: Option<String>,
    pub logo: Option<String>,
    pub screenshots: Vec<String>,
    pub proprietary_software_id: String,
    pub category_id: String,

    // Technical details
    pub license: String,
    pub platforms: Vec<Platform>,
    pub languages: Vec<String>,
    pub last_updated: DateTime<Utc>,

    // Features and comparison
    pub features: Vec<Feature>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,

    // Community metrics
    pub stars: Option<u64>,
    pub forks: Option<u64>,
    pub contributors: Option<u32>,

    // User engagement
    pub rating: f64,
    pub review_count: u64,
    pub bookmark_count: u64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Value type, not independently identified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    pub icon: String,
    pub supported: bool,
}

/// Value type, not independently identified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub alternative_id: String,
    pub user_id: String,
    pub rating: f64,
    pub title: String,
    pub comment: String,
    pub helpful: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Bookmark/review/submission lists hold weak references into other
/// collections; deleting a target does not cascade here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub bookmarks: Vec<String>,
    pub reviews: Vec<String>,
    pub submissions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Popularity,
    Rating,
    Newest,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Query descriptor for catalog searches. Not a stored entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    pub category: Option<String>,
    pub license: Option<String>,
    pub platform: Option<String>,
    pub min_rating: Option<f64>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

/// One page of search results plus the filters that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub alternatives: Vec<OpenSourceAlternative>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub filters: SearchFilters,
}
