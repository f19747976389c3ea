pub mod seed;

use crate::domain::{
    Category, OpenSourceAlternative, ProprietarySoftware, SearchFilters, SearchResult, SortBy,
    SortOrder,
};
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Owned, in-memory catalog store. Loaded once at startup from seed data;
/// new alternatives enter only through the ingestion path.
#[derive(Debug, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    proprietary: Vec<ProprietarySoftware>,
    alternatives: Vec<OpenSourceAlternative>,
}

/// A `category_id`/`proprietary_software_id` that points at no stored entity.
/// The store stays denormalized and unchecked; these are reported, not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub alternative_id: String,
    pub field: &'static str,
    pub target: String,
}

impl Catalog {
    pub fn new(
        categories: Vec<Category>,
        proprietary: Vec<ProprietarySoftware>,
        alternatives: Vec<OpenSourceAlternative>,
    ) -> Self {
        Self {
            categories,
            proprietary,
            alternatives,
        }
    }

    /// Catalog populated with the built-in sample dataset.
    pub fn seeded() -> Self {
        let catalog = seed::seed_catalog();
        let dangling = catalog.verify_references();
        if !dangling.is_empty() {
            warn!("seed data contains {} dangling references", dangling.len());
        }
        catalog
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn proprietary(&self) -> &[ProprietarySoftware] {
        &self.proprietary
    }

    pub fn alternatives(&self) -> &[OpenSourceAlternative] {
        &self.alternatives
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    pub fn alternative_by_id(&self, id: &str) -> Option<&OpenSourceAlternative> {
        self.alternatives.iter().find(|a| a.id == id)
    }

    pub fn alternatives_in_category(&self, category_id: &str) -> Vec<&OpenSourceAlternative> {
        self.alternatives
            .iter()
            .filter(|a| a.category_id == category_id)
            .collect()
    }

    /// Write entry point for the ingestion path. Records whose id already
    /// exists in the store are replaced rather than duplicated.
    pub fn insert_alternatives(&mut self, incoming: Vec<OpenSourceAlternative>) {
        for alt in incoming {
            match self.alternatives.iter_mut().find(|a| a.id == alt.id) {
                Some(existing) => {
                    debug!("replacing alternative {}", alt.id);
                    *existing = alt;
                }
                None => self.alternatives.push(alt),
            }
        }
    }

    /// Filter, sort, and paginate the alternatives. `page` is 1-based.
    pub fn search(&self, filters: &SearchFilters, page: usize, limit: usize) -> SearchResult {
        let mut hits: Vec<&OpenSourceAlternative> = self
            .alternatives
            .iter()
            .filter(|a| {
                filters
                    .category
                    .as_ref()
                    .map_or(true, |c| a.category_id == *c)
            })
            .filter(|a| {
                filters
                    .license
                    .as_ref()
                    .map_or(true, |l| a.license.eq_ignore_ascii_case(l))
            })
            .filter(|a| {
                filters.platform.as_ref().map_or(true, |p| {
                    a.platforms
                        .iter()
                        .any(|pl| pl.supported && pl.name.eq_ignore_ascii_case(p))
                })
            })
            .filter(|a| filters.min_rating.map_or(true, |min| a.rating >= min))
            .collect();

        let sort_by = filters.sort_by.unwrap_or(SortBy::Popularity);
        let order = filters.sort_order.unwrap_or(SortOrder::Desc);
        hits.sort_by(|a, b| {
            let ord = match sort_by {
                // No popularity score lives on alternatives themselves;
                // bookmark count is the closest engagement proxy.
                SortBy::Popularity => cmp_f64(a.bookmark_count as f64, b.bookmark_count as f64),
                SortBy::Rating => cmp_f64(a.rating, b.rating),
                SortBy::Newest => a.created_at.cmp(&b.created_at),
                SortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            };
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });

        let total = hits.len();
        let page = page.max(1);
        let start = (page - 1).saturating_mul(limit);
        let alternatives = hits
            .into_iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();

        SearchResult {
            alternatives,
            total,
            page,
            limit,
            filters: filters.clone(),
        }
    }

    /// Reports foreign keys that resolve to nothing. Referential integrity
    /// was never enforced upstream; this keeps the gaps observable.
    pub fn verify_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();
        for alt in &self.alternatives {
            if !self.categories.iter().any(|c| c.id == alt.category_id) {
                dangling.push(DanglingReference {
                    alternative_id: alt.id.clone(),
                    field: "category_id",
                    target: alt.category_id.clone(),
                });
            }
            if !self
                .proprietary
                .iter()
                .any(|p| p.id == alt.proprietary_software_id)
            {
                dangling.push(DanglingReference {
                    alternative_id: alt.id.clone(),
                    field: "proprietary_software_id",
                    target: alt.proprietary_software_id.clone(),
                });
            }
        }
        dangling
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
