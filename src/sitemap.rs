//! XML sitemap generation. Full regeneration on every call; no pagination.

use crate::catalog::Catalog;
use chrono::Utc;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        };
        f.write_str(tag)
    }
}

#[derive(Debug, Clone)]
pub struct SitemapEntry {
    /// Site-relative route, e.g. `/categories/office-suites`.
    pub route: String,
    pub priority: f64,
    pub changefreq: ChangeFreq,
}

const STATIC_ROUTES: &[(&str, f64, ChangeFreq)] = &[
    ("/", 1.0, ChangeFreq::Daily),
    ("/categories", 0.9, ChangeFreq::Weekly),
    ("/search", 0.8, ChangeFreq::Daily),
    ("/about", 0.7, ChangeFreq::Monthly),
    ("/submit", 0.6, ChangeFreq::Monthly),
];

/// Static pages plus one entry per category and per alternative.
pub fn sitemap_entries(catalog: &Catalog) -> Vec<SitemapEntry> {
    let mut entries: Vec<SitemapEntry> = STATIC_ROUTES
        .iter()
        .map(|(route, priority, changefreq)| SitemapEntry {
            route: route.to_string(),
            priority: *priority,
            changefreq: *changefreq,
        })
        .collect();

    entries.extend(catalog.categories().iter().map(|category| SitemapEntry {
        route: format!("/categories/{}", category.slug),
        priority: 0.8,
        changefreq: ChangeFreq::Weekly,
    }));

    entries.extend(catalog.alternatives().iter().map(|alt| SitemapEntry {
        route: format!("/alternatives/{}", alt.id),
        priority: 0.7,
        changefreq: ChangeFreq::Weekly,
    }));

    entries
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Serializes the full sitemap as a sitemaps.org 0.9 urlset document.
/// `<lastmod>` is the generation time for every entry, matching the site's
/// historical behavior, rather than each entity's own update timestamp.
pub fn build_sitemap(catalog: &Catalog, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let lastmod = Utc::now().to_rfc3339();

    let urls: Vec<String> = sitemap_entries(catalog)
        .iter()
        .map(|entry| {
            format!(
                "  <url>\n    <loc>{loc}</loc>\n    <lastmod>{lastmod}</lastmod>\n    <changefreq>{changefreq}</changefreq>\n    <priority>{priority:.1}</priority>\n  </url>",
                loc = xml_escape(&format!("{base}{}", entry.route)),
                lastmod = lastmod,
                changefreq = entry.changefreq,
                priority = entry.priority,
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}\n</urlset>",
        urls.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_slug_appears_exactly_once() {
        let catalog = Catalog::seeded();
        let entries = sitemap_entries(&catalog);
        for category in catalog.categories() {
            let route = format!("/categories/{}", category.slug);
            let count = entries.iter().filter(|e| e.route == route).count();
            assert_eq!(count, 1, "route {route} appeared {count} times");
        }
    }

    #[test]
    fn every_alternative_gets_a_route() {
        let catalog = Catalog::seeded();
        let entries = sitemap_entries(&catalog);
        for alt in catalog.alternatives() {
            assert!(entries
                .iter()
                .any(|e| e.route == format!("/alternatives/{}", alt.id)));
        }
        // 5 static + 5 categories + 5 alternatives
        assert_eq!(entries.len(), 15);
    }

    #[test]
    fn document_is_well_formed_urlset() {
        let catalog = Catalog::seeded();
        let xml = build_sitemap(&catalog, "https://example.org/");
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.trim_end().ends_with("</urlset>"));
        assert!(xml.contains("<loc>https://example.org/categories/office-suites</loc>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert_eq!(xml.matches("<url>").count(), 15);
    }

    #[test]
    fn locations_are_xml_escaped() {
        assert_eq!(xml_escape("a&b<c>"), "a&amp;b&lt;c&gt;");
    }
}
