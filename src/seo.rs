//! Meta-tag and schema.org structured-data synthesis for site pages.

use crate::domain::OpenSourceAlternative;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const SITE_NAME: &str = "Open Alternatives";
pub const SITE_LOGO_URL: &str = "https://openalternatives.github.io/logo.png";

const DEFAULT_OG_IMAGE: &str = "/og-image.jpg";
const DEFAULT_KEYWORDS: &str = "open source, alternatives, free software";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Website,
    Article,
    Product,
}

/// Semantic description of a page, from which meta tags and structured data
/// are derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoData {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub canonical: Option<String>,
    pub page_type: PageType,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl SeoData {
    pub fn page(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            keywords: None,
            og_image: None,
            canonical: None,
            page_type: PageType::Website,
            published_time: None,
            modified_time: None,
            author: None,
            tags: None,
        }
    }
}

/// Resolved meta-tag set with defaults filled in for omitted fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaTags {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_image: String,
    pub canonical: Option<String>,
    pub page_type: PageType,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
}

pub fn meta_tags(seo: &SeoData) -> MetaTags {
    MetaTags {
        title: seo.title.clone(),
        description: seo.description.clone(),
        keywords: seo
            .keywords
            .clone()
            .unwrap_or_else(|| DEFAULT_KEYWORDS.to_string()),
        og_image: seo
            .og_image
            .clone()
            .unwrap_or_else(|| DEFAULT_OG_IMAGE.to_string()),
        canonical: seo.canonical.clone(),
        page_type: seo.page_type,
        published_time: seo.published_time.clone(),
        modified_time: seo.modified_time.clone(),
        author: seo.author.clone(),
        tags: seo.tags.clone(),
    }
}

fn base_structured_data(seo: &SeoData, schema_type: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": schema_type,
        "headline": seo.title,
        "description": seo.description,
        "url": seo.canonical,
        "author": {
            "@type": "Organization",
            "name": seo.author.as_deref().unwrap_or(SITE_NAME),
        },
        "publisher": {
            "@type": "Organization",
            "name": SITE_NAME,
            "logo": {
                "@type": "ImageObject",
                "url": SITE_LOGO_URL,
            },
        },
    })
}

/// Builds the JSON-LD object for a page. When `alternative` is given the
/// page is about one catalog entry and gets a SoftwareApplication shape;
/// article pages get an Article shape; everything else is a plain WebPage.
pub fn structured_data(seo: &SeoData, alternative: Option<&OpenSourceAlternative>) -> Value {
    if seo.page_type == PageType::Article {
        let mut data = base_structured_data(seo, "Article");
        data["datePublished"] = json!(seo.published_time);
        data["dateModified"] = json!(seo.modified_time);
        data["keywords"] = json!(seo.tags.as_ref().map(|t| t.join(", ")));
        return data;
    }

    if let Some(alt) = alternative {
        let mut data = base_structured_data(seo, "SoftwareApplication");
        data["name"] = json!(alt.name);
        data["description"] = json!(alt.description);
        data["url"] = json!(alt.website);
        data["applicationCategory"] = json!(alt.category_id);
        data["operatingSystem"] = json!(alt
            .platforms
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", "));
        data["license"] = json!(alt.license);
        data["aggregateRating"] = json!({
            "@type": "AggregateRating",
            "ratingValue": alt.rating,
            "reviewCount": alt.review_count,
        });
        return data;
    }

    base_structured_data(seo, "WebPage")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

/// BreadcrumbList with 1-based positions, in input order.
pub fn breadcrumb_structured_data(items: &[Breadcrumb]) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                json!({
                    "@type": "ListItem",
                    "position": index + 1,
                    "name": item.name,
                    "item": item.url,
                })
            })
            .collect::<Vec<_>>(),
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

pub fn faq_structured_data(faqs: &[FaqEntry]) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": faqs
            .iter()
            .map(|faq| {
                json!({
                    "@type": "Question",
                    "name": faq.question,
                    "acceptedAnswer": {
                        "@type": "Answer",
                        "text": faq.answer,
                    },
                })
            })
            .collect::<Vec<_>>(),
    })
}
