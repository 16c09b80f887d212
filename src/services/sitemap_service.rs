//! XML sitemap generation from the live catalog.

use crate::models::{Brand, Mobile};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("XML serialization error: {0}")]
    Xml(String),
}

#[derive(Debug, Serialize)]
#[serde(rename = "urlset")]
struct UrlSet {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    url: Vec<UrlEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: String,
    /// Kept as a string so "1.0" does not collapse to "1".
    pub priority: String,
}

impl UrlEntry {
    fn new(loc: String, lastmod: &str, changefreq: &str, priority: &str) -> Self {
        Self {
            loc,
            lastmod: lastmod.to_string(),
            changefreq: changefreq.to_string(),
            priority: priority.to_string(),
        }
    }
}

/// One entry per page a crawler can reach: the home page, each brand page,
/// each product page, and the static browse pages.
#[must_use]
pub fn build_entries(base_url: &str, brands: &[Brand], mobiles: &[Mobile]) -> Vec<UrlEntry> {
    let base = base_url.trim_end_matches('/');
    let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

    let mut entries = vec![UrlEntry::new(base.to_string(), &now, "daily", "1.0")];

    for brand in brands {
        entries.push(UrlEntry::new(
            format!("{base}/{}", brand.slug),
            &now,
            "weekly",
            "0.8",
        ));
    }

    for mobile in mobiles {
        entries.push(UrlEntry::new(
            format!("{base}/{}/{}", mobile.brand.to_lowercase(), mobile.slug),
            &now,
            "weekly",
            "0.9",
        ));
    }

    entries.push(UrlEntry::new(format!("{base}/brands"), &now, "monthly", "0.7"));
    entries.push(UrlEntry::new(format!("{base}/search"), &now, "monthly", "0.6"));
    entries.push(UrlEntry::new(format!("{base}/compare"), &now, "monthly", "0.6"));

    entries
}

pub fn to_xml(entries: Vec<UrlEntry>) -> Result<String, SitemapError> {
    let urlset = UrlSet {
        xmlns: "http://www.sitemaps.org/schemas/sitemap/0.9",
        url: entries,
    };

    let body = quick_xml::se::to_string(&urlset).map_err(|e| SitemapError::Xml(e.to_string()))?;

    Ok(format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{body}"))
}

pub fn generate(
    base_url: &str,
    brands: &[Brand],
    mobiles: &[Mobile],
) -> Result<String, SitemapError> {
    to_xml(build_entries(base_url, brands, mobiles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShortSpecs;

    fn brand(slug: &str) -> Brand {
        Brand {
            id: format!("brand-{slug}"),
            name: slug.to_string(),
            slug: slug.to_string(),
            logo: None,
            phone_count: None,
            description: None,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    fn mobile(brand: &str, slug: &str) -> Mobile {
        Mobile {
            id: format!("mobile-{slug}"),
            slug: slug.to_string(),
            name: slug.to_string(),
            brand: brand.to_string(),
            model: slug.to_string(),
            image_url: String::new(),
            imagekit_path: None,
            release_date: "2024-01-01".to_string(),
            price: None,
            short_specs: ShortSpecs::default(),
            carousel_images: Vec::new(),
            specifications: Vec::new(),
            dimensions: None,
            build_materials: None,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn entries_cover_home_catalog_and_static_pages() {
        let brands = vec![brand("samsung"), brand("apple")];
        let mobiles = vec![mobile("samsung", "galaxy-s24-ultra")];

        let entries = build_entries("https://mobile-price.com", &brands, &mobiles);
        assert_eq!(entries.len(), 1 + 2 + 1 + 3);

        assert_eq!(entries[0].loc, "https://mobile-price.com");
        assert_eq!(entries[0].priority, "1.0");
        assert_eq!(entries[1].loc, "https://mobile-price.com/samsung");
        assert_eq!(
            entries[3].loc,
            "https://mobile-price.com/samsung/galaxy-s24-ultra"
        );
        assert_eq!(entries[3].priority, "0.9");
        assert_eq!(entries.last().map(|e| e.loc.as_str()), Some("https://mobile-price.com/compare"));
    }

    #[test]
    fn xml_carries_sitemap_namespace() {
        let xml = generate("https://mobile-price.com", &[brand("samsung")], &[])
            .expect("sitemap should serialize");

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.contains("<loc>https://mobile-price.com/samsung</loc>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
    }
}
