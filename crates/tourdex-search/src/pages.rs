//! The site's fixed pages.
//!
//! These are indexed whether or not any CMS collection could be loaded.

use tourdex_core::SiteConfig;

use crate::{Document, DocumentKind};

/// A page that exists independently of CMS content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPage {
    pub title: &'static str,
    pub path: &'static str,
    pub excerpt: &'static str,
    pub keywords: &'static [&'static str],
}

pub const STATIC_PAGES: [StaticPage; 7] = [
    StaticPage {
        title: "Home",
        path: "index.html",
        excerpt: "Handpicked holidays, honeymoons and group tours across India and abroad.",
        keywords: &["home", "holidays", "travel", "agency", "tours", "packages"],
    },
    StaticPage {
        title: "About Us",
        path: "about.html",
        excerpt: "Who we are, how we plan trips and the team behind every itinerary.",
        keywords: &["about", "company", "team", "story", "mission", "experience"],
    },
    StaticPage {
        title: "Our Services",
        path: "services.html",
        excerpt: "Flights, hotels, visas, transfers and custom itineraries.",
        keywords: &["services", "flights", "hotels", "visa", "transfers", "insurance"],
    },
    StaticPage {
        title: "Tour Packages",
        path: "tours.html",
        excerpt: "Browse domestic and international tour packages.",
        keywords: &["tours", "packages", "domestic", "international", "itinerary", "deals"],
    },
    StaticPage {
        title: "Gallery",
        path: "gallery.html",
        excerpt: "Photos from our travellers' trips.",
        keywords: &["gallery", "photos", "pictures", "memories"],
    },
    StaticPage {
        title: "Book a Tour",
        path: "booking.html",
        excerpt: "Send a booking request and we will confirm availability.",
        keywords: &["booking", "book", "reserve", "enquiry", "request"],
    },
    StaticPage {
        title: "Contact Us",
        path: "contact.html",
        excerpt: "Call, email or visit our office. Answers to common questions.",
        keywords: &["contact", "phone", "email", "address", "office", "support", "faq"],
    },
];

impl StaticPage {
    /// Build the document for this page on `site`.
    pub fn to_document(&self, site: &SiteConfig) -> Document {
        Document::new(DocumentKind::Page, self.title, site.url_for(self.path))
            .with_excerpt(self.excerpt)
            .with_keywords(self.keywords.iter().copied())
    }
}

/// Documents for every static page, in navigation order.
pub fn static_documents(site: &SiteConfig) -> Vec<Document> {
    STATIC_PAGES
        .iter()
        .map(|page| page.to_document(site))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_documents() {
        let site = SiteConfig::new("Test", "https://example.com");
        let docs = static_documents(&site);

        assert_eq!(docs.len(), STATIC_PAGES.len());
        assert!(docs.iter().all(|doc| doc.kind == DocumentKind::Page));
        assert_eq!(docs[0].url, "https://example.com/index.html");
        assert_eq!(docs[6].title, "Contact Us");
        assert!(docs[6].keywords.iter().any(|k| k == "contact"));
    }

    #[test]
    fn test_static_paths_unique() {
        let mut paths: Vec<_> = STATIC_PAGES.iter().map(|page| page.path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), STATIC_PAGES.len());
    }
}
