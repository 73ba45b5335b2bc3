//! Index builder: maps CMS records to documents.

use tourdex_core::{
    Config, FaqRecord, PartnerRecord, ReviewRecord, RoutesConfig, ServiceRecord, SiteConfig,
    SourceCollections, TourRecord,
};
use tracing::{debug, info};

use crate::{
    Document, DocumentKind, SearchIndex,
    pages::static_documents,
    slug::{normalize_duration, slugify},
};

/// Assembles the document list for a site from its CMS collections.
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    site: SiteConfig,
    routes: RoutesConfig,
}

impl IndexBuilder {
    pub fn new(site: SiteConfig, routes: RoutesConfig) -> Self {
        Self { site, routes }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.site.clone(), config.routes.clone())
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Build a fresh index from `collections`.
    pub fn build(&self, collections: &SourceCollections) -> SearchIndex {
        let index = SearchIndex::new(self.documents(collections));

        info!(
            documents = index.len(),
            records = collections.record_count(),
            "Built site search index"
        );

        index
    }

    /// Static pages followed by tours, services, FAQs, reviews and partners.
    pub fn documents(&self, collections: &SourceCollections) -> Vec<Document> {
        let mut docs = static_documents(&self.site);
        docs.reserve(collections.record_count());

        docs.extend(collections.tours.iter().filter_map(|t| self.tour_document(t)));
        docs.extend(
            collections
                .services
                .iter()
                .filter_map(|s| self.service_document(s)),
        );
        docs.extend(
            collections
                .faqs
                .iter()
                .enumerate()
                .filter_map(|(position, faq)| self.faq_document(position, faq)),
        );
        docs.extend(
            collections
                .reviews
                .iter()
                .filter_map(|r| self.review_document(r)),
        );
        docs.extend(
            collections
                .partners
                .iter()
                .filter_map(|p| self.partner_document(p)),
        );

        docs
    }

    /// Tours without a usable identifier link to the tours listing.
    pub fn tour_document(&self, tour: &TourRecord) -> Option<Document> {
        let name = non_empty(&tour.name)?;
        let id = tour_id(tour);
        let path = if id.is_empty() {
            debug!(name, "Tour has no usable identifier, linking to listing");
            self.routes.tours_page.clone()
        } else {
            self.routes.tour_path(&id)
        };

        let excerpt = tour
            .description
            .as_deref()
            .and_then(non_empty)
            .map(str::to_string)
            .unwrap_or_else(|| tour.highlights.join(", "));

        let compact_duration = tour.duration.as_deref().map(normalize_duration);
        let keywords = tour
            .highlights
            .iter()
            .chain(tour.destination.iter())
            .chain(tour.duration.iter())
            .chain(compact_duration.iter())
            .filter_map(|k| non_empty(k))
            .map(str::to_string)
            .collect::<Vec<_>>();

        Some(
            Document::new(DocumentKind::Tour, name, self.site.url_for(&path))
            .with_excerpt(excerpt)
            .with_keywords(keywords)
            .with_duration(tour.duration.clone())
            .with_price(tour.price.as_ref().map(ToString::to_string))
            .with_destination(tour.destination.clone()),
        )
    }

    /// Services without a usable identifier link to the services listing.
    pub fn service_document(&self, service: &ServiceRecord) -> Option<Document> {
        let title = non_empty(&service.title)?;
        let id = service
            .id
            .as_deref()
            .and_then(non_empty)
            .map_or_else(|| slugify(title), str::to_string);
        let path = if id.is_empty() {
            debug!(title, "Service has no usable identifier, linking to listing");
            self.routes.services_page.clone()
        } else {
            self.routes.service_path(&id)
        };

        Some(
            Document::new(DocumentKind::Service, title, self.site.url_for(&path))
            .with_excerpt(service.description.clone().unwrap_or_default())
            .with_keywords(service.features.iter().cloned()),
        )
    }

    /// FAQ entries link to their position on the FAQ page.
    pub fn faq_document(&self, position: usize, faq: &FaqRecord) -> Option<Document> {
        let question = non_empty(&faq.q)?;
        let anchor = format!("faq-{position}");

        Some(
            Document::new(
                DocumentKind::Faq,
                question,
                self.site.anchor_url(&self.routes.faq_page, &anchor),
            )
            .with_excerpt(faq.a.trim())
            .with_keywords(["faq"])
            .with_anchor(anchor),
        )
    }

    /// Every review links to the shared reviews section.
    pub fn review_document(&self, review: &ReviewRecord) -> Option<Document> {
        let name = non_empty(&review.name)?;
        let anchor = &self.routes.reviews_anchor;

        Some(
            Document::new(
                DocumentKind::Review,
                format!("Review by {name}"),
                self.site.anchor_url(&self.routes.reviews_page, anchor),
            )
            .with_excerpt(review.comment.trim())
            .with_keywords(["review", "testimonial"])
            .with_anchor(anchor.as_str()),
        )
    }

    /// Partners link to their own site when they have one.
    pub fn partner_document(&self, partner: &PartnerRecord) -> Option<Document> {
        let name = non_empty(&partner.name)?;
        let doc = Document::new(DocumentKind::Partner, name, "")
            .with_excerpt(partner.description.clone().unwrap_or_default())
            .with_keywords(["partner"]);

        let doc = match partner.link.as_deref().and_then(non_empty) {
            Some(link) => Document {
                url: link.to_string(),
                ..doc
            },
            None => {
                let anchor = &self.routes.partners_anchor;
                Document {
                    url: self.site.anchor_url(&self.routes.partners_page, anchor),
                    ..doc
                }
                .with_anchor(anchor.as_str())
            }
        };

        Some(doc)
    }
}

/// Stable identifier of a tour: its explicit id, else a slug of its name
/// and normalized duration.
pub fn tour_id(tour: &TourRecord) -> String {
    if let Some(id) = tour.id.as_deref().and_then(non_empty) {
        return id.to_string();
    }

    let duration = tour
        .duration
        .as_deref()
        .map(normalize_duration)
        .unwrap_or_default();
    slugify(&format!("{} {duration}", tour.name))
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
