// file: src/models/response.rs
// description: raw search response wrapper and the collection+json envelope
// reference: images-api.nasa.gov response format

use serde::Deserialize;

/// Status and body of one search request, kept as received.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    url: String,
    status: u16,
    body: String,
}

impl SearchResponse {
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    pub collection: Collection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Collection {
    pub items: Vec<CollectionItem>,
    #[serde(default)]
    pub metadata: Option<CollectionMetadata>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionItem {
    pub href: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionMetadata {
    pub total_hits: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(SearchResponse::new("u", 200, "").is_success());
        assert!(SearchResponse::new("u", 204, "").is_success());
        assert!(!SearchResponse::new("u", 301, "").is_success());
        assert!(!SearchResponse::new("u", 400, "").is_success());
        assert!(!SearchResponse::new("u", 500, "").is_success());
    }
}
