// file: src/extractor/links.rs
// description: extracts asset manifest urls from a search response
// reference: collection.items[].href of the collection+json envelope

use crate::error::{MediaError, Result};
use crate::models::{ManifestUrl, SearchResponse};
use crate::models::response::SearchEnvelope;
use tracing::debug;

pub struct LinkExtractor;

impl LinkExtractor {
    /// Manifest urls in response order. Fails when `collection.items[].href` is absent.
    pub fn extract_manifest_links(response: &SearchResponse) -> Result<Vec<ManifestUrl>> {
        let envelope = Self::envelope(response)?;

        let links: Vec<ManifestUrl> = envelope
            .collection
            .items
            .into_iter()
            .map(|item| ManifestUrl::new(item.href))
            .collect();

        debug!("Extracted {} manifest links", links.len());
        Ok(links)
    }

    pub fn total_hits(response: &SearchResponse) -> Option<u64> {
        Self::envelope(response)
            .ok()
            .and_then(|envelope| envelope.collection.metadata)
            .and_then(|metadata| metadata.total_hits)
    }

    fn envelope(response: &SearchResponse) -> Result<SearchEnvelope> {
        serde_json::from_str(response.body())
            .map_err(|e| MediaError::decode(response.url(), e.to_string()))
    }
}
