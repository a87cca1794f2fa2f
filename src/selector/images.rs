// file: src/selector/images.rs
// description: selects the original rendition of each image asset
// reference: rendition parsed from the asset filename (~orig)

use crate::client::QueryClient;
use crate::error::Result;
use crate::models::{AssetLink, Manifest, ManifestUrl};
use crate::pipeline::ProgressTracker;
use crate::selector::fetch_tracked;
use std::io::Write;
use tracing::info;

pub struct ImageSelector<'a> {
    client: &'a QueryClient,
    progress: Option<&'a ProgressTracker>,
}

impl<'a> ImageSelector<'a> {
    pub fn new(client: &'a QueryClient) -> Self {
        Self {
            client,
            progress: None,
        }
    }

    pub fn with_progress(mut self, progress: &'a ProgressTracker) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Fetches every manifest in order and returns all original renditions,
    /// printing the first `count` to `out`. The first failed fetch aborts.
    pub async fn select_originals<W: Write>(
        &self,
        manifest_urls: &[ManifestUrl],
        count: usize,
        out: &mut W,
    ) -> Result<Vec<AssetLink>> {
        let mut manifests = Vec::with_capacity(manifest_urls.len());
        for url in manifest_urls {
            manifests.push(fetch_tracked(self.client, self.progress, url).await?);
        }

        let originals = Self::originals(&manifests);
        info!(
            "Found {} original renditions across {} manifests",
            originals.len(),
            manifests.len()
        );

        Self::print_originals(&originals, count, out)?;
        Ok(originals)
    }

    pub fn originals(manifests: &[Manifest]) -> Vec<AssetLink> {
        manifests
            .iter()
            .flat_map(|manifest| manifest.links.iter())
            .filter(|link| link.is_original())
            .cloned()
            .collect()
    }

    /// Writes at most `count` links, one per line. Returns the number written.
    pub fn print_originals<W: Write>(
        originals: &[AssetLink],
        count: usize,
        out: &mut W,
    ) -> std::io::Result<usize> {
        let mut written = 0;
        for link in originals.iter().take(count) {
            writeln!(out, "{}", link)?;
            written += 1;
        }
        Ok(written)
    }
}
