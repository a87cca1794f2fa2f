// file: src/selector/mod.rs
// description: asset selection and classification module exports
// reference: internal module structure

pub mod images;
pub mod videos;

pub use images::ImageSelector;
pub use videos::{ClassificationReport, VideoClassifier, disjoint_check};

use crate::client::QueryClient;
use crate::error::Result;
use crate::models::{Manifest, ManifestUrl};
use crate::pipeline::ProgressTracker;
use tracing::warn;

/// Fetches one manifest and records the outcome on the tracker.
pub(crate) async fn fetch_tracked(
    client: &QueryClient,
    progress: Option<&ProgressTracker>,
    url: &ManifestUrl,
) -> Result<Manifest> {
    if let Some(progress) = progress {
        progress.set_message(url.to_string());
    }

    match client.fetch_manifest(url).await {
        Ok(links) => {
            if let Some(progress) = progress {
                progress.inc_fetched(links.len());
            }
            Ok(Manifest::new(url.clone(), links))
        }
        Err(e) => {
            warn!("Failed to fetch manifest {}: {}", url, e);
            if let Some(progress) = progress {
                progress.inc_failed();
            }
            Err(e)
        }
    }
}
