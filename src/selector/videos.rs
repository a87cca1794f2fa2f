// file: src/selector/videos.rs
// description: separates video-bearing manifests from non-video ones
// reference: asset kind parsed from the file extension (mp4, mov, m4v)

use crate::client::QueryClient;
use crate::error::Result;
use crate::models::{AssetLink, Manifest, ManifestFailure, ManifestUrl};
use crate::pipeline::ProgressTracker;
use crate::selector::fetch_tracked;
use serde::Serialize;
use tracing::{debug, info};

/// Outcome of classifying a list of manifests. Each url lands in exactly one list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationReport {
    pub video: Vec<ManifestUrl>,
    pub non_video: Vec<ManifestUrl>,
    pub failures: Vec<ManifestFailure>,
}

impl ClassificationReport {
    fn record(&mut self, manifest: &Manifest) {
        let target = if manifest.has_video() {
            &mut self.video
        } else {
            &mut self.non_video
        };

        if !target.contains(&manifest.url) {
            target.push(manifest.url.clone());
        }
    }

    pub fn classified(&self) -> usize {
        self.video.len() + self.non_video.len()
    }
}

pub struct VideoClassifier<'a> {
    client: &'a QueryClient,
    progress: Option<&'a ProgressTracker>,
}

impl<'a> VideoClassifier<'a> {
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

    /// Fetches each manifest in order. Failed fetches are reported, not classified.
    pub async fn classify(&self, manifest_urls: &[ManifestUrl]) -> ClassificationReport {
        self.fetch_and_classify(manifest_urls).await.0
    }

    /// Same as `classify`, also handing back the manifests that were fetched.
    pub async fn fetch_and_classify(
        &self,
        manifest_urls: &[ManifestUrl],
    ) -> (ClassificationReport, Vec<Manifest>) {
        let mut report = ClassificationReport::default();
        let mut fetched = Vec::with_capacity(manifest_urls.len());

        for url in manifest_urls {
            match fetch_tracked(self.client, self.progress, url).await {
                Ok(manifest) => {
                    report.record(&manifest);
                    fetched.push(manifest);
                }
                Err(e) => report.failures.push(ManifestFailure {
                    url: url.clone(),
                    error: e.to_string(),
                }),
            }
        }

        info!(
            "Classified {} manifests: {} with video, {} without, {} failed",
            report.classified(),
            report.video.len(),
            report.non_video.len(),
            report.failures.len()
        );
        (report, fetched)
    }

    pub fn classify_manifests(manifests: &[Manifest]) -> ClassificationReport {
        let mut report = ClassificationReport::default();
        for manifest in manifests {
            report.record(manifest);
        }
        report
    }

    /// Video files of the first manifest only; later manifests are never fetched.
    pub async fn first_video_file_per_manifest(
        &self,
        manifest_urls: &[ManifestUrl],
    ) -> Result<Vec<AssetLink>> {
        let Some(first) = manifest_urls.first() else {
            return Ok(Vec::new());
        };

        if manifest_urls.len() > 1 {
            debug!(
                "Listing video files of the first manifest only, {} not fetched",
                manifest_urls.len() - 1
            );
        }

        let manifest = fetch_tracked(self.client, self.progress, first).await?;
        Ok(manifest.video_links())
    }

    /// Video files of the first manifest, reusing it when it was already fetched.
    pub async fn first_video_files_from(
        &self,
        manifest_urls: &[ManifestUrl],
        fetched: &[Manifest],
    ) -> Result<Vec<AssetLink>> {
        let Some(first) = manifest_urls.first() else {
            return Ok(Vec::new());
        };

        match fetched.iter().find(|manifest| &manifest.url == first) {
            Some(manifest) => Ok(manifest.video_links()),
            None => self.first_video_file_per_manifest(manifest_urls).await,
        }
    }

    /// Urls whose item id carries `@<tag>`. Manifest contents are not consulted.
    pub fn filter_by_contributor_tag(manifest_urls: &[ManifestUrl], tag: &str) -> Vec<ManifestUrl> {
        manifest_urls
            .iter()
            .filter(|url| url.contributor().as_deref() == Some(tag))
            .cloned()
            .collect()
    }
}

/// Sorts both lists in place and reports whether they are equal.
/// Two non-empty disjoint lists therefore always compare false.
pub fn disjoint_check(video: &mut [ManifestUrl], non_video: &mut [ManifestUrl]) -> bool {
    video.sort();
    non_video.sort();
    video == non_video
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn urls(raw: &[&str]) -> Vec<ManifestUrl> {
        raw.iter().map(|url| ManifestUrl::new(*url)).collect()
    }

    fn manifest(url: &str, links: &[&str]) -> Manifest {
        Manifest::new(
            ManifestUrl::new(url),
            links.iter().map(|link| AssetLink::new(*link)).collect(),
        )
    }

    #[test]
    fn test_classify_manifests_partition() {
        let report = VideoClassifier::classify_manifests(&[
            manifest("m1", &["x.mp4"]),
            manifest("m2", &["y.jpg"]),
        ]);

        assert_eq!(report.video, urls(&["m1"]));
        assert_eq!(report.non_video, urls(&["m2"]));
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_mixed_manifest_is_video_only() {
        let report = VideoClassifier::classify_manifests(&[manifest(
            "m1",
            &["a~orig.mp4", "a~thumb.jpg", "metadata.json"],
        )]);

        assert_eq!(report.video, urls(&["m1"]));
        assert!(report.non_video.is_empty());
    }

    #[test]
    fn test_duplicate_urls_recorded_once() {
        let report = VideoClassifier::classify_manifests(&[
            manifest("m1", &["x.mp4"]),
            manifest("m1", &["x.mp4"]),
            manifest("m2", &[]),
        ]);

        assert_eq!(report.video, urls(&["m1"]));
        assert_eq!(report.non_video, urls(&["m2"]));
        assert_eq!(report.classified(), 2);
    }

    #[test]
    fn test_filter_by_contributor_tag() {
        let filtered = VideoClassifier::filter_by_contributor_tag(
            &urls(&["http://x/@NASA/1", "http://x/other"]),
            "NASA",
        );
        assert_eq!(filtered, urls(&["http://x/@NASA/1"]));
    }

    #[test]
    fn test_filter_by_contributor_tag_is_exact() {
        let filtered = VideoClassifier::filter_by_contributor_tag(
            &urls(&["http://x/clip@NASA_JPL/c.json", "http://x/clip@nasa/c.json"]),
            "NASA",
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_disjoint_check() {
        assert!(!disjoint_check(&mut urls(&["a"]), &mut urls(&["b"])));
        assert!(disjoint_check(&mut [], &mut []));
        assert!(disjoint_check(&mut urls(&["b", "a"]), &mut urls(&["a", "b"])));
        assert!(!disjoint_check(&mut urls(&["a"]), &mut []));
    }

    #[test]
    fn test_disjoint_check_sorts_in_place() {
        let mut video = urls(&["c", "a", "b"]);
        let mut non_video = urls(&["z"]);
        disjoint_check(&mut video, &mut non_video);
        assert_eq!(video, urls(&["a", "b", "c"]));
    }
}
