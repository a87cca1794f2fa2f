// file: src/pipeline/orchestrator.rs
// description: runs the image and video surveys end to end
// reference: search -> manifest links -> selection, printed to the console

use crate::client::QueryClient;
use crate::config::SurveyConfig;
use crate::error::Result;
use crate::extractor::LinkExtractor;
use crate::models::{AssetLink, ManifestUrl, SearchQuery, SearchResponse};
use crate::pipeline::progress::{FetchStats, ProgressTracker};
use crate::selector::{ClassificationReport, ImageSelector, VideoClassifier, disjoint_check};
use crate::utils::OperationTimer;
use crate::utils::logging::{format_error, format_info, format_success, format_warning};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use tracing::info;

const SLOW_SEARCH: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Serialize)]
pub struct ImageSurvey {
    pub query: SearchQuery,
    pub status: u16,
    pub total_hits: Option<u64>,
    pub manifests: Vec<ManifestUrl>,
    pub originals: Vec<AssetLink>,
    pub shown: usize,
    pub stats: FetchStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoSurvey {
    pub query: SearchQuery,
    pub status: u16,
    pub total_hits: Option<u64>,
    pub manifests: Vec<ManifestUrl>,
    pub classification: ClassificationReport,
    pub lists_equal: bool,
    pub first_manifest_videos: Vec<AssetLink>,
    pub contributor_flagged: Vec<ManifestUrl>,
    pub stats: FetchStats,
}

pub struct SurveyPipeline {
    client: QueryClient,
    config: SurveyConfig,
    colored: bool,
}

impl SurveyPipeline {
    pub fn new(client: QueryClient, config: SurveyConfig, colored: bool) -> Self {
        Self {
            client,
            config,
            colored,
        }
    }

    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    pub async fn run_images<W: Write>(
        &self,
        query: &SearchQuery,
        count: usize,
        out: &mut W,
    ) -> Result<ImageSurvey> {
        let timer = OperationTimer::new("image survey");

        let response = self.client.search(query).await?;
        timer.warn_if_slow(SLOW_SEARCH, "search request");
        print_response(&response, out)?;

        let total_hits = LinkExtractor::total_hits(&response);
        let manifests = LinkExtractor::extract_manifest_links(&response)?;
        info!(
            "Search returned {} manifests (total hits: {})",
            manifests.len(),
            total_hits.map_or_else(|| "unknown".to_string(), |hits| hits.to_string())
        );

        let progress = self.tracker(manifests.len());
        writeln!(
            out,
            "{}",
            format_info(&format!(
                "{} original images for \"{}\":",
                count,
                query.title()
            ))
        )?;

        let originals = ImageSelector::new(&self.client)
            .with_progress(&progress)
            .select_originals(&manifests, count, out)
            .await?;

        progress.finish();
        let stats = progress.get_stats();
        timer.finish_with_count(stats.manifests_fetched);

        Ok(ImageSurvey {
            query: query.clone(),
            status: response.status(),
            total_hits,
            shown: originals.len().min(count),
            manifests,
            originals,
            stats,
        })
    }

    pub async fn run_videos<W: Write>(
        &self,
        query: &SearchQuery,
        contributor_tag: &str,
        out: &mut W,
    ) -> Result<VideoSurvey> {
        let timer = OperationTimer::new("video survey");

        let response = self.client.search(query).await?;
        timer.warn_if_slow(SLOW_SEARCH, "search request");
        print_response(&response, out)?;

        let total_hits = LinkExtractor::total_hits(&response);
        let manifests = LinkExtractor::extract_manifest_links(&response)?;
        info!("Search returned {} manifests", manifests.len());

        let progress = self.tracker(manifests.len());
        let classifier = VideoClassifier::new(&self.client).with_progress(&progress);

        let (classification, fetched) = classifier.fetch_and_classify(&manifests).await;

        let mut video = classification.video.clone();
        let mut non_video = classification.non_video.clone();
        let lists_equal = disjoint_check(&mut video, &mut non_video);

        if lists_equal {
            writeln!(
                out,
                "{}",
                format_success(&format!(
                    "RESULT OF COMPARISON: records for \"{}\" with media_type={} refer to video and non-video type of files.",
                    query.keywords(),
                    query.media_type()
                ))
            )?;
            writeln!(out, "These records contain links to video:")?;
            for url in &video {
                writeln!(out, "{}", url)?;
            }
        } else {
            writeln!(
                out,
                "{}",
                format_warning(
                    "RESULT OF COMPARISON: Some links contain only one (video or non-video) type of files."
                )
            )?;
        }

        if !classification.failures.is_empty() {
            writeln!(
                out,
                "{}",
                format_error(&format!(
                    "{} manifests could not be classified:",
                    classification.failures.len()
                ))
            )?;
            for failure in &classification.failures {
                writeln!(out, "{} - {}", failure.url, failure.error)?;
            }
        }

        let first_manifest_videos = classifier
            .first_video_files_from(&manifests, &fetched)
            .await?;
        let listed: Vec<&str> = first_manifest_videos.iter().map(AssetLink::as_str).collect();
        for (index, url) in manifests.iter().enumerate() {
            writeln!(
                out,
                "WEB LINK n.:{} - {} - LINKS TO VIDEO: {:?}",
                index + 1,
                url,
                listed
            )?;
        }

        let contributor_flagged =
            VideoClassifier::filter_by_contributor_tag(&manifests, contributor_tag);
        writeln!(
            out,
            "{}",
            format_warning(
                "These links may not contain functional link to video (return error: Access denied):"
            )
        )?;
        for url in &contributor_flagged {
            writeln!(out, "{}", url)?;
        }

        progress.finish();
        let stats = progress.get_stats();
        timer.finish_with_count(stats.manifests_fetched);

        Ok(VideoSurvey {
            query: query.clone(),
            status: response.status(),
            total_hits,
            manifests,
            classification,
            lists_equal,
            first_manifest_videos,
            contributor_flagged,
            stats,
        })
    }

    fn tracker(&self, total: usize) -> ProgressTracker {
        if self.config.show_progress {
            ProgressTracker::with_color(total, self.colored)
        } else {
            ProgressTracker::hidden()
        }
    }
}

fn print_response<W: Write>(response: &SearchResponse, out: &mut W) -> std::io::Result<()> {
    if response.is_success() {
        writeln!(
            out,
            "{}",
            format_success(&format!("Request is successful: {}.", response.status()))
        )
    } else {
        writeln!(
            out,
            "{}",
            format_error(&format!("Request returned an error: {}.", response.status()))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_response_verdicts() {
        let mut out = Vec::new();
        print_response(&SearchResponse::new("u", 200, "{}"), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Request is successful: 200."));

        let mut out = Vec::new();
        print_response(&SearchResponse::new("u", 400, "{}"), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Request returned an error: 400."));
    }
}
