// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod client;
pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod selector;
pub mod utils;

pub use client::QueryClient;
pub use config::{ApiConfig, Config, SurveyConfig};
pub use error::{MediaError, Result};
pub use exporter::{ExportedSurvey, JsonExporter};
pub use extractor::LinkExtractor;
pub use models::{
    AssetKind, AssetLink, Manifest, ManifestFailure, ManifestUrl, MediaType, Rendition,
    SearchQuery, SearchResponse,
};
pub use pipeline::{FetchStats, ImageSurvey, ProgressTracker, SurveyPipeline, VideoSurvey};
pub use selector::{ClassificationReport, ImageSelector, VideoClassifier, disjoint_check};
pub use utils::{OperationTimer, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _client = QueryClient::new(&config.api).unwrap();
        let _query = SearchQuery::new("Mars", "Mars", MediaType::Video, "2018", "2018");
    }
}
