// file: src/exporter/json.rs
// description: json export of survey results

use crate::error::Result;
use crate::pipeline::{ImageSurvey, VideoSurvey};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportedSurvey<'a, T: Serialize> {
    pub exported_at: String,
    pub kind: &'static str,
    #[serde(flatten)]
    pub survey: &'a T,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn export_images(&self, survey: &ImageSurvey, pretty: bool) -> Result<PathBuf> {
        self.write("images", survey, pretty)
    }

    pub fn export_videos(&self, survey: &VideoSurvey, pretty: bool) -> Result<PathBuf> {
        self.write("videos", survey, pretty)
    }

    fn write<T: Serialize>(&self, kind: &'static str, survey: &T, pretty: bool) -> Result<PathBuf> {
        let now = Utc::now();
        let exported = ExportedSurvey {
            exported_at: now.to_rfc3339(),
            kind,
            survey,
        };

        let json = if pretty {
            serde_json::to_string_pretty(&exported)?
        } else {
            serde_json::to_string(&exported)?
        };

        let path = self
            .output_dir
            .join(format!("{}-{}.json", kind, now.format("%Y%m%dT%H%M%S%.3fZ")));
        fs::write(&path, json)?;

        info!("Exported {} survey to {}", kind, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssetLink, ManifestUrl, MediaType, SearchQuery};
    use crate::pipeline::FetchStats;
    use tempfile::tempdir;

    fn image_survey() -> ImageSurvey {
        ImageSurvey {
            query: SearchQuery::new("Mars", "Mars", MediaType::Image, "2018", "2018")
                .with_description("planet Mars surface, image"),
            status: 200,
            total_hits: Some(1),
            manifests: vec![ManifestUrl::new("https://x/PIA1/collection.json")],
            originals: vec![AssetLink::new("https://x/PIA1/PIA1~orig.jpg")],
            shown: 1,
            stats: FetchStats::new(),
        }
    }

    #[test]
    fn test_exporter_creation() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("nested/exports"));
        assert!(exporter.is_ok());
        assert!(dir.path().join("nested/exports").is_dir());
    }

    #[test]
    fn test_export_images() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();

        let path = exporter.export_images(&image_survey(), true).unwrap();
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("images-"));

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["kind"], "images");
        assert_eq!(value["status"], 200);
        assert_eq!(value["query"]["media_type"], "image");
        assert_eq!(value["query"]["description"], "planet Mars surface, image");
        assert_eq!(value["originals"][0], "https://x/PIA1/PIA1~orig.jpg");
        assert!(value["exported_at"].is_string());
    }
}
