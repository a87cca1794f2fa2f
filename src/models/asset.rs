// file: src/models/asset.rs
// description: manifest and asset link models with structured filename classification
// reference: images-assets.nasa.gov naming, e.g. PIA22228~orig.jpg

use crate::extractor::patterns::ASSET_FILENAME;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Quality/size variant encoded in an asset filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rendition {
    Original,
    Large,
    Medium,
    Small,
    Thumbnail,
    Preview,
    Mobile,
    Unknown,
}

impl Rendition {
    fn from_variant(variant: &str) -> Self {
        match variant.to_ascii_lowercase().as_str() {
            "orig" | "original" => Rendition::Original,
            "large" => Rendition::Large,
            "medium" => Rendition::Medium,
            "small" => Rendition::Small,
            "thumb" | "thumbnail" => Rendition::Thumbnail,
            "preview" => Rendition::Preview,
            "mobile" => Rendition::Mobile,
            _ => Rendition::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Video,
    Audio,
    Caption,
    Metadata,
    Other,
}

impl AssetKind {
    fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "tif" | "tiff" | "gif" => AssetKind::Image,
            "mp4" | "mov" | "m4v" => AssetKind::Video,
            "mp3" | "m4a" | "wav" => AssetKind::Audio,
            "srt" | "vtt" => AssetKind::Caption,
            "json" => AssetKind::Metadata,
            _ => AssetKind::Other,
        }
    }
}

/// Last path segment of a URL, or of a bare path when it does not parse as one.
fn last_segment(raw: &str) -> &str {
    let path = raw.split(['?', '#']).next().unwrap_or(raw);
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}

/// One concrete file inside a manifest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetLink(String);

impl AssetLink {
    pub fn new(link: impl Into<String>) -> Self {
        Self(link.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> &str {
        last_segment(&self.0)
    }

    pub fn rendition(&self) -> Rendition {
        ASSET_FILENAME
            .captures(self.file_name())
            .and_then(|caps| caps.name("variant"))
            .map(|variant| Rendition::from_variant(variant.as_str()))
            .unwrap_or(Rendition::Unknown)
    }

    pub fn kind(&self) -> AssetKind {
        ASSET_FILENAME
            .captures(self.file_name())
            .and_then(|caps| caps.name("ext"))
            .map(|ext| AssetKind::from_extension(ext.as_str()))
            .unwrap_or(AssetKind::Other)
    }

    pub fn is_original(&self) -> bool {
        self.rendition() == Rendition::Original
    }

    pub fn is_video(&self) -> bool {
        self.kind() == AssetKind::Video
    }
}

impl fmt::Display for AssetLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL of one item's asset manifest, as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManifestUrl(String);

impl ManifestUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Contributor tag from the `<item id>@<tag>` path segment, if present.
    pub fn contributor(&self) -> Option<String> {
        let segments: Vec<String> = match Url::parse(&self.0) {
            Ok(url) => url
                .path_segments()
                .map(|segments| segments.map(str::to_string).collect())
                .unwrap_or_default(),
            Err(_) => self.0.split('/').map(str::to_string).collect(),
        };

        segments.iter().find_map(|segment| {
            let decoded = segment.replace("%40", "@");
            decoded
                .rsplit_once('@')
                .map(|(_, tag)| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
        })
    }
}

impl fmt::Display for ManifestUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A manifest URL with the asset links it returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub url: ManifestUrl,
    pub links: Vec<AssetLink>,
}

impl Manifest {
    pub fn new(url: ManifestUrl, links: Vec<AssetLink>) -> Self {
        Self { url, links }
    }

    pub fn has_video(&self) -> bool {
        self.links.iter().any(AssetLink::is_video)
    }

    pub fn video_links(&self) -> Vec<AssetLink> {
        self.links.iter().filter(|link| link.is_video()).cloned().collect()
    }
}

/// A manifest whose fetch or decode failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestFailure {
    pub url: ManifestUrl,
    pub error: String,
}
