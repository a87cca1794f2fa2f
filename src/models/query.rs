// file: src/models/query.rs
// description: search query model and request parameter construction
// reference: images-api.nasa.gov /search query string

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one search request. Fields are fixed once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    keywords: String,
    title: String,
    media_type: MediaType,
    year_start: String,
    year_end: String,
    description: Option<String>,
}

impl SearchQuery {
    pub fn new(
        keywords: impl Into<String>,
        title: impl Into<String>,
        media_type: MediaType,
        year_start: impl Into<String>,
        year_end: impl Into<String>,
    ) -> Self {
        Self {
            keywords: keywords.into(),
            title: title.into(),
            media_type,
            year_start: year_start.into(),
            year_end: year_end.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn year_start(&self) -> &str {
        &self.year_start
    }

    pub fn year_end(&self) -> &str {
        &self.year_end
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Query string pairs in request order. `description` is only sent when set.
    pub fn parameters(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(6);

        if let Some(description) = &self.description {
            params.push(("description", description.clone()));
        }

        params.push(("keywords", self.keywords.clone()));
        params.push(("title", self.title.clone()));
        params.push(("media_type", self.media_type.as_str().to_string()));
        params.push(("year_start", self.year_start.clone()));
        params.push(("year_end", self.year_end.clone()));

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_image_query_parameters() {
        let query = SearchQuery::new("Mars, Mars surface", "Mars", MediaType::Image, "2018", "2018")
            .with_description("planet Mars surface, image");

        let names: Vec<&str> = query.parameters().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["description", "keywords", "title", "media_type", "year_start", "year_end"]
        );
        assert_eq!(query.parameters()[3].1, "image");
    }

    #[test]
    fn test_video_query_has_no_description() {
        let query = SearchQuery::new("Mars", "Mars", MediaType::Video, "2018", "2018");

        assert!(query.description().is_none());
        assert_eq!(
            query.parameters(),
            vec![
                ("keywords", "Mars".to_string()),
                ("title", "Mars".to_string()),
                ("media_type", "video".to_string()),
                ("year_start", "2018".to_string()),
                ("year_end", "2018".to_string()),
            ]
        );
    }
}
