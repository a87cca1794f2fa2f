// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod asset;
pub mod query;
pub mod response;

pub use asset::{AssetKind, AssetLink, Manifest, ManifestFailure, ManifestUrl, Rendition};
pub use query::{MediaType, SearchQuery};
pub use response::SearchResponse;
