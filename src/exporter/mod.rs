// file: src/exporter/mod.rs
// description: survey export module exports
// reference: internal module structure

pub mod json;

pub use json::{ExportedSurvey, JsonExporter};
