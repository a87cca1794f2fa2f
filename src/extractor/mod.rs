// file: src/extractor/mod.rs
// description: response extraction module exports
// reference: internal module structure

pub mod links;
pub mod patterns;

pub use links::LinkExtractor;
