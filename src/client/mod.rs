// file: src/client/mod.rs
// description: http client module exports
// reference: internal module structure

pub mod query;

pub use query::QueryClient;
