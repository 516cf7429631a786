//! Catalog loader: turns CSV catalog exports into the YAML seed files the
//! products service loads, and inspects existing seed files.
//!
//! The loader is the one collaborator that must track the record shape in
//! `storefront-products` exactly; see [`storefront_core::SCHEMA_VERSION`].

pub mod commands;
pub mod config;
pub mod convert;
pub mod error;

pub use config::LoaderConfig;
pub use error::{LoaderError, LoaderResult};
