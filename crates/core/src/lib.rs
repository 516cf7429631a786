//! `storefront-core` — shared building blocks for catalog records.
//!
//! This crate contains **pure** primitives (no IO beyond what the codec needs
//! to turn text into values and back).

pub mod codec;
pub mod entity;
pub mod error;

pub use codec::{Encoding, is_zero, null_as_zero};
pub use entity::{Entity, Initialized, duplicate_ids};
pub use error::{CodecError, DomainError, DomainResult};

/// Version of the catalog record shape shared with the catalog loader.
///
/// Bump this whenever a field is added, removed or renamed on any record, and
/// update the loader's conversion in the same change.
pub const SCHEMA_VERSION: u32 = 1;
