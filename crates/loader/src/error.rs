//! Loader error model.

use std::path::PathBuf;

use thiserror::Error;

use storefront_core::{CodecError, DomainError};

pub type LoaderResult<T> = Result<T, LoaderError>;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A CSV record could not be turned into a product (1-based record number).
    #[error("record {record}: {source}")]
    Record {
        record: usize,
        #[source]
        source: DomainError,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("config: {0}")]
    Config(String),
}

impl LoaderError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
