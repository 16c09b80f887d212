//! Domain service for catalog import operations.
//!
//! Imports raw spec-source records (from a local JSON file or the remote
//! parser API) into the catalog: brand creation, record transformation, and
//! (brand, slug)-keyed upserts.

use serde::Serialize;
use thiserror::Error;

/// Errors specific to the import process.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid import data: {0}")]
    InvalidData(String),

    #[error("Spec source error: {0}")]
    SpecSource(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for ImportError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Outcome of one import pass.
#[derive(Debug, Default, Serialize)]
pub struct ImportSummary {
    pub brands_created: usize,
    pub mobiles_imported: usize,
    pub skipped: Vec<SkippedRecordDto>,
    /// True when the pass only reported what it would have written.
    pub dry_run: bool,
}

/// A record the pass refused, with the reason.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedRecordDto {
    pub name: String,
    pub reason: String,
}

/// Domain service trait for import operations.
///
/// Abstracts the import pipeline so the CLI commands stay free of transform
/// and storage details, and tests can run against a file without the remote
/// source.
#[async_trait::async_trait]
pub trait ImportService: Send + Sync {
    /// Imports a JSON array of raw device records from a local file.
    ///
    /// Brands referenced by the records are created on first sight; device
    /// records are upserted on (brand, slug) so re-running a file refreshes
    /// instead of duplicating. With `dry_run` nothing is written.
    ///
    /// # Errors
    ///
    /// - Returns [`ImportError::FileNotFound`] if the path does not exist
    /// - Returns [`ImportError::InvalidData`] if the JSON does not parse
    /// - Returns [`ImportError::Database`] on storage failures
    async fn import_file(&self, path: &str, dry_run: bool) -> Result<ImportSummary, ImportError>;

    /// Fetches a brand's device list from the spec source and imports it.
    ///
    /// # Errors
    ///
    /// - Returns [`ImportError::SpecSource`] if the remote fetch fails
    /// - Returns [`ImportError::Database`] on storage failures
    async fn import_brand(&self, brand: &str, dry_run: bool)
    -> Result<ImportSummary, ImportError>;
}
