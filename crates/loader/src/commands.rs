//! Loader operations behind the CLI subcommands.

use std::fs::File;
use std::path::Path;

use storefront_core::{Encoding, SCHEMA_VERSION};
use storefront_products::{Catalog, derive_categories};

use crate::config::LoaderConfig;
use crate::convert::{SeedFiles, read_csv, write_seed_files};
use crate::error::{LoaderError, LoaderResult};

/// Outcome of [`convert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub products: usize,
    pub categories: usize,
    pub files: SeedFiles,
}

/// Outcome of [`validate`]. Duplicate ids are reported but do not fail validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub total: usize,
    /// Positions (0-based) of records with an empty id.
    pub uninitialized: Vec<usize>,
    pub duplicate_ids: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.uninitialized.is_empty()
    }
}

/// Convert a CSV export into `products.yaml` and `categories.yaml` under the
/// configured output directory.
pub fn convert(csv_path: &Path, config: &LoaderConfig) -> LoaderResult<ConvertReport> {
    tracing::info!(
        csv = %csv_path.display(),
        schema_version = SCHEMA_VERSION,
        "converting catalog export"
    );

    let file = File::open(csv_path).map_err(|e| LoaderError::io(csv_path, e))?;
    let products = read_csv(file, &config.image_extension)?;
    let files = write_seed_files(&products, &config.out_dir)?;
    let categories = derive_categories(&products).len();

    Ok(ConvertReport {
        products: products.len(),
        categories,
        files,
    })
}

/// Check a products seed file for uninitialized records and duplicate ids.
pub fn validate(path: &Path) -> LoaderResult<ValidationReport> {
    let catalog = Catalog::load(path)?;
    let report = check_catalog(&catalog, false)?;
    log_report(path, &report);
    Ok(report)
}

/// Like [`validate`], but also fails when any id is duplicated.
pub fn validate_strict(path: &Path) -> LoaderResult<ValidationReport> {
    let catalog = Catalog::load(path)?;
    let report = check_catalog(&catalog, true)?;
    log_report(path, &report);
    Ok(report)
}

/// Build the validation report for an already loaded catalog.
///
/// With `strict`, the first duplicated id is returned as a conflict instead.
pub fn check_catalog(catalog: &Catalog, strict: bool) -> LoaderResult<ValidationReport> {
    let uninitialized = catalog.uninitialized();
    for index in &uninitialized {
        tracing::warn!(index, "record has an empty id");
    }

    let duplicate_ids: Vec<String> = catalog
        .duplicate_ids()
        .into_iter()
        .map(str::to_string)
        .collect();
    for id in &duplicate_ids {
        tracing::warn!(%id, "duplicate product id");
    }

    if strict {
        catalog.ensure_unique_ids()?;
    }

    Ok(ValidationReport {
        total: catalog.len(),
        uninitialized,
        duplicate_ids,
    })
}

fn log_report(path: &Path, report: &ValidationReport) {
    tracing::info!(
        path = %path.display(),
        total = report.total,
        uninitialized = report.uninitialized.len(),
        duplicates = report.duplicate_ids.len(),
        "catalog validated"
    );
}

/// Render one product from a seed file.
pub fn show(path: &Path, id: &str, encoding: Encoding) -> LoaderResult<String> {
    let catalog = Catalog::load(path)?;
    let product = catalog.require(id)?;
    Ok(encoding.encode_pretty(product)?)
}

/// Render the products of a seed file whose category is one of `categories`.
pub fn sample(path: &Path, categories: &[String], encoding: Encoding) -> LoaderResult<String> {
    let catalog = Catalog::load(path)?;
    let wanted: Vec<&str> = categories.iter().map(String::as_str).collect();
    let products = catalog.subcategory_sample(&wanted);

    tracing::debug!(
        requested = ?wanted,
        matched = products.len(),
        "subcategory sample"
    );

    Ok(encoding.encode_pretty(&products)?)
}
