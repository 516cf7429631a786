//! CSV catalog export → product records and YAML seed files.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use storefront_core::{DomainError, DomainResult, Encoding};
use storefront_products::{Product, Products, derive_categories};

use crate::error::{LoaderError, LoaderResult};

pub const PRODUCTS_FILE: &str = "products.yaml";
pub const CATEGORIES_FILE: &str = "categories.yaml";

/// Marker used by catalog exports for "no bitterness rating".
const IBU_NOT_AVAILABLE: &str = "N/A";

/// One CSV record, as exported. Headers match the product wire keys; missing
/// columns read as empty, extra columns are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CsvRecord {
    pub id: String,
    pub url: String,
    pub sk: String,
    pub name: String,
    pub category: String,
    pub style: String,
    pub description: String,
    pub price: String,
    pub featured: String,
    pub brewery: String,
    pub abv: String,
    pub ibu: String,
}

/// Paths written by [`write_seed_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedFiles {
    pub products: PathBuf,
    pub categories: PathBuf,
}

/// Turn one exported record into a product.
///
/// - `category` is slugged: spaces become `-`, letters are lowercased.
/// - `ibu` of `N/A` (or empty) becomes 0, which drops the key on output.
/// - `image` is always `<id>.<image_extension>`; any exported value is ignored.
pub fn format_product(record: CsvRecord, image_extension: &str) -> DomainResult<Product> {
    if record.id.is_empty() {
        return Err(DomainError::invalid_id("id cannot be empty"));
    }

    let price = parse_float("price", &record.price)?;
    let abv = parse_float("abv", &record.abv)?;
    let ibu = parse_ibu(&record.ibu)?;
    let image = format!("{}.{}", record.id, image_extension);

    Ok(Product {
        category: slug_category(&record.category),
        image,
        price,
        abv,
        ibu,
        id: record.id,
        url: record.url,
        sk: record.sk,
        name: record.name,
        style: record.style,
        description: record.description,
        featured: record.featured,
        brewery: record.brewery,
    })
}

/// Read a CSV export (with header row) into products, in file order.
pub fn read_csv<R: io::Read>(reader: R, image_extension: &str) -> LoaderResult<Products> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut products = Vec::new();
    for (index, row) in csv.deserialize::<CsvRecord>().enumerate() {
        let record = index + 1;
        let product = format_product(row?, image_extension)
            .map_err(|source| LoaderError::Record { record, source })?;
        tracing::trace!(record, id = %product.id, "record converted");
        products.push(product);
    }

    Ok(products)
}

/// Write `products.yaml` and `categories.yaml` into `out_dir`, creating it.
pub fn write_seed_files(products: &[Product], out_dir: &Path) -> LoaderResult<SeedFiles> {
    std::fs::create_dir_all(out_dir).map_err(|e| LoaderError::io(out_dir, e))?;

    let files = SeedFiles {
        products: out_dir.join(PRODUCTS_FILE),
        categories: out_dir.join(CATEGORIES_FILE),
    };

    let categories = derive_categories(products);
    write_yaml(&files.products, products)?;
    write_yaml(&files.categories, &categories)?;

    tracing::info!(
        products = products.len(),
        categories = categories.len(),
        out_dir = %out_dir.display(),
        "seed files written"
    );

    Ok(files)
}

fn write_yaml<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> LoaderResult<()> {
    let text = Encoding::Yaml.encode(value)?;
    std::fs::write(path, text).map_err(|e| LoaderError::io(path, e))
}

fn slug_category(category: &str) -> String {
    category.replace(' ', "-").to_lowercase()
}

fn parse_float(field: &str, raw: &str) -> DomainResult<f32> {
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse()
        .map_err(|_| DomainError::validation(format!("{field}: invalid number `{raw}`")))
}

fn parse_ibu(raw: &str) -> DomainResult<i64> {
    if raw.is_empty() || raw == IBU_NOT_AVAILABLE {
        return Ok(0);
    }
    raw.parse()
        .map_err(|_| DomainError::validation(format!("ibu: invalid integer `{raw}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CsvRecord {
        CsvRecord {
            id: "42".to_string(),
            name: "Hop Drop".to_string(),
            category: "Pale Ale".to_string(),
            price: "6.50".to_string(),
            brewery: "Acme".to_string(),
            abv: "5.2".to_string(),
            ibu: "40".to_string(),
            ..CsvRecord::default()
        }
    }

    #[test]
    fn format_product_applies_catalog_rules() {
        let product = format_product(record(), "jpg").unwrap();
        assert_eq!(product.id, "42");
        assert_eq!(product.category, "pale-ale");
        assert_eq!(product.image, "42.jpg");
        assert_eq!(product.price, 6.5);
        assert_eq!(product.abv, 5.2);
        assert_eq!(product.ibu, 40);
    }

    #[test]
    fn ibu_not_available_becomes_zero() {
        let product = format_product(
            CsvRecord {
                ibu: "N/A".to_string(),
                ..record()
            },
            "png",
        )
        .unwrap();
        assert_eq!(product.ibu, 0);
        assert_eq!(product.image, "42.png");
    }

    #[test]
    fn empty_id_and_bad_numbers_are_rejected() {
        let err = format_product(
            CsvRecord {
                id: String::new(),
                ..record()
            },
            "jpg",
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));

        let err = format_product(
            CsvRecord {
                abv: "strong".to_string(),
                ..record()
            },
            "jpg",
        )
        .unwrap_err();
        assert_eq!(err, DomainError::validation("abv: invalid number `strong`"));

        let err = format_product(
            CsvRecord {
                ibu: "4.5".to_string(),
                ..record()
            },
            "jpg",
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn read_csv_keeps_order_and_tolerates_missing_columns() {
        let csv = "id,name,category,abv,ibu,extra\n\
                   1, Alpha ,India Pale Ale,6.5,N/A,x\n\
                   2,Beta,Stout,8,60,y\n";
        let products = read_csv(csv.as_bytes(), "jpg").unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Alpha");
        assert_eq!(products[0].category, "india-pale-ale");
        assert_eq!(products[0].ibu, 0);
        assert_eq!(products[0].price, 0.0);
        assert!(products[0].url.is_empty());
        assert_eq!(products[1].id, "2");
        assert_eq!(products[1].ibu, 60);
    }

    #[test]
    fn read_csv_reports_the_failing_record() {
        let csv = "id,abv\n1,4.0\n,5.0\n";
        let err = read_csv(csv.as_bytes(), "jpg").unwrap_err();
        match err {
            LoaderError::Record { record, source } => {
                assert_eq!(record, 2);
                assert!(matches!(source, DomainError::InvalidId(_)));
            }
            other => panic!("expected Record error, got {other:?}"),
        }
    }
}
