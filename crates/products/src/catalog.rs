//! Read-only view over a loaded product list.

use std::path::Path;

use storefront_core::{CodecError, DomainError, DomainResult, Encoding};

use crate::category::{Category, derive_categories};
use crate::product::{Product, Products};

/// A product catalog loaded from a seed file or built in memory.
///
/// The catalog keeps the products in their original order and never
/// deduplicates them; duplicates and uninitialized records are reported, not
/// rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Products,
}

impl Catalog {
    pub fn from_products(products: Products) -> Self {
        Self { products }
    }

    /// Parse a product list in the given encoding.
    pub fn parse(encoding: Encoding, text: &str) -> Result<Self, CodecError> {
        let products: Products = encoding.decode(text)?;
        Ok(Self { products })
    }

    /// Load a product list from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let path = path.as_ref();
        let encoding = Encoding::from_path(path)?;
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::parse(encoding, &text)?;

        tracing::debug!(
            path = %path.display(),
            %encoding,
            products = catalog.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn into_products(self) -> Products {
        self.products
    }

    /// First product with the given id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn require(&self, id: &str) -> DomainResult<&Product> {
        self.get(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }

    /// Products whose category is one of `categories`, in catalog order.
    pub fn subcategory_sample(&self, categories: &[&str]) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| categories.contains(&p.category.as_str()))
            .collect()
    }

    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_featured()).collect()
    }

    pub fn categories(&self) -> Vec<Category> {
        derive_categories(&self.products)
    }

    /// Positions of records that are not initialized (empty id).
    pub fn uninitialized(&self) -> Vec<usize> {
        self.products
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.initialized())
            .map(|(i, _)| i)
            .collect()
    }

    /// Non-empty ids that occur more than once, in order of first repeat.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        storefront_core::duplicate_ids(&self.products)
            .into_iter()
            .map(String::as_str)
            .collect()
    }

    /// Fail on the first id that occurs more than once.
    pub fn ensure_unique_ids(&self) -> DomainResult<()> {
        match self.duplicate_ids().first() {
            Some(id) => Err(DomainError::conflict(format!("duplicate product id {id}"))),
            None => Ok(()),
        }
    }
}

impl From<Products> for Catalog {
    fn from(products: Products) -> Self {
        Self::from_products(products)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
