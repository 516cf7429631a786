//! Categories derived from a product list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// A catalog category as written to `categories.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub image: String,
}

/// Build one category per distinct `category` value, in first-occurrence order.
///
/// Ids are 1-based ordinals of first occurrence; each category borrows the
/// image of the first product seen in it.
pub fn derive_categories<'a, I>(products: I) -> Vec<Category>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut seen = HashSet::new();
    let mut categories = Vec::new();

    for product in products {
        if seen.insert(product.category.as_str()) {
            categories.push(Category {
                id: seen.len() as u32,
                name: product.category.clone(),
                image: product.image.clone(),
            });
        }
    }

    categories
}
