use serde::{Deserialize, Serialize};

use storefront_core::{Entity, Initialized, is_zero, null_as_zero};

/// Catalog record: one product.
///
/// `featured` and `ibu` are omit-on-zero: an empty `featured` or a zero `ibu`
/// is left out of JSON/YAML payloads so the backing store does not index the
/// attribute. Decoding restores the zero value, so "zero" and "never set" are
/// indistinguishable. An explicit `null` for any field also decodes to zero.
///
/// The field set and wire names are shared with the catalog loader; bump
/// [`storefront_core::SCHEMA_VERSION`] when changing them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Primary key in the backing store.
    #[serde(deserialize_with = "null_as_zero")]
    pub id: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub url: String,
    /// Secondary/sort key in the backing store.
    #[serde(deserialize_with = "null_as_zero")]
    pub sk: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub name: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub category: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub style: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub description: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub price: f32,
    #[serde(deserialize_with = "null_as_zero")]
    pub image: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_zero")]
    pub featured: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub brewery: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub abv: f32,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_zero")]
    pub ibu: i64,
}

/// Ordered list of products, as produced by the loader or the service.
pub type Products = Vec<Product>;

/// The two fields the backing store keys a product record by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StoreKey<'a> {
    pub id: &'a str,
    pub sk: &'a str,
}

impl Product {
    /// A record is initialized iff its `id` is non-empty.
    ///
    /// Use [`Initialized`] on `Option<&Product>` for the "record may be absent"
    /// case; `None` is never initialized.
    pub fn initialized(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn is_featured(&self) -> bool {
        !self.featured.is_empty()
    }

    pub fn store_key(&self) -> StoreKey<'_> {
        StoreKey {
            id: &self.id,
            sk: &self.sk,
        }
    }
}

impl Initialized for Product {
    fn initialized(&self) -> bool {
        Product::initialized(self)
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
