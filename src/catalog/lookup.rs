//! Catalog lookup

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::{CategoryKey, StaticProduct};

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No product listed for category {0}")]
    NoProduct(CategoryKey),

    #[error("Catalog read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog is not a valid product list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Product shown next to a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub category: CategoryKey,
    pub brand: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
}

impl ProductRecord {
    pub fn from_static(category: CategoryKey, product: &StaticProduct) -> Self {
        Self {
            id: None,
            category,
            brand: product.brand.to_string(),
            name: product.name.to_string(),
            image: product.image.to_string(),
        }
    }
}

pub trait CatalogLookup: Send + Sync {
    /// Product for `category`, preferring `featured` when it is listed.
    fn find(&self, category: CategoryKey, featured: Option<&str>) -> CatalogResult<ProductRecord>;
}

/// Catalog held in memory, loaded once from a JSON product list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<ProductRecord>,
}

impl StaticCatalog {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogLookup for StaticCatalog {
    fn find(&self, category: CategoryKey, featured: Option<&str>) -> CatalogResult<ProductRecord> {
        let in_category = || self.products.iter().filter(move |p| p.category == category);

        featured
            .and_then(|id| in_category().find(|p| p.id.as_deref() == Some(id)))
            .or_else(|| in_category().next())
            .cloned()
            .ok_or(CatalogError::NoProduct(category))
    }
}
