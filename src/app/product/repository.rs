//! Product repository

use async_trait::async_trait;

use super::model::{Product, ProductForm};
use crate::core::error::StoreError;

/// Data access for the `products` relation. Every method is a single
/// statement; implementations must be safe to share between requests.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Products ordered by id. A non-empty `filter` keeps only names that
    /// contain it, ignoring case.
    async fn list(&self, filter: Option<&str>) -> Result<Vec<Product>, StoreError>;

    async fn fetch(&self, id: i32) -> Result<Option<Product>, StoreError>;

    /// Inserts a row and returns the id the store assigned.
    async fn create(&self, form: &ProductForm) -> Result<i32, StoreError>;

    /// Replaces name, size and price. Returns `false` when no row has `id`.
    async fn update(&self, id: i32, form: &ProductForm) -> Result<bool, StoreError>;

    /// Returns `false` when no row has `id`.
    async fn delete(&self, id: i32) -> Result<bool, StoreError>;
}

/// Treats an empty filter the same as no filter.
pub fn active_filter(filter: Option<&str>) -> Option<&str> {
    filter.filter(|f| !f.is_empty())
}
