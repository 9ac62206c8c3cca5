//! In-process product store
//!
//! Mirrors the Postgres repository's semantics without a database: ids come
//! from a sequence, rows stay ordered by id, and prices are coerced from the
//! submitted text.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::{Product, ProductForm};
use super::repository::{active_filter, ProductRepository};
use crate::core::error::StoreError;

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Product>,
}

#[derive(Default)]
pub struct MemoryProductRepository {
    table: RwLock<Table>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn parse_price(raw: &str) -> Result<f64, StoreError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| StoreError::InvalidPrice(raw.to_string()))
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn list(&self, filter: Option<&str>) -> Result<Vec<Product>, StoreError> {
        let table = self.table.read().await;
        let needle = active_filter(filter).map(str::to_lowercase);

        Ok(table
            .rows
            .values()
            .filter(|p| match &needle {
                Some(needle) => p.name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn fetch(&self, id: i32) -> Result<Option<Product>, StoreError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, form: &ProductForm) -> Result<i32, StoreError> {
        let price = parse_price(&form.price)?;
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(
            id,
            Product {
                id,
                name: form.name.clone(),
                size: form.size.clone(),
                price,
            },
        );
        Ok(id)
    }

    async fn update(&self, id: i32, form: &ProductForm) -> Result<bool, StoreError> {
        let price = parse_price(&form.price)?;
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(product) => {
                product.name = form.name.clone();
                product.size = form.size.clone();
                product.price = price;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}
