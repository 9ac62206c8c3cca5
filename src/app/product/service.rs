//! Product service
//!
//! Puts a time bound on every repository call and records the operational
//! log lines (added, updated, deleted).

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use super::model::{Product, ProductForm};
use super::repository::ProductRepository;
use crate::core::error::StoreError;

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    timeout: Duration,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>, timeout: Duration) -> Self {
        Self {
            repository,
            timeout,
        }
    }

    async fn bounded<T>(
        &self,
        operation: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        tokio::time::timeout(self.timeout, operation)
            .await
            .map_err(|_| StoreError::Timeout(self.timeout))?
    }

    pub async fn list(&self, filter: &str) -> Result<Vec<Product>, StoreError> {
        self.bounded(self.repository.list(Some(filter))).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<Product>, StoreError> {
        self.bounded(self.repository.fetch(id)).await
    }

    pub async fn create(&self, form: &ProductForm) -> Result<i32, StoreError> {
        let id = self.bounded(self.repository.create(form)).await?;
        info!(
            "New product added: ID={}, Name={}, Size={}, Price={}",
            id, form.name, form.size, form.price
        );
        Ok(id)
    }

    /// Returns whether a row matched. An unknown id is logged, not an error.
    pub async fn update(&self, id: i32, form: &ProductForm) -> Result<bool, StoreError> {
        let matched = self.bounded(self.repository.update(id, form)).await?;
        if matched {
            info!("Product updated with ID: {}", id);
        } else {
            warn!("Update matched no product with ID: {}", id);
        }
        Ok(matched)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let matched = self.bounded(self.repository.delete(id)).await?;
        if matched {
            info!("Product deleted with ID: {}", id);
        } else {
            warn!("Delete matched no product with ID: {}", id);
        }
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::product::memory::MemoryProductRepository;
    use async_trait::async_trait;

    struct StalledRepository;

    #[async_trait]
    impl ProductRepository for StalledRepository {
        async fn list(&self, _filter: Option<&str>) -> Result<Vec<Product>, StoreError> {
            std::future::pending().await
        }

        async fn fetch(&self, _id: i32) -> Result<Option<Product>, StoreError> {
            std::future::pending().await
        }

        async fn create(&self, _form: &ProductForm) -> Result<i32, StoreError> {
            std::future::pending().await
        }

        async fn update(&self, _id: i32, _form: &ProductForm) -> Result<bool, StoreError> {
            std::future::pending().await
        }

        async fn delete(&self, _id: i32) -> Result<bool, StoreError> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_store_times_out() {
        let limit = Duration::from_secs(5);
        let service = ProductService::new(Arc::new(StalledRepository), limit);

        let err = service.list("").await.unwrap_err();
        assert!(matches!(err, StoreError::Timeout(d) if d == limit));
        assert!(matches!(service.delete(1).await, Err(StoreError::Timeout(_))));
    }

    #[tokio::test]
    async fn update_and_delete_report_matches() {
        let service = ProductService::new(
            Arc::new(MemoryProductRepository::new()),
            Duration::from_secs(5),
        );
        let form = ProductForm {
            name: "Widget".to_string(),
            size: "M".to_string(),
            price: "9.99".to_string(),
        };

        let id = service.create(&form).await.unwrap();
        assert!(service.update(id, &form).await.unwrap());
        assert!(!service.update(id + 1, &form).await.unwrap());
        assert!(service.delete(id).await.unwrap());
        assert!(!service.delete(id).await.unwrap());
        assert!(service.get(id).await.unwrap().is_none());
    }
}
