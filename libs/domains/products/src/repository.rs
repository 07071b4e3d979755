use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product};

/// Repository trait for Product persistence
///
/// Implementations translate storage failures into the shared
/// `ProductError` kinds; callers never see datastore-native errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Read every product. An empty table is an empty Vec, not an error.
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Fetch one product by id. Zero rows is `NotFound`.
    async fn find_by_id(&self, id: i32) -> ProductResult<Product>;

    /// Insert a row and return the entity with its assigned id.
    /// A `code_value` collision is `Duplicated`.
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// Full-row update by id. A vanished row is `NotFound`, a `code_value`
    /// collision is `Duplicated`.
    async fn update(&self, product: Product) -> ProductResult<()>;

    /// Delete by id. Deleting a nonexistent id is `NotFound`.
    async fn delete(&self, id: i32) -> ProductResult<()>;
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Honors the same contract as the Postgres implementation: sequential id
/// assignment and uniqueness of `code_value`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<i32, Product>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        result.sort_by_key(|p| p.id);
        Ok(result)
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Product> {
        let products = self.products.read().await;
        products.get(&id).cloned().ok_or(ProductError::NotFound)
    }

    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        if products.values().any(|p| p.code_value == input.code_value) {
            return Err(ProductError::Duplicated);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let product = Product {
            id,
            name: input.name,
            quantity: input.quantity,
            code_value: input.code_value,
            is_published: input.is_published,
            expiration: input.expiration,
            price: input.price,
        };
        products.insert(id, product.clone());

        tracing::info!(product_id = id, "created product");
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<()> {
        let mut products = self.products.write().await;

        if !products.contains_key(&product.id) {
            return Err(ProductError::NotFound);
        }

        let collides = products
            .values()
            .any(|p| p.id != product.id && p.code_value == product.code_value);
        if collides {
            return Err(ProductError::Duplicated);
        }

        tracing::info!(product_id = product.id, "updated product");
        products.insert(product.id, product);
        Ok(())
    }

    async fn delete(&self, id: i32) -> ProductResult<()> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_none() {
            return Err(ProductError::NotFound);
        }

        tracing::info!(product_id = id, "deleted product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(code: &str) -> NewProduct {
        NewProduct {
            name: "widget".to_string(),
            quantity: 5,
            code_value: code.to_string(),
            is_published: "true".to_string(),
            expiration: "2025-01-01".to_string(),
            price: 9.99,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(widget("W1")).await.unwrap();
        let second = repo.create(widget("W2")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_duplicate_code_leaves_no_row() {
        let repo = InMemoryProductRepository::new();
        repo.create(widget("W1")).await.unwrap();

        let result = repo.create(widget("W1")).await;
        assert_eq!(result, Err(ProductError::Duplicated));

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_not_found() {
        let repo = InMemoryProductRepository::new();
        assert_eq!(repo.find_by_id(99).await, Err(ProductError::NotFound));
    }

    #[tokio::test]
    async fn test_find_all_empty_is_ok() {
        let repo = InMemoryProductRepository::new();
        assert_eq!(repo.find_all().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_update_replaces_the_row() {
        let repo = InMemoryProductRepository::new();
        let mut product = repo.create(widget("W1")).await.unwrap();

        product.name = "gadget".to_string();
        repo.update(product.clone()).await.unwrap();

        let fetched = repo.find_by_id(product.id).await.unwrap();
        assert_eq!(fetched.name, "gadget");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let mut product = repo.create(widget("W1")).await.unwrap();
        product.id = 99;

        assert_eq!(repo.update(product).await, Err(ProductError::NotFound));
    }

    #[tokio::test]
    async fn test_update_code_collision_is_duplicated() {
        let repo = InMemoryProductRepository::new();
        repo.create(widget("W1")).await.unwrap();
        let mut second = repo.create(widget("W2")).await.unwrap();

        second.code_value = "W1".to_string();
        assert_eq!(repo.update(second).await, Err(ProductError::Duplicated));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = InMemoryProductRepository::new();
        assert_eq!(repo.delete(99).await, Err(ProductError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_removes_the_row() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(widget("W1")).await.unwrap();

        repo.delete(product.id).await.unwrap();
        assert_eq!(
            repo.find_by_id(product.id).await,
            Err(ProductError::NotFound)
        );
    }
}
