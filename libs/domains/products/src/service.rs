//! Product Service - validation and error normalization

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;

/// Service layer between the HTTP handlers and the repository.
///
/// Enforces field validation on create and normalizes repository errors:
/// the kinds each operation recognizes survive unchanged, anything else
/// collapses to `Internal`.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ProductResult<Vec<Product>> {
        self.repository
            .find_all()
            .await
            .map_err(ProductError::into_internal)
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| match err {
                ProductError::NotFound => ProductError::NotFound,
                other => other.into_internal(),
            })
    }

    /// Create a product.
    ///
    /// The six business fields are checked in a fixed order (name,
    /// quantity, code_value, is_published, expiration, price) and the
    /// first empty/zero field aborts the call before the repository is
    /// touched.
    #[instrument(skip(self, input), fields(code_value = %input.code_value))]
    pub async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        validate_fields(&input)?;

        self.repository.create(input).await.map_err(|err| match err {
            ProductError::Duplicated => ProductError::Duplicated,
            other => other.into_internal(),
        })
    }

    /// Update a product.
    ///
    /// Fields are not revalidated here; the handler merges the patch
    /// against the persisted record before calling in.
    #[instrument(skip(self, product), fields(product_id = product.id))]
    pub async fn update(&self, product: Product) -> ProductResult<()> {
        self.repository
            .update(product)
            .await
            .map_err(|err| match err {
                ProductError::NotFound => ProductError::NotFound,
                ProductError::Duplicated => ProductError::Duplicated,
                other => other.into_internal(),
            })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ProductResult<()> {
        self.repository.delete(id).await.map_err(|err| match err {
            ProductError::NotFound => ProductError::NotFound,
            other => other.into_internal(),
        })
    }
}

fn validate_fields(input: &NewProduct) -> ProductResult<()> {
    if input.name.is_empty() {
        return Err(ProductError::InvalidField("name"));
    }
    if input.quantity == 0 {
        return Err(ProductError::InvalidField("quantity"));
    }
    if input.code_value.is_empty() {
        return Err(ProductError::InvalidField("code_value"));
    }
    if input.is_published.is_empty() {
        return Err(ProductError::InvalidField("is_published"));
    }
    if input.expiration.is_empty() {
        return Err(ProductError::InvalidField("expiration"));
    }
    if input.price == 0.0 {
        return Err(ProductError::InvalidField("price"));
    }
    Ok(())
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
