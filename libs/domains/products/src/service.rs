//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Validation and existence checks live here; the repository only persists.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Listing through the hand-written SQL statement
    #[instrument(skip(self))]
    pub async fn list_products_raw(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all_raw().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn products_priced_above(&self, threshold: f64) -> ProductResult<Vec<Product>> {
        self.repository.find_by_price_greater_than(threshold).await
    }

    /// Create a new product. Nothing is written when validation fails.
    #[instrument(skip(self, input), fields(product_name = %input.nom))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        input.validate()?;
        self.repository.save(None, input).await
    }

    /// Replace every mutable field of an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i32, input: ProductInput) -> ProductResult<Product> {
        input.validate()?;

        if self.repository.find_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }

        self.repository.save(Some(id), input).await
    }

    /// Delete a product. Missing ids, including one removed by a concurrent
    /// delete, are `NotFound`.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
