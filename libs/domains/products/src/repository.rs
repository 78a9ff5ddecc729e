use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ordered by id
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Same result as `find_all`, through a hand-written SQL statement
    async fn find_all_raw(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Products with `prix > threshold`, ordered by id
    async fn find_by_price_greater_than(&self, threshold: f64) -> ProductResult<Vec<Product>>;

    /// Insert when `id` is `None`, otherwise replace every mutable field of
    /// row `id`. Updating a missing row is `NotFound`.
    async fn save(&self, id: Option<i32>, input: ProductInput) -> ProductResult<Product>;

    /// Returns whether a row was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i32, Product>,
    last_id: i32,
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids start at 1 and are never reused, like a `SERIAL` column.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn find_all_raw(&self) -> ProductResult<Vec<Product>> {
        self.find_all().await
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn find_by_price_greater_than(&self, threshold: f64) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store
            .products
            .values()
            .filter(|p| p.prix > threshold)
            .cloned()
            .collect())
    }

    async fn save(&self, id: Option<i32>, input: ProductInput) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        match id {
            None => {
                store.last_id += 1;
                let product = Product::from_input(store.last_id, input);
                store.products.insert(product.id, product.clone());

                tracing::info!(product_id = product.id, "Created product");
                Ok(product)
            }
            Some(id) => {
                let slot = store
                    .products
                    .get_mut(&id)
                    .ok_or(ProductError::NotFound(id))?;
                *slot = Product::from_input(id, input);

                tracing::info!(product_id = id, "Updated product");
                Ok(slot.clone())
            }
        }
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(nom: &str, prix: f64) -> ProductInput {
        ProductInput {
            nom: nom.to_string(),
            prix,
            prix_achat: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let repo = InMemoryProductRepository::new();

        let product = repo.save(None, input("Chaise", 49.9)).await.unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.nom, "Chaise");

        let fetched = repo.find_by_id(product.id).await.unwrap();
        assert_eq!(fetched, Some(product));
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let repo = InMemoryProductRepository::new();
        assert_eq!(repo.find_by_id(404).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryProductRepository::new();

        let first = repo.save(None, input("Chaise", 10.0)).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.save(None, input("Table", 10.0)).await.unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let repo = InMemoryProductRepository::new();
        for nom in ["Chaise", "Table", "Lampe"] {
            repo.save(None, input(nom, 10.0)).await.unwrap();
        }

        let ids: Vec<i32> = repo.find_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(repo.find_all_raw().await.unwrap(), repo.find_all().await.unwrap());
    }

    #[tokio::test]
    async fn test_price_filter_is_strictly_greater() {
        let repo = InMemoryProductRepository::new();
        repo.save(None, input("Gomme", 1.0)).await.unwrap();
        repo.save(None, input("Stylo", 2.5)).await.unwrap();
        repo.save(None, input("Cahier", 4.0)).await.unwrap();

        let names: Vec<String> = repo
            .find_by_price_greater_than(2.5)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.nom)
            .collect();
        assert_eq!(names, vec!["Cahier"]);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = InMemoryProductRepository::new();
        let mut original = input("Chaise", 49.9);
        original.prix_achat = Some(20.0);
        let created = repo.save(None, original).await.unwrap();

        let updated = repo
            .save(Some(created.id), input("Fauteuil", 99.0))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.nom, "Fauteuil");
        assert_eq!(updated.prix_achat, None);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let result = repo.save(Some(9), input("Chaise", 10.0)).await;
        assert!(matches!(result, Err(ProductError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryProductRepository::new();
        let product = repo.save(None, input("Chaise", 10.0)).await.unwrap();

        assert!(repo.delete(product.id).await.unwrap());
        assert!(!repo.delete(product.id).await.unwrap());
    }
}
