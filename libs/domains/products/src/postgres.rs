use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbBackend, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, Statement,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, ProductInput},
    repository::ProductRepository,
};

/// Hand-written listing query backing `GET /mesProduits`
pub const FIND_ALL_SQL: &str = r#"SELECT id, nom, prix, "prixAchat" FROM produits ORDER BY id"#;

/// PostgreSQL implementation of ProductRepository
///
/// Each method is a single statement, so concurrent updates to the same row
/// resolve as last-writer-wins.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_all_raw(&self) -> ProductResult<Vec<Product>> {
        let stmt = Statement::from_string(DbBackend::Postgres, FIND_ALL_SQL.to_owned());

        let rows = entity::Model::find_by_statement(stmt)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Product::from))
    }

    async fn find_by_price_greater_than(&self, threshold: f64) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Prix.gt(threshold))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn save(&self, id: Option<i32>, input: ProductInput) -> ProductResult<Product> {
        match id {
            None => {
                let model = entity::ActiveModel::for_insert(input)
                    .insert(&self.db)
                    .await?;

                tracing::info!(product_id = model.id, "Created product");
                Ok(model.into())
            }
            Some(id) => {
                let result = entity::Entity::update_many()
                    .set(entity::ActiveModel::for_update(id, input.clone()))
                    .filter(entity::Column::Id.eq(id))
                    .exec(&self.db)
                    .await?;

                if result.rows_affected == 0 {
                    return Err(ProductError::NotFound(id));
                }

                tracing::info!(product_id = id, "Updated product");
                Ok(Product::from_input(id, input))
            }
        }
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
