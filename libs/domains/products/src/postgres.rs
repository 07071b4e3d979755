use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr};

use crate::entity;
use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;

/// SeaORM-backed repository over the `products` table.
///
/// The only code in the crate that inspects `DbErr`: a unique-key
/// violation (the `code_value` constraint) becomes `Duplicated`, an update
/// that matched no row becomes `NotFound`, everything unrecognized becomes
/// `Internal`.
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn translate_db_err(err: DbErr) -> ProductError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ProductError::Duplicated,
        _ => ProductError::Internal(err.to_string()),
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(translate_db_err)?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Product> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(translate_db_err)?
            .map(Product::from)
            .ok_or(ProductError::NotFound)
    }

    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();

        let model = entity::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(translate_db_err)?;

        tracing::info!(product_id = model.id, "created product");
        Ok(model.into())
    }

    async fn update(&self, product: Product) -> ProductResult<()> {
        let id = product.id;
        let active_model: entity::ActiveModel = product.into();

        entity::Entity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(|err| match err {
                DbErr::RecordNotUpdated => ProductError::NotFound,
                other => translate_db_err(other),
            })?;

        tracing::info!(product_id = id, "updated product");
        Ok(())
    }

    async fn delete(&self, id: i32) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(translate_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProductError::NotFound);
        }

        tracing::info!(product_id = id, "deleted product");
        Ok(())
    }
}
