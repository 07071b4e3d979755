use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::models::{NewProduct, Product};

/// SeaORM entity for the `products` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    #[sea_orm(unique)]
    pub code_value: String,
    pub is_published: String,
    pub expiration: String,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quantity: model.quantity,
            code_value: model.code_value,
            is_published: model.is_published,
            expiration: model.expiration,
            price: model.price,
        }
    }
}

// Insert form: the id stays unset so the database assigns it.
impl From<NewProduct> for ActiveModel {
    fn from(input: NewProduct) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            quantity: Set(input.quantity),
            code_value: Set(input.code_value),
            is_published: Set(input.is_published),
            expiration: Set(input.expiration),
            price: Set(input.price),
        }
    }
}

// Full-row update form, keyed by id.
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            id: Set(product.id),
            name: Set(product.name),
            quantity: Set(product.quantity),
            code_value: Set(product.code_value),
            is_published: Set(product.is_published),
            expiration: Set(product.expiration),
            price: Set(product.price),
        }
    }
}
