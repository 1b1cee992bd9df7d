use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Product
impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            created_at: model.created_at.into(),
        }
    }
}

// Conversion from domain Product to Sea-ORM ActiveModel
impl From<crate::models::Product> for ActiveModel {
    fn from(product: crate::models::Product) -> Self {
        ActiveModel {
            id: Set(product.id),
            name: Set(product.name),
            price: Set(product.price),
            created_at: Set(product.created_at.into()),
        }
    }
}
