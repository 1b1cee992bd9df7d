use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the users table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain User
impl From<Model> for crate::models::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
        }
    }
}

// Conversion from domain User to Sea-ORM ActiveModel
impl From<crate::models::User> for ActiveModel {
    fn from(user: crate::models::User) -> Self {
        ActiveModel {
            id: Set(user.id),
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
        }
    }
}
