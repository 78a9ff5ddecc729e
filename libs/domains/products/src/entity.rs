use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::entity::prelude::*;

use crate::models::{Product, ProductInput};

/// Sea-ORM Entity for the `produits` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "produits")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub nom: String,
    #[sea_orm(column_type = "Double")]
    pub prix: f64,
    #[sea_orm(column_name = "prixAchat", column_type = "Double", nullable)]
    pub prix_achat: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            nom: model.nom,
            prix: model.prix,
            prix_achat: model.prix_achat,
        }
    }
}

impl ActiveModel {
    /// Insert model: the id is left to the `SERIAL` sequence.
    pub fn for_insert(input: ProductInput) -> Self {
        Self {
            id: NotSet,
            nom: Set(input.nom),
            prix: Set(input.prix),
            prix_achat: Set(input.prix_achat),
        }
    }

    /// Full-replacement update of the row `id`.
    pub fn for_update(id: i32, input: ProductInput) -> Self {
        Self {
            id: Unchanged(id),
            nom: Set(input.nom),
            prix: Set(input.prix),
            prix_achat: Set(input.prix_achat),
        }
    }
}
