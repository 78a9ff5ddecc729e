use serde::{Deserialize, Serialize};
use validator::Validate;

/// A product as returned by the API.
///
/// `prix_achat` (purchase price) is optional and serialized as `prixAchat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub nom: String,
    pub prix: f64,
    pub prix_achat: Option<f64>,
}

impl Product {
    pub fn from_input(id: i32, input: ProductInput) -> Self {
        Self {
            id,
            nom: input.nom,
            prix: input.prix,
            prix_achat: input.prix_achat,
        }
    }
}

/// Request body for create and update.
///
/// Every mutable field is replaced on update. An `id` in the body is ignored;
/// the store assigns ids on create and the path supplies it on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[validate(length(min = 3, max = 20))]
    pub nom: String,

    #[validate(range(min = 1.0))]
    pub prix: f64,

    #[serde(default)]
    pub prix_achat: Option<f64>,
}
