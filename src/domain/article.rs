use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Article {
    #[serde(default)]
    pub article_id: String,
    #[serde(default)]
    pub article_name: String,
    #[serde(default)]
    #[schema(value_type = String, example = "200.00")]
    pub price: BigDecimal,
    #[serde(default)]
    pub stock: i64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateStock {
    pub new_stock: i64,
}
