use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire representation of an order together with its line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Generated by the server when empty.
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub customer_id: String,
    /// Defaults to the current UTC time when absent.
    #[serde(default)]
    pub ordered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    #[schema(value_type = String, example = "199.90")]
    pub total_amount: BigDecimal,
    /// Server-computed from `items`; any client value is ignored.
    #[serde(default)]
    pub no_of_items: i32,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    #[serde(default)]
    pub order_item_id: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub article_id: String,
    #[serde(default)]
    pub quantity: i32,
}

/// Persisted order header, i.e. the order without its items.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderHeader {
    pub order_id: String,
    pub customer_id: String,
    pub ordered_at: DateTime<Utc>,
    pub total_amount: BigDecimal,
    pub no_of_items: i32,
}

/// Persisted order item.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub order_item_id: String,
    pub order_id: String,
    pub article_id: String,
    pub quantity: i32,
}
