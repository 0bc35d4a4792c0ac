use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Record not found")]
    NotFound,
    #[error("Record already exists")]
    AlreadyExists,
    #[error("Order id required")]
    OrderIdRequired,
    #[error("Article id required")]
    ArticleIdRequired,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// An update or delete matched no rows.
    #[error("No rows affected while {0}")]
    NoRowsAffected(&'static str),
    /// The order has no persisted items, or the item lookup failed to find any.
    #[error("No items found for order {0}")]
    NoItems(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
