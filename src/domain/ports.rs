use super::article::Article;
use super::errors::DomainError;
use super::order::{OrderHeader, OrderLine};
use super::user::{AddressRecord, UserRecord};

/// Data access for the `orders` and `order_items` tables.
///
/// Every call is atomic on its own table. Cross-table atomicity comes from the
/// [`OrderStore`] transaction the repository is bound to.
pub trait OrderRepository {
    fn create_header(&mut self, header: &OrderHeader) -> Result<(), DomainError>;
    /// Fails with [`DomainError::NoRowsAffected`] when no header has `order_id`.
    fn update_header(&mut self, order_id: &str, header: &OrderHeader) -> Result<(), DomainError>;
    fn get_header(&mut self, order_id: &str) -> Result<OrderHeader, DomainError>;
    fn delete_header(&mut self, order_id: &str) -> Result<(), DomainError>;

    fn create_items(&mut self, items: &[OrderLine]) -> Result<(), DomainError>;
    /// Inserts each item, overwriting any existing row with the same item id.
    /// Callers pass only ids already persisted for the same order.
    fn upsert_items(&mut self, items: &[OrderLine]) -> Result<(), DomainError>;
    /// Fails with [`DomainError::NoItems`] when the order has no items.
    fn get_items_by_order(&mut self, order_id: &str) -> Result<Vec<OrderLine>, DomainError>;
    /// Fails with [`DomainError::NoRowsAffected`] when none of `ids` exist.
    /// Callers skip the call for an empty id list.
    fn delete_items_by_ids(&mut self, ids: &[String]) -> Result<(), DomainError>;
}

/// Unit of work over the order tables.
pub trait OrderStore: Send + Sync + 'static {
    /// Runs `work` inside one transaction: committed when it returns `Ok`,
    /// rolled back when it returns `Err`.
    fn in_transaction<T, F>(&self, work: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn OrderRepository) -> Result<T, DomainError>;
}

pub trait UserRepository {
    fn upsert_user(&mut self, user: &UserRecord) -> Result<(), DomainError>;
    fn get_user(&mut self, id: &str) -> Result<UserRecord, DomainError>;
    fn delete_user(&mut self, id: &str) -> Result<(), DomainError>;
    fn upsert_address(&mut self, address: &AddressRecord) -> Result<(), DomainError>;
    fn get_address(&mut self, address_id: &str) -> Result<AddressRecord, DomainError>;
}

/// Unit of work over the `users` and `addresses` tables.
pub trait UserStore: Send + Sync + 'static {
    fn in_transaction<T, F>(&self, work: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn UserRepository) -> Result<T, DomainError>;
}

pub trait ArticleRepository: Send + Sync + 'static {
    fn create(&self, article: &Article) -> Result<(), DomainError>;
    fn update(&self, article_id: &str, article: &Article) -> Result<(), DomainError>;
    fn get(&self, article_id: &str) -> Result<Article, DomainError>;
    fn list(&self) -> Result<Vec<Article>, DomainError>;
    fn delete(&self, article_id: &str) -> Result<(), DomainError>;
    fn update_stock(&self, article_id: &str, stock: i64) -> Result<(), DomainError>;
}
