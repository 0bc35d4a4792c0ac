//! In-memory stores implementing the repository ports, used by the service
//! and handler tests. Transactions work on a copy of the tables that replaces
//! the live tables only when the unit of work succeeds.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::article::Article;
use crate::domain::errors::DomainError;
use crate::domain::order::{OrderHeader, OrderLine};
use crate::domain::ports::{
    ArticleRepository, OrderRepository, OrderStore, UserRepository, UserStore,
};
use crate::domain::user::{AddressRecord, UserRecord};

// ── Orders ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderCall {
    CreateHeader,
    UpdateHeader,
    GetHeader,
    DeleteHeader,
    CreateItems,
    UpsertItems,
    GetItemsByOrder,
    DeleteItemsByIds,
}

#[derive(Debug, Clone, Default)]
struct OrderTables {
    headers: HashMap<String, OrderHeader>,
    items: HashMap<String, OrderLine>,
}

#[derive(Debug, Default)]
struct OrderState {
    tables: OrderTables,
    calls: Vec<OrderCall>,
    fail_on: Option<OrderCall>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    state: Arc<Mutex<OrderState>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later `call` fail with an internal error.
    pub fn fail_on(&self, call: OrderCall) {
        self.state.lock().unwrap().fail_on = Some(call);
    }

    pub fn calls(&self) -> Vec<OrderCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn header(&self, order_id: &str) -> Option<OrderHeader> {
        self.state
            .lock()
            .unwrap()
            .tables
            .headers
            .get(order_id)
            .cloned()
    }

    /// Persisted items of `order_id`, sorted by item id.
    pub fn items_of(&self, order_id: &str) -> Vec<OrderLine> {
        let state = self.state.lock().unwrap();
        let mut items: Vec<OrderLine> = state
            .tables
            .items
            .values()
            .filter(|l| l.order_id == order_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.order_item_id.cmp(&b.order_item_id));
        items
    }
}

impl OrderStore for InMemoryOrderStore {
    fn in_transaction<T, F>(&self, work: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn OrderRepository) -> Result<T, DomainError>,
    {
        let mut guard = self.state.lock().unwrap();
        let state = &mut *guard;
        let mut working = state.tables.clone();
        let result = work(&mut InMemoryOrderRepository {
            tables: &mut working,
            calls: &mut state.calls,
            fail_on: state.fail_on,
        });
        if result.is_ok() {
            state.tables = working;
        }
        result
    }
}

struct InMemoryOrderRepository<'a> {
    tables: &'a mut OrderTables,
    calls: &'a mut Vec<OrderCall>,
    fail_on: Option<OrderCall>,
}

impl InMemoryOrderRepository<'_> {
    fn record(&mut self, call: OrderCall) -> Result<(), DomainError> {
        self.calls.push(call);
        if self.fail_on == Some(call) {
            return Err(DomainError::Internal(format!("injected failure in {:?}", call)));
        }
        Ok(())
    }
}

// Mirrors the CHECK constraints of the Postgres schema.
fn check_header(header: &OrderHeader) -> Result<(), DomainError> {
    if header.customer_id.is_empty() {
        return Err(DomainError::InvalidInput("customer id is required".to_string()));
    }
    Ok(())
}

fn check_items(items: &[OrderLine]) -> Result<(), DomainError> {
    if items.iter().any(|l| l.article_id.is_empty()) {
        return Err(DomainError::InvalidInput("article id is required".to_string()));
    }
    Ok(())
}

impl OrderRepository for InMemoryOrderRepository<'_> {
    fn create_header(&mut self, header: &OrderHeader) -> Result<(), DomainError> {
        self.record(OrderCall::CreateHeader)?;
        check_header(header)?;
        if self.tables.headers.contains_key(&header.order_id) {
            return Err(DomainError::AlreadyExists);
        }
        self.tables
            .headers
            .insert(header.order_id.clone(), header.clone());
        Ok(())
    }

    fn update_header(&mut self, order_id: &str, header: &OrderHeader) -> Result<(), DomainError> {
        self.record(OrderCall::UpdateHeader)?;
        check_header(header)?;
        match self.tables.headers.get_mut(order_id) {
            Some(existing) => {
                *existing = header.clone();
                Ok(())
            }
            None => Err(DomainError::NoRowsAffected("updating order")),
        }
    }

    fn get_header(&mut self, order_id: &str) -> Result<OrderHeader, DomainError> {
        self.record(OrderCall::GetHeader)?;
        self.tables
            .headers
            .get(order_id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    fn delete_header(&mut self, order_id: &str) -> Result<(), DomainError> {
        self.record(OrderCall::DeleteHeader)?;
        self.tables
            .headers
            .remove(order_id)
            .map(|_| ())
            .ok_or(DomainError::NoRowsAffected("deleting order"))
    }

    fn create_items(&mut self, items: &[OrderLine]) -> Result<(), DomainError> {
        self.record(OrderCall::CreateItems)?;
        check_items(items)?;
        if items
            .iter()
            .any(|l| self.tables.items.contains_key(&l.order_item_id))
        {
            return Err(DomainError::AlreadyExists);
        }
        for l in items {
            self.tables.items.insert(l.order_item_id.clone(), l.clone());
        }
        Ok(())
    }

    fn upsert_items(&mut self, items: &[OrderLine]) -> Result<(), DomainError> {
        self.record(OrderCall::UpsertItems)?;
        check_items(items)?;
        for l in items {
            self.tables.items.insert(l.order_item_id.clone(), l.clone());
        }
        Ok(())
    }

    fn get_items_by_order(&mut self, order_id: &str) -> Result<Vec<OrderLine>, DomainError> {
        self.record(OrderCall::GetItemsByOrder)?;
        let items: Vec<OrderLine> = self
            .tables
            .items
            .values()
            .filter(|l| l.order_id == order_id)
            .cloned()
            .collect();
        if items.is_empty() {
            return Err(DomainError::NoItems(order_id.to_string()));
        }
        Ok(items)
    }

    fn delete_items_by_ids(&mut self, ids: &[String]) -> Result<(), DomainError> {
        self.record(OrderCall::DeleteItemsByIds)?;
        let removed = ids
            .iter()
            .filter(|id| self.tables.items.remove(id.as_str()).is_some())
            .count();
        if removed == 0 {
            return Err(DomainError::NoRowsAffected("deleting order items"));
        }
        Ok(())
    }
}

// ── Users ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
struct UserTables {
    users: HashMap<String, UserRecord>,
    addresses: HashMap<String, AddressRecord>,
}

#[derive(Debug, Default)]
struct UserState {
    tables: UserTables,
    fail_address_writes: bool,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    state: Arc<Mutex<UserState>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_address_writes(&self) {
        self.state.lock().unwrap().fail_address_writes = true;
    }

    pub fn user(&self, id: &str) -> Option<UserRecord> {
        self.state.lock().unwrap().tables.users.get(id).cloned()
    }

    pub fn address(&self, address_id: &str) -> Option<AddressRecord> {
        self.state
            .lock()
            .unwrap()
            .tables
            .addresses
            .get(address_id)
            .cloned()
    }
}

impl UserStore for InMemoryUserStore {
    fn in_transaction<T, F>(&self, work: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn UserRepository) -> Result<T, DomainError>,
    {
        let mut state = self.state.lock().unwrap();
        let mut repo = InMemoryUserRepository {
            tables: state.tables.clone(),
            fail_address_writes: state.fail_address_writes,
        };
        let result = work(&mut repo);
        if result.is_ok() {
            state.tables = repo.tables;
        }
        result
    }
}

struct InMemoryUserRepository {
    tables: UserTables,
    fail_address_writes: bool,
}

impl UserRepository for InMemoryUserRepository {
    fn upsert_user(&mut self, user: &UserRecord) -> Result<(), DomainError> {
        self.tables.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    fn get_user(&mut self, id: &str) -> Result<UserRecord, DomainError> {
        self.tables.users.get(id).cloned().ok_or(DomainError::NotFound)
    }

    fn delete_user(&mut self, id: &str) -> Result<(), DomainError> {
        self.tables
            .users
            .remove(id)
            .map(|_| ())
            .ok_or(DomainError::NoRowsAffected("deleting user"))
    }

    fn upsert_address(&mut self, address: &AddressRecord) -> Result<(), DomainError> {
        if self.fail_address_writes {
            return Err(DomainError::Internal("injected address failure".to_string()));
        }
        self.tables
            .addresses
            .insert(address.address_id.clone(), address.clone());
        Ok(())
    }

    fn get_address(&mut self, address_id: &str) -> Result<AddressRecord, DomainError> {
        self.tables
            .addresses
            .get(address_id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }
}

// ── Articles ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryArticleRepository {
    articles: Arc<Mutex<HashMap<String, Article>>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArticleRepository for InMemoryArticleRepository {
    fn create(&self, article: &Article) -> Result<(), DomainError> {
        let mut articles = self.articles.lock().unwrap();
        if articles.contains_key(&article.article_id) {
            return Err(DomainError::AlreadyExists);
        }
        articles.insert(article.article_id.clone(), article.clone());
        Ok(())
    }

    fn update(&self, article_id: &str, article: &Article) -> Result<(), DomainError> {
        let mut articles = self.articles.lock().unwrap();
        match articles.get_mut(article_id) {
            Some(existing) => {
                existing.article_name = article.article_name.clone();
                existing.price = article.price.clone();
                existing.stock = article.stock;
                Ok(())
            }
            None => Err(DomainError::NoRowsAffected("updating article")),
        }
    }

    fn get(&self, article_id: &str) -> Result<Article, DomainError> {
        self.articles
            .lock()
            .unwrap()
            .get(article_id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    fn list(&self) -> Result<Vec<Article>, DomainError> {
        let mut all: Vec<Article> = self.articles.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.article_id.cmp(&b.article_id));
        Ok(all)
    }

    fn delete(&self, article_id: &str) -> Result<(), DomainError> {
        self.articles
            .lock()
            .unwrap()
            .remove(article_id)
            .map(|_| ())
            .ok_or(DomainError::NoRowsAffected("deleting article"))
    }

    fn update_stock(&self, article_id: &str, stock: i64) -> Result<(), DomainError> {
        match self.articles.lock().unwrap().get_mut(article_id) {
            Some(existing) => {
                existing.stock = stock;
                Ok(())
            }
            None => Err(DomainError::NoRowsAffected("updating stock")),
        }
    }
}
