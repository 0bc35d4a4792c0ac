pub mod article_repo;
pub mod models;
pub mod order_repo;
pub mod user_repo;

#[cfg(test)]
pub mod memory;
#[cfg(test)]
pub mod test_db;
