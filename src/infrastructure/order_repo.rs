use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::upsert::excluded;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{OrderHeader, OrderLine};
use crate::domain::ports::{OrderRepository, OrderStore};
use crate::schema::{order_items, orders};

use super::models::{OrderChangeset, OrderItemRow, OrderRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<DieselError> for DomainError {
    fn from(e: DieselError) -> Self {
        match e {
            DieselError::NotFound => DomainError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                DomainError::AlreadyExists
            }
            DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info) => {
                DomainError::InvalidInput(info.message().to_string())
            }
            other => DomainError::Internal(other.to_string()),
        }
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DieselOrderStore {
    pool: DbPool,
}

impl DieselOrderStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderStore for DieselOrderStore {
    fn in_transaction<T, F>(&self, work: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn OrderRepository) -> Result<T, DomainError>,
    {
        let mut pooled = self.pool.get()?;
        let conn: &mut PgConnection = &mut pooled;
        conn.transaction::<_, DomainError, _>(|conn| work(&mut PgOrderRepository { conn }))
    }
}

/// Order repository bound to one open transaction.
pub struct PgOrderRepository<'c> {
    conn: &'c mut PgConnection,
}

impl OrderRepository for PgOrderRepository<'_> {
    fn create_header(&mut self, header: &OrderHeader) -> Result<(), DomainError> {
        diesel::insert_into(orders::table)
            .values(&OrderRow::from(header))
            .execute(self.conn)?;
        Ok(())
    }

    fn update_header(&mut self, order_id: &str, header: &OrderHeader) -> Result<(), DomainError> {
        let affected = diesel::update(orders::table.find(order_id))
            .set(&OrderChangeset::from(header))
            .execute(self.conn)?;
        if affected == 0 {
            return Err(DomainError::NoRowsAffected("updating order"));
        }
        Ok(())
    }

    fn get_header(&mut self, order_id: &str) -> Result<OrderHeader, DomainError> {
        let row = orders::table
            .find(order_id)
            .select(OrderRow::as_select())
            .first(self.conn)?;
        Ok(row.into())
    }

    fn delete_header(&mut self, order_id: &str) -> Result<(), DomainError> {
        let affected = diesel::delete(orders::table.find(order_id)).execute(self.conn)?;
        if affected == 0 {
            return Err(DomainError::NoRowsAffected("deleting order"));
        }
        Ok(())
    }

    fn create_items(&mut self, items: &[OrderLine]) -> Result<(), DomainError> {
        if items.is_empty() {
            return Ok(());
        }
        let rows: Vec<OrderItemRow> = items.iter().map(OrderItemRow::from).collect();
        diesel::insert_into(order_items::table)
            .values(&rows)
            .execute(self.conn)?;
        Ok(())
    }

    fn upsert_items(&mut self, items: &[OrderLine]) -> Result<(), DomainError> {
        if items.is_empty() {
            return Ok(());
        }
        let rows: Vec<OrderItemRow> = items.iter().map(OrderItemRow::from).collect();
        diesel::insert_into(order_items::table)
            .values(&rows)
            .on_conflict(order_items::order_item_id)
            .do_update()
            .set((
                order_items::order_id.eq(excluded(order_items::order_id)),
                order_items::article_id.eq(excluded(order_items::article_id)),
                order_items::quantity.eq(excluded(order_items::quantity)),
            ))
            .execute(self.conn)?;
        Ok(())
    }

    fn get_items_by_order(&mut self, order_id: &str) -> Result<Vec<OrderLine>, DomainError> {
        let rows = order_items::table
            .filter(order_items::order_id.eq(order_id))
            .select(OrderItemRow::as_select())
            .order(order_items::order_item_id.asc())
            .load(self.conn)?;
        if rows.is_empty() {
            return Err(DomainError::NoItems(order_id.to_string()));
        }
        Ok(rows.into_iter().map(OrderLine::from).collect())
    }

    fn delete_items_by_ids(&mut self, ids: &[String]) -> Result<(), DomainError> {
        let affected =
            diesel::delete(order_items::table.filter(order_items::order_item_id.eq_any(ids)))
                .execute(self.conn)?;
        if affected == 0 {
            return Err(DomainError::NoRowsAffected("deleting order items"));
        }
        Ok(())
    }
}
