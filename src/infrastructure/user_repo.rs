use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::{UserRepository, UserStore};
use crate::domain::user::{AddressRecord, UserRecord};
use crate::schema::{addresses, users};

use super::models::{AddressRow, UserRow};

#[derive(Clone)]
pub struct DieselUserStore {
    pool: DbPool,
}

impl DieselUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl UserStore for DieselUserStore {
    fn in_transaction<T, F>(&self, work: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn UserRepository) -> Result<T, DomainError>,
    {
        let mut pooled = self.pool.get()?;
        let conn: &mut PgConnection = &mut pooled;
        conn.transaction::<_, DomainError, _>(|conn| work(&mut PgUserRepository { conn }))
    }
}

pub struct PgUserRepository<'c> {
    conn: &'c mut PgConnection,
}

impl UserRepository for PgUserRepository<'_> {
    fn upsert_user(&mut self, user: &UserRecord) -> Result<(), DomainError> {
        let row = UserRow::from(user);
        diesel::insert_into(users::table)
            .values(&row)
            .on_conflict(users::id)
            .do_update()
            .set(&row)
            .execute(self.conn)?;
        Ok(())
    }

    fn get_user(&mut self, id: &str) -> Result<UserRecord, DomainError> {
        let row = users::table
            .find(id)
            .select(UserRow::as_select())
            .first(self.conn)?;
        Ok(row.into())
    }

    fn delete_user(&mut self, id: &str) -> Result<(), DomainError> {
        let affected = diesel::delete(users::table.find(id)).execute(self.conn)?;
        if affected == 0 {
            return Err(DomainError::NoRowsAffected("deleting user"));
        }
        Ok(())
    }

    fn upsert_address(&mut self, address: &AddressRecord) -> Result<(), DomainError> {
        let row = AddressRow::from(address);
        diesel::insert_into(addresses::table)
            .values(&row)
            .on_conflict(addresses::address_id)
            .do_update()
            .set(&row)
            .execute(self.conn)?;
        Ok(())
    }

    fn get_address(&mut self, address_id: &str) -> Result<AddressRecord, DomainError> {
        let row = addresses::table
            .find(address_id)
            .select(AddressRow::as_select())
            .first(self.conn)?;
        Ok(row.into())
    }
}
