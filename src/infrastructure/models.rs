use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::article::Article;
use crate::domain::order::{OrderHeader, OrderLine};
use crate::domain::user::{AddressRecord, UserRecord};
use crate::schema::{addresses, articles, order_items, orders, users};

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub order_id: String,
    pub customer_id: String,
    pub ordered_at: DateTime<Utc>,
    pub total_amount: BigDecimal,
    pub no_of_items: i32,
}

/// Header columns overwritten by an update; the key is left alone.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = orders)]
pub struct OrderChangeset<'a> {
    pub customer_id: &'a str,
    pub ordered_at: DateTime<Utc>,
    pub total_amount: &'a BigDecimal,
    pub no_of_items: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub order_item_id: String,
    pub order_id: String,
    pub article_id: String,
    pub quantity: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = articles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ArticleRow {
    pub article_id: String,
    pub article_name: String,
    pub price: BigDecimal,
    pub stock: i64,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub address_id: String,
    pub role: String,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = addresses)]
#[diesel(primary_key(address_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AddressRow {
    pub address_id: String,
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

// ── Row ⇄ record conversions ─────────────────────────────────────────────────

impl From<&OrderHeader> for OrderRow {
    fn from(h: &OrderHeader) -> Self {
        Self {
            order_id: h.order_id.clone(),
            customer_id: h.customer_id.clone(),
            ordered_at: h.ordered_at,
            total_amount: h.total_amount.clone(),
            no_of_items: h.no_of_items,
        }
    }
}

impl From<OrderRow> for OrderHeader {
    fn from(r: OrderRow) -> Self {
        Self {
            order_id: r.order_id,
            customer_id: r.customer_id,
            ordered_at: r.ordered_at,
            total_amount: r.total_amount,
            no_of_items: r.no_of_items,
        }
    }
}

impl<'a> From<&'a OrderHeader> for OrderChangeset<'a> {
    fn from(h: &'a OrderHeader) -> Self {
        Self {
            customer_id: &h.customer_id,
            ordered_at: h.ordered_at,
            total_amount: &h.total_amount,
            no_of_items: h.no_of_items,
        }
    }
}

impl From<&OrderLine> for OrderItemRow {
    fn from(l: &OrderLine) -> Self {
        Self {
            order_item_id: l.order_item_id.clone(),
            order_id: l.order_id.clone(),
            article_id: l.article_id.clone(),
            quantity: l.quantity,
        }
    }
}

impl From<OrderItemRow> for OrderLine {
    fn from(r: OrderItemRow) -> Self {
        Self {
            order_item_id: r.order_item_id,
            order_id: r.order_id,
            article_id: r.article_id,
            quantity: r.quantity,
        }
    }
}

impl From<&Article> for ArticleRow {
    fn from(a: &Article) -> Self {
        Self {
            article_id: a.article_id.clone(),
            article_name: a.article_name.clone(),
            price: a.price.clone(),
            stock: a.stock,
        }
    }
}

impl From<ArticleRow> for Article {
    fn from(r: ArticleRow) -> Self {
        Self {
            article_id: r.article_id,
            article_name: r.article_name,
            price: r.price,
            stock: r.stock,
        }
    }
}

impl From<&UserRecord> for UserRow {
    fn from(u: &UserRecord) -> Self {
        Self {
            id: u.id.clone(),
            name: u.name.clone(),
            email: u.email.clone(),
            mobile: u.mobile.clone(),
            address_id: u.address_id.clone(),
            role: u.role.clone(),
        }
    }
}

impl From<UserRow> for UserRecord {
    fn from(r: UserRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
            mobile: r.mobile,
            address_id: r.address_id,
            role: r.role,
        }
    }
}

impl From<&AddressRecord> for AddressRow {
    fn from(a: &AddressRecord) -> Self {
        Self {
            address_id: a.address_id.clone(),
            line1: a.line1.clone(),
            line2: a.line2.clone(),
            city: a.city.clone(),
            state: a.state.clone(),
            country: a.country.clone(),
            zip_code: a.zip_code.clone(),
        }
    }
}

impl From<AddressRow> for AddressRecord {
    fn from(r: AddressRow) -> Self {
        Self {
            address_id: r.address_id,
            line1: r.line1,
            line2: r.line2,
            city: r.city,
            state: r.state,
            country: r.country,
            zip_code: r.zip_code,
        }
    }
}
