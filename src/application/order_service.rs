use std::collections::HashSet;

use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderHeader, OrderItem, OrderLine};
use crate::domain::ports::OrderStore;

pub struct OrderService<S> {
    store: S,
}

impl<S: OrderStore> OrderService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persists the header and all items in one unit of work and returns the
    /// order id, generated when the request carried none.
    pub fn create_order(&self, order: Order) -> Result<String, DomainError> {
        let (header, lines) = order_to_records(order)?;

        self.store
            .in_transaction(|repo| {
                repo.create_header(&header)?;
                repo.create_items(&lines)
            })
            .inspect_err(|e| warn!("create order {} failed: {}", header.order_id, e))?;

        info!(
            "created order {} with {} item(s)",
            header.order_id, header.no_of_items
        );
        Ok(header.order_id)
    }

    /// Overwrites the header at `order_id` and reconciles the persisted items
    /// so they match `order.items` exactly.
    pub fn update_order(&self, order_id: &str, order: Order) -> Result<(), DomainError> {
        if order.order_id.is_empty() {
            return Err(DomainError::OrderIdRequired);
        }
        if order.order_id != order_id {
            return Err(DomainError::InvalidInput(format!(
                "order id {} does not match path id {}",
                order.order_id, order_id
            )));
        }

        let (header, lines) = order_to_records(order)?;

        self.store
            .in_transaction(|repo| {
                repo.update_header(order_id, &header)?;

                let persisted = match repo.get_items_by_order(order_id) {
                    Ok(items) => items,
                    // An order emptied by an earlier update has nothing to reconcile.
                    Err(DomainError::NoItems(_)) => Vec::new(),
                    Err(e) => return Err(e),
                };

                let stale = stale_item_ids(&persisted, &lines);
                if !stale.is_empty() {
                    debug!("order {}: deleting {} stale item(s)", order_id, stale.len());
                    repo.delete_items_by_ids(&stale)?;
                }

                // Only items already owned by this order may be overwritten; an id
                // held by another order fails the insert with AlreadyExists.
                let (existing, new) = split_by_persisted(&persisted, lines);
                if !existing.is_empty() {
                    repo.upsert_items(&existing)?;
                }
                if !new.is_empty() {
                    repo.create_items(&new)?;
                }
                Ok(())
            })
            .inspect_err(|e| warn!("update order {} failed: {}", order_id, e))?;

        info!(
            "updated order {} with {} item(s)",
            order_id, header.no_of_items
        );
        Ok(())
    }

    /// Loads the header, then its items. An order without items surfaces
    /// [`DomainError::NoItems`] rather than an empty list.
    pub fn get_order(&self, order_id: &str) -> Result<Order, DomainError> {
        self.store.in_transaction(|repo| {
            let header = repo.get_header(order_id)?;
            let lines = repo.get_items_by_order(order_id)?;
            Ok(records_to_order(header, lines))
        })
    }

    /// Deletes the header only; items are left in place.
    pub fn delete_order(&self, order_id: &str) -> Result<(), DomainError> {
        self.store
            .in_transaction(|repo| repo.delete_header(order_id))?;
        info!("deleted order {}", order_id);
        Ok(())
    }
}

/// Ids of persisted items that are absent from the incoming list.
pub fn stale_item_ids(persisted: &[OrderLine], incoming: &[OrderLine]) -> Vec<String> {
    let keep: HashSet<&str> = incoming
        .iter()
        .map(|line| line.order_item_id.as_str())
        .collect();

    persisted
        .iter()
        .filter(|line| !keep.contains(line.order_item_id.as_str()))
        .map(|line| line.order_item_id.clone())
        .collect()
}

/// Partitions `incoming` into items already persisted for the order and
/// items that are new to it.
fn split_by_persisted(
    persisted: &[OrderLine],
    incoming: Vec<OrderLine>,
) -> (Vec<OrderLine>, Vec<OrderLine>) {
    let owned: HashSet<&str> = persisted
        .iter()
        .map(|line| line.order_item_id.as_str())
        .collect();
    incoming
        .into_iter()
        .partition(|line| owned.contains(line.order_item_id.as_str()))
}

/// Applies id and timestamp defaults and splits the wire order into its
/// header and item records. The item count is always taken from `items`.
pub fn order_to_records(order: Order) -> Result<(OrderHeader, Vec<OrderLine>), DomainError> {
    let order_id = if order.order_id.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        order.order_id
    };

    let no_of_items = i32::try_from(order.items.len())
        .map_err(|_| DomainError::InvalidInput("too many order items".to_string()))?;

    let header = OrderHeader {
        order_id: order_id.clone(),
        customer_id: order.customer_id,
        ordered_at: order.ordered_at.unwrap_or_else(Utc::now),
        total_amount: order.total_amount,
        no_of_items,
    };

    let mut seen = HashSet::with_capacity(order.items.len());
    let mut lines = Vec::with_capacity(order.items.len());
    for item in order.items {
        let order_item_id = if item.order_item_id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            item.order_item_id
        };
        if !seen.insert(order_item_id.clone()) {
            return Err(DomainError::InvalidInput(format!(
                "duplicate order item id {}",
                order_item_id
            )));
        }
        lines.push(OrderLine {
            order_item_id,
            order_id: order_id.clone(),
            article_id: item.article_id,
            quantity: item.quantity,
        });
    }

    Ok((header, lines))
}

pub fn records_to_order(header: OrderHeader, lines: Vec<OrderLine>) -> Order {
    Order {
        order_id: header.order_id,
        customer_id: header.customer_id,
        ordered_at: Some(header.ordered_at),
        total_amount: header.total_amount,
        no_of_items: header.no_of_items,
        items: lines
            .into_iter()
            .map(|l| OrderItem {
                order_item_id: l.order_item_id,
                order_id: l.order_id,
                article_id: l.article_id,
                quantity: l.quantity,
            })
            .collect(),
    }
}
