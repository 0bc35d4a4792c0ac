use actix_web::{web, HttpResponse};

use crate::application::order_service::OrderService;
use crate::domain::order::Order;
use crate::domain::ports::OrderStore;
use crate::errors::AppError;

use super::{CreatedResponse, MessageResponse};

pub fn routes<S: OrderStore>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::post().to(create_order::<S>))
            .route("/{id}", web::get().to(get_order::<S>))
            .route("/{id}", web::put().to(update_order::<S>))
            .route("/{id}", web::delete().to(delete_order::<S>)),
    );
}

/// GET /orders/{id}
///
/// Returns the order together with its items. An order without items is
/// reported as an error.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = String, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Storage error, including an order with no items"),
    ),
    tag = "orders"
)]
pub async fn get_order<S: OrderStore>(
    svc: web::Data<OrderService<S>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let order = web::block(move || svc.get_order(&order_id)).await??;
    Ok(HttpResponse::Ok().json(order))
}

/// POST /orders
///
/// Creates the order header and its items in one transaction. Missing order
/// and item ids are generated; the order id is echoed back.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = Order,
    responses(
        (status = 200, description = "Order created", body = CreatedResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Service error"),
    ),
    tag = "orders"
)]
pub async fn create_order<S: OrderStore>(
    svc: web::Data<OrderService<S>>,
    body: web::Json<Order>,
) -> Result<HttpResponse, AppError> {
    let order = body.into_inner();
    let id = web::block(move || svc.create_order(order)).await??;
    Ok(HttpResponse::Ok().json(CreatedResponse {
        message: "Order created successfully".to_string(),
        id,
    }))
}

/// PUT /orders/{id}
///
/// Overwrites the header and makes the stored items match `items` exactly.
/// The body must carry the order's own id.
#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(
        ("id" = String, Path, description = "Order id"),
    ),
    request_body = Order,
    responses(
        (status = 200, description = "Order updated", body = MessageResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Service error"),
    ),
    tag = "orders"
)]
pub async fn update_order<S: OrderStore>(
    svc: web::Data<OrderService<S>>,
    path: web::Path<String>,
    body: web::Json<Order>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let order = body.into_inner();
    web::block(move || svc.update_order(&order_id, order)).await??;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Updated order successfully")))
}

/// DELETE /orders/{id}
///
/// Deletes the order header; items are not removed.
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(
        ("id" = String, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order deleted", body = MessageResponse),
        (status = 500, description = "Service error"),
    ),
    tag = "orders"
)]
pub async fn delete_order<S: OrderStore>(
    svc: web::Data<OrderService<S>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    web::block(move || svc.delete_order(&order_id)).await??;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Order deleted successfully")))
}
