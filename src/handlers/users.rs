use actix_web::{web, HttpResponse};

use crate::application::user_service::UserService;
use crate::domain::ports::UserStore;
use crate::domain::user::User;
use crate::errors::AppError;

use super::{CreatedResponse, MessageResponse};

pub fn routes<S: UserStore>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(create_user::<S>))
            .route("/{id}", web::get().to(get_user::<S>))
            .route("/{id}", web::put().to(update_user::<S>))
            .route("/{id}", web::delete().to(delete_user::<S>)),
    );
}

/// GET /users/{id}
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User with address", body = User),
        (status = 404, description = "User or address not found"),
        (status = 500, description = "Service error"),
    ),
    tag = "users"
)]
pub async fn get_user<S: UserStore>(
    svc: web::Data<UserService<S>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let user = web::block(move || svc.get_user(&id)).await??;
    Ok(HttpResponse::Ok().json(user))
}

/// POST /users
#[utoipa::path(
    post,
    path = "/users",
    request_body = User,
    responses(
        (status = 200, description = "User created", body = CreatedResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Service error"),
    ),
    tag = "users"
)]
pub async fn create_user<S: UserStore>(
    svc: web::Data<UserService<S>>,
    body: web::Json<User>,
) -> Result<HttpResponse, AppError> {
    let user = body.into_inner();
    let id = web::block(move || svc.create_user(user)).await??;
    Ok(HttpResponse::Ok().json(CreatedResponse {
        message: "User created successfully".to_string(),
        id,
    }))
}

/// PUT /users/{id}
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = User,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Service error"),
    ),
    tag = "users"
)]
pub async fn update_user<S: UserStore>(
    svc: web::Data<UserService<S>>,
    path: web::Path<String>,
    body: web::Json<User>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let user = body.into_inner();
    web::block(move || svc.update_user(&id, user)).await??;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Updated user successfully")))
}

/// DELETE /users/{id}
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 500, description = "Service error"),
    ),
    tag = "users"
)]
pub async fn delete_user<S: UserStore>(
    svc: web::Data<UserService<S>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    web::block(move || svc.delete_user(&id)).await??;
    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted successfully")))
}
