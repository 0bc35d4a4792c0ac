use actix_web::{web, HttpResponse};

use crate::application::article_service::ArticleService;
use crate::domain::article::{Article, UpdateStock};
use crate::domain::ports::ArticleRepository;
use crate::errors::AppError;

use super::MessageResponse;

pub fn routes<R: ArticleRepository>(cfg: &mut web::ServiceConfig) {
    cfg.route("/articles-list", web::get().to(list_articles::<R>))
        .service(
            web::scope("/articles")
                .route("", web::post().to(create_article::<R>))
                .route("/{id}", web::get().to(get_article::<R>))
                .route("/{id}", web::put().to(update_article::<R>))
                .route("/{id}", web::patch().to(update_article_stock::<R>))
                .route("/{id}", web::delete().to(delete_article::<R>)),
        );
}

/// GET /articles/{id}
#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article found", body = Article),
        (status = 404, description = "Article not found"),
        (status = 500, description = "Service error"),
    ),
    tag = "articles"
)]
pub async fn get_article<R: ArticleRepository>(
    svc: web::Data<ArticleService<R>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let article = web::block(move || svc.get_article(&id)).await??;
    Ok(HttpResponse::Ok().json(article))
}

/// GET /articles-list
#[utoipa::path(
    get,
    path = "/articles-list",
    responses(
        (status = 200, description = "All articles", body = Vec<Article>),
        (status = 500, description = "Service error"),
    ),
    tag = "articles"
)]
pub async fn list_articles<R: ArticleRepository>(
    svc: web::Data<ArticleService<R>>,
) -> Result<HttpResponse, AppError> {
    let articles = web::block(move || svc.list_articles()).await??;
    Ok(HttpResponse::Ok().json(articles))
}

/// POST /articles
#[utoipa::path(
    post,
    path = "/articles",
    request_body = Article,
    responses(
        (status = 200, description = "Article created", body = MessageResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Service error, including a duplicate id"),
    ),
    tag = "articles"
)]
pub async fn create_article<R: ArticleRepository>(
    svc: web::Data<ArticleService<R>>,
    body: web::Json<Article>,
) -> Result<HttpResponse, AppError> {
    let article = body.into_inner();
    web::block(move || svc.create_article(article)).await??;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Article created successfully")))
}

/// PUT /articles/{id}
#[utoipa::path(
    put,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    request_body = Article,
    responses(
        (status = 200, description = "Article updated", body = MessageResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Service error"),
    ),
    tag = "articles"
)]
pub async fn update_article<R: ArticleRepository>(
    svc: web::Data<ArticleService<R>>,
    path: web::Path<String>,
    body: web::Json<Article>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let article = body.into_inner();
    web::block(move || svc.update_article(&id, article)).await??;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Updated article successfully")))
}

/// PATCH /articles/{id}
///
/// Sets the stock level only.
#[utoipa::path(
    patch,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    request_body = UpdateStock,
    responses(
        (status = 200, description = "Stock updated", body = MessageResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Service error"),
    ),
    tag = "articles"
)]
pub async fn update_article_stock<R: ArticleRepository>(
    svc: web::Data<ArticleService<R>>,
    path: web::Path<String>,
    body: web::Json<UpdateStock>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let req = body.into_inner();
    web::block(move || svc.update_article_stock(&id, req)).await??;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Article stock updated successfully")))
}

/// DELETE /articles/{id}
#[utoipa::path(
    delete,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted", body = MessageResponse),
        (status = 500, description = "Service error"),
    ),
    tag = "articles"
)]
pub async fn delete_article<R: ArticleRepository>(
    svc: web::Data<ArticleService<R>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    web::block(move || svc.delete_article(&id)).await??;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Article deleted successfully")))
}
