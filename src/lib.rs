pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use std::error::Error;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::article_service::ArticleService;
use application::order_service::OrderService;
use application::user_service::UserService;
use infrastructure::article_repo::DieselArticleRepository;
use infrastructure::order_repo::DieselOrderStore;
use infrastructure::user_repo::DieselUserStore;

pub use config::Config;
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::get_order,
        handlers::orders::create_order,
        handlers::orders::update_order,
        handlers::orders::delete_order,
        handlers::users::get_user,
        handlers::users::create_user,
        handlers::users::update_user,
        handlers::users::delete_user,
        handlers::articles::get_article,
        handlers::articles::list_articles,
        handlers::articles::create_article,
        handlers::articles::update_article,
        handlers::articles::update_article_stock,
        handlers::articles::delete_article,
    ),
    components(schemas(
        domain::order::Order,
        domain::order::OrderItem,
        domain::user::User,
        domain::user::Address,
        domain::article::Article,
        domain::article::UpdateStock,
        handlers::MessageResponse,
        handlers::CreatedResponse,
    )),
    tags(
        (name = "orders", description = "Orders and their line items"),
        (name = "users", description = "Users with embedded addresses"),
        (name = "articles", description = "Articles and stock levels"),
    )
)]
pub struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("applied {} migration(s)", applied.len());
    Ok(())
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let orders = web::Data::new(OrderService::new(DieselOrderStore::new(pool.clone())));
    let users = web::Data::new(UserService::new(DieselUserStore::new(pool.clone())));
    let articles = web::Data::new(ArticleService::new(DieselArticleRepository::new(pool)));

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(orders.clone())
            .app_data(users.clone())
            .app_data(articles.clone())
            .wrap(Logger::default())
            .configure(handlers::orders::routes::<DieselOrderStore>)
            .configure(handlers::users::routes::<DieselUserStore>)
            .configure(handlers::articles::routes::<DieselArticleRepository>)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
