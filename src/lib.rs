pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_support;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, HttpServer};

pub use application::AppContext;
pub use config::AppConfig;
pub use db::{create_pool, run_migrations, DbConfig, DbPool};

/// The application with every route, the request logger and the JSON 404
/// fallback. Shared by the server and the in-process tests.
pub fn build_app(
    ctx: web::Data<AppContext>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(ctx)
        .wrap(Logger::default())
        .configure(handlers::configure)
        .default_service(web::to(handlers::not_found))
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or spawning) the returned
/// server.
pub fn build_server(
    ctx: AppContext,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let ctx = web::Data::new(ctx);
    Ok(HttpServer::new(move || build_app(ctx.clone()))
        .bind((host.to_string(), port))?
        .run())
}
