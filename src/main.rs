use std::io;

use dotenvy::dotenv;
use inventory_service::{build_server, create_pool, run_migrations, AppConfig, AppContext};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config =
        AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let pool = create_pool(&config.db).map_err(io::Error::other)?;
    run_migrations(&pool).map_err(io::Error::other)?;
    log::info!(
        "Using database {} (pool size {})",
        config.db.url,
        config.db.pool_size
    );

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    build_server(AppContext::from_pool(pool), &config.host, config.port)?.await
}
