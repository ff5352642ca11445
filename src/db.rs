use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use thiserror::Error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(Debug, Error)]
pub enum DbError {
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("migration failed: {0}")]
    Migration(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Path of the SQLite file, or `:memory:`.
    pub url: String,
    pub pool_size: u32,
    pub foreign_keys: bool,
    pub busy_timeout_ms: u32,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "practiceit.db".to_string(),
            pool_size: 4,
            foreign_keys: true,
            busy_timeout_ms: 5000,
        }
    }
}

impl DbConfig {
    /// A single-connection in-memory database. Every pooled connection to
    /// `:memory:` opens its own database, so the pool is capped at one.
    pub fn in_memory() -> Self {
        Self {
            url: ":memory:".to_string(),
            pool_size: 1,
            ..Self::default()
        }
    }
}

/// Applies per-connection SQLite pragmas whenever the pool opens a connection.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas {
    foreign_keys: bool,
    busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        let foreign_keys = if self.foreign_keys { "ON" } else { "OFF" };
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = {}; PRAGMA busy_timeout = {};",
            foreign_keys, self.busy_timeout_ms
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn create_pool(config: &DbConfig) -> Result<DbPool, DbError> {
    let manager = ConnectionManager::<SqliteConnection>::new(&config.url);
    let pool = Pool::builder()
        .max_size(config.pool_size)
        .connection_customizer(Box::new(SqlitePragmas {
            foreign_keys: config.foreign_keys,
            busy_timeout_ms: config.busy_timeout_ms,
        }))
        .build(manager)?;
    Ok(pool)
}

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DbError::Migration(e.to_string()))?;
    for version in applied {
        log::info!("Applied migration {}", version);
    }
    Ok(())
}
