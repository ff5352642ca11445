use crate::db::{create_pool, run_migrations, DbConfig, DbPool};

/// A migrated single-connection in-memory database.
pub fn migrated_pool() -> DbPool {
    let pool = create_pool(&DbConfig::in_memory()).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    pool
}
