pub mod queries;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Error;

pub use queries::categories::Category;
pub use queries::questions::Question;

// Question.category is a plain integer column; dangling references are allowed.
fn connect_options(url: &str) -> Result<SqliteConnectOptions, Error> {
    Ok(SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(false))
}

pub async fn establish_connection(url: &str) -> Result<SqlitePool, Error> {
    SqlitePool::connect_with(connect_options(url)?).await
}

/// Opens a migrated in-memory database.
///
/// Every SQLite connection to `:memory:` gets its own database, so the pool is
/// pinned to a single connection that is never recycled.
pub async fn establish_in_memory() -> Result<SqlitePool, Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(connect_options("sqlite::memory:")?)
        .await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
