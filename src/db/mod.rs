use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, warn};

pub mod queries;

pub type DbPool = Pool<Sqlite>;

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // Each connection to an in-memory database opens a private database, so the
    // pool is pinned to one connection that is never recycled.
    let pool = if is_in_memory(database_url) {
        if max_connections != 1 {
            warn!(
                requested = max_connections,
                "in-memory database, limiting pool to a single connection"
            );
        }
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?
    };
    Ok(pool)
}

/// Creates the `Rides` table when it does not exist yet.
pub async fn init_schema(pool: &DbPool) -> Result<()> {
    sqlx::query(queries::CREATE_RIDES_TABLE)
        .execute(pool)
        .await?;
    debug!("Rides table ready");
    Ok(())
}
