use sqlx::sqlite::SqliteConnection;
use sqlx::Connection;

use crate::err::Result;

/// Opens a fresh connection. Callers hold it for a single statement and hand
/// it back to [`close`]; nothing is pooled.
pub async fn open(database_url: &str) -> Result<SqliteConnection> {
    let conn = SqliteConnection::connect(database_url).await?;
    Ok(conn)
}

pub async fn close(conn: SqliteConnection) {
    if let Err(err) = conn.close().await {
        log::warn!("Failed to close database connection: {}", err);
    }
}
