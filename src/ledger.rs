use async_trait::async_trait;

use crate::err::{Error, Result};
use crate::models::MarkRecord;
use crate::store;

/// Append-only store of submitted marks. Repeated submissions accumulate.
#[async_trait]
pub trait MarksLedger: Send + Sync {
    async fn record_mark(&self, record: &MarkRecord) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct SqliteLedger {
    database_url: String,
}

impl SqliteLedger {
    pub fn new<S: Into<String>>(database_url: S) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }
}

#[async_trait]
impl MarksLedger for SqliteLedger {
    async fn record_mark(&self, record: &MarkRecord) -> Result<()> {
        let mut conn = store::open(&self.database_url).await?;
        let res = sqlx::query("INSERT INTO marks (student_id, subject, mark) VALUES (?, ?, ?)")
            .bind(&record.student_id)
            .bind(&record.subject)
            .bind(record.mark)
            .execute(&mut conn)
            .await;
        store::close(conn).await;

        let res = res?;
        if res.rows_affected() < 1 {
            return Err(Error::Storage {
                kind: "DatabaseError",
                message: "Could not save mark to database!".to_string(),
            });
        }
        log::info!(
            "Recorded mark {} in {} for student {}",
            record.mark,
            record.subject,
            record.student_id
        );
        Ok(())
    }
}
