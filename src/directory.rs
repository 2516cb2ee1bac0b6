use async_trait::async_trait;

use crate::err::{Error, Result};
use crate::models::Student;
use crate::store;

/// Read-only view of the pre-seeded `students` table.
#[async_trait]
pub trait StudentDirectory: Send + Sync {
    /// `Ok(None)` when no row matches; `Err(Error::LookupFailed)` when the
    /// store could not be queried at all.
    async fn find_student(&self, student_id: &str) -> Result<Option<Student>>;
}

#[derive(Debug, Clone)]
pub struct SqliteDirectory {
    database_url: String,
}

impl SqliteDirectory {
    pub fn new<S: Into<String>>(database_url: S) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    async fn query(&self, student_id: &str) -> Result<Option<Student>> {
        let mut conn = store::open(&self.database_url).await?;
        let student = sqlx::query_as::<_, Student>(
            "SELECT CAST(student_id AS TEXT) AS student_id, name, \
             CAST(parent_contact AS TEXT) AS parent_contact \
             FROM students WHERE student_id = ? LIMIT 1",
        )
        .bind(student_id)
        .fetch_optional(&mut conn)
        .await
        .map_err(Error::from);
        store::close(conn).await;
        student
    }
}

#[async_trait]
impl StudentDirectory for SqliteDirectory {
    async fn find_student(&self, student_id: &str) -> Result<Option<Student>> {
        match self.query(student_id).await {
            Ok(Some(student)) => {
                log::info!("Student info retrieved: {} ({})", student.student_id, student.name);
                Ok(Some(student))
            }
            Ok(None) => {
                log::warn!("Student `{}` not found", student_id);
                Ok(None)
            }
            Err(err) => {
                log::error!("Failed to fetch student info: {}", err);
                Err(err.into_lookup())
            }
        }
    }
}
