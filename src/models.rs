use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub student_id: String,
    pub name: String,
    /// Parent or guardian number alerts are sent to.
    pub parent_contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MarkRecord {
    pub student_id: String,
    pub subject: String,
    pub mark: i64,
}

/// Raw `POST /marks` form. Fields stay optional here so a missing one is
/// reported back on the form instead of rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarkSubmission {
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub mark: Option<String>,
}
