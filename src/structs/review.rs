use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One stored analysis request/response pair. Rows are never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub code: String,
    pub language: String,
    pub error_message: Option<String>,
    pub review_result: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_id: i64,
    pub title: String,
    pub code: String,
    pub language: String,
    pub error_message: Option<String>,
    pub review_result: String,
}

/// Listing row used by the dashboard, history page and `GET /api/reviews`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReviewSummary {
    pub id: i64,
    pub title: String,
    pub language: String,
    pub created_at: DateTime<Utc>,
}
