// src/models/test_result.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::user::UserStats;

/// Represents the 'test_results' table. Rows are never updated.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestResult {
    pub id: i64,
    pub user_id: i64,
    pub test_id: i64,
    pub score: i32,
    pub result_text: String,
    pub result_character: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for submitting a finished test.
/// Only `test_id` is required; everything else has a default.
#[derive(Debug, Deserialize)]
pub struct SubmitResultRequest {
    /// Falls back to the configured guest name when absent or null.
    #[serde(default)]
    pub username: Option<String>,

    pub test_id: i64,

    #[serde(default)]
    pub score: i32,

    #[serde(default)]
    pub result_character: Option<String>,

    #[serde(default)]
    pub result_text: String,
}

impl SubmitResultRequest {
    pub fn username_or<'a>(&'a self, guest: &'a str) -> &'a str {
        self.username.as_deref().unwrap_or(guest)
    }
}

/// Response to a successful submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResultResponse {
    pub result_id: i64,
    pub user_stats: UserStats,
}
