// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'users' table in the database.
/// Users are created by their first submission; the username is the identity.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Unique, case-sensitive.
    pub username: String,

    pub total_score: i32,
    pub tests_completed: i32,
    pub level: i32,
}

/// Row returned by the leaderboard query.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct LeaderboardEntry {
    pub username: String,
    pub total_score: i32,
    pub tests_completed: i32,
    pub level: i32,
}

/// Cumulative stats sent back after a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub total_score: i32,
    pub tests_completed: i32,
    pub level: i32,
}

impl From<&User> for UserStats {
    fn from(user: &User) -> Self {
        Self {
            total_score: user.total_score,
            tests_completed: user.tests_completed,
            level: user.level,
        }
    }
}
