// src/handlers/leaderboard.rs

use axum::{Json, response::IntoResponse};
use sqlx::PgPool;

use crate::{error::AppError, models::user::LeaderboardEntry};

/// Retrieves the top users by cumulative score.
pub async fn get_leaderboard(pool: &PgPool, limit: i64) -> Result<impl IntoResponse, AppError> {
    let leaderboard = sqlx::query_as::<_, LeaderboardEntry>(
        r#"
        SELECT username, total_score, tests_completed, level
        FROM users
        ORDER BY total_score DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch leaderboard: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(leaderboard))
}
