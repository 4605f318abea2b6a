// src/handlers/submission.rs

use axum::{Json, body::Bytes, response::IntoResponse};
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::{
        test_result::{SubmitResultRequest, SubmitResultResponse, TestResult},
        user::{User, UserStats},
    },
    utils::level::{initial_level, level_for_total},
};

/// Result of the user upsert.
#[derive(sqlx::FromRow)]
struct UpsertedUser {
    id: i64,
    total_score: i32,
    /// True when the row was created by this statement.
    inserted: bool,
}

/// Parses a submit body. An empty body counts as `{}`.
pub fn parse_submission(body: &[u8]) -> Result<SubmitResultRequest, AppError> {
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}".as_slice()
    } else {
        body
    };

    Ok(serde_json::from_slice(body)?)
}

/// Records a finished test and updates the submitting user's totals.
///
/// * Upserts the user by username (created on first submission); a request
///   without one is recorded under `guest_username`.
/// * Recomputes the level, using the creation formula for a new user and the
///   update formula otherwise.
/// * Appends the result and bumps the test's completion counter.
///
/// Everything runs in one transaction; any failure leaves no trace.
pub async fn submit_result(
    pool: &PgPool,
    guest_username: &str,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let req = parse_submission(&body)?;
    let username = req.username_or(guest_username);

    let mut tx = pool.begin().await?;

    // `xmax = 0` only holds for a row inserted by this statement. On conflict the
    // row stays locked until commit, so the level write below cannot interleave.
    let upserted = sqlx::query_as::<_, UpsertedUser>(
        r#"
        INSERT INTO users (username, total_score, tests_completed, level)
        VALUES ($1, $2, 1, $3)
        ON CONFLICT (username) DO UPDATE SET
            total_score = users.total_score + EXCLUDED.total_score,
            tests_completed = users.tests_completed + 1
        RETURNING id, total_score, (xmax = 0) AS inserted
        "#,
    )
    .bind(username)
    .bind(req.score)
    .bind(initial_level(req.score))
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        tracing::error!("Failed to upsert user {}: {:?}", username, e);
        AppError::InternalServerError(e.to_string())
    })?;

    let level = if upserted.inserted {
        initial_level(req.score)
    } else {
        level_for_total(upserted.total_score)
    };

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET level = $1
        WHERE id = $2
        RETURNING id, username, total_score, tests_completed, level
        "#,
    )
    .bind(level)
    .bind(upserted.id)
    .fetch_one(&mut *tx)
    .await?;

    let record = sqlx::query_as::<_, TestResult>(
        r#"
        INSERT INTO test_results (user_id, test_id, score, result_text, result_character)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, test_id, score, result_text, result_character, created_at
        "#,
    )
    .bind(user.id)
    .bind(req.test_id)
    .bind(req.score)
    .bind(&req.result_text)
    .bind(&req.result_character)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        tracing::error!("Failed to insert result for test {}: {:?}", req.test_id, e);
        AppError::InternalServerError(e.to_string())
    })?;

    sqlx::query(
        r#"
        UPDATE tests
        SET completed_count = completed_count + 1
        WHERE id = $1
        "#,
    )
    .bind(record.test_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(
        result_id = record.id,
        user_id = record.user_id,
        test_id = record.test_id,
        score = record.score,
        created_at = %record.created_at,
        "Stored result for {} (level {})",
        user.username,
        user.level
    );

    Ok(Json(SubmitResultResponse {
        result_id: record.id,
        user_stats: UserStats::from(&user),
    }))
}
