// src/handlers/quiz.rs

use axum::{Json, response::IntoResponse};
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::test::{QuestionWithAnswers, Test, TestDetail},
};

/// Lists every test, most completed first. Questions are not included.
pub async fn list_tests(pool: &PgPool) -> Result<impl IntoResponse, AppError> {
    let tests = sqlx::query_as::<_, Test>(
        r#"
        SELECT
            id, title, description, image_url, category,
            difficulty, questions_count, completed_count
        FROM tests
        ORDER BY completed_count DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(Json(tests))
}

/// Retrieves a single test with its questions and answers.
///
/// The id arrives as a raw query parameter. Anything that is not an integer
/// cannot match a row, so it is answered with 404 without querying.
pub async fn get_test(pool: &PgPool, id: Option<&str>) -> Result<impl IntoResponse, AppError> {
    let not_found = || AppError::NotFound("Test not found".to_string());

    let id = id
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .ok_or_else(not_found)?;

    let test = sqlx::query_as::<_, Test>(
        r#"
        SELECT
            id, title, description, image_url, category,
            difficulty, questions_count, completed_count
        FROM tests
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(not_found)?;

    // FILTER drops the all-NULL row the LEFT JOIN yields for a question without answers.
    let questions = sqlx::query_as::<_, QuestionWithAnswers>(
        r#"
        SELECT
            q.id,
            q.question_text,
            q.question_order,
            COALESCE(
                json_agg(
                    json_build_object(
                        'id', a.id,
                        'text', a.answer_text,
                        'points', a.points,
                        'character', a.character_result
                    ) ORDER BY a.id
                ) FILTER (WHERE a.id IS NOT NULL),
                '[]'::json
            ) AS answers
        FROM questions q
        LEFT JOIN answers a ON a.question_id = q.id
        WHERE q.test_id = $1
        GROUP BY q.id, q.question_text, q.question_order
        ORDER BY q.question_order, q.id
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch questions for test {}: {:?}", id, e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(TestDetail { test, questions }))
}
