use axum::{extract::State, routing::post, Json, Router};
use rand::seq::SliceRandom;
use serde::{de::IgnoredAny, Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions, Question},
    server::{app::AppState, deserializers::deserialize_lenient_i64},
    telemetry::QUIZ_QUESTIONS_SERVED,
};

use super::{ApiJson, ApiResponse};

/// Category id that stands for "every category".
const ALL_CATEGORIES: i64 = 0;

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_lenient_i64")]
    id: i64,
}

#[derive(Deserialize)]
struct QuizRequest {
    quiz_category: QuizCategory,
    // Accepted in any shape for client compatibility, but not used to exclude questions.
    #[serde(default, alias = "previous_question", alias = "privious_question")]
    previous_questions: Option<IgnoredAny>,
}

#[derive(Serialize)]
struct QuizResponse {
    /// `None` once the category has no questions to draw from.
    question: Option<Question>,
}

async fn next_question(
    State(pool): State<SqlitePool>,
    ApiJson(request): ApiJson<QuizRequest>,
) -> ApiResponse<QuizResponse> {
    let category = request.quiz_category.id;
    let candidates = if category == ALL_CATEGORIES {
        questions::get_all_questions(&pool).await?
    } else {
        questions::get_questions_for_category(&pool, category).await?
    };
    tracing::debug!(
        category,
        candidates = candidates.len(),
        has_previous = request.previous_questions.is_some(),
        "Drawing quiz question"
    );

    let question = candidates.choose(&mut rand::thread_rng()).cloned();
    match &question {
        Some(_) => QUIZ_QUESTIONS_SERVED
            .with_label_values(&[category.to_string().as_str()])
            .inc(),
        None => tracing::info!(category, "Quiz exhausted, no questions to draw"),
    }

    Ok(Json(QuizResponse { question }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
