use axum::{
    extract::{Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{
    db::queries::questions,
    server::{
        app::AppState,
        deserializers::deserialize_optional_lenient_i64,
        errors::{ApiError, OrApiError},
        pagination::{page_or_not_found, PageQuery},
    },
};

use super::{categories_by_id, ApiJson, ApiPath, ApiResponse, QuestionsPage, Success};

// every field is optional here; the table constraints decide what is required
#[derive(Deserialize)]
struct NewQuestion {
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_lenient_i64")]
    category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_lenient_i64")]
    difficulty: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResponse<QuestionsPage> {
    let questions = questions::get_all_questions(&pool).await?;
    let total_questions = questions.len();
    let questions = page_or_not_found(page, questions)?;

    Ok(Json(QuestionsPage {
        success: true,
        questions,
        total_questions,
        categories: Some(categories_by_id(&pool).await?),
        current_category: None,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    ApiJson(new_question): ApiJson<NewQuestion>,
) -> ApiResponse<Success> {
    let id = questions::create_question(
        &pool,
        new_question.question.as_deref(),
        new_question.answer.as_deref(),
        new_question.category,
        new_question.difficulty,
    )
    .await
    .or_api_error(ApiError::BadRequest)?;

    tracing::info!(id, "Question created");
    Ok(Success::ok())
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResponse<Success> {
    let deleted = questions::delete_question(&pool, id)
        .await
        .or_api_error(ApiError::Unprocessable)?;
    if deleted == 0 {
        return Err(ApiError::Unprocessable);
    }

    tracing::info!(id, "Question deleted");
    Ok(Success::ok())
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
    ApiJson(body): ApiJson<SearchBody>,
) -> ApiResponse<QuestionsPage> {
    let found = questions::search_questions(&pool, &body.search_term).await?;
    if found.is_empty() {
        return Err(ApiError::NotFound);
    }
    let total_questions = found.len();

    Ok(Json(QuestionsPage {
        success: true,
        questions: page_or_not_found(page, found)?,
        total_questions,
        categories: None,
        current_category: None,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/search", post(search_questions))
        .with_state(state)
}
