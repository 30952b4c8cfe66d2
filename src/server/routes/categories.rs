use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::queries::{categories::get_category, questions::get_questions_for_category},
    server::{
        app::AppState,
        errors::{ApiError, OrApiError},
        pagination::{page_or_not_found, PageQuery},
    },
};

use super::{categories_by_id, ApiPath, ApiResponse, QuestionsPage};

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesResponse> {
    let categories = categories_by_id(&pool)
        .await
        .or_api_error(ApiError::NotFound)?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

async fn category_questions(
    State(pool): State<SqlitePool>,
    ApiPath(category_id): ApiPath<i64>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResponse<QuestionsPage> {
    let category = get_category(&pool, category_id)
        .await
        .or_api_error(ApiError::NotFound)?
        .ok_or(ApiError::NotFound)?;
    let questions = get_questions_for_category(&pool, category.id)
        .await
        .or_api_error(ApiError::NotFound)?;
    let total_questions = questions.len();

    Ok(Json(QuestionsPage {
        success: true,
        questions: page_or_not_found(page, questions)?,
        total_questions,
        categories: None,
        current_category: Some(category.kind),
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(category_questions))
        .with_state(state)
}
