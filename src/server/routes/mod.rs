mod categories;
mod questions;
mod quizzes;

use std::collections::BTreeMap;

use axum::extract::{FromRequest, FromRequestParts};
use axum::Json;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::queries::categories::get_all_categories;
use crate::db::Question;

use super::errors::ApiError;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

pub type ApiResponse<T> = Result<Json<T>, ApiError>;

/// `axum::Json` whose rejections render as the bad request envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` whose rejections render as the bad request envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

#[derive(Serialize)]
pub struct Success {
    pub success: bool,
}

impl Success {
    pub fn ok() -> Json<Self> {
        Json(Self { success: true })
    }
}

#[derive(Serialize)]
pub struct QuestionsPage {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<i64, String>>,
    pub current_category: Option<String>,
}

/// Category id to label.
async fn categories_by_id(pool: &SqlitePool) -> sqlx::Result<BTreeMap<i64, String>> {
    Ok(get_all_categories(pool)
        .await?
        .into_iter()
        .map(|c| (c.id, c.kind))
        .collect())
}
