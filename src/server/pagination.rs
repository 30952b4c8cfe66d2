use serde::Deserialize;

use super::deserializers::deserialize_page;
use super::errors::ApiError;

pub const QUESTIONS_PER_PAGE: i64 = 10;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default = "first_page", deserialize_with = "deserialize_page")]
    pub page: i64,
}

pub fn first_page() -> i64 {
    1
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: first_page() }
    }
}

/// Slices `items` to the 1-based `page`: `[(page-1)*10, page*10)`.
///
/// Pages below 1 or past the end are empty.
pub fn paginate<T>(page: i64, items: Vec<T>) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
    let Ok(start) = usize::try_from(start) else {
        return Vec::new();
    };
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE as usize)
        .collect()
}

/// Like [`paginate`], but an empty page other than the first one is reported as not found.
pub fn page_or_not_found<T>(page: i64, items: Vec<T>) -> Result<Vec<T>, ApiError> {
    let slice = paginate(page, items);
    if slice.is_empty() && page != first_page() {
        return Err(ApiError::NotFound);
    }
    Ok(slice)
}
