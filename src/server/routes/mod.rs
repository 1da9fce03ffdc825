mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use super::deserializers::{deserialize_page, first_page};
use super::error::ApiError;

pub type ApiResponse<T> = Result<T, ApiError>;
pub type JsonResponse = ApiResponse<Json<Value>>;

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default = "first_page", deserialize_with = "deserialize_page")]
    page: usize,
}
