use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    db::queries::{
        categories::{category_map, get_all_categories},
        questions::get_questions_for_category,
    },
    pagination::paginate,
    server::{app::AppState, deserializers::IdPath, error::ApiError},
};

use super::{JsonResponse, PageQuery};

async fn get_categories(State(pool): State<SqlitePool>) -> JsonResponse {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({
        "success": true,
        "categories": category_map(categories),
    })))
}

async fn questions_for_category(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath<i64>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> JsonResponse {
    let filtered = get_questions_for_category(&pool, id).await?;
    if filtered.is_empty() {
        return Err(ApiError::NotFound);
    }
    let questions = paginate(&filtered, page);
    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": filtered.len(),
        "current_category": id,
    })))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
        .with_state(state)
}
