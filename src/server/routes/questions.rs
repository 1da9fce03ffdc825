use axum::{
    extract::{Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_option_number_from_string;
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::{category_map, get_all_categories},
            questions,
        },
        NewQuestion, Question,
    },
    pagination::paginate,
    server::{
        app::AppState,
        deserializers::{IdPath, JsonBody, LookupBody},
        error::ApiError,
    },
    telemetry::QUESTIONS_CREATED_CNTR,
};

use super::{JsonResponse, PageQuery};

#[derive(Deserialize)]
struct QuestionBody {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
}

impl TryFrom<QuestionBody> for NewQuestion {
    type Error = ApiError;

    // empty strings and zeroes count as missing
    fn try_from(body: QuestionBody) -> Result<Self, Self::Error> {
        let text = |field: Option<String>, name: &str| {
            field
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ApiError::BadRequest(format!("field `{name}` is required")))
        };
        let number = |field: Option<i64>, name: &str| {
            field
                .filter(|v| *v != 0)
                .ok_or_else(|| ApiError::BadRequest(format!("field `{name}` is required")))
        };
        Ok(NewQuestion {
            question: text(body.question, "question")?,
            answer: text(body.answer, "answer")?,
            category: number(body.category, "category")?,
            difficulty: number(body.difficulty, "difficulty")?,
        })
    }
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

async fn get_questions(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> JsonResponse {
    let all = questions::get_all_questions(&pool).await?;
    let page_questions = paginate(&all, page);
    if page_questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = get_all_categories(&pool).await?;
    Ok(Json(json!({
        "success": true,
        "questions": page_questions,
        "total_questions": all.len(),
        "categories": category_map(categories),
    })))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    JsonBody(body): JsonBody<QuestionBody>,
) -> JsonResponse {
    let new = NewQuestion::try_from(body)?;
    let id = questions::create_question(&pool, &new).await.map_err(|e| {
        tracing::error!("Failed to insert question: {}", e);
        ApiError::BadRequest(e.to_string())
    })?;
    QUESTIONS_CREATED_CNTR.inc();
    tracing::info!(id, category = new.category, "Question created");

    let question = Question {
        id,
        question: new.question,
        answer: new.answer,
        category: new.category,
        difficulty: new.difficulty,
    };
    Ok(Json(json!({
        "success": true,
        "message": "Question successfully added to the database!",
        "question": question,
    })))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath<i64>,
) -> JsonResponse {
    if !questions::delete_question(&pool, id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!(id, "Question deleted");
    Ok(Json(json!({
        "success": true,
        "id": id,
        "message": "Question deleted successfully!",
    })))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
    LookupBody(body): LookupBody<SearchBody>,
) -> JsonResponse {
    let found = questions::search_questions(&pool, &body.search_term).await?;
    let results = paginate(&found, page);
    if results.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({
        "success": true,
        "questions": results,
        "total_questions": found.len(),
        "current_category": null,
    })))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(get_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
