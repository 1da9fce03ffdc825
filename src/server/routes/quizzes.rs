use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    db::queries::{categories::get_category, questions::get_questions_for_category},
    quiz::next_question,
    server::{
        app::AppState,
        deserializers::{FlexibleId, LookupBody},
        error::ApiError,
    },
    telemetry::QUIZ_QUESTIONS_CNTR,
};

use super::JsonResponse;

#[derive(Deserialize)]
struct QuizBody {
    #[serde(default)]
    previous_questions: Vec<FlexibleId>,
    quiz_category: QuizCategory,
}

#[derive(Deserialize)]
struct QuizCategory {
    id: FlexibleId,
}

// Answers `question: null` once the category runs out of unseen questions
async fn next_quiz_question(
    State(pool): State<SqlitePool>,
    LookupBody(body): LookupBody<QuizBody>,
) -> JsonResponse {
    let category = body.quiz_category.id.0;
    if category == 0 {
        return Err(ApiError::Unprocessable("no quiz category selected".to_owned()));
    }
    if get_category(&pool, category).await?.is_none() {
        return Err(ApiError::Unprocessable(format!(
            "category {category} does not exist"
        )));
    }

    let previous: HashSet<i64> = body.previous_questions.into_iter().map(|id| id.0).collect();
    let candidates = get_questions_for_category(&pool, category).await?;
    let question = next_question(&candidates, &previous, category);

    match question {
        Some(q) => {
            QUIZ_QUESTIONS_CNTR
                .with_label_values(&[category.to_string().as_str()])
                .inc();
            tracing::debug!(id = q.id, category, "Serving quiz question");
        }
        None => tracing::info!(category, asked = previous.len(), "Quiz category exhausted"),
    }

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_quiz_question))
        .with_state(state)
}
