use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every failure maps onto one of three envelopes: 400, 404 or 422.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) | ApiError::Database(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn message(&self) -> &'static str {
        match self.status() {
            StatusCode::BAD_REQUEST => "bad request",
            StatusCode::NOT_FOUND => "resource not found",
            _ => "unprocessable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Database(e) => tracing::error!("Database error: {}", e),
            ApiError::NotFound => tracing::debug!("{}", self),
            _ => tracing::info!("{}", self),
        }

        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> ApiError {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Rejection of [`LookupBody`](super::deserializers::LookupBody).
pub struct LookupRejection(ApiError);

impl From<JsonRejection> for LookupRejection {
    fn from(rejection: JsonRejection) -> LookupRejection {
        match rejection {
            JsonRejection::JsonDataError(e) => {
                LookupRejection(ApiError::Unprocessable(e.body_text()))
            }
            other => LookupRejection(ApiError::from(other)),
        }
    }
}

impl IntoResponse for LookupRejection {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> ApiError {
        ApiError::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn envelope(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn envelopes_carry_code_and_message() {
        let (status, body) = envelope(ApiError::BadRequest("missing answer".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"success": false, "error": 400, "message": "bad request"})
        );

        let (status, body) = envelope(ApiError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "resource not found");

        let (status, body) = envelope(ApiError::Database(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], 422);
        assert_eq!(body["message"], "unprocessable");
    }
}
