use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Upstream fetch failure, markup drift, or malformed timestamp.
    #[error("upstream archive error: {0}")]
    Upstream(#[from] rozhlas::RozhlasError),

    /// Feed assembly or serialization failure.
    #[error("feed error: {0}")]
    Feed(#[from] feed::FeedError),
}

/// API error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Upstream(e) => {
                tracing::error!("Upstream archive error: {}", e);
                StatusCode::BAD_GATEWAY
            }
            AppError::Feed(feed::FeedError::Empty) => StatusCode::NOT_FOUND,
            AppError::Feed(e) => {
                tracing::error!("Feed serialization error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_errors_map_to_bad_gateway() {
        let err = AppError::Upstream(rozhlas::RozhlasError::Structure("markup drift".into()));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_empty_feed_maps_to_not_found() {
        let err = AppError::Feed(feed::FeedError::Empty);
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
