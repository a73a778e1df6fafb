use axum::http::StatusCode;
use thiserror::Error;
use tracing::error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: "not authenticated".to_string(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        error!("internal error: {err}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// A failed attempt to load the sales snapshot.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("sales request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("sales endpoint returned {0}")]
    Status(reqwest::StatusCode),
    #[error("sales payload is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
}
