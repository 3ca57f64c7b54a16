use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("データベース処理実行中にエラーが発生しました。")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("ログインが必要です。")]
    UnauthenticatedError,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            AppError::EntityNotFound(e) => {
                // 適格性エラーも 404 で返すため、原因はログにだけ残す
                tracing::warn!(error.message = %e, "Entity not found");
                StatusCode::NOT_FOUND
            }
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            e @ (AppError::SpecificOperationError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        status_code.into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
