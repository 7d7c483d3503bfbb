use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ResourceConflict(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("トランザクションを実行できませんでした。")]
    TransactionError(#[source] sqlx::Error),
    #[error("データベース処理実行中にエラーが発生しました。")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("{0}")]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("{0}")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("認証されていません。")]
    UnauthenticatedError,
    #[error("許可されていない操作です。")]
    ForbiddenOperation,
    #[error("{0}")]
    ConversionEntityError(String),
}

pub type AppResult<T> = Result<T, AppError>;

// エラーレスポンスのボディ。code は機械処理用の安定した識別子で、
// message は人間向けの説明文。
#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::UnprocessableEntity(_)
            | AppError::ValidationError(_)
            | AppError::ConvertToUuidError(_) => "VALIDATION",
            AppError::EntityNotFound(_) => "NOT_FOUND",
            AppError::ResourceConflict(_) => "CONFLICT",
            AppError::UnauthenticatedError => "UNAUTHENTICATED",
            AppError::ForbiddenOperation => "FORBIDDEN",
            _ => "INTERNAL",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::UnprocessableEntity(_)
            | AppError::ValidationError(_)
            | AppError::ConvertToUuidError(_) => StatusCode::BAD_REQUEST,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ResourceConflict(_) => StatusCode::CONFLICT,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            e @ (AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::BcryptError(_)
            | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                // 内部の詳細は呼び出し元に漏らさない
                let body = ErrorResponse {
                    code: e.error_code(),
                    message: "内部エラーが発生しました。".into(),
                };
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };

        let body = ErrorResponse {
            code: self.error_code(),
            message: self.to_string(),
        };
        (status_code, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_follows_taxonomy() {
        assert_eq!(
            AppError::UnprocessableEntity("bad".into()).error_code(),
            "VALIDATION"
        );
        assert_eq!(
            AppError::EntityNotFound("missing".into()).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            AppError::ResourceConflict("dup".into()).error_code(),
            "CONFLICT"
        );
        assert_eq!(AppError::UnauthenticatedError.error_code(), "UNAUTHENTICATED");
        assert_eq!(AppError::ForbiddenOperation.error_code(), "FORBIDDEN");
        assert_eq!(
            AppError::NoRowsAffectedError("none".into()).error_code(),
            "INTERNAL"
        );
    }

    #[test]
    fn status_code_mapping() {
        let cases = [
            (
                AppError::UnprocessableEntity("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::EntityNotFound("missing".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::ResourceConflict("dup".into()),
                StatusCode::CONFLICT,
            ),
            (AppError::UnauthenticatedError, StatusCode::UNAUTHORIZED),
            (AppError::ForbiddenOperation, StatusCode::FORBIDDEN),
            (
                AppError::NoRowsAffectedError("none".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
