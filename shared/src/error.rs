use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ReservationConflict(String),
    #[error(transparent)]
    ValidationError(#[from] garde::Report),
    #[error("transaction failed to commit")]
    TransactionError(#[source] sqlx::Error),
    #[error("database operation failed")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub detail: String,
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_)
            | AppError::UnprocessableEntity(_)
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ReservationConflict(_) => StatusCode::CONFLICT,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::ConversionEntityError(_)
            | AppError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();
        let message = match status_code {
            StatusCode::NOT_FOUND => "Entity not found",
            StatusCode::BAD_REQUEST => "Bad request",
            StatusCode::CONFLICT => "Conflict",
            _ => "Internal server error",
        };
        // Full cause chain is logged; the client only sees a generic
        // detail for uncategorized failures.
        let detail = if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "unexpected error happened"
            );
            "unexpected error".to_string()
        } else {
            tracing::warn!(error.message = %self, "request rejected");
            self.to_string()
        };
        let body = ErrorResponse {
            message: message.to_string(),
            timestamp: Utc::now(),
            detail,
        };
        (status_code, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::EntityNotFound("Not found reservation by id = 1".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn precondition_violations_map_to_400() {
        let err = AppError::UnprocessableEntity("Start date must be before end date".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let err = AppError::InvalidRequest("status should be empty".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = AppError::ReservationConflict("room 5 already reserved".into());
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn uncategorized_failures_map_to_500() {
        let err = AppError::NoRowsAffectedError("no reservation updated".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
