use crate::datasource::DataSourceError;
use crate::db::StoreError;
use crate::engine::{EstimateError, RecordError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    Internal(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Unprocessable: {0}")]
    Unprocessable(String),
    #[error("Upstream failure: {0}")]
    Upstream(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<DataSourceError> for AppError {
    fn from(err: DataSourceError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Duplicate { .. } => AppError::Conflict(err.to_string()),
            RecordError::EmptyKey(_) => AppError::BadRequest(err.to_string()),
            RecordError::Store(e) => e.into(),
        }
    }
}

impl From<EstimateError> for AppError {
    fn from(err: EstimateError) -> Self {
        match err {
            EstimateError::UndefinedProjection { .. } => AppError::Unprocessable(err.to_string()),
            EstimateError::ZeroLookback => AppError::Internal(err.to_string()),
            EstimateError::Balance(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventKind;

    #[test]
    fn test_duplicate_maps_to_conflict() {
        let err: AppError = RecordError::Duplicate {
            kind: EventKind::Swap,
            key: "0xabc".to_string(),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_undefined_projection_maps_to_unprocessable() {
        let err: AppError = EstimateError::UndefinedProjection {
            balance: 0,
            lookback_days: 10,
        }
        .into();
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_transport_failure_maps_to_bad_gateway() {
        let err: AppError = DataSourceError::NetworkError("down".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);

        let err: AppError =
            EstimateError::Balance(DataSourceError::ParseError("x".to_string())).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
